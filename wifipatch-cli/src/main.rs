use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wifipatch_cli::commands;

#[derive(Parser)]
#[command(name = "wifipatch")]
#[command(about = "Wifipatch - Read and rewrite WiFi credentials in firmware images", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the WiFi configuration stored in a firmware image
    Read {
        /// Firmware file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Print the password instead of masking it
        #[arg(long)]
        show_password: bool,
    },

    /// Verify configuration integrity
    Verify {
        /// Firmware file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Also fail on duplicate records or non-UTF-8 credentials
        #[arg(long)]
        strict: bool,
    },

    /// Replace the WiFi credentials in a firmware image
    Write {
        /// Firmware file to modify
        #[arg(short, long)]
        input: String,

        /// WiFi SSID to set
        #[arg(long)]
        ssid: String,

        /// WiFi password to set
        #[arg(long)]
        password: String,

        /// Write the patched image here instead of in place
        #[arg(short, long)]
        output: Option<String>,

        /// Skip creating backup file
        #[arg(long)]
        no_backup: bool,

        /// Write the first record even if a duplicate is present
        #[arg(long)]
        first: bool,
    },

    /// Analyze every configuration signature in a firmware image
    Scan {
        /// Input file to scan
        #[arg(short, long)]
        input: String,

        /// Output JSON file for scan results
        #[arg(short, long)]
        output: Option<String>,

        /// Dump the raw bytes of each candidate
        #[arg(long)]
        hexdump: bool,
    },

    /// Create a test firmware image containing one record
    Create {
        /// Output firmware file
        #[arg(short, long)]
        output: String,

        /// WiFi SSID
        #[arg(long, default_value = "TestWiFi")]
        ssid: String,

        /// WiFi password
        #[arg(long, default_value = "TestPassword123")]
        password: String,

        /// Zero bytes before the record
        #[arg(long, default_value_t = commands::create::DEFAULT_LEAD)]
        lead: usize,

        /// 0xFF bytes after the record
        #[arg(long, default_value_t = commands::create::DEFAULT_TAIL)]
        tail: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Read {
            input,
            json,
            show_password,
        } => commands::read::execute(&input, json, show_password),

        Commands::Verify { input, strict } => commands::verify::execute(&input, strict),

        Commands::Write {
            input,
            ssid,
            password,
            output,
            no_backup,
            first,
        } => commands::write::execute(
            &input,
            &ssid,
            &password,
            &commands::write::WriteOptions {
                output: output.as_deref(),
                backup: !no_backup,
                allow_duplicate: first,
            },
        ),

        Commands::Scan {
            input,
            output,
            hexdump,
        } => commands::scan::execute(&input, output.as_deref(), hexdump),

        Commands::Create {
            output,
            ssid,
            password,
            lead,
            tail,
        } => commands::create::execute(&output, &ssid, &password, lead, tail),
    }
}
