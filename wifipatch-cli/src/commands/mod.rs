//! One module per `wifipatch` subcommand

pub mod create;
pub mod read;
pub mod scan;
pub mod verify;
pub mod write;
