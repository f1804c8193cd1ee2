//! Kusari CLI binary.

use clap::Parser;
use kusari::cli::{args::KusariArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = KusariArgs::parse();

    // Set up logging/verbosity based on args if needed
    if std::env::var_os("RUST_LOG").is_none() {
        let level = match args.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        unsafe {
            std::env::set_var("RUST_LOG", level);
        }
    }
    env_logger::init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
