mod cli;
mod codec;
mod config;
mod ledger;
mod model;
mod storage;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
