//! Card Ledger CLI
//!
//! Entry point for the card transaction ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- serve
//! cargo run -- serve --bind 0.0.0.0:8080
//! cargo run -- process transactions.csv > cards.csv
//! ```
//!
//! `serve` runs the HTTP API (upload, cards, collections,
//! bad-transactions, reset). `process` ingests a CSV file once and
//! prints the resulting card table to stdout; bad rows are reported on
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad arguments, file not found, bind failure, etc.)

use card_ledger::cli::{self, Command};
use card_ledger::{ingest, server};
use std::process;

#[tokio::main]
async fn main() {
    let args = cli::parse_args();

    let result = match args.command {
        Command::Serve { bind } => server::serve(bind).await,
        Command::Process { input_file } => {
            let mut output = std::io::stdout();
            ingest::process_file(&input_file, &mut output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
