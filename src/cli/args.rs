use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Ingest card transaction CSVs and serve ledger queries
#[derive(Parser, Debug)]
#[command(name = "card-ledger")]
#[command(about = "Ingest card transaction CSVs and serve ledger queries", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available operating modes
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Socket address to bind
        #[arg(
            long = "bind",
            value_name = "ADDR",
            default_value = "127.0.0.1:3001",
            help = "Socket address for the API server"
        )]
        bind: SocketAddr,
    },

    /// Process a transaction CSV offline and print the card table
    Process {
        /// Input CSV file path containing transaction rows
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_serve_uses_default_bind() {
        let parsed = CliArgs::try_parse_from(["card-ledger", "serve"]).unwrap();

        match parsed.command {
            Command::Serve { bind } => assert_eq!(bind.to_string(), "127.0.0.1:3001"),
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_accepts_custom_bind() {
        let parsed =
            CliArgs::try_parse_from(["card-ledger", "serve", "--bind", "0.0.0.0:8080"]).unwrap();

        match parsed.command {
            Command::Serve { bind } => assert_eq!(bind.to_string(), "0.0.0.0:8080"),
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_process_takes_input_path() {
        let parsed = CliArgs::try_parse_from(["card-ledger", "process", "rows.csv"]).unwrap();

        match parsed.command {
            Command::Process { input_file } => {
                assert_eq!(input_file, PathBuf::from("rows.csv"));
            }
            _ => panic!("expected process command"),
        }
    }

    #[rstest]
    #[case::no_command(&["card-ledger"])]
    #[case::process_missing_input(&["card-ledger", "process"])]
    #[case::serve_invalid_bind(&["card-ledger", "serve", "--bind", "not-an-addr"])]
    #[case::unknown_command(&["card-ledger", "frobnicate"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
