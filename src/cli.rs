//! Command line definition
//!
//! With no subcommand the desktop window opens; the subcommands run the
//! same backend operations headlessly.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docdesk")]
#[command(about = "Upload, list, delete and search documents; transcribe speech", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the document backend origin
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List uploaded files
    List,

    /// Upload a document
    Upload {
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Search uploaded documents
    Search {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Delete one file by name
    Delete {
        #[arg(required = true)]
        filename: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every uploaded file
    DeleteAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Record from the microphone and print the transcript
    Transcribe {
        /// Recording length in seconds (default from config)
        #[arg(short, long)]
        seconds: Option<u64>,
    },

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_args_is_gui() {
        assert_eq!(parse(&["docdesk"]).command, None);
    }

    #[test]
    fn test_parse_search_words() {
        match parse(&["docdesk", "search", "quarterly", "report"]).command {
            Some(Command::Search { query }) => assert_eq!(query.join(" "), "quarterly report"),
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_all_yes() {
        assert_eq!(
            parse(&["docdesk", "delete-all", "--yes"]).command,
            Some(Command::DeleteAll { yes: true })
        );
    }

    #[test]
    fn test_global_api_url() {
        let cli = parse(&["docdesk", "list", "--api-url", "http://localhost:8000"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cli.command, Some(Command::List));
    }

    #[test]
    fn test_no_gui_subcommand() {
        assert!(Cli::try_parse_from(["docdesk", "gui"]).is_err());
    }

    #[test]
    fn test_upload_requires_path() {
        assert!(Cli::try_parse_from(["docdesk", "upload"]).is_err());
    }
}
