//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cms_api::{Backend, Locale};

/// CMS page tool - Resolve field paths against page documents
#[derive(Parser, Debug)]
#[command(name = "cms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve field paths against a page document
    ///
    /// Prints one line per path; an empty line when the path does not
    /// resolve.
    ///
    /// Examples:
    ///   cms field home.json title                      # Custom object page
    ///   cms field home.json 'banners[1].image'         # Indexed path
    ///   cms field -b entries -l de -l en home.json title
    Field {
        /// JSON file holding the page document
        document: PathBuf,

        /// Field paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,

        /// Preferred locales, most preferred first
        #[arg(short, long = "locale")]
        locales: Vec<Locale>,

        /// Backend the document belongs to (entries or custom-objects)
        #[arg(short, long)]
        backend: Option<Backend>,

        /// Configuration file
        #[arg(short, long, env = "CMS_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the composed content of a custom object as JSON
    Compose {
        /// JSON file holding the custom object
        document: PathBuf,
    },

    /// Parse a CMS identifier of the form entryType:entryKey.fieldName
    Identifier {
        /// The identifier to parse
        id: String,
    },
}
