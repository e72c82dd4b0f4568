//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ChemKED: ReSpecTh to ChemKED converter
#[derive(Parser)]
#[command(name = "chemked")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a ReSpecTh XML file to a ChemKED YAML file
    Convert {
        /// Path to the ReSpecTh XML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (default: alongside the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File author name to override the original
        #[arg(long = "file-author")]
        file_author: Option<String>,

        /// ORCID of the file author
        #[arg(long = "file-author-orcid")]
        file_author_orcid: Option<String>,

        /// Skip the Crossref DOI lookup (references keep their bare DOI)
        #[arg(long)]
        offline: bool,
    },

    /// Validate an existing ChemKED YAML file
    Validate {
        /// Path to the ChemKED YAML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
