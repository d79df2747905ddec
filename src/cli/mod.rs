pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crex",
    about = "Boolean retrieval over a skip-pointer inverted index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a boolean query (AND, OR, |, leading - for NOT)
    Search {
        /// Path to the term dictionary file
        #[arg(short, long)]
        dict: String,

        /// Path to the document list file
        #[arg(short = 'D', long)]
        docs: String,

        /// The query string; quote it so the shell keeps it whole
        query: String,

        /// Emit results as JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// List dictionary terms sharing a prefix
    Prefix {
        /// Path to the term dictionary file
        #[arg(short, long)]
        dict: String,

        /// Path to the document list file
        #[arg(short = 'D', long)]
        docs: String,

        /// The term prefix to enumerate
        prefix: String,

        /// Emit results as JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// Expand a *-pattern and evaluate the matching terms as a disjunction
    Wildcard {
        /// Path to the term dictionary file
        #[arg(short, long)]
        dict: String,

        /// Path to the document list file
        #[arg(short = 'D', long)]
        docs: String,

        /// The pattern, e.g. "yok*" or "y*l"
        pattern: String,

        /// Emit results as JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },

    /// Exact phrase lookup through a bigram dictionary
    Phrase {
        /// Path to the term dictionary file
        #[arg(short, long)]
        dict: String,

        /// Path to the document list file
        #[arg(short = 'D', long)]
        docs: String,

        /// Path to the bigram (two-word) dictionary file
        #[arg(short, long)]
        bigrams: String,

        /// The phrase text
        text: String,

        /// Emit results as JSON instead of the human listing
        #[arg(long)]
        json: bool,
    },
}
