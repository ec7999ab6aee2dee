use clap::{Parser, Subcommand};

use crate::pagination::PageSize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Premium Beach Tennis Tour ranking page")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the ranking page server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print one page of a group's ranking
    Ranking {
        /// Group value, e.g. "Grupo das 18"
        #[arg(short, long, default_value = "Grupo das 18")]
        group: String,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Rows per page: 10, 25, 50 or all
        #[arg(long = "page-size", default_value = "10")]
        page_size: PageSize,
    },
}
