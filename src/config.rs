use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::index::DEFAULT_DENSE_LIMIT;

#[derive(Debug, Parser)]
#[command(name = "bedseek")]
#[command(about = "Point queries against BED interval annotations")]
pub struct Config {
    /// Largest annotation file, in bytes, indexed with the dense
    /// per-position representation
    #[arg(long, env = "BEDSEEK_DENSE_LIMIT", default_value_t = DEFAULT_DENSE_LIMIT)]
    pub dense_limit: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the feature overlapping each queried position
    Lookup {
        /// BED annotation file
        bed: PathBuf,

        /// Chromosome to query
        chromosome: String,

        /// 0-based positions to query
        #[arg(required = true)]
        positions: Vec<i64>,

        /// Emit one JSON object per query instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Append the overlapping feature to each record of a points file
    Annotate {
        /// BED annotation file
        bed: PathBuf,

        /// Tab-delimited points file (stdin if omitted)
        points: Option<PathBuf>,

        /// 1-based column holding the chromosome
        #[arg(long, default_value_t = 1)]
        chrom_col: usize,

        /// 1-based column holding the position
        #[arg(long, default_value_t = 2)]
        pos_col: usize,

        /// Prepend "chr" to bare chromosome tokens
        #[arg(long)]
        chr_prefix: bool,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report how an annotation file would be indexed
    Inspect {
        /// BED annotation file
        bed: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
