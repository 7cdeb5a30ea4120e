use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bedseek::{
    BedIndex, Config,
    annotate::{self, Options},
    config::Command,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match config.command {
        Command::Lookup {
            bed,
            chromosome,
            positions,
            json,
        } => {
            let index = BedIndex::with_dense_limit(&bed, config.dense_limit)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for position in positions {
                let feature = index.lookup(&chromosome, position);
                if json {
                    let row = serde_json::json!({
                        "chromosome": chromosome,
                        "position": position,
                        "feature": feature,
                    });
                    writeln!(out, "{}", row)?;
                } else {
                    // "." is the conventional missing-value marker
                    writeln!(out, "{}", feature.unwrap_or("."))?;
                }
            }
        }

        Command::Annotate {
            bed,
            points,
            chrom_col,
            pos_col,
            chr_prefix,
            output,
        } => {
            let index = BedIndex::with_dense_limit(&bed, config.dense_limit)?;
            let options = Options {
                chrom_col: chrom_col.saturating_sub(1),
                pos_col: pos_col.saturating_sub(1),
                chr_prefix,
            };
            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            match &points {
                Some(path) => annotate::annotate_file(&index, path, &mut out, &options)?,
                None => annotate::annotate_reader(
                    &index,
                    io::stdin().lock(),
                    "<stdin>",
                    &mut out,
                    &options,
                )?,
            };
            out.flush()?;
        }

        Command::Inspect { bed, json } => {
            let index = BedIndex::with_dense_limit(&bed, config.dense_limit)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                let report = serde_json::json!({
                    "file": bed.display().to_string(),
                    "bytes": index.file_size(),
                    "strategy": index.strategy(),
                    "chromosomes": index.chromosomes().len(),
                    "intervals": index.len(),
                });
                writeln!(out, "{}", report)?;
            } else {
                writeln!(out, "file\t{}", bed.display())?;
                writeln!(out, "bytes\t{}", index.file_size())?;
                writeln!(out, "strategy\t{}", index.strategy().as_str())?;
                writeln!(out, "chromosomes\t{}", index.chromosomes().len())?;
                writeln!(out, "intervals\t{}", index.len())?;
            }
        }
    }

    Ok(())
}
