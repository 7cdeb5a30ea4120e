//! Batch point annotation against a built index.
//!
//! The streaming counterpart of the query engine: read tab-delimited point
//! records (one observation per line), look each one up, and write the
//! record back out with the overlapping feature appended as a final
//! column. Header lines starting with `#` pass through untouched.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;

use crate::index::BedIndex;
use crate::{Error, Result};

/// Column selection and chromosome normalization for point files
#[derive(Debug, Clone)]
pub struct Options {
    /// Zero-based column holding the chromosome token
    pub chrom_col: usize,
    /// Zero-based column holding the position
    pub pos_col: usize,
    /// Prepend `chr` to chromosome tokens that lack it, for pipelines
    /// emitting bare contig names like `7` or `X`
    pub chr_prefix: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            chrom_col: 0,
            pos_col: 1,
            chr_prefix: false,
        }
    }
}

/// Outcome counts from one annotation pass
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Summary {
    pub records: u64,
    pub matched: u64,
}

/// Annotate every record of the points file at `path`, writing the
/// augmented records to `out`.
pub fn annotate_file<W: Write>(
    index: &BedIndex,
    path: &Path,
    out: &mut W,
    options: &Options,
) -> Result<Summary> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path.display().to_string();
    annotate_reader(index, BufReader::new(file), &label, out, options)
}

/// Annotate records from any buffered reader; `file` labels error and log
/// messages.
pub fn annotate_reader<R: BufRead, W: Write>(
    index: &BedIndex,
    reader: R,
    file: &str,
    out: &mut W,
    options: &Options,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx as u64 + 1;
        let line = line.map_err(|e| Error::Parse {
            file: file.to_string(),
            line: lineno,
            message: format!("read failed: {}", e),
        })?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            writeln!(out, "{}", line)?;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let chrom = field(&fields, options.chrom_col, file, lineno)?;
        let raw_pos = field(&fields, options.pos_col, file, lineno)?;
        let position: i64 = raw_pos.parse().map_err(|_| Error::InvalidPosition {
            file: file.to_string(),
            line: lineno,
            value: raw_pos.to_string(),
        })?;

        let chrom: Cow<'_, str> = if options.chr_prefix && !chrom.starts_with("chr") {
            Cow::Owned(format!("chr{}", chrom))
        } else {
            Cow::Borrowed(chrom)
        };

        let feature = index.lookup(&chrom, position);
        summary.records += 1;
        if feature.is_some() {
            summary.matched += 1;
        }
        writeln!(out, "{}\t{}", line, feature.unwrap_or(""))?;
    }

    tracing::info!(
        "annotated {} records from {} ({} matched)",
        summary.records,
        file,
        summary.matched
    );
    Ok(summary)
}

fn field<'a>(fields: &[&'a str], col: usize, file: &str, line: u64) -> Result<&'a str> {
    fields.get(col).copied().ok_or_else(|| Error::Parse {
        file: file.to_string(),
        line,
        message: format!("missing column {} (record has {})", col + 1, fields.len()),
    })
}
