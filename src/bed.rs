//! Streaming BED annotation parser.
//!
//! Reads tab-delimited interval records one line at a time so that peak
//! memory during parsing stays bounded regardless of which index
//! representation gets built afterwards. Records come out grouped by
//! chromosome in file-encounter order; sorting is left to the index that
//! needs it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::Interval;
use crate::{Error, Result};

/// Parser output: chromosome -> intervals in file order
pub type IntervalGroups = HashMap<String, Vec<Interval>>;

/// Parse a BED file into per-chromosome interval lists.
///
/// Lines starting with `#` or `track` are headers and skipped, as are
/// blank lines. A record needs at least chrom, start and end; the fourth
/// column, when present, is the feature name (empty string otherwise) and
/// any further columns are ignored. Malformed records abort the whole
/// parse with the offending 1-based line number.
pub fn read_intervals(path: &Path) -> Result<IntervalGroups> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path.display().to_string();
    parse_reader(BufReader::new(file), &label)
}

fn parse_reader<R: BufRead>(reader: R, file: &str) -> Result<IntervalGroups> {
    let mut groups: IntervalGroups = HashMap::new();
    let mut records: u64 = 0;

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx as u64 + 1;
        let line = line.map_err(|e| parse_error(file, lineno, format!("read failed: {}", e)))?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') || line.starts_with("track") {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(chrom), Some(start), Some(end)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_error(
                file,
                lineno,
                "expected at least 3 tab-separated fields".to_string(),
            ));
        };
        let name = fields.next().unwrap_or("");

        let start: u64 = start
            .parse()
            .map_err(|_| parse_error(file, lineno, format!("invalid start {:?}", start)))?;
        let end: u64 = end
            .parse()
            .map_err(|_| parse_error(file, lineno, format!("invalid end {:?}", end)))?;
        if start >= end {
            return Err(parse_error(
                file,
                lineno,
                format!("empty interval: start {} >= end {}", start, end),
            ));
        }

        groups
            .entry(chrom.to_string())
            .or_default()
            .push(Interval::new(start, end, name));
        records += 1;
    }

    tracing::debug!(
        "parsed {} records across {} chromosomes from {}",
        records,
        groups.len(),
        file
    );
    Ok(groups)
}

fn parse_error(file: &str, line: u64, message: String) -> Error {
    Error::Parse {
        file: file.to_string(),
        line,
        message,
    }
}
