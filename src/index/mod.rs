//! Interval index construction and the point-query engine.
//!
//! An annotation file is parsed once, one of two in-memory representations
//! is built from it, and the resulting [`BedIndex`] answers repeated point
//! lookups until it is dropped. The representation is picked from the
//! file's byte size at construction and never changes afterwards:
//!
//! - [`Strategy::Dense`] expands every interval to per-position entries,
//!   trading memory for constant-time lookups on small inputs.
//! - [`Strategy::Sparse`] keeps intervals as sorted per-chromosome runs
//!   and answers queries with a binary search plus a bounded scan.
//!
//! Both representations implement the same lookup contract, so callers
//! never observe which one was chosen except through [`BedIndex::strategy`].
//!
//! # Example
//!
//! ```no_run
//! use bedseek::BedIndex;
//!
//! let index = BedIndex::open("annotations.bed")?;
//! if let Some(feature) = index.lookup("chr1", 1_234_567) {
//!     println!("{}", feature);
//! }
//! # Ok::<(), bedseek::Error>(())
//! ```

mod dense;
mod sparse;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use dense::DenseIndex;
use sparse::SparseIndex;

use crate::bed;
use crate::types::Strategy;
use crate::{Error, Result};

/// Annotation files at or below this many bytes are expanded into the
/// dense per-position representation
pub const DEFAULT_DENSE_LIMIT: u64 = 10 * 1024 * 1024;

#[derive(Debug)]
enum Repr {
    Dense(DenseIndex),
    Sparse(SparseIndex),
}

/// Immutable point-query index over one BED annotation file.
///
/// Construction either fully succeeds or fails with an error; no partial
/// index is ever observable. Once built the index holds no mutable state
/// beyond its diagnostic counters, so it can be queried from any number of
/// threads without locking.
///
/// When a position is covered by more than one record, the dense
/// representation answers with the record latest in file order while the
/// sparse one answers with the containing record of greatest start (ties
/// going to the later record). The two agree whenever later records do not
/// start before the earlier ones they overlap.
#[derive(Debug)]
pub struct BedIndex {
    repr: Repr,
    strategy: Strategy,
    file_size: u64,
    intervals: usize,
    queries: AtomicU64,
    hits: AtomicU64,
}

/// Diagnostic counters accumulated across lookups
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndexStats {
    pub queries: u64,
    pub hits: u64,
}

impl BedIndex {
    /// Build an index from `path` using [`DEFAULT_DENSE_LIMIT`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_dense_limit(path, DEFAULT_DENSE_LIMIT)
    }

    /// Build an index from `path`, expanding to the dense representation
    /// only when the file is at most `dense_limit` bytes.
    pub fn with_dense_limit(path: impl AsRef<Path>, dense_limit: u64) -> Result<Self> {
        let path = path.as_ref();
        let file_size = fs::metadata(path)
            .map_err(|source| Error::FileAccess {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        let strategy = Strategy::select(file_size, dense_limit);
        let groups = bed::read_intervals(path)?;
        let intervals = groups.values().map(Vec::len).sum();

        let repr = match strategy {
            Strategy::Dense => Repr::Dense(DenseIndex::build(groups)),
            Strategy::Sparse => Repr::Sparse(SparseIndex::build(groups)),
        };
        tracing::info!(
            "indexed {} ({} bytes, {} intervals) with the {} strategy",
            path.display(),
            file_size,
            intervals,
            strategy.as_str()
        );
        Ok(Self {
            repr,
            strategy,
            file_size,
            intervals,
            queries: AtomicU64::new(0),
            hits: AtomicU64::new(0),
        })
    }

    /// Feature overlapping `position` on `chromosome`, if any.
    ///
    /// Chromosomes absent from the annotation file and positions covered
    /// by no interval are the ordinary no-match outcome, never an error.
    /// Negative positions fall outside every stored interval and are
    /// likewise no-match.
    pub fn lookup(&self, chromosome: &str, position: i64) -> Option<&str> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let pos = u64::try_from(position).ok()?;
        let hit = match &self.repr {
            Repr::Dense(index) => index.lookup(chromosome, pos),
            Repr::Sparse(index) => index.lookup(chromosome, pos),
        };
        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    /// Representation chosen at construction
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Byte size of the source annotation file
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Number of indexed intervals
    pub fn len(&self) -> usize {
        self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals == 0
    }

    /// Indexed chromosome names, sorted
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut names = match &self.repr {
            Repr::Dense(index) => index.chromosomes(),
            Repr::Sparse(index) => index.chromosomes(),
        };
        names.sort_unstable();
        names
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            queries: self.queries.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}
