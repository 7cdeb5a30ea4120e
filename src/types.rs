use serde::Serialize;

/// Half-open genomic interval `[start, end)` carrying its feature name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
    pub name: String,
}

impl Interval {
    pub fn new(start: u64, end: u64, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    pub fn contains(&self, pos: u64) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Index representation, fixed once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every interval expanded to one entry per covered position
    Dense,
    /// Intervals kept unexpanded in sorted per-chromosome runs
    Sparse,
}

impl Strategy {
    /// Pick the representation for an annotation file of `file_size` bytes.
    ///
    /// Files at or below `dense_limit` trade memory for O(1) lookups;
    /// larger files keep memory proportional to the interval count.
    pub fn select(file_size: u64, dense_limit: u64) -> Self {
        if file_size <= dense_limit {
            Strategy::Dense
        } else {
            Strategy::Sparse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Sparse => "sparse",
        }
    }
}
