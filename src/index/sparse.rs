use std::collections::HashMap;

use crate::bed::IntervalGroups;
use crate::types::Interval;

/// Sorted-run index: intervals stay unexpanded, one run per chromosome.
/// Memory grows with the interval count; lookups are a predecessor binary
/// search plus a backward scan bounded by the local overlap depth.
#[derive(Debug, Default)]
pub(crate) struct SparseIndex {
    chroms: HashMap<String, SparseChrom>,
}

#[derive(Debug)]
struct SparseChrom {
    /// Sorted ascending by start; the sort is stable so records sharing a
    /// start keep their file order
    intervals: Vec<Interval>,
    /// max_end[i] is the largest end among intervals[..=i]; once it drops
    /// to the query position the backward scan can stop
    max_end: Vec<u64>,
}

impl SparseChrom {
    fn build(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_by_key(|interval| interval.start);
        let mut max_end = Vec::with_capacity(intervals.len());
        let mut running = 0;
        for interval in &intervals {
            running = running.max(interval.end);
            max_end.push(running);
        }
        Self { intervals, max_end }
    }

    fn lookup(&self, pos: u64) -> Option<&str> {
        // Everything before `upper` starts at or before pos; overlap means
        // the rightmost of those is not guaranteed to reach past pos, so
        // walk back until a containing interval or until nothing earlier
        // can still reach it.
        let upper = self.intervals.partition_point(|interval| interval.start <= pos);
        for i in (0..upper).rev() {
            if self.max_end[i] <= pos {
                break;
            }
            let interval = &self.intervals[i];
            if interval.end > pos {
                return Some(interval.name.as_str());
            }
        }
        None
    }
}

impl SparseIndex {
    pub(crate) fn build(groups: IntervalGroups) -> Self {
        let chroms = groups
            .into_iter()
            .map(|(chrom, intervals)| (chrom, SparseChrom::build(intervals)))
            .collect();
        Self { chroms }
    }

    pub(crate) fn lookup(&self, chrom: &str, pos: u64) -> Option<&str> {
        self.chroms.get(chrom)?.lookup(pos)
    }

    pub(crate) fn chromosomes(&self) -> Vec<&str> {
        self.chroms.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(intervals: Vec<Interval>) -> SparseIndex {
        let mut groups = IntervalGroups::new();
        groups.insert("chr1".to_string(), intervals);
        SparseIndex::build(groups)
    }

    #[test]
    fn test_lookup_respects_half_open_bounds() {
        let index = build(vec![Interval::new(100, 200, "geneA")]);
        assert_eq!(index.lookup("chr1", 100), Some("geneA"));
        assert_eq!(index.lookup("chr1", 199), Some("geneA"));
        assert_eq!(index.lookup("chr1", 99), None);
        assert_eq!(index.lookup("chr1", 200), None);
    }

    #[test]
    fn test_predecessor_without_containment_is_no_match() {
        let index = build(vec![
            Interval::new(0, 10, "geneA"),
            Interval::new(100, 110, "geneB"),
            Interval::new(200, 210, "geneC"),
        ]);
        assert_eq!(index.lookup("chr1", 150), None);
        assert_eq!(index.lookup("chr1", 50), None);
        assert_eq!(index.lookup("chr1", 300), None);
    }

    #[test]
    fn test_backward_scan_finds_enclosing_interval() {
        // The predecessor of 700 is "mid", which ends before it; the scan
        // has to walk back past "inner" to reach "outer".
        let index = build(vec![
            Interval::new(0, 1000, "outer"),
            Interval::new(10, 20, "inner"),
            Interval::new(500, 600, "mid"),
        ]);
        assert_eq!(index.lookup("chr1", 700), Some("outer"));
        assert_eq!(index.lookup("chr1", 550), Some("mid"));
        assert_eq!(index.lookup("chr1", 15), Some("inner"));
    }

    #[test]
    fn test_overlap_resolves_to_greatest_start() {
        let index = build(vec![
            Interval::new(100, 200, "geneA"),
            Interval::new(150, 250, "geneB"),
        ]);
        assert_eq!(index.lookup("chr1", 125), Some("geneA"));
        assert_eq!(index.lookup("chr1", 175), Some("geneB"));
    }

    #[test]
    fn test_shared_start_resolves_to_later_record() {
        let index = build(vec![
            Interval::new(100, 200, "first"),
            Interval::new(100, 300, "second"),
        ]);
        assert_eq!(index.lookup("chr1", 150), Some("second"));
    }

    #[test]
    fn test_empty_run_is_no_match() {
        let index = build(Vec::new());
        assert_eq!(index.lookup("chr1", 0), None);
    }
}
