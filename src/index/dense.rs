use std::collections::HashMap;

use crate::bed::IntervalGroups;

/// Position-expanded index: every covered coordinate maps straight to the
/// feature covering it. Memory grows with covered bases, lookups are one
/// hash probe.
#[derive(Debug, Default)]
pub(crate) struct DenseIndex {
    chroms: HashMap<String, DenseChrom>,
}

#[derive(Debug, Default)]
struct DenseChrom {
    /// Feature names in file order, one per source interval
    names: Vec<String>,
    /// Covered position -> index into `names`
    positions: HashMap<u64, u32>,
}

impl DenseIndex {
    /// Expand `groups` position by position. Intervals are processed in
    /// file order, so at overlapping positions the later record wins.
    pub(crate) fn build(groups: IntervalGroups) -> Self {
        let mut chroms = HashMap::with_capacity(groups.len());
        for (chrom, intervals) in groups {
            let mut group = DenseChrom::default();
            for interval in intervals {
                let id = group.names.len() as u32;
                for pos in interval.start..interval.end {
                    group.positions.insert(pos, id);
                }
                group.names.push(interval.name);
            }
            chroms.insert(chrom, group);
        }
        Self { chroms }
    }

    pub(crate) fn lookup(&self, chrom: &str, pos: u64) -> Option<&str> {
        let group = self.chroms.get(chrom)?;
        let id = *group.positions.get(&pos)?;
        Some(group.names[id as usize].as_str())
    }

    pub(crate) fn chromosomes(&self) -> Vec<&str> {
        self.chroms.keys().map(String::as_str).collect()
    }
}
