//! End-to-end tests driving the index from real annotation files on disk.

use std::io::Write;

use bedseek::{BedIndex, Error, Strategy, annotate};
use tempfile::NamedTempFile;

fn write_bed(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_single_record_end_to_end() {
    let bed = write_bed("chr1\t100\t200\tgeneA\n");
    let index = BedIndex::open(bed.path()).unwrap();
    assert_eq!(index.lookup("chr1", 150), Some("geneA"));
    assert_eq!(index.lookup("chr1", 250), None);
    assert_eq!(index.lookup("chr2", 10), None);
}

#[test]
fn test_non_overlapping_intervals_hit_exactly_inside() {
    let contents = "chr1\t100\t200\tgeneA\nchr1\t300\t400\tgeneB\nchr2\t0\t50\tgeneC\n";
    let bed = write_bed(contents);
    let index = BedIndex::open(bed.path()).unwrap();

    for pos in 100..200 {
        assert_eq!(index.lookup("chr1", pos), Some("geneA"));
    }
    for pos in 300..400 {
        assert_eq!(index.lookup("chr1", pos), Some("geneB"));
    }
    for pos in 200..300 {
        assert_eq!(index.lookup("chr1", pos), None);
    }
    assert_eq!(index.lookup("chr2", 25), Some("geneC"));
    assert_eq!(index.lookup("chr2", 50), None);
}

#[test]
fn test_dense_and_sparse_agree_across_the_threshold() {
    let contents = "\
# reference features
chr1\t100\t200\tgeneA
chr1\t150\t250\tgeneB
chr1\t300\t400\tgeneC
chr2\t0\t50\tgeneD
chrX\t10\t20
";
    let bed = write_bed(contents);
    let dense = BedIndex::with_dense_limit(bed.path(), u64::MAX).unwrap();
    let sparse = BedIndex::with_dense_limit(bed.path(), 0).unwrap();
    assert_eq!(dense.strategy(), Strategy::Dense);
    assert_eq!(sparse.strategy(), Strategy::Sparse);

    for chrom in ["chr1", "chr2", "chrX", "chr7"] {
        for pos in -5..500 {
            assert_eq!(
                dense.lookup(chrom, pos),
                sparse.lookup(chrom, pos),
                "{}:{}",
                chrom,
                pos
            );
        }
    }
}

#[test]
fn test_overlap_resolution_is_deterministic() {
    let bed = write_bed("chr1\t100\t200\tgeneA\nchr1\t150\t250\tgeneB\n");
    for dense_limit in [u64::MAX, 0] {
        let index = BedIndex::with_dense_limit(bed.path(), dense_limit).unwrap();
        for _ in 0..10 {
            assert_eq!(index.lookup("chr1", 175), Some("geneB"));
        }
        assert_eq!(index.lookup("chr1", 125), Some("geneA"));
        assert_eq!(index.lookup("chr1", 225), Some("geneB"));
    }
}

#[test]
fn test_absent_chromosome_never_errors() {
    let bed = write_bed("chr1\t100\t200\tgeneA\n");
    let index = BedIndex::open(bed.path()).unwrap();
    assert_eq!(index.lookup("chrM", 0), None);
    assert_eq!(index.lookup("", 100), None);
}

#[test]
fn test_empty_annotation_file() {
    let bed = write_bed("");
    let index = BedIndex::open(bed.path()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.lookup("chr1", 0), None);
    assert_eq!(index.lookup("chr1", 1_000_000), None);
}

#[test]
fn test_header_only_file_yields_empty_index() {
    let bed = write_bed("# generated\ntrack name=genes\n");
    let index = BedIndex::open(bed.path()).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_unnamed_feature_matches_with_empty_name() {
    let bed = write_bed("chr1\t100\t200\n");
    let index = BedIndex::open(bed.path()).unwrap();
    assert_eq!(index.lookup("chr1", 150), Some(""));
}

#[test]
fn test_construction_failures_surface_with_context() {
    let missing = BedIndex::open("/no/such/file.bed").unwrap_err();
    assert!(matches!(missing, Error::FileAccess { .. }));

    let bed = write_bed("chr1\t100\t200\tgeneA\nbroken line\n");
    let malformed = BedIndex::open(bed.path()).unwrap_err();
    match malformed {
        Error::Parse { file, line, .. } => {
            assert_eq!(line, 2);
            assert!(!file.is_empty());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_concurrent_lookups_share_one_index() {
    let bed = write_bed("chr1\t100\t200\tgeneA\nchr2\t0\t50\tgeneB\n");
    let index = BedIndex::open(bed.path()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for pos in 0..300 {
                    index.lookup("chr1", pos);
                    index.lookup("chr2", pos);
                }
            });
        }
    });

    assert_eq!(index.stats().queries, 4 * 300 * 2);
    assert_eq!(index.lookup("chr1", 150), Some("geneA"));
}

#[test]
fn test_annotate_points_file_end_to_end() {
    let bed = write_bed("chr1\t100\t200\tgeneA\nchr2\t0\t50\tgeneB\n");
    let index = BedIndex::open(bed.path()).unwrap();

    let mut points = NamedTempFile::new().unwrap();
    points
        .write_all(b"# chrom\tpos\tid\nchr1\t150\trs1\nchr1\t999\trs2\nchr2\t25\trs3\n")
        .unwrap();
    points.flush().unwrap();

    let mut out = Vec::new();
    let summary = annotate::annotate_file(
        &index,
        points.path(),
        &mut out,
        &annotate::Options::default(),
    )
    .unwrap();

    assert_eq!(summary.records, 3);
    assert_eq!(summary.matched, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "# chrom\tpos\tid\nchr1\t150\trs1\tgeneA\nchr1\t999\trs2\t\nchr2\t25\trs3\tgeneB\n"
    );
}
