use indicatif::ProgressBar;
use platform_features::{
    AggregatorOptions, DirectoryAggregator, ExtractionOptions, FeatureError, ReadWindow,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_fastq(dir: &Path, name: &str, lengths: &[usize], qual: char) {
    let mut text = String::new();
    for (i, &len) in lengths.iter().enumerate() {
        text.push_str(&format!("@{}.{}\n", name, i + 1));
        text.push_str(&"A".repeat(len));
        text.push_str("\n+\n");
        text.push_str(&qual.to_string().repeat(len));
        text.push('\n');
    }
    fs::write(dir.join(name), text).unwrap();
}

fn sample_directory() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_fastq(dir.path(), "SRR111.illumina.fastq", &[100, 100, 101, 99], '5');
    write_fastq(dir.path(), "SRR222.pacbio.fastq", &[5000, 12000, 800, 30000, 2500], '+');
    fs::write(dir.path().join("README.txt"), "not a fastq").unwrap();
    dir
}

fn aggregator(header: bool, accession_column: bool) -> DirectoryAggregator {
    DirectoryAggregator::new(AggregatorOptions {
        extraction: ExtractionOptions::new(ReadWindow::new(1, 3000), false),
        header,
        accession_column,
        ..Default::default()
    })
}

fn run(agg: &DirectoryAggregator, dir: &Path) -> (usize, String) {
    let mut out = Vec::new();
    let count = agg.run(dir, &mut out, &ProgressBar::hidden()).expect("directory run");
    (count, String::from_utf8(out).unwrap())
}

#[test]
fn header_and_accession_rows() {
    let dir = sample_directory();
    let (count, output) = run(&aggregator(true, true), dir.path());

    assert_eq!(count, 2);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("avg_length\t"));
    assert!(lines[0].ends_with("label\taccession_number"));

    // Listing order is not guaranteed
    let mut tails: Vec<(String, String)> = lines[1..]
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 11);
            (fields[9].to_string(), fields[10].to_string())
        })
        .collect();
    tails.sort();
    assert_eq!(
        tails,
        vec![
            ("illumina".to_string(), "SRR111".to_string()),
            ("pacbio".to_string(), "SRR222".to_string()),
        ]
    );
}

#[test]
fn rows_without_header_or_accession() {
    let dir = sample_directory();
    let (count, output) = run(&aggregator(false, false), dir.path());

    assert_eq!(count, 2);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 10);
        assert!(fields[9] == "illumina" || fields[9] == "pacbio");
    }
    let illumina = lines.iter().find(|l| l.ends_with("\tillumina")).unwrap();
    assert!(illumina.starts_with("100.0\t99\t101\t100.0\t"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = sample_directory();
    let agg = aggregator(true, true);
    let (_, first) = run(&agg, dir.path());
    let (_, second) = run(&agg, dir.path());

    let mut first: Vec<&str> = first.lines().collect();
    let mut second: Vec<&str> = second.lines().collect();
    first.sort();
    second.sort();
    assert_eq!(first, second);
}

#[test]
fn empty_directory_writes_only_header() {
    let dir = tempfile::tempdir().unwrap();
    let (count, output) = run(&aggregator(true, false), dir.path());
    assert_eq!(count, 0);
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn malformed_file_name_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_fastq(dir.path(), "unlabelled.fastq", &[100, 120], 'I');
    let mut out = Vec::new();
    let result = aggregator(false, false).run(dir.path(), &mut out, &ProgressBar::hidden());
    assert!(matches!(result, Err(FeatureError::InvalidFileName { .. })));
}

#[test]
fn file_with_too_few_reads_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_fastq(dir.path(), "SRR333.nanopore.fastq", &[4000], '#');
    let mut out = Vec::new();
    let result = aggregator(false, false).run(dir.path(), &mut out, &ProgressBar::hidden());
    match result {
        Err(FeatureError::InFile { path, source }) => {
            assert!(path.ends_with("SRR333.nanopore.fastq"));
            assert!(matches!(*source, FeatureError::InsufficientReads { found: 1 }));
        }
        other => panic!("expected per-file error, got {:?}", other),
    }
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let result = aggregator(false, false).run(
        &dir.path().join("nope"),
        &mut out,
        &ProgressBar::hidden(),
    );
    assert!(matches!(result, Err(FeatureError::Io(_))));
}
