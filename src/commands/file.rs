use crate::cli::FileArgs;
use crate::config::Config;
use crate::features::{extract_file_features, ExtractionOptions, HEADER};
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn run(args: FileArgs) -> Result<()> {
    let config = Config::load()?;
    let window = super::resolve_window(args.range.as_deref(), &config)?;
    eprintln!("{:?}", args);
    eprintln!("Read window: {}..={}", window.start, window.end);
    let options = ExtractionOptions::new(window, args.debug);

    let result = extract_file_features(&args.fastq_file, &options).with_context(|| {
        format!("Failed to extract features from {}", args.fastq_file.display())
    })?;

    let mut out = io::stdout().lock();
    if args.header {
        writeln!(out, "{}", HEADER.join("\t"))?;
    }
    writeln!(out, "{}", result.features.to_fields().join("\t"))?;
    out.flush()?;

    eprintln!(
        "{} reads contributed ({} read, {} skipped)",
        result.read_count(),
        result.stats.read,
        result.stats.skipped
    );
    Ok(())
}
