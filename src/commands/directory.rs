use crate::aggregate::{AggregatorOptions, DirectoryAggregator};
use crate::cli::DirectoryArgs;
use crate::config::Config;
use crate::features::ExtractionOptions;
use crate::utils::ProgressBarBuilder;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn run(args: DirectoryArgs) -> Result<()> {
    let tick = Local::now();
    eprintln!("Extracting features...");
    eprintln!("Started at: {}", tick);
    eprintln!("{:?}", args);

    let config = Config::load()?;
    let window = super::resolve_window(args.range.as_deref(), &config)?;
    eprintln!(
        "Read window: {}..={}, extensions: {:?}",
        window.start, window.end, config.extensions
    );
    let aggregator = DirectoryAggregator::new(AggregatorOptions {
        extraction: ExtractionOptions::new(window, args.debug),
        header: args.header,
        accession_column: args.srr,
        extensions: config.extensions.clone(),
    });

    let mut writer: Box<dyn Write> = match args.output.as_str() {
        "stdout" | "-" => Box::new(BufWriter::new(io::stdout().lock())),
        path => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?,
        )),
    };

    let progress = ProgressBarBuilder::new(format!("Scanning {}", args.directory.display()))
        .with_tick()
        .hidden(args.debug)
        .build()?;
    let count = aggregator
        .run(&args.directory, &mut writer, &progress)
        .with_context(|| {
            format!("Failed to extract features from {}", args.directory.display())
        })?;
    writer.flush()?;
    progress.finish_and_clear();

    let tock = Local::now();
    eprintln!("There were {} files processed.", count);
    eprintln!("The process took time: {}", format_elapsed(tock - tick));
    Ok(())
}

pub(crate) fn format_elapsed(elapsed: chrono::TimeDelta) -> String {
    let millis = elapsed.num_milliseconds();
    format!(
        "{}:{:02}:{:02}.{:03}",
        millis / 3_600_000,
        (millis / 60_000) % 60,
        (millis / 1000) % 60,
        millis % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(chrono::TimeDelta::milliseconds(1_234)), "0:00:01.234");
        assert_eq!(
            format_elapsed(chrono::TimeDelta::milliseconds(3_723_004)),
            "1:02:03.004"
        );
    }
}
