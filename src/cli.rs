use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract features from every FASTQ file in a directory
    Directory(DirectoryArgs),

    /// Extract features from a single FASTQ file
    File(FileArgs),

    /// Write the default configuration file
    InitConfig,
}

#[derive(clap::Args, Debug)]
pub struct DirectoryArgs {
    /// Directory of FASTQ files. The label must be the second field of the
    /// file name, e.g. SRR123456.pacbio.fastq
    pub directory: PathBuf,

    /// Range of reads to sample. To process whole files, use "0 0"
    #[arg(short = 'r', long = "range", num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<u64>>,

    /// Print a header at the top of the feature file
    #[arg(short = 'd', long = "header")]
    pub header: bool,

    /// Where to write the features
    #[arg(short = 'o', long = "output", default_value = "stdout")]
    pub output: String,

    /// Print per-read quality features and accumulators to stderr
    #[arg(long)]
    pub debug: bool,

    /// Add the accession number as a column
    #[arg(long)]
    pub srr: bool,
}

#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// Input FASTQ file
    pub fastq_file: PathBuf,

    /// Range of reads to sample. To process the whole file, use "0 0"
    #[arg(short = 'r', long = "range", num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<u64>>,

    /// Print a header above the features
    #[arg(short = 'd', long = "header")]
    pub header: bool,

    /// Print per-read quality features and accumulators to stderr
    #[arg(long)]
    pub debug: bool,
}
