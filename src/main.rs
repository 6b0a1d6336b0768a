use clap::Parser;
use platform_features::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Directory(args) => commands::directory::run(args),
        cli::Commands::File(args) => commands::file::run(args),
        cli::Commands::InitConfig => commands::init_config::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
