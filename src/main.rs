mod analysis;
mod args;

use clap::Parser;
use log::{info, LevelFilter};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    match analysis::run(&args) {
        Ok(_) => info!("Analysis completed successfully."),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
