use clap::Parser;

use avusync_cli::{logging, Args};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(e) = avusync_cli::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
