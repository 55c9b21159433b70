use clap::Parser;
use i18nconv_cli::{Args, USAGE, logging};
use tracing::info;

fn usage() -> ! {
    eprint!("{}", USAGE);
    std::process::exit(2);
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    // Output always lands in the working directory.
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("i18n: {}", e);
            std::process::exit(1);
        }
    };

    // Without an input there is nothing to convert, whatever else was passed.
    let Some(config) = args.to_config(&cwd) else {
        usage();
    };

    match i18nconv::run(&config) {
        Ok(report) => info!("{}", report),
        Err(e) => {
            eprintln!("i18n: {}", e);
            std::process::exit(1);
        }
    }
}
