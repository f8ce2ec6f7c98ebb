use clap::Parser;
use std::io;

mod cli;
use cli::{display, Cli};

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match extrema::run(&mut input, &mut output, &config) {
        Ok(report) => {
            if cli.verbose {
                display::report(&report);
            }
        }
        Err(e) => {
            display::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
