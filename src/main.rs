use std::env;
use std::error::Error;
use std::io;
use std::process;

use rusty_teller::logging::init_logging;

fn main() {
    init_logging();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run -- commands.csv".into());
    }
    rusty_teller::run(&args[1], io::stdout())
}
