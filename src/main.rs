use std::process;

use clap::Parser;
use icss_values_rs::cli::{Args, run};

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}
