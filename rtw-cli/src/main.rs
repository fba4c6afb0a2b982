//! A command line interface to round-the-world route solver.
//!

mod commands;

use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Round The World Route Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to round-the-world route solver")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
