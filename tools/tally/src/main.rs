//! tally CLI
//!
//! Debugging front end for the CSV tokenizer.

mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "fields" | "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tally {command} <file.csv>");
                return ExitCode::FAILURE;
            };

            let mut stdout = std::io::stdout().lock();
            let result = if command == "fields" {
                commands::dump_fields(path, &mut stdout)
            } else {
                commands::check_file(path, &mut stdout)
            };

            match result {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber, but only when `RUST_LOG` is set.
///
/// Use `RUST_LOG=tally_tokenizer=trace` to see every extracted field.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    println!("tally - CSV field tokenizer");
    println!();
    println!("Usage: tally <command> [options]");
    println!();
    println!("Commands:");
    println!("  fields <file.csv>   Print every field with its row:column");
    println!("  check <file.csv>    Tokenize the whole file and report the first error");
    println!("  help                Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tally_tokenizer=trace) for debug output.");
}
