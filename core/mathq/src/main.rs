mod adapter;
mod cli;
mod usecase;
mod wiring;

use std::io;
use std::process;

use cli::parse_args;
use common::error::Error;
use usecase::run_question;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("mathq: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;

    if config.help {
        print_help();
        return Ok(0);
    }

    let question = config
        .question
        .ok_or_else(|| Error::invalid_argument("No question provided."))?;

    let app = wiring::wire();
    let mut out = io::stdout();
    run_question(&app.processor, &question, &mut out)?;
    Ok(0)
}

fn print_usage() {
    eprintln!("Usage: mathq <question>");
}

fn print_help() {
    println!("Usage: mathq <question>");
    println!();
    println!("Process a complex mathematical question into a step-by-step pseudo-algorithm.");
    println!();
    println!("Arguments:");
    println!("  <question>    A complex mathematical question to process");
    println!();
    println!("Options:");
    println!("  -h, --help    Show this help message");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY    Bearer token for the chat completions endpoint.");
    println!("                    If unset, the request is sent without Authorization.");
}
