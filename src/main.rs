use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use regexp_acceptor::{DEFAULT_MAX_NESTING, Options, accept, parse_literal};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Patterns to check; read one per line from stdin if none are given
    #[arg(value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Use the grammar of the `u` flag
    #[arg(short = 'u', long)]
    unicode: bool,

    /// Inputs are `/pattern/flags` literals; the flags select the grammar
    #[arg(short = 'l', long)]
    literal: bool,

    /// Reject patterns whose groups nest deeper than this
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Print nothing; report only through the exit status
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options::new()
            .unicode(self.unicode)
            .max_nesting(self.max_nesting)
    }

    /// Check one input, printing the verdict unless quiet.
    fn check(&self, input: &str) -> bool {
        let accepted = if self.literal {
            match parse_literal(input) {
                Ok(literal) => accept(literal.pattern, literal.options(self.options())),
                Err(err) => {
                    log::warn!("{input:?}: {err}");
                    false
                }
            }
        } else {
            accept(input, self.options())
        };
        if !self.quiet {
            println!("{}\t{}", if accepted { "accept" } else { "reject" }, input);
        }
        accepted
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let mut all_accepted = true;
    if args.patterns.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read pattern from stdin")?;
            all_accepted &= args.check(&line);
        }
    } else {
        for pattern in &args.patterns {
            all_accepted &= args.check(pattern);
        }
    }

    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
