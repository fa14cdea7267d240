//! Runs graph commands from a script file (or stdin) and prints the replies.
//!
//! Usage:
//!   cargo run --example graph_session -- path/to/script.txt
//!   cat script.txt | cargo run --example graph_session
//!   cargo run --example graph_session -- --undirected --strict -
//!
//! One command per line; `#` starts a comment:
//!
//!   vertex A
//!   edge A B 2 directional
//!   path A B

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use labelgraph::{
    Directedness, GraphStore,
    session::Session,
    tracing_support::init_tracing,
};

/// Build a graph from commands and print query results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script file path (use '-' or omit to read from stdin)
    input: Option<String>,

    /// Start in undirected mode instead of directed mode
    #[arg(long)]
    undirected: bool,

    /// Report duplicate vertices and unknown endpoints instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// Keep going after a failing line
    #[arg(long)]
    keep_going: bool,

    /// Log every graph operation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input = match args.input.as_deref() {
        Some("-") | None => read_stdin_or_exit(),
        Some(path) => read_file_or_exit(path),
    };

    let directedness = Directedness::from_directed(!args.undirected);
    let mut session = Session::new(GraphStore::with_directedness(directedness)).strict(args.strict);

    let mut failures = 0;
    for (index, line) in input.lines().enumerate() {
        match session.run_line(line) {
            Ok(Some(reply)) => println!("{reply}"),
            Ok(None) => {}
            Err(err) => {
                eprintln!("line {}: {err}", index + 1);
                failures += 1;
                if !args.keep_going {
                    process::exit(1);
                }
            }
        }
    }

    let graph = session.graph();
    eprintln!(
        "{} graph with {} vertices and {} edges",
        graph.directedness(),
        graph.order(),
        graph.size()
    );
    if failures > 0 {
        process::exit(1);
    }
}

fn read_stdin_or_exit() -> String {
    let mut buffer = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("Failed to read stdin: {err}");
        process::exit(1);
    }
    buffer
}

fn read_file_or_exit(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read '{path}': {err}");
            process::exit(1);
        }
    }
}
