use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use minicalc::ast::SyntaxTree;
use tracing_subscriber::filter::LevelFilter;

/// minicalc evaluates integer arithmetic expressions built from `+`, `-`,
/// `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minicalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree of every expression before its result.
    #[arg(short, long)]
    tree: bool,

    /// Makes logging more verbose; repeat for even more output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression, or a path when `--file` is given. Without it an
    /// interactive prompt reads one expression per line.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(contents) = args.contents else {
        return match repl(args.tree) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut ok = true;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        ok &= run_line(line, args.tree);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Installs a stderr log subscriber; `verbose` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

/// Reads expressions from stdin until end of input or an empty line.
fn repl(show_tree: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let expression = line.trim_end_matches(['\n', '\r']);
        if expression.is_empty() {
            return Ok(());
        }
        run_line(expression, show_tree);
    }
}

/// Parses and evaluates one line, printing diagnostics or the result.
///
/// Returns `false` if the line had diagnostics or failed to evaluate.
fn run_line(line: &str, show_tree: bool) -> bool {
    let tree = SyntaxTree::parse(line);
    if show_tree {
        print!("{tree}");
    }

    if tree.has_errors() {
        for diagnostic in tree.diagnostics() {
            println!("{}", diagnostic.render(line));
        }
        return false;
    }

    match tree.evaluate() {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            println!("{e}");
            false
        },
    }
}
