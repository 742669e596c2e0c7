//! Command-line runner for Hexagony programs.
//!
//! Usage: `hexagony <command> <program> [options]`

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use hexagony::source::{count_bytes, count_codepoints, count_debug, count_operators};
use hexagony::{describe, Hexagony, RunConfig, RunOutcome, SourceGrid, StateSnapshot};

#[derive(Parser, Debug)]
#[command(name = "hexagony")]
#[command(about = "Run and format programs written in the Hexagony esoteric language")]
struct Cli {
    /// Raise the default log filter to debug
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program until it halts or the tick limit is reached
    Run {
        /// Path to the program source
        program: PathBuf,

        /// Input text given to the program
        #[arg(long, conflicts_with = "input_file")]
        input: Option<String>,

        /// Read the program input from a file
        #[arg(long = "input-file")]
        input_file: Option<PathBuf>,

        /// Maximum number of ticks before giving up
        #[arg(long = "max-ticks", default_value_t = RunConfig::default().max_ticks)]
        max_ticks: u64,

        /// Run with every instruction pointer moving backwards
        #[arg(long)]
        reverse: bool,

        /// Print the final machine state as JSON after the output
        #[arg(long)]
        json: bool,
    },

    /// Pretty-print a program as a hexagon
    Layout {
        program: PathBuf,
    },

    /// Strip whitespace and trailing no-ops
    Minify {
        program: PathBuf,
    },

    /// Grow or shrink a program to another hexagon size
    Resize {
        program: PathBuf,

        /// Target side length
        size: usize,
    },

    /// Print size and character counts for a program
    Stats {
        program: PathBuf,
    },

    /// Describe what a single opcode does
    Explain {
        opcode: char,
    },
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,hexagony=info"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::Run { program, input, input_file, max_ticks, reverse, json } => {
            let source = read_source(&program);
            let input = match input_file {
                Some(path) => read_source(&path),
                None => input.unwrap_or_default(),
            };
            run(&source, &input, max_ticks, reverse, json);
        }
        Command::Layout { program } => {
            println!("{}", SourceGrid::parse(&read_source(&program)).layout_code());
        }
        Command::Minify { program } => {
            println!("{}", SourceGrid::parse(&read_source(&program)).minify_code());
        }
        Command::Resize { program, size } => {
            if size == 0 {
                error!("Hexagon size must be at least 1");
                process::exit(1);
            }
            println!("{}", SourceGrid::parse(&read_source(&program)).resize_code(size));
        }
        Command::Stats { program } => {
            let source = read_source(&program);
            let grid = SourceGrid::parse(&source);
            println!("size:       {}", grid.size());
            println!("codepoints: {}", count_codepoints(&source));
            println!("bytes:      {}", count_bytes(&source));
            println!("operators:  {}", count_operators(&source));
            println!("debug:      {}", count_debug(&source));
        }
        Command::Explain { opcode } => {
            println!("{}", describe(opcode));
        }
    }
}

fn run(source: &str, input: &str, max_ticks: u64, reverse: bool, json: bool) {
    let mut program = Hexagony::new(source, input);
    program.set_reverse(reverse);
    info!(size = program.size(), "Loaded program");

    let outcome = match program.run(&RunConfig { max_ticks }) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Execution failed: {}", e);
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(program.output()).and_then(|_| stdout.flush()) {
        error!("Failed to write output: {}", e);
        process::exit(1);
    }

    match outcome {
        RunOutcome::Terminated(reason) => {
            info!(ticks = program.ticks(), reason = reason.as_str(), "Program stopped");
        }
        RunOutcome::TickLimit => {
            warn!("Tick limit of {} reached before the program halted", max_ticks);
        }
    }

    if json {
        let edges = program.take_edge_traversals();
        let text = match StateSnapshot::capture(&program, &edges).to_json() {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize state: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = writeln!(stdout, "\n{}", text).and_then(|_| stdout.flush()) {
            error!("Failed to write state: {}", e);
            process::exit(1);
        }
    }

    if matches!(outcome, RunOutcome::TickLimit) {
        process::exit(2);
    }
}
