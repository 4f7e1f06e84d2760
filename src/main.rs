//! `doctext` command line: runs one text operation over a file or stdin.
//!
//! Results go to stdout; logs go to stderr and follow `RUST_LOG`
//! (default `warn`). A failed operation prints `error: <reason>` to stderr
//! and exits with status 1.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use doctext::{
    DEFAULT_CHUNK_SIZE, DoctextConfig, ProcessorConfig, clean_text, count_words, process_text,
    reverse_text, split_into_chunks, split_into_overlapping_chunks,
};

#[derive(Parser)]
#[command(name = "doctext")]
#[command(about = "Clean, count, reverse and chunk document text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop carriage returns, collapse whitespace and trim
    Clean(InputArgs),
    /// Print the number of whitespace-delimited words
    Count(InputArgs),
    /// Print the text reversed
    Reverse(InputArgs),
    /// Print one chunk of words per line
    Chunks {
        #[command(flatten)]
        input: InputArgs,

        /// Words per chunk
        #[arg(long, short = 's', allow_negative_numbers = true)]
        #[arg(default_value_t = DEFAULT_CHUNK_SIZE as i64)]
        size: i64,

        /// Words shared by consecutive chunks; must be smaller than --size
        #[arg(long, short = 'o', allow_negative_numbers = true, default_value_t = 0)]
        overlap: i64,
    },
    /// Clean, count and chunk; print the result as JSON
    Process {
        #[command(flatten)]
        input: InputArgs,

        /// YAML configuration file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted
    path: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> io::Result<String> {
        match &self.path {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Clean(input) => println!("{}", clean_text(&input.read()?)),
        Commands::Count(input) => println!("{}", count_words(&input.read()?)),
        Commands::Reverse(input) => print!("{}", reverse_text(&input.read()?)),
        Commands::Chunks {
            input,
            size,
            overlap,
        } => {
            let text = input.read()?;
            let chunks = if overlap == 0 {
                split_into_chunks(&text, size)?
            } else {
                split_into_overlapping_chunks(&text, size, overlap)?
            };
            for chunk in chunks {
                println!("{chunk}");
            }
        }
        Commands::Process { input, config } => {
            let cfg = match config {
                Some(path) => DoctextConfig::from_file(path)?.processor_config(),
                None => ProcessorConfig::default(),
            };
            let processed = process_text(&input.read()?, &cfg)?;
            println!("{}", serde_json::to_string_pretty(&processed)?);
        }
    }

    Ok(())
}
