//! Prints a minimal-size string containing every IPv4 address.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use conip::{spawn_terms, ConipError, Encoding, Separator, Sink, Terms};

/// Prints the de Bruijn sequence B(256, 4) beginning with four zeros.
///
/// Read in consecutive windows of four terms, the output contains every
/// IPv4 address exactly once. Text output is around 14.2 GiB; binary output
/// is exactly 2^32 + 3 bytes.
#[derive(Parser, Debug)]
#[command(name = "conip", version, about)]
struct Cli {
    /// Output raw bytes instead of decimal text
    #[arg(long)]
    bin: bool,

    /// In text mode, separate terms by lines instead of "."
    #[arg(short = 'n', long = "newline")]
    newline: bool,

    /// Output buffer size in bytes
    #[arg(long, default_value_t = 4096)]
    buf: usize,

    /// Output file name; standard output if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn encoding(&self) -> Encoding {
        if self.bin {
            Encoding::Binary
        } else if self.newline {
            Encoding::Text(Separator::Newline)
        } else {
            Encoding::Text(Separator::Dot)
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConipError> {
    // Open the destination before any generation work starts.
    let dest: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConipError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };
    let sink = Sink::new(dest, cli.encoding(), cli.buf)?;
    sink.consume(spawn_terms(Terms::new()))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
