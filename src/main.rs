mod cli;
mod error;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::Parser;
use log::{debug, info, log_enabled, Level, LevelFilter};
use yaxpeax_8086::{BinaryDump, Listing, HEADER};

use crate::cli::Args;
use crate::error::Error;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    run(&args)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let data = fs::read(&args.input)
        .map_err(|source| Error::Read { path: args.input.clone(), source })?;

    if log_enabled!(Level::Debug) {
        for line in BinaryDump(&data).lines() {
            debug!("{}", line);
        }
    }

    let count = match args.output_path() {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|source| Error::Write { path: path.clone(), source })?;
            let count = disassemble(&data, BufWriter::new(file), &args.input, &path)?;
            info!("wrote {} instructions to {}", count, path.display());
            count
        }
        None => {
            let stdout = io::stdout();
            disassemble(&data, stdout.lock(), &args.input, Path::new("<stdout>"))?
        }
    };

    debug!("{} instructions decoded from {}", count, args.input.display());
    Ok(())
}

/// write the listing for `data` to `out`. whatever was decoded before a malformed instruction is
/// flushed before the error is returned.
fn disassemble<W: Write>(data: &[u8], mut out: W, input: &Path, output: &Path) -> Result<usize, Error> {
    let write_error = |source| Error::Write { path: output.to_path_buf(), source };

    out.write_all(HEADER.as_bytes()).map_err(write_error)?;

    let mut listing = Listing::new(data);
    let mut count = 0;
    let mut malformed = None;
    for entry in &mut listing {
        match entry {
            Ok((offset, inst)) => {
                let fields = inst.fields();
                debug!(
                    "{:#06x}: {} instruction found with: W={}, D={}, MOD={}, REG={}, RM={}",
                    offset,
                    inst.opcode(),
                    fields.width(),
                    fields.direction(),
                    fields.mode(),
                    fields.reg(),
                    fields.rm(),
                );
                writeln!(out, "{}", inst).map_err(write_error)?;
                count += 1;
            }
            Err(error) => {
                malformed = Some(error);
                break;
            }
        }
    }

    if listing.skipped() > 0 {
        debug!("skipped {} unrecognized bytes", listing.skipped());
    }

    out.flush().map_err(write_error)?;

    match malformed {
        Some(error) => Err(Error::Malformed { path: input.to_path_buf(), error }),
        None => Ok(count),
    }
}
