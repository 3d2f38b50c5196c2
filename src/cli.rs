use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

/// disassemble 8086 machine code into assembly `nasm` accepts
#[derive(Parser, Debug)]
#[command(name = "dis8086", version, about)]
pub struct Args {
    /// file of raw 8086 machine code
    pub input: PathBuf,

    /// where to write the listing [default: <INPUT>.asm]
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// write the listing to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// dump the input as binary and log the fields of every decoded instruction
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// the file the listing goes to, or `None` for standard output.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.stdout {
            return None;
        }
        Some(self.output.clone().unwrap_or_else(|| asm_path(&self.input)))
    }
}

/// `path` with `.asm` appended, keeping any extension it already has: `a.bin` becomes `a.bin.asm`.
pub fn asm_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".asm");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_appends_extension() {
        let args = Args::try_parse_from(["dis8086", "listings/listing_0037"]).unwrap();
        assert_eq!(args.output_path(), Some(PathBuf::from("listings/listing_0037.asm")));
        assert!(!args.verbose);
    }

    #[test]
    fn existing_extension_is_kept() {
        assert_eq!(asm_path(Path::new("prog.bin")), PathBuf::from("prog.bin.asm"));
    }

    #[test]
    fn explicit_output_and_stdout() {
        let args = Args::try_parse_from(["dis8086", "in", "-o", "out.s", "-v"]).unwrap();
        assert_eq!(args.output_path(), Some(PathBuf::from("out.s")));
        assert!(args.verbose);

        let args = Args::try_parse_from(["dis8086", "in", "--stdout"]).unwrap();
        assert_eq!(args.output_path(), None);
    }

    #[test]
    fn usage_errors() {
        assert!(Args::try_parse_from(["dis8086"]).is_err());
        assert!(Args::try_parse_from(["dis8086", "a", "b"]).is_err());
        assert!(Args::try_parse_from(["dis8086", "a", "-o", "b", "--stdout"]).is_err());
    }
}
