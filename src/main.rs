use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;
use text2arch::Version;

/// Fixed message shown instead of the raw decode error; the codec reports
/// the offending token, but callers get an all-or-nothing answer.
const DECODE_FALLBACK: &str =
    "Unable to decode: the input is not a valid arch word stream for the selected protocol.";

/// text2arch - reversible text obfuscation
///
/// Turns any UTF-8 text into a stream of four code words and back.
#[derive(Parser)]
#[command(name = "text2arch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a text file into an arch word stream
    Encode {
        /// Path to the file to encode
        path: PathBuf,

        /// Protocol: v1 (continuous stream) or v2 (line-oriented)
        #[arg(long, short, default_value = "v2")]
        protocol: Version,

        /// Write output here instead of stdout (.arch for v2, .bin for v1)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Decode an arch word stream back to text
    Decode {
        /// Path to the encoded file
        path: PathBuf,

        /// Protocol the file was encoded with
        #[arg(long, short, default_value = "v2")]
        protocol: Version,

        /// Write output here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn handle_encode(path: PathBuf, protocol: Version, out: Option<PathBuf>) -> Result<()> {
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let encoded = text2arch::encode(protocol, &content);

    match out {
        Some(out_path) => {
            fs::write(&out_path, &encoded)
                .with_context(|| format!("Failed to write output: {:?}", out_path))?;
            println!(
                "✓ Encoded {:?} with {} -> {:?} ({} bytes)",
                path,
                protocol,
                out_path,
                encoded.len()
            );
        }
        None => println!("{}", encoded),
    }

    Ok(())
}

fn handle_decode(path: PathBuf, protocol: Version, out: Option<PathBuf>) -> Result<()> {
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let decoded = match text2arch::decode(protocol, &content) {
        Ok(decoded) => decoded,
        Err(_) => {
            eprintln!("{}", DECODE_FALLBACK);
            process::exit(1);
        }
    };

    match out {
        Some(out_path) => {
            fs::write(&out_path, &decoded)
                .with_context(|| format!("Failed to write output: {:?}", out_path))?;
            println!("✓ Decoded {:?} with {} -> {:?}", path, protocol, out_path);
        }
        None => println!("{}", decoded),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            path,
            protocol,
            out,
        } => handle_encode(path, protocol, out),
        Commands::Decode {
            path,
            protocol,
            out,
        } => handle_decode(path, protocol, out),
        Commands::Version => {
            println!("text2arch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_encode_basic() {
        let cli = Cli::parse_from(["text2arch", "encode", "/some/file.txt"]);
        match cli.command {
            Commands::Encode {
                path,
                protocol,
                out,
            } => {
                assert_eq!(path, PathBuf::from("/some/file.txt"));
                assert_eq!(protocol, Version::V2);
                assert!(out.is_none());
            }
            _ => panic!("Expected Encode command"),
        }
    }

    #[test]
    fn test_cli_parses_encode_with_options() {
        let cli = Cli::parse_from([
            "text2arch",
            "encode",
            "/input.txt",
            "--protocol",
            "v1",
            "--out",
            "/output.bin",
        ]);
        match cli.command {
            Commands::Encode {
                path,
                protocol,
                out,
            } => {
                assert_eq!(path, PathBuf::from("/input.txt"));
                assert_eq!(protocol, Version::V1);
                assert_eq!(out, Some(PathBuf::from("/output.bin")));
            }
            _ => panic!("Expected Encode command"),
        }
    }

    #[test]
    fn test_cli_parses_decode() {
        let cli = Cli::parse_from(["text2arch", "decode", "/doc.arch", "-p", "v2"]);
        match cli.command {
            Commands::Decode { path, protocol, .. } => {
                assert_eq!(path, PathBuf::from("/doc.arch"));
                assert_eq!(protocol, Version::V2);
            }
            _ => panic!("Expected Decode command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_protocol() {
        let result = Cli::try_parse_from(["text2arch", "encode", "/f.txt", "--protocol", "v3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_version() {
        let cli = Cli::parse_from(["text2arch", "version"]);
        match cli.command {
            Commands::Version => {}
            _ => panic!("Expected Version command"),
        }
    }
}
