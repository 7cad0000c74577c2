use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use col_wire::codec::{Buffer, Reader, selected_path_name};
use col_wire::inspect::{ColumnType, decode_json, encode_json};
use col_wire::logging;
use col_wire::shared::config::CONFIG;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "colwire", version, about = "Inspect fixed-width native-protocol columns")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode column bytes into a JSON array
    Decode {
        /// Column type, e.g. UInt16 or DateTime64(3)
        #[arg(long = "type")]
        ty: String,
        /// Number of rows, taken from the block header
        #[arg(long)]
        rows: usize,
        /// Column bytes as hex
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        hex: Option<String>,
        /// File holding raw column bytes
        #[arg(long)]
        file: Option<PathBuf>,
        /// Fail if bytes remain after the column
        #[arg(long)]
        strict: bool,
    },
    /// Encode JSON values into column bytes, printed as hex
    Encode {
        #[arg(long = "type")]
        ty: String,
        /// One JSON value per row, e.g. 770 or "2024-01-01"
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn check_path_setting() {
    let expected = if CONFIG.codec.portable_path {
        "portable"
    } else {
        "native"
    };
    let compiled = selected_path_name();
    if compiled != expected {
        warn!(compiled, expected, "codec path differs from configuration");
    }
}

fn parse_value(raw: &str) -> Value {
    // Bare words such as 2024-01-01 are taken as strings.
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Decode {
            ty,
            rows,
            hex,
            file,
            strict,
        } => {
            let ty: ColumnType = ty.parse()?;
            let bytes = match (hex, file) {
                (Some(h), _) => hex::decode(h.trim()).context("invalid hex input")?,
                (None, Some(path)) => {
                    fs::read(&path).with_context(|| format!("reading {}", path.display()))?
                }
                (None, None) => bail!("either --hex or --file is required"),
            };

            let mut reader = Reader::new(&bytes);
            let values = decode_json(ty, &mut reader, rows)?;
            if strict && !reader.is_exhausted() {
                bail!("{} trailing bytes after {ty} column", reader.remaining());
            }
            info!(%ty, rows, consumed = reader.offset(), "decoded");
            writeln!(out, "{}", serde_json::to_string(&values)?)?;
        }
        Command::Encode { ty, values } => {
            let ty: ColumnType = ty.parse()?;
            let values: Vec<Value> = values.iter().map(|v| parse_value(v)).collect();

            let mut buffer = Buffer::with_capacity(values.len() * ty.width());
            encode_json(ty, &values, &mut buffer)?;
            info!(%ty, rows = values.len(), bytes = buffer.len(), "encoded");
            writeln!(out, "{}", hex::encode(buffer.as_slice()))?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;
    check_path_setting();
    run(cli)
}
