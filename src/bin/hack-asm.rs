use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hack_rs::{assemble_with, write_words, SymbolTable};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble Hack .asm sources into .hack binary text"
)]
struct Opts {
    /// Output file (single input only; default: input with a .hack extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Export the final symbol table as JSON (single input only)
    #[arg(long, value_name = "FILE")]
    symbols_out: Option<PathBuf>,
    /// Input assembly files, each translated independently
    #[arg(value_name = "ASMFILE", required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct SymbolKV {
    addr: u16,
    name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    if opts.inputs.len() > 1 {
        anyhow::ensure!(
            opts.output.is_none() && opts.symbols_out.is_none(),
            "--output and --symbols-out take a single input file"
        );
    }

    for input in &opts.inputs {
        let source =
            fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;

        // Each file gets its own symbol table; names never leak between files.
        let mut symbols = SymbolTable::new();
        let words = assemble_with(&source, &mut symbols)
            .with_context(|| format!("assembling {}", input.display()))?;

        let target = match &opts.output {
            Some(path) => path.clone(),
            None => input.with_extension("hack"),
        };
        let mut text = Vec::new();
        write_words(&words, &mut text)?;
        fs::write(&target, &text).with_context(|| format!("writing {}", target.display()))?;
        info!(
            "{} -> {} ({} words)",
            input.display(),
            target.display(),
            words.len()
        );

        if let Some(path) = &opts.symbols_out {
            let mut kvs: Vec<SymbolKV> = symbols
                .entries()
                .map(|(name, addr)| SymbolKV {
                    addr,
                    name: name.to_string(),
                })
                .collect();
            kvs.sort_by(|a, b| a.addr.cmp(&b.addr).then_with(|| a.name.cmp(&b.name)));
            fs::write(path, serde_json::to_string_pretty(&kvs)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}
