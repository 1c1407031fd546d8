use std::io;

use crate::classify::{classify, scrub, Line};
use crate::encode::{AsmError, Encoder};
use crate::symbols::SymbolTable;

/// Pass 1: bind every `(Name)` to the index of the instruction that
/// follows it. Labels and skipped lines do not advance the counter, so
/// consecutive labels all land on the same address. The counter
/// saturates at `u16::MAX`: a declaration past the address space binds
/// out of range and fails at its first reference.
pub fn resolve_labels(source: &str, symbols: &mut SymbolTable) {
    let mut next_instr: u16 = 0;
    for raw in source.lines() {
        let line = scrub(raw);
        match classify(&line) {
            Line::Skip => {}
            Line::Label(name) => symbols.define_label(name, next_instr),
            Line::Address(_) | Line::Computation(_) => {
                next_instr = next_instr.saturating_add(1);
            }
        }
    }
}

/// Two-pass translation against a caller-owned symbol table. The table
/// is left holding every label and variable the source defined.
pub fn assemble_with(source: &str, symbols: &mut SymbolTable) -> Result<Vec<u16>, AsmError> {
    resolve_labels(source, symbols);
    let mut encoder = Encoder::new(symbols);
    let mut words = Vec::new();
    for raw in source.lines() {
        if let Some(word) = encoder.encode_line(raw)? {
            words.push(word);
        }
    }
    Ok(words)
}

/// Assemble one source text with a fresh symbol table.
pub fn assemble(source: &str) -> Result<Vec<u16>, AsmError> {
    let mut symbols = SymbolTable::new();
    assemble_with(source, &mut symbols)
}

/// Write words in the external form: sixteen `0`/`1` characters per
/// word, one word per line.
pub fn write_words<W: io::Write>(words: &[u16], out: &mut W) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word:016b}")?;
    }
    Ok(())
}
