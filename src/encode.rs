use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, scrub, Line};
use crate::symbols::SymbolTable;
use crate::tables::{comp_bits, jump_bits};

/// Largest operand an address instruction can carry (15 bits).
pub const ADDR_MAX: u16 = 0x7fff;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Dest: u16 {
        const A = 0b100;
        const D = 0b010;
        const M = 0b001;
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("Malformed instruction: {line}")]
    MalformedInstruction { line: String },
    #[error("Unknown computation '{mnemonic}' in: {line}")]
    UnknownComp { mnemonic: String, line: String },
    #[error("Unknown jump '{mnemonic}' in: {line}")]
    UnknownJump { mnemonic: String, line: String },
    #[error("Address operand '{operand}' outside 0..=32767")]
    AddressOutOfRange { operand: String },
}

/// The fields of a computation instruction, split but not yet encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CParts<'a> {
    pub dest: Option<&'a str>,
    pub comp: &'a str,
    pub jump: Option<&'a str>,
}

/// Split `[dest=]comp[;jump]` on the first `=` and the first `;`.
/// Returns `None` when any present field is empty.
pub fn split_computation(text: &str) -> Option<CParts<'_>> {
    let (dest, rest) = match text.split_once('=') {
        Some((d, r)) => (Some(d), r),
        None => (None, text),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((c, j)) => (c, Some(j)),
        None => (rest, None),
    };
    if comp.is_empty() || dest.is_some_and(str::is_empty) || jump.is_some_and(str::is_empty) {
        return None;
    }
    Some(CParts { dest, comp, jump })
}

/// A register letter anywhere in the dest field sets its bit; order and
/// repetition carry no meaning. Letters other than A, D, M are ignored.
fn dest_flags(field: &str) -> Dest {
    let mut dest = Dest::empty();
    if field.contains('A') {
        dest |= Dest::A;
    }
    if field.contains('D') {
        dest |= Dest::D;
    }
    if field.contains('M') {
        dest |= Dest::M;
    }
    dest
}

fn encode_computation(line: &str) -> Result<u16, AsmError> {
    // Mnemonics never contain a slash, so the first one starts a comment.
    let body = &line[..line.find('/').unwrap_or(line.len())];
    let parts = split_computation(body).ok_or_else(|| AsmError::MalformedInstruction {
        line: line.to_string(),
    })?;
    let comp = comp_bits(parts.comp).ok_or_else(|| AsmError::UnknownComp {
        mnemonic: parts.comp.to_string(),
        line: line.to_string(),
    })?;
    let jump = match parts.jump {
        Some(j) => jump_bits(j).ok_or_else(|| AsmError::UnknownJump {
            mnemonic: j.to_string(),
            line: line.to_string(),
        })?,
        None => 0,
    };
    let dest = parts.dest.map_or(Dest::empty(), dest_flags);
    Ok(0b111 << 13 | comp << 6 | dest.bits() << 3 | jump)
}

/// Second-pass state. Holds the symbol table so address instructions can
/// allocate variables as they are first seen.
pub struct Encoder<'a> {
    symbols: &'a mut SymbolTable,
}

impl<'a> Encoder<'a> {
    pub fn new(symbols: &'a mut SymbolTable) -> Self {
        Self { symbols }
    }

    /// Encode one raw source line. Blank, comment and label lines yield
    /// no word; instruction lines yield exactly one.
    pub fn encode_line(&mut self, raw: &str) -> Result<Option<u16>, AsmError> {
        let line = scrub(raw);
        match classify(&line) {
            Line::Skip | Line::Label(_) => Ok(None),
            Line::Address(operand) => self.encode_address(operand).map(Some),
            Line::Computation(text) => encode_computation(text).map(Some),
        }
    }

    fn encode_address(&mut self, operand: &str) -> Result<u16, AsmError> {
        let out_of_range = || AsmError::AddressOutOfRange {
            operand: operand.to_string(),
        };
        // One optional leading `+` then digits is numeric; anything else
        // (a bare sign, `-`, mixed text) names a symbol.
        let digits = operand.strip_prefix('+').unwrap_or(operand);
        let value: u32 = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse().map_err(|_| out_of_range())?
        } else {
            u32::from(self.symbols.define_variable(operand))
        };
        if value > u32::from(ADDR_MAX) {
            return Err(out_of_range());
        }
        // Bit 15 stays clear; the word is the 15-bit value itself.
        Ok(value as u16)
    }
}
