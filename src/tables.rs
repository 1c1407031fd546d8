//! Fixed encoding tables for the two instruction forms.
//!
//! Computation codes are seven bits (`a c1..c6`), jump codes three
//! (`j1 j2 j3`). Commutative operations are listed once per accepted
//! spelling so lookup stays a plain string match.

#[derive(Debug, Clone, Copy)]
pub struct CompDesc {
    pub mnemonic: &'static str,
    pub bits: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct JumpDesc {
    pub mnemonic: &'static str,
    pub bits: u16,
}

pub const COMP_TABLE: &[CompDesc] = &[
    CompDesc { mnemonic: "0", bits: 0b0101010 },
    CompDesc { mnemonic: "1", bits: 0b0111111 },
    CompDesc { mnemonic: "-1", bits: 0b0111010 },
    CompDesc { mnemonic: "D", bits: 0b0001100 },
    CompDesc { mnemonic: "A", bits: 0b0110000 },
    CompDesc { mnemonic: "M", bits: 0b1110000 },
    CompDesc { mnemonic: "!D", bits: 0b0001101 },
    CompDesc { mnemonic: "!A", bits: 0b0110001 },
    CompDesc { mnemonic: "!M", bits: 0b1110001 },
    CompDesc { mnemonic: "-D", bits: 0b0001111 },
    CompDesc { mnemonic: "-A", bits: 0b0110011 },
    CompDesc { mnemonic: "-M", bits: 0b1110011 },
    CompDesc { mnemonic: "D+1", bits: 0b0011111 },
    CompDesc { mnemonic: "1+D", bits: 0b0011111 },
    CompDesc { mnemonic: "A+1", bits: 0b0110111 },
    CompDesc { mnemonic: "1+A", bits: 0b0110111 },
    CompDesc { mnemonic: "M+1", bits: 0b1110111 },
    CompDesc { mnemonic: "1+M", bits: 0b1110111 },
    CompDesc { mnemonic: "D-1", bits: 0b0001110 },
    CompDesc { mnemonic: "A-1", bits: 0b0110010 },
    CompDesc { mnemonic: "M-1", bits: 0b1110010 },
    CompDesc { mnemonic: "D+A", bits: 0b0000010 },
    CompDesc { mnemonic: "A+D", bits: 0b0000010 },
    CompDesc { mnemonic: "D+M", bits: 0b1000010 },
    CompDesc { mnemonic: "M+D", bits: 0b1000010 },
    CompDesc { mnemonic: "D-A", bits: 0b0010011 },
    CompDesc { mnemonic: "A-D", bits: 0b0000111 },
    CompDesc { mnemonic: "D-M", bits: 0b1010011 },
    CompDesc { mnemonic: "M-D", bits: 0b1000111 },
    CompDesc { mnemonic: "D&A", bits: 0b0000000 },
    CompDesc { mnemonic: "A&D", bits: 0b0000000 },
    CompDesc { mnemonic: "D&M", bits: 0b1000000 },
    CompDesc { mnemonic: "M&D", bits: 0b1000000 },
    CompDesc { mnemonic: "D|A", bits: 0b0010101 },
    CompDesc { mnemonic: "A|D", bits: 0b0010101 },
    CompDesc { mnemonic: "D|M", bits: 0b1010101 },
    CompDesc { mnemonic: "M|D", bits: 0b1010101 },
];

pub const JUMP_TABLE: &[JumpDesc] = &[
    JumpDesc { mnemonic: "JGT", bits: 0b001 },
    JumpDesc { mnemonic: "JEQ", bits: 0b010 },
    JumpDesc { mnemonic: "JGE", bits: 0b011 },
    JumpDesc { mnemonic: "JLT", bits: 0b100 },
    JumpDesc { mnemonic: "JNE", bits: 0b101 },
    JumpDesc { mnemonic: "JLE", bits: 0b110 },
    JumpDesc { mnemonic: "JMP", bits: 0b111 },
];

pub fn comp_bits(mnemonic: &str) -> Option<u16> {
    COMP_TABLE.iter().find(|d| d.mnemonic == mnemonic).map(|d| d.bits)
}

pub fn jump_bits(mnemonic: &str) -> Option<u16> {
    JUMP_TABLE.iter().find(|d| d.mnemonic == mnemonic).map(|d| d.bits)
}
