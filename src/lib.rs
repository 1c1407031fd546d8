pub mod asm;
pub mod classify;
pub mod encode;
pub mod symbols;
pub mod tables;

pub use asm::{assemble, assemble_with, resolve_labels, write_words};
pub use classify::{classify, scrub, Line};
pub use encode::{split_computation, AsmError, CParts, Dest, Encoder, ADDR_MAX};
pub use symbols::SymbolTable;
