use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Names with fixed addresses, available before any source is read.
pub const BUILTINS: &[(&str, u16)] = &[
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", 16384),
    ("KBD", 24576),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
];

/// RAM address handed to the first user variable.
pub const VAR_BASE: u16 = 16;

/// Name-to-address map plus the bump allocator for user variables.
///
/// Labels are filled in by the resolution pass before any encoding
/// happens; variables are allocated lazily while encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolTable {
    map: HashMap<String, u16>,
    next_free: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            map: BUILTINS
                .iter()
                .map(|&(name, addr)| (name.to_string(), addr))
                .collect(),
            next_free: VAR_BASE,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    /// Record a label address. An already-known name keeps its first binding.
    pub fn define_label(&mut self, name: &str, address: u16) {
        self.map.entry(name.to_string()).or_insert(address);
    }

    /// Address of `name`, allocating the next free RAM slot on first
    /// sight. Known names (builtin, label or earlier variable) keep
    /// their address and the counter does not move.
    pub fn define_variable(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.lookup(name) {
            return addr;
        }
        let addr = self.next_free;
        self.map.insert(name.to_string(), addr);
        self.next_free += 1;
        addr
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u16)> {
        self.map.iter().map(|(name, &addr)| (name.as_str(), addr))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
