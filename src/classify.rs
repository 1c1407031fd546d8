/// A scrubbed source line, sorted into one of the four syntactic shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty line or full-line comment. Produces nothing.
    Skip,
    /// `(Name)` declaration. Carries the name between the parentheses.
    Label(&'a str),
    /// `@operand` instruction. Carries the operand, trailing comment removed.
    Address(&'a str),
    /// Everything else; the operand is the whole line, handed to the
    /// computation parser as-is.
    Computation(&'a str),
}

/// Drop every whitespace character. `M = D ; JMP` and `M=D;JMP` are the
/// same instruction, so all later stages work on de-spaced text.
pub fn scrub(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Classify one scrubbed line. A label must span the entire line; a
/// stray suffix (even a comment) demotes it to a computation, which the
/// encoder then rejects.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.starts_with("//") {
        return Line::Skip;
    }
    if line.len() > 2 && line.starts_with('(') && line.ends_with(')') {
        return Line::Label(&line[1..line.len() - 1]);
    }
    if let Some(rest) = line.strip_prefix('@') {
        let operand = &rest[..rest.find('/').unwrap_or(rest.len())];
        if !operand.is_empty() {
            return Line::Address(operand);
        }
    }
    Line::Computation(line)
}
