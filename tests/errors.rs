use hack_rs::{assemble, AsmError};

fn err(src: &str) -> AsmError {
    assemble(src).unwrap_err()
}

#[test]
fn empty_fields_are_malformed() {
    for src in ["D=", "=D+1", "D;", ";JMP", "D=;JGT"] {
        assert!(
            matches!(err(src), AsmError::MalformedInstruction { .. }),
            "{src}"
        );
    }
}

#[test]
fn unknown_computation_is_reported() {
    match err("D=D+2") {
        AsmError::UnknownComp { mnemonic, line } => {
            assert_eq!(mnemonic, "D+2");
            assert_eq!(line, "D=D+2");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_jump_is_reported() {
    assert!(matches!(err("0;JMQ"), AsmError::UnknownJump { .. }));
}

#[test]
fn mnemonics_are_case_sensitive() {
    assert!(matches!(err("d=d+1"), AsmError::UnknownComp { .. }));
    assert!(matches!(err("0;jmp"), AsmError::UnknownJump { .. }));
}

#[test]
fn oversized_addresses_are_fatal() {
    for src in ["@32768", "@+32768", "@65536", "@99999999999999999999"] {
        assert!(matches!(err(src), AsmError::AddressOutOfRange { .. }), "{src}");
    }
}

#[test]
fn bare_sigil_is_rejected() {
    assert!(matches!(err("@"), AsmError::UnknownComp { .. }));
}

#[test]
fn label_with_trailing_comment_is_rejected() {
    // The parenthesized form must cover the whole line.
    assert!(matches!(err("(LOOP) // begin"), AsmError::UnknownComp { .. }));
}

#[test]
fn first_bad_line_stops_the_run() {
    let e = assemble("@2\nD=A\nBOGUS\n@3").unwrap_err();
    assert!(e.to_string().contains("BOGUS"));
}

#[test]
fn messages_carry_the_offending_text() {
    assert!(err("D=").to_string().contains("D="));
    assert!(err("@32768").to_string().contains("32768"));
}
