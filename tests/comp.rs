use hack_rs::assemble;
use pretty_assertions::assert_eq;

fn word(src: &str) -> u16 {
    assemble(src).unwrap()[0]
}

fn comp_of(src: &str) -> u16 {
    (word(src) >> 6) & 0x7f
}

#[test]
fn computation_codes_match_the_alu_map() {
    let cases: &[(&str, u16)] = &[
        ("0", 0b0101010),
        ("1", 0b0111111),
        ("-1", 0b0111010),
        ("D", 0b0001100),
        ("A", 0b0110000),
        ("M", 0b1110000),
        ("!D", 0b0001101),
        ("!A", 0b0110001),
        ("!M", 0b1110001),
        ("-D", 0b0001111),
        ("-A", 0b0110011),
        ("-M", 0b1110011),
        ("D+1", 0b0011111),
        ("A+1", 0b0110111),
        ("M+1", 0b1110111),
        ("D-1", 0b0001110),
        ("A-1", 0b0110010),
        ("M-1", 0b1110010),
        ("D+A", 0b0000010),
        ("D+M", 0b1000010),
        ("D-A", 0b0010011),
        ("D-M", 0b1010011),
        ("A-D", 0b0000111),
        ("M-D", 0b1000111),
        ("D&A", 0b0000000),
        ("D&M", 0b1000000),
        ("D|A", 0b0010101),
        ("D|M", 0b1010101),
    ];
    for &(mnemonic, code) in cases {
        assert_eq!(comp_of(mnemonic), code, "comp {mnemonic}");
    }
}

#[test]
fn commutative_spellings_share_codes() {
    let pairs = [
        ("D+A", "A+D"),
        ("D+M", "M+D"),
        ("D&A", "A&D"),
        ("D&M", "M&D"),
        ("D|A", "A|D"),
        ("D|M", "M|D"),
        ("D+1", "1+D"),
        ("A+1", "1+A"),
        ("M+1", "1+M"),
    ];
    for (one, two) in pairs {
        assert_eq!(word(one), word(two), "{one} vs {two}");
    }
}

#[test]
fn memory_forms_set_the_a_bit() {
    let twins = [
        ("A", "M"),
        ("!A", "!M"),
        ("-A", "-M"),
        ("A+1", "M+1"),
        ("A-1", "M-1"),
        ("D+A", "D+M"),
        ("D-A", "D-M"),
        ("A-D", "M-D"),
        ("D&A", "D&M"),
        ("D|A", "D|M"),
    ];
    for (reg, mem) in twins {
        assert_eq!(comp_of(reg) & 0b1000000, 0, "{reg}");
        assert_eq!(comp_of(mem) & 0b1000000, 0b1000000, "{mem}");
        assert_eq!(comp_of(reg) & 0b0111111, comp_of(mem) & 0b0111111, "{reg}/{mem}");
    }
}

#[test]
fn jump_codes_count_up() {
    let cases = [
        ("JGT", 0b001u16),
        ("JEQ", 0b010),
        ("JGE", 0b011),
        ("JLT", 0b100),
        ("JNE", 0b101),
        ("JLE", 0b110),
        ("JMP", 0b111),
    ];
    for (mnemonic, code) in cases {
        let w = word(&format!("0;{mnemonic}"));
        assert_eq!(w & 0b111, code, "jump {mnemonic}");
        assert_eq!(w >> 13, 0b111);
    }
}

#[test]
fn dest_field_sets_one_bit_per_register() {
    let cases = [
        ("M", 0b001u16),
        ("D", 0b010),
        ("MD", 0b011),
        ("A", 0b100),
        ("AM", 0b101),
        ("AD", 0b110),
        ("AMD", 0b111),
    ];
    for (dest, bits) in cases {
        let w = word(&format!("{dest}=0"));
        assert_eq!((w >> 3) & 0b111, bits, "dest {dest}");
    }
    // No dest at all clears the field.
    assert_eq!((word("0") >> 3) & 0b111, 0b000);
}

#[test]
fn dest_order_and_repeats_are_harmless() {
    assert_eq!(word("DM=0"), word("MD=0"));
    assert_eq!(word("ADM=0"), word("AMD=0"));
    assert_eq!(word("MM=0"), word("M=0"));
}
