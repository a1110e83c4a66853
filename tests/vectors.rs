use hex_literal::hex;
use pearson::{new16, new24, new8, DigestWidth, PearsonHasher};

struct DigestCase {
    input: &'static str,
    hex8: &'static str,
    hex16: &'static str,
    hex24: &'static str,
}

const DIGEST_CASES: &[DigestCase] = &[
    DigestCase {
        input: "quick brown fox",
        hex8: "92",
        hex16: "92be",
        hex24: "92beb7",
    },
    DigestCase {
        input: "food",
        hex8: "e8",
        hex16: "e8da",
        hex24: "e8da23",
    },
    DigestCase {
        input: "doof",
        hex8: "e8",
        hex16: "e81b",
        hex24: "e81b00",
    },
    DigestCase {
        input: "foo",
        hex8: "f8",
        hex16: "f8ca",
        hex24: "f8ca33",
    },
];

fn expected(case: &DigestCase, width: DigestWidth) -> &'static str {
    match width {
        DigestWidth::Bits8 => case.hex8,
        DigestWidth::Bits16 => case.hex16,
        DigestWidth::Bits24 => case.hex24,
    }
}

const WIDTHS: [DigestWidth; 3] = [DigestWidth::Bits8, DigestWidth::Bits16, DigestWidth::Bits24];

#[test]
fn single_byte_table_lookups() {
    let mut h = new8();
    for (input, output) in [(0u8, 98u8), (254, 138), (112, 39)] {
        h.reset();
        h.write(&[input]);
        let s = h.sum(Vec::new());
        assert_eq!(s, vec![output]);
        assert_eq!(s.len(), h.size());
        assert_eq!(h.block_size(), 1);
    }
}

#[test]
fn digests_single_shot() {
    for case in DIGEST_CASES {
        for width in WIDTHS {
            let mut h = PearsonHasher::new(width);
            assert_eq!(h.write(case.input.as_bytes()), case.input.len());
            assert_eq!(h.hex_digest(), expected(case, width), "input {:?}", case.input);
        }
    }
}

#[test]
fn digests_byte_by_byte() {
    for case in DIGEST_CASES {
        for width in WIDTHS {
            let mut h = PearsonHasher::new(width);
            for &b in case.input.as_bytes() {
                assert_eq!(h.write(&[b]), 1);
            }
            assert_eq!(
                hex::encode(h.sum(Vec::new())),
                expected(case, width),
                "input {:?}",
                case.input
            );
        }
    }
}

#[test]
fn digests_16_streaming() {
    for case in DIGEST_CASES {
        let mut h = new16();
        for &b in case.input.as_bytes() {
            h.write(&[b]);
        }
        assert_eq!(h.hex_digest(), case.hex16);
        assert_eq!(h.size(), 2, "16bit hash must be two bytes long");
    }
}

#[test]
fn digests_24_streaming_with_reuse() {
    let mut h = new24();
    for case in DIGEST_CASES {
        h.reset();
        for &b in case.input.as_bytes() {
            h.write(&[b]);
        }
        assert_eq!(h.hex_digest(), case.hex24);
        assert_eq!(h.size(), 3, "24bit hash must be three bytes long");
    }
}

#[test]
fn size_and_block_size() {
    assert_eq!(new8().size(), 1);
    assert_eq!(new16().size(), 2);
    assert_eq!(new24().size(), 3);
    for h in [new8(), new16(), new24()] {
        assert_eq!(h.block_size(), 1);
    }
}

#[test]
fn reset_matches_fresh_hasher() {
    let mut reused = new24();
    reused.write(b"something else entirely");
    reused.reset();
    reused.write(b"quick brown fox");

    let mut fresh = new24();
    fresh.write(b"quick brown fox");

    assert_eq!(reused.digest(), fresh.digest());
    assert_eq!(reused.digest(), &hex!("92beb7"));
}

#[test]
fn sum_is_non_destructive() {
    let mut h = new16();
    h.write(b"food");
    let first = h.sum(Vec::new());
    let second = h.sum(Vec::new());
    assert_eq!(first, second);
    assert_eq!(first, hex!("e8da").to_vec());

    h.write(b"d");
    let mut full = new16();
    full.write(b"foodd");
    assert_eq!(h.digest(), full.digest());
}

#[test]
fn sum_appends_to_prefix() {
    let mut h = new24();
    h.write(b"doof");
    assert_eq!(h.sum(b"xy".to_vec()), b"xy\xe8\x1b\x00".to_vec());
}

#[test]
fn lane_zero_matches_across_widths() {
    for case in DIGEST_CASES {
        assert_eq!(&case.hex16[..2], case.hex8);
        assert_eq!(&case.hex24[..4], case.hex16);
    }
}
