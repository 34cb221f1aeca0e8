use darkint::{BigInt, Category, ErrorCode};

#[test]
fn round_trips() {
    for text in [
        "0",
        "7",
        "-1",
        "999999999",
        "1000000000",
        "-1000000000",
        "123456789",
        "123456789012345678",
        "1234567890123456789",
        "-123456789012345678901234567890",
    ] {
        let n: BigInt = text.parse().unwrap();
        assert_eq!(n.to_string(), text);
        let back: BigInt = n.to_string().parse().unwrap();
        assert_eq!(back, n);
    }
}

#[test]
fn normalizes_redundant_text() {
    assert_eq!("007".parse::<BigInt>().unwrap().to_string(), "7");
    assert_eq!("-0".parse::<BigInt>().unwrap().to_string(), "0");
    assert!(!"-0".parse::<BigInt>().unwrap().is_negative());
    assert_eq!(
        "0000000000000000000".parse::<BigInt>().unwrap().to_string(),
        "0"
    );
    assert_eq!("-00042".parse::<BigInt>().unwrap().to_string(), "-42");
}

#[test]
fn pads_interior_limbs() {
    // Zero limbs in the middle of the magnitude must render as nine
    // zero digits each.
    let n: BigInt = "1000000000000000000".parse().unwrap();
    assert_eq!(n.limb_count(), 3);
    assert_eq!(n.to_string(), "1000000000000000000");

    let n: BigInt = "5000000023".parse().unwrap();
    assert_eq!(n.to_string(), "5000000023");
}

#[test]
fn rejects_invalid_text() {
    for (text, index) in [
        ("", 0),
        ("-", 1),
        ("+7", 0),
        (" 7", 0),
        ("12x34", 2),
        ("--5", 1),
        ("7 ", 1),
        ("12.5", 2),
        ("12\u{00b3}4", 2),
    ] {
        let err = text.parse::<BigInt>().unwrap_err();
        assert!(err.is_invalid_format(), "{:?}", text);
        assert_eq!(err.index(), index, "{:?}", text);
        assert_eq!(err.classify(), Category::Syntax);
        assert_eq!(*err.code(), ErrorCode::InvalidFormat);
    }
}

#[test]
fn error_formats() {
    let err = "12x".parse::<BigInt>().unwrap_err();
    assert_eq!(err.to_string(), "invalid decimal integer literal at index 2");
    assert_eq!(
        format!("{:?}", err),
        "Error(\"invalid decimal integer literal\", index: 2)"
    );

    let err = BigInt::from(1).div_rem(&BigInt::new()).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(\"attempt to divide by zero\")");
}

#[test]
fn debug_wraps_display() {
    assert_eq!(format!("{:?}", "42".parse::<BigInt>().unwrap()), "BigInt(42)");
    assert_eq!(
        format!("{:?}", "-42".parse::<BigInt>().unwrap()),
        "BigInt(-42)"
    );
}
