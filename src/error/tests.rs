use super::*;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf, true).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );
}

#[test]
fn test_log_plain() {
    let err = Error::Syntax {
        near: "(".into(),
        message: "unexpected end of input".into(),
    };
    let mut buf = Vec::new();
    err.log_to(&mut buf, false).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "error: syntax error near '(': unexpected end of input\n"
    );
}

#[test]
fn test_is_input_error() {
    let err = Error::Syntax {
        near: ")".into(),
        message: "unexpected ')'".into(),
    };
    assert!(err.is_input_error());

    let err = Error::Lex(slicep_lex::Error::InvalidNumber {
        name: "stdin".into(),
        text: "+xyz".into(),
    });
    assert!(err.is_input_error());

    let err = Error::FileNotFound {
        filename: "missing.scm".into(),
    };
    assert!(err.is_input_error());

    let err = Error::NestingTooDeep {
        depth: 5000,
        limit: 1024,
        format: "json",
    };
    assert!(err.is_input_error());

    let err = Error::Io(std::io::Error::other("test"));
    assert!(!err.is_input_error());
}
