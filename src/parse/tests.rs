use super::*;
use crate::stream::Code;
use assert_matches::assert_matches;
use rstest::rstest;

fn call(operator: Node, operands: impl IntoIterator<Item = Node>) -> Node {
    Node::call(operator, operands)
}

fn ident(name: &str) -> Node {
    Node::identifier(name)
}

#[rstest]
#[case("123", Node::number(123))] // 1
#[case("foo", ident("foo"))] // 2
#[case("(foo bar)", call(ident("foo"), [ident("bar")]))] // 3
#[case("(+ 1 2)", call(ident("+"), [Node::number(1), Node::number(2)]))] // 4
#[case(
    "(+ 1 (* 2 3))",
    call(ident("+"), [Node::number(1), call(ident("*"), [Node::number(2), Node::number(3)])])
)] // 5
#[case("(newline)", call(ident("newline"), []))] // 6
#[case("((f 1) 2)", call(call(ident("f"), [Node::number(1)]), [Node::number(2)]))] // 7
#[case("  \n(f\t+7)\n", call(ident("f"), [Node::number(7)]))] // 8
fn test_parse(#[case] input: &str, #[case] expected: Node) {
    assert_eq!(parse_str(input).unwrap(), expected);
}

#[rstest]
#[case("(+ 1 2", "2", "unexpected end of input, expected ')'")] // 1
#[case(")", ")", "unexpected ')'")] // 2
#[case("()", ")", "empty procedure call")] // 3
#[case("1 2", "2", "unexpected token after expression")] // 4
#[case("(f) (g)", "(", "unexpected token after expression")] // 5
#[case("", "", "unexpected end of input, expected expression")] // 6
#[case("(f 1.5)", "1.5", "invalid number: 1.5")] // 7
#[case("-3", "-3", "invalid number: -3")] // 8
#[case("(f x))", ")", "unexpected token after expression")] // 9
fn test_syntax_error(#[case] input: &str, #[case] near: &str, #[case] message: &str) {
    assert_matches!(
        parse_str(input),
        Err(Error::Syntax { near: n, message: m }) if n == near && m == message
    );
}

#[test]
fn test_error_message() {
    let err = parse_str("(+ 1 2").unwrap_err();
    assert_eq!(err.to_string(), "syntax error near '2': unexpected end of input, expected ')'");
}

#[test]
fn test_lexical_error() {
    assert_matches!(
        parse_str("(+ 1 +xyz)"),
        Err(Error::Lex(slicep_lex::Error::InvalidNumber { text, .. })) if text == "+xyz"
    );
}

#[test]
fn test_lexical_error_after_complete_expression() {
    assert_matches!(parse_str("(f) +bad"), Err(Error::Lex(_)));
}

#[test]
fn test_io_error() {
    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    assert_matches!(parse(Failing), Err(Error::Lex(slicep_lex::Error::Io { .. })));
}

#[test]
fn test_source_name() {
    let err = parse_named("prog.scm", &b"(f \xFF)"[..]).unwrap_err();
    assert_matches!(&err, Error::Lex(e) if e.source_name() == "prog.scm");
}

#[test]
fn test_deep_nesting() {
    const DEPTH: usize = 200_000;
    let input = format!("{}x{}", "(f ".repeat(DEPTH), ")".repeat(DEPTH));
    let node = parse_str(&input).unwrap();
    assert_eq!(node.depth(), DEPTH + 1);
    assert_eq!(node.to_string(), input);
    drop(node);
}

#[test]
fn test_deep_nesting_unbalanced() {
    const DEPTH: usize = 200_000;
    let input = format!("{}x", "(f ".repeat(DEPTH));
    assert_matches!(
        parse_str(&input),
        Err(Error::Syntax { message, .. }) if message == "unexpected end of input, expected ')'"
    );
}

// ---

struct Script {
    items: std::vec::IntoIter<(Code, Value)>,
    errors: Vec<String>,
}

impl Script {
    fn new(items: Vec<(Code, Value)>) -> Self {
        Self {
            items: items.into_iter(),
            errors: Vec::new(),
        }
    }
}

impl Lex for Script {
    fn lex(&mut self, value: &mut Value) -> Code {
        match self.items.next() {
            Some((code, v)) => {
                *value = v;
                code
            }
            None => EOF,
        }
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.into());
    }
}

#[test]
fn test_engine_accept() {
    let mut parser = Parser::new(Script::new(vec![
        (LPAREN, Value::None),
        (IDENT, Value::Ident("g".into())),
        (UINTEGER10, Value::UInteger(9)),
        (RPAREN, Value::None),
    ]));
    assert_eq!(parser.run(), Status::Accept);
    let (result, script) = parser.into_parts();
    assert_eq!(result, Some(call(ident("g"), [Node::number(9)])));
    assert!(script.errors.is_empty());
}

#[test]
fn test_engine_unknown_code() {
    let mut parser = Parser::new(Script::new(vec![(-1, Value::None)]));
    assert_eq!(parser.run(), Status::Abort);
    let (result, script) = parser.into_parts();
    assert!(result.is_none());
    assert_eq!(script.errors, vec!["unexpected token code -1".to_string()]);
}

#[test]
fn test_engine_missing_value() {
    let mut parser = Parser::new(Script::new(vec![(IDENT, Value::None)]));
    assert_eq!(parser.run(), Status::Abort);
    let (_, script) = parser.into_parts();
    assert_eq!(script.errors, vec!["missing identifier value".to_string()]);
}

#[test]
fn test_engine_no_partial_result() {
    let mut parser = Parser::new(Script::new(vec![
        (UINTEGER10, Value::UInteger(1)),
        (UINTEGER10, Value::UInteger(2)),
    ]));
    assert_eq!(parser.run(), Status::Abort);
    let (result, _) = parser.into_parts();
    assert!(result.is_none());
}
