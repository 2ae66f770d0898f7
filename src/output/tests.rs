use super::*;
use crate::error::Error;
use assert_matches::assert_matches;

fn sample() -> Node {
    Node::call(Node::identifier("+"), [Node::number(1), Node::number(2)])
}

fn render(format: OutputFormat) -> String {
    let mut buf = Vec::new();
    write_node(&mut buf, &sample(), format).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_sexpr() {
    assert_eq!(render(OutputFormat::Sexpr), "(+ 1 2)\n");
}

#[test]
fn test_debug() {
    let output = render(OutputFormat::Debug);
    assert!(output.starts_with("ProcedureCall {\n"));
    assert!(output.contains("value: \"+\""));
}

#[test]
fn test_json() {
    let output = render(OutputFormat::Json);
    assert!(output.ends_with("}\n"));
    let value: json::Value = json::from_str(&output).unwrap();
    assert_eq!(value["type"], "procedure-call");
    assert_eq!(value["operands"][1]["value"], 2);
}

fn nested(depth: usize) -> Node {
    let mut node = Node::identifier("x");
    for _ in 1..depth {
        node = Node::call(Node::identifier("f"), [node]);
    }
    node
}

#[test]
fn test_deep_sexpr() {
    let node = nested(100_000);
    let mut buf = Vec::new();
    write_node(&mut buf, &node, OutputFormat::Sexpr).unwrap();
    assert_eq!(buf.len(), 100_000 * 4 - 3 + 1);
    assert!(buf.starts_with(b"(f (f (f "));
    assert!(buf.ends_with(b"x)))\n"));
}

#[test]
fn test_structured_depth_limit() {
    assert!(check_depth(&nested(MAX_STRUCTURED_DEPTH), "json").is_ok());

    let node = nested(MAX_STRUCTURED_DEPTH + 1);
    for format in [OutputFormat::Json, OutputFormat::Debug] {
        let mut buf = Vec::new();
        assert_matches!(
            write_node(&mut buf, &node, format),
            Err(Error::NestingTooDeep { depth, limit: MAX_STRUCTURED_DEPTH, .. }) if depth == MAX_STRUCTURED_DEPTH + 1
        );
        assert!(buf.is_empty());
    }
}

#[test]
fn test_tokens() {
    let mut buf = Vec::new();
    write_tokens(&mut buf, "test", &b"(+ 1 x)"[..]).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "'('\t(\nidentifier\t+\nnumber\t1\nidentifier\tx\n')'\t)\nend of input\t\n"
    );
}

#[test]
fn test_tokens_partial_on_error() {
    let mut buf = Vec::new();
    let result = write_tokens(&mut buf, "test", &b"a +xyz"[..]);
    assert_matches!(result, Err(Error::Lex(_)));
    assert_eq!(String::from_utf8(buf).unwrap(), "identifier\ta\n");
}
