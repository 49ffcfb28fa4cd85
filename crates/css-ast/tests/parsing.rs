//! Integration tests for stylesheet parsing.
//!
//! Covers:
//! - Rules, declarations and at-rules
//! - Comments and strings
//! - Syntax errors

use css_ast::{Node, ParseError, parse};

// ============================================================================
// RULES AND DECLARATIONS
// ============================================================================

#[test]
fn test_single_rule() {
    let root = parse(".a { color: red; }").unwrap();
    assert_eq!(root.nodes.len(), 1);

    let rule = root.nodes[0].as_rule().unwrap();
    assert_eq!(rule.selector, ".a");

    let decls: Vec<_> = rule.declarations().collect();
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].prop, "color");
    assert_eq!(decls[0].value, "red");
    assert!(decls[0].raws.semicolon);
}

#[test]
fn test_last_declaration_without_semicolon() {
    let root = parse(".a { color: red; margin: 0 }").unwrap();
    let rule = root.nodes[0].as_rule().unwrap();
    let decls: Vec<_> = rule.declarations().collect();
    assert_eq!(decls[1].prop, "margin");
    assert_eq!(decls[1].value, "0");
    assert!(!decls[1].raws.semicolon);
}

#[test]
fn test_value_with_parentheses_and_strings() {
    let root = parse(r#".a { background: url("a;b.png"); content: "}"; }"#).unwrap();
    let rule = root.nodes[0].as_rule().unwrap();
    let values: Vec<_> = rule.declarations().map(|d| d.value.as_str()).collect();
    assert_eq!(values, vec![r#"url("a;b.png")"#, r#""}""#]);
}

#[test]
fn test_selector_list_and_pseudo() {
    let root = parse(":import('./a.css') { x: y; }\n.a:hover, .b { top: 0; }").unwrap();
    assert_eq!(root.nodes[0].as_rule().unwrap().selector, ":import('./a.css')");
    assert_eq!(root.nodes[1].as_rule().unwrap().selector, ".a:hover, .b");
}

// ============================================================================
// AT-RULES
// ============================================================================

#[test]
fn test_statement_at_rule() {
    let root = parse("@value primary: #BF4040;").unwrap();
    let at_rule = root.nodes[0].as_at_rule().unwrap();
    assert_eq!(at_rule.name, "value");
    assert_eq!(at_rule.params, "primary: #BF4040");
    assert!(at_rule.nodes.is_none());
    assert!(at_rule.raws.semicolon);
}

#[test]
fn test_multiline_at_rule_params() {
    let root = parse("@value (\n  a,\n  b\n) from 'x';").unwrap();
    let at_rule = root.nodes[0].as_at_rule().unwrap();
    assert_eq!(at_rule.params, "(\n  a,\n  b\n) from 'x'");
}

#[test]
fn test_block_at_rule_with_nested_rules() {
    let root = parse("@media (max-width: 100px) { .a { color: red; } }").unwrap();
    let at_rule = root.nodes[0].as_at_rule().unwrap();
    assert_eq!(at_rule.name, "media");
    assert_eq!(at_rule.params, "(max-width: 100px)");
    let children = at_rule.nodes.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].as_rule().unwrap().selector, ".a");
}

#[test]
fn test_missing_semicolon_merges_statements() {
    let root = parse("@value a: red\n@value b: blue;").unwrap();
    assert_eq!(root.nodes.len(), 1);
    assert_eq!(
        root.nodes[0].as_at_rule().unwrap().params,
        "a: red\n@value b: blue"
    );
}

#[test]
fn test_at_rule_without_params() {
    let root = parse("@value;").unwrap();
    let at_rule = root.nodes[0].as_at_rule().unwrap();
    assert_eq!(at_rule.params, "");
    assert_eq!(root.to_string(), "@value;");
}

// ============================================================================
// COMMENTS
// ============================================================================

#[test]
fn test_comment_nodes() {
    let root = parse("/* header */\n.a { /* inner */ color: red; }").unwrap();
    match &root.nodes[0] {
        Node::Comment(comment) => assert_eq!(comment.text, " header "),
        other => panic!("expected comment, got {other:?}"),
    }
    let rule = root.nodes[1].as_rule().unwrap();
    assert!(matches!(rule.nodes[0], Node::Comment(_)));
    assert!(matches!(rule.nodes[1], Node::Declaration(_)));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_unclosed_block() {
    assert_eq!(parse(".a { color: red;"), Err(ParseError::UnclosedBlock(3)));
}

#[test]
fn test_unexpected_close_brace() {
    assert_eq!(parse(".a {}\n}"), Err(ParseError::UnexpectedCloseBrace(6)));
}

#[test]
fn test_unclosed_comment() {
    assert_eq!(parse("/* open"), Err(ParseError::UnclosedComment(0)));
}

#[test]
fn test_unknown_word() {
    assert_eq!(
        parse(".a { color red; }"),
        Err(ParseError::UnknownWord {
            word: "color red".to_string(),
            offset: 5,
        })
    );
}

#[test]
fn test_missing_at_rule_name() {
    assert_eq!(parse("@ {}"), Err(ParseError::MissingAtRuleName(0)));
}
