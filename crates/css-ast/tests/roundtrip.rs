//! Serialization tests: unmodified trees print back exactly, and edits only
//! touch what they change.

use css_ast::{Declaration, Node, Rule, parse};

fn assert_roundtrip(source: &str) {
    let root = parse(source).unwrap();
    assert_eq!(root.to_string(), source);
}

#[test]
fn test_roundtrip_compact() {
    assert_roundtrip(".a{color:red}.b{margin:0;padding:0}");
}

#[test]
fn test_roundtrip_pretty() {
    assert_roundtrip(
        r#"
:import("./colors.css") {
  __value__red__0: red;
}

:export {
  primary: __value__red__0;
}

.button {
  color: primary; /* trailing */
  border: 1px solid   black ;
}
"#,
    );
}

#[test]
fn test_roundtrip_nested_and_odd_spacing() {
    assert_roundtrip("@media  screen  {\n\t.a  >  .b  {  top : 0 ;  }\n\n}\n\n\n");
}

#[test]
fn test_roundtrip_stray_semicolons() {
    assert_roundtrip(";;.a { color: red;; }");
}

#[test]
fn test_roundtrip_empty() {
    assert_roundtrip("");
    assert_roundtrip("   \n");
}

#[test]
fn test_edit_value_in_place() {
    let mut root = parse(".a { color: red; }").unwrap();
    root.walk_mut(|node| {
        if let Node::Declaration(decl) = node {
            decl.value = "blue".to_string();
        }
    });
    assert_eq!(root.to_string(), ".a { color: blue; }");
}

#[test]
fn test_insert_generated_rule() {
    let mut root = parse(".a { color: red; }\n").unwrap();
    let mut rule = Rule::new(
        ":import('./x.css')",
        vec![Node::Declaration(Declaration::new("__value__a__0", "a"))],
    );
    rule.raws.before.clear();
    root.nodes.insert(0, Node::Rule(rule));
    insta::assert_snapshot!(root.to_string(), @r"
    :import('./x.css') {
      __value__a__0: a;
    }.a { color: red; }
    ");
}
