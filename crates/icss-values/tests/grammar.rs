//! Integration tests for the `@value` prelude grammar.
//!
//! Tests:
//! - Local definitions (colon and whitespace forms)
//! - Import lists (plain, aliased, parenthesized)
//! - Every rejected shape, both at the parser level and end to end

use icss_values::prelude::{ImportedName, PreludeError, ValueDeclaration, parse_prelude};
use icss_values::{ValuesConfig, process_css};

fn local(name: &str, value: &str) -> ValueDeclaration {
    ValueDeclaration::Local {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn import(path: &str, names: &[(&str, &str)]) -> ValueDeclaration {
    ValueDeclaration::Import {
        path: path.to_string(),
        names: names
            .iter()
            .map(|(source, alias)| ImportedName {
                source: source.to_string(),
                alias: alias.to_string(),
            })
            .collect(),
    }
}

// ============================================================================
// LOCAL DEFINITIONS
// ============================================================================

#[test]
fn test_colon_form() {
    assert_eq!(parse_prelude("primary: #BF4040").unwrap(), local("primary", "#BF4040"));
}

#[test]
fn test_colon_without_space() {
    assert_eq!(parse_prelude("primary:#BF4040").unwrap(), local("primary", "#BF4040"));
}

#[test]
fn test_space_before_colon() {
    assert_eq!(parse_prelude("primary : red").unwrap(), local("primary", "red"));
}

#[test]
fn test_whitespace_form() {
    assert_eq!(parse_prelude("primary #BF4040").unwrap(), local("primary", "#BF4040"));
}

#[test]
fn test_value_with_function_and_commas() {
    assert_eq!(
        parse_prelude("shadow: 0 0 2px rgba(0, 0, 0, 0.5), inset 0 1px red").unwrap(),
        local("shadow", "0 0 2px rgba(0, 0, 0, 0.5), inset 0 1px red")
    );
}

#[test]
fn test_media_query_value() {
    assert_eq!(
        parse_prelude("small: (max-width: 599px)").unwrap(),
        local("small", "(max-width: 599px)")
    );
}

#[test]
fn test_quoted_value() {
    assert_eq!(
        parse_prelude("font: 'Helvetica Neue', sans-serif").unwrap(),
        local("font", "'Helvetica Neue', sans-serif")
    );
}

#[test]
fn test_custom_property_style_name() {
    assert_eq!(parse_prelude("--gap: 4px").unwrap(), local("--gap", "4px"));
}

#[test]
fn test_dotted_name_is_parsed() {
    assert_eq!(parse_prelude(".red: #f00").unwrap(), local(".red", "#f00"));
}

// ============================================================================
// IMPORTS
// ============================================================================

#[test]
fn test_single_import() {
    assert_eq!(
        parse_prelude("red from './colors.css'").unwrap(),
        import("./colors.css", &[("red", "red")])
    );
}

#[test]
fn test_double_quoted_path() {
    assert_eq!(
        parse_prelude("red from \"./colors.css\"").unwrap(),
        import("./colors.css", &[("red", "red")])
    );
}

#[test]
fn test_import_list_with_alias() {
    assert_eq!(
        parse_prelude("red, blue as primary, green from 'colors'").unwrap(),
        import("colors", &[("red", "red"), ("blue", "primary"), ("green", "green")])
    );
}

#[test]
fn test_parenthesized_multiline_import() {
    assert_eq!(
        parse_prelude("(\n  red,\n  blue as primary\n) from 'colors'").unwrap(),
        import("colors", &[("red", "red"), ("blue", "primary")])
    );
}

#[test]
fn test_parenthesized_without_spaces() {
    let expected = import("colors", &[("red", "red"), ("blue", "blue")]);
    assert_eq!(parse_prelude("(red,blue) from 'colors'").unwrap(), expected);
    assert_eq!(parse_prelude("(red,blue)from 'colors'").unwrap(), expected);
}

#[test]
fn test_from_inside_string_is_not_an_import() {
    assert_eq!(
        parse_prelude("quote: 'taken from here'").unwrap(),
        local("quote", "'taken from here'")
    );
}

// ============================================================================
// REJECTIONS
// ============================================================================

#[test]
fn test_rejection_reasons() {
    let cases = [
        ("", PreludeError::MissingName),
        ("red", PreludeError::MissingValue("red".into())),
        ("red:", PreludeError::MissingValue("red".into())),
        ("red: /* nothing */", PreludeError::MissingValue("red".into())),
        (": red", PreludeError::MissingName),
        ("red, blue", PreludeError::UnexpectedSeparator("red".into())),
        ("'red': blue", PreludeError::QuotedName),
        ("as: red", PreludeError::ReservedName("as".into())),
        ("red from", PreludeError::MissingPath),
        ("red from path", PreludeError::UnquotedPath),
        ("red from 'path' other", PreludeError::TrailingTokens),
        ("red: blue from 'path'", PreludeError::InvalidImportList),
        ("red blue from 'path'", PreludeError::InvalidImportList),
        ("'red' from 'path'", PreludeError::QuotedName),
        ("red as 'blue' from 'path'", PreludeError::QuotedName),
        ("red as from 'path'", PreludeError::InvalidImportList),
        ("red as as from 'path'", PreludeError::ReservedName("as".into())),
        ("as from 'path'", PreludeError::ReservedName("as".into())),
        ("fn(red, blue) from 'path'", PreludeError::InvalidImportList),
        ("red, from 'path'", PreludeError::InvalidImportList),
        ("from 'path'", PreludeError::MissingName),
        ("a: red\n@value b: blue", PreludeError::MergedStatements),
    ];

    for (params, expected) in cases {
        assert_eq!(parse_prelude(params), Err(expected), "params: {params:?}");
    }
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_each_invalid_form_warns_once_and_defines_nothing() {
    let statements = [
        ("@value red;", "red"),
        ("@value red:;", "red:"),
        ("@value red: ;", "red:"),
        ("@value : red;", ": red"),
        ("@value red from;", "red from"),
        ("@value red from path;", "red from path"),
        ("@value red from 'path' other;", "red from 'path' other"),
        ("@value red: blue from 'path';", "red: blue from 'path'"),
        ("@value 'red' from 'path';", "'red' from 'path'"),
        ("@value red as 'blue' from 'path';", "red as 'blue' from 'path'"),
        ("@value as from 'path';", "as from 'path'"),
        ("@value fn(red, blue) from 'path';", "fn(red, blue) from 'path'"),
    ];

    for (statement, params) in statements {
        let source = format!("{statement}\n.a {{ color: red; }}");
        let processed = process_css(&source, &ValuesConfig::default(), &[]).unwrap();

        let warnings: Vec<String> = processed.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            warnings,
            vec![format!("Invalid value definition \"{params}\"")],
            "statement: {statement}"
        );
        assert!(processed.messages.is_empty(), "statement: {statement}");
        assert_eq!(processed.css, "\n.a { color: red; }", "statement: {statement}");
    }
}

#[test]
fn test_missing_semicolon_reports_merged_text() {
    let processed = process_css(
        "@value a: red\n@value b: blue;\n.x { color: a; }",
        &ValuesConfig::default(),
        &[],
    )
    .unwrap();

    assert_eq!(processed.warnings.len(), 1);
    assert_eq!(
        processed.warnings[0].to_string(),
        "Invalid value definition \"a: red\n@value b: blue\""
    );
    assert!(processed.messages.is_empty());
    assert_eq!(processed.css, "\n.x { color: a; }");
}

#[test]
fn test_invalid_statement_does_not_stop_processing() {
    let processed = process_css(
        "@value broken;\n@value ok: 1px;\n.x { margin: ok; }",
        &ValuesConfig::default(),
        &[],
    )
    .unwrap();

    assert_eq!(processed.warnings.len(), 1);
    assert_eq!(processed.messages.len(), 1);
    assert!(processed.css.ends_with(".x { margin: 1px; }"));
}
