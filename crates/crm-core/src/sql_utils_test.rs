use super::*;

#[test]
fn test_escape_sql_string() {
    assert_eq!(escape_sql_string("hello"), "hello");
    assert_eq!(escape_sql_string("it's"), "it''s");
    assert_eq!(escape_sql_string("O'Brien's"), "O''Brien''s");
}

#[test]
fn test_escape_sql_string_empty() {
    assert_eq!(escape_sql_string(""), "");
}

#[test]
fn test_escape_sql_string_only_quotes() {
    assert_eq!(escape_sql_string("'''"), "''''''");
}

#[test]
fn test_escape_leaves_other_characters_alone() {
    // Backslashes, double quotes and non-ASCII text are not special in
    // standard SQL string literals.
    assert_eq!(escape_sql_string(r#"a\b "c" 张三"#), r#"a\b "c" 张三"#);
}

#[test]
fn test_quote_literal() {
    assert_eq!(quote_literal(""), "''");
    assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
}

#[test]
fn test_is_numeric_literal_accepts_numbers() {
    for value in ["50", "0", "-3", "+7", "87.5", ".5"] {
        assert!(is_numeric_literal(value), "{value} should be accepted");
    }
}

#[test]
fn test_is_numeric_literal_rejects_non_numbers() {
    for value in ["", "-", ".", "100.", "abc", "5 0", " 50", "1e3", "50); DROP TABLE clients; --"] {
        assert!(!is_numeric_literal(value), "{value:?} should be rejected");
    }
}
