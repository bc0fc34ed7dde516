//! SQL literal helpers
//!
//! Generated scripts embed values as literals rather than bind parameters,
//! so every text value passes through [`escape_sql_string`] before it is
//! placed between single quotes.

/// Escape a SQL string literal value by doubling single quotes.
///
/// This is for use inside single-quoted SQL string literals, not identifiers.
///
/// # Examples
/// ```
/// use crm_core::sql_utils::escape_sql_string;
/// assert_eq!(escape_sql_string("O'Brien"), "O''Brien");
/// ```
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Wrap an already-unescaped value as a single-quoted SQL literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Check whether a value can be spliced into SQL as a bare numeric literal.
///
/// Accepts an optional sign, digits, and an optional fractional part
/// (`50`, `-3`, `87.5`). Exponents and surrounding whitespace are rejected.
pub fn is_numeric_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(&['-', '+'][..]).unwrap_or(value);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match frac_part {
        None => !int_part.is_empty() && all_digits(int_part),
        Some(frac) => !frac.is_empty() && all_digits(int_part) && all_digits(frac),
    }
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
