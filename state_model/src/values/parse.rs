//! String grammar for values.
//!
//! In priority order:
//! 1. blank input is `None`
//! 2. a signed decimal or exponential number is a `Double`
//! 3. `true` / `false` (any case) are booleans
//! 4. `none` (any case) is `None`
//! 5. `[d, d, ...]` with numbers only is a `DoubleArray`
//! 6. any other bracketed text is a `List`, split on commas that are not
//!    inside an open parenthesis
//! 7. everything else is a `String`

use regex::Regex;
use std::sync::LazyLock;

use super::Value;

static DOUBLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").expect("double pattern is valid")
});

static ARRAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[([-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?,\s*)*([-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?)\]$",
    )
    .expect("array pattern is valid")
});

pub(super) fn parse_value(input: &str) -> Value {
    let text = input.trim();
    if text.is_empty() {
        return Value::none();
    }

    if DOUBLE_PATTERN.is_match(text) {
        if let Ok(d) = text.parse::<f64>() {
            return Value::Double(d);
        }
    }

    if text.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if text.eq_ignore_ascii_case("none") {
        return Value::none();
    }

    if ARRAY_PATTERN.is_match(text) {
        let doubles: Option<Vec<f64>> = text[1..text.len() - 1]
            .split(',')
            .map(|d| d.trim().parse::<f64>().ok())
            .collect();
        if let Some(ds) = doubles {
            return Value::DoubleArray(ds);
        }
    }

    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        return Value::List(split_list(&text[1..text.len() - 1]));
    }

    Value::String(text.to_string())
}

/// Split the inside of a bracketed list into its elements.
///
/// A fragment that leaves a parenthesis open is merged with the next one
/// and the merged text is parsed again.
fn split_list(inner: &str) -> Vec<Value> {
    let mut items: Vec<Value> = Vec::new();
    let mut open_fragment: Option<String> = None;

    for fragment in inner.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let text = match open_fragment.take() {
            Some(open) => {
                items.pop();
                format!("{},{}", open, fragment)
            }
            None => fragment.to_string(),
        };

        items.push(parse_value(&text));
        if parenthesis_balance(&text) > 0 {
            open_fragment = Some(text);
        }
    }

    items
}

fn parenthesis_balance(text: &str) -> i64 {
    text.chars().fold(0, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}
