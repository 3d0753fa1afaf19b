//! Value grammars for theme token categories.
//!
//! These are deliberately narrower than full CSS: they accept the literal
//! forms design tokens are written in and nothing that would need a
//! stylesheet parser to interpret.

const LENGTH_UNITS: &[&str] = &["px", "rem", "em", "vh", "vw", "vmin", "vmax", "pt", "ch", "%"];
const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit", "black", "white"];
const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()/rgba()/hsl()/hsla()` or a keyword.
pub fn is_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if COLOR_KEYWORDS.contains(&value.to_ascii_lowercase().as_str()) {
        return true;
    }
    is_color_function(value)
}

fn is_color_function(value: &str) -> bool {
    let Some(open) = value.find('(') else {
        return false;
    };
    let name = value[..open].trim().to_ascii_lowercase();
    if !COLOR_FUNCTIONS.contains(&name.as_str()) {
        return false;
    }
    let Some(args) = value[open + 1..].strip_suffix(')') else {
        return false;
    };
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    matches!(parts.len(), 3 | 4) && parts.iter().all(|part| is_number_with(part, &["%", "deg"]))
}

fn is_plain_number(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        && token.parse::<f64>().is_ok()
}

fn is_number_with(token: &str, suffixes: &[&str]) -> bool {
    if is_plain_number(token) {
        return true;
    }
    suffixes.iter().any(|suffix| {
        token
            .strip_suffix(suffix)
            .map(is_plain_number)
            .unwrap_or(false)
    })
}

/// `0` or a signed number with a length unit.
pub fn is_length(token: &str) -> bool {
    if token == "0" {
        return true;
    }
    LENGTH_UNITS.iter().any(|unit| {
        token
            .strip_suffix(unit)
            .map(is_plain_number)
            .unwrap_or(false)
    })
}

/// `none`, or comma-separated layers of 2–4 lengths with an optional
/// `inset` keyword and an optional colour.
pub fn is_shadow(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value == "none" {
        return true;
    }
    split_top_level(value, |c| c == ',')
        .into_iter()
        .all(is_shadow_layer)
}

fn is_shadow_layer(layer: &str) -> bool {
    let mut lengths = 0;
    let mut colors = 0;
    let mut insets = 0;

    for token in split_top_level(layer, char::is_whitespace)
        .into_iter()
        .filter(|token| !token.is_empty())
    {
        if token == "inset" {
            insets += 1;
        } else if is_length(token) {
            lengths += 1;
        } else if is_color(token) {
            colors += 1;
        } else {
            return false;
        }
    }

    insets <= 1 && colors <= 1 && (2..=4).contains(&lengths)
}

/// Non-empty comma-separated family names; quoted names must be balanced.
pub fn is_font_family(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    split_top_level(value, |c| c == ',')
        .into_iter()
        .all(|family| is_family_name(family.trim()))
}

fn is_family_name(name: &str) -> bool {
    match name.chars().next() {
        None => false,
        Some(quote @ ('"' | '\'')) => {
            name.len() >= 3
                && name.ends_with(quote)
                && !name[1..name.len() - 1].contains(quote)
        }
        Some(_) => name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' ')),
    }
}

/// Split on separator characters that sit outside parentheses and quotes.
pub(crate) fn split_top_level(value: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                c if depth == 0 && is_separator(c) => {
                    parts.push(&value[start..idx]);
                    start = idx + c.len_utf8();
                }
                _ => {}
            },
        }
    }
    parts.push(&value[start..]);
    parts
}
