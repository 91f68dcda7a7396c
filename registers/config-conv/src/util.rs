// Licensed under the Apache-2.0 license

//! Identifier checks, numeric literal parsing and hex formatting shared by
//! the parsers and the code generator.

/// Words that cannot name a Rust item, including reserved ones.
const RUST_KEYWORDS: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns true if `name` is an ASCII identifier: a letter or underscore
/// followed by letters, digits or underscores.
///
/// # Examples
/// ```
/// use mems_reg_config_conv::util::is_identifier;
/// assert!(is_identifier("init_seq"));
/// assert!(is_identifier("_SIX_D"));
/// assert!(!is_identifier("6d_position"));
/// assert!(!is_identifier("free fall"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `name` is a Rust keyword (strict, reserved or `_`).
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Formats a byte as a fixed-width uppercase hex literal.
///
/// # Examples
/// ```
/// use mems_reg_config_conv::util::hex_byte;
/// assert_eq!(hex_byte(0x0A), "0x0A");
/// assert_eq!(hex_byte(0xFF), "0xFF");
/// ```
pub fn hex_byte(val: u8) -> String {
    format!("0x{val:02X}")
}

/// Base assumed for a numeric literal without a `0x` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

/// Parses an integer literal that must fit in one byte.
///
/// A `0x`/`0X` prefix always selects hexadecimal; otherwise `default` is
/// used. The error is a human-readable reason naming the literal.
///
/// # Examples
/// ```
/// use mems_reg_config_conv::util::{parse_byte, Radix};
/// assert_eq!(parse_byte("0x20", Radix::Decimal), Ok(0x20));
/// assert_eq!(parse_byte("20", Radix::Decimal), Ok(20));
/// assert_eq!(parse_byte("20", Radix::Hex), Ok(0x20));
/// assert!(parse_byte("256", Radix::Decimal).is_err());
/// ```
pub fn parse_byte(literal: &str, default: Radix) -> Result<u8, String> {
    let (digits, radix) = match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(digits) => (digits, 16),
        None if default == Radix::Hex => (literal, 16),
        None => (literal, 10),
    };

    if !digits.chars().any(|c| c.is_digit(radix))
        || !digits.chars().all(|c| c.is_digit(radix) || c == '-')
    {
        return Err(format!("`{literal}` is not a valid integer"));
    }

    match i64::from_str_radix(digits, radix) {
        Ok(value) => byte_in_range(value).ok_or_else(|| out_of_range(literal)),
        // Only reachable with well-formed digits, so the value is too large.
        Err(_) if digits.chars().skip(1).all(|c| c.is_digit(radix)) => Err(out_of_range(literal)),
        Err(_) => Err(format!("`{literal}` is not a valid integer")),
    }
}

pub(crate) fn byte_in_range(value: i64) -> Option<u8> {
    u8::try_from(value).ok()
}

pub(crate) fn out_of_range(literal: &str) -> String {
    format!("`{literal}` is out of range 0-255")
}

/// Collapses line breaks, including a lone `\r`, so the text can sit inside
/// a `//` comment.
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split(['\r', '\n'])
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
