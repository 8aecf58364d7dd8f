//! Identifier validity for property shorthand

/// Words that may never appear as an unquoted property or member key
const RESERVED_WORDS: &[&str] = &[
    "do", "if", "in", "for", "let", "new", "try", "var", "case", "else", "enum", "eval", "false",
    "null", "this", "true", "void", "with", "break", "catch", "class", "const", "super", "throw",
    "while", "yield", "delete", "export", "import", "public", "return", "static", "switch",
    "typeof", "default", "extends", "finally", "package", "private", "continue", "debugger",
    "function", "arguments", "interface", "protected", "implements", "instanceof",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns true if `name` can be written as `object.name` or `{ name: .. }`.
///
/// Only ASCII identifiers qualify (`[$A-Za-z_][$A-Za-z0-9_]*`).
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(
        chars.next(),
        Some(c) if c == '$' || c == '_' || c.is_ascii_alphabetic()
    );
    starts_well
        && chars.all(|c| c == '$' || c == '_' || c.is_ascii_alphanumeric())
        && !is_reserved_word(name)
}
