use crate::compiler::constants::RESERVED_WORDS;

/// The case a dialect folds unquoted identifiers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldedCase {
    Lower,
    Upper,
}

/// True when `ident` can appear in SQL without quotes and still name the same object, given
/// that the dialect folds unquoted identifiers to `case`. Only identifiers already written in
/// the folded case qualify.
pub fn is_plain_identifier(ident: &str, case: FoldedCase) -> bool {
    let is_letter = |c: char| match case {
        FoldedCase::Lower => c.is_ascii_lowercase(),
        FoldedCase::Upper => c.is_ascii_uppercase(),
    };
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(is_letter(first) || first == '_') {
        return false;
    }
    if !chars.all(|c| is_letter(c) || c.is_ascii_digit() || c == '_') {
        return false;
    }
    !RESERVED_WORDS.contains(&ident.to_ascii_lowercase().as_str())
}
