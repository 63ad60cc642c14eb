use super::types::{TokenClass, WordDiffToken};

/// Split into alternating runs of whitespace and non-whitespace, so the
/// concatenation of the tokens reconstructs the input exactly.
fn split_tokens(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_is_ws = None;

    for (i, ch) in s.char_indices() {
        let is_ws = ch.is_whitespace();
        if let Some(prev) = prev_is_ws
            && prev != is_ws
        {
            tokens.push(&s[start..i]);
            start = i;
        }
        prev_is_ws = Some(is_ws);
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }
    tokens
}

/// Word-level diff between two strings, compared position by position.
///
/// A token that changed at the same position comes out as a removed/added
/// replacement pair; tokens past the shorter string's end are pure additions
/// or removals. There is no re-alignment after a word is inserted in the
/// middle, so the tail of such a line reads as a run of replacements.
pub fn diff_text(old: &str, new: &str) -> Vec<WordDiffToken> {
    let old_tokens = split_tokens(old);
    let new_tokens = split_tokens(new);
    let max = old_tokens.len().max(new_tokens.len());
    let mut out = Vec::with_capacity(max);

    for i in 0..max {
        match (old_tokens.get(i), new_tokens.get(i)) {
            (Some(o), Some(n)) if o == n => {
                out.push(WordDiffToken::new(*n, TokenClass::Unchanged));
            }
            (Some(o), Some(n)) => {
                out.push(WordDiffToken::new(*o, TokenClass::Removed));
                out.push(WordDiffToken::new(*n, TokenClass::Added));
            }
            (None, Some(n)) => out.push(WordDiffToken::new(*n, TokenClass::Added)),
            (Some(o), None) => out.push(WordDiffToken::new(*o, TokenClass::Removed)),
            (None, None) => {}
        }
    }
    out
}
