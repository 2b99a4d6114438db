//! Whitespace tokenizer.
//!
//! There is no quoting or escaping: a value can never contain whitespace.

/// Split `descriptor` on whitespace.  Empty or blank input yields no tokens.
pub fn tokenize(descriptor: &str) -> Vec<&str> {
    descriptor.split_whitespace().collect()
}

/// `true` for tokens of the form `--name`.
#[inline]
pub fn is_flag(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// Walk `tokens` as `(flag, value)` pairs, yielding each flag with its
/// token position.  A flag followed by another flag (or by the end of the
/// stream) has no value.  Stray values not preceded by a flag are skipped.
pub(crate) fn flag_pairs<'a>(tokens: &[&'a str]) -> Vec<(usize, &'a str, Option<&'a str>)> {
    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if !is_flag(token) {
            i += 1;
            continue;
        }
        match tokens.get(i + 1) {
            Some(&value) if !is_flag(value) => {
                pairs.push((i, token, Some(value)));
                i += 2;
            }
            _ => {
                pairs.push((i, token, None));
                i += 1;
            }
        }
    }
    pairs
}
