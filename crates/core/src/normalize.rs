//! Journal name canonicalization.
//!
//! The two curated lists disagree on case, spacing, punctuation, and the
//! `and`/`&` spelling. Every name is pushed through [`normalize`] before any
//! comparison; distances are never computed on raw names, otherwise trivial
//! case and whitespace differences dominate the signal.

/// Canonicalize a raw journal name for comparison.
///
/// Lower-cases, maps `-` `,` `(` `)` to spaces, splits `&` out as its own
/// token, rewrites the standalone token `and` to `&`, and collapses all
/// whitespace runs to single spaces. Total and idempotent: applying it to
/// its own output is a no-op, so `A & B` and `A and B` canonicalize to the
/// same string.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let mut spaced = String::with_capacity(lowered.len() + 4);
    for ch in lowered.chars() {
        match ch {
            '-' | ',' | '(' | ')' => spaced.push(' '),
            '&' => {
                spaced.push(' ');
                spaced.push('&');
                spaced.push(' ');
            }
            _ => spaced.push(ch),
        }
    }

    let mut out = String::with_capacity(spaced.len());
    for token in spaced.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(if token == "and" { "&" } else { token });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Nature Medicine "), "nature medicine");
        assert_eq!(normalize("PLOS ONE"), "plos one");
    }

    #[test]
    fn punctuation_becomes_spaces() {
        assert_eq!(normalize("Physica A-B"), "physica a b");
        assert_eq!(normalize("Cell (Cambridge, Mass.)"), "cell cambridge mass.");
    }

    #[test]
    fn and_ampersand_unify() {
        assert_eq!(normalize("Science and Medicine"), "science & medicine");
        assert_eq!(normalize("Science & Medicine"), "science & medicine");
        assert_eq!(normalize("Science&Medicine"), "science & medicine");
    }

    #[test]
    fn and_is_a_token_not_a_substring() {
        // "and" inside a word must survive untouched
        assert_eq!(normalize("Scandinavian Journal"), "scandinavian journal");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "Science AND Medicine",
            "  ACM Trans. on X-Y (Print) ",
            "R&D Management",
            "",
            "---",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(",-()"), "");
    }
}
