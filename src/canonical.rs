//! JSON key → exported identifier.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::inference::{CanonicalizationReason, InferenceError};

/// Maximal alphanumeric runs; everything else is a separator.
static RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Canonicalize a JSON key into an exported identifier.
///
/// The key must start with an ASCII letter. Each alphanumeric run gets its
/// first character upper-cased (when it is a lowercase letter) and the runs
/// are concatenated: `user_name` → `UserName`, `a-b_c` → `ABC`.
pub fn canonicalize(key: &str) -> Result<String, InferenceError> {
    let first = match key.chars().next() {
        Some(c) => c,
        None => {
            return Err(InferenceError::Canonicalization {
                key: key.to_string(),
                reason: CanonicalizationReason::Empty,
            });
        }
    };
    if !first.is_ascii_alphabetic() {
        return Err(InferenceError::Canonicalization {
            key: key.to_string(),
            reason: CanonicalizationReason::InvalidFirstChar(first),
        });
    }

    let mut out = String::with_capacity(key.len());
    for run in RUNS.find_iter(key) {
        let run = run.as_str();
        // runs are ASCII-only, so byte 0 is the first char
        let (head, tail) = run.split_at(1);
        out.push_str(&head.to_ascii_uppercase());
        out.push_str(tail);
    }
    Ok(out)
}

/// Punctuation Go's `encoding/json` accepts in a tag name, besides letters
/// and digits. Anything else (`,` `"` `\` `'` backtick, control or format
/// characters) makes Go misread or ignore the tag.
const TAG_PUNCTUATION: &str = "!#$%&()*+-./:;<=>?@[]^_{|}~ ";

/// Reject keys that cannot be written verbatim as a `json:"<key>"` tag name.
pub fn check_tag_key(key: &str) -> Result<(), InferenceError> {
    let bad = key.chars().find(|&c| {
        let allowed = if c.is_ascii() {
            c.is_ascii_alphanumeric() || TAG_PUNCTUATION.contains(c)
        } else {
            c.is_alphanumeric()
        };
        !allowed
    });
    match bad {
        Some(c) => Err(InferenceError::Canonicalization {
            key: key.to_string(),
            reason: CanonicalizationReason::InvalidTagChar(c),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_safe_keys_pass() {
        for key in ["user_name", "display-name", "a.b", "price (usd)", "über", "x/y:z"] {
            assert!(check_tag_key(key).is_ok(), "{key:?}");
        }
    }

    #[test]
    fn keys_go_cannot_tag_are_rejected() {
        for (key, c) in [("a,b", ','), ("q\"x", '"'), ("a`b", '`'), ("it's", '\''), ("back\\slash", '\\'), ("b\u{feff}c", '\u{feff}'), ("tab\tbed", '\t')] {
            let err = check_tag_key(key).unwrap_err();
            assert_eq!(
                err,
                InferenceError::Canonicalization {
                    key: key.to_string(),
                    reason: CanonicalizationReason::InvalidTagChar(c),
                }
            );
        }
    }

    #[test]
    fn snake_and_kebab_runs_are_capitalized() {
        assert_eq!(canonicalize("user_name").unwrap(), "UserName");
        assert_eq!(canonicalize("a-b_c").unwrap(), "ABC");
        assert_eq!(canonicalize("created-at.utc").unwrap(), "CreatedAtUtc");
    }

    #[test]
    fn run_tails_are_left_verbatim() {
        assert_eq!(canonicalize("userID").unwrap(), "UserID");
        assert_eq!(canonicalize("HTTPStatus").unwrap(), "HTTPStatus");
        assert_eq!(canonicalize("x_1st").unwrap(), "X1st");
        assert_eq!(canonicalize("v2").unwrap(), "V2");
    }

    #[test]
    fn separators_are_dropped_entirely() {
        assert_eq!(canonicalize("a__b").unwrap(), "AB");
        assert_eq!(canonicalize("price$ (usd)").unwrap(), "PriceUsd");
        assert_eq!(canonicalize("trailing_").unwrap(), "Trailing");
        // non-ASCII letters act as separators
        assert_eq!(canonicalize("caféau").unwrap(), "CafAu");
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = canonicalize("").unwrap_err();
        assert!(matches!(
            err,
            InferenceError::Canonicalization { reason: CanonicalizationReason::Empty, .. }
        ));
    }

    #[test]
    fn leading_non_letter_is_rejected() {
        for key in ["2fast", "_id", "-x", "éclair", " name"] {
            let err = canonicalize(key).unwrap_err();
            match err {
                InferenceError::Canonicalization { key: k, reason: CanonicalizationReason::InvalidFirstChar(c) } => {
                    assert_eq!(k, key);
                    assert_eq!(Some(c), key.chars().next());
                }
                other => panic!("unexpected error for {key:?}: {other}"),
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let a = canonicalize("some_key-name").unwrap();
        let b = canonicalize("some_key-name").unwrap();
        assert_eq!(a, b);
    }
}
