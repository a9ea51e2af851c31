//! Dotted-decimal node numbers ("2", "2.5", "2.521").
//!
//! The integer part is the chapter. Each digit after the decimal point is one
//! further level of nesting, so the length of the digit string is the node's
//! depth below its chapter root.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ProofMapError, Result};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\.([0-9]+))?$").expect("number pattern compiles"));

/// A validated node number.
///
/// Ordering is by numeric value of the full decimal expansion, with the raw
/// string as tie-break, so "2.01" < "2.1" and "1" < "1.0".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Number {
    raw: String,
    chapter: u64,
    /// Byte offset of the first decimal digit, if there is a decimal part.
    digits_at: Option<usize>,
}

impl Number {
    pub fn parse(src: &str) -> Result<Self> {
        let malformed = |reason| ProofMapError::MalformedNumber {
            number: src.to_string(),
            reason,
        };
        let caps = NUMBER_RE
            .captures(src)
            .ok_or_else(|| malformed("expected <chapter> or <chapter>.<digits>"))?;
        let chapter = caps[1]
            .parse::<u64>()
            .map_err(|_| malformed("chapter out of range"))?;
        let digits_at = caps.get(2).map(|m| m.start());
        Ok(Self {
            raw: src.to_string(),
            chapter,
            digits_at,
        })
    }

    /// The depth-1 number `"{chapter}.{digit}"`.
    pub fn primary(chapter: u64, digit: u8) -> Self {
        debug_assert!(digit < 10);
        let raw = format!("{chapter}.{digit}");
        let digits_at = Some(raw.len() - 1);
        Self {
            raw,
            chapter,
            digits_at,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn chapter(&self) -> u64 {
        self.chapter
    }

    /// The digit string after the decimal point, if any.
    pub fn decimal_digits(&self) -> Option<&str> {
        self.digits_at.map(|at| &self.raw[at..])
    }

    pub fn depth(&self) -> usize {
        self.decimal_digits().map_or(0, str::len)
    }

    /// First decimal digit; the primary subdivision this number lives under.
    pub fn leading_digit(&self) -> Option<char> {
        self.decimal_digits().and_then(|d| d.chars().next())
    }

    pub fn is_root(&self) -> bool {
        self.digits_at.is_none()
    }

    /// The number with its last decimal digit dropped.
    ///
    /// Only defined from depth 2 down: chapters and primary subdivisions have
    /// no parent under this scheme.
    pub fn parent(&self) -> Option<Number> {
        if self.depth() < 2 {
            return None;
        }
        let raw = self.raw[..self.raw.len() - 1].to_string();
        Some(Self {
            raw,
            chapter: self.chapter,
            digits_at: self.digits_at,
        })
    }

    /// True if `self` sits exactly one level below `other` in the same chapter.
    pub fn is_child_of(&self, other: &Number) -> bool {
        if self.chapter != other.chapter || self.depth() != other.depth() + 1 {
            return false;
        }
        let mine = self.decimal_digits().unwrap_or("");
        let theirs = other.decimal_digits().unwrap_or("");
        mine.starts_with(theirs)
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        self.chapter.cmp(&other.chapter).then_with(|| {
            let a = self.decimal_digits().unwrap_or("").as_bytes();
            let b = other.decimal_digits().unwrap_or("").as_bytes();
            // Compare as fractions: pad the shorter digit string with zeros.
            let len = a.len().max(b.len());
            (0..len)
                .map(|i| {
                    let da = a.get(i).copied().unwrap_or(b'0');
                    let db = b.get(i).copied().unwrap_or(b'0');
                    da.cmp(&db)
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other).then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for Number {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Number {
    type Err = ProofMapError;

    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s)
    }
}

impl TryFrom<String> for Number {
    type Error = ProofMapError;

    fn try_from(s: String) -> Result<Self> {
        Number::parse(&s)
    }
}

impl From<Number> for String {
    fn from(n: Number) -> String {
        n.raw
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_number.rs"]
mod tests;
