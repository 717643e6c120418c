//! Bad-language moderation for user-submitted text.
//!
//! # Responsibility
//! - Reject text containing any blacklisted substring, case-insensitively.
//! - Report the outcome as a plain value the calling layer can surface as a
//!   user-facing form error.
//!
//! # Invariants
//! - Validation is read-only; checked text is never rewritten.
//! - Blacklists are normalized once at construction: entries are trimmed,
//!   lowercased, de-duplicated, and blank entries are dropped.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Rejection reason reported for any blacklist hit.
pub const BAD_LANGUAGE_MESSAGE: &str = "The text contains bad language";

const DEFAULT_BAD_WORDS: &[&str] = &["bad_word_1", "bad_word_2", "bad_word_3"];

static DEFAULT_VALIDATOR: Lazy<BadWordValidator> = Lazy::new(BadWordValidator::default);

/// Returns the process-wide validator backed by the built-in blacklist.
pub fn default_validator() -> &'static BadWordValidator {
    &DEFAULT_VALIDATOR
}

/// Outcome of one moderation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    /// Human-readable reason suitable for a form error message.
    Rejected(String),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Substring blacklist validator over free text.
#[derive(Debug, Clone)]
pub struct BadWordValidator {
    bad_words: Vec<String>,
}

impl Default for BadWordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_BAD_WORDS.iter().copied())
    }
}

impl BadWordValidator {
    /// Builds a validator from a caller-supplied blacklist.
    ///
    /// An empty blacklist (or one that normalizes to empty) accepts every
    /// input.
    pub fn new<I, S>(bad_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut normalized = Vec::new();
        for word in bad_words {
            let word = word.into().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.clone()) {
                normalized.push(word);
            }
        }
        Self {
            bad_words: normalized,
        }
    }

    /// Returns the normalized blacklist entries in declaration order.
    pub fn bad_words(&self) -> &[String] {
        &self.bad_words
    }

    /// Checks `text` against the blacklist, case-insensitively.
    ///
    /// The first matching entry rejects with [`BAD_LANGUAGE_MESSAGE`];
    /// empty text always passes.
    pub fn validate(&self, text: &str) -> ValidationResult {
        if text.is_empty() || self.bad_words.is_empty() {
            return ValidationResult::Accepted;
        }

        let haystack = text.to_lowercase();
        for word in &self.bad_words {
            if haystack.contains(word.as_str()) {
                return ValidationResult::Rejected(BAD_LANGUAGE_MESSAGE.to_string());
            }
        }

        ValidationResult::Accepted
    }
}
