//! Target-script profiles for filtering and cleaning recognized text.
//!
//! A profile names the one writing system the pipeline retains. Everything
//! outside its allow-set {script range, ASCII digits, whitespace, a small
//! punctuation set} is treated as recognition noise.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LayoutError, Result};

/// Punctuation kept by the Devanagari profile: the Latin sentence marks the
/// engine emits for Nepali text, plus the danda.
pub const DEVANAGARI_PUNCTUATION: &[char] = &['.', ',', '?', '!', '।', '-', '(', ')'];

/// Sentence-final marks for the Devanagari profile.
pub const DEVANAGARI_TERMINATORS: &[char] = &['।', '?', '!'];

/// Shared Devanagari profile for callers that do not need a custom one.
pub static DEVANAGARI: LazyLock<ScriptProfile> = LazyLock::new(ScriptProfile::devanagari);

/// A target writing system and the character classes cleaning preserves.
///
/// The cleaning patterns are compiled once at construction; a profile is
/// cheap to share and clone afterwards.
#[derive(Debug, Clone)]
pub struct ScriptProfile {
    range: RangeInclusive<char>,
    punctuation: Vec<char>,
    terminators: Vec<char>,
    strip: Regex,
    has_script: Regex,
}

impl ScriptProfile {
    /// Compiles a profile retaining `range`, with `punctuation` surviving
    /// cleaning and `terminators` marking sentence ends.
    pub fn new(
        range: RangeInclusive<char>,
        punctuation: &[char],
        terminators: &[char],
    ) -> Result<Self> {
        if range.is_empty() {
            return Err(LayoutError::InvalidParameter(format!(
                "empty script range {:?}",
                range
            )));
        }

        let class = format!(
            r"\x{{{:X}}}-\x{{{:X}}}",
            u32::from(*range.start()),
            u32::from(*range.end())
        );
        let punct: String = punctuation
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();

        let strip = Regex::new(&format!("[^{class}0-9\\s{punct}]+"))
            .map_err(|e| LayoutError::InvalidParameter(e.to_string()))?;
        let has_script = Regex::new(&format!("[{class}]"))
            .map_err(|e| LayoutError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            range,
            punctuation: punctuation.to_vec(),
            terminators: terminators.to_vec(),
            strip,
            has_script,
        })
    }

    /// The profile for Devanagari (U+0900..=U+097F), covering Nepali and
    /// Hindi newsprint.
    pub fn devanagari() -> Self {
        Self::new(
            '\u{0900}'..='\u{097F}',
            DEVANAGARI_PUNCTUATION,
            DEVANAGARI_TERMINATORS,
        )
        .expect("builtin Devanagari profile compiles")
    }

    /// Pattern matching runs of characters outside the allow-set.
    pub(crate) fn strip_pattern(&self) -> &Regex {
        &self.strip
    }

    /// True if `text` carries at least one target-script codepoint.
    pub fn contains_script(&self, text: &str) -> bool {
        self.has_script.is_match(text)
    }

    /// True if `c` ends a sentence under this profile.
    pub fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    pub fn range(&self) -> &RangeInclusive<char> {
        &self.range
    }

    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }
}

impl Default for ScriptProfile {
    fn default() -> Self {
        DEVANAGARI.clone()
    }
}

impl PartialEq for ScriptProfile {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
            && self.punctuation == other.punctuation
            && self.terminators == other.terminators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_profile_recognizes_its_script() {
        let profile = ScriptProfile::devanagari();
        assert!(profile.contains_script("नमस्ते"));
        assert!(profile.contains_script("॥ पूर्ण विराम ॥"));
        assert!(!profile.contains_script("hello 123 !?"));
    }

    #[test]
    fn terminators_are_profile_scoped() {
        let profile = ScriptProfile::devanagari();
        assert!(profile.is_terminator('।'));
        assert!(profile.is_terminator('!'));
        assert!(!profile.is_terminator('.'));

        let latin = ScriptProfile::new('a'..='z', &['.'], &['.']).unwrap();
        assert!(latin.is_terminator('.'));
        assert!(!latin.is_terminator('।'));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = ScriptProfile::new('z'..='a', &[], &[]).unwrap_err();
        assert!(err.to_string().contains("script range"));
    }
}
