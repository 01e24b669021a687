//! Token cleaning against a script profile.

use std::sync::LazyLock;

use regex::Regex;

use crate::script::ScriptProfile;

static SQUEEZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replaces every run of characters outside the profile's allow set with a
/// single space, collapses whitespace, and trims.
///
/// The allow set is the script range plus ASCII digits, whitespace, and the
/// profile's punctuation. Cleaning is idempotent: `clean(clean(s)) ==
/// clean(s)`.
pub fn clean(profile: &ScriptProfile, text: &str) -> String {
    let stripped = profile.strip_pattern().replace_all(text, " ");
    SQUEEZE.replace_all(&stripped, " ").trim().to_string()
}

/// A cleaned token is worth keeping only when at least one character of the
/// script survives. Digit-only and punctuation-only residue is dropped.
pub fn accept(profile: &ScriptProfile, cleaned: &str) -> bool {
    profile.contains_script(cleaned)
}

/// Cleans each token and keeps the survivors, preserving order.
pub fn clean_tokens<I, S>(profile: &ScriptProfile, tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| clean(profile, token.as_ref()))
        .filter(|cleaned| !cleaned.is_empty() && accept(profile, cleaned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptProfile;

    #[test]
    fn strips_foreign_runs_to_single_space() {
        let profile = ScriptProfile::devanagari();
        assert_eq!(clean(&profile, "नमस्ते the संसार"), "नमस्ते संसार");
    }

    #[test]
    fn clean_is_idempotent() {
        let profile = ScriptProfile::devanagari();
        let once = clean(&profile, "  abcनेपाल  xyz!  ");
        assert_eq!(clean(&profile, &once), once);
    }

    #[test]
    fn accept_requires_script_character() {
        let profile = ScriptProfile::devanagari();
        assert!(accept(&profile, "नेपाल"));
        assert!(!accept(&profile, "123"));
        assert!(!accept(&profile, "!?."));
        assert!(!accept(&profile, ""));
    }

    #[test]
    fn clean_tokens_drops_empty_and_scriptless() {
        let profile = ScriptProfile::devanagari();
        let tokens = ["नेपाल", "hello", "123", "काठमाडौं।"];
        assert_eq!(clean_tokens(&profile, tokens), vec!["नेपाल", "काठमाडौं।"]);
    }

    #[test]
    fn devanagari_digits_count_as_script() {
        // U+0966..U+096F sit inside the Devanagari block, unlike ASCII digits.
        let profile = ScriptProfile::devanagari();
        assert!(accept(&profile, "१२३"));
    }
}
