//! Corpus line assembly from cleaned tokens.

use itertools::Itertools;

use crate::script::ScriptProfile;

/// Granularity of the emitted corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusLevel {
    /// Tokens flow into running text; a sentence terminator starts a new
    /// paragraph.
    Word,
    /// One token per line.
    Sentence,
    /// One token per blank-line-separated paragraph.
    Paragraph,
}

/// Joins tokens into corpus text at the requested granularity.
///
/// At [`CorpusLevel::Word`] every token is followed by its separator, the
/// last one included, so streamed batches concatenate cleanly. Terminators
/// come from the script profile.
pub fn reconstruct(profile: &ScriptProfile, tokens: &[String], level: CorpusLevel) -> String {
    match level {
        CorpusLevel::Word => {
            let mut out = String::new();
            for token in tokens {
                out.push_str(token);
                if token.ends_with(|c: char| profile.is_terminator(c)) {
                    out.push_str("\n\n");
                } else {
                    out.push(' ');
                }
            }
            out
        }
        CorpusLevel::Sentence => tokens.iter().join("\n"),
        CorpusLevel::Paragraph => tokens.iter().join("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptProfile;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn word_level_breaks_paragraph_after_terminator() {
        let profile = ScriptProfile::devanagari();
        let tokens = toks(&["नेपाल", "सुन्दर", "छ।", "हिमाल"]);
        assert_eq!(
            reconstruct(&profile, &tokens, CorpusLevel::Word),
            "नेपाल सुन्दर छ।\n\nहिमाल "
        );
    }

    #[test]
    fn word_level_keeps_trailing_separator() {
        let profile = ScriptProfile::devanagari();
        let tokens = toks(&["शब्द"]);
        assert_eq!(reconstruct(&profile, &tokens, CorpusLevel::Word), "शब्द ");
    }

    #[test]
    fn sentence_level_joins_with_newlines() {
        let profile = ScriptProfile::devanagari();
        let tokens = toks(&["पहिलो वाक्य।", "दोस्रो वाक्य।"]);
        assert_eq!(
            reconstruct(&profile, &tokens, CorpusLevel::Sentence),
            "पहिलो वाक्य।\nदोस्रो वाक्य।"
        );
    }

    #[test]
    fn paragraph_level_joins_with_blank_lines() {
        let profile = ScriptProfile::devanagari();
        let tokens = toks(&["अनुच्छेद एक", "अनुच्छेद दुई"]);
        assert_eq!(
            reconstruct(&profile, &tokens, CorpusLevel::Paragraph),
            "अनुच्छेद एक\n\nअनुच्छेद दुई"
        );
    }

    #[test]
    fn question_and_exclamation_also_terminate() {
        let profile = ScriptProfile::devanagari();
        let tokens = toks(&["किन?", "हो!"]);
        assert_eq!(
            reconstruct(&profile, &tokens, CorpusLevel::Word),
            "किन?\n\nहो!\n\n"
        );
    }

    #[test]
    fn empty_token_list_yields_empty_string() {
        let profile = ScriptProfile::devanagari();
        assert_eq!(reconstruct(&profile, &[], CorpusLevel::Word), "");
        assert_eq!(reconstruct(&profile, &[], CorpusLevel::Sentence), "");
    }
}
