//! OCR line detections and their normalization into usable text lines.
//!
//! The engine hands over raw per-line records in scan order. Normalization
//! trims and NFC-normalizes the text, then applies the configured filters;
//! survivors become [`TextLine`] values the layout stages consume.

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::geometry::BBox;
use crate::script::ScriptProfile;

/// Interface chrome phrases that show up when newsprint is captured from a
/// web portal. Matching short lines are dropped when this list is active.
pub const NEPALI_UI_NOISE: &[&str] = &[
    "सेयर",
    "संग्रह",
    "Login",
    "कमेन्ट",
    "साझेदारी",
    "मिनेट",
    "अगाडि",
];

/// Raw line-level record as delivered by the OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    /// Engine confidence, 0 to 100.
    pub confidence: f64,
    pub bbox: BBox,
}

/// A surviving detection: trimmed, NFC-normalized, non-empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub confidence: f64,
    pub bbox: BBox,
}

/// Filters applied while normalizing raw detections.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// Drop detections below this confidence. Default: 0.0 (keep all)
    pub min_confidence: f64,

    /// Drop detections whose top edge lies above this row, cutting mastheads
    /// and browser chrome. Default: 0 (disabled)
    pub header_margin: i32,

    /// Keep only lines containing at least one target-script codepoint.
    /// Default: true
    pub script_filter: bool,

    /// Lines shorter than 20 chars containing any of these phrases are
    /// dropped as interface noise. Default: empty
    pub noise_phrases: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            header_margin: 0,
            script_filter: true,
            noise_phrases: Vec::new(),
        }
    }
}

impl NormalizeOptions {
    /// Enables the stock UI-noise phrase list for web-captured pages.
    pub fn with_nepali_ui_noise(mut self) -> Self {
        self.noise_phrases = NEPALI_UI_NOISE.iter().map(|s| s.to_string()).collect();
        self
    }
}

fn is_noise(text: &str, phrases: &[String]) -> bool {
    if phrases.is_empty() {
        return false;
    }
    // Only short fragments count as chrome; a long sentence that happens to
    // contain a listed phrase is real text.
    phrases.iter().any(|p| text.contains(p.as_str())) && text.chars().count() < 20
}

/// Normalizes raw detections, dropping the ones the filters reject.
///
/// Input order is preserved. Zero survivors is a valid outcome, not an
/// error.
pub fn normalize_lines(
    detections: &[Detection],
    options: &NormalizeOptions,
    script: &ScriptProfile,
) -> Vec<TextLine> {
    let mut lines = Vec::with_capacity(detections.len());

    for det in detections {
        let trimmed = det.text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if det.confidence < options.min_confidence {
            continue;
        }
        if options.header_margin > 0 && det.bbox.y0 < options.header_margin {
            continue;
        }

        let text: String = trimmed.nfc().collect();
        if options.script_filter && !script.contains_script(&text) {
            continue;
        }
        if is_noise(&text, &options.noise_phrases) {
            continue;
        }

        lines.push(TextLine {
            text,
            confidence: det.confidence,
            bbox: det.bbox.normalized(),
        });
    }

    debug!(
        total = detections.len(),
        kept = lines.len(),
        "normalized detections"
    );
    lines
}

/// Sorts lines into reading order: top edge ascending, left edge breaking
/// ties. Clustering requires this order.
pub fn sort_reading_order(lines: &mut [TextLine]) {
    lines.sort_by_key(|line| (line.bbox.y0, line.bbox.x0));
}

/// Rightmost extent across raw detections, the usual stand-in for page
/// width when the caller does not know the real one.
pub fn max_right_edge(detections: &[Detection]) -> i32 {
    detections.iter().map(|d| d.bbox.x1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(text: &str, confidence: f64, y0: i32) -> Detection {
        Detection {
            text: text.to_string(),
            confidence,
            bbox: BBox::new(0, y0, 100, y0 + 20),
        }
    }

    #[test]
    fn reading_order_sorts_by_top_then_left() {
        let mut lines = vec![
            TextLine {
                text: "b".into(),
                confidence: 90.0,
                bbox: BBox::new(50, 10, 90, 30),
            },
            TextLine {
                text: "c".into(),
                confidence: 90.0,
                bbox: BBox::new(0, 40, 40, 60),
            },
            TextLine {
                text: "a".into(),
                confidence: 90.0,
                bbox: BBox::new(0, 10, 40, 30),
            },
        ];
        sort_reading_order(&mut lines);
        let order: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn noise_check_requires_short_text() {
        let phrases = vec!["Login".to_string()];
        assert!(is_noise("Login गर्नुहोस्", &phrases));
        assert!(!is_noise(
            "Login भन्ने शब्द यो लामो हरफको बीचमा आउँछ तर हरफ जोगिन्छ",
            &phrases
        ));
        assert!(!is_noise("Login", &[]));
    }

    #[test]
    fn filters_drop_blank_low_confidence_and_header_rows() {
        let options = NormalizeOptions {
            min_confidence: 60.0,
            header_margin: 80,
            script_filter: false,
            noise_phrases: Vec::new(),
        };
        let script = ScriptProfile::devanagari();
        let detections = vec![
            det("   ", 95.0, 100),
            det("faint", 30.0, 100),
            det("masthead", 95.0, 10),
            det("kept", 95.0, 100),
        ];
        let lines = normalize_lines(&detections, &options, &script);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "kept");
    }
}
