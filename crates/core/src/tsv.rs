//! Tesseract TSV ingestion.
//!
//! The TSV is diagnostic output rather than a stable interchange format, so
//! rows that fail to parse are skipped, never surfaced as errors.

use tracing::debug;

use crate::detect::Detection;
use crate::geometry::BBox;

/// Tesseract layout hierarchy levels this adapter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsvLevel {
    /// Level 4 rows, one detection per text line.
    Line,
    /// Level 5 rows, one detection per word.
    Word,
}

impl TsvLevel {
    fn code(self) -> u32 {
        match self {
            TsvLevel::Line => 4,
            TsvLevel::Word => 5,
        }
    }
}

/// Parses `tesseract ... tsv` output into detections at the requested
/// level.
///
/// Keeps rows with the matching level code, a non-negative confidence, and
/// non-empty text after trimming. The header row, blank lines, and rows
/// with missing or malformed columns are skipped.
pub fn parse_detections(tsv: &str, level: TsvLevel) -> Vec<Detection> {
    let code = level.code();
    let mut detections = Vec::new();

    for (idx, row) in tsv.lines().enumerate() {
        if idx == 0 || row.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }
        let Ok(row_level) = fields[0].parse::<u32>() else {
            continue;
        };
        if row_level != code {
            continue;
        }
        let (Ok(x), Ok(y), Ok(w), Ok(h)) = (
            fields[6].parse::<i32>(),
            fields[7].parse::<i32>(),
            fields[8].parse::<i32>(),
            fields[9].parse::<i32>(),
        ) else {
            continue;
        };
        let Ok(confidence) = fields[10].parse::<f64>() else {
            continue;
        };
        if confidence < 0.0 {
            continue;
        }
        let text = fields[11].trim();
        if text.is_empty() {
            continue;
        }
        detections.push(Detection {
            text: text.to_string(),
            confidence,
            bbox: BBox::from_origin_size(x, y, w, h),
        });
    }

    debug!(rows = detections.len(), level = code, "parsed tsv detections");
    detections
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    fn row(level: u32, x: i32, y: i32, w: i32, h: i32, conf: f64, text: &str) -> String {
        format!("{level}\t1\t1\t1\t1\t1\t{x}\t{y}\t{w}\t{h}\t{conf}\t{text}")
    }

    #[test]
    fn selects_rows_at_requested_level() {
        let tsv = format!(
            "{HEADER}\n{}\n{}\n",
            row(4, 10, 20, 100, 30, 91.0, "पूरा लाइन"),
            row(5, 10, 20, 40, 30, 88.0, "पूरा"),
        );
        let lines = parse_detections(&tsv, TsvLevel::Line);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "पूरा लाइन");

        let words = parse_detections(&tsv, TsvLevel::Word);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "पूरा");
    }

    #[test]
    fn converts_origin_size_to_corners() {
        let tsv = format!("{HEADER}\n{}", row(4, 10, 20, 100, 30, 90.0, "शब्द"));
        let out = parse_detections(&tsv, TsvLevel::Line);
        assert_eq!(out[0].bbox, BBox::new(10, 20, 110, 50));
    }

    #[test]
    fn skips_negative_confidence_rows() {
        // Tesseract reports -1 for structural rows that carry no text score.
        let tsv = format!("{HEADER}\n{}", row(4, 0, 0, 10, 10, -1.0, "शब्द"));
        assert!(parse_detections(&tsv, TsvLevel::Line).is_empty());
    }

    #[test]
    fn skips_blank_text_and_short_rows() {
        let tsv = format!(
            "{HEADER}\n{}\n4\t1\t1\n\n{}",
            row(4, 0, 0, 10, 10, 95.0, "   "),
            row(4, 5, 5, 10, 10, 95.0, "ठीक"),
        );
        let out = parse_detections(&tsv, TsvLevel::Line);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "ठीक");
    }

    #[test]
    fn header_row_is_never_parsed() {
        assert!(parse_detections(HEADER, TsvLevel::Line).is_empty());
    }
}
