//! Plain-text renderers for reconstruction output.

use std::io::Write;

use crate::detect::TextLine;
use crate::error::Result;
use crate::layout::{Article, ParagraphBlock};

const ARTICLE_RULE_WIDTH: usize = 30;

/// Writes each article as a `HEADLINE:`/`CONTENT:` pair followed by a
/// horizontal rule. Articles with neither field are skipped. Returns the
/// number of articles written.
pub fn write_articles<W: Write>(out: &mut W, articles: &[Article]) -> Result<usize> {
    let mut written = 0;
    for article in articles {
        if article.headline.is_empty() && article.body.is_empty() {
            continue;
        }
        writeln!(out, "HEADLINE: {}", article.headline)?;
        writeln!(out, "CONTENT: {}", article.body)?;
        writeln!(out, "{}", "-".repeat(ARTICLE_RULE_WIDTH))?;
        written += 1;
    }
    Ok(written)
}

/// Writes one numbered row per paragraph block with its line count and
/// mean confidence.
pub fn write_block_report<W: Write>(out: &mut W, blocks: &[ParagraphBlock]) -> Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        let flat = block.text.replace('\n', " ");
        writeln!(
            out,
            "[{i}] Para (Lines: {}): {flat} | Confidence: {:.2}",
            block.line_count, block.confidence
        )?;
    }
    Ok(())
}

/// Writes one numbered row per normalized line, `||`-delimited so the text
/// column survives naive whitespace splitting.
pub fn write_line_dump<W: Write>(out: &mut W, lines: &[TextLine]) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "[{i}] || {} || {:.2}", line.text, line.confidence)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    fn article(headline: &str, body: &str) -> Article {
        Article {
            headline: headline.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn articles_render_with_rule_between() {
        let articles = vec![article("शीर्षक", "मुख्य पाठ।")];
        let mut buf = Vec::new();
        let n = write_articles(&mut buf, &articles).unwrap();
        assert_eq!(n, 1);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            format!("HEADLINE: शीर्षक\nCONTENT: मुख्य पाठ।\n{}\n", "-".repeat(30))
        );
    }

    #[test]
    fn empty_articles_are_skipped() {
        let articles = vec![article("", ""), article("", "पाठ मात्र")];
        let mut buf = Vec::new();
        let n = write_articles(&mut buf, &articles).unwrap();
        assert_eq!(n, 1);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("HEADLINE: \nCONTENT: पाठ मात्र\n"));
    }

    #[test]
    fn block_report_flattens_newlines() {
        let blocks = vec![ParagraphBlock {
            bbox: BBox::new(0, 0, 10, 10),
            text: "माथि\nतल".to_string(),
            confidence: 87.5,
            line_count: 2,
            stroke_width: 0.0,
        }];
        let mut buf = Vec::new();
        write_block_report(&mut buf, &blocks).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[0] Para (Lines: 2): माथि तल | Confidence: 87.50\n"
        );
    }

    #[test]
    fn line_dump_uses_double_bar_delimiters() {
        let lines = vec![TextLine {
            text: "नमूना".to_string(),
            confidence: 91.0,
            bbox: BBox::new(0, 0, 10, 10),
        }];
        let mut buf = Vec::new();
        write_line_dump(&mut buf, &lines).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[0] || नमूना || 91.00\n");
    }
}
