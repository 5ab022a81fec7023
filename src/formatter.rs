use std::sync::OnceLock;

use regex::Regex;

use crate::block::{Block, Segment};

fn bullet_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\*\s+").unwrap())
}

fn numbered_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\.\s+").unwrap())
}

// Double-asterisk branch first, so `**bold**` never parses as two italics.
// Both branches require a non-empty interior and the closing delimiter on
// the same line; unmatched markers stay literal text.
fn emphasis() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*[^*]+\*\*|\*[^*]+\*").unwrap())
}

/// Format raw message text into a list of blocks, one per input line.
pub fn format_message(content: &str) -> Vec<Block> {
    content
        .split('\n')
        .map(|line| {
            if bullet_prefix().is_match(line) {
                // The glyph goes through the tokenizer with the rest of the
                // line, so it lands inside the first plain segment.
                let line = bullet_prefix().replace(line, "\u{2022} ");
                Block::Bullet {
                    content: format_inline(&line),
                }
            } else if numbered_prefix().is_match(line) {
                // Numbered lines keep their literal prefix.
                Block::Numbered {
                    content: format_inline(line),
                }
            } else if line.trim().is_empty() {
                Block::Break
            } else {
                Block::Paragraph {
                    content: format_inline(line),
                }
            }
        })
        .collect()
}

/// Tokenize one line into plain, bold, and italic segments.
pub fn format_inline(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in emphasis().find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }

        let matched = m.as_str();
        if matched.starts_with("**") {
            segments.push(Segment::Bold(matched[2..matched.len() - 2].to_string()));
        } else {
            segments.push(Segment::Italic(matched[1..matched.len() - 1].to_string()));
        }

        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }

    if segments.is_empty() {
        segments.push(Segment::Plain(text.to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::Plain(text.to_string())
    }

    #[test]
    fn plain_line() {
        assert_eq!(
            format_message("water the fern"),
            vec![Block::Paragraph {
                content: vec![plain("water the fern")]
            }]
        );
    }

    #[test]
    fn bold() {
        assert_eq!(
            format_inline("**bold**"),
            vec![Segment::Bold("bold".to_string())]
        );
    }

    #[test]
    fn italic() {
        assert_eq!(
            format_inline("*italic*"),
            vec![Segment::Italic("italic".to_string())]
        );
    }

    #[test]
    fn mixed_segments() {
        assert_eq!(
            format_inline("a **b** c *d* e"),
            vec![
                plain("a "),
                Segment::Bold("b".to_string()),
                plain(" c "),
                Segment::Italic("d".to_string()),
                plain(" e"),
            ]
        );
    }

    #[test]
    fn bullet_line() {
        assert_eq!(
            format_message("* item one"),
            vec![Block::Bullet {
                content: vec![plain("\u{2022} item one")]
            }]
        );
    }

    #[test]
    fn bullet_strips_leading_whitespace() {
        assert_eq!(
            format_message("   * indented"),
            vec![Block::Bullet {
                content: vec![plain("\u{2022} indented")]
            }]
        );
    }

    #[test]
    fn bullet_requires_space_after_marker() {
        // No space after the asterisk and no closing partner: the line is a
        // paragraph holding the literal asterisk.
        assert_eq!(
            format_message("*nospacenoitalic"),
            vec![Block::Paragraph {
                content: vec![plain("*nospacenoitalic")]
            }]
        );
    }

    #[test]
    fn bullet_with_emphasis() {
        assert_eq!(
            format_message("* water **daily**"),
            vec![Block::Bullet {
                content: vec![plain("\u{2022} water "), Segment::Bold("daily".to_string())]
            }]
        );
    }

    #[test]
    fn numbered_line_keeps_prefix() {
        assert_eq!(
            format_message("1. first step"),
            vec![Block::Numbered {
                content: vec![plain("1. first step")]
            }]
        );
    }

    #[test]
    fn numbered_line_keeps_leading_whitespace() {
        assert_eq!(
            format_message("  2. second step"),
            vec![Block::Numbered {
                content: vec![plain("  2. second step")]
            }]
        );
    }

    #[test]
    fn empty_input_is_one_break() {
        assert_eq!(format_message(""), vec![Block::Break]);
    }

    #[test]
    fn blank_line_between_paragraphs() {
        assert_eq!(
            format_message("line one\n\nline two"),
            vec![
                Block::Paragraph {
                    content: vec![plain("line one")]
                },
                Block::Break,
                Block::Paragraph {
                    content: vec![plain("line two")]
                },
            ]
        );
    }

    #[test]
    fn unbalanced_marker_stays_literal() {
        assert_eq!(format_inline("a * b"), vec![plain("a * b")]);
        assert_eq!(format_inline("**open"), vec![plain("**open")]);
    }

    #[test]
    fn bold_preferred_over_adjacent_italics() {
        assert_eq!(
            format_inline("**bold** then *it*"),
            vec![
                Segment::Bold("bold".to_string()),
                plain(" then "),
                Segment::Italic("it".to_string()),
            ]
        );
    }

    #[test]
    fn marker_only_input_degrades_to_plain() {
        assert_eq!(format_inline("**"), vec![plain("**")]);
        assert_eq!(format_inline("****"), vec![plain("****")]);
    }

    #[test]
    fn empty_line_tokenizes_to_one_empty_segment() {
        assert_eq!(format_inline(""), vec![plain("")]);
    }

    #[test]
    fn plain_content_round_trips() {
        let input = "line one\nline two\nline three";
        let blocks = format_message(input);
        let rebuilt: Vec<String> = blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph { content } => content
                    .iter()
                    .map(|segment| match segment {
                        Segment::Plain(text) => text.as_str(),
                        _ => panic!("marker-free input produced styled segment"),
                    })
                    .collect(),
                _ => panic!("marker-free input produced non-paragraph block"),
            })
            .collect();
        assert_eq!(rebuilt.join("\n"), input);
    }

    #[test]
    fn emphasis_does_not_span_lines() {
        assert_eq!(
            format_message("half **bold\nrest** here"),
            vec![
                Block::Paragraph {
                    content: vec![plain("half **bold")]
                },
                Block::Paragraph {
                    content: vec![plain("rest** here")]
                },
            ]
        );
    }
}
