use crate::block::{Block, Segment};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Convert blocks to ANSI-styled terminal text
pub fn blocks_to_ansi(blocks: &[Block]) -> String {
    let mut out = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Bullet { content } | Block::Numbered { content } => {
                out.push_str("  ");
                segments_to_ansi(content, &mut out);
            }
            Block::Paragraph { content } => {
                segments_to_ansi(content, &mut out);
            }
            // The separating newline already leaves an empty line.
            Block::Break => {}
        }
    }

    out
}

fn segments_to_ansi(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Bold(text) => {
                out.push_str(BOLD);
                out.push_str(text);
                out.push_str(RESET);
            }
            Segment::Italic(text) => {
                out.push_str(ITALIC);
                out.push_str(text);
                out.push_str(RESET);
            }
        }
    }
}
