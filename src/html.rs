use crate::block::{Block, Segment};

/// Convert blocks to an HTML fragment
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Bullet { content } | Block::Numbered { content } => {
                out.push_str("<div class=\"list-item\">");
                segments_to_html(content, &mut out);
                out.push_str("</div>\n");
            }
            Block::Paragraph { content } => {
                out.push_str("<p>");
                segments_to_html(content, &mut out);
                out.push_str("</p>\n");
            }
            Block::Break => {
                out.push_str("<br>\n");
            }
        }
    }

    out
}

fn segments_to_html(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Plain(text) => push_escaped(text, out),
            Segment::Bold(text) => {
                out.push_str("<strong>");
                push_escaped(text, out);
                out.push_str("</strong>");
            }
            Segment::Italic(text) => {
                out.push_str("<em>");
                push_escaped(text, out);
                out.push_str("</em>");
            }
        }
    }
}

fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::message_to_html;

    #[test]
    fn paragraph() {
        assert_eq!(message_to_html("Hello world"), "<p>Hello world</p>\n");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            message_to_html("a **b** *c*"),
            "<p>a <strong>b</strong> <em>c</em></p>\n"
        );
    }

    #[test]
    fn bullet_item() {
        assert_eq!(
            message_to_html("* item"),
            "<div class=\"list-item\">\u{2022} item</div>\n"
        );
    }

    #[test]
    fn numbered_item() {
        assert_eq!(
            message_to_html("1. item"),
            "<div class=\"list-item\">1. item</div>\n"
        );
    }

    #[test]
    fn blank_line_is_br() {
        assert_eq!(
            message_to_html("one\n\ntwo"),
            "<p>one</p>\n<br>\n<p>two</p>\n"
        );
    }

    #[test]
    fn escapes_html() {
        assert_eq!(
            message_to_html("a <b> & **<c>**"),
            "<p>a &lt;b&gt; &amp; <strong>&lt;c&gt;</strong></p>\n"
        );
    }
}
