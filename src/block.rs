use serde::Serialize;

/// Inline text runs with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Bold(String),
    Italic(String),
}

/// A rendered unit corresponding to one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// List line whose marker has been replaced with a bullet glyph
    Bullet { content: Vec<Segment> },
    /// List line with a literal `1.`-style prefix, kept verbatim
    Numbered { content: Vec<Segment> },
    Paragraph { content: Vec<Segment> },
    /// Produced by a blank line
    Break,
}
