//! Styled text spans for terminal rendering.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for SpanStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

pub const TITLE: SpanStyle = SpanStyle::fg(Rgb::new(255, 255, 255)).bold();
pub const FRAME: SpanStyle = SpanStyle::fg(Rgb::new(90, 90, 100));
pub const LABEL: SpanStyle = SpanStyle::fg(Rgb::new(140, 140, 140));
pub const OK: SpanStyle = SpanStyle::fg(Rgb::new(100, 220, 120));
pub const ERROR: SpanStyle = SpanStyle::fg(Rgb::new(220, 80, 80)).bold();
pub const EMPTY_SLOT: SpanStyle = SpanStyle::fg(Rgb::new(80, 80, 90)).dim();

/// Color used for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::default())
    }
}

/// One output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: Span) -> &mut Self {
        self.spans.push(span);
        self
    }

    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Text without styling
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// Plain text of several lines joined by newlines.
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
