//! LineRenderer: flushes styled lines to a terminal or any writer.
//!
//! Lines are encoded into an internal buffer as crossterm commands and written
//! in one go. With color disabled the same lines are written as plain text.

use std::io::Write;

use anyhow::{Context, Result};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Line, Rgb, SpanStyle};

pub struct LineRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Write lines, each terminated by a newline.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write text without a trailing newline (prompts).
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.flush_buf()
    }

    /// Write one unstyled line, e.g. a JSON record.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out
            .write_all(&self.buf)
            .context("write to terminal")?;
        self.out.flush().context("flush terminal")?;
        Ok(())
    }
}

/// Encode lines into `out`, with or without ANSI styling.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        let mut current_style: Option<SpanStyle> = None;
        for span in &line.spans {
            if color && current_style != Some(span.style) {
                apply_style_into(out, span.style)?;
                current_style = Some(span.style);
            }
            out.queue(Print(span.text.as_str()))?;
        }
        if color && current_style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Span, ERROR};

    fn sample() -> Vec<Line> {
        vec![
            Line::from(Span::plain("hello")),
            Line::new()
                .with(Span::new("bad", ERROR))
                .with(Span::plain(" news")),
        ]
    }

    #[test]
    fn plain_encoding_has_no_escape_codes() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nbad news\n");
    }

    #[test]
    fn color_encoding_wraps_text_in_escape_codes() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), true, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains('\x1b'));
        assert!(s.contains("hello"));
        assert!(s.contains("bad"));
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn renderer_writes_into_any_writer() {
        let mut r = LineRenderer::new(Vec::new(), false);
        r.draw(&sample()).unwrap();
        r.prompt("> ").unwrap();
        let written = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(written, "hello\nbad news\n> ");
    }

    #[test]
    fn write_line_ignores_color_and_appends_newline() {
        let mut r = LineRenderer::new(Vec::new(), true);
        r.write_line("{\"type\":\"snapshot\"}").unwrap();
        let written = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(written, "{\"type\":\"snapshot\"}\n");
    }

    #[test]
    fn style_conversion() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb_to_color(rgb), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
