//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::io::svg::{escape, Rgb, HOVER_FILL, INBOUND_ARC, OUTBOUND_ARC};

/// Marker drawn at the end of reference → state arcs.
pub(crate) const OUTBOUND_MARKER: &str = "arrowhead-yellow";

/// Marker drawn at the end of state → reference arcs.
pub(crate) const INBOUND_MARKER: &str = "arrowhead-pink";

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for WASM/browser use
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl SvgStringWriter {
    /// Create a new string-based SVG writer
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Write the XML declaration and opening <svg> tag.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
    Ok(())
}

/// Write the style block and the two arrowhead markers.
pub(crate) fn write_svg_defs<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .state {{ stroke-linejoin: round; }}
    .state:hover {{ fill: {HOVER_FILL}; }}
    .to, .from {{ pointer-events: none; }}
</style>"##)?;
    write_marker(writer, OUTBOUND_MARKER, OUTBOUND_ARC)?;
    write_marker(writer, INBOUND_MARKER, INBOUND_ARC)?;
    writeln!(writer, "</defs>")?;
    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, id: &str, fill: Rgb) -> Result<()> {
    writeln!(writer, r##"<marker id="{id}" viewBox="0 0 10 10" refX="5" refY="5" markerWidth="6" markerHeight="6" orient="auto"><path d="M 0 0 L 10 5 L 0 10 Z" fill="{fill}"/></marker>"##)?;
    Ok(())
}

/// Write a centered error message in place of the map.
pub(crate) fn write_svg_error<W: Write>(writer: &mut W, width: f64, height: f64, message: &str) -> Result<()> {
    write_svg_header(writer, width, height)?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#fff5f5"/>"##)?;
    writeln!(
        writer,
        r##"<text class="error" x="{x}" y="{y}" text-anchor="middle" font-family="sans-serif" font-size="16" fill="{INBOUND_ARC}">{}</text>"##,
        escape(message),
        x = width / 2.0,
        y = height / 2.0,
    )?;
    write_svg_footer(writer)
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
