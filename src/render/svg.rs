use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{
    io::svg::{
        escape, write_svg_defs, write_svg_error, write_svg_footer, write_svg_header, Rgb, SvgStringWriter, SvgWriter,
        INBOUND_ARC, INBOUND_MARKER, OUTBOUND_ARC, OUTBOUND_MARKER, REGION_STROKE,
    },
    render::{interaction::format_count, FlowArc, RegionShape, RenderPlan},
};

const REGION_STROKE_WIDTH: f64 = 2.5;

fn draw_regions(writer: &mut impl Write, regions: &[RegionShape], reference: &str) -> Result<()> {
    let reference = escape(reference);
    for region in regions {
        let name = escape(&region.name);
        let coming = format_count(region.coming_from_reference);
        let going = format_count(region.going_to_reference);
        writeln!(
            writer,
            r#"<path class="state" d="{d}" fill="{fill}" stroke="{REGION_STROKE}" stroke-width="{REGION_STROKE_WIDTH}" data-name="{name}" data-coming="{coming}" data-going="{going}"><title>State: {name}&#10;Coming from {reference}: {coming}&#10;Going to {reference}: {going}</title></path>"#,
            d = region.path,
            fill = region.fill.color(),
        )?;
    }
    Ok(())
}

fn draw_arcs(writer: &mut impl Write, arcs: &[FlowArc], class: &str, stroke: Rgb, marker: &str) -> Result<()> {
    for arc in arcs {
        writeln!(
            writer,
            r#"<path class="{class}" d="{d}" stroke="{stroke}" stroke-width="{width:.3}" fill="none" marker-end="url(#{marker})" data-name="{name}"/>"#,
            d = arc.path,
            width = arc.stroke_width,
            name = escape(&arc.name),
        )?;
    }
    Ok(())
}

impl RenderPlan {
    /// Write the plan as a standalone SVG document.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_svg_header(writer, self.width, self.height)?;
        write_svg_defs(writer)?;
        draw_regions(writer, &self.regions, &self.reference)?;
        draw_arcs(writer, &self.outbound_arcs, "to", OUTBOUND_ARC, OUTBOUND_MARKER)?;
        draw_arcs(writer, &self.inbound_arcs, "from", INBOUND_ARC, INBOUND_MARKER)?;
        write_svg_footer(writer)
    }

    /// Write the plan to an SVG file.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer)?;
        writer.flush()
            .with_context(|| format!("[to_svg] Failed to flush {}", path.display()))?;
        Ok(())
    }

    /// Render the plan to an SVG string (for WASM/browser use).
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer)?;
        writer.into_string()
    }
}

/// Error-state document shown instead of the map when the data could not be loaded.
pub fn error_svg_string(width: f64, height: f64, message: &str) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    write_svg_error(&mut writer, width, height, message)?;
    writer.into_string()
}

/// Write the error-state document to a file.
pub fn write_error_svg(path: &Path, width: f64, height: f64, message: &str) -> Result<()> {
    let mut writer = SvgWriter::new(path)?;
    write_svg_error(&mut writer, width, height, message)?;
    writer.flush()
        .with_context(|| format!("[write_error_svg] Failed to flush {}", path.display()))?;
    Ok(())
}
