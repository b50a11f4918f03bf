//! Pointer interaction over rendered regions.
//!
//! The host forwards pointer events; each method takes everything it needs as
//! parameters and returns what the host should apply to the drawing.

use serde::{Deserialize, Serialize};

use crate::{config::DEFAULT_REFERENCE, io::svg::{escape, Rgb, HOVER_FILL}, render::RegionShape};

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (20.0, -20.0);

/// Pointer position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    /// HTML content; region names are escaped.
    pub html: String,
}

/// What to apply to a region and the tooltip after a hover or leave event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverUpdate {
    pub region: String,
    pub fill: Rgb,
    pub tooltip: Tooltip,
}

/// Tracks the hovered region and the tooltip state.
#[derive(Clone, Debug)]
pub struct HoverController {
    reference: String,
    active: Option<String>,
    tooltip: Tooltip,
}

impl Default for HoverController {
    fn default() -> Self { Self::new(DEFAULT_REFERENCE) }
}

impl HoverController {
    /// `reference` names the region the tooltip counts are relative to.
    pub fn new(reference: impl Into<String>) -> Self {
        Self { reference: reference.into(), active: None, tooltip: Tooltip::default() }
    }

    pub fn active(&self) -> Option<&str> { self.active.as_deref() }

    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }

    /// Pointer entered `region`: highlight it and show its counts next to the pointer.
    pub fn on_hover(&mut self, region: &RegionShape, position: PointerPosition) -> HoverUpdate {
        self.active = Some(region.name.clone());
        self.tooltip = Tooltip { visible: true, html: tooltip_html(region, &self.reference), ..Tooltip::default() };
        self.place(position);

        HoverUpdate { region: region.name.clone(), fill: HOVER_FILL, tooltip: self.tooltip.clone() }
    }

    /// Pointer moved: follow it with the tooltip. `None` if nothing is hovered.
    pub fn on_move(&mut self, position: PointerPosition) -> Option<Tooltip> {
        self.active.as_ref()?;
        self.place(position);
        Some(self.tooltip.clone())
    }

    /// Pointer left `region`: restore its classified fill and hide the tooltip.
    pub fn on_leave(&mut self, region: &RegionShape) -> HoverUpdate {
        if self.active.as_deref() == Some(region.name.as_str()) {
            self.active = None;
        }
        self.tooltip.visible = false;

        HoverUpdate { region: region.name.clone(), fill: region.fill.color(), tooltip: self.tooltip.clone() }
    }

    fn place(&mut self, position: PointerPosition) {
        self.tooltip.left = position.x + TOOLTIP_OFFSET.0;
        self.tooltip.top = position.y + TOOLTIP_OFFSET.1;
    }
}

/// Format a count the way it reads in the tooltip; unset counts read "n/a".
pub(crate) fn format_count(count: Option<f64>) -> String {
    match count {
        Some(v) if v == f64::INFINITY => "Infinity".to_string(),
        Some(v) if v == f64::NEG_INFINITY => "-Infinity".to_string(),
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

fn tooltip_html(region: &RegionShape, reference: &str) -> String {
    let reference = escape(reference);
    format!(
        "State: {}<br>Coming from {reference}: {}<br>Going to {reference}: {}",
        escape(&region.name),
        format_count(region.coming_from_reference),
        format_count(region.going_to_reference),
    )
}
