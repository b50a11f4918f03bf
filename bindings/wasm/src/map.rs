use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use migramap_core::{HoverController, MigrationFlowRenderer, PointerPosition, RegionShape, RenderPlan};

use crate::common::*;

#[wasm_bindgen]
pub struct FlowMap {
    plan: RenderPlan,
    unmatched: Vec<String>,
    hover: HoverController,
}

impl FlowMap {
    fn region(&self, name: &str) -> Result<&RegionShape, JsValue> {
        self.plan.region(name)
            .ok_or_else(|| js_err(format!("Region {name:?} is not drawn on this map.")))
    }
}

#[wasm_bindgen]
impl FlowMap {
    /// Build the map from the two dataset texts the host has already fetched:
    /// geojson: FeatureCollection of state boundaries,
    /// migration: { "Texas": { "coming_from_california": ..., "going_to_california": ... }, ... }
    /// options: optional { reference, width, height, projection: { scale, translate }, stroke_range, unmatched }
    #[wasm_bindgen(constructor)]
    pub fn new(geojson: &str, migration: &str, options: JsValue) -> Result<FlowMap, JsValue> {
        let config = parse_options(options).map_err(js_err)?;
        let renderer = MigrationFlowRenderer::new(config).map_err(js_err)?;

        let datasets = migramap_core::Datasets::from_slices(geojson.as_bytes(), migration.as_bytes())
            .map_err(js_err)?;
        let (features, summary) = datasets.into_joined();

        let plan = renderer.render(&features);
        let hover = HoverController::new(plan.reference.clone());
        Ok(FlowMap { plan, unmatched: summary.unmatched, hover })
    }

    /// SVG document for the whole map. UI can set innerHTML or create a Blob.
    #[wasm_bindgen(js_name = "to_svg")]
    pub fn to_svg(&self) -> Result<String, JsValue> {
        self.plan.to_svg_string().map_err(js_err)
    }

    /// Region shapes as [{ name, path, fill, coming_from_reference, going_to_reference, difference }].
    pub fn regions(&self) -> Result<JsValue, JsValue> { to_js(&self.plan.regions) }

    /// Reference → state arcs as [{ name, direction, path, stroke_width, difference }].
    pub fn outbound_arcs(&self) -> Result<JsValue, JsValue> { to_js(&self.plan.outbound_arcs) }

    /// State → reference arcs.
    pub fn inbound_arcs(&self) -> Result<JsValue, JsValue> { to_js(&self.plan.inbound_arcs) }

    /// Names of drawn states that had no migration record.
    pub fn unmatched(&self) -> Result<JsValue, JsValue> { to_js(&self.unmatched) }

    /// Pointer entered a region: returns { region, fill, tooltip }.
    pub fn on_hover(&mut self, name: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let region = self.region(name)?.clone();
        let update = self.hover.on_hover(&region, PointerPosition::new(x, y));
        to_js(&update)
    }

    /// Pointer moved: returns the repositioned tooltip, or null when nothing is hovered.
    pub fn on_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        match self.hover.on_move(PointerPosition::new(x, y)) {
            Some(tooltip) => to_js(&tooltip),
            None => Ok(JsValue::NULL),
        }
    }

    /// Pointer left a region: returns { region, fill, tooltip } with the base fill restored.
    pub fn on_leave(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let region = self.region(name)?.clone();
        let update = self.hover.on_leave(&region);
        to_js(&update)
    }

    /// Standalone error-state SVG, for when the host could not fetch a dataset.
    pub fn error_svg(message: &str, options: JsValue) -> Result<String, JsValue> {
        let config = parse_options(options).map_err(js_err)?;
        migramap_core::error_svg_string(config.width, config.height, message).map_err(js_err)
    }
}
