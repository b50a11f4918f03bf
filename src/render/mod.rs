mod interaction;
mod plan;
mod renderer;
mod svg;

pub use interaction::{HoverController, HoverUpdate, PointerPosition, Tooltip, TOOLTIP_OFFSET};
pub use plan::{ArcDirection, Centroid, FlowArc, RegionShape, RenderPlan};
pub use renderer::MigrationFlowRenderer;
pub use svg::{error_svg_string, write_error_svg};
