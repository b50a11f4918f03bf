#![doc = "migramap public API"]
mod config;
mod data;
mod flow;
mod io;
mod proj;
mod render;

#[doc(inline)]
pub use config::{ProjectionConfig, RenderConfig, DEFAULT_REFERENCE};

#[doc(inline)]
pub use data::{
    join, AutoSource, DatasetSource, Datasets, DiskSource, Flow, JoinSummary, LoadError, MemSource,
    MigrationRecord, MigrationTable, StateFeature, COMING_FIELD, GOING_FIELD,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use data::HttpSource;

#[doc(inline)]
pub use flow::{
    classify, inbound_set, is_inbound_heavy, is_outbound_heavy, outbound_set, stroke_width_scale, ArcPath,
    FillClass, LinearScale, NetMigration, UnmatchedPolicy, CURVATURE, INBOUND_THRESHOLD, OUTBOUND_THRESHOLD,
};

#[doc(inline)]
pub use io::svg::{
    Rgb, HOVER_FILL, INBOUND_ARC, INBOUND_FILL, NEUTRAL_FILL, OUTBOUND_ARC, OUTBOUND_FILL, REFERENCE_FILL,
    REGION_STROKE,
};

#[doc(inline)]
pub use proj::AlbersUsa;

#[doc(inline)]
pub use render::{
    error_svg_string, write_error_svg, ArcDirection, Centroid, FlowArc, HoverController, HoverUpdate,
    MigrationFlowRenderer, PointerPosition, RegionShape, RenderPlan, Tooltip, TOOLTIP_OFFSET,
};
