use std::path::PathBuf;

use anyhow::{Context, Result};
use migramap::{
    write_error_svg, AutoSource, Datasets, MigrationFlowRenderer, ProjectionConfig, RenderConfig, UnmatchedPolicy,
};
use tracing::warn;

use crate::cli::{Cli, RenderArgs, Unmatched};

fn render_config(args: &RenderArgs) -> RenderConfig {
    let defaults = RenderConfig::default();
    RenderConfig {
        reference: args.reference.clone(),
        width: args.width.unwrap_or(defaults.width),
        height: args.height.unwrap_or(defaults.height),
        projection: ProjectionConfig {
            scale: args.scale.unwrap_or(defaults.projection.scale),
            ..defaults.projection
        },
        unmatched: match args.unmatched {
            Unmatched::Outbound => UnmatchedPolicy::Outbound,
            Unmatched::Neutral => UnmatchedPolicy::Neutral,
        },
        ..defaults
    }
}

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let out_path: PathBuf = args.output.clone().unwrap_or("./map.svg".into());
    let renderer = MigrationFlowRenderer::new(render_config(args))?;
    let config = renderer.config();

    println!("[render] loading {} and {}", args.boundaries, args.migration);
    let source = AutoSource::new()?;
    let datasets = match Datasets::load(&source, &args.boundaries, &args.migration) {
        Ok(datasets) => datasets,
        Err(err) => {
            println!("[render] writing error map to {}", out_path.display());
            write_error_svg(&out_path, config.width, config.height, &err.to_string())?;
            return Err(err).context("[render] Could not load datasets");
        }
    };

    let (features, summary) = datasets.into_joined();
    if !summary.unmatched.is_empty() {
        warn!(states = ?summary.unmatched, "states without migration data");
    }
    if !summary.orphaned.is_empty() {
        warn!(names = ?summary.orphaned, "migration entries without a boundary");
    }
    println!("[render] joined {} of {} states", summary.matched, features.len());

    let plan = renderer.render(&features);
    println!(
        "[render] {} regions, {} arcs from {}, {} arcs to {}",
        plan.regions.len(),
        plan.outbound_arcs.len(),
        plan.reference,
        plan.inbound_arcs.len(),
        plan.reference,
    );

    println!("[render] writing map to {}", out_path.display());
    plan.to_svg(&out_path)?;

    Ok(())
}
