//! Scene 1: choropleth of life expectancy.
//!
//! Every topology feature becomes one path, whether or not a record matches
//! it; the legend and interior borders are drawn on top.

use super::axis::{self, Orient};
use crate::color::interpolate_blues;
use crate::geometry::limits::{LEGEND_SWATCHES, LEGEND_SWATCH_HEIGHT};
use crate::geometry::path::{lines_d, polygons_d};
use crate::geometry::projection::Mercator;
use crate::join::FeatureJoin;
use crate::model::{Mark, Paint, Surface};
use crate::scales::{extent, LinearScale, SequentialScale};
use crate::scene::SceneInput;
use crate::tooltip::{value_text, Tooltip};
use log::debug;

pub const FEATURE_CLASS: &str = "country";
pub const MESH_CLASS: &str = "borders";
pub const LEGEND_CLASS: &str = "legend";

pub fn render(input: &SceneInput<'_>, join: &dyn FeatureJoin) -> Surface {
    let cfg = input.config;
    let mut surface = Surface::new(cfg.width, cfg.height);
    let filtered = input.filters.apply(input.dataset);
    if filtered.is_empty() {
        return surface;
    }

    let domain = extent(filtered.iter().filter_map(|r| r.life_expectancy));
    let color = domain.map(|d| SequentialScale::new(d, interpolate_blues));
    let projection = Mercator::new(cfg.projection_scale, cfg.projection_translate());
    let no_data = Paint::css(cfg.palette.no_data.as_str());
    let border = Paint::css(cfg.palette.border.as_str());

    let mut features = Vec::with_capacity(input.topology.features().len());
    for f in input.topology.features() {
        let matched = join.lookup(f, &filtered);
        debug!(
            "Country: {}, Life Expectancy: {}",
            f.name.as_deref().unwrap_or(""),
            value_text(matched.and_then(|r| r.life_expectancy))
        );
        let fill = match (matched.and_then(|r| r.life_expectancy), &color) {
            (Some(v), Some(scale)) => Paint::Rgb(scale.map(v)),
            _ => no_data.clone(),
        };
        let hover = matched.map(|r| {
            surface.add_tooltip(Tooltip::new([
                format!("Country: {}", r.country),
                format!("Life Expectancy: {}", value_text(r.life_expectancy)),
            ]))
        });
        features.push(Mark::Path {
            class: Some(FEATURE_CLASS.to_string()),
            d: polygons_d(&projection, &f.polygons),
            fill,
            stroke: border.clone(),
            stroke_width: Some(cfg.palette.border_width),
            hover,
        });
    }
    surface.push(Mark::group(None, None, features));

    surface.push(Mark::Path {
        class: Some(MESH_CLASS.to_string()),
        d: lines_d(&projection, input.topology.interior_mesh()),
        fill: Paint::None,
        stroke: border,
        stroke_width: Some(cfg.palette.border_width),
        hover: None,
    });

    if let (Some(domain), Some(color)) = (domain, color) {
        surface.push(legend(input, domain, &color));
    }
    surface
}

/// Vertical swatch strip plus a right-hand axis over the color domain.
///
/// Swatches sample the scale at `t · max` for t in 0.00..0.99, so with a
/// domain that does not start at zero the lower samples fall above the strip.
fn legend(input: &SceneInput<'_>, domain: (f64, f64), color: &SequentialScale) -> Mark {
    let cfg = input.config;
    let lg = &cfg.legend;
    let scale = LinearScale::new(domain, (0.0, lg.height));
    let mut children: Vec<Mark> = (0..LEGEND_SWATCHES)
        .map(|i| {
            let v = (i as f64 / LEGEND_SWATCHES as f64) * domain.1;
            Mark::Rect {
                class: None,
                x: 0.0,
                y: scale.map(v),
                width: lg.width,
                height: LEGEND_SWATCH_HEIGHT,
                fill: Paint::Rgb(color.map(v)),
                hover: None,
            }
        })
        .collect();
    children.push(axis::linear(&scale, Orient::Right, lg.ticks, (lg.width, 0.0)));
    Mark::group(
        Some(LEGEND_CLASS),
        Some((
            cfg.width - lg.width - lg.inset,
            cfg.height / 2.0 - lg.height / 2.0,
        )),
        children,
    )
}
