//! Scene 2: one country's life expectancy over time.

use super::annotation::Annotation;
use super::axis::{self, Orient};
use crate::model::{Mark, Paint, Surface};
use crate::scales::{extent, LinearScale};
use crate::scene::SceneInput;
use crate::tooltip::Tooltip;

pub const MARKER_CLASS: &str = "marker";
pub const TITLE: &str = "Trend of Life Expectancy";

// Note offset from the surface center.
const NOTE_DX: f64 = 70.0;
const NOTE_DY: f64 = -70.0;

pub fn render(input: &SceneInput<'_>) -> Surface {
    let cfg = input.config;
    let mut surface = Surface::new(cfg.width, cfg.height);
    // the year filter does not apply here
    let filtered = input.filters.apply_country_only(input.dataset);
    if filtered.is_empty() {
        return surface;
    }

    let x = LinearScale::new(cfg.trend_years, (cfg.plot_left(), cfg.plot_right()));
    let y_domain = extent(filtered.iter().filter_map(|r| r.life_expectancy))
        .unwrap_or((f64::NAN, f64::NAN));
    let y = LinearScale::new(y_domain, (cfg.plot_bottom(), cfg.plot_top()));

    surface.push(axis::linear(&x, Orient::Bottom, cfg.axis_ticks, (0.0, cfg.plot_bottom())));
    surface.push(axis::linear(&y, Orient::Left, cfg.axis_ticks, (cfg.plot_left(), 0.0)));

    let mut markers = Vec::with_capacity(filtered.len());
    for r in &filtered {
        let Some(le) = r.life_expectancy else {
            continue;
        };
        let hover = surface.add_tooltip(Tooltip::new([
            format!("Year: {}", r.year),
            format!("Life Expectancy: {}", le),
        ]));
        markers.push(Mark::Circle {
            cx: x.map(r.year as f64),
            cy: y.map(le),
            r: cfg.marker_radius,
            fill: Paint::css(cfg.palette.mark.as_str()),
            hover: Some(hover),
        });
    }
    surface.push(Mark::group(Some(MARKER_CLASS), None, markers));

    let note = Annotation::new(
        cfg.width / 2.0,
        cfg.height / 2.0,
        NOTE_DX,
        NOTE_DY,
        TITLE,
        Paint::css(cfg.palette.note.as_str()),
    );
    surface.push(Mark::group(Some("annotation-group"), None, vec![note.to_mark()]));
    surface
}
