//! Scene 3: adult mortality against infant deaths for one country and year.

use super::annotation::Annotation;
use super::axis::{self, Orient};
use crate::geometry::limits::BAR_PADDING;
use crate::model::{Mark, Paint, Surface};
use crate::scales::{BandScale, LinearScale};
use crate::scene::SceneInput;
use crate::tooltip::Tooltip;

pub const BAR_CLASS: &str = "bar";
pub const ADULT_MORTALITY: &str = "Adult Mortality";
pub const INFANT_DEATHS: &str = "Infant Deaths";

// Labels float this far above the bar top, then offset by the same again.
const LABEL_LIFT: f64 = 10.0;

pub fn render(input: &SceneInput<'_>) -> Surface {
    let cfg = input.config;
    let mut surface = Surface::new(cfg.width, cfg.height);
    let filtered = input.filters.apply_exact(input.dataset);
    // (country, year) is assumed unique; extra matches are ignored
    let Some(record) = filtered.first() else {
        return surface;
    };

    let bars = [
        (ADULT_MORTALITY, record.adult_mortality),
        (INFANT_DEATHS, record.infant_deaths),
    ];
    let x = BandScale::new(
        bars.iter().map(|(l, _)| l.to_string()).collect(),
        (cfg.plot_left(), cfg.plot_right()),
        BAR_PADDING,
    );
    let max = bars.iter().map(|(_, v)| *v).fold(f64::NAN, f64::max);
    let y = LinearScale::new((0.0, max), (cfg.plot_bottom(), cfg.plot_top()));

    surface.push(axis::band(&x, Orient::Bottom, (0.0, cfg.plot_bottom())));
    surface.push(axis::linear(&y, Orient::Left, cfg.axis_ticks, (cfg.plot_left(), 0.0)));

    let mut rects = Vec::with_capacity(bars.len());
    let mut notes = Vec::with_capacity(bars.len());
    for (label, value) in bars {
        let Some(left) = x.map(label) else {
            continue;
        };
        let top = y.map(value);
        let hover = surface.add_tooltip(Tooltip::new([format!("{}: {}", label, value)]));
        rects.push(Mark::Rect {
            class: Some(BAR_CLASS.to_string()),
            x: left,
            y: top,
            width: x.bandwidth(),
            height: cfg.plot_bottom() - top,
            fill: Paint::css(cfg.palette.mark.as_str()),
            hover: Some(hover),
        });
        let note = Annotation::new(
            left + x.bandwidth() / 2.0,
            top - LABEL_LIFT,
            0.0,
            -LABEL_LIFT,
            format!("{}: {}", label, value),
            Paint::css(cfg.palette.label.as_str()),
        )
        .with_title(label);
        notes.push(note.to_mark());
    }
    surface.push(Mark::group(None, None, rects));
    surface.push(Mark::group(Some("annotation-group"), None, notes));
    surface
}
