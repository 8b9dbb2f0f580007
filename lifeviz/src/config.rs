//! Viewer configuration.
//!
//! Every field has a default matching the stock page layout, so a partial
//! JSON object (or none at all) is a valid configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub width: f64,
    pub height: f64,
    /// Plot inset used by the trend and comparison scenes.
    pub margin: f64,
    pub projection_scale: f64,
    pub legend: LegendConfig,
    pub axis_ticks: usize,
    /// Fixed x domain of the trend scene, independent of the data.
    pub trend_years: (f64, f64),
    pub marker_radius: f64,
    pub palette: Palette,
    pub data_url: String,
    pub topology_url: String,
    /// Key under `objects` holding the country geometries.
    pub topology_object: String,
    pub elements: ElementIds,
}

impl Default for VizConfig {
    fn default() -> Self {
        VizConfig {
            width: 1200.0,
            height: 600.0,
            margin: 50.0,
            projection_scale: 150.0,
            legend: LegendConfig::default(),
            axis_ticks: 10,
            trend_years: (2000.0, 2020.0),
            marker_radius: 5.0,
            palette: Palette::default(),
            data_url: "Life Expectancy Data.csv".to_string(),
            topology_url: "https://unpkg.com/world-atlas@2.0.2/countries-50m.json".to_string(),
            topology_object: "countries".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl VizConfig {
    pub fn from_json_value(v: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(v)
    }

    /// Map translation: horizontally centered, shifted down to favour the northern hemisphere.
    pub fn projection_translate(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 1.5)
    }

    pub fn plot_left(&self) -> f64 {
        self.margin
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn plot_top(&self) -> f64 {
        self.margin
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between the legend and the right edge of the surface.
    pub inset: f64,
    pub ticks: usize,
}

impl Default for LegendConfig {
    fn default() -> Self {
        LegendConfig {
            width: 20.0,
            height: 200.0,
            inset: 20.0,
            ticks: 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub no_data: String,
    pub border: String,
    pub border_width: f64,
    pub mark: String,
    pub label: String,
    pub note: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            no_data: "#ccc".to_string(),
            border: "#333".to_string(),
            border_width: 0.5,
            mark: "steelblue".to_string(),
            label: "#000".to_string(),
            note: "grey".to_string(),
        }
    }
}

/// DOM ids the browser shell binds to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub surface: String,
    pub tooltip: String,
    pub country_select: String,
    pub year_select: String,
    pub prev: String,
    pub next: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            surface: "visualization".to_string(),
            tooltip: "tooltip".to_string(),
            country_select: "country-select".to_string(),
            year_select: "year-select".to_string(),
            prev: "prev-scene".to_string(),
            next: "next-scene".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_json_keeps_defaults() {
        let v = json!({"width": 800, "legend": {"ticks": 4}});
        let cfg = VizConfig::from_json_value(v).unwrap();
        assert_eq!(cfg.width, 800.0);
        assert_eq!(cfg.height, 600.0);
        assert_eq!(cfg.legend.ticks, 4);
        assert_eq!(cfg.legend.height, 200.0);
        assert_eq!(cfg.elements.surface, "visualization");
    }

    #[test]
    fn translate_follows_surface() {
        let cfg = VizConfig::default();
        assert_eq!(cfg.projection_translate(), (600.0, 400.0));
    }
}
