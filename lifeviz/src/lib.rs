pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod join;
pub mod model;
pub mod nav;
pub mod scales;
pub mod state;
pub mod topology;
pub mod tooltip;
pub mod geometry {
    pub mod limits;
    pub mod path;
    pub mod projection;
}
pub mod scene {
    pub mod annotation;
    pub mod axis;
    pub mod comparison;
    pub mod map;
    pub mod trend;

    pub use super::scene_dispatch::{render_scene, SceneInput};
}
mod color;
mod scene_dispatch;
mod svg;

pub use color::{interpolate_blues, interpolate_rgb_basis, BLUES};
pub use config::VizConfig;
pub use data::{Dataset, Record};
pub use error::{Control, DispatchError, LoadError};
pub use filters::{FilterOptions, Filters, Selection};
pub use model::{Mark, Surface};
pub use nav::{Controls, Scene};
pub use scene::{render_scene, SceneInput};
pub use state::{AppState, Event, Transition};
pub use svg::fmt_num;
pub use topology::{GeoFeature, Topology};

use log::info;

/// Everything the shell needs once both inputs are in.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub dataset: Dataset,
    pub topology: Topology,
    pub options: FilterOptions,
}

/// One viewer: configuration, the current [`AppState`], and the loaded data.
///
/// All user input goes through [`Session::dispatch`]; the caller redraws
/// when it returns `Ok(true)`.
pub struct Session {
    config: VizConfig,
    state: AppState,
    loaded: Option<Loaded>,
    last_surface: Option<Surface>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(VizConfig::default())
    }
}

impl Session {
    pub fn new(config: VizConfig) -> Self {
        Session {
            config,
            state: AppState::default(),
            loaded: None,
            last_surface: None,
        }
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded(&self) -> Option<&Loaded> {
        self.loaded.as_ref()
    }

    /// Parse both inputs and install them. Nothing is installed unless both parse.
    pub fn load(&mut self, csv_text: &str, topology_json: &str) -> Result<(), LoadError> {
        let result = Dataset::from_csv_str(csv_text).and_then(|dataset| {
            let topology =
                Topology::from_json_str(topology_json, &self.config.topology_object)?;
            Ok((dataset, topology))
        });
        let (dataset, topology) = result?;
        self.install(dataset, topology);
        Ok(())
    }

    /// Install already-parsed inputs and derive the selectable options.
    pub fn install(&mut self, dataset: Dataset, topology: Topology) {
        let options = FilterOptions::from_dataset(&dataset);
        info!(
            "loaded {} records ({} countries, {} years) and {} features",
            dataset.len(),
            options.countries().len(),
            options.years().len(),
            topology.features().len()
        );
        self.loaded = Some(Loaded {
            dataset,
            topology,
            options,
        });
        self.last_surface = None;
    }

    /// Options for the two selection controls, "All" first. Empty lists
    /// (apart from the sentinel) until data is loaded.
    pub fn options(&self) -> FilterOptions {
        self.loaded
            .as_ref()
            .map(|l| l.options.clone())
            .unwrap_or_default()
    }

    /// Apply one input event. Returns whether a redraw is due.
    pub fn dispatch(&mut self, event: Event) -> Result<bool, DispatchError> {
        let empty = FilterOptions::default();
        let options = self.loaded.as_ref().map_or(&empty, |l| &l.options);
        let transition = self.state.handle_event(options, event)?;
        self.state = transition.state;
        Ok(transition.redraw)
    }

    pub fn controls(&self) -> Controls {
        self.state.scene.controls()
    }

    /// Render the active scene from scratch and remember it for tooltip lookups.
    pub fn render(&mut self) -> &Surface {
        let surface = self.render_detached();
        self.last_surface.insert(surface)
    }

    /// Render without touching the remembered surface.
    pub fn render_detached(&self) -> Surface {
        match &self.loaded {
            Some(l) => {
                let input = SceneInput {
                    dataset: &l.dataset,
                    topology: &l.topology,
                    filters: &self.state.filters,
                    config: &self.config,
                };
                render_scene(self.state.scene, &input)
            }
            None => Surface::new(self.config.width, self.config.height),
        }
    }

    pub fn render_svg(&mut self) -> String {
        svg::to_svg(self.render())
    }

    pub fn last_surface(&self) -> Option<&Surface> {
        self.last_surface.as_ref()
    }

    pub fn tooltip(&self, mark: u32) -> Option<&tooltip::Tooltip> {
        self.last_surface.as_ref().and_then(|s| s.tooltip(mark))
    }
}
