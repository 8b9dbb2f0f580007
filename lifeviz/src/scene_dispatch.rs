use crate::config::VizConfig;
use crate::data::Dataset;
use crate::filters::Filters;
use crate::join::ExactName;
use crate::model::Surface;
use crate::nav::Scene;
use crate::scene::{comparison, map, trend};
use crate::topology::Topology;

/// Everything a scene renderer reads. Renderers never keep any of it.
#[derive(Clone, Copy)]
pub struct SceneInput<'a> {
    pub dataset: &'a Dataset,
    pub topology: &'a Topology,
    pub filters: &'a Filters,
    pub config: &'a VizConfig,
}

/// Full redraw of `scene`; an empty surface when its filtered set is empty.
pub fn render_scene(scene: Scene, input: &SceneInput<'_>) -> Surface {
    match scene {
        Scene::Map => map::render(input, &ExactName),
        Scene::Trend => trend::render(input),
        Scene::Comparison => comparison::render(input),
    }
}
