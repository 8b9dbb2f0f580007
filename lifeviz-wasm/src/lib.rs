use wasm_bindgen::prelude::*;
mod api;
mod dom;
mod error;
mod interop;

pub use api::init_logging;
pub use dom::start;

#[wasm_bindgen]
pub struct Viz { pub(crate) inner: lifeviz::Session }

impl Viz {
    pub fn rs_new(config: lifeviz::VizConfig) -> Viz {
        Viz { inner: lifeviz::Session::new(config) }
    }
    pub fn rs_scene(&self) -> lifeviz::Scene { self.inner.state().scene }
}
