use crate::error;
use crate::interop::{arr_str, config_from_js, new_obj, set_kv, to_js};
use crate::Viz;
use lifeviz::{Controls, Event, VizConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route the core's `log` output to the console at `level` (error..trace).
/// Unknown names mean `info`.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    install_logger(level.parse().unwrap_or(log::Level::Info));
}

/// Install the console logger once; later calls only move the level.
pub(crate) fn install_logger(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

#[wasm_bindgen]
impl Viz {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Viz { Viz::rs_new(VizConfig::default()) }

    /// Build from a partial config object; missing keys keep their defaults.
    pub fn with_config(config: JsValue) -> Result<Viz, JsValue> {
        config_from_js(config).map(Viz::rs_new).map_err(|e| error::invalid_config(e))
    }
    pub fn config(&self) -> JsValue { to_js(self.inner.config()) }

    // Loading
    pub fn load(&mut self, csv: &str, topology: &str) -> bool {
        match self.inner.load(csv, topology) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error loading data: {}", e);
                false
            }
        }
    }
    pub fn load_res(&mut self, csv: &str, topology: &str) -> JsValue {
        match self.inner.load(csv, topology) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::load_failed(&e),
        }
    }
    pub fn is_loaded(&self) -> bool { self.inner.is_loaded() }
    pub fn record_count(&self) -> u32 {
        self.inner.loaded().map_or(0, |l| l.dataset.len() as u32)
    }
    pub fn feature_count(&self) -> u32 {
        self.inner.loaded().map_or(0, |l| l.topology.features().len() as u32)
    }

    // Selection; the bool says whether a redraw is due
    pub fn select_country(&mut self, value: &str) -> bool {
        self.dispatch(Event::SelectCountry(value.to_string()))
    }
    pub fn select_country_res(&mut self, value: &str) -> JsValue {
        self.dispatch_res(Event::SelectCountry(value.to_string()))
    }
    pub fn select_year(&mut self, value: &str) -> bool {
        self.dispatch(Event::SelectYear(value.to_string()))
    }
    pub fn select_year_res(&mut self, value: &str) -> JsValue {
        self.dispatch_res(Event::SelectYear(value.to_string()))
    }
    pub fn options(&self) -> JsValue {
        let opts = self.inner.options();
        let o = new_obj();
        set_kv(&o, "countries", &arr_str(&opts.country_labels()).into());
        set_kv(&o, "years", &arr_str(&opts.year_labels()).into());
        o.into()
    }
    pub fn state(&self) -> JsValue { to_js(self.inner.state()) }

    // Navigation
    pub fn next(&mut self) -> bool { self.dispatch(Event::Next) }
    pub fn prev(&mut self) -> bool { self.dispatch(Event::Prev) }
    pub fn scene(&self) -> u8 { self.rs_scene().index() }
    pub fn controls(&self) -> JsValue {
        let c = self.inner.controls();
        let o = new_obj();
        set_kv(&o, "prev", &JsValue::from_str(Controls::display(c.prev)));
        set_kv(&o, "next", &JsValue::from_str(Controls::display(c.next)));
        o.into()
    }

    // Rendering
    pub fn render_svg(&mut self) -> String { self.inner.render_svg() }
    pub fn render_svg_res(&mut self) -> JsValue {
        if !self.inner.is_loaded() {
            return error::not_loaded();
        }
        error::ok(JsValue::from_str(&self.inner.render_svg()))
    }
    pub fn surface(&mut self) -> JsValue { to_js(self.inner.render()) }

    /// Tooltip HTML of a hoverable mark from the last render.
    pub fn tooltip(&self, mark: u32) -> Option<String> {
        self.inner.tooltip(mark).map(|t| t.html())
    }
    pub fn tooltip_res(&self, mark: u32) -> JsValue {
        match self.inner.tooltip(mark) {
            Some(t) => error::ok(JsValue::from_str(&t.html())),
            None => error::invalid_mark(mark),
        }
    }
}

impl Viz {
    fn dispatch(&mut self, event: Event) -> bool {
        match self.inner.dispatch(event) {
            Ok(redraw) => redraw,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }
    fn dispatch_res(&mut self, event: Event) -> JsValue {
        match self.inner.dispatch(event) {
            Ok(redraw) => error::ok(JsValue::from_bool(redraw)),
            Err(e) => error::dispatch_failed(&e),
        }
    }
}

impl Default for Viz {
    fn default() -> Self { Viz::new() }
}
