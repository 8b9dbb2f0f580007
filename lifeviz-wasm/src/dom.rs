//! Browser shell: fetch both inputs, fill the selects, wire the controls,
//! and redraw the container on every state change.

use crate::interop::config_from_js;
use gloo_net::http::Request;
use lifeviz::config::ElementIds;
use lifeviz::tooltip::{self, Fade};
use lifeviz::{Controls, Event as Input, LoadError, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlSelectElement, MouseEvent};

type Shared = Rc<RefCell<Session>>;

/// Mount the visualization on the current page.
///
/// Fetches the CSV, then the topology. A failure in either is logged and
/// leaves the container blank; the controls stay wired but select nothing.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<(), JsValue> {
    crate::api::set_panic_hook();
    crate::api::install_logger(log::Level::Info);
    let config = config_from_js(config).map_err(|e| JsValue::from_str(&e))?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let ids = config.elements.clone();
    let session: Shared = Rc::new(RefCell::new(Session::new(config)));
    wire(&document, &ids, &session)?;

    spawn_local(async move {
        if let Err(e) = load(&document, &ids, &session).await {
            log::error!("Error loading data: {}", e);
        }
    });
    Ok(())
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fetch_err = |message: String| LoadError::Fetch { url: url.to_string(), message };
    let resp = Request::get(url).send().await.map_err(|e| fetch_err(e.to_string()))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    resp.text().await.map_err(|e| fetch_err(e.to_string()))
}

async fn load(doc: &Document, ids: &ElementIds, session: &Shared) -> Result<(), LoadError> {
    let (data_url, topology_url) = {
        let s = session.borrow();
        (s.config().data_url.clone(), s.config().topology_url.clone())
    };
    let csv = fetch_text(&data_url).await?;
    let topology = fetch_text(&topology_url).await?;

    let mut s = session.borrow_mut();
    s.load(&csv, &topology)?;
    let opts = s.options();
    let filled = fill_select(doc, &ids.country_select, &opts.country_labels())
        .and_then(|_| fill_select(doc, &ids.year_select, &opts.year_labels()))
        .and_then(|_| redraw(doc, ids, &mut s));
    if let Err(e) = filled {
        log::error!("mount failed: {:?}", e);
    }
    Ok(())
}

fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

fn html_element(doc: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element(doc, id)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn fill_select(doc: &Document, id: &str, labels: &[String]) -> Result<(), JsValue> {
    let select = element(doc, id)?;
    select.set_inner_html("");
    for label in labels {
        let opt = doc.create_element("option")?;
        opt.set_attribute("value", label)?;
        opt.set_text_content(Some(label));
        select.append_child(&opt)?;
    }
    Ok(())
}

fn redraw(doc: &Document, ids: &ElementIds, session: &mut Session) -> Result<(), JsValue> {
    let svg = session.render_svg();
    element(doc, &ids.surface)?.set_inner_html(&svg);
    let controls = session.controls();
    html_element(doc, &ids.prev)?
        .style()
        .set_property("display", Controls::display(controls.prev))?;
    html_element(doc, &ids.next)?
        .style()
        .set_property("display", Controls::display(controls.next))?;
    Ok(())
}

fn dispatch(doc: &Document, ids: &ElementIds, session: &Shared, input: Input) {
    let mut s = session.borrow_mut();
    match s.dispatch(input) {
        Ok(true) => {
            if let Err(e) = redraw(doc, ids, &mut s) {
                log::error!("redraw failed: {:?}", e);
            }
        }
        Ok(false) => {}
        Err(e) => log::warn!("{}", e),
    }
}

fn listen(
    target: &Element,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    cb.forget();
    Ok(())
}

fn wire(doc: &Document, ids: &ElementIds, session: &Shared) -> Result<(), JsValue> {
    let selects: [(&str, fn(String) -> Input); 2] = [
        (ids.country_select.as_str(), Input::SelectCountry),
        (ids.year_select.as_str(), Input::SelectYear),
    ];
    for (id, make) in selects {
        let select = element(doc, id)?
            .dyn_into::<HtmlSelectElement>()
            .map_err(JsValue::from)?;
        let (d, i, s, sel) = (doc.clone(), ids.clone(), session.clone(), select.clone());
        listen(&select, "change", move |_| dispatch(&d, &i, &s, make(sel.value())))?;
    }

    let buttons = [(&ids.prev, Input::Prev), (&ids.next, Input::Next)];
    for (id, input) in buttons {
        let (d, i, s) = (doc.clone(), ids.clone(), session.clone());
        listen(&element(doc, id)?, "click", move |_| {
            dispatch(&d, &i, &s, input.clone())
        })?;
    }

    let surface = element(doc, &ids.surface)?;
    let overlay = html_element(doc, &ids.tooltip)?;
    let (s, tip) = (session.clone(), overlay.clone());
    listen(&surface, "mouseover", move |ev| {
        let Some(mark) = mark_of(&ev) else { return };
        let Some(html) = s.borrow().tooltip(mark).map(|t| t.html()) else { return };
        let Ok(mouse) = ev.dyn_into::<MouseEvent>() else { return };
        tip.set_inner_html(&html);
        let (left, top) = tooltip::position(mouse.page_x() as f64, mouse.page_y() as f64);
        if let Err(e) = place(&tip, left, top).and_then(|_| fade(&tip, tooltip::SHOW)) {
            log::debug!("tooltip: {:?}", e);
        }
    })?;
    listen(&surface, "mouseout", move |ev| {
        if mark_of(&ev).is_some() {
            if let Err(e) = fade(&overlay, tooltip::HIDE) {
                log::debug!("tooltip: {:?}", e);
            }
        }
    })?;
    Ok(())
}

/// Hover id of the mark under the pointer, from its `data-mark` attribute.
fn mark_of(ev: &Event) -> Option<u32> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute("data-mark")?
        .parse()
        .ok()
}

fn place(el: &HtmlElement, left: f64, top: f64) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("left", &format!("{}px", left))?;
    style.set_property("top", &format!("{}px", top))
}

fn fade(el: &HtmlElement, to: Fade) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("transition", &to.transition())?;
    style.set_property("opacity", &to.opacity.to_string())
}
