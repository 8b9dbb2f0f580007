//! Input dispatch.
//!
//! `AppState` is a value: every event yields a fresh state plus whether the
//! active scene has to be redrawn. Nothing here touches a rendering surface.

use crate::error::DispatchError;
use crate::filters::{FilterOptions, Filters};
use crate::nav::Scene;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Raw text of the country control.
    SelectCountry(String),
    /// Raw text of the year control.
    SelectYear(String),
    Next,
    Prev,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub filters: Filters,
    pub scene: Scene,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub redraw: bool,
}

impl AppState {
    /// Apply `event`. Filter changes always redraw; navigation redraws only
    /// when the scene actually changes. Unknown option values are rejected and
    /// leave the state as it was.
    pub fn handle_event(
        &self,
        options: &FilterOptions,
        event: Event,
    ) -> Result<Transition, DispatchError> {
        let mut next = self.clone();
        let redraw = match event {
            Event::SelectCountry(v) => {
                next.filters.country = options.parse_country(&v)?;
                true
            }
            Event::SelectYear(v) => {
                next.filters.year = options.parse_year(&v)?;
                true
            }
            Event::Next => match self.scene.next() {
                Some(s) => {
                    next.scene = s;
                    true
                }
                None => false,
            },
            Event::Prev => match self.scene.prev() {
                Some(s) => {
                    next.scene = s;
                    true
                }
                None => false,
            },
        };
        Ok(Transition {
            state: next,
            redraw,
        })
    }
}
