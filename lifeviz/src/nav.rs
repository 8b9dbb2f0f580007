use serde::Serialize;

/// The three slides, in presentation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scene {
    #[default]
    Map = 1,
    Trend = 2,
    Comparison = 3,
}

impl Scene {
    pub const FIRST: Scene = Scene::Map;
    pub const LAST: Scene = Scene::Comparison;

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Scene> {
        match i {
            1 => Some(Scene::Map),
            2 => Some(Scene::Trend),
            3 => Some(Scene::Comparison),
            _ => None,
        }
    }

    /// Following scene, or `None` at the last one.
    pub fn next(self) -> Option<Scene> {
        Scene::from_index(self.index() + 1)
    }

    /// Preceding scene, or `None` at the first one.
    pub fn prev(self) -> Option<Scene> {
        self.index().checked_sub(1).and_then(Scene::from_index)
    }

    pub fn controls(self) -> Controls {
        Controls {
            prev: self != Scene::FIRST,
            next: self != Scene::LAST,
        }
    }
}

impl Serialize for Scene {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.index())
    }
}

/// Visibility of the two navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

impl Controls {
    /// CSS `display` value for a button.
    pub fn display(visible: bool) -> &'static str {
        if visible {
            "inline-block"
        } else {
            "none"
        }
    }
}
