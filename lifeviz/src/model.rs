use crate::tooltip::Tooltip;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Fill or stroke value as written into the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Paint {
    None,
    /// Any CSS color text (`steelblue`, `#ccc`, `currentColor`).
    Css(String),
    Rgb(Color),
}

impl Paint {
    pub fn css(s: impl Into<String>) -> Paint {
        Paint::Css(s.into())
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::None => f.write_str("none"),
            Paint::Css(s) => f.write_str(s),
            Paint::Rgb(c) => c.fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Stable index of a hoverable mark within one [`Surface`].
pub type MarkId = u32;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Mark {
    Group {
        class: Option<String>,
        translate: Option<(f64, f64)>,
        font_size: Option<f64>,
        anchor: Option<TextAnchor>,
        children: Vec<Mark>,
    },
    Path {
        class: Option<String>,
        d: String,
        fill: Paint,
        stroke: Paint,
        stroke_width: Option<f64>,
        hover: Option<MarkId>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Paint,
        hover: Option<MarkId>,
    },
    Rect {
        class: Option<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
        hover: Option<MarkId>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Paint,
    },
    Text {
        class: Option<String>,
        x: f64,
        y: f64,
        /// Baseline shift in em.
        dy: f64,
        text: String,
        fill: Paint,
        anchor: Option<TextAnchor>,
        bold: bool,
    },
}

impl Mark {
    pub fn group(class: Option<&str>, translate: Option<(f64, f64)>, children: Vec<Mark>) -> Mark {
        Mark::Group {
            class: class.map(str::to_string),
            translate,
            font_size: None,
            anchor: None,
            children,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Mark::Group { class, .. }
            | Mark::Path { class, .. }
            | Mark::Rect { class, .. }
            | Mark::Text { class, .. } => class.as_deref(),
            Mark::Circle { .. } | Mark::Line { .. } => None,
        }
    }

    pub fn hover(&self) -> Option<MarkId> {
        match self {
            Mark::Path { hover, .. } | Mark::Circle { hover, .. } | Mark::Rect { hover, .. } => {
                *hover
            }
            _ => None,
        }
    }

    pub fn children(&self) -> &[Mark] {
        match self {
            Mark::Group { children, .. } => children,
            _ => &[],
        }
    }
}

/// One rendered scene: marks in paint order plus the tooltips they point at.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<Mark>,
    tooltips: Vec<Tooltip>,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Surface {
            width,
            height,
            marks: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Register a tooltip and return the id a mark should carry to show it.
    pub fn add_tooltip(&mut self, tip: Tooltip) -> MarkId {
        self.tooltips.push(tip);
        (self.tooltips.len() - 1) as MarkId
    }

    pub fn tooltip(&self, id: MarkId) -> Option<&Tooltip> {
        self.tooltips.get(id as usize)
    }

    pub fn tooltip_count(&self) -> usize {
        self.tooltips.len()
    }

    /// Depth-first walk over every mark, groups included.
    pub fn walk(&self) -> Vec<&Mark> {
        fn rec<'a>(marks: &'a [Mark], out: &mut Vec<&'a Mark>) {
            for m in marks {
                out.push(m);
                rec(m.children(), out);
            }
        }
        let mut out = Vec::new();
        rec(&self.marks, &mut out);
        out
    }

    pub fn find_class(&self, class: &str) -> Vec<&Mark> {
        self.walk()
            .into_iter()
            .filter(|m| m.class() == Some(class))
            .collect()
    }
}
