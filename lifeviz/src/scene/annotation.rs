use crate::geometry::limits::{NOTE_LINE_HEIGHT, NOTE_PADDING};
use crate::model::{Mark, Paint, TextAnchor};

/// A text note at an offset from the point it describes, joined by a connector.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub title: Option<String>,
    pub label: String,
    pub color: Paint,
}

impl Annotation {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, label: impl Into<String>, color: Paint) -> Self {
        Annotation {
            x,
            y,
            dx,
            dy,
            title: None,
            label: label.into(),
            color,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Notes sit above the anchor when `dy < 0`, below otherwise; horizontally
    /// they grow away from the anchor, or center on it when `dx == 0`.
    pub fn to_mark(&self) -> Mark {
        let anchor = if self.dx > 0.0 {
            TextAnchor::Start
        } else if self.dx < 0.0 {
            TextAnchor::End
        } else {
            TextAnchor::Middle
        };
        let mut lines: Vec<(&str, bool)> = Vec::new();
        if let Some(t) = &self.title {
            lines.push((t.as_str(), true));
        }
        lines.push((self.label.as_str(), false));

        let n = lines.len() as f64;
        let first_y = if self.dy < 0.0 {
            -NOTE_PADDING - (n - 1.0) * NOTE_LINE_HEIGHT
        } else {
            NOTE_PADDING + NOTE_LINE_HEIGHT
        };
        let texts = lines
            .into_iter()
            .enumerate()
            .map(|(i, (text, bold))| Mark::Text {
                class: Some(note_class(bold).to_string()),
                x: 0.0,
                y: first_y + i as f64 * NOTE_LINE_HEIGHT,
                dy: 0.0,
                text: text.to_string(),
                fill: self.color.clone(),
                anchor: Some(anchor),
                bold,
            })
            .collect();

        Mark::group(
            Some("annotation"),
            Some((self.x, self.y)),
            vec![
                Mark::group(
                    Some("annotation-connector"),
                    None,
                    vec![Mark::Line {
                        x1: 0.0,
                        y1: 0.0,
                        x2: self.dx,
                        y2: self.dy,
                        stroke: self.color.clone(),
                    }],
                ),
                Mark::group(Some("annotation-note"), Some((self.dx, self.dy)), texts),
            ],
        )
    }
}

fn note_class(bold: bool) -> &'static str {
    if bold {
        "annotation-note-title"
    } else {
        "annotation-note-label"
    }
}
