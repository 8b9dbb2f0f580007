use serde::Serialize;

/// Pointer offset of the overlay relative to the page position of the event.
pub const OFFSET_X: f64 = 5.0;
pub const OFFSET_Y: f64 = -28.0;

pub const SHOW: Fade = Fade {
    opacity: 0.9,
    duration_ms: 200,
};
pub const HIDE: Fade = Fade {
    opacity: 0.0,
    duration_ms: 500,
};

/// Opacity target reached over a fixed duration. Fades are fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fade {
    pub opacity: f64,
    pub duration_ms: u32,
}

impl Fade {
    /// CSS `transition` value for this fade.
    pub fn transition(&self) -> String {
        format!("opacity {}ms", self.duration_ms)
    }
}

/// Hover text of one mark, one entry per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tooltip {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Escaped lines joined by `<br>`, ready for an overlay's inner HTML.
    pub fn html(&self) -> String {
        self.lines
            .iter()
            .map(|l| escape_html(l))
            .collect::<Vec<_>>()
            .join("<br>")
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Overlay position for a pointer at page coordinates.
pub fn position(page_x: f64, page_y: f64) -> (f64, f64) {
    (page_x + OFFSET_X, page_y + OFFSET_Y)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Value text as shown to the user; missing values read `N/A`.
pub fn value_text(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}
