use crate::geometry::limits::PATH_DIGITS;
use crate::model::{Mark, Surface};
use crate::tooltip::escape_html;
use std::fmt::Write;

/// Number text for SVG attributes: at most three decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.*}", PATH_DIGITS, v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

pub fn to_svg(surface: &Surface) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        w = fmt_num(surface.width),
        h = fmt_num(surface.height)
    );
    for m in &surface.marks {
        write_mark(&mut out, m);
    }
    out.push_str("</svg>");
    out
}

fn attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, name, escape_html(value));
}

fn num(out: &mut String, name: &str, v: f64) {
    let _ = write!(out, r#" {}="{}""#, name, fmt_num(v));
}

fn hover(out: &mut String, id: Option<u32>) {
    if let Some(id) = id {
        let _ = write!(out, r#" data-mark="{}""#, id);
    }
}

fn write_mark(out: &mut String, m: &Mark) {
    match m {
        Mark::Group {
            class,
            translate,
            font_size,
            anchor,
            children,
        } => {
            out.push_str("<g");
            if let Some(c) = class {
                attr(out, "class", c);
            }
            if let Some((x, y)) = translate {
                let _ = write!(out, r#" transform="translate({},{})""#, fmt_num(*x), fmt_num(*y));
            }
            if let Some(fs) = font_size {
                num(out, "font-size", *fs);
                attr(out, "font-family", "sans-serif");
            }
            if let Some(a) = anchor {
                attr(out, "text-anchor", a.as_str());
            }
            out.push('>');
            for c in children {
                write_mark(out, c);
            }
            out.push_str("</g>");
        }
        Mark::Path {
            class,
            d,
            fill,
            stroke,
            stroke_width,
            hover: h,
        } => {
            out.push_str("<path");
            if let Some(c) = class {
                attr(out, "class", c);
            }
            attr(out, "d", d);
            attr(out, "fill", &fill.to_string());
            attr(out, "stroke", &stroke.to_string());
            if let Some(w) = stroke_width {
                num(out, "stroke-width", *w);
            }
            hover(out, *h);
            out.push_str("/>");
        }
        Mark::Circle {
            cx,
            cy,
            r,
            fill,
            hover: h,
        } => {
            out.push_str("<circle");
            num(out, "cx", *cx);
            num(out, "cy", *cy);
            num(out, "r", *r);
            attr(out, "fill", &fill.to_string());
            hover(out, *h);
            out.push_str("/>");
        }
        Mark::Rect {
            class,
            x,
            y,
            width,
            height,
            fill,
            hover: h,
        } => {
            out.push_str("<rect");
            if let Some(c) = class {
                attr(out, "class", c);
            }
            num(out, "x", *x);
            num(out, "y", *y);
            num(out, "width", *width);
            num(out, "height", *height);
            attr(out, "fill", &fill.to_string());
            hover(out, *h);
            out.push_str("/>");
        }
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            out.push_str("<line");
            num(out, "x1", *x1);
            num(out, "y1", *y1);
            num(out, "x2", *x2);
            num(out, "y2", *y2);
            attr(out, "stroke", &stroke.to_string());
            out.push_str("/>");
        }
        Mark::Text {
            class,
            x,
            y,
            dy,
            text,
            fill,
            anchor,
            bold,
        } => {
            out.push_str("<text");
            if let Some(c) = class {
                attr(out, "class", c);
            }
            num(out, "x", *x);
            num(out, "y", *y);
            if *dy != 0.0 {
                let _ = write!(out, r#" dy="{}em""#, fmt_num(*dy));
            }
            attr(out, "fill", &fill.to_string());
            if let Some(a) = anchor {
                attr(out, "text-anchor", a.as_str());
            }
            if *bold {
                attr(out, "font-weight", "bold");
            }
            out.push('>');
            out.push_str(&escape_html(text));
            out.push_str("</text>");
        }
    }
}
