//! Text outline of a view tree, one node per line.
//!
//! Meant for logs and snapshot tests: it shows what a widget asked the host to
//! draw without needing a renderer.

use std::fmt::Write;

use sheetkit_core::{CornerRadii, FontWeight, View, ViewKind};

/// Renders `view` and its descendants, two spaces of indent per level.
pub fn outline(view: &View) -> String {
    let mut out = String::new();
    write_node(&mut out, view, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(out: &mut String, v: &View, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", kind_name(&v.kind), indent = depth * 2);
    if let Some(tag) = v.test_tag() {
        let _ = write!(out, " #{tag}");
    }

    let m = &v.modifier;
    if let Some(h) = m.height {
        let _ = write!(out, " h={h}");
    }
    if let Some(mt) = m.margin_top {
        let _ = write!(out, " mt={mt}");
    }
    if let Some(bg) = m.background {
        let _ = write!(out, " bg={bg}");
    }
    if let Some(r) = m.clip_rounded
        && r != CornerRadii::default()
    {
        let _ = write!(
            out,
            " radius=[{} {} {} {}]",
            r.top_left, r.top_right, r.bottom_right, r.bottom_left
        );
    }
    if let Some(t) = m.transform
        && t.translate_y != 0.0
    {
        let _ = write!(out, " ty={}", t.translate_y);
    }
    if m.click {
        out.push_str(" clickable");
    }

    match &v.kind {
        ViewKind::ScrollV { scroll_enabled } => {
            let _ = write!(out, " scroll={}", if *scroll_enabled { "on" } else { "off" });
        }
        ViewKind::Text {
            text,
            color,
            font_size,
            font_weight,
            ..
        } => {
            let _ = write!(out, " {text:?} color={color} size={font_size}");
            if *font_weight != FontWeight::NORMAL {
                let _ = write!(out, " weight={}", font_weight.0);
            }
        }
        ViewKind::Pressable { underlay, .. } => {
            let _ = write!(out, " underlay={underlay}");
        }
        ViewKind::Content(handle) => {
            let _ = write!(out, " {:?}", handle.key());
        }
        ViewKind::Box | ViewKind::Column | ViewKind::Stack => {}
    }
    out.push('\n');

    for child in &v.children {
        write_node(out, child, depth + 1);
    }
}

fn kind_name(kind: &ViewKind) -> &'static str {
    match kind {
        ViewKind::Box => "Box",
        ViewKind::Column => "Column",
        ViewKind::Stack => "Stack",
        ViewKind::ScrollV { .. } => "Scroll",
        ViewKind::Text { .. } => "Text",
        ViewKind::Pressable { .. } => "Pressable",
        ViewKind::Content(_) => "Content",
    }
}
