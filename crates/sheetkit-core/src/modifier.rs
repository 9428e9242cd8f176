use std::rc::Rc;

use taffy::{AlignItems, AlignSelf, JustifyContent};

use crate::{Callback, Color, Transform};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Per-corner clip radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn all(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }
    pub fn top(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            ..Self::default()
        }
    }
    pub fn bottom(r: f32) -> Self {
        Self {
            bottom_right: r,
            bottom_left: r,
            ..Self::default()
        }
    }
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub height: Option<f32>,
    pub fill_max: bool,
    pub fill_max_w: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub background: Option<Color>,
    pub flex_grow: Option<f32>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub clip_rounded: Option<CornerRadii>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub transform: Option<Transform>,
    pub click: bool,
    pub on_click: Option<Callback>,
    /// Stable name used by hosts and tests to locate a node.
    pub test_tag: Option<String>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("height", &self.height)
            .field("fill_max", &self.fill_max)
            .field("fill_max_w", &self.fill_max_w)
            .field("padding", &self.padding)
            .field("padding_values", &self.padding_values)
            .field("background", &self.background)
            .field("flex_grow", &self.flex_grow)
            .field("align_self", &self.align_self)
            .field("justify_content", &self.justify_content)
            .field("align_items_container", &self.align_items_container)
            .field("clip_rounded", &self.clip_rounded)
            .field("margin_left", &self.margin_left)
            .field("margin_right", &self.margin_right)
            .field("margin_top", &self.margin_top)
            .field("margin_bottom", &self.margin_bottom)
            .field("transform", &self.transform)
            .field("click", &self.click)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("test_tag", &self.test_tag)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn padding_bottom(mut self, v: f32) -> Self {
        let mut p = self.padding_values.unwrap_or_default();
        p.bottom = v;
        self.padding_values = Some(p);
        self
    }
    /// Set a solid color background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    /// Centers children on both axes.
    pub fn center_content(self) -> Self {
        self.align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center)
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(CornerRadii::all(radius));
        self
    }
    pub fn clip_corners(mut self, radii: CornerRadii) -> Self {
        self.clip_rounded = Some(radii);
        self
    }
    pub fn margin(mut self, v: f32) -> Self {
        self.margin_left = Some(v);
        self.margin_right = Some(v);
        self.margin_top = Some(v);
        self.margin_bottom = Some(v);
        self
    }
    pub fn margin_top(mut self, v: f32) -> Self {
        self.margin_top = Some(v);
        self
    }
    pub fn translate(mut self, x: f32, y: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::translate(x, y)));
        self
    }
    /// Marks the node clickable and runs `f` when the host reports a tap on it.
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.click = true;
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}
