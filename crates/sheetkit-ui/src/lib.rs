#![allow(non_snake_case)]
//! View builders.
//!
//! Each builder returns a plain `View`; children are attached with
//! [`ViewExt::child`] and text is styled with [`TextStyle`].

pub mod outline;

use std::rc::Rc;

use sheetkit_core::*;

pub use outline::outline;

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(ViewKind::Stack).modifier(modifier)
}

/// Vertical scroll container. With `scroll_enabled == false` the host lays the
/// content out but ignores drag gestures.
pub fn Scroll(modifier: Modifier, scroll_enabled: bool) -> View {
    View::new(ViewKind::ScrollV { scroll_enabled }).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        ViewKind::Text {
            text: text.into(),
            color: Color::BLACK,
            font_size: 16.0, // dp
            line_height: None,
            font_weight: FontWeight::NORMAL,
            align: TextAlign::Start,
        },
    )
}

/// A tappable container that shows `underlay` while pressed.
pub fn Pressable(modifier: Modifier, underlay: Color, on_press: impl Fn() + 'static) -> View {
    View::new(
        ViewKind::Pressable {
            on_press: Some(Rc::new(on_press)),
            underlay,
        },
    )
    .modifier(modifier)
}

/// Host-rendered content, placed verbatim.
pub fn Content(handle: ContentHandle) -> View {
    View::new(ViewKind::Content(handle))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp: f32) -> View;
    fn line_height(self, dp: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn align_center(self) -> View;
}
impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text {
            font_size: text_size_dp,
            ..
        } = &mut self.kind
        {
            *text_size_dp = dp_font;
        }
        self
    }
    fn line_height(mut self, dp: f32) -> View {
        if let ViewKind::Text { line_height, .. } = &mut self.kind {
            *line_height = Some(dp);
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { font_weight, .. } = &mut self.kind {
            *font_weight = w;
        }
        self
    }
    fn align_center(mut self) -> View {
        if let ViewKind::Text { align, .. } = &mut self.kind {
            *align = TextAlign::Center;
        }
        self
    }
}
