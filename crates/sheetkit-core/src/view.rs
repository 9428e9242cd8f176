use std::any::Any;
use std::rc::Rc;

use crate::{Color, Modifier};

pub type Callback = Rc<dyn Fn()>;

/// Opaque handle to content the host renders itself (an image, a custom row).
///
/// Widgets place it in the tree verbatim; only the host knows what the
/// payload is.
#[derive(Clone)]
pub struct ContentHandle {
    key: String,
    payload: Rc<dyn Any>,
}

impl ContentHandle {
    pub fn new(key: impl Into<String>, payload: impl Any) -> Self {
        Self {
            key: key.into(),
            payload: Rc::new(payload),
        }
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for ContentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Rc::ptr_eq(&self.payload, &other.payload)
    }
}

impl std::fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ContentHandle").field(&self.key).finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// CSS-style numeric weight (400 regular, 700 bold).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

#[derive(Clone)]
pub enum ViewKind {
    Box,
    Column,
    Stack,
    ScrollV {
        scroll_enabled: bool,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        line_height: Option<f32>,
        font_weight: FontWeight,
        align: TextAlign,
    },
    Pressable {
        on_press: Option<Callback>,
        underlay: Color,
    },
    Content(ContentHandle),
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::ScrollV { scroll_enabled } => f
                .debug_struct("ScrollV")
                .field("scroll_enabled", scroll_enabled)
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                line_height,
                font_weight,
                align,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("line_height", line_height)
                .field("font_weight", font_weight)
                .field("align", align)
                .finish(),
            ViewKind::Pressable { on_press, underlay } => f
                .debug_struct("Pressable")
                .field("on_press", &on_press.as_ref().map(|_| "<callback>"))
                .field("underlay", underlay)
                .finish(),
            ViewKind::Content(handle) => f.debug_tuple("Content").field(handle).finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn test_tag(&self) -> Option<&str> {
        self.modifier.test_tag.as_deref()
    }

    /// Depth-first, pre-order visit of this view and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for child in &self.children {
            child.walk(&mut *f);
        }
    }

    /// First node (pre-order) whose test tag equals `tag`.
    pub fn find(&self, tag: &str) -> Option<&View> {
        if self.test_tag() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(tag))
    }

    /// All nodes whose test tag starts with `prefix`, in pre-order.
    pub fn find_all(&self, prefix: &str) -> Vec<&View> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if v.test_tag().is_some_and(|t| t.starts_with(prefix)) {
                out.push(v);
            }
        });
        out
    }

    /// Text of the first `Text` node in this subtree.
    pub fn text(&self) -> Option<&str> {
        if let ViewKind::Text { text, .. } = &self.kind {
            return Some(text.as_str());
        }
        self.children.iter().find_map(|c| c.text())
    }

    /// Delivers a tap to this node the way the host would: a `Pressable`
    /// fires its `on_press`, any other node its modifier's `on_click`.
    /// Returns `false` when the node does not handle taps.
    pub fn perform_click(&self) -> bool {
        let handler = match &self.kind {
            ViewKind::Pressable { on_press, .. } => on_press.as_ref(),
            _ => self.modifier.on_click.as_ref(),
        };
        match handler {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}
