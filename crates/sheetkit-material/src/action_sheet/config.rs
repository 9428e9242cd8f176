use std::rc::Rc;

use sheetkit_core::{Color, ContentHandle};

use super::style::DEFAULT_TINT;

/// Title, message or option label: plain text, or content the host renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SheetContent {
    Text(String),
    Prebuilt(ContentHandle),
}

impl SheetContent {
    /// Empty text counts as "no content".
    fn non_empty(self) -> Option<Self> {
        let empty = matches!(&self, SheetContent::Text(s) if s.is_empty());
        (!empty).then_some(self)
    }
}

impl From<&str> for SheetContent {
    fn from(s: &str) -> Self {
        SheetContent::Text(s.to_string())
    }
}

impl From<String> for SheetContent {
    fn from(s: String) -> Self {
        SheetContent::Text(s)
    }
}

impl From<ContentHandle> for SheetContent {
    fn from(h: ContentHandle) -> Self {
        SheetContent::Prebuilt(h)
    }
}

pub type PressCallback = Rc<dyn Fn(usize)>;

/// Everything the caller decides about one action sheet.
///
/// ```rust
/// use sheetkit_material::ActionSheetConfig;
///
/// let config = ActionSheetConfig::new(["Archive", "Delete", "Cancel"])
///     .title("Conversation")
///     .destructive_button_index(1)
///     .cancel_button_index(2)
///     .on_press(|i| println!("picked {i}"));
///
/// assert_eq!(config.cancel_index(), Some(2));
/// ```
#[derive(Clone)]
pub struct ActionSheetConfig {
    pub title: Option<SheetContent>,
    pub message: Option<SheetContent>,
    pub options: Vec<SheetContent>,
    pub cancel_button_index: Option<usize>,
    pub destructive_button_index: Option<usize>,
    pub tint_color: Color,
    /// Called once per dismissal with the chosen index. Defaults to a no-op.
    pub on_press: PressCallback,
}

impl Default for ActionSheetConfig {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            options: Vec::new(),
            cancel_button_index: None,
            destructive_button_index: None,
            tint_color: DEFAULT_TINT,
            on_press: Rc::new(|_| {}),
        }
    }
}

impl std::fmt::Debug for ActionSheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSheetConfig")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("options", &self.options)
            .field("cancel_button_index", &self.cancel_button_index)
            .field("destructive_button_index", &self.destructive_button_index)
            .field("tint_color", &self.tint_color)
            .field("on_press", &"<callback>")
            .finish()
    }
}

impl ActionSheetConfig {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SheetContent>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
    pub fn title(mut self, title: impl Into<SheetContent>) -> Self {
        self.title = title.into().non_empty();
        self
    }
    pub fn message(mut self, message: impl Into<SheetContent>) -> Self {
        self.message = message.into().non_empty();
        self
    }
    pub fn cancel_button_index(mut self, index: usize) -> Self {
        self.cancel_button_index = Some(index);
        self
    }
    pub fn destructive_button_index(mut self, index: usize) -> Self {
        self.destructive_button_index = Some(index);
        self
    }
    pub fn tint_color(mut self, color: Color) -> Self {
        self.tint_color = color;
        self
    }
    pub fn on_press(mut self, f: impl Fn(usize) + 'static) -> Self {
        self.on_press = Rc::new(f);
        self
    }

    /// The cancel index, if it names one of the options.
    pub fn cancel_index(&self) -> Option<usize> {
        self.cancel_button_index.filter(|&i| i < self.options.len())
    }

    /// The destructive index, if it names one of the options.
    pub fn destructive_index(&self) -> Option<usize> {
        self.destructive_button_index
            .filter(|&i| i < self.options.len())
    }

    pub(crate) fn warn_inert_indices(&self) {
        let n = self.options.len();
        if let Some(i) = self.cancel_button_index
            && i >= n
        {
            log::warn!("cancel_button_index {i} is out of range for {n} options; backdrop taps are ignored");
        }
        if let Some(i) = self.destructive_button_index
            && i >= n
        {
            log::warn!("destructive_button_index {i} is out of range for {n} options");
        }
    }
}
