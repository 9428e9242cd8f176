use sheetkit_core::DisplayMetrics;

use super::SheetStyle;

/// What the sheet height depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SheetCounts {
    /// Every option, the cancel entry included.
    pub options: usize,
    pub has_title: bool,
    pub has_message: bool,
}

/// Height of the sheet for one configuration on one display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    pub row_height: f32,
    /// Height the content asks for before the cap.
    pub uncapped_height: f32,
    pub max_height: f32,
    pub target_height: f32,
    /// Set when the content is taller than `max_height`.
    pub scroll_enabled: bool,
}

impl SheetLayout {
    pub fn compute(counts: SheetCounts, style: &SheetStyle, metrics: DisplayMetrics) -> Self {
        let row_height = style.button_height + metrics.hairline();
        let mut height = row_height * counts.options as f32 + style.cancel_margin;
        if counts.has_title {
            height += style.title_height;
        }
        if counts.has_message {
            height += style.message_height;
        }

        let max_height = metrics.height * style.max_height_ratio;
        let scroll_enabled = height > max_height;
        Self {
            row_height,
            uncapped_height: height,
            max_height,
            target_height: if scroll_enabled { max_height } else { height },
            scroll_enabled,
        }
    }
}
