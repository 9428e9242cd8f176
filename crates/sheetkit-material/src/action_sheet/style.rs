use sheetkit_core::animation::{AnimationSpec, Easing};
use sheetkit_core::{Color, FontWeight, local, with_local};
use sheetkit_core::prelude::Duration;

/// Default tint for option labels and the cancel row.
pub const DEFAULT_TINT: Color = Color(0x4f, 0xc3, 0xf7, 255);

/// Fixed visual constants of the action sheet.
///
/// Provided through a composition local, see [`with_sheet_style`]. Sizes are
/// in dp.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetStyle {
    /// Full-screen scrim behind the sheet.
    pub backdrop: Color,
    /// Gap between the sheet and the screen edges.
    pub sheet_margin: f32,
    /// Largest share of the viewport height the sheet may take.
    pub max_height_ratio: f32,

    pub title_height: f32,
    pub title_padding: f32,
    pub message_height: f32,
    pub message_padding_bottom: f32,
    pub header_background: Color,
    pub header_text_color: Color,
    pub header_font_size: f32,

    pub options_background: Color,
    pub corner_radius: f32,
    /// Row height before the hairline separator is added.
    pub button_height: f32,
    pub button_background: Color,
    pub button_underlay: Color,
    pub button_font_size: f32,
    pub button_line_height: f32,

    /// Space between the option list and the detached cancel row.
    pub cancel_margin: f32,
    pub cancel_font_weight: FontWeight,
    /// Label color of the destructive option, whatever the tint.
    pub warn_color: Color,

    pub show_duration: Duration,
    pub hide_duration: Duration,
    pub easing: Easing,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            backdrop: Color::BLACK.with_opacity(0.4),
            sheet_margin: 16.0,
            max_height_ratio: 0.7,

            title_height: 28.0,
            title_padding: 6.0,
            message_height: 56.0,
            message_padding_bottom: 10.0,
            header_background: Color::WHITE,
            header_text_color: Color::from_hex("#989bab"),
            header_font_size: 14.0,

            options_background: Color::from_hex("#cccccc"),
            corner_radius: 8.0,
            button_height: 56.0,
            button_background: Color::WHITE,
            button_underlay: Color::from_hex("#f4f4f4"),
            button_font_size: 17.0,
            button_line_height: 19.0,

            cancel_margin: 8.0,
            cancel_font_weight: FontWeight::MEDIUM,
            warn_color: Color::from_hex("#e53935"),

            show_duration: Duration::from_millis(250),
            hide_duration: Duration::from_millis(150),
            easing: Easing::EaseInOut,
        }
    }
}

impl SheetStyle {
    pub fn show_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.show_duration, self.easing)
    }
    pub fn hide_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.hide_duration, self.easing)
    }
}

pub fn with_sheet_style<R>(style: SheetStyle, f: impl FnOnce() -> R) -> R {
    with_local(style, f)
}

pub fn sheet_style() -> SheetStyle {
    local::<SheetStyle>()
}
