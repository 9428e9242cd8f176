use sheetkit_core::{Color, CornerRadii, Modifier, View};
use sheetkit_ui::{Box, Column, Content, Pressable, Scroll, Stack, Text, TextStyle, ViewExt};
use taffy::AlignSelf;

use super::{ActionSheet, SheetContent, SheetState, SheetStyle};

pub(super) fn sheet_view(sheet: &ActionSheet, s: &SheetState) -> View {
    if !s.visible {
        return Box(Modifier::new());
    }
    let style = &s.style;

    let backdrop = Box(Modifier::new()
        .fill_max_size()
        .background(style.backdrop)
        .test_tag("action_sheet:backdrop")
        .on_click({
            let sheet = sheet.clone();
            move || sheet.cancel()
        }));

    let body = Column(
        Modifier::new()
            .fill_max_width()
            .height(s.layout.target_height)
            .margin(style.sheet_margin)
            .align_self(AlignSelf::FlexEnd)
            .translate(0.0, *s.progress.get())
            .test_tag("action_sheet:sheet"),
    )
    .child((
        title(s),
        message(s),
        options(sheet, s),
        cancel_row(sheet, s),
    ));

    Stack(Modifier::new().fill_max_size().test_tag("action_sheet")).child((backdrop, body))
}

fn header_label(content: &SheetContent, style: &SheetStyle) -> View {
    match content {
        SheetContent::Text(text) => Text(text.as_str())
            .color(style.header_text_color)
            .size(style.header_font_size)
            .align_center(),
        SheetContent::Prebuilt(handle) => Content(handle.clone()),
    }
}

fn title(s: &SheetState) -> Option<View> {
    let style = &s.style;
    s.config.title.as_ref().map(|t| {
        Box(Modifier::new()
            .height(style.title_height)
            .padding(style.title_padding)
            .center_content()
            .background(style.header_background)
            .clip_corners(CornerRadii::top(style.corner_radius))
            .test_tag("action_sheet:title"))
        .child(header_label(t, style))
    })
}

fn message(s: &SheetState) -> Option<View> {
    let style = &s.style;
    s.config.message.as_ref().map(|m| {
        Box(Modifier::new()
            .height(style.message_height)
            .padding_bottom(style.message_padding_bottom)
            .center_content()
            .background(style.header_background)
            .test_tag("action_sheet:message"))
        .child(header_label(m, style))
    })
}

fn button_label(content: &SheetContent, color: Color, style: &SheetStyle) -> View {
    match content {
        SheetContent::Text(text) => Text(text.as_str())
            .color(color)
            .size(style.button_font_size)
            .line_height(style.button_line_height)
            .align_center(),
        SheetContent::Prebuilt(handle) => Content(handle.clone()),
    }
}

fn options(sheet: &ActionSheet, s: &SheetState) -> View {
    let style = &s.style;
    let cancel = s.config.cancel_index();
    let destructive = s.config.destructive_index();
    let rows: Vec<(usize, &SheetContent)> = s
        .config
        .options
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != cancel)
        .collect();
    let last = rows.len().saturating_sub(1);

    let views: Vec<View> = rows
        .into_iter()
        .enumerate()
        .map(|(pos, (index, content))| {
            let color = if Some(index) == destructive {
                style.warn_color
            } else {
                s.config.tint_color
            };
            let mut m = Modifier::new()
                .height(style.button_height)
                .margin_top(s.metrics.hairline())
                .center_content()
                .background(style.button_background)
                .test_tag(format!("action_sheet:option:{index}"));
            if pos == last {
                m = m.clip_corners(CornerRadii::bottom(style.corner_radius));
            }
            let sheet = sheet.clone();
            Pressable(m, style.button_underlay, move || sheet.hide(index))
                .child(button_label(content, color, style))
        })
        .collect();

    Scroll(
        Modifier::new()
            .flex_grow(1.0)
            .background(style.options_background)
            .clip_corners(CornerRadii::bottom(style.corner_radius))
            .test_tag("action_sheet:options"),
        s.layout.scroll_enabled,
    )
    .child(views)
}

fn cancel_row(sheet: &ActionSheet, s: &SheetState) -> Option<View> {
    let style = &s.style;
    let index = s.config.cancel_index()?;
    let label = match &s.config.options[index] {
        SheetContent::Text(text) => Text(text.as_str())
            .color(s.config.tint_color)
            .size(style.button_font_size)
            .line_height(style.button_line_height)
            .weight(style.cancel_font_weight)
            .align_center(),
        SheetContent::Prebuilt(handle) => Content(handle.clone()),
    };
    let sheet = sheet.clone();
    Some(
        Pressable(
            Modifier::new()
                .height(style.button_height)
                .margin_top(style.cancel_margin)
                .center_content()
                .background(style.button_background)
                .clip_rounded(style.corner_radius)
                .test_tag("action_sheet:cancel"),
            style.button_underlay,
            move || sheet.cancel(),
        )
        .child(label),
    )
}
