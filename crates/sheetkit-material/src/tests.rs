#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sheetkit_core::prelude::*;
    use sheetkit_ui::outline;

    use crate::*;

    type Presses = Rc<RefCell<Vec<usize>>>;

    fn recorder() -> (Presses, impl Fn(usize) + 'static) {
        let presses: Presses = Rc::default();
        let sink = presses.clone();
        (presses, move |i| sink.borrow_mut().push(i))
    }

    fn sheet_with(config: ActionSheetConfig) -> (ActionSheet, ManualClock, Presses) {
        let (presses, on_press) = recorder();
        let clock = ManualClock::default();
        let sheet = ActionSheet::new(config.on_press(on_press)).with_clock(clock.clone());
        (sheet, clock, presses)
    }

    fn settle(sheet: &ActionSheet, clock: &ManualClock) {
        clock.advance(Duration::from_millis(300));
        assert!(!sheet.frame());
    }

    fn option_tags(view: &View) -> Vec<String> {
        view.find_all("action_sheet:option:")
            .into_iter()
            .filter_map(|v| v.test_tag().map(str::to_string))
            .collect()
    }

    fn label_color(row: &View) -> Color {
        let mut color = None;
        row.walk(&mut |v| {
            if let ViewKind::Text { color: c, .. } = &v.kind {
                color.get_or_insert(*c);
            }
        });
        color.expect("row has a text label")
    }

    #[test]
    fn test_starts_hidden_and_off_screen() {
        let (sheet, _clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B"]));

        assert_eq!(sheet.phase(), SheetPhase::Hidden);
        assert!(!sheet.is_visible());
        assert_eq!(sheet.target_height(), 57.0 * 2.0 + 8.0);
        assert_eq!(sheet.progress(), sheet.target_height());
        assert!(matches!(sheet.view().kind, ViewKind::Box));
        assert!(sheet.view().children.is_empty());
        assert!(presses.borrow().is_empty());
    }

    #[test]
    fn test_show_slides_to_zero() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B", "C"]));
        let start = sheet.progress();

        sheet.show();
        assert!(sheet.is_visible());
        assert_eq!(sheet.phase(), SheetPhase::Showing);

        clock.advance(Duration::from_millis(125));
        assert!(sheet.frame());
        let mid = sheet.progress();
        assert!(mid > 0.0 && mid < start, "mid-animation offset {mid}");
        let view = sheet.view();
        let slide = view.find("action_sheet:sheet").unwrap().modifier.transform;
        assert_eq!(slide.map(|t| t.translate_y), Some(mid));

        clock.advance(Duration::from_millis(125));
        assert!(!sheet.frame());
        assert_eq!(sheet.phase(), SheetPhase::Shown);
        assert_eq!(sheet.progress(), 0.0);
        assert!(presses.borrow().is_empty());
    }

    #[test]
    fn test_hide_fires_once_after_animation() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B", "C"]));
        sheet.show();
        settle(&sheet, &clock);

        sheet.hide(1);
        assert_eq!(sheet.phase(), SheetPhase::Hiding);
        assert!(sheet.is_visible());

        clock.advance(Duration::from_millis(100));
        assert!(sheet.frame());
        assert!(presses.borrow().is_empty(), "fired before the sheet was gone");

        clock.advance(Duration::from_millis(50));
        assert!(!sheet.frame());
        assert_eq!(*presses.borrow(), vec![1]);
        assert!(!sheet.is_visible());
        assert_eq!(sheet.phase(), SheetPhase::Hidden);
        assert_eq!(sheet.progress(), sheet.target_height());

        // Further frames do not fire again.
        clock.advance(Duration::from_millis(500));
        sheet.frame();
        assert_eq!(*presses.borrow(), vec![1]);
    }

    #[test]
    fn test_hide_passes_sentinel_through() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A"]));
        sheet.show();
        settle(&sheet, &clock);
        sheet.hide(usize::MAX);
        settle(&sheet, &clock);
        assert_eq!(*presses.borrow(), vec![usize::MAX]);
    }

    #[test]
    fn test_backdrop_without_cancel_index_is_inert() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B", "C", "D"]));
        sheet.show();
        settle(&sheet, &clock);

        let view = sheet.view();
        assert!(view.find("action_sheet:backdrop").unwrap().perform_click());
        assert_eq!(sheet.phase(), SheetPhase::Shown);
        settle(&sheet, &clock);
        assert!(presses.borrow().is_empty());
        assert!(sheet.is_visible());
        assert!(view.find("action_sheet:cancel").is_none());
    }

    #[test]
    fn test_out_of_range_cancel_index_is_inert() {
        let (sheet, clock, presses) =
            sheet_with(ActionSheetConfig::new(["A", "B"]).cancel_button_index(5));
        sheet.show();
        settle(&sheet, &clock);
        sheet.cancel();
        settle(&sheet, &clock);
        assert!(presses.borrow().is_empty());
        assert_eq!(option_tags(&sheet.view()).len(), 2);
    }

    #[test]
    fn test_backdrop_with_cancel_index_dismisses() {
        let (sheet, clock, presses) =
            sheet_with(ActionSheetConfig::new(["A", "B", "C", "D"]).cancel_button_index(2));
        sheet.show();
        settle(&sheet, &clock);

        sheet
            .view()
            .find("action_sheet:backdrop")
            .unwrap()
            .perform_click();
        assert_eq!(sheet.phase(), SheetPhase::Hiding);
        settle(&sheet, &clock);
        assert_eq!(*presses.borrow(), vec![2]);
        assert!(!sheet.is_visible());
    }

    #[test]
    fn test_request_close_acts_like_backdrop() {
        let (sheet, clock, presses) =
            sheet_with(ActionSheetConfig::new(["Keep", "Cancel"]).cancel_button_index(1));
        sheet.show();
        settle(&sheet, &clock);
        sheet.request_close();
        settle(&sheet, &clock);
        assert_eq!(*presses.borrow(), vec![1]);
    }

    #[test]
    fn test_row_tap_hides_with_its_index() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B", "C"]));
        sheet.show();
        settle(&sheet, &clock);

        assert!(
            sheet
                .view()
                .find("action_sheet:option:2")
                .unwrap()
                .perform_click()
        );
        settle(&sheet, &clock);
        assert_eq!(*presses.borrow(), vec![2]);
    }

    #[test]
    fn test_show_during_hide_drops_pending_press() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B"]));
        sheet.show();
        settle(&sheet, &clock);

        sheet.hide(0);
        clock.advance(Duration::from_millis(75));
        sheet.frame();
        let midway = sheet.progress();
        assert!(midway > 0.0);

        sheet.show();
        clock.advance(Duration::from_millis(1));
        sheet.frame();
        assert!(sheet.progress() < midway, "retargets from the current offset");
        settle(&sheet, &clock);
        assert_eq!(sheet.phase(), SheetPhase::Shown);
        assert!(presses.borrow().is_empty());
    }

    #[test]
    fn test_second_hide_replaces_first() {
        let (sheet, clock, presses) = sheet_with(ActionSheetConfig::new(["A", "B", "C"]));
        sheet.show();
        settle(&sheet, &clock);

        sheet.hide(0);
        clock.advance(Duration::from_millis(50));
        sheet.frame();
        sheet.hide(2);
        settle(&sheet, &clock);
        assert_eq!(*presses.borrow(), vec![2]);
    }

    #[test]
    fn test_callback_may_reopen_sheet() {
        let clock = ManualClock::default();
        let slot: Rc<RefCell<Option<ActionSheet>>> = Rc::default();
        let sheet = ActionSheet::new(ActionSheetConfig::new(["Again"]).on_press({
            let slot = slot.clone();
            move |_| {
                if let Some(s) = slot.borrow().as_ref() {
                    s.show();
                }
            }
        }))
        .with_clock(clock.clone());
        *slot.borrow_mut() = Some(sheet.clone());

        sheet.show();
        settle(&sheet, &clock);
        sheet.hide(0);
        clock.advance(Duration::from_millis(150));
        sheet.frame();
        assert_eq!(sheet.phase(), SheetPhase::Showing);
        assert!(sheet.is_visible());
    }

    #[test]
    fn test_cap_scrolls_long_lists() {
        let style = SheetStyle {
            button_height: 63.0,
            ..SheetStyle::default()
        };
        let labels: Vec<String> = (0..10).map(|i| format!("Option {i}")).collect();
        let (sheet, clock, _) = sheet_with(ActionSheetConfig::new(labels));
        let sheet = sheet.with_style(style);

        assert!(sheet.scroll_enabled());
        assert_eq!(sheet.layout().uncapped_height, 648.0);
        assert!((sheet.target_height() - 560.0).abs() < 1e-3);

        sheet.show();
        settle(&sheet, &clock);
        let view = sheet.view();
        let list = view.find("action_sheet:options").unwrap();
        assert!(matches!(
            list.kind,
            ViewKind::ScrollV {
                scroll_enabled: true
            }
        ));
        assert_eq!(
            view.find("action_sheet:sheet").unwrap().modifier.height,
            Some(sheet.target_height())
        );
    }

    #[test]
    fn test_set_config_recomputes_height() {
        let (sheet, _clock, _) = sheet_with(ActionSheetConfig::new(["A"]));
        assert_eq!(sheet.target_height(), 65.0);

        sheet.set_config(
            ActionSheetConfig::new(["A", "B"])
                .title("Title")
                .message("Message"),
        );
        assert_eq!(sheet.target_height(), 57.0 * 2.0 + 8.0 + 28.0 + 56.0);
        assert_eq!(sheet.progress(), sheet.target_height());
        assert_eq!(sheet.phase(), SheetPhase::Hidden);
    }

    #[test]
    fn test_show_rereads_viewport() {
        let labels: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let (sheet, clock, _) = sheet_with(ActionSheetConfig::new(labels));
        // 8 * 57 + 8 = 464 fits in 0.7 * 800
        assert!(!sheet.scroll_enabled());

        let landscape = DisplayMetrics {
            width: 800.0,
            height: 400.0,
            scale: 1.0,
        };
        with_display_metrics(landscape, || sheet.show());
        assert!(sheet.scroll_enabled());
        assert!((sheet.target_height() - 280.0).abs() < 1e-3);
        settle(&sheet, &clock);
        assert_eq!(sheet.progress(), 0.0);
    }

    #[test]
    fn test_show_outside_metrics_scope_keeps_construction_viewport() {
        let small = DisplayMetrics {
            width: 360.0,
            height: 300.0,
            scale: 1.0,
        };
        let labels: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let (sheet, clock, _) = with_display_metrics(small, || sheet_with(ActionSheetConfig::new(labels)));
        assert!(sheet.scroll_enabled());
        assert!((sheet.target_height() - 210.0).abs() < 1e-3);

        // tap handlers run with no metrics provided
        sheet.show();
        assert!(sheet.scroll_enabled());
        assert!((sheet.target_height() - 210.0).abs() < 1e-3);
        settle(&sheet, &clock);
        assert_eq!(sheet.progress(), 0.0);
    }

    #[test]
    fn test_set_display_metrics_relayouts() {
        let labels: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let (sheet, _, _) = sheet_with(ActionSheetConfig::new(labels));
        assert!(!sheet.scroll_enabled());

        sheet.set_display_metrics(DisplayMetrics {
            width: 360.0,
            height: 300.0,
            scale: 1.0,
        });
        assert!(sheet.scroll_enabled());
        assert!((sheet.target_height() - 210.0).abs() < 1e-3);
        // still hidden, so it sits fully offscreen at the new height
        assert!((sheet.progress() - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_cancel_option_leaves_the_list() {
        let (sheet, clock, _) =
            sheet_with(ActionSheetConfig::new(["A", "B", "Cancel", "D"]).cancel_button_index(2));
        sheet.show();
        settle(&sheet, &clock);

        let view = sheet.view();
        assert_eq!(
            option_tags(&view),
            vec![
                "action_sheet:option:0",
                "action_sheet:option:1",
                "action_sheet:option:3"
            ]
        );
        let cancel = view.find("action_sheet:cancel").unwrap();
        assert_eq!(cancel.text(), Some("Cancel"));
        assert_eq!(cancel.modifier.margin_top, Some(8.0));
        assert_eq!(cancel.modifier.clip_rounded, Some(CornerRadii::all(8.0)));
        // Cancel entry still counts toward the height.
        assert_eq!(sheet.target_height(), 57.0 * 4.0 + 8.0);
    }

    #[test]
    fn test_last_rendered_row_gets_rounded_corners() {
        let (sheet, clock, _) =
            sheet_with(ActionSheetConfig::new(["A", "B", "Cancel"]).cancel_button_index(2));
        sheet.show();
        settle(&sheet, &clock);

        let view = sheet.view();
        let first = view.find("action_sheet:option:0").unwrap();
        let last = view.find("action_sheet:option:1").unwrap();
        assert_eq!(first.modifier.clip_rounded, None);
        assert_eq!(last.modifier.clip_rounded, Some(CornerRadii::bottom(8.0)));
    }

    #[test]
    fn test_destructive_row_ignores_tint() {
        let tint = Color::from_hex("#00ff00");
        let (sheet, clock, _) = sheet_with(
            ActionSheetConfig::new(["Keep", "Delete", "Cancel"])
                .tint_color(tint)
                .destructive_button_index(1)
                .cancel_button_index(2),
        );
        sheet.show();
        settle(&sheet, &clock);

        let view = sheet.view();
        let warn = SheetStyle::default().warn_color;
        assert_eq!(label_color(view.find("action_sheet:option:0").unwrap()), tint);
        assert_eq!(label_color(view.find("action_sheet:option:1").unwrap()), warn);
        assert_eq!(label_color(view.find("action_sheet:cancel").unwrap()), tint);
    }

    #[test]
    fn test_prebuilt_content_is_placed_verbatim() {
        let icon = ContentHandle::new("camera-row", 42u32);
        let (sheet, clock, _) = sheet_with(
            ActionSheetConfig::new(vec![SheetContent::from(icon.clone()), "Text".into()])
                .title(ContentHandle::new("header", ())),
        );
        sheet.show();
        settle(&sheet, &clock);

        let view = sheet.view();
        let row = view.find("action_sheet:option:0").unwrap();
        match &row.children[0].kind {
            ViewKind::Content(h) => {
                assert_eq!(h, &icon);
                assert_eq!(h.downcast_ref::<u32>(), Some(&42));
            }
            other => panic!("expected prebuilt content, got {other:?}"),
        }
        let title = view.find("action_sheet:title").unwrap();
        assert!(matches!(&title.children[0].kind, ViewKind::Content(h) if h.key() == "header"));
    }

    #[test]
    fn test_empty_title_counts_as_absent() {
        let config = ActionSheetConfig::new(["A"]).title("").message("");
        assert!(config.title.is_none());
        assert!(config.message.is_none());
    }

    #[test]
    fn test_shown_sheet_outline() {
        let (sheet, clock, _) = sheet_with(
            ActionSheetConfig::new(["Archive", "Delete", "Cancel"])
                .title("Conversation")
                .destructive_button_index(1)
                .cancel_button_index(2),
        );
        sheet.show();
        settle(&sheet, &clock);

        insta::assert_snapshot!(outline(&sheet.view()), @r###"
        Stack #action_sheet
          Box #action_sheet:backdrop bg=#00000066 clickable
          Column #action_sheet:sheet h=207 mt=16
            Box #action_sheet:title h=28 bg=#ffffff radius=[8 8 0 0]
              Text "Conversation" color=#989bab size=14
            Scroll #action_sheet:options bg=#cccccc radius=[0 0 8 8] scroll=off
              Pressable #action_sheet:option:0 h=56 mt=1 bg=#ffffff underlay=#f4f4f4
                Text "Archive" color=#4fc3f7 size=17
              Pressable #action_sheet:option:1 h=56 mt=1 bg=#ffffff radius=[0 0 8 8] underlay=#f4f4f4
                Text "Delete" color=#e53935 size=17
            Pressable #action_sheet:cancel h=56 mt=8 bg=#ffffff radius=[8 8 8 8] underlay=#f4f4f4
              Text "Cancel" color=#4fc3f7 size=17 weight=500
        "###);
    }

    #[test]
    fn test_declaration_builds_config() {
        let mut registry = ContentRegistry::new();
        registry.register("gallery", ContentHandle::new("gallery", "row"));
        let config = ActionSheetConfig::from_json(
            r##"{
                "title": "Photo",
                "options": ["Take photo", {"content": "gallery"}, "Cancel"],
                "tintColor": "#ff8800",
                "cancelButtonIndex": 2,
                "destructiveButtonIndex": -1
            }"##,
            &registry,
        )
        .unwrap();

        assert_eq!(config.title, Some(SheetContent::Text("Photo".into())));
        assert_eq!(config.options.len(), 3);
        assert!(matches!(&config.options[1], SheetContent::Prebuilt(h) if h.key() == "gallery"));
        assert_eq!(config.tint_color, Color::from_rgb(0xff, 0x88, 0x00));
        assert_eq!(config.cancel_index(), Some(2));
        assert_eq!(config.destructive_button_index, None);
    }

    #[test]
    fn test_declaration_rejects_non_text_option() {
        let err = ActionSheetConfig::from_json(r#"{"options": ["ok", 3]}"#, &ContentRegistry::new())
            .unwrap_err();
        match &err {
            ConfigError::InvalidOption { field, value } => {
                assert_eq!(field, "options[1]");
                assert_eq!(value, "3");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("options[1]"));

        let err = ActionSheetConfig::from_json(
            r#"{"options": [{"content": "a", "extra": 1}]}"#,
            &ContentRegistry::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { ref field, .. } if field == "options[0]"));
    }

    #[test]
    fn test_declaration_rejects_unknown_content_and_bad_color() {
        let registry = ContentRegistry::new();
        let err = ActionSheetConfig::from_json(r#"{"options": [{"content": "nope"}]}"#, &registry)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownContent { ref name, .. } if name == "nope"));

        let err = ActionSheetConfig::from_json(r#"{"title": true, "options": []}"#, &registry)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContent { ref field, .. } if field == "title"));

        let err = ActionSheetConfig::from_json(r#"{"tintColor": "blue"}"#, &registry).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));

        let err = ActionSheetConfig::from_json("{", &registry).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
