use std::cell::Cell;
use std::rc::Rc;

use sheetkit_core::prelude::*;
use sheetkit_material::{ActionSheet, ActionSheetConfig, ContentRegistry, SheetPhase};
use sheetkit_ui::outline;

const DECLARATION: &str = r##"{
    "title": "Share photo",
    "message": "Pick where the photo should go",
    "options": ["Messages", "Mail", {"content": "nearby"}, "Delete", "Cancel"],
    "tintColor": "#0061a4",
    "cancelButtonIndex": 4,
    "destructiveButtonIndex": 3
}"##;

const FRAME: Duration = Duration::from_millis(16);

fn pump(sheet: &ActionSheet, clock: &ManualClock) -> usize {
    let mut frames = 0;
    while sheet.frame() {
        clock.advance(FRAME);
        frames += 1;
        log::trace!("offset {:.1}", sheet.progress());
    }
    frames
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut registry = ContentRegistry::new();
    registry.register("nearby", ContentHandle::new("nearby", "AirDrop-style row"));

    let picked = Rc::new(Cell::new(None));
    let config = ActionSheetConfig::from_json(DECLARATION, &registry)?.on_press({
        let picked = picked.clone();
        move |i| picked.set(Some(i))
    });

    let clock = ManualClock::default();
    let metrics = DisplayMetrics {
        width: 390.0,
        height: 844.0,
        scale: 3.0,
    };
    let sheet = with_display_metrics(metrics, || {
        let sheet = ActionSheet::new(config).with_clock(clock.clone());
        sheet.show();
        sheet
    });

    let frames = pump(&sheet, &clock);
    log::info!("shown after {frames} frames, height {}", sheet.target_height());
    println!("{}", outline(&sheet.view()));

    // Tap the backdrop: the cancel entry dismisses the sheet.
    let view = sheet.view();
    let backdrop = view
        .find("action_sheet:backdrop")
        .ok_or_else(|| anyhow::anyhow!("sheet rendered without a backdrop"))?;
    backdrop.perform_click();

    let frames = pump(&sheet, &clock);
    anyhow::ensure!(sheet.phase() == SheetPhase::Hidden, "sheet did not close");
    log::info!("hidden after {frames} frames, picked {:?}", picked.get());
    Ok(())
}
