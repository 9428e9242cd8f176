//! Bottom action sheet: a modal list of choices sliding up from the bottom
//! edge, with an optional detached cancel row.
//!
//! ```rust
//! use sheetkit_core::prelude::*;
//! use sheetkit_material::{ActionSheet, ActionSheetConfig, SheetPhase};
//! use std::{cell::Cell, rc::Rc};
//!
//! let picked = Rc::new(Cell::new(None));
//! let clock = ManualClock::default();
//! let sheet = ActionSheet::new(
//!     ActionSheetConfig::new(["Reply", "Forward", "Cancel"])
//!         .cancel_button_index(2)
//!         .on_press({
//!             let picked = picked.clone();
//!             move |i| picked.set(Some(i))
//!         }),
//! )
//! .with_clock(clock.clone());
//!
//! sheet.show();
//! clock.advance(Duration::from_millis(250));
//! sheet.frame();
//! assert_eq!(sheet.phase(), SheetPhase::Shown);
//!
//! // Backdrop tap dismisses through the cancel entry.
//! sheet.view().find("action_sheet:backdrop").unwrap().perform_click();
//! clock.advance(Duration::from_millis(150));
//! sheet.frame();
//! assert_eq!(picked.get(), Some(2));
//! assert!(!sheet.is_visible());
//! ```
//!
//! The host calls [`ActionSheet::frame`] once per frame and paints
//! [`ActionSheet::view`]. `on_press` only ever fires from `frame`, after the
//! hide animation has finished.

mod config;
mod declaration;
mod layout;
mod render;
mod style;

pub use config::{ActionSheetConfig, PressCallback, SheetContent};
pub use declaration::{ContentRegistry, SheetDeclaration};
pub use layout::{SheetCounts, SheetLayout};
pub use style::{DEFAULT_TINT, SheetStyle, sheet_style, with_sheet_style};

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use sheetkit_core::animation::{AnimatedValue, Clock, SystemClock};
use sheetkit_core::{DisplayMetrics, View, display_metrics, try_display_metrics};

/// Where the sheet is in one presentation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetPhase {
    /// Off screen, overlay unmounted.
    Hidden,
    /// Sliding in.
    Showing,
    /// Fully on screen.
    Shown,
    /// Sliding out; `on_press` fires when this ends.
    Hiding,
}

struct SheetState {
    config: ActionSheetConfig,
    style: SheetStyle,
    metrics: DisplayMetrics,
    layout: SheetLayout,
    phase: SheetPhase,
    visible: bool,
    /// Vertical offset of the sheet: 0 is fully shown, `target_height` fully hidden.
    progress: AnimatedValue<f32>,
    pending_press: Option<usize>,
    clock: Arc<dyn Clock>,
}

impl SheetState {
    fn counts(&self) -> SheetCounts {
        SheetCounts {
            options: self.config.options.len(),
            has_title: self.config.title.is_some(),
            has_message: self.config.message.is_some(),
        }
    }

    fn relayout(&mut self) {
        self.layout = SheetLayout::compute(self.counts(), &self.style, self.metrics);
        if self.phase == SheetPhase::Hidden {
            self.progress.snap_to(self.layout.target_height);
        }
    }
}

/// Handle to an action sheet. Clones share the same sheet.
#[derive(Clone)]
pub struct ActionSheet {
    state: Rc<RefCell<SheetState>>,
}

impl ActionSheet {
    /// Builds a hidden sheet using the current [`sheet_style`] and
    /// [`display_metrics`].
    pub fn new(config: ActionSheetConfig) -> Self {
        config.warn_inert_indices();
        let style = sheet_style();
        let metrics = display_metrics();
        let counts = SheetCounts {
            options: config.options.len(),
            has_title: config.title.is_some(),
            has_message: config.message.is_some(),
        };
        let layout = SheetLayout::compute(counts, &style, metrics);
        Self {
            state: Rc::new(RefCell::new(SheetState {
                config,
                style,
                metrics,
                layout,
                phase: SheetPhase::Hidden,
                visible: false,
                progress: AnimatedValue::new(layout.target_height),
                pending_press: None,
                clock: Arc::new(SystemClock),
            })),
        }
    }

    pub fn with_style(self, style: SheetStyle) -> Self {
        {
            let mut s = self.state.borrow_mut();
            s.style = style;
            s.relayout();
        }
        self
    }

    pub fn with_clock(self, clock: impl Clock) -> Self {
        self.state.borrow_mut().clock = Arc::new(clock);
        self
    }

    /// Replaces the configuration. The height is recomputed right away; nothing
    /// is animated or redrawn until the next `show`/`frame`.
    pub fn set_config(&self, config: ActionSheetConfig) {
        config.warn_inert_indices();
        let mut s = self.state.borrow_mut();
        s.config = config;
        s.relayout();
    }

    /// Replaces the viewport the height cap is computed against.
    pub fn set_display_metrics(&self, metrics: DisplayMetrics) {
        let mut s = self.state.borrow_mut();
        s.metrics = metrics;
        s.relayout();
    }

    /// Mounts the overlay and slides the sheet in.
    ///
    /// When called inside [`sheetkit_core::with_display_metrics`] those metrics
    /// replace the stored ones; otherwise the last known metrics are kept.
    pub fn show(&self) {
        let mut s = self.state.borrow_mut();
        if let Some(metrics) = try_display_metrics() {
            s.metrics = metrics;
        }
        s.relayout();
        if let Some(i) = s.pending_press.take() {
            log::debug!("action sheet: show() superseded pending press {i}");
        }
        s.visible = true;
        s.phase = SheetPhase::Showing;
        let now = s.clock.now();
        let spec = s.style.show_spec();
        s.progress.animate_to(0.0, spec, now);
        log::debug!(
            "action sheet: showing, height {} (scroll {})",
            s.layout.target_height,
            s.layout.scroll_enabled
        );
    }

    /// Slides the sheet out; once it is gone, `on_press(index)` is called.
    ///
    /// `index` is passed through as is, so callers may use any sentinel.
    pub fn hide(&self, index: usize) {
        let mut s = self.state.borrow_mut();
        if let Some(prev) = s.pending_press.replace(index) {
            log::debug!("action sheet: hide({index}) superseded pending press {prev}");
        }
        s.phase = SheetPhase::Hiding;
        let now = s.clock.now();
        let target = s.layout.target_height;
        let spec = s.style.hide_spec();
        s.progress.animate_to(target, spec, now);
        log::debug!("action sheet: hiding with index {index}");
    }

    /// Dismisses through the cancel entry. Without a valid cancel index this
    /// does nothing, so the backdrop cannot close the sheet.
    pub fn cancel(&self) {
        let cancel = self.state.borrow().config.cancel_index();
        match cancel {
            Some(i) => self.hide(i),
            None => log::debug!("action sheet: no cancel index, ignoring dismiss request"),
        }
    }

    /// Host close request (hardware back button, modal dismiss gesture).
    pub fn request_close(&self) {
        self.cancel();
    }

    /// Advances the animation to the clock's current time and settles the
    /// phase when it ends. Returns `true` while still animating.
    pub fn frame(&self) -> bool {
        let (running, fired) = {
            let mut s = self.state.borrow_mut();
            let now = s.clock.now();
            let was_animating = s.progress.is_animating();
            let running = s.progress.update(now);
            let mut fired = None;
            if was_animating && !running {
                match s.phase {
                    SheetPhase::Showing => {
                        s.phase = SheetPhase::Shown;
                        log::debug!("action sheet: shown");
                    }
                    SheetPhase::Hiding => {
                        s.phase = SheetPhase::Hidden;
                        s.visible = false;
                        log::debug!("action sheet: hidden");
                        fired = s
                            .pending_press
                            .take()
                            .map(|i| (i, s.config.on_press.clone()));
                    }
                    SheetPhase::Hidden | SheetPhase::Shown => {}
                }
            }
            (running, fired)
        };
        // The callback may call back into the sheet.
        if let Some((index, on_press)) = fired {
            on_press(index);
        }
        running
    }

    /// The overlay to paint this frame; an empty box while hidden.
    pub fn view(&self) -> View {
        let s = self.state.borrow();
        render::sheet_view(self, &s)
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn phase(&self) -> SheetPhase {
        self.state.borrow().phase
    }

    /// Current vertical offset, between 0 (shown) and `target_height` (hidden).
    pub fn progress(&self) -> f32 {
        *self.state.borrow().progress.get()
    }

    pub fn layout(&self) -> SheetLayout {
        self.state.borrow().layout
    }

    pub fn target_height(&self) -> f32 {
        self.state.borrow().layout.target_height
    }

    pub fn scroll_enabled(&self) -> bool {
        self.state.borrow().layout.scroll_enabled
    }
}
