//! # Composition locals
//!
//! SheetKit uses thread‑local “composition locals” for parameters that come
//! from the host rather than from the widget's own configuration:
//!
//! - `DisplayMetrics` — viewport size and pixel ratio of the current display.
//! - any widget style type, through the generic `with_local` / `local`.
//!
//! Override a value for everything composed inside a closure:
//!
//! ```rust
//! use sheetkit_core::*;
//!
//! let tablet = DisplayMetrics { width: 800.0, height: 1280.0, scale: 2.0 };
//!
//! with_display_metrics(tablet, || {
//!     assert_eq!(display_metrics().height, 1280.0);
//!     assert_eq!(hairline_width(), 0.5);
//! });
//! ```
//!
//! Getters fall back to `Default` when nothing was provided; the `try_`
//! variants return `None` instead.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

/// Provides `value` to every `local::<T>()` call made inside `f`.
pub fn with_local<T: Any + Clone, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided `T`, if any frame provides one.
pub fn try_local<T: Any + Clone>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>())?.downcast_ref::<T>().cloned())
    })
}

/// Innermost provided `T`, or `T::default()`.
pub fn local<T: Any + Clone + Default>() -> T {
    try_local().unwrap_or_default()
}

/// Viewport of the display the UI is composed for, in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    pub width: f32,
    pub height: f32,
    /// dp→px multiplier
    pub scale: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 800.0,
            scale: 1.0,
        }
    }
}

impl DisplayMetrics {
    /// Thinnest line the display can draw, in dp.
    ///
    /// 0.4dp rounded to the nearest physical pixel; when that rounds to zero,
    /// a single physical pixel.
    pub fn hairline(&self) -> f32 {
        if self.scale <= 0.0 {
            return 1.0;
        }
        let snapped = (0.4 * self.scale).round() / self.scale;
        if snapped == 0.0 { 1.0 / self.scale } else { snapped }
    }
}

pub fn with_display_metrics<R>(metrics: DisplayMetrics, f: impl FnOnce() -> R) -> R {
    with_local(metrics, f)
}

pub fn display_metrics() -> DisplayMetrics {
    local::<DisplayMetrics>()
}

/// Metrics provided by an enclosing `with_display_metrics`, without the default.
pub fn try_display_metrics() -> Option<DisplayMetrics> {
    try_local::<DisplayMetrics>()
}

pub fn hairline_width() -> f32 {
    display_metrics().hairline()
}
