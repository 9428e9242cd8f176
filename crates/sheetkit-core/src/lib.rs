//! # SheetKit core
//!
//! The host-side primitives widgets are built from:
//!
//! - `View` / `ViewKind` / `Modifier` — a plain retained view tree. Widgets
//!   return a fresh tree every frame; the host lays it out and paints it.
//! - `AnimatedValue` — a numeric value tweened against a `Clock`.
//!   Time is always passed in, so tests drive it with a `ManualClock`.
//! - composition locals — `with_display_metrics`, `with_local` and friends,
//!   for values that come from the host rather than from widget config.
//!
//! ## Animating a value
//!
//! ```rust
//! use sheetkit_core::prelude::*;
//!
//! let clock = ManualClock::default();
//! let mut offset = AnimatedValue::new(100.0f32);
//! offset.animate_to(
//!     0.0,
//!     AnimationSpec::tween(Duration::from_millis(200), Easing::Linear),
//!     clock.now(),
//! );
//!
//! clock.advance(Duration::from_millis(100));
//! assert!(offset.update(clock.now()));
//! assert!((*offset.get() - 50.0).abs() < 0.01);
//!
//! clock.advance(Duration::from_millis(100));
//! assert!(!offset.update(clock.now()));
//! assert_eq!(*offset.get(), 0.0);
//! ```
//!
//! ## Handling taps
//!
//! Hosts deliver taps with `View::perform_click`; widgets register them with
//! `Modifier::on_click` or a `Pressable` node.

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use view::*;
