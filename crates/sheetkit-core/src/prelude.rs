pub use crate::animation::{AnimatedValue, AnimationSpec, Clock, Easing, ManualClock, SystemClock};
pub use crate::{
    Callback, Color, ContentHandle, CornerRadii, DisplayMetrics, FontWeight, Modifier, TextAlign,
    Transform, View, ViewKind, display_metrics, hairline_width, try_display_metrics,
    with_display_metrics,
};
pub use web_time::{Duration, Instant};
