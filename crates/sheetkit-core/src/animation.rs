use std::sync::Arc;

use parking_lot::Mutex;
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// Animation clock
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock driven by hand. Clones share the same instant, so a test can keep
/// one copy and hand another to the component under test.
#[derive(Clone)]
pub struct ManualClock {
    t: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Arc::new(Mutex::new(start)),
        }
    }
    pub fn advance(&self, by: Duration) {
        *self.t.lock() += by;
    }
    pub fn set(&self, t: Instant) {
        *self.t.lock() = t;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}

/// One leg of an animation: a pure function from elapsed time to value.
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate + Clone> {
    pub from: T,
    pub to: T,
    pub spec: AnimationSpec,
}

impl<T: Interpolate + Clone> Tween<T> {
    pub fn new(from: T, to: T, spec: AnimationSpec) -> Self {
        Self { from, to, spec }
    }

    /// Value at `elapsed` since the tween started, and whether it has finished.
    pub fn sample(&self, elapsed: Duration) -> (T, bool) {
        if elapsed < self.spec.delay {
            return (self.from.clone(), false);
        }
        let t = elapsed - self.spec.delay;
        if t >= self.spec.duration {
            return (self.to.clone(), true);
        }
        let progress = t.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased = self.spec.easing.interpolate(progress);
        (self.from.interpolate(&self.to, eased), false)
    }
}

/// Animated value that transitions smoothly. Time is passed in explicitly so
/// the owner decides which [`Clock`] drives it.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    running: Option<(Tween<T>, Instant)>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            running: None,
        }
    }

    /// Starts a tween from the current value; replaces any running tween.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec, now: Instant) {
        let tween = Tween::new(self.current.clone(), target, spec);
        self.running = Some((tween, now));
    }

    /// Jumps to `value` and cancels any running tween.
    pub fn snap_to(&mut self, value: T) {
        self.current = value;
        self.running = None;
    }

    /// Returns `true` while the animation is ongoing.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some((tween, start)) = &self.running else {
            return false;
        };
        let (value, done) = tween.sample(now.saturating_duration_since(*start));
        self.current = value;
        if done {
            self.running = None;
        }
        !done
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> Option<&T> {
        self.running.as_ref().map(|(tween, _)| &tween.to)
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }
}
