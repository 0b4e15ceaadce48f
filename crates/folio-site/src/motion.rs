//! Animation timing and geometry.
//!
//! The page drives its own animation frames; this module only computes the
//! numbers: stagger delays, parallax offsets, easing, and the opacity and
//! transform of fades and slides at a given progress.

use std::time::Duration;

/// Reveal delay between consecutive animated elements, in seconds.
pub const REVEAL_STEP_SECS: f64 = 0.1;
/// Default parallax speed when an element doesn't set one.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
/// Default duration of fades and slides.
pub const DEFAULT_TWEEN: Duration = Duration::from_millis(300);

/// Body class added when the visitor prefers reduced motion.
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";

/// Whether animations run at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Motion {
    reduced: bool,
}

impl Motion {
    pub fn new(prefers_reduced_motion: bool) -> Self {
        Self {
            reduced: prefers_reduced_motion,
        }
    }

    pub fn is_reduced(self) -> bool {
        self.reduced
    }

    pub fn is_enabled(self) -> bool {
        !self.reduced
    }

    /// Class to add to the body, if any.
    pub fn body_class(self) -> Option<&'static str> {
        self.reduced.then_some(REDUCED_MOTION_CLASS)
    }

    /// `--animation-delay` of the `index`th scroll-revealed element, in
    /// seconds. `None` when motion is reduced and nothing is set up.
    pub fn reveal_delay(self, index: usize) -> Option<f64> {
        self.is_enabled().then(|| index as f64 * REVEAL_STEP_SECS)
    }

    /// Animation delay of the `index`th element of a stagger group.
    pub fn stagger_delay(self, group: StaggerGroup, index: usize) -> Option<Duration> {
        self.is_enabled().then(|| stagger_delay(index, group.step()))
    }
}

/// Elements that animate in together, each a fixed step after the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaggerGroup {
    ProjectCards,
    SkillItems,
    ContactCards,
    SkillCategories,
}

impl StaggerGroup {
    pub const ALL: [StaggerGroup; 4] = [
        StaggerGroup::ProjectCards,
        StaggerGroup::SkillItems,
        StaggerGroup::ContactCards,
        StaggerGroup::SkillCategories,
    ];

    pub fn step(self) -> Duration {
        Duration::from_millis(match self {
            StaggerGroup::ProjectCards => 100,
            StaggerGroup::SkillItems => 150,
            StaggerGroup::ContactCards | StaggerGroup::SkillCategories => 200,
        })
    }

    /// CSS selector of the group's elements.
    pub fn selector(self) -> &'static str {
        match self {
            StaggerGroup::ProjectCards => ".projects__grid .project-card",
            StaggerGroup::SkillItems => ".skills__list .skill-item",
            StaggerGroup::ContactCards => ".contact-section .contact-card",
            StaggerGroup::SkillCategories => ".skill-category",
        }
    }
}

pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Vertical offset of a parallax element, in pixels.
pub fn parallax_offset(scroll_y: f64, speed: Option<f64>) -> f64 {
    -(scroll_y * speed.unwrap_or(DEFAULT_PARALLAX_SPEED))
}

/// Cubic ease-out: fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of a tween completed after `elapsed`, clamped to `[0, 1]`.
pub fn tween_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

pub fn fade_in_opacity(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0)
}

/// Opacity while fading out from `start_opacity`.
pub fn fade_out_opacity(start_opacity: f64, progress: f64) -> f64 {
    start_opacity * (1.0 - progress.clamp(0.0, 1.0))
}

/// Direction an element slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl SlideDirection {
    /// Transform before the slide starts.
    pub fn initial_transform(self) -> &'static str {
        match self {
            SlideDirection::Left => "translateX(-100%)",
            SlideDirection::Right => "translateX(100%)",
            SlideDirection::Up => "translateY(-100%)",
            SlideDirection::Down => "translateY(100%)",
        }
    }

    /// Offset along the slide axis, in percent, at `progress`.
    pub fn offset_at(self, progress: f64) -> f64 {
        let eased = 100.0 * ease_out_cubic(progress);
        match self {
            SlideDirection::Left | SlideDirection::Up => -100.0 + eased,
            SlideDirection::Right | SlideDirection::Down => 100.0 - eased,
        }
    }

    /// Transform at `progress`; the finished slide resets to no offset.
    pub fn transform_at(self, progress: f64) -> String {
        if progress >= 1.0 {
            return "translate(0, 0)".to_string();
        }
        let offset = self.offset_at(progress);
        match self {
            SlideDirection::Left | SlideDirection::Right => format!("translateX({offset}%)"),
            SlideDirection::Up | SlideDirection::Down => format!("translateY({offset}%)"),
        }
    }
}

/// Square ripple drawn from a click point, relative to the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Centers a ripple covering the element on the click at (`x`, `y`).
    pub fn at(width: f64, height: f64, x: f64, y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }
}
