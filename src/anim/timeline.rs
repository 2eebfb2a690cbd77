use crate::config::EntranceConfig;

use super::easing::{CubicBezier, Easing};

/// A single 0 → 1 transition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn once(delay: f64, duration: f64, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
        }
    }

    /// Eased progress at `t` seconds after mount.
    pub fn progress_at(&self, t: f64) -> f64 {
        let local = t - self.delay;
        if !(local > 0.0) {
            return 0.0;
        }
        if !(self.duration > 0.0) {
            return 1.0;
        }
        self.easing.ease((local / self.duration).min(1.0))
    }

    /// When the tween stops changing.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }
}

/// Endless back-and-forth sweep, left to the browser's animation engine so
/// it costs no re-renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientLoop {
    /// Seconds per direction
    pub period: f64,
    pub easing: Easing,
}

impl GradientLoop {
    pub fn new(period: f64, easing: Easing) -> Self {
        Self { period, easing }
    }

    /// Shorthand `animation` value running `keyframes` forever, alternating.
    pub fn css_animation(&self, keyframes: &str) -> String {
        format!(
            "{} {}s {} 0s infinite alternate",
            keyframes,
            self.period,
            self.easing.css()
        )
    }
}

/// Delay schedule for the children of a revealed container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger: f64,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger
    }
}

/// Interpolated look of an element at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub opacity: f64,
    /// Translation in px
    pub x: f64,
    pub y: f64,
}

impl RevealState {
    pub const RESTING: RevealState = RevealState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px);",
            self.opacity, self.x, self.y
        )
    }
}

/// Fade plus slide from `(from_x, from_y)` to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub tween: Tween,
    pub from_x: f64,
    pub from_y: f64,
}

impl Motion {
    pub fn fade(delay: f64, duration: f64) -> Self {
        Self {
            tween: Tween::once(delay, duration, Easing::EaseOut),
            from_x: 0.0,
            from_y: 0.0,
        }
    }

    pub fn slide(delay: f64, duration: f64, from_x: f64, from_y: f64) -> Self {
        Self {
            tween: Tween::once(delay, duration, Easing::EaseOut),
            from_x,
            from_y,
        }
    }

    pub fn state_at(&self, t: f64) -> RevealState {
        let p = self.tween.progress_at(t);
        RevealState {
            opacity: p,
            x: self.from_x * (1.0 - p),
            y: self.from_y * (1.0 - p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Rendered, clock not started yet
    Mounted,
    Entering,
    /// Everything is at rest
    Complete,
    /// Entrance clock released; only the gradient loops keep moving
    Idle,
}

impl EntrancePhase {
    pub fn is_animating(self) -> bool {
        matches!(self, EntrancePhase::Mounted | EntrancePhase::Entering)
    }
}

/// The staggered reveal: one motion per child plus optional accent motions
/// for the elements nested inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceTimeline {
    items: Vec<Motion>,
    accents: Vec<Motion>,
}

impl EntranceTimeline {
    pub fn new(config: &EntranceConfig, item_count: usize) -> Self {
        let stagger = Stagger {
            delay_children: config.delay_children,
            stagger: config.stagger_children,
        };
        let easing = Easing::Bezier(CubicBezier::from_points(config.item_ease));
        let items = (0..item_count)
            .map(|index| Motion {
                tween: Tween::once(stagger.delay_for(index), config.item_duration, easing),
                from_x: 0.0,
                from_y: config.item_offset_y,
            })
            .collect();
        Self {
            items,
            accents: Vec::new(),
        }
    }

    /// Registers an accent and returns its index for `accent_state`.
    pub fn add_accent(&mut self, motion: Motion) -> usize {
        self.accents.push(motion);
        self.accents.len() - 1
    }

    /// State of child `index`; children past the end render at rest.
    pub fn item_state(&self, index: usize, t: f64) -> RevealState {
        self.items
            .get(index)
            .map_or(RevealState::RESTING, |motion| motion.state_at(t))
    }

    pub fn accent_state(&self, index: usize, t: f64) -> RevealState {
        self.accents
            .get(index)
            .map_or(RevealState::RESTING, |motion| motion.state_at(t))
    }

    /// Seconds until the last item and accent are at rest.
    pub fn total_duration(&self) -> f64 {
        self.items
            .iter()
            .chain(self.accents.iter())
            .map(|motion| motion.tween.end_time())
            .fold(0.0, f64::max)
    }

    pub fn phase_at(&self, t: f64) -> EntrancePhase {
        if !(t > 0.0) {
            EntrancePhase::Mounted
        } else if t < self.total_duration() {
            EntrancePhase::Entering
        } else {
            EntrancePhase::Complete
        }
    }
}
