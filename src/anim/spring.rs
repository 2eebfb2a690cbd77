use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use serde::Deserialize;
use yew::prelude::*;

use super::frame_loop::{AnimationLoop, FrameClock};

/// Integration step cap so a long frame cannot blow the spring up.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Below this speed (units/s) the spring may settle
    pub rest_speed: f64,
    /// Below this distance from target the spring may settle
    pub rest_delta: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_speed: 0.01,
            rest_delta: 0.01,
        }
    }
}

/// Damped spring pulling `value` toward `target`.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
}

impl Spring {
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the spring by `dt` seconds and snaps it onto the target
    /// once it is both slow and close.
    pub fn step(&mut self, dt: f64) {
        if self.is_at_rest() || !(dt > 0.0) {
            return;
        }
        let mass = self.params.mass.max(f64::EPSILON);
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.velocity.abs() < self.params.rest_speed
            && (self.value - self.target).abs() < self.params.rest_delta
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Follows `target` with a spring, re-rendering every frame until it settles.
/// The first render starts at `target` without animating.
#[hook]
pub fn use_spring(target: f64, params: SpringParams) -> f64 {
    let value = use_state(|| target);
    let spring = use_mut_ref(|| Spring::new(target, params));
    let frame_loop: Rc<RefCell<Option<AnimationLoop>>> = use_mut_ref(|| None);

    {
        let value = value.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |target| {
                spring.borrow_mut().set_target(*target);
                let idle = frame_loop
                    .borrow()
                    .as_ref()
                    .map_or(true, |running| !running.is_running());
                if idle && !spring.borrow().is_at_rest() {
                    let mut clock = FrameClock::default();
                    let tick = move |timestamp: f64| {
                        let dt = clock.delta_secs(timestamp);
                        let (current, settled) = {
                            let mut spring = spring.borrow_mut();
                            spring.step(dt);
                            (spring.value(), spring.is_at_rest())
                        };
                        value.set(current);
                        !settled
                    };
                    match AnimationLoop::start(tick) {
                        Ok(running) => *frame_loop.borrow_mut() = Some(running),
                        Err(e) => warn!("Spring running without frames: {}", e),
                    }
                }
                || ()
            },
            target,
        );
    }

    use_effect_with_deps(
        move |_| {
            move || {
                frame_loop.borrow_mut().take();
            }
        },
        (),
    );

    *value
}
