//! 2D drawing surface and the particle effect that owns one.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::anim::frame_loop::AnimationLoop;
use crate::config::ParticleConfig;
use crate::dom::{self, EventListener};
use crate::error::{HeroError, Result};
use crate::particles::{Hsla, ParticleField};

/// Where particles get painted.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or(HeroError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HeroError::ContextUnavailable)?;
        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla) {
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill();
    }
}

/// Brings the surface and the field's bounds to a new viewport size.
pub fn apply_resize<S: Surface>(field: &mut ParticleField, surface: &mut S, width: u32, height: u32) {
    surface.resize(width, height);
    field.resize(width as f64, height as f64);
}

struct EffectState<S> {
    field: ParticleField,
    surface: S,
}

/// Running particle animation on a full-viewport canvas.
///
/// Owns the resize listener and the frame loop; dropping it stops both.
pub struct ParticleEffect {
    frame_loop: AnimationLoop,
    _resize: EventListener,
}

impl ParticleEffect {
    pub fn start(canvas: Option<HtmlCanvasElement>, config: &ParticleConfig) -> Result<Self> {
        let canvas = canvas.ok_or(HeroError::CanvasUnavailable)?;
        let window = dom::window()?;
        let mut surface = CanvasSurface::new(canvas)?;

        let (width, height) = dom::viewport_size(&window)?;
        surface.resize(width, height);
        let field = ParticleField::spawn(config, width as f64, height as f64, Rng::new());
        let state = Rc::new(RefCell::new(EffectState { field, surface }));

        let resize = {
            let state = state.clone();
            EventListener::new(&window, "resize", move |_| {
                match dom::window().and_then(|window| dom::viewport_size(&window)) {
                    Ok((width, height)) => {
                        let mut state = state.borrow_mut();
                        let EffectState { field, surface } = &mut *state;
                        apply_resize(field, surface, width, height);
                        debug!("Particle canvas resized to {}x{}", width, height);
                    }
                    Err(e) => warn!("Ignoring resize: {}", e),
                }
            })?
        };

        let frame_loop = AnimationLoop::start(move |_| {
            let mut state = state.borrow_mut();
            let EffectState { field, surface } = &mut *state;
            field.step();
            field.draw(surface);
            true
        })?;

        info!("Particle field started with {} particles at {}x{}", config.count, width, height);
        Ok(Self {
            frame_loop,
            _resize: resize,
        })
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Stops drawing and detaches from the window.
    pub fn dispose(self) {
        drop(self)
    }
}

impl Drop for ParticleEffect {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        debug!("Particle field stopped");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Surface that remembers what was asked of it.
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub resizes: Vec<(u32, u32)>,
        pub clears: usize,
        pub circles: Vec<(f64, f64, f64, String)>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                resizes: Vec::new(),
                clears: 0,
                circles: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
            self.resizes.push((width, height));
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla) {
            self.circles.push((x, y, radius, color.to_string()));
        }
    }
}
