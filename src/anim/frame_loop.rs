//! `requestAnimationFrame` loop with an owning, cancellable handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::{HeroError, Result};

/// Frame gaps above this (tab in background, debugger pause) are clamped.
const MAX_FRAME_SECS: f64 = 0.1;

type FrameCallback = Closure<dyn FnMut(f64)>;

thread_local! {
    static ACTIVE_LOOPS: Cell<usize> = Cell::new(0);
}

/// Number of frame loops on this thread that have not stopped yet.
pub fn active_frame_loops() -> usize {
    ACTIVE_LOOPS.with(|count| count.get())
}

struct Shared {
    request_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    in_tick: Cell<bool>,
    callback: RefCell<Option<FrameCallback>>,
}

impl Shared {
    fn schedule(&self) -> Result<()> {
        let window = web_sys::window().ok_or(HeroError::WindowUnavailable)?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref().ok_or(HeroError::Js("frame callback released".into()))?;
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.request_id.set(Some(id));
        Ok(())
    }

    /// Marks the loop stopped; counted once however it ends.
    fn stop(&self) {
        if !self.cancelled.replace(true) {
            ACTIVE_LOOPS.with(|count| count.set(count.get().saturating_sub(1)));
        }
    }

    /// Breaks the callback's reference to itself. A callback cannot be freed
    /// while it is running, so from inside a tick the drop is deferred.
    fn release(&self) {
        let callback = self.callback.borrow_mut().take();
        if let Some(callback) = callback {
            if self.in_tick.get() {
                Timeout::new(0, move || drop(callback)).forget();
            }
        }
    }
}

/// A running frame loop. The tick closure receives the frame timestamp in
/// milliseconds and returns whether it wants another frame.
///
/// Dropping the handle cancels the pending frame.
pub struct AnimationLoop {
    shared: Rc<Shared>,
}

impl AnimationLoop {
    pub fn start<F>(mut tick: F) -> Result<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let shared = Rc::new(Shared {
            request_id: Cell::new(None),
            cancelled: Cell::new(false),
            in_tick: Cell::new(false),
            callback: RefCell::new(None),
        });

        let inner = shared.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            inner.request_id.set(None);
            if inner.cancelled.get() {
                return;
            }
            inner.in_tick.set(true);
            let mut again = tick(timestamp) && !inner.cancelled.get();
            if again {
                if let Err(e) = inner.schedule() {
                    warn!("Stopping frame loop: {}", e);
                    again = false;
                }
            }
            if !again {
                inner.stop();
                inner.release();
            }
            inner.in_tick.set(false);
        }) as Box<dyn FnMut(f64)>);
        *shared.callback.borrow_mut() = Some(callback);

        if let Err(e) = shared.schedule() {
            shared.cancelled.set(true);
            shared.release();
            return Err(e);
        }
        ACTIVE_LOOPS.with(|count| count.set(count.get() + 1));
        Ok(Self { shared })
    }

    pub fn is_running(&self) -> bool {
        !self.shared.cancelled.get()
    }

    pub fn cancel(&self) {
        self.shared.stop();
        if let Some(id) = self.shared.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.shared.release();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Turns frame timestamps into clamped per-frame deltas.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous timestamp; 0 on the first frame.
    pub fn delta_secs(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last {
            Some(last) => ((timestamp_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        delta
    }
}
