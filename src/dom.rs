use std::cell::Cell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::{HeroError, Result};

thread_local! {
    static ACTIVE_LISTENERS: Cell<usize> = Cell::new(0);
}

/// Number of `EventListener`s currently attached on this thread.
pub fn active_listener_count() -> usize {
    ACTIVE_LISTENERS.with(|count| count.get())
}

/// An attached DOM event listener, removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        ACTIVE_LISTENERS.with(|count| count.set(count.get() + 1));
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
        ACTIVE_LISTENERS.with(|count| count.set(count.get().saturating_sub(1)));
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(HeroError::WindowUnavailable)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(HeroError::DocumentUnavailable)
}

/// Inner viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(u32, u32)> {
    let width = window.inner_width()?.as_f64();
    let height = window.inner_height()?.as_f64();
    match (width, height) {
        (Some(width), Some(height)) => Ok((width.max(0.0) as u32, height.max(0.0) as u32)),
        _ => Err(HeroError::Js("viewport size is not a number".to_string())),
    }
}
