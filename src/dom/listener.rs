use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};

use super::{window, DomError};

pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        window()?.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Trailing-edge debounce: each call replaces the pending timeout, which
/// cancels the previous one.
pub struct Debounce {
    wait_ms: u32,
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.wait_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
