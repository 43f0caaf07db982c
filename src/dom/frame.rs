use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};

use super::{window, DomError};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. The handler gets the frame timestamp in
/// milliseconds and returns whether another frame is wanted.
pub struct FrameLoop {
    window: web_sys::Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let win = window.clone();
        let pending_inner = pending.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            pending_inner.set(None);
            if !on_frame(now) {
                return;
            }
            if let Some(cb) = callback_inner.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(e) => warn!("animation frame request failed: {:?}", e),
                }
            }
        }));

        let id = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or_else(|| DomError::Js("frame callback missing".into()))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        pending.set(Some(id));

        Ok(Self {
            window,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a clone of `callback`; taking it breaks the cycle.
        self.callback.borrow_mut().take();
    }
}
