use log::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{window, DomError};
use crate::config::Trigger;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityChange {
    pub index: usize,
    pub ratio: f64,
    pub intersecting: bool,
}

pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// One `IntersectionObserver` over a list of regions. `None` slots are
/// skipped but keep their index. The handler returns `true` to unobserve.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl VisibilityObserver {
    pub fn observe<F>(targets: Vec<Option<Element>>, trigger: Trigger, mut on_change: F) -> Result<Self, DomError>
    where
        F: FnMut(VisibilityChange) -> bool + 'static,
    {
        window()?;
        if !observer_supported() {
            return Err(DomError::ObserverUnavailable);
        }

        let lookup = targets.clone();
        let callback: EntryCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = lookup
                    .iter()
                    .position(|slot| slot.as_ref() == Some(&target))
                else {
                    continue;
                };
                let change = VisibilityChange {
                    index,
                    ratio: entry.intersection_ratio(),
                    intersecting: entry.is_intersecting(),
                };
                if on_change(change) {
                    observer.unobserve(&target);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(trigger.threshold));
        init.set_root_margin(trigger.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for (index, target) in targets.iter().enumerate() {
            match target {
                Some(element) => observer.observe(element),
                None => warn!("visibility region {} is missing, skipping", index),
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
