use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{ObserverHandle, ViewportError, ViewportObserver, VisibilityCallback};
use crate::visibility::{Threshold, Visibility};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Observed {
    observer: IntersectionObserver,
    element: Element,
    // Dropping the closure invalidates the JS callback, so it lives as long as the observer.
    _callback: EntriesCallback,
}

/// Browser viewport backed by `IntersectionObserver`, one JS observer per subscription.
#[derive(Default)]
pub struct IntersectionViewport {
    next: Cell<u64>,
    observed: RefCell<HashMap<ObserverHandle, Observed>>,
}

impl IntersectionViewport {
    /// Empty viewport; JS observers are created per subscription.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportObserver for IntersectionViewport {
    type Element = Element;

    fn subscribe(
        &self,
        element: &Element,
        threshold: Threshold,
        mut callback: VisibilityCallback,
    ) -> Result<ObserverHandle, ViewportError> {
        let closure = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                callback(Visibility::from_intersection(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                ));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.ratio()));

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(|err| ViewportError::Unsupported(describe(&err)))?;
        observer.observe(element);

        let handle = ObserverHandle::next(&self.next);
        tracing::debug!(?handle, threshold = threshold.ratio(), "viewport subscribed");
        self.observed.borrow_mut().insert(
            handle,
            Observed {
                observer,
                element: element.clone(),
                _callback: closure,
            },
        );
        Ok(handle)
    }

    fn unsubscribe(&self, handle: ObserverHandle) {
        let Some(observed) = self.observed.borrow_mut().remove(&handle) else {
            return;
        };
        observed.observer.unobserve(&observed.element);
        observed.observer.disconnect();
        tracing::debug!(?handle, "viewport unsubscribed");
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
