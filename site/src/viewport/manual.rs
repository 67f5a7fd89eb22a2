use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{ObserverHandle, ViewportError, ViewportObserver, VisibilityCallback};
use crate::visibility::{Threshold, Visibility};

struct Watch {
    element: String,
    threshold: Threshold,
    callback: VisibilityCallback,
}

/// Viewport driven by hand: elements are names, samples come from [`intersect`](Self::intersect).
///
/// Callbacks must not subscribe or unsubscribe on the same viewport while
/// being notified.
#[derive(Default)]
pub struct ManualViewport {
    next: Cell<u64>,
    watches: RefCell<BTreeMap<ObserverHandle, Watch>>,
}

impl ManualViewport {
    /// Viewport with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a sample for `element` to every subscriber watching it.
    /// Returns how many callbacks ran.
    pub fn intersect(&self, element: &str, is_intersecting: bool, ratio: f64) -> usize {
        let mut watches = self.watches.borrow_mut();
        let mut notified = 0;
        for watch in watches.values_mut().filter(|w| w.element == element) {
            let visibility = Visibility::from_intersection(is_intersecting, ratio, watch.threshold);
            (watch.callback)(visibility);
            notified += 1;
        }
        notified
    }

    /// Live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.watches.borrow().len()
    }
}

impl ViewportObserver for ManualViewport {
    type Element = str;

    fn subscribe(
        &self,
        element: &str,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<ObserverHandle, ViewportError> {
        let handle = ObserverHandle::next(&self.next);
        self.watches.borrow_mut().insert(
            handle,
            Watch {
                element: element.to_string(),
                threshold,
                callback,
            },
        );
        Ok(handle)
    }

    fn unsubscribe(&self, handle: ObserverHandle) {
        self.watches.borrow_mut().remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<Visibility>>>, VisibilityCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |v| sink.borrow_mut().push(v)))
    }

    #[test]
    fn toggles_as_section_scrolls() {
        let viewport = ManualViewport::new();
        let (seen, callback) = recorder();
        viewport
            .subscribe("features", Threshold::SECTION, callback)
            .unwrap();

        viewport.intersect("features", true, 0.1);
        viewport.intersect("features", true, 0.35);
        viewport.intersect("features", true, 0.15);
        viewport.intersect("features", false, 0.0);
        viewport.intersect("features", true, 0.9);

        assert_eq!(
            *seen.borrow(),
            vec![
                Visibility::Hidden,
                Visibility::Visible,
                Visibility::Hidden,
                Visibility::Hidden,
                Visibility::Visible,
            ]
        );
    }

    #[test]
    fn only_matching_element_is_notified() {
        let viewport = ManualViewport::new();
        let (about, about_cb) = recorder();
        let (hero, hero_cb) = recorder();
        viewport.subscribe("about", Threshold::SECTION, about_cb).unwrap();
        viewport.subscribe("hero", Threshold::SECTION, hero_cb).unwrap();

        assert_eq!(viewport.intersect("about", true, 1.0), 1);
        assert_eq!(about.borrow().len(), 1);
        assert!(hero.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let viewport = ManualViewport::new();
        let (seen, callback) = recorder();
        let handle = viewport.subscribe("about", Threshold::SECTION, callback).unwrap();

        viewport.unsubscribe(handle);
        assert_eq!(viewport.intersect("about", true, 1.0), 0);
        assert!(seen.borrow().is_empty());

        // second unsubscribe is a no-op
        viewport.unsubscribe(handle);
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn respects_per_subscription_threshold() {
        let viewport = ManualViewport::new();
        let (seen, callback) = recorder();
        viewport
            .subscribe("hero", Threshold::new(0.5).unwrap(), callback)
            .unwrap();

        viewport.intersect("hero", true, 0.3);
        viewport.intersect("hero", true, 0.5);
        assert_eq!(*seen.borrow(), vec![Visibility::Hidden, Visibility::Visible]);
    }
}
