//! Viewport observation: subscribe an element, get told when it scrolls in or out.
//!
//! [`ViewportObserver`] is the seam between components and whatever the platform
//! offers for intersection detection:
//!
//! - [`IntersectionViewport`] - the browser's `IntersectionObserver`
//! - [`ManualViewport`] - samples pushed by hand (tests, non-browser hosts)
//!
//! Components never call the trait directly; they go through [`use_visibility`],
//! which ties a [`Subscription`] to the component's lifetime. The observer it
//! uses comes from [`provide_viewport`], falling back to an
//! [`IntersectionViewport`].

mod hook;
mod intersection;
mod manual;

pub use hook::{provide_viewport, use_visibility};
pub use intersection::IntersectionViewport;
pub use manual::ManualViewport;

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::visibility::{Threshold, Visibility};

/// Invoked with the derived flag every time the platform reports a sample.
pub type VisibilityCallback = Box<dyn FnMut(Visibility)>;

/// Any observer of DOM elements, as components hold it.
pub type SharedViewport = Rc<dyn ViewportObserver<Element = web_sys::Element>>;

/// Why a section could not be observed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// Ratio outside `0.0..=1.0` (or NaN)
    #[error("threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
    /// The platform refused to build an observer
    #[error("viewport observation unavailable: {0}")]
    Unsupported(String),
}

/// Opaque id of one subscription, unique per observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverHandle(u64);

impl ObserverHandle {
    fn next(counter: &Cell<u64>) -> Self {
        let id = counter.get();
        counter.set(id + 1);
        ObserverHandle(id)
    }
}

/// Reports when elements cross a visibility threshold.
pub trait ViewportObserver {
    /// What can be observed (a DOM element, a name...)
    type Element: ?Sized;

    /// Start observing `element`; `callback` runs on every sample.
    fn subscribe(
        &self,
        element: &Self::Element,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<ObserverHandle, ViewportError>;

    /// Stop observing. Unknown or already released handles are ignored.
    fn unsubscribe(&self, handle: ObserverHandle);
}

/// Scoped subscription: unsubscribes exactly once, on [`release`](Self::release) or drop.
pub struct Subscription<O: ViewportObserver + ?Sized> {
    observer: Rc<O>,
    handle: Option<ObserverHandle>,
}

impl<O: ViewportObserver + ?Sized> Subscription<O> {
    /// Subscribe `element` on `observer`.
    pub fn new(
        observer: Rc<O>,
        element: &O::Element,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<Self, ViewportError> {
        let handle = observer.subscribe(element, threshold, callback)?;
        Ok(Subscription {
            observer,
            handle: Some(handle),
        })
    }

    /// `None` once released.
    pub fn handle(&self) -> Option<ObserverHandle> {
        self.handle
    }

    /// Unsubscribe now. Later calls and the eventual drop do nothing.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.observer.unsubscribe(handle);
        }
    }
}

impl<O: ViewportObserver + ?Sized> Drop for Subscription<O> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Observes DOM elements through a name-keyed observer, using each element's `id`.
///
/// Lets a [`ManualViewport`] stand in for the browser under mounted components:
///
/// ```rust
/// use std::rc::Rc;
/// use xtsy_site::viewport::{ElementIds, ManualViewport, SharedViewport};
///
/// let manual = Rc::new(ManualViewport::new());
/// let shared: SharedViewport = Rc::new(ElementIds(manual.clone()));
/// ```
pub struct ElementIds<O: ?Sized>(pub Rc<O>);

impl<O> ViewportObserver for ElementIds<O>
where
    O: ViewportObserver<Element = str> + ?Sized,
{
    type Element = web_sys::Element;

    fn subscribe(
        &self,
        element: &web_sys::Element,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> Result<ObserverHandle, ViewportError> {
        self.0.subscribe(&element.id(), threshold, callback)
    }

    fn unsubscribe(&self, handle: ObserverHandle) {
        self.0.unsubscribe(handle);
    }
}

/// Smooth-scroll the element with `id` into view. No-op when it isn't in the document.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        tracing::debug!(id, "scroll target missing");
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
