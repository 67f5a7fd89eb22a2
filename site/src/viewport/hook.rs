use std::rc::Rc;

use leptos::html::Section;
use leptos::prelude::*;

use super::{IntersectionViewport, SharedViewport, Subscription, ViewportObserver};
use crate::visibility::{RevealMode, Threshold, Visibility};

type SectionSubscription = Subscription<dyn ViewportObserver<Element = web_sys::Element>>;

/// Context slot for the observer sections subscribe to. The observer is `!Send`,
/// so it lives in local storage and only the handle travels through context.
#[derive(Clone, Copy)]
struct ViewportContext(StoredValue<SharedViewport, LocalStorage>);

/// Make every [`use_visibility`] below the current owner subscribe to `viewport`.
pub fn provide_viewport(viewport: SharedViewport) {
    provide_context(ViewportContext(StoredValue::new_local(viewport)));
}

fn use_viewport() -> SharedViewport {
    use_context::<ViewportContext>()
        .and_then(|ctx| ctx.0.try_get_value())
        .unwrap_or_else(|| Rc::new(IntersectionViewport::new()))
}

/// Visibility flag of a `<section>`, kept up to date while the component is mounted.
///
/// Starts from [`RevealMode::initial`]. In [`RevealMode::Static`] nothing is
/// observed. Otherwise the section is subscribed once its node exists and the
/// subscription is released when the component is torn down. A node that never
/// mounts leaves the flag untouched.
pub fn use_visibility(node_ref: NodeRef<Section>, threshold: Threshold) -> ReadSignal<Visibility> {
    let mode = RevealMode::current();
    let (visible, set_visible) = signal(mode.initial());
    if mode == RevealMode::Static {
        return visible;
    }

    let subscription = StoredValue::new_local(None::<SectionSubscription>);
    let viewport = use_viewport();

    Effect::new(move |_| {
        let Some(section) = node_ref.get() else {
            tracing::debug!("section not mounted, nothing to observe");
            return;
        };
        let element: &web_sys::Element = &section;
        let on_change = Box::new(move |next: Visibility| {
            if visible.get_untracked() != next {
                set_visible.set(next);
            }
        });
        match Subscription::new(viewport.clone(), element, threshold, on_change) {
            // replacing a previous subscription releases it
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(err) => tracing::warn!(%err, "section stays hidden"),
        }
    });

    on_cleanup(move || {
        if let Some(Some(mut sub)) = subscription.try_update_value(Option::take) {
            sub.release();
        }
    });

    visible
}
