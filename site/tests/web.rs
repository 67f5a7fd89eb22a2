//! Browser tests for the mounted sections.
//!
//! Run with: `wasm-pack test --headless --firefox site --no-default-features --features csr`

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use xtsy_site::components::{About, Features, HERO_LOAD_DELAY, Hero};
use xtsy_site::content::FeatureId;
use xtsy_site::viewport::{ElementIds, ManualViewport, provide_viewport, use_visibility};
use xtsy_site::visibility::{Threshold, Visibility};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point appended to `<body>`.
fn mount_point() -> HtmlElement {
    let parent = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&parent).unwrap();
    parent.unchecked_into()
}

fn query(selector: &str) -> web_sys::Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn text_of(selector: &str) -> String {
    query(selector).text_content().unwrap_or_default()
}

fn class_of(selector: &str) -> String {
    query(selector).get_attribute("class").unwrap_or_default()
}

fn card(id: FeatureId) -> HtmlElement {
    query(&format!(r#".feature-card[data-feature="{}"]"#, id.slug())).unchecked_into()
}

fn selected_cards() -> u32 {
    document()
        .query_selector_all(r#".feature-card[aria-selected="true"]"#)
        .unwrap()
        .length()
}

fn press(target: &HtmlElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn selecting_group_booking() {
    let _handle = leptos::mount::mount_to(mount_point(), || view! { <Features /> });

    assert_eq!(text_of(".feature-detail-title"), "Solo Travel");
    assert_eq!(selected_cards(), 1);

    card(FeatureId::GroupBooking).click();
    leptos::task::tick().await;

    let record = FeatureId::GroupBooking.record();
    assert_eq!(text_of(".feature-detail-title"), record.title);
    assert_eq!(text_of(".feature-detail-text"), record.details);
    assert_eq!(selected_cards(), 1);

    // re-selecting leaves everything as it was
    card(FeatureId::GroupBooking).click();
    leptos::task::tick().await;
    assert_eq!(text_of(".feature-detail-title"), record.title);
    assert_eq!(selected_cards(), 1);
}

#[wasm_bindgen_test]
async fn keyboard_selects_focused_card() {
    let _handle = leptos::mount::mount_to(mount_point(), || view! { <Features /> });

    press(&card(FeatureId::WeekendGetaway), "Enter");
    leptos::task::tick().await;
    assert_eq!(text_of(".feature-detail-title"), "Weekend Getaway");

    press(&card(FeatureId::SafePlace), " ");
    leptos::task::tick().await;
    assert_eq!(text_of(".feature-detail-title"), FeatureId::SafePlace.record().title);

    // other keys leave the selection alone
    press(&card(FeatureId::SoloTravel), "Tab");
    leptos::task::tick().await;
    assert_eq!(text_of(".feature-detail-title"), FeatureId::SafePlace.record().title);
    assert_eq!(selected_cards(), 1);
}

#[wasm_bindgen_test]
async fn about_follows_the_viewport_and_detaches_on_unmount() {
    let viewport = Rc::new(ManualViewport::new());
    let shared = viewport.clone();
    let handle = leptos::mount::mount_to(mount_point(), move || {
        provide_viewport(Rc::new(ElementIds(shared)));
        view! { <About /> }
    });
    leptos::task::tick().await;

    let text_block = "#about .reveal-left";
    assert!(class_of(text_block).ends_with("is-hidden"));
    assert_eq!(viewport.subscriber_count(), 1);

    viewport.intersect("about", true, 0.1);
    leptos::task::tick().await;
    assert!(class_of(text_block).ends_with("is-hidden"));

    viewport.intersect("about", true, 0.35);
    leptos::task::tick().await;
    assert!(class_of(text_block).ends_with("is-visible"));
    assert!(class_of("#about .reveal-right").ends_with("is-visible"));

    viewport.intersect("about", true, 0.15);
    leptos::task::tick().await;
    assert!(class_of(text_block).ends_with("is-hidden"));

    drop(handle);
    assert_eq!(viewport.subscriber_count(), 0);
    assert!(document().get_element_by_id("about").is_none());
    // samples after unmount reach nobody
    assert_eq!(viewport.intersect("about", true, 1.0), 0);
}

#[wasm_bindgen_test]
async fn section_that_never_mounts_is_left_alone() {
    let viewport = Rc::new(ManualViewport::new());
    let owner = Owner::new();
    let visible = owner.with(|| {
        provide_viewport(Rc::new(ElementIds(viewport.clone())));
        use_visibility(NodeRef::<leptos::html::Section>::new(), Threshold::SECTION)
    });
    leptos::task::tick().await;

    assert_eq!(visible.get_untracked(), Visibility::Hidden);
    assert_eq!(viewport.subscriber_count(), 0);
    drop(owner);
}

#[wasm_bindgen_test]
async fn browser_observer_mounts_and_unmounts() {
    let handle = leptos::mount::mount_to(mount_point(), || view! { <About /> });
    leptos::task::tick().await;
    assert!(class_of("#about .reveal-left").contains("reveal"));

    // element removed and observer disconnected together
    drop(handle);
    leptos::task::tick().await;
    assert!(document().get_element_by_id("about").is_none());
}

#[wasm_bindgen_test]
async fn hero_is_painted_hidden_before_loading() {
    let _handle = leptos::mount::mount_to(mount_point(), || view! { <Hero /> });
    leptos::task::tick().await;
    assert!(class_of(".hero-backdrop").ends_with("is-hidden"));

    sleep(HERO_LOAD_DELAY.as_millis() as i32 + 50).await;
    assert!(class_of(".hero-backdrop").ends_with("is-visible"));
}
