//! # xtsy-site
//!
//! The XTSY Travellers Hostel website as Leptos components.
//!
//! The same component tree is used two ways:
//!
//! - **In the browser** (feature `csr`): the `landing` crate mounts
//!   [`components::App`] into `<body>`. Sections fade in as they scroll into
//!   view and the feature showcase reacts to clicks.
//! - **As a static page** (feature `ssr`, the default): [`render_page`]
//!   renders a complete HTML document with every section already revealed.
//!
//! ## Quick Start
//!
//! ```rust
//! use xtsy_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Live the Shillong Vibe"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - feature records and page copy
//! - [`selection`] - which feature the showcase displays
//! - [`visibility`] - the in-view flag and the class sets it selects
//! - [`viewport`] - viewport observation behind a trait
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! XTSY Travellers Hostel, Shillong (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod icons;
pub mod selection;
pub mod styles;
pub mod viewport;
pub mod visibility;

use components::SiteDocument;
use content::{FEATURES, HOSTEL_NAME};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use visibility::RevealMode;

/// `<meta name="description">` used when [`PageOptions`] doesn't override it.
pub const DEFAULT_DESCRIPTION: &str = "XTSY Travellers Hostel: a tranquil stay 9km from Shillong's center, Meghalaya. Solo travel, group bookings, weekend getaways.";

/// What goes into the exported document.
#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// [`RevealMode::Static`] by default, so the page reads without JS
    pub reveal_mode: RevealMode,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            title: HOSTEL_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            reveal_mode: RevealMode::Static,
        }
    }
}

/// Render the complete page, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use xtsy_site::{render_page, PageOptions};
///
/// let html = render_page(&PageOptions {
///     title: "XTSY | Shillong".into(),
///     ..Default::default()
/// });
/// assert!(html.contains("<title>XTSY | Shillong</title>"));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <SiteDocument
                title=options.title.clone()
                description=options.description.clone()
                reveal_mode=options.reveal_mode
            />
        }
        .to_html()
    });

    tracing::debug!(bytes = html.len(), mode = ?options.reveal_mode, "page rendered");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// The four feature records as pretty-printed JSON.
pub fn render_content_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FEATURES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{ABOUT, CONTACT, FeatureId, HERO};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_document() {
        let html = render_page(&PageOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>XTSY Travellers Hostel</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains(r#"id="features""#));
        assert!(html.contains(r#"id="about""#));
    }

    #[test]
    fn sections_in_page_order() {
        let html = render_page(&PageOptions::default());
        let hero = html.find(HERO.headline).unwrap();
        let features = html.find(r#"id="features""#).unwrap();
        let about = html.find(r#"id="about""#).unwrap();
        assert!(hero < features && features < about);
    }

    #[test]
    fn static_export_is_fully_revealed() {
        let html = render_page(&PageOptions::default());
        // state classes always close the class attribute
        assert!(!html.contains(r#"is-hidden""#));
        assert!(html.contains(r#"is-visible""#));
    }

    #[test]
    fn animated_export_starts_hidden() {
        let html = render_page(&PageOptions {
            reveal_mode: RevealMode::Animated,
            ..Default::default()
        });
        assert!(html.contains(r#"hero-backdrop is-hidden""#));
        assert!(!html.contains(r#"is-visible""#));
    }

    #[test]
    fn includes_about_and_contact_copy() {
        let html = render_page(&PageOptions::default());
        assert!(html.contains(ABOUT.chip));
        assert!(html.contains(ABOUT.contact_label));
        for line in &CONTACT {
            assert!(html.contains(line.text), "missing contact line {}", line.text);
        }
    }

    #[test]
    fn hero_call_to_action_labels() {
        let html = render_page(&PageOptions::default());
        assert!(html.contains(HERO.book_label));
        assert!(html.contains(HERO.rooms_label));
        assert!(html.contains(HERO.scroll_label));
    }

    #[test]
    fn custom_title_and_description() {
        let html = render_page(&PageOptions {
            title: "Stay in Shillong".into(),
            description: "Hostel near Shillong".into(),
            ..Default::default()
        });
        assert!(html.contains("<title>Stay in Shillong</title>"));
        assert!(html.contains(r#"content="Hostel near Shillong""#));
    }

    #[test]
    fn content_json_lists_records_in_order() {
        let json = render_content_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let ids: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|record| record["id"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<_> = FeatureId::ALL.iter().map(|id| id.slug().to_string()).collect();
        assert_eq!(ids, expected);
    }
}
