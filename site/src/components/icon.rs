//! Inline SVG icon component.

use crate::icons::Glyph;
use leptos::prelude::*;

/// Renders a [`Glyph`] as an inline stroked SVG.
///
/// # Props
///
/// * `glyph` - Which glyph to draw
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::MapPin class="icon-primary" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("icon {}", class)
        >
            <path d=glyph.path()></path>
        </svg>
    }
}
