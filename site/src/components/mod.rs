//! Leptos UI components for the hostel page.
//!
//! Every section is a `#[component]` function that works both mounted in the
//! browser and rendered to a string for the static export.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static export only)
//! └── App
//!     ├── Hero
//!     ├── Features
//!     │   ├── FeatureCard (x4)
//!     │   └── FeatureDetail
//!     └── About
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use xtsy_site::components::App;
//!
//! leptos::mount::mount_to_body(|| view! { <App /> });
//! ```

mod about;
mod button;
mod document;
mod features;
mod hero;
mod icon;

pub use about::About;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use document::{App, SiteDocument};
pub use features::{FeatureDetail, Features};
pub use hero::{HERO_LOAD_DELAY, Hero};
pub use icon::Icon;
