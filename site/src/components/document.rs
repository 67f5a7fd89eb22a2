//! Page root and the complete HTML document around it

use super::{About, Features, Hero};
use crate::styles::SITE_CSS;
use crate::visibility::RevealMode;
use leptos::prelude::*;

/// The page body: hero, feature showcase, about.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="site">
            <Hero />
            <Features />
            <About />
        </main>
    }
}

/// The complete HTML document for a static export
#[component]
pub fn SiteDocument(
    /// `<title>` text
    title: String,
    /// `<meta name="description">` content
    description: String,
    /// Provided as context to every section
    #[prop(default = RevealMode::Static)]
    reveal_mode: RevealMode,
) -> impl IntoView {
    provide_context(reveal_mode);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
