//! CSS for the hostel page.
//!
//! One stylesheet shared by the client bundle (mounted as a `<style>` element)
//! and the static export (inlined into `<head>`).
//!
//! # Customization
//!
//! ```rust
//! use xtsy_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```
//!
//! # Features
//!
//! - Warm light palette, sans-serif typography
//! - Reveal transitions keyed by `is-hidden` / `is-visible`
//! - Stagger delays (`delay-*`) for every value in [`DELAYS_MS`](crate::visibility::DELAYS_MS)
//! - Honors `prefers-reduced-motion`

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #1c1917;
    --secondary: #f5f5f4;
    --muted-foreground: #57534e;
    --primary: #15803d;
    --primary-soft: rgba(21, 128, 61, 0.1);
    --primary-hover: rgba(21, 128, 61, 0.5);
    --accent: #ecfdf5;
    --accent-foreground: #166534;
    --danger: #dc2626;
    --danger-hover: #b91c1c;
    --border: #e7e5e4;
    --radius: 0.5rem;
    --container-max: 1200px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--foreground);
    background: var(--background);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

img {
    display: block;
    max-width: 100%;
}

.container-section {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.chip {
    display: inline-block;
    margin-bottom: 1rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    background: var(--accent);
    color: var(--accent-foreground);
}

.section-heading {
    margin: 0 0 1rem;
    font-size: clamp(1.875rem, 3vw, 2.5rem);
    font-weight: 500;
    line-height: 1.2;
    letter-spacing: -0.01em;
}

.section-subheading {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: var(--muted-foreground);
}

.icon {
    flex-shrink: 0;
}

.icon-primary {
    color: var(--primary);
}

/* ---------------------------------------------------------------------------
   Buttons
   ------------------------------------------------------------------------ */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: 1px solid transparent;
    border-radius: var(--radius);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.2s, border-color 0.2s, color 0.2s;
}

.btn-md {
    height: 2.5rem;
    padding: 0 1rem;
    font-size: 0.875rem;
}

.btn-lg {
    height: 2.75rem;
    padding: 0 2rem;
    font-size: 1rem;
}

.btn-primary {
    background: var(--primary);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--accent-foreground);
}

.btn-danger {
    background: var(--danger);
    color: #ffffff;
}

.btn-danger:hover {
    background: var(--danger-hover);
}

.btn-outline {
    background: transparent;
    border-color: #ffffff;
    color: #ffffff;
}

.btn-outline:hover {
    background: rgba(255, 255, 255, 0.2);
}

/* ---------------------------------------------------------------------------
   Reveal transitions
   ------------------------------------------------------------------------ */

.reveal {
    transition-property: opacity, transform;
    transition-duration: 700ms;
    transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

.reveal.is-hidden {
    opacity: 0;
}

.reveal-up.is-hidden { transform: translateY(2rem); }
.reveal-up-sm.is-hidden { transform: translateY(1rem); }
.reveal-left.is-hidden { transform: translateX(-3rem); }
.reveal-right.is-hidden { transform: translateX(3rem); }
.reveal-fade.is-hidden { transform: none; }

.delay-100 { transition-delay: 100ms; }
.delay-150 { transition-delay: 150ms; }
.delay-250 { transition-delay: 250ms; }
.delay-300 { transition-delay: 300ms; }
.delay-350 { transition-delay: 350ms; }
.delay-450 { transition-delay: 450ms; }
.delay-700 { transition-delay: 700ms; }

/* ---------------------------------------------------------------------------
   Hero
   ------------------------------------------------------------------------ */

.hero {
    position: relative;
    width: 100%;
    height: 100vh;
    overflow: hidden;
}

.hero-scrim {
    position: absolute;
    inset: 0;
    z-index: 10;
    background: rgba(0, 0, 0, 0.4);
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    transition: transform 1000ms, filter 1000ms;
}

.hero-backdrop.is-hidden {
    transform: scale(1.1);
    filter: blur(4px);
}

.hero-backdrop.is-visible {
    transform: scale(1);
    filter: blur(0);
}

.hero-inner {
    position: relative;
    z-index: 20;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: flex-start;
    height: 100%;
    padding-top: 4rem;
}

.hero-copy {
    max-width: 42rem;
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 500;
    line-height: 1.1;
    letter-spacing: -0.025em;
    color: #000000;
    text-shadow: 0 2px 4px rgba(255, 255, 255, 0.8);
}

.hero-tagline {
    margin: 0 0 2rem;
    font-size: clamp(1.25rem, 2.2vw, 1.5rem);
    color: #000000;
    text-shadow: 0 1px 3px rgba(255, 255, 255, 0.9);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.hero-scroll {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    translate: -50% 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    border: 0;
    background: none;
    color: #000000;
    font: inherit;
    cursor: pointer;
}

.hero-scroll-label {
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    text-shadow: 0 1px 2px rgba(255, 255, 255, 0.8);
}

.bounce {
    animation: bounce 1s infinite;
}

@keyframes bounce {
    0%, 100% {
        transform: translateY(-25%);
        animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
    }
    50% {
        transform: none;
        animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
    }
}

/* ---------------------------------------------------------------------------
   Features
   ------------------------------------------------------------------------ */

.features {
    padding: 5rem 0;
    overflow: hidden;
}

.features-header {
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin-top: 3rem;
}

.feature-selector {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.feature-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    cursor: pointer;
    transition-property: opacity, transform, border-color, background-color, box-shadow;
    transition-duration: 300ms;
}

.feature-card.is-selected {
    border-color: var(--primary);
    background: var(--accent);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.feature-card.is-idle:hover {
    border-color: var(--primary-hover);
    background: var(--secondary);
}

.feature-card-body {
    display: flex;
    align-items: flex-start;
}

.feature-card-icon {
    margin-right: 1rem;
    padding: 0.5rem;
    border-radius: 9999px;
    background: var(--primary-soft);
}

.feature-card-title {
    margin: 0 0 0.5rem;
    font-size: 1.125rem;
    font-weight: 500;
}

.feature-card-description {
    margin: 0;
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.feature-detail {
    height: 100%;
    overflow: hidden;
    border-radius: var(--radius);
}

.feature-detail-media {
    position: relative;
    height: 18rem;
    overflow: hidden;
}

.feature-detail-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 700ms;
}

.feature-detail-image:hover {
    transform: scale(1.05);
}

.feature-detail-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: flex-end;
    padding: 1.5rem;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
}

.feature-detail-title {
    margin: 0 0 0.5rem;
    font-size: 1.5rem;
    font-weight: 500;
    color: #ffffff;
}

.feature-detail-body {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-top: 0;
    border-radius: 0 0 var(--radius) var(--radius);
    background: var(--background);
}

.feature-detail-text {
    margin: 0 0 1.5rem;
    color: var(--muted-foreground);
}

/* ---------------------------------------------------------------------------
   About
   ------------------------------------------------------------------------ */

.about {
    padding: 5rem 0;
    overflow: hidden;
    background: var(--secondary);
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}

.about-paragraph {
    margin: 0 0 1.5rem;
    color: var(--muted-foreground);
}

.contact-list {
    margin: 1.5rem 0 2rem;
    padding: 0;
    list-style: none;
}

.contact-line {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    margin-bottom: 1rem;
    font-size: 0.875rem;
}

.about-figure {
    position: relative;
}

.about-accent {
    position: absolute;
    border-radius: var(--radius);
    background: var(--primary-soft);
}

.about-accent-top {
    top: -1rem;
    left: -1rem;
    width: 6rem;
    height: 6rem;
}

.about-accent-bottom {
    right: -1rem;
    bottom: -1rem;
    width: 8rem;
    height: 8rem;
}

.about-frame {
    position: relative;
    z-index: 10;
    overflow: hidden;
    border-radius: var(--radius);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.about-image {
    width: 100%;
    height: 500px;
    object-fit: cover;
}

/* ---------------------------------------------------------------------------
   Responsive
   ------------------------------------------------------------------------ */

@media (min-width: 768px) {
    .features-grid {
        grid-template-columns: 2fr 3fr;
    }

    .about-grid {
        grid-template-columns: 1fr 1fr;
    }
}

@media (prefers-reduced-motion: reduce) {
    .reveal,
    .hero-backdrop,
    .feature-card {
        transition: none;
    }

    .reveal.is-hidden {
        opacity: 1;
        transform: none;
    }

    .bounce {
        animation: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::DELAYS_MS;

    #[test]
    fn every_delay_has_a_rule() {
        for ms in DELAYS_MS {
            assert!(
                SITE_CSS.contains(&format!(".delay-{} {{ transition-delay: {}ms; }}", ms, ms)),
                "missing rule for delay-{}",
                ms
            );
        }
    }

    #[test]
    fn both_reveal_states_styled() {
        assert!(SITE_CSS.contains(".reveal.is-visible"));
        assert!(SITE_CSS.contains(".reveal.is-hidden"));
    }
}
