use std::time::Duration;

use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, Icon};
use crate::content::HERO;
use crate::icons::Glyph;
use crate::viewport::scroll_to_section;
use crate::visibility::{Motion, Reveal, RevealMode, Visibility};

const CONTENT_REVEAL: Reveal = Reveal::new(Motion::UpSmall).delay(300);
const SCROLL_REVEAL: Reveal = Reveal::new(Motion::Fade).delay(700);

/// How long after mount the banner starts its load animation. The hidden
/// state has to be painted once or the transition has nothing to start from.
pub const HERO_LOAD_DELAY: Duration = Duration::from_millis(50);

/// Full-height banner. Animates once on mount instead of on scroll.
#[component]
pub fn Hero() -> impl IntoView {
    let (loaded, set_loaded) = signal(RevealMode::current().initial());

    // Effects run right after mount, before the first paint; the flip waits a timer tick
    Effect::new(move |_| {
        set_timeout(move || set_loaded.set(Visibility::Visible), HERO_LOAD_DELAY);
    });

    let backdrop_style = format!("background-image: url('{}')", HERO.background);

    view! {
        <section class="hero">
            <div class="hero-scrim"></div>
            <div
                class=move || format!("hero-backdrop {}", loaded.get().state_class())
                style=backdrop_style
            ></div>

            <div class="container-section hero-inner">
                <div class="hero-copy">
                    <div class=move || CONTENT_REVEAL.classes(loaded.get())>
                        <h1 class="hero-title">{HERO.headline}</h1>
                        <p class="hero-tagline">{HERO.tagline}</p>
                        <div class="hero-actions">
                            <Button variant=ButtonVariant::Danger size=ButtonSize::Large>
                                {HERO.book_label}
                            </Button>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Large>
                                {HERO.rooms_label}
                            </Button>
                        </div>
                    </div>
                </div>

                <button
                    type="button"
                    class=move || format!("hero-scroll {}", SCROLL_REVEAL.classes(loaded.get()))
                    on:click=move |_| scroll_to_section("features")
                >
                    <span class="hero-scroll-label">{HERO.scroll_label}</span>
                    <Icon glyph=Glyph::ChevronDown class="bounce" />
                </button>
            </div>
        </section>
    }
}
