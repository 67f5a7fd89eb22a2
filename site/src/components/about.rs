use leptos::html::Section;
use leptos::prelude::*;

use super::{Button, Icon};
use crate::content::{ABOUT, CONTACT, HOSTEL_NAME};
use crate::viewport::use_visibility;
use crate::visibility::{Motion, Reveal, Threshold};

const TEXT_REVEAL: Reveal = Reveal::new(Motion::FromLeft).delay(100);
const IMAGE_REVEAL: Reveal = Reveal::new(Motion::FromRight).delay(300);

/// Who we are, where we are, how to reach us.
#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_visibility(section_ref, Threshold::SECTION);

    view! {
        <section id="about" class="about" node_ref=section_ref>
            <div class="container-section">
                <div class="about-grid">
                    <div class=move || TEXT_REVEAL.classes(visible.get())>
                        <div class="chip">{ABOUT.chip}</div>
                        <h2 class="section-heading">{HOSTEL_NAME}</h2>
                        {ABOUT
                            .paragraphs
                            .iter()
                            .map(|text| view! { <p class="about-paragraph">{*text}</p> })
                            .collect_view()}

                        <ul class="contact-list">
                            {CONTACT
                                .iter()
                                .map(|line| {
                                    view! {
                                        <li class="contact-line">
                                            <Icon glyph=line.icon size="20" class="icon-primary" />
                                            <span>{line.text}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <Button>{ABOUT.contact_label}</Button>
                    </div>

                    <div class=move || IMAGE_REVEAL.classes(visible.get())>
                        <div class="about-figure">
                            <div class="about-accent about-accent-top"></div>
                            <div class="about-accent about-accent-bottom"></div>
                            <div class="about-frame">
                                <img src=ABOUT.image alt=ABOUT.image_alt class="about-image" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
