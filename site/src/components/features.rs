use leptos::html::Section;
use leptos::prelude::*;

use super::{Button, Icon};
use crate::content::{FEATURES_INTRO, FeatureId, FeatureRecord};
use crate::selection::FeatureSelection;
use crate::viewport::use_visibility;
use crate::visibility::{Motion, Reveal, Threshold, Visibility};

const HEADER_REVEAL: Reveal = Reveal::new(Motion::Up).delay(100);
const DETAIL_REVEAL: Reveal = Reveal::new(Motion::Up);

/// Selector cards slide in one after another, in display order.
const CARD_REVEALS: [Reveal; 4] = [
    Reveal::new(Motion::FromLeft).delay(150),
    Reveal::new(Motion::FromLeft).delay(250),
    Reveal::new(Motion::FromLeft).delay(350),
    Reveal::new(Motion::FromLeft).delay(450),
];

/// Feature showcase: four selector cards on the left, detail of the selected one on the right.
#[component]
pub fn Features() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_visibility(section_ref, Threshold::SECTION);
    let (selection, set_selection) = signal(FeatureSelection::default());

    view! {
        <section id="features" class="features" node_ref=section_ref>
            <div class="container-section">
                <div class=move || format!("features-header {}", HEADER_REVEAL.classes(visible.get()))>
                    <div class="chip">{FEATURES_INTRO.chip}</div>
                    <h2 class="section-heading">{FEATURES_INTRO.heading}</h2>
                    <p class="section-subheading">{FEATURES_INTRO.subheading}</p>
                </div>

                <div class="features-grid">
                    <div class="feature-selector" role="tablist">
                        {FeatureId::ALL
                            .into_iter()
                            .map(|feature| {
                                view! {
                                    <FeatureCard
                                        feature=feature
                                        selection=selection
                                        set_selection=set_selection
                                        visible=visible
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="feature-detail-column">
                        <div class=move || format!("feature-detail {}", DETAIL_REVEAL.classes(visible.get()))>
                            {move || view! { <FeatureDetail record=selection.get().record() /> }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Keys that pick a focused card, same as a click.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
fn FeatureCard(
    feature: FeatureId,
    selection: ReadSignal<FeatureSelection>,
    set_selection: WriteSignal<FeatureSelection>,
    visible: ReadSignal<Visibility>,
) -> impl IntoView {
    let record = feature.record();
    let reveal = CARD_REVEALS[feature.index()];
    let is_selected = move || selection.get().is_selected(feature);

    view! {
        <div
            class=move || {
                let state = if is_selected() { "is-selected" } else { "is-idle" };
                format!("feature-card {} {}", state, reveal.classes(visible.get()))
            }
            role="tab"
            tabindex="0"
            data-feature=feature.slug()
            aria-selected=move || is_selected().to_string()
            on:click=move |_| set_selection.maybe_update(|current| current.select(feature))
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    // Space would scroll the page otherwise
                    ev.prevent_default();
                    set_selection.maybe_update(|current| current.select(feature));
                }
            }
        >
            <div class="feature-card-body">
                <div class="feature-card-icon">
                    <Icon glyph=record.icon class="icon-primary" />
                </div>
                <div>
                    <h3 class="feature-card-title">{record.title}</h3>
                    <p class="feature-card-description">{record.description}</p>
                </div>
            </div>
        </div>
    }
}

/// Image, title and details of one feature record.
#[component]
pub fn FeatureDetail(
    /// Record to show
    record: &'static FeatureRecord,
) -> impl IntoView {
    view! {
        <div class="feature-detail-media">
            <img src=record.image alt=record.title class="feature-detail-image" />
            <div class="feature-detail-overlay">
                <h3 class="feature-detail-title">{record.title}</h3>
            </div>
        </div>
        <div class="feature-detail-body" data-feature=record.id.slug()>
            <p class="feature-detail-text">{record.details}</p>
            <Button>{FEATURES_INTRO.book_label}</Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_features() -> String {
        Owner::new().with(|| view! { <Features /> }.to_html())
    }

    #[test]
    fn first_feature_shown_by_default() {
        let html = render_features();

        assert!(html.contains(r#"<h3 class="feature-detail-title">Solo Travel</h3>"#));
        assert!(html.contains(FeatureId::SoloTravel.record().details));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert!(html.contains("feature-card is-selected"));
    }

    #[test]
    fn lists_all_four_cards() {
        let html = render_features();
        for id in FeatureId::ALL {
            let record = id.record();
            assert!(html.contains(&format!(r#"data-feature="{}""#, id.slug())));
            assert!(html.contains(record.title));
            assert!(html.contains(record.description));
        }
        assert_eq!(html.matches(r#"role="tab""#).count(), 4);
    }

    #[test]
    fn detail_matches_each_record() {
        for id in FeatureId::ALL {
            let record = id.record();
            let html = Owner::new().with(|| view! { <FeatureDetail record=record /> }.to_html());

            assert!(html.contains(&format!(
                r#"<h3 class="feature-detail-title">{}</h3>"#,
                record.title
            )));
            assert!(html.contains(record.details));
            assert!(html.contains(&format!(r#"data-feature="{}""#, id.slug())));
            // every other record is absent
            for other in FeatureId::ALL.into_iter().filter(|o| *o != id) {
                assert!(!html.contains(other.record().details));
            }
        }
    }

    #[test]
    fn enter_and_space_activate_cards() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("ArrowDown"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn cards_stagger_and_start_hidden() {
        let html = render_features();
        for ms in [150, 250, 350, 450] {
            assert!(html.contains(&format!("reveal reveal-left delay-{} is-hidden", ms)));
        }
        assert!(html.contains("features-header reveal reveal-up delay-100 is-hidden"));
    }
}
