use leptos::prelude::*;

/// Colour scheme of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Brand colour
    #[default]
    Primary,
    /// Transparent with a light border, for dark backdrops
    Outline,
    /// Red call to action
    Danger,
}

/// Padding and font size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Inline sections
    #[default]
    Default,
    /// Hero calls to action
    Large,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Call-to-action button. Renders without a click handler.
#[component]
pub fn Button(
    /// Colour scheme
    #[prop(optional)]
    variant: ButtonVariant,
    /// Padding and font size
    #[prop(optional)]
    size: ButtonSize,
    /// Label
    children: Children,
) -> impl IntoView {
    let class = format!("btn {} {}", variant.class(), size.class());
    view! {
        <button type="button" class=class>
            {children()}
        </button>
    }
}
