//! Scroll-reveal state: the two-state visibility flag and the class sets it selects.

use leptos::prelude::*;

use crate::viewport::ViewportError;

/// Whether a section currently counts as "in view".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Out of view, or under the threshold
    #[default]
    Hidden,
    /// At least the threshold is on screen
    Visible,
}

impl Visibility {
    /// Derive the flag from one intersection sample.
    ///
    /// Visible iff the element intersects the viewport and at least
    /// `threshold` of it is showing.
    pub fn from_intersection(is_intersecting: bool, ratio: f64, threshold: Threshold) -> Self {
        if is_intersecting && ratio >= threshold.ratio() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// `true` for [`Visibility::Visible`].
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// The state half of a reveal class string.
    pub const fn state_class(self) -> &'static str {
        match self {
            Visibility::Hidden => "is-hidden",
            Visibility::Visible => "is-visible",
        }
    }
}

/// Fraction of an element that must be on screen, in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// 20% of a section showing.
    pub const SECTION: Threshold = Threshold(0.2);

    /// Validated threshold; NaN and values outside `[0.0, 1.0]` are rejected.
    pub fn new(ratio: f64) -> Result<Self, ViewportError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Threshold(ratio))
        } else {
            Err(ViewportError::InvalidThreshold(ratio))
        }
    }

    /// The raw fraction.
    pub fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::SECTION
    }
}

/// How a block enters the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Rise 2rem
    Up,
    /// Rise 1rem
    UpSmall,
    /// Slide in from the left
    FromLeft,
    /// Slide in from the right
    FromRight,
    /// Opacity only
    Fade,
}

impl Motion {
    const fn class(self) -> &'static str {
        match self {
            Motion::Up => "reveal-up",
            Motion::UpSmall => "reveal-up-sm",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Fade => "reveal-fade",
        }
    }
}

/// Transition delays that have a matching `delay-*` rule in the stylesheet.
pub const DELAYS_MS: [u16; 7] = [100, 150, 250, 300, 350, 450, 700];

/// A motion plus an optional stagger delay.
///
/// ```rust
/// use xtsy_site::visibility::{Motion, Reveal, Visibility};
///
/// let reveal = Reveal::new(Motion::FromLeft).delay(100);
/// assert_eq!(reveal.classes(Visibility::Hidden), "reveal reveal-left delay-100 is-hidden");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    motion: Motion,
    delay_ms: Option<u16>,
}

impl Reveal {
    pub const fn new(motion: Motion) -> Self {
        Reveal {
            motion,
            delay_ms: None,
        }
    }

    /// Delays not listed in [`DELAYS_MS`] have no stylesheet rule and animate immediately.
    pub const fn delay(self, ms: u16) -> Self {
        Reveal {
            delay_ms: Some(ms),
            ..self
        }
    }

    /// Full class string for the given flag.
    pub fn classes(self, visibility: Visibility) -> String {
        match self.delay_ms {
            Some(ms) => format!(
                "reveal {} delay-{} {}",
                self.motion.class(),
                ms,
                visibility.state_class()
            ),
            None => format!("reveal {} {}", self.motion.class(), visibility.state_class()),
        }
    }
}

/// Whether sections animate in or render already revealed.
///
/// Provided as context by [`SiteDocument`](crate::components::SiteDocument);
/// the client build leaves it unset and gets [`RevealMode::Animated`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Start hidden, reveal on scroll (the browser build)
    #[default]
    Animated,
    /// Every flag starts visible and no observer is attached (JS-free export)
    Static,
}

impl RevealMode {
    /// Mode from context, falling back to the default.
    pub fn current() -> Self {
        use_context::<RevealMode>().unwrap_or_default()
    }

    /// Value a visibility flag starts from.
    pub const fn initial(self) -> Visibility {
        match self {
            RevealMode::Animated => Visibility::Hidden,
            RevealMode::Static => Visibility::Visible,
        }
    }
}
