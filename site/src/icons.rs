//! Outline glyphs used on the page (Lucide style, 24x24 stroke paths).
//!
//! Each glyph is a single SVG path string so the [`Icon`](crate::components::Icon)
//! component can render it without pulling in an icon font.

use serde::Serialize;

/// Glyphs referenced by content and components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Glyph {
    MapPin,
    Users,
    Calendar,
    Shield,
    Phone,
    Mail,
    Clock,
    ChevronDown,
}

impl Glyph {
    /// SVG path data (the `d` attribute value)
    pub const fn path(self) -> &'static str {
        match self {
            Glyph::MapPin => ICON_MAP_PIN,
            Glyph::Users => ICON_USERS,
            Glyph::Calendar => ICON_CALENDAR,
            Glyph::Shield => ICON_SHIELD,
            Glyph::Phone => ICON_PHONE,
            Glyph::Mail => ICON_MAIL,
            Glyph::Clock => ICON_CLOCK,
            Glyph::ChevronDown => ICON_CHEVRON_DOWN,
        }
    }
}

// =============================================================================
// Lucide (outline) - https://lucide.dev/
// =============================================================================

/// Location pin
pub const ICON_MAP_PIN: &str = "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0";

/// Two people
pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

/// Calendar page
pub const ICON_CALENDAR: &str = "M8 2v4M16 2v4M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM3 10h18";

/// Shield outline
pub const ICON_SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";

/// Telephone handset
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";

/// Clock face
pub const ICON_CLOCK: &str = "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0M12 6v6l4 2";

/// Caret/chevron down
pub const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";
