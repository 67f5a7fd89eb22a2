//! Static copy and the four feature records shown on the page.
//!
//! Everything here is defined once at compile time and never mutated.
//! Components borrow `&'static` data straight out of these constants.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::icons::Glyph;

/// Identifier of one hostel offering in the feature showcase.
///
/// The set is closed: the page shows exactly these four, in [`FeatureId::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureId {
    /// Independent travellers
    SoloTravel,
    /// Large groups
    GroupBooking,
    /// Short city escapes
    WeekendGetaway,
    /// "Safe Place to Chill"
    SafePlace,
}

impl FeatureId {
    /// All identifiers in display order.
    pub const ALL: [FeatureId; 4] = [
        FeatureId::SoloTravel,
        FeatureId::GroupBooking,
        FeatureId::WeekendGetaway,
        FeatureId::SafePlace,
    ];

    /// Kebab-case identifier, also used as the `data-feature` attribute.
    pub const fn slug(self) -> &'static str {
        match self {
            FeatureId::SoloTravel => "solo-travel",
            FeatureId::GroupBooking => "group-booking",
            FeatureId::WeekendGetaway => "weekend-getaway",
            FeatureId::SafePlace => "safe-place",
        }
    }

    /// Position in [`FeatureId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            FeatureId::SoloTravel => 0,
            FeatureId::GroupBooking => 1,
            FeatureId::WeekendGetaway => 2,
            FeatureId::SafePlace => 3,
        }
    }

    /// The static record for this identifier.
    pub fn record(self) -> &'static FeatureRecord {
        &FEATURES[self.index()]
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a string is not one of the four feature slugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature `{0}` (expected one of: solo-travel, group-booking, weekend-getaway, safe-place)")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureId {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// One hostel offering as displayed in the showcase.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Which offering this describes
    pub id: FeatureId,
    /// Card and detail heading
    pub title: &'static str,
    /// Short blurb on the selector card
    pub description: &'static str,
    /// Longer text in the detail panel
    pub details: &'static str,
    /// Card icon
    pub icon: Glyph,
    /// Detail panel image URL
    pub image: &'static str,
}

/// The four records, indexed by [`FeatureId::index`].
pub static FEATURES: [FeatureRecord; 4] = [
    FeatureRecord {
        id: FeatureId::SoloTravel,
        title: "Solo Travel",
        description: "Perfect for independent adventurers looking to explore Meghalaya's natural beauty and vibrant culture.",
        details: "Join our guided hikes and treks across Meghalaya's stunning landscapes. After a day of exploration, unwind in Shillong's music scene and cozy cafes. Connect with like-minded travelers in our community spaces.",
        icon: Glyph::MapPin,
        image: "https://images.unsplash.com/photo-1509316975850-ff9c5deb0cd9?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=774&q=80",
    },
    FeatureRecord {
        id: FeatureId::GroupBooking,
        title: "Group Booking",
        description: "Spacious accommodations and facilities for large groups with tailored experiences.",
        details: "Accommodate up to 50 guests comfortably in our various room options. Enjoy meals together at our in-house cafe serving local and international cuisine. Customized itineraries and activities for your group to enjoy Meghalaya together.",
        icon: Glyph::Users,
        image: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=774&q=80",
    },
    FeatureRecord {
        id: FeatureId::WeekendGetaway,
        title: "Weekend Getaway",
        description: "Escape the city hustle with a refreshing weekend in Shillong's clean mountain air.",
        details: "Breathe in some of India's cleanest air while enjoying panoramic mountain views. Just a short flight from major cities, Shillong offers the perfect reset. Relax in our comfortable accommodations surrounded by nature.",
        icon: Glyph::Calendar,
        image: "https://images.unsplash.com/photo-1513836279014-a89f7a76ae86?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=774&q=80",
    },
    FeatureRecord {
        id: FeatureId::SafePlace,
        title: "Safe Place to Chill",
        description: "A secure environment with entertainment options and 24/7 security measures.",
        details: "Enjoy music nights, karaoke sessions, and board games in our common areas. Rest easy with 24/7 CCTV surveillance and dedicated security personnel. Unwind in a safe space that feels like home away from home.",
        icon: Glyph::Shield,
        image: "https://images.unsplash.com/photo-1518495973542-4542c06a5843?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=774&q=80",
    },
];

// =============================================================================
// Page copy
// =============================================================================

/// Default document title and the About heading.
pub const HOSTEL_NAME: &str = "XTSY Travellers Hostel";

/// Hero banner copy
pub struct HeroCopy {
    /// `<h1>` text
    pub headline: &'static str,
    /// Paragraph under the headline
    pub tagline: &'static str,
    /// Backdrop image path
    pub background: &'static str,
    /// Primary call to action
    pub book_label: &'static str,
    /// Secondary call to action
    pub rooms_label: &'static str,
    /// Label above the scroll-down chevron
    pub scroll_label: &'static str,
}

/// Hero copy as published.
pub const HERO: HeroCopy = HeroCopy {
    headline: "Live the Shillong Vibe",
    tagline: "Hey there, adventure seeker! Grab one of our limited spots and dive into Shillong's magic \u{2013} epic hikes, cool hangouts, and jaw-dropping views that'll make your Instagram explode!",
    background: "/lovable-uploads/16227c91-213c-4788-8f2a-7f395c94c51f.png",
    book_label: "Book Your Stay",
    rooms_label: "View Rooms",
    scroll_label: "Scroll Down",
};

/// About section copy
pub struct AboutCopy {
    /// Small label above the heading
    pub chip: &'static str,
    /// Body text, in order
    pub paragraphs: [&'static str; 3],
    /// Photo path
    pub image: &'static str,
    /// Photo alt text
    pub image_alt: &'static str,
    /// Button under the contact list
    pub contact_label: &'static str,
}

/// About copy as published.
pub const ABOUT: AboutCopy = AboutCopy {
    chip: "About Us",
    paragraphs: [
        "Situated just 9km from Shillong's bustling center, our hostel offers what the city cannot - a tranquil escape where birdsong replaces traffic noise and fresh mountain air replaces city fumes.",
        "While the city center pulsates with activity and congestion, our thoughtfully placed retreat allows you to experience authentic Meghalaya living. After a day of exploring, return to a peaceful haven where you can truly unwind, surrounded by nature's symphony rather than urban clamor.",
        "Our handcrafted blend of modern comforts with authentic local charm creates a coveted stay experience that books up quickly each season. Many travelers plan their entire Meghalaya journey around our availability. Join the fortunate travelers who've discovered northeastern India's best-kept secret.",
    ],
    image: "/DJI_20250324_133421_247.jpg",
    image_alt: "XTSY Hostel",
    contact_label: "Contact Us",
};

/// One row of the contact block: icon plus a single line of text.
pub struct ContactLine {
    /// Leading glyph
    pub icon: Glyph,
    /// The line itself
    pub text: &'static str,
}

/// Address, phone, email, check-in times.
pub const CONTACT: [ContactLine; 4] = [
    ContactLine {
        icon: Glyph::MapPin,
        text: "XTSY Travellers Hostel, Dieng\u{ef}ong, Shillong, Meghalaya 793018 (9km from city center)",
    },
    ContactLine {
        icon: Glyph::Phone,
        text: "+91 98636 27070",
    },
    ContactLine {
        icon: Glyph::Mail,
        text: "xtsy.one@gmail.com",
    },
    ContactLine {
        icon: Glyph::Clock,
        text: "Check-in: 2:00 PM | Check-out: 11:00 AM",
    },
];

/// Header and call to action of the feature showcase
pub struct FeaturesIntro {
    /// Small label above the heading
    pub chip: &'static str,
    /// Section heading
    pub heading: &'static str,
    /// Text under the heading
    pub subheading: &'static str,
    /// Button in the detail panel
    pub book_label: &'static str,
}

/// Showcase copy as published.
pub const FEATURES_INTRO: FeaturesIntro = FeaturesIntro {
    chip: "Features",
    heading: "Find Your Perfect Stay",
    subheading: "Whether you're traveling solo, with friends, or looking for a weekend escape, XTSY Travellers Hostel has the perfect accommodation option for you.",
    book_label: "Book Today",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_display_order() {
        for (idx, id) in FeatureId::ALL.into_iter().enumerate() {
            assert_eq!(FEATURES[idx].id, id);
            assert_eq!(id.index(), idx);
            assert_eq!(id.record().id, id);
        }
    }

    #[test]
    fn slugs_are_unique_and_parse_back() {
        let mut slugs: Vec<_> = FeatureId::ALL.iter().map(|id| id.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), FeatureId::ALL.len());

        for id in FeatureId::ALL {
            assert_eq!(id.to_string().parse::<FeatureId>(), Ok(id));
        }
    }

    #[test]
    fn rejects_unknown_slug() {
        let err = "hot-tub".parse::<FeatureId>().unwrap_err();
        assert_eq!(err, UnknownFeature("hot-tub".into()));
        assert!(err.to_string().contains("hot-tub"));
    }

    #[test]
    fn group_booking_record_text() {
        let record = FeatureId::GroupBooking.record();
        assert_eq!(record.title, "Group Booking");
        assert_eq!(
            record.description,
            "Spacious accommodations and facilities for large groups with tailored experiences."
        );
        assert_eq!(record.icon, Glyph::Users);
    }

    #[test]
    fn serializes_slug_ids() {
        let json = serde_json::to_value(FeatureId::SafePlace.record()).unwrap();
        assert_eq!(json["id"], "safe-place");
        assert_eq!(json["title"], "Safe Place to Chill");
        assert_eq!(json["icon"], "shield");
    }
}
