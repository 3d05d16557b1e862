/// Static catalog of background presets
///
/// Each preset pairs a display label with the natural-language scene
/// fragment that steers the generated composite's setting. The catalog
/// never changes at runtime; consumers hold `&'static` references into it
/// and the slice order is the display order.

/// A selectable background preset
#[derive(Debug, PartialEq, Eq)]
pub struct BackgroundOption {
    /// Stable identifier, unique within the catalog
    pub id: &'static str,
    /// Human-readable name shown on the chip
    pub label: &'static str,
    /// Scene description passed verbatim into the generation prompt
    pub prompt: &'static str,
}

const BACKGROUNDS: &[BackgroundOption] = &[
    BackgroundOption {
        id: "studio",
        label: "Studio",
        prompt: "clean, professional photo studio with neutral lighting",
    },
    BackgroundOption {
        id: "outdoor",
        label: "Outdoor",
        prompt: "bright, sunny day in a beautiful park with lush greenery",
    },
    BackgroundOption {
        id: "beach",
        label: "Beach",
        prompt: "serene beach at sunset with golden light",
    },
    BackgroundOption {
        id: "city",
        label: "City Street",
        prompt: "stylish, bustling city street with a blurred background",
    },
    BackgroundOption {
        id: "classic",
        label: "Classic Interior",
        prompt: "elegant and classic room with vintage furniture",
    },
    BackgroundOption {
        id: "neon",
        label: "Neon City",
        prompt: "vibrant, futuristic city at night with neon lights",
    },
    BackgroundOption {
        id: "garden",
        label: "Enchanted Garden",
        prompt: "magical garden filled with glowing flowers and soft light",
    },
    BackgroundOption {
        id: "minimalist",
        label: "Minimalist",
        prompt: "minimalist architectural space with clean lines and soft shadows",
    },
];

/// All background presets, in display order
pub fn backgrounds() -> &'static [BackgroundOption] {
    BACKGROUNDS
}
