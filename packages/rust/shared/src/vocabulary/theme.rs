use serde::{Deserialize, Serialize};

use super::Swatch;
use crate::types::ColorRole::{Accent, Background, Subtle, Text};

/// Visual themes a brief can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Minimalist,
    #[serde(rename = "Neo-Brutalist")]
    NeoBrutalist,
    Futuristic,
    Organic,
    Glassmorphism,
    Neumorphism,
    #[serde(rename = "Dark Mode")]
    DarkMode,
    #[serde(rename = "Bold & Vibrant")]
    BoldAndVibrant,
    Pastel,
    Editorial,
    Illustrated,
    #[serde(rename = "High Contrast")]
    HighContrast,
    Monochrome,
    Retro,
    Cyberpunk,
    Luxury,
    Earthy,
    Playful,
    Zen,
    #[serde(rename = "Tech Noir")]
    TechNoir,
}

impl Theme {
    /// Every theme, in tie-break order.
    pub const ALL: [Theme; 20] = [
        Theme::Minimalist,
        Theme::NeoBrutalist,
        Theme::Futuristic,
        Theme::Organic,
        Theme::Glassmorphism,
        Theme::Neumorphism,
        Theme::DarkMode,
        Theme::BoldAndVibrant,
        Theme::Pastel,
        Theme::Editorial,
        Theme::Illustrated,
        Theme::HighContrast,
        Theme::Monochrome,
        Theme::Retro,
        Theme::Cyberpunk,
        Theme::Luxury,
        Theme::Earthy,
        Theme::Playful,
        Theme::Zen,
        Theme::TechNoir,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::NeoBrutalist => "Neo-Brutalist",
            Self::Futuristic => "Futuristic",
            Self::Organic => "Organic",
            Self::Glassmorphism => "Glassmorphism",
            Self::Neumorphism => "Neumorphism",
            Self::DarkMode => "Dark Mode",
            Self::BoldAndVibrant => "Bold & Vibrant",
            Self::Pastel => "Pastel",
            Self::Editorial => "Editorial",
            Self::Illustrated => "Illustrated",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
            Self::Retro => "Retro",
            Self::Cyberpunk => "Cyberpunk",
            Self::Luxury => "Luxury",
            Self::Earthy => "Earthy",
            Self::Playful => "Playful",
            Self::Zen => "Zen",
            Self::TechNoir => "Tech Noir",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Minimalist => &["clean", "minimal", "clarity", "simple"],
            Self::NeoBrutalist => &["brutalist", "bold", "raw", "grid"],
            Self::Futuristic => &["future", "ai", "innovation", "space"],
            Self::Organic => &["organic", "nature", "flow", "natural"],
            Self::Glassmorphism => &["glass", "blur", "translucent"],
            Self::Neumorphism => &["soft", "emboss", "shadow"],
            Self::DarkMode => &["dark", "nocturnal", "night"],
            Self::BoldAndVibrant => &["vibrant", "bold", "punchy"],
            Self::Pastel => &["pastel", "soft", "gentle"],
            Self::Editorial => &["editorial", "magazine", "type"],
            Self::Illustrated => &["illustration", "playful", "hand"],
            Self::HighContrast => &["contrast", "mono", "black", "white"],
            Self::Monochrome => &["mono", "single", "grayscale"],
            Self::Retro => &["retro", "vintage", "nostalgia"],
            Self::Cyberpunk => &["cyber", "neon", "punk"],
            Self::Luxury => &["luxury", "premium", "elevated"],
            Self::Earthy => &["earth", "nature", "grounded"],
            Self::Playful => &["playful", "fun", "friendly"],
            Self::Zen => &["zen", "calm", "peace"],
            Self::TechNoir => &["noir", "tech", "cinematic"],
        }
    }

    /// Signature design effects for the theme.
    pub fn effects(&self) -> &'static [&'static str] {
        match self {
            Self::Minimalist => &["Whitespace-driven layout", "Ultra-thin typography", "Micro-interactions"],
            Self::NeoBrutalist => &["Heavy grid overlays", "Chunky borders", "Hard drop shadows"],
            Self::Futuristic => &["Matrix particle background", "Holographic button hover", "Glowing separators"],
            Self::Organic => &["Curved section dividers", "Soft gradients", "Leaf-like blobs"],
            Self::Glassmorphism => &["Frosted glass panels", "Backdrop blur cards", "Translucent navigation"],
            Self::Neumorphism => &["Soft extruded buttons", "Inset input fields", "Ambient shadow halos"],
            Self::DarkMode => &["Starfield background", "High contrast typography", "Animated neon accents"],
            Self::BoldAndVibrant => &["Diagonal gradient washes", "Oversized typography", "Animated underline reveals"],
            Self::Pastel => &["Soft gradient blobs", "Gentle motion shadows", "Rounded card edges"],
            Self::Editorial => &["Split layout hero", "Layered headline stacks", "Mosaic image grid"],
            Self::Illustrated => &["Hand-drawn doodles", "Animated SVG mascots", "Sketch borders"],
            Self::HighContrast => &["Black & white duotone imagery", "Thick dividing lines", "Snappy transitions"],
            Self::Monochrome => &["Single hue accent blocks", "Tone-on-tone cards", "Subtle noise background"],
            Self::Retro => &["Gradient sunbursts", "Halftone overlays", "Rounded retro frames"],
            Self::Cyberpunk => &["Neon glow edges", "Animated scanlines", "Chromatic aberration"],
            Self::Luxury => &["Gold foil accents", "Serif display headlines", "Slow parallax scroll"],
            Self::Earthy => &["Organic textures", "Pebble-shaped cards", "Animated fern shadows"],
            Self::Playful => &["Bouncy motion curves", "Emoji confetti", "Rounded pill buttons"],
            Self::Zen => &["Soft breathing animations", "Muted gradients", "Floating cards"],
            Self::TechNoir => &["Horizontal light sweeps", "Glass + neon layering", "Diagonal section cuts"],
        }
    }

    /// Explicit palette, if the theme defines one.
    pub fn palette(&self) -> Option<&'static [Swatch]> {
        match self {
            Self::Futuristic => Some(FUTURISTIC),
            Self::Luxury => Some(LUXURY),
            Self::Pastel => Some(PASTEL),
            Self::BoldAndVibrant => Some(BOLD_AND_VIBRANT),
            Self::Glassmorphism => Some(GLASSMORPHISM),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const FUTURISTIC: &[Swatch] = &[
    Swatch { name: "Nightfall", hex: "#050816", role: Background, contrast: "AAA" },
    Swatch { name: "Plasma Blue", hex: "#3F52FF", role: Accent, contrast: "AA" },
    Swatch { name: "Violet Pulse", hex: "#A855F7", role: Accent, contrast: "AA" },
    Swatch { name: "Ion", hex: "#E0F2FE", role: Text, contrast: "AAA" },
];

const LUXURY: &[Swatch] = &[
    Swatch { name: "Onyx", hex: "#0B0B0F", role: Background, contrast: "AAA" },
    Swatch { name: "Champagne", hex: "#F5E6C8", role: Text, contrast: "AAA" },
    Swatch { name: "Gilded", hex: "#D4AF37", role: Accent, contrast: "AA" },
    Swatch { name: "Pearl", hex: "#FFFAF1", role: Subtle, contrast: "AAA" },
];

const PASTEL: &[Swatch] = &[
    Swatch { name: "Cloud", hex: "#F9FAFB", role: Background, contrast: "AAA" },
    Swatch { name: "Lilac Mist", hex: "#D8B4FE", role: Accent, contrast: "AA" },
    Swatch { name: "Peach Fuzz", hex: "#FBCFE8", role: Accent, contrast: "AA" },
    Swatch { name: "Slate", hex: "#334155", role: Text, contrast: "AAA" },
];

const BOLD_AND_VIBRANT: &[Swatch] = &[
    Swatch { name: "Ink", hex: "#0F172A", role: Background, contrast: "AAA" },
    Swatch { name: "Solar", hex: "#F97316", role: Accent, contrast: "AA" },
    Swatch { name: "Pulse", hex: "#EC4899", role: Accent, contrast: "AA" },
    Swatch { name: "Ice", hex: "#F8FAFC", role: Text, contrast: "AAA" },
];

const GLASSMORPHISM: &[Swatch] = &[
    Swatch { name: "Midnight", hex: "#0B1120", role: Background, contrast: "AAA" },
    Swatch { name: "Frost", hex: "#E3F2FD", role: Subtle, contrast: "AAA" },
    Swatch { name: "Aurora", hex: "#60A5FA", role: Accent, contrast: "AA" },
    Swatch { name: "Slate", hex: "#94A3B8", role: Text, contrast: "AA" },
];
