use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the built-in visual themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    #[default]
    ProfessionalBlue,
    MedicalGreen,
    CorporateGray,
    WarmOrange,
    ElegantPurple,
    MinimalBlack,
}

impl ThemeId {
    /// All theme ids, in registry order.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::ProfessionalBlue,
        ThemeId::MedicalGreen,
        ThemeId::CorporateGray,
        ThemeId::WarmOrange,
        ThemeId::ElegantPurple,
        ThemeId::MinimalBlack,
    ];

    /// The kebab-case identifier used in persisted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::ProfessionalBlue => "professional-blue",
            ThemeId::MedicalGreen => "medical-green",
            ThemeId::CorporateGray => "corporate-gray",
            ThemeId::WarmOrange => "warm-orange",
            ThemeId::ElegantPurple => "elegant-purple",
            ThemeId::MinimalBlack => "minimal-black",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown theme id: {s}"))
    }
}

/// Visual style descriptor for a theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    /// CSS gradient string; carries one or more `#rrggbb` colors.
    pub background: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub secondary_color: &'static str,
}

/// The theme registry, one entry per `ThemeId` in `ThemeId::ALL` order.
pub static THEMES: [ThemeConfig; 6] = [
    ThemeConfig {
        id: ThemeId::ProfessionalBlue,
        name: "Professional Blue",
        description: "Trust and authority for institutional settings",
        background: "linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%)",
        text_color: "#ffffff",
        accent_color: "#60a5fa",
        secondary_color: "#1e40af",
    },
    ThemeConfig {
        id: ThemeId::MedicalGreen,
        name: "Medical Green",
        description: "Calm and healing for healthcare presentations",
        background: "linear-gradient(135deg, #065f46 0%, #10b981 100%)",
        text_color: "#ffffff",
        accent_color: "#6ee7b7",
        secondary_color: "#047857",
    },
    ThemeConfig {
        id: ThemeId::CorporateGray,
        name: "Corporate Gray",
        description: "Sophisticated and neutral for business",
        background: "linear-gradient(135deg, #1f2937 0%, #4b5563 100%)",
        text_color: "#ffffff",
        accent_color: "#9ca3af",
        secondary_color: "#374151",
    },
    ThemeConfig {
        id: ThemeId::WarmOrange,
        name: "Warm Orange",
        description: "Energetic and inviting for engaging talks",
        background: "linear-gradient(135deg, #c2410c 0%, #f97316 100%)",
        text_color: "#ffffff",
        accent_color: "#fdba74",
        secondary_color: "#ea580c",
    },
    ThemeConfig {
        id: ThemeId::ElegantPurple,
        name: "Elegant Purple",
        description: "Creative and refined for special occasions",
        background: "linear-gradient(135deg, #6b21a8 0%, #a855f7 100%)",
        text_color: "#ffffff",
        accent_color: "#d8b4fe",
        secondary_color: "#7e22ce",
    },
    ThemeConfig {
        id: ThemeId::MinimalBlack,
        name: "Minimal Black",
        description: "Bold and impactful for modern presentations",
        background: "linear-gradient(135deg, #000000 0%, #18181b 100%)",
        text_color: "#ffffff",
        accent_color: "#a1a1aa",
        secondary_color: "#27272a",
    },
];

/// Returns the registry entry for `theme_id`, falling back to professional blue.
pub fn resolve_theme(theme_id: Option<ThemeId>) -> &'static ThemeConfig {
    let id = theme_id.unwrap_or_default();
    THEMES
        .iter()
        .find(|theme| theme.id == id)
        .unwrap_or(&THEMES[0])
}

/// Looks a theme up by its string id. Unknown or missing ids resolve to the default theme.
pub fn resolve_theme_str(theme_id: Option<&str>) -> &'static ThemeConfig {
    match theme_id.map(ThemeId::from_str) {
        Some(Ok(id)) => resolve_theme(Some(id)),
        Some(Err(e)) => {
            log::warn!("{e}; using default theme");
            resolve_theme(None)
        }
        None => resolve_theme(None),
    }
}

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("valid hex color pattern"));

/// Scans a background descriptor for `#rrggbb` tokens in written order.
/// Returns `["#000000"]` when the descriptor carries no such token.
pub fn extract_primary_colors(background: &str) -> Vec<String> {
    let colors: Vec<String> = HEX_COLOR
        .find_iter(background)
        .map(|m| m.as_str().to_string())
        .collect();
    if colors.is_empty() {
        vec!["#000000".to_string()]
    } else {
        colors
    }
}

/// First color of the theme's background gradient.
pub fn primary_background(theme: &ThemeConfig) -> String {
    extract_primary_colors(theme.background)
        .into_iter()
        .next()
        .unwrap_or_else(|| "#000000".to_string())
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (the hash is optional). Anything else yields black.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Rgb::default();
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        Rgb {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }

    /// Upper-case `RRGGBB` without the hash, as DrawingML expects.
    pub fn to_drawing_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0..=1.0 for PDF color operators.
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_and_default_themes() {
        assert_eq!(resolve_theme(Some(ThemeId::WarmOrange)).name, "Warm Orange");
        assert_eq!(resolve_theme(None).id, ThemeId::ProfessionalBlue);
        assert_eq!(
            resolve_theme_str(Some("no-such-theme")).id,
            ThemeId::ProfessionalBlue
        );
        assert_eq!(
            resolve_theme_str(Some("minimal-black")).id,
            ThemeId::MinimalBlack
        );
    }

    #[test]
    fn registry_is_in_id_order() {
        for (theme, id) in THEMES.iter().zip(ThemeId::ALL) {
            assert_eq!(theme.id, id);
        }
    }

    #[test]
    fn extracts_gradient_colors_in_order() {
        let colors = extract_primary_colors(THEMES[0].background);
        assert_eq!(colors, vec!["#1e3a8a", "#3b82f6"]);
    }

    #[test]
    fn falls_back_to_black_without_hex_tokens() {
        assert_eq!(extract_primary_colors("none"), vec!["#000000"]);
        assert_eq!(extract_primary_colors("#12345"), vec!["#000000"]);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::from_hex("#60a5fa"), Rgb { r: 0x60, g: 0xa5, b: 0xfa });
        assert_eq!(Rgb::from_hex("ffffff").to_drawing_hex(), "FFFFFF");
        assert_eq!(Rgb::from_hex("not a color"), Rgb::default());
    }

    #[test]
    fn theme_ids_serialize_kebab_case() {
        let json = serde_json::to_string(&ThemeId::ElegantPurple).unwrap();
        assert_eq!(json, "\"elegant-purple\"");
        let parsed: ThemeId = serde_json::from_str("\"corporate-gray\"").unwrap();
        assert_eq!(parsed, ThemeId::CorporateGray);
    }
}
