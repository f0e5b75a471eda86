//! Desert Night theme implementation

use ratatui::style::Color;

use super::Theme;

/// Desert Night color palette
pub const DESERT_NIGHT: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(31, 26, 23),   // #1f1a17
    bg_secondary: Color::Rgb(42, 35, 30), // #2a231e
    bg_tertiary: Color::Rgb(61, 50, 42),  // #3d322a

    // Foreground colors
    fg_primary: Color::Rgb(216, 201, 176),   // #d8c9b0
    fg_secondary: Color::Rgb(239, 230, 213), // #efe6d5
    fg_muted: Color::Rgb(138, 122, 102),     // #8a7a66

    // Accent colors
    accent_primary: Color::Rgb(224, 164, 88),   // #e0a458
    accent_secondary: Color::Rgb(78, 168, 160), // #4ea8a0

    // Semantic colors
    success: Color::Rgb(163, 190, 140), // #a3be8c
    warning: Color::Rgb(224, 175, 104), // #e0af68
    error: Color::Rgb(191, 97, 106),    // #bf616a
    info: Color::Rgb(129, 161, 193),    // #81a1c1

    // UI elements
    border: Color::Rgb(61, 50, 42),            // #3d322a
    border_focused: Color::Rgb(224, 164, 88),  // #e0a458
    selection: Color::Rgb(74, 59, 44),         // #4a3b2c
    visited: Color::Rgb(163, 190, 140),        // #a3be8c
};

// Workaround for const String
impl Theme {
    pub fn desert_night() -> Self {
        Theme { name: "Desert Night".to_string(), ..DESERT_NIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desert_night_has_correct_name() {
        let theme = Theme::desert_night();
        assert_eq!(theme.name, "Desert Night");
    }

    #[test]
    fn desert_night_colors_are_rgb() {
        let theme = Theme::desert_night();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
    }
}
