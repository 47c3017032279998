//! Theme palettes and colorways (rich royal pastels, light and dark).

/// Light/dark color scheme applied uniformly across UI and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Lenient parse for values coming from the browser: anything other
    /// than `"dark"` is treated as light.
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// CSS class applied to the top-level wrapper div.
    pub fn wrapper_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Named color tokens for one theme. One immutable instance per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub border: &'static str,
    pub chart_paper: &'static str,
    pub chart_plot: &'static str,
}

/// Light theme palette.
pub const LIGHT: Palette = Palette {
    background: "#faf8ff",
    surface: "#f0ebfa",
    text_primary: "#3d3551",
    text_secondary: "#7a6b8a",
    primary: "#7b68ee",
    border: "#e0d8f0",
    chart_paper: "#faf8ff",
    chart_plot: "#f0ebfa",
};

/// Dark theme palette.
pub const DARK: Palette = Palette {
    background: "#1a1625",
    surface: "#252035",
    text_primary: "#e8e4f0",
    text_secondary: "#a89bb8",
    primary: "#a78bfa",
    border: "#3d3551",
    chart_paper: "#1a1625",
    chart_plot: "#252035",
};

/// Discrete-series color sequence, light theme.
const COLORWAY_LIGHT: [&str; 5] = ["#7b68ee", "#6b5bbd", "#9f8eed", "#5a4a9e", "#b8a9f0"];

/// Discrete-series color sequence, dark theme.
const COLORWAY_DARK: [&str; 5] = ["#a78bfa", "#8b5cf6", "#c4b5fd", "#7c3aed", "#ddd6fe"];

impl Palette {
    /// Resolve a theme to its fixed palette.
    pub fn resolve(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Ordered color sequence used to distinguish chart series and categories.
pub fn colorway(theme: Theme) -> &'static [&'static str; 5] {
    match theme {
        Theme::Light => &COLORWAY_LIGHT,
        Theme::Dark => &COLORWAY_DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_dark() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
    }

    #[test]
    fn test_parse_defaults_unknown_values_to_light() {
        assert_eq!(Theme::parse(""), Theme::Light);
        assert_eq!(Theme::parse("purple"), Theme::Light);
        assert_eq!(Theme::parse("DARK"), Theme::Light);
    }

    #[test]
    fn test_resolve_returns_the_two_fixed_palettes() {
        assert_eq!(Palette::resolve(Theme::Light), &LIGHT);
        assert_eq!(Palette::resolve(Theme::Dark), &DARK);
        assert_ne!(LIGHT, DARK);
    }

    #[test]
    fn test_unknown_theme_string_resolves_to_light_palette() {
        assert_eq!(Palette::resolve(Theme::parse("xyz")), &LIGHT);
    }

    #[test]
    fn test_colorways_are_disjoint() {
        for color in colorway(Theme::Light) {
            assert!(!colorway(Theme::Dark).contains(color));
        }
    }

    #[test]
    fn test_wrapper_class() {
        assert_eq!(Theme::Light.wrapper_class(), "theme-light");
        assert_eq!(Theme::Dark.wrapper_class(), "theme-dark");
    }
}
