//! Light/dark theme and the class tokens each one selects.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page color scheme. The page opens dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Precomputed class tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub page: &'static str,
    pub nav: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub panel: &'static str,
}

const DARK_TOKENS: ThemeTokens = ThemeTokens {
    page: "page page--dark",
    nav: "nav nav--dark",
    text_primary: "text-primary text-primary--dark",
    text_secondary: "text-secondary text-secondary--dark",
    card: "card card--dark",
    border: "border border--dark",
    panel: "panel panel--dark",
};

const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    page: "page page--light",
    nav: "nav nav--light",
    text_primary: "text-primary text-primary--light",
    text_secondary: "text-secondary text-secondary--light",
    card: "card card--light",
    border: "border border--light",
    panel: "panel panel--light",
};

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Dark => DARK_TOKENS,
            Self::Light => LIGHT_TOKENS,
        }
    }

    /// Value for the root element's `data-theme` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
