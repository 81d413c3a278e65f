//! Theme
//!
//! Presentation parameters for the login and dashboard views. One view
//! implementation renders every look; the look is picked by theme.

use std::fmt;
use std::str::FromStr;

/// Year the dashboard reviews unless configured otherwise
pub const DEFAULT_REVIEW_YEAR: i32 = 2023;

/// Available looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Year-in-review look: checkered page, accented cards
    #[default]
    Stacked,
    /// Plain cards on a plain page
    Classic,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Stacked => "stacked",
            ThemeName::Classic => "classic",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stacked" => Ok(ThemeName::Stacked),
            "classic" => Ok(ThemeName::Classic),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Page background style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Checkered,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub brand_name: String,
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub font_family: String,
    pub background: Background,
    /// Draw a brand-colored stripe on metric cards
    pub accent_cards: bool,
    pub year: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::stacked()
    }
}

impl Theme {
    pub fn stacked() -> Self {
        Self {
            name: ThemeName::Stacked,
            brand_name: "Sam's Subs".to_string(),
            primary: "#D12031".to_string(),
            primary_light: "#FF3D4D".to_string(),
            primary_dark: "#A91826".to_string(),
            font_family: "\"Poppins\", \"Segoe UI\", \"Roboto\", sans-serif".to_string(),
            background: Background::Checkered,
            accent_cards: true,
            year: DEFAULT_REVIEW_YEAR,
        }
    }

    pub fn classic() -> Self {
        Self {
            name: ThemeName::Classic,
            background: Background::Plain,
            accent_cards: false,
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_string(),
            ..Self::stacked()
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Stacked => Self::stacked(),
            ThemeName::Classic => Self::classic(),
        }
    }

    /// Theme for a configured name; unknown names get the default look
    pub fn named(name: &str) -> Self {
        match name.parse::<ThemeName>() {
            Ok(name) => Self::from_name(name),
            Err(e) => {
                tracing::warn!("{}, falling back to {}", e, ThemeName::default());
                Self::default()
            }
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Heading of the login form
    pub fn portal_title(&self) -> String {
        format!("{} Customer Portal", self.brand_name)
    }

    pub fn headline(&self) -> String {
        format!("{} WAS STACKED.", self.year)
    }

    pub fn tagline(&self) -> String {
        format!(
            "Thanks for eating your way through {} this year. Let's take a tasty trip down memory lane!",
            self.brand_name
        )
    }

    /// CSS custom properties consumed by the stylesheet
    pub fn css_variables(&self) -> String {
        format!(
            "--primary: {}; --primary-light: {}; --primary-dark: {}; --font-family: {};",
            self.primary, self.primary_light, self.primary_dark, self.font_family
        )
    }

    pub fn page_class(&self) -> String {
        let background = match self.background {
            Background::Checkered => "page--checkered",
            Background::Plain => "page--plain",
        };
        format!("page theme-{} {}", self.name, background)
    }

    pub fn card_class(&self) -> &'static str {
        if self.accent_cards {
            "metric-card metric-card--accent"
        } else {
            "metric-card"
        }
    }
}
