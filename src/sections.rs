use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five regions of the page, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Declaration order. The tracker evaluates sections in exactly this order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Portfolio,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Portfolio => "portfolio",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Text of the navigation button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Portfolio => "Portfolio",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Vertical extent of a rendered section, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a horizontal line `line` px below the viewport top crosses this section.
    /// Both edges are inclusive.
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "portfolio", "skills", "projects", "contact"]);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_labels_lowercase_to_ids() {
        for section in Section::ALL {
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("skills".parse::<Section>(), Ok(Section::Skills));
        assert_eq!("contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "Skills".parse::<Section>(),
            Err(SectionError::Unknown("Skills".to_string()))
        );
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Section::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let back: Section = serde_json::from_str("\"portfolio\"").unwrap();
        assert_eq!(back, Section::Portfolio);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = SectionBounds::new(-50.0, 100.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(100.5));

        let below = SectionBounds::new(100.0, 900.0);
        assert!(below.contains(100.0));
        assert!(!below.contains(99.0));
    }
}
