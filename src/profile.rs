use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::tracker::ScrollConfig;

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::load().unwrap_or_else(|err| {
        log::error!("falling back to empty profile: {err}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("{} is not embedded", PROFILE_FILE)]
    Missing,
    #[error("couldn't parse {file}: {0}", file = PROFILE_FILE)]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub cta_label: String,
    pub portfolio: Vec<PortfolioItem>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    /// Copyright holder shown in the footer.
    pub owner: String,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub summary: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Email,
}

impl LinkKind {
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Github => "GitHub Profile",
            Self::Linkedin => "LinkedIn Profile",
            Self::Email => "Send an email",
        }
    }
}

impl Profile {
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::Missing)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn copyright(&self) -> String {
        match build_year() {
            Some(year) => format!("\u{a9} {year} {}. All rights reserved.", self.owner),
            None => format!("\u{a9} {}. All rights reserved.", self.owner),
        }
    }
}

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ScrollMotion;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert!(!profile.name.is_empty());
        assert_eq!(profile.portfolio.len(), 3);
        assert_eq!(profile.skills.len(), 8);
        assert_eq!(profile.skills[0], "Python");
        assert_eq!(profile.projects.len(), 3);

        let kinds: Vec<LinkKind> = profile.contact.links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LinkKind::Github, LinkKind::Linkedin, LinkKind::Email]);

        assert_eq!(profile.scroll.probe_line, 100.0);
        assert_eq!(profile.scroll.behavior, ScrollMotion::Smooth);
        assert_eq!(*PROFILE, profile);
    }

    #[test]
    fn test_scroll_block_is_optional() {
        let json = br#"{
            "name": "Jane Roe",
            "tagline": "Engineer",
            "cta_label": "See more",
            "portfolio": [],
            "skills": ["Rust"],
            "projects": [],
            "contact": { "blurb": "hi", "links": [] },
            "owner": "Jane Roe"
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.scroll, ScrollConfig::default());
    }

    #[test]
    fn test_malformed_profile() {
        let err = Profile::from_json(b"{\"name\": 3}").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
        assert!(err.to_string().starts_with("couldn't parse profile.json"));
    }

    #[test]
    fn test_copyright_uses_build_year() {
        let profile = Profile {
            owner: "John Doe".to_string(),
            ..Profile::default()
        };
        let year = build_year().expect("BUILD_TIME should be rfc3339");
        assert!(year >= 2024);
        assert_eq!(
            profile.copyright(),
            format!("\u{a9} {year} John Doe. All rights reserved.")
        );
    }

    #[test]
    fn test_build_time_pinned_by_source_date_epoch() {
        let pinned = option_env!("SOURCE_DATE_EPOCH").and_then(|s| s.trim().parse::<i64>().ok());
        if let Some(secs) = pinned {
            let stamped = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).unwrap();
            assert_eq!(stamped.timestamp(), secs);
        }
    }

    #[test]
    fn test_unknown_link_kind_rejected() {
        let err = serde_json::from_str::<ContactLink>(r##"{"kind": "fax", "href": "#"}"##);
        assert!(err.is_err());
    }
}
