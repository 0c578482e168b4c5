use serde::{Deserialize, Serialize};

use crate::sections::{Section, SectionBounds};

/// How the viewport moves when navigating to a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMotion {
    #[default]
    Smooth,
    Instant,
}

/// Geometry and scrolling for the rendered sections.
///
/// The browser implementation lives in `app::dom`; tests use an in-memory one.
pub trait Layout {
    /// Bounds of the section's element, or `None` if it is not in the document.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;

    /// Requests the viewport bring the section into view. Returns `false` when
    /// the element is missing and nothing was requested.
    fn scroll_into_view(&self, section: Section, motion: ScrollMotion) -> bool;
}

/// Scrolls the page to a section when a navigation control is clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    motion: ScrollMotion,
}

impl Navigator {
    pub fn new(motion: ScrollMotion) -> Self {
        Self { motion }
    }

    pub fn motion(&self) -> ScrollMotion {
        self.motion
    }

    /// Fire and forget. A section without an element is a no-op.
    pub fn navigate<L: Layout + ?Sized>(&self, layout: &L, section: Section) {
        if !layout.scroll_into_view(section, self.motion) {
            log::debug!("no element for section {section}, not scrolling");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeLayout;
    use super::*;

    #[test]
    fn test_navigate_existing_section() {
        let layout = FakeLayout::stacked(800.0, 0.0);
        let navigator = Navigator::default();

        navigator.navigate(&layout, Section::Contact);

        assert_eq!(
            *layout.scrolls.borrow(),
            vec![(Section::Contact, ScrollMotion::Smooth)]
        );
    }

    #[test]
    fn test_navigate_missing_section_is_noop() {
        let layout = FakeLayout::default().with(Section::Home, 0.0, 800.0);
        let navigator = Navigator::default();

        navigator.navigate(&layout, Section::Projects);

        assert!(layout.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_navigate_uses_configured_motion() {
        let layout = FakeLayout::stacked(500.0, 0.0);
        let navigator = Navigator::new(ScrollMotion::Instant);

        navigator.navigate(&layout, Section::Skills);
        navigator.navigate(&layout, Section::Home);

        assert_eq!(
            *layout.scrolls.borrow(),
            vec![
                (Section::Skills, ScrollMotion::Instant),
                (Section::Home, ScrollMotion::Instant),
            ]
        );
    }

    #[test]
    fn test_motion_deserialize() {
        let motion: ScrollMotion = serde_json::from_str("\"instant\"").unwrap();
        assert_eq!(motion, ScrollMotion::Instant);
        assert_eq!(ScrollMotion::default(), ScrollMotion::Smooth);
    }
}
