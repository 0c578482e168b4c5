use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::navigation::{Layout, ScrollMotion};
use crate::sections::{Section, SectionBounds};

/// [`Layout`] backed by the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl Layout for DomLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let el = document().get_element_by_id(section.id())?;
        let rect = el.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, section: Section, motion: ScrollMotion) -> bool {
        let Some(el) = document().get_element_by_id(section.id()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match motion {
            ScrollMotion::Smooth => ScrollBehavior::Smooth,
            ScrollMotion::Instant => ScrollBehavior::Instant,
        });
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
