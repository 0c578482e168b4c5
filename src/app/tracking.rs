use leptos::{ev, prelude::*};

use super::dom::DomLayout;
use crate::navigation::Navigator;
use crate::sections::Section;
use crate::subscription::Subscription;
use crate::tracker::{ScrollConfig, ScrollTracker};

/// State owned by the page and shared with the navigation through context.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    /// Written only by the scroll listener, read by the nav highlight.
    pub active: RwSignal<Section>,
    pub navigator: Navigator,
}

impl PageState {
    pub fn go_to(&self, section: Section) {
        self.navigator.navigate(&DomLayout, section);
    }
}

pub fn provide_page_state(config: &ScrollConfig) -> PageState {
    let state = PageState {
        active: RwSignal::new(Section::default()),
        navigator: Navigator::new(config.behavior),
    };
    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

/// Registers the window scroll listener that keeps `active` in sync with the
/// layout. The listener is removed when the current owner is cleaned up.
pub fn track_active_section(active: RwSignal<Section>, tracker: ScrollTracker) {
    let handle = window_event_listener(ev::scroll, move |_| {
        let previous = active.get_untracked();
        let mut current = previous;
        if tracker.update(&DomLayout, &mut current) {
            log::debug!("active section {previous} -> {current}");
            active.set(current);
        }
    });
    let subscription = Subscription::new(move || handle.remove());
    on_cleanup(move || subscription.detach());
}
