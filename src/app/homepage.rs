use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::{Contact, Footer};
use super::header::Header;
use super::hero::Hero;
use super::showcase::{Portfolio, Projects, Skills};
use super::tracking::{provide_page_state, track_active_section};
use crate::profile::PROFILE;
use crate::tracker::ScrollTracker;

/// The whole site: header, the five sections in order, footer.
///
/// Owns the active-section state. The scroll listener lives exactly as long
/// as this component.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let config = &PROFILE.scroll;
    let state = provide_page_state(config);
    track_active_section(state.active, ScrollTracker::from(config));

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gray-50 text-gray-800">
            <Header />
            <main class="pt-16">
                <Hero />
                <Portfolio />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
