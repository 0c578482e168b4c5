use leptos::prelude::*;

use super::tracking::use_page_state;
use crate::profile::PROFILE;
use crate::sections::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_page_state();
    let profile = &*PROFILE;

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-900 to-blue-700 text-white"
        >
            <div class="text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-4 fade-in-up">
                    {profile.name.as_str()}
                </h1>
                <p class="text-xl md:text-2xl mb-8 fade-in-up" style="animation-delay: 200ms">
                    {profile.tagline.as_str()}
                </p>
                <div class="fade-in" style="animation-delay: 400ms">
                    <button
                        class="bg-white text-blue-700 px-6 py-2 rounded-full font-medium hover:bg-blue-100 transition-colors"
                        on:click=move |_| state.go_to(Section::Portfolio)
                    >
                        {profile.cta_label.as_str()}
                    </button>
                </div>
            </div>
        </section>
    }
}
