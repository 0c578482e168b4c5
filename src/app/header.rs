use leptos::prelude::*;

use super::tracking::use_page_state;
use crate::sections::Section;

fn nav_class(is_active: bool) -> &'static str {
    if is_active {
        "text-sm font-medium hover:text-blue-600 transition-colors text-blue-600"
    } else {
        "text-sm font-medium hover:text-blue-600 transition-colors text-gray-600"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = use_page_state();
    let active = state.active;

    view! {
        <header class="fixed top-0 left-0 right-0 bg-white bg-opacity-90 shadow-sm z-10">
            <nav class="container mx-auto px-6 py-3">
                <ul class="flex justify-center space-x-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || active.get() == section;
                            view! {
                                <li>
                                    <button
                                        class=move || nav_class(is_active())
                                        aria-current=move || is_active().then_some("true")
                                        on:click=move |_| state.go_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
