use leptos::prelude::*;

use super::icons::LinkIcon;
use super::showcase::PageSection;
use crate::profile::PROFILE;
use crate::sections::Section;

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &PROFILE.contact;

    view! {
        <PageSection section=Section::Contact class="py-20 bg-blue-900 text-white">
            <div class="max-w-md mx-auto">
                <p class="text-center mb-8">{contact.blurb.as_str()}</p>
                <div class="flex justify-center space-x-6">
                    {contact
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    class="hover:text-blue-300 transition-colors"
                                    aria-label=link.kind.aria_label()
                                >
                                    <LinkIcon kind=link.kind />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-6">
            <div class="container mx-auto px-6 text-center">
                <p>{PROFILE.copyright()}</p>
            </div>
        </footer>
    }
}
