use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::profile::PROFILE;
use crate::sections::Section;

/// Identified `<section>` with the shared container and heading.
#[component]
pub fn PageSection(section: Section, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=section.id() class=class>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-8 text-center">{section.label()}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <PageSection section=Section::Portfolio class="py-20 bg-white">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROFILE
                    .portfolio
                    .iter()
                    .map(|item| {
                        view! {
                            <Reveal class="bg-gray-100 p-6 rounded-lg shadow-md">
                                <h3 class="text-xl font-semibold mb-2">{item.title.as_str()}</h3>
                                <p class="text-gray-600 mb-4">{item.summary.as_str()}</p>
                                <a href=item.link.as_str() class="text-blue-600 hover:underline">
                                    "Learn More"
                                </a>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection section=Section::Skills class="py-20 bg-gray-100">
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                {PROFILE
                    .skills
                    .iter()
                    .zip((0..).step_by(100))
                    .map(|(skill, delay_ms)| {
                        view! {
                            <Reveal
                                class="bg-white p-4 rounded-lg shadow-md text-center"
                                entrance=Entrance::Grow
                                delay_ms=delay_ms
                            >
                                <p class="font-medium">{skill.as_str()}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <PageSection section=Section::Projects class="py-20 bg-white">
            <div class="space-y-12">
                {PROFILE
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let entrance = if i % 2 == 0 { Entrance::Left } else { Entrance::Right };
                        view! {
                            <Reveal class="flex flex-col md:flex-row items-center" entrance=entrance>
                                <div class="md:w-1/2 mb-4 md:mb-0">
                                    <h3 class="text-xl font-semibold mb-2">
                                        {project.title.as_str()}
                                    </h3>
                                    <p class="text-gray-600">{project.description.as_str()}</p>
                                </div>
                                <div class="md:w-1/2 md:pl-8">
                                    <div class="bg-gray-200 h-48 rounded-lg"></div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
