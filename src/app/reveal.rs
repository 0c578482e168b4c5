use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Direction a card animates in from when it scrolls into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Rise,
    Grow,
    Left,
    Right,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Self::Rise => "reveal-rise",
            Self::Grow => "reveal-grow",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
        }
    }
}

/// Wraps children in a div that transitions in while it is visible.
/// Purely cosmetic: nothing reads the visibility back.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let entrance = entrance.class();

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if visible.get() { "is-visible" } else { "" };
                format!("{class} reveal {entrance} {state}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
