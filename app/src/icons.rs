//! Inline SVG icons (heroicons, outline style).
//!
//! Icons are sized and spaced by the caller through `class`, e.g.
//! `class="ml-2 w-6 h-6"`.
use leptos::prelude::*;

#[component]
fn OutlineIcon(path: &'static str, class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

#[component]
pub fn ArrowNarrowRightIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! { <OutlineIcon path="M17 8l4 4m0 0l-4 4m4-4H3" class=class /> }
}

#[component]
pub fn SunIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <OutlineIcon
            path="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
            class=class
        />
    }
}

#[component]
pub fn MoonIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <OutlineIcon
            path="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
            class=class
        />
    }
}
