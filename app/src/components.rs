use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::icons::{ArrowNarrowRightIcon, MoonIcon, SunIcon};
use crate::mount::{use_mounted, MountState};
use crate::theme::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Blog", href: "/blog" },
];

/// An entry of the navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSlot {
    Link(NavLink),
    ThemeToggle,
}

/// What [`NavBar`] lists for a given mount state: nothing until mounted on the
/// client, since the theme toggle can't know the theme before that.
pub fn nav_slots(state: MountState) -> Vec<NavSlot> {
    if !state.is_ready() {
        return vec![];
    }
    NAV_LINKS
        .into_iter()
        .map(NavSlot::Link)
        .chain(std::iter::once(NavSlot::ThemeToggle))
        .collect()
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    view! {
        <li class="text-2xl font-bold mx-4 hover:text-orange-500 transition duration-150 ease-in-out">
            <A href=link.href>{link.label}</A>
        </li>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let mounted = use_mounted();

    view! {
        {move || {
            let slots = nav_slots(mounted.get());
            (!slots.is_empty()).then(|| view! {
                <nav class="flex items-center">
                    <ul class="ml-6 flex flex-col lg:flex-row justify-between items-end lg:items-center">
                        {slots
                            .into_iter()
                            .map(|slot| match slot {
                                NavSlot::Link(link) => Either::Left(view! { <NavItem link=link /> }),
                                NavSlot::ThemeToggle => Either::Right(view! { <li><ThemeToggle /></li> }),
                            })
                            .collect_view()}
                    </ul>
                </nav>
            })
        }}
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = RwSignal::new(theme::read_preference());

    view! {
        <button
            type="button"
            class="mx-4 p-2 rounded-full hover:text-orange-500 transition duration-150 ease-in-out"
            aria-label=move || current.get().toggle_label()
            on:click=move |_| current.update(|value| *value = theme::toggle(*value))
        >
            {move || match current.get() {
                Theme::Light => Either::Left(view! { <MoonIcon class="w-6 h-6" /> }),
                Theme::Dark => Either::Right(view! { <SunIcon class="w-6 h-6" /> }),
            }}
        </button>
    }
}

#[component]
pub fn IntroHero() -> impl IntoView {
    view! {
        <div>
            <div class="md:absolute md:left-0 md:h-full md:w-1/2"></div>
            <div class="relative max-w-screen-xl mx-auto px-4 py-12 sm:px-6 lg:px-8 lg:py-16">
                <div class="md:ml-auto md:w-1/2 md:pl-10">
                    <div class="text-base leading-6 font-semibold uppercase tracking-wider text-gray-500">
                        "Introduction"
                    </div>
                    <h2 class="mt-2 text-3xl leading-9 font-extrabold tracking-tight sm:text-4xl sm:leading-10 dark:text-white">
                        "html, css and js developer with over 15 years experience."
                    </h2>
                    <p class="mt-3 text-lg leading-7 text-gray-600 dark:text-gray-300">
                        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Et, egestas tempus tellus etiam sed. Quam a scelerisque amet ullamcorper eu enim et fermentum, augue. Aliquet amet volutpat quisque ut interdum tincidunt duis."
                    </p>
                    <div class="mt-8">
                        <a
                            href="/about"
                            class="inline-flex items-center justify-center py-3 border border-transparent text-base leading-6 font-medium transition duration-150 ease-in-out text-orange-500 hover:text-gray-900 dark:hover:text-white"
                        >
                            "My Story"
                            <ArrowNarrowRightIcon class="ml-2 w-6 h-6" />
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
