use leptos::prelude::*;

use crate::components::{IntroHero, NavBar};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <header class="flex justify-end px-4 py-6 sm:px-6 lg:px-8">
            <NavBar />
        </header>
        <main class="home">
            <IntroHero />
        </main>
    }
}
