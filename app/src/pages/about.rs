use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavBar;

// The hero's "My Story" link lands here.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text="My Story" />
        <header class="flex justify-end px-4 py-6 sm:px-6 lg:px-8">
            <NavBar />
        </header>
        <main class="about max-w-screen-md mx-auto px-4 py-12 space-y-4 text-lg leading-7">
            <h1 class="text-3xl font-extrabold tracking-tight">"My Story"</h1>
            <p>
                "I have been writing html, css and javascript for over fifteen years, from hand-written table layouts to component frameworks and server-side rendering."
            </p>
            <p>
                "These days I care most about fast, accessible pages that work before the javascript shows up, and about sharing what I learn along the way on the " <a href="/blog" class="text-orange-500 hover:underline">"blog"</a> "."
            </p>
        </main>
    }
}
