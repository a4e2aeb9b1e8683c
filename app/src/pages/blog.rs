use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavBar;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <header class="flex justify-end px-4 py-6 sm:px-6 lg:px-8">
            <NavBar />
        </header>
        <main class="blog max-w-screen-md mx-auto px-4 py-12">
            <h1 class="text-3xl font-extrabold tracking-tight">"Blog"</h1>
            <p class="mt-3 text-lg text-gray-600 dark:text-gray-300">"No posts yet, come back soon."</p>
        </main>
    }
}
