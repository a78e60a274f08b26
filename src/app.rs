use leptos::prelude::*;
use crate::config::AppConfig;
use crate::pages::Projects;

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    log::info!("Seeding projects from {}", config.data_url);

    provide_context(config);

    view! {
        <main class="app">
            <Projects />
        </main>
    }
}
