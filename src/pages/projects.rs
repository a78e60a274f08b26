use leptos::prelude::*;
use crate::config::AppConfig;
use crate::features::projects::{use_projects, ProjectForm, ProjectList, SearchBar, SortSelect};
use crate::models::{FormVisibility, Project, ProjectDraft};

#[component]
pub fn Projects() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let projects = use_projects(config.data_url);

    let (search_term, set_search_term) = signal(String::new());
    let (form_visibility, set_form_visibility) = signal(FormVisibility::Hidden);
    // Lives here so typed input survives hiding the form
    let draft = RwSignal::new(ProjectDraft::default());

    let store = projects.store;
    let searched_projects = Signal::derive(move || {
        let term = search_term.get();
        store.with(|s| s.search(&term).cloned().collect::<Vec<Project>>())
    });

    let on_search = Callback::new(move |term: String| set_search_term.set(term));

    view! {
        <div class="appContainer">
            <h1>"Projects"</h1>

            <SortSelect selected=projects.sort_criterion on_change=projects.set_sort />
            <SearchBar term=search_term on_input=on_search />
            <ProjectList projects=searched_projects on_delete=projects.remove_project />

            <button on:click=move |_| set_form_visibility.update(|v| *v = v.toggled())>
                {move || form_visibility.get().button_label()}
            </button>

            <Show when=move || form_visibility.get().is_visible()>
                <ProjectForm draft=draft on_submit=projects.add_project />
            </Show>
        </div>
    }
}
