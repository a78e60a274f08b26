use leptos::prelude::*;
use crate::models::Project;
use super::ProjectCard;

/// Row key for the rendered list. A trusted seed may repeat identifiers, so the
/// position keeps keys unique.
pub type RowKey = (usize, String);

pub fn keyed_rows(projects: Vec<Project>) -> Vec<(RowKey, Project)> {
    projects
        .into_iter()
        .enumerate()
        .map(|(position, project)| ((position, project.identifier.clone()), project))
        .collect()
}

// Renders the filtered view in collection order
#[component]
pub fn ProjectList(
    #[prop(into)] projects: Signal<Vec<Project>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="projectList">
            <For
                each=move || keyed_rows(projects.get())
                key=|(key, _)| key.clone()
                children=move |(_, project)| view! { <ProjectCard project=project on_delete=on_delete /> }
            />
        </ul>
    }
}
