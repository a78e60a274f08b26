use leptos::prelude::*;
use crate::core::timestamp::format_timestamp;
use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project, on_delete: Callback<String>) -> impl IntoView {
    let dates = format!(
        "{} - {}",
        format_timestamp(&project.start_date),
        format_timestamp(&project.end_date)
    );
    let identifier = project.identifier.clone();

    view! {
        <li>
            <div>
                <strong>"Project Name:"</strong>" "
                <span class="projectNameClass">{project.name}</span>
            </div>
            <div>
                <strong>"Project ID:"</strong>" "
                <span class="projectIDClass">{project.identifier}</span>
            </div>
            <div>
                <strong>"Project Description:"</strong>" "
                <span class="projectDescriptionClass">{project.description}</span>
            </div>
            <div>
                <strong>"Project Dates:"</strong>" "
                <span class="projectDatesClass">{dates}</span>
            </div>
            <button on:click=move |_| on_delete.run(identifier.clone())>"X"</button>
        </li>
    }
}
