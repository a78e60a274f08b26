use leptos::prelude::*;
use leptos::ev;
use crate::core::services::report_store_error;
use crate::error::StoreError;
use crate::models::{DraftField, Project, ProjectDraft};

#[component]
pub fn ProjectForm(
    draft: RwSignal<ProjectDraft>,
    on_submit: Callback<Project, Result<(), StoreError>>,
) -> impl IntoView {

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let project = match draft.with_untracked(|d| d.to_project()) {
            Ok(project) => project,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };

        match on_submit.run(project) {
            // Only a successful add clears the form
            Ok(()) => draft.set(ProjectDraft::default()),
            Err(e) => report_store_error(&e),
        }
    };

    view! {
        <form class="projectForm" on:submit=handle_submit>
            <h2>"Create a New Project"</h2>
            <DraftInput draft=draft field=DraftField::Name input_type="text" />
            <DraftInput draft=draft field=DraftField::Identifier input_type="text" />
            <div id={DraftField::Description.as_str()}>
                <label>
                    {format!("{}:", DraftField::Description.label())}
                    <textarea
                        name={DraftField::Description.as_str()}
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.set_field(DraftField::Description, event_target_value(&ev)))
                        required
                    ></textarea>
                </label>
            </div>
            <DraftInput draft=draft field=DraftField::StartDate input_type="datetime-local" />
            <DraftInput draft=draft field=DraftField::EndDate input_type="datetime-local" />
            <button type="submit">"Submit"</button>
        </form>
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<ProjectDraft>,
    field: DraftField,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div id={field.as_str()}>
            <label>
                {format!("{}:", field.label())}
                <input
                    type=input_type
                    name={field.as_str()}
                    prop:value=move || draft.with(|d| d.field(field).to_string())
                    on:input=move |ev| draft.update(|d| d.set_field(field, event_target_value(&ev)))
                    required
                />
            </label>
        </div>
    }
}
