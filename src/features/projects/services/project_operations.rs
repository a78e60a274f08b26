use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::{ProjectSource, ProjectStore};
use crate::error::StoreError;
use crate::models::{Project, SortCriterion};

// Fetch the initial projects and install them once the request settles
pub fn load_initial_projects<S>(source: S, store_signal: RwSignal<ProjectStore>)
where
    S: ProjectSource + 'static,
{
    spawn_local(async move {
        let outcome = source.fetch_projects().await;
        store_signal.update(|store| store.apply_load(outcome));
    });
}

// Add a project, leaving the store untouched when the identifier is taken
pub fn add_project(project: Project, store_signal: RwSignal<ProjectStore>) -> Result<(), StoreError> {
    let mut outcome = Ok(());
    store_signal.update(|store| {
        outcome = store.add(project);
    });
    outcome
}

pub fn remove_project(identifier: String, store_signal: RwSignal<ProjectStore>) {
    let present = store_signal.with_untracked(|store| store.contains(&identifier));
    if present {
        store_signal.update(|store| store.remove(&identifier));
    } else {
        log::debug!("Project {} already gone", identifier);
    }
}

pub fn change_sort(criterion: SortCriterion, store_signal: RwSignal<ProjectStore>) {
    store_signal.update(|store| store.set_sort_criterion(criterion));
}
