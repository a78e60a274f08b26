use leptos::prelude::*;
use crate::core::services::HttpProjectSource;
use crate::core::ProjectStore;
use crate::error::StoreError;
use crate::features::projects::services::{add_project, change_sort, load_initial_projects, remove_project};
use crate::models::{Project, SortCriterion};

pub struct ProjectsHook {
    pub store: ReadSignal<ProjectStore>,
    pub sort_criterion: Signal<SortCriterion>,
    pub add_project: Callback<Project, Result<(), StoreError>>,
    pub remove_project: Callback<String>,
    pub set_sort: Callback<SortCriterion>,
}

pub fn use_projects(data_url: String) -> ProjectsHook {
    let store = RwSignal::new(ProjectStore::new());

    // Load projects on mount
    load_initial_projects(HttpProjectSource::new(data_url), store);

    let add = Callback::new(move |project: Project| add_project(project, store));
    let remove = Callback::new(move |identifier: String| remove_project(identifier, store));
    let set_sort = Callback::new(move |criterion: SortCriterion| change_sort(criterion, store));

    ProjectsHook {
        store: store.read_only(),
        sort_criterion: Signal::derive(move || store.with(|s| s.sort_criterion())),
        add_project: add,
        remove_project: remove,
        set_sort,
    }
}
