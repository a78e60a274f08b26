use std::future::Future;

use crate::error::{LoadError, StoreError};
use crate::models::{Project, SortCriterion};

/// Anything that can hand over the initial project list.
pub trait ProjectSource {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, LoadError>>;
}

/// In-memory project collection plus the active sort criterion.
///
/// Identifiers are unique across the collection once anything goes through [`ProjectStore::add`];
/// the initial load is trusted as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    projects: Vec<Project>,
    sort: SortCriterion,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.projects.iter().any(|p| p.identifier == identifier)
    }

    /// Fetches from `source` and replaces the collection with the result.
    pub async fn load<S: ProjectSource>(&mut self, source: &S) {
        let outcome = source.fetch_projects().await;
        self.apply_load(outcome);
    }

    /// Installs a finished fetch. Failures leave the collection empty and are only logged.
    pub fn apply_load(&mut self, outcome: Result<Vec<Project>, LoadError>) {
        match outcome {
            Ok(projects) => {
                log::info!("Loaded {} initial projects", projects.len());
                self.projects = projects;
                self.sort.apply(&mut self.projects);
            }
            Err(e) => {
                log::error!("Error loading initial projects: {}", e);
                self.projects.clear();
            }
        }
    }

    /// Appends `candidate` and re-sorts the whole collection by the active criterion.
    pub fn add(&mut self, candidate: Project) -> Result<(), StoreError> {
        if self.contains(&candidate.identifier) {
            log::warn!("Rejected project with duplicate identifier {}", candidate.identifier);
            return Err(StoreError::DuplicateIdentifier(candidate.identifier));
        }
        log::debug!("Adding project {}", candidate.identifier);
        self.projects.push(candidate);
        self.sort.apply(&mut self.projects);
        Ok(())
    }

    /// Drops every project carrying `identifier`. Unknown identifiers are a no-op.
    pub fn remove(&mut self, identifier: &str) {
        let original_count = self.projects.len();
        self.projects.retain(|p| p.identifier != identifier);
        if self.projects.len() < original_count {
            log::debug!("Removed project {}", identifier);
        }
    }

    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) {
        self.sort = criterion;
        self.sort.apply(&mut self.projects);
    }

    /// Projects whose name contains `term`, ignoring case, in collection order.
    pub fn search(&self, term: &str) -> impl Iterator<Item = &Project> + '_ {
        let needle = term.to_lowercase();
        self.projects
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sort::compare_text;

    fn project(identifier: &str, name: &str) -> Project {
        Project::new(name, identifier, "", "2024-01-01T00:00", "2024-02-01T00:00")
    }

    fn identifiers(store: &ProjectStore) -> Vec<&str> {
        store.projects().iter().map(|p| p.identifier.as_str()).collect()
    }

    #[test]
    fn distinct_adds_grow_the_collection() {
        let mut store = ProjectStore::new();
        for i in 0..5 {
            store.add(project(&format!("P{}", i), "Name")).unwrap();
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn duplicate_add_changes_nothing() {
        let mut store = ProjectStore::new();
        store.add(project("A", "Alpha")).unwrap();
        let before = store.clone();

        let result = store.add(project("A", "Another"));
        assert_eq!(result, Err(StoreError::DuplicateIdentifier("A".to_string())));
        assert_eq!(store, before);
    }

    #[test]
    fn add_without_criterion_appends() {
        let mut store = ProjectStore::new();
        store.add(project("Z", "Zebra")).unwrap();
        store.add(project("A", "Apple")).unwrap();
        assert_eq!(identifiers(&store), vec!["Z", "A"]);
    }

    #[test]
    fn name_ascending_orders_adjacent_pairs() {
        let mut store = ProjectStore::new();
        for (id, name) in [("1", "delta"), ("2", "Alpha"), ("3", "charlie"), ("4", "bravo")] {
            store.add(project(id, name)).unwrap();
        }
        store.set_sort_criterion(SortCriterion::NameAscending);
        assert!(store
            .projects()
            .windows(2)
            .all(|pair| compare_text(&pair[0].name, &pair[1].name) != std::cmp::Ordering::Greater));
        let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn switching_back_to_none_keeps_sorted_order() {
        let mut store = ProjectStore::new();
        store.add(project("Z", "Zebra")).unwrap();
        store.add(project("A", "Apple")).unwrap();
        store.set_sort_criterion(SortCriterion::NameAscending);
        store.set_sort_criterion(SortCriterion::None);
        assert_eq!(identifiers(&store), vec!["A", "Z"]);
        assert_eq!(store.sort_criterion(), SortCriterion::None);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = ProjectStore::new();
        store.add(project("A", "Alpha")).unwrap();
        store.add(project("B", "Bravo")).unwrap();

        store.remove("A");
        let after_first = store.clone();
        store.remove("A");
        assert_eq!(store, after_first);
        assert_eq!(identifiers(&store), vec!["B"]);

        store.remove("missing");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_drops_every_match_from_a_trusted_load() {
        let mut store = ProjectStore::new();
        store.apply_load(Ok(vec![project("A", "One"), project("B", "Two"), project("A", "Three")]));
        store.remove("A");
        assert_eq!(identifiers(&store), vec!["B"]);
    }

    #[test]
    fn empty_search_returns_everything() {
        let mut store = ProjectStore::new();
        store.add(project("A", "Alpha")).unwrap();
        store.add(project("B", "Bravo")).unwrap();
        assert_eq!(store.search("").count(), 2);
    }

    #[test]
    fn search_ignores_case_and_leaves_store_alone() {
        let mut store = ProjectStore::new();
        store.add(project("A", "Alpha")).unwrap();
        store.add(project("B", "Alphabet Soup")).unwrap();
        store.add(project("C", "Bravo")).unwrap();

        let hits: Vec<&str> = store.search("ALPHA").map(|p| p.identifier.as_str()).collect();
        assert_eq!(hits, vec!["A", "B"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn failed_load_leaves_store_empty() {
        let mut store = ProjectStore::new();
        store.apply_load(Ok(vec![project("A", "Alpha")]));
        store.apply_load(Err(LoadError::Status(404)));
        assert!(store.is_empty());

        // still usable afterwards
        store.add(project("B", "Bravo")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_respects_active_criterion() {
        let mut store = ProjectStore::new();
        store.set_sort_criterion(SortCriterion::NameDescending);
        store.apply_load(Ok(vec![project("A", "Apple"), project("Z", "Zebra")]));
        assert_eq!(identifiers(&store), vec!["Z", "A"]);
    }
}
