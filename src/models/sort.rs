use std::cmp::Ordering;
use std::str::FromStr;

use super::Project;

/// Ordering applied to the whole project collection.
///
/// Start-date criteria compare the stored timestamp text, not its parsed value, so
/// chronological order only holds for fixed-width ISO 8601 style strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    #[default]
    None,
    NameAscending,
    NameDescending,
    StartAscending,
    StartDescending,
}

impl SortCriterion {
    /// Value used for the `<option>` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::None => "",
            SortCriterion::NameAscending => "name-asc",
            SortCriterion::NameDescending => "name-desc",
            SortCriterion::StartAscending => "date-asc",
            SortCriterion::StartDescending => "date-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::None => "None",
            SortCriterion::NameAscending => "Name (A-Z)",
            SortCriterion::NameDescending => "Name (Z-A)",
            SortCriterion::StartAscending => "Start Date (Earliest)",
            SortCriterion::StartDescending => "Start Date (Latest)",
        }
    }

    pub fn all() -> Vec<SortCriterion> {
        vec![
            SortCriterion::None,
            SortCriterion::NameAscending,
            SortCriterion::NameDescending,
            SortCriterion::StartAscending,
            SortCriterion::StartDescending,
        ]
    }

    /// `None` for the unsorted criterion, which keeps whatever order is current.
    pub fn compare(&self, a: &Project, b: &Project) -> Option<Ordering> {
        match self {
            SortCriterion::None => None,
            SortCriterion::NameAscending => Some(compare_text(&a.name, &b.name)),
            SortCriterion::NameDescending => Some(compare_text(&b.name, &a.name)),
            SortCriterion::StartAscending => Some(compare_text(&a.start_date, &b.start_date)),
            SortCriterion::StartDescending => Some(compare_text(&b.start_date, &a.start_date)),
        }
    }

    pub fn apply(&self, projects: &mut [Project]) {
        if *self == SortCriterion::None {
            return;
        }
        // stable
        projects.sort_by(|a, b| self.compare(a, b).unwrap_or(Ordering::Equal));
    }
}

/// Dictionary-style text ordering: case-insensitive first, then lowercase before uppercase.
///
/// "apple" < "Banana" < "cherry", and "a" < "A" when the texts differ only in case.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

impl FromStr for SortCriterion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortCriterion::all()
            .into_iter()
            .find(|criterion| criterion.as_str() == value)
            .ok_or_else(|| format!("Unknown sort option: {}", value))
    }
}
