use crate::error::FormError;

use super::Project;

/// Whether the create form is on screen. Starts hidden; the only transition is a toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

impl FormVisibility {
    pub fn toggled(self) -> Self {
        match self {
            FormVisibility::Hidden => FormVisibility::Visible,
            FormVisibility::Visible => FormVisibility::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == FormVisibility::Visible
    }

    pub fn button_label(self) -> &'static str {
        match self {
            FormVisibility::Hidden => "Create a New Project",
            FormVisibility::Visible => "Hide Form",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Identifier,
    Description,
    StartDate,
    EndDate,
}

impl DraftField {
    /// `name` attribute of the bound input.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "projectName",
            DraftField::Identifier => "projectIdentifier",
            DraftField::Description => "projectDescription",
            DraftField::StartDate => "startDate",
            DraftField::EndDate => "endDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Project Name",
            DraftField::Identifier => "Project ID",
            DraftField::Description => "Project Description",
            DraftField::StartDate => "Start Date",
            DraftField::EndDate => "End Date",
        }
    }

    pub fn all() -> Vec<DraftField> {
        vec![
            DraftField::Name,
            DraftField::Identifier,
            DraftField::Description,
            DraftField::StartDate,
            DraftField::EndDate,
        ]
    }
}

/// Working copy of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub identifier: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Identifier => &self.identifier,
            DraftField::Description => &self.description,
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Identifier => &mut self.identifier,
            DraftField::Description => &mut self.description,
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
        };
        *slot = value;
    }

    pub fn to_project(&self) -> Result<Project, FormError> {
        if let Some(missing) = DraftField::all().into_iter().find(|f| self.field(*f).is_empty()) {
            return Err(FormError::MissingField(missing));
        }
        Ok(Project::new(
            self.name.clone(),
            self.identifier.clone(),
            self.description.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectDraft {
        let mut draft = ProjectDraft::default();
        draft.set_field(DraftField::Name, "Apollo".into());
        draft.set_field(DraftField::Identifier, "AP-1".into());
        draft.set_field(DraftField::Description, "Moon shot".into());
        draft.set_field(DraftField::StartDate, "2024-01-15T09:30".into());
        draft.set_field(DraftField::EndDate, "2024-03-01T17:00".into());
        draft
    }

    #[test]
    fn visibility_starts_hidden_and_toggles() {
        let state = FormVisibility::default();
        assert!(!state.is_visible());
        assert_eq!(state.button_label(), "Create a New Project");
        let state = state.toggled();
        assert!(state.is_visible());
        assert_eq!(state.button_label(), "Hide Form");
        assert_eq!(state.toggled(), FormVisibility::Hidden);
    }

    #[test]
    fn complete_draft_becomes_project() {
        let project = filled().to_project().unwrap();
        assert_eq!(project.identifier, "AP-1");
        assert_eq!(project.description, "Moon shot");
        assert_eq!(project.end_date, "2024-03-01T17:00");
    }

    #[test]
    fn blank_field_is_reported() {
        let mut draft = filled();
        draft.set_field(DraftField::StartDate, String::new());
        assert_eq!(draft.to_project(), Err(FormError::MissingField(DraftField::StartDate)));
        assert_eq!(
            FormError::MissingField(DraftField::StartDate).to_string(),
            "Start Date is required"
        );
    }
}
