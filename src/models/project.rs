use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::timestamp::parse_timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(rename = "projectName")]
    pub name: String,
    #[serde(rename = "projectIdentifier")]
    pub identifier: String,
    pub description: String,
    // Kept as the raw text the source or the form produced; sorting compares this text.
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.start_date)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.end_date)
    }
}
