//! Data Model
//!
//! Items as transmitted by the backing store, the request bodies sent to it,
//! and the local form draft.

use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// The client never treats this as authoritative: `completed` is only ever
/// changed by the backing store and observed through the next full fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier assigned by the backing store
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Body of a create request (`POST /`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
}

/// Body of a toggle request (`PUT /`)
///
/// Carries only the identifier; the store decides what "toggle" means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

impl ToggleRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Field of the add-item form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
}

impl std::str::FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(DraftField::Title),
            "description" | "desc" => Ok(DraftField::Description),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// In-progress, unsubmitted new-item form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    /// Replace the value of one field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.title = value.into(),
            DraftField::Description => self.description = value.into(),
        }
    }

    /// Read one field
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
        }
    }

    /// Both fields carry text. Whitespace counts as text.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Reset both fields to empty strings
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Payload for the create request
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}
