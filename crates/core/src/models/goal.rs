use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Goal '{0}' is mandatory and cannot be deselected")]
    MandatoryLocked(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Mandatory,
    Optional,
}

/// Catalog entry describing one trackable practice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

impl Goal {
    /// Flip the selection. Mandatory goals are always tracked and can never
    /// be toggled off.
    pub fn toggle_selection(&mut self) -> Result<(), GoalError> {
        if self.goal_type == GoalType::Mandatory && self.is_selected {
            return Err(GoalError::MandatoryLocked(self.title.clone()));
        }
        self.is_selected = !self.is_selected;
        Ok(())
    }
}
