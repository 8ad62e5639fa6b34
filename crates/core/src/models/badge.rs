use serde::{Deserialize, Serialize};

/// Derived achievement view. Never persisted; recomputed from history every
/// time the progress screen asks for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_unlocked: bool,
}
