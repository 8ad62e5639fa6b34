use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Student;

/// On-device session snapshot: the logged-in student plus any locally edited
/// preferences (e.g. `start_ramadhan_date`), restored on app reload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub student: Student,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(student: Student) -> Self {
        Session {
            student,
            saved_at: Utc::now(),
        }
    }
}
