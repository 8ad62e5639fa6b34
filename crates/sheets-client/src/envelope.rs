use serde::Deserialize;

use crate::errors::{ClientError, Result};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope used by every backend action:
/// `{status: 'success'|'error', data, message?}`.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Read-call handling: the payload on success, `None` on rejection.
    pub fn into_data(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }

    /// Write-call handling: rejections become errors the caller must show.
    pub fn into_result(self, action: &str) -> Result<Option<T>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| format!("{} failed", action)),
            })
        }
    }
}
