use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page count of the standard mushaf; tilawah progress cannot exceed it.
pub const QURAN_TOTAL_PAGES: u32 = 604;

#[derive(Error, Debug)]
pub enum JournalValidationError {
    #[error("Invalid entry date '{0}', expected an ISO 8601 timestamp or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Tilawah pages {0} exceeds the mushaf page count ({QURAN_TOTAL_PAGES})")]
    TilawahOutOfRange(u32),
}

/// How a daily prayer was performed: skipped, in congregation, or alone.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    #[default]
    None,
    Jamaah,
    Munfarid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fasting {
    pub is_fasting: bool,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Prayers {
    pub subuh: PrayerStatus,
    pub dzuhur: PrayerStatus,
    pub ashar: PrayerStatus,
    pub maghrib: PrayerStatus,
    pub isya: PrayerStatus,
}

impl Prayers {
    pub fn slots(&self) -> [PrayerStatus; 5] {
        [self.subuh, self.dzuhur, self.ashar, self.maghrib, self.isya]
    }

    /// Number of the five daily prayers performed in congregation.
    pub fn jamaah_count(&self) -> usize {
        self.slots()
            .iter()
            .filter(|s| **s == PrayerStatus::Jamaah)
            .count()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IbadahWajib {
    pub tilawah_pages: u32,
    pub dhuha: bool,
    pub tarawih: bool,
    pub witir: bool,
    pub zakat: bool,
    pub jumat: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IbadahSunnah {
    pub iktikaf: bool,
    pub sedekah: bool,
    pub help_parents: bool,
    pub rawatib: bool,
    pub ceramah_islami: bool,
    pub shalat_idul_fitri: bool,
}

/// One journal entry per student per calendar day.
///
/// The backend sends entries with every field present, but rows hand-edited
/// in the sheet can drop sub-fields; `#[serde(default)]` throughout means a
/// missing boolean reads as false and a missing count as zero instead of
/// failing the whole record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalEntry {
    /// RFC 3339 timestamp as sent by the client; the calendar day is its
    /// date component.
    pub date: String,
    pub fasting: Fasting,
    pub prayers: Prayers,
    pub ibadah_wajib: IbadahWajib,
    pub ibadah_sunnah: IbadahSunnah,
    pub reflection: String,
}

impl JournalEntry {
    /// Day key for uniqueness: the timestamp truncated to its date component.
    pub fn day_key(&self) -> Result<NaiveDate, JournalValidationError> {
        self.date
            .get(..10)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .ok_or_else(|| JournalValidationError::InvalidDate(self.date.clone()))
    }

    pub fn validate(&self) -> Result<(), JournalValidationError> {
        self.day_key()?;
        if self.ibadah_wajib.tilawah_pages > QURAN_TOTAL_PAGES {
            return Err(JournalValidationError::TilawahOutOfRange(
                self.ibadah_wajib.tilawah_pages,
            ));
        }
        Ok(())
    }
}
