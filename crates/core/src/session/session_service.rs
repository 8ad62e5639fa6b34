use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::session_model::Session;
use super::session_store::{Result, SessionStore};
use crate::models::Student;

/// Explicit session context handed to each screen at construction, replacing
/// ambient storage lookups. Lifecycle: `load` at screen entry, `login`/
/// `save`-style writes only on explicit user actions, `logout` on exit.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        SessionContext { store }
    }

    /// The logged-in student, if any. Missing or malformed stored state is
    /// "not logged in", never an error the screen has to handle.
    pub fn current_student(&self) -> Result<Option<Student>> {
        Ok(self.store.load()?.map(|s| s.student))
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }

    pub fn login(&self, student: Student) -> Result<()> {
        debug!("persisting session for nis {}", student.nis);
        self.store.save(&Session::new(student))
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()
    }

    /// Persist a locally edited start-of-Ramadhan preference back onto the
    /// cached snapshot. No-op when nobody is logged in.
    pub fn set_start_ramadhan_date(&self, date: NaiveDate) -> Result<()> {
        if let Some(mut session) = self.store.load()? {
            session.student.start_ramadhan_date = Some(date);
            self.store.save(&session)?;
        }
        Ok(())
    }

    /// Replace the cached student snapshot after a profile update succeeded
    /// on the backend.
    pub fn refresh_student(&self, student: Student) -> Result<()> {
        self.store.save(&Session::new(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::session_store::MemorySessionStore;

    fn student() -> Student {
        serde_json::from_str(
            r#"{"id":"1","name":"Ahmad","nis":"2024019","class":"9-A","gender":"male"}"#,
        )
        .unwrap()
    }

    fn context() -> SessionContext {
        SessionContext::new(Arc::new(MemorySessionStore::new()))
    }

    #[test]
    fn login_then_logout_lifecycle() {
        let ctx = context();
        assert!(!ctx.is_logged_in());

        ctx.login(student()).unwrap();
        assert!(ctx.is_logged_in());
        assert_eq!(ctx.current_student().unwrap().unwrap().id, "1");

        ctx.logout().unwrap();
        assert!(ctx.current_student().unwrap().is_none());
    }

    #[test]
    fn start_date_preference_sticks_to_the_snapshot() {
        let ctx = context();
        ctx.login(student()).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        ctx.set_start_ramadhan_date(date).unwrap();

        let cached = ctx.current_student().unwrap().unwrap();
        assert_eq!(cached.start_ramadhan_date, Some(date));
        assert_eq!(cached.start_date(), date);
    }

    #[test]
    fn setting_start_date_while_logged_out_is_a_no_op() {
        let ctx = context();
        ctx.set_start_ramadhan_date(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap())
            .unwrap();
        assert!(!ctx.is_logged_in());
    }
}
