use chrono::NaiveDate;
use serde::Deserialize;

/// One contact-form fill. Every field is required; `message` is accepted
/// but never written to the log.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct CompletedProject {
    pub name: &'static str,
    pub location: &'static str,
    pub client: &'static str,
    pub year: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone)]
pub struct OngoingProject {
    pub name: &'static str,
    pub location: &'static str,
    pub client: &'static str,
    /// Percent complete, 0..=100.
    pub status: u8,
    pub image: &'static str,
}
