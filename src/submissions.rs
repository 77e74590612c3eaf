use crate::models::Submission;
use crate::report;
use chrono::{Local, NaiveDateTime};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::{error, info};

/// Append-only contact log. Appends and the follow-up report run under one
/// lock so they never interleave within this process.
#[derive(Clone)]
pub struct SubmissionLog {
    path: PathBuf,
    writer: Arc<Mutex<()>>,
}

impl SubmissionLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Appends the submission stamped with the local clock and returns the
    /// timestamp written.
    pub async fn append(&self, submission: &Submission) -> std::io::Result<String> {
        let _guard = self.writer.lock().await;
        self.write_entry(Local::now().naive_local(), submission).await
    }

    /// Logs the submission, then re-aggregates the whole file for the
    /// console report. Only the append can fail.
    pub async fn record(&self, submission: &Submission) -> std::io::Result<String> {
        let _guard = self.writer.lock().await;
        let timestamp = match self.write_entry(Local::now().naive_local(), submission).await {
            Ok(timestamp) => timestamp,
            Err(err) => {
                error!(path = %self.path.display(), "failed to append submission: {err}");
                return Err(err);
            }
        };
        info!(%timestamp, subject = %submission.subject, "contact submission logged");
        report::report(&self.path).await;
        Ok(timestamp)
    }

    // Callers hold `writer`.
    async fn write_entry(
        &self,
        timestamp: NaiveDateTime,
        submission: &Submission,
    ) -> std::io::Result<String> {
        let timestamp = format_timestamp(timestamp);
        append_line(&self.path, &log_line(&timestamp, submission)).await?;
        Ok(timestamp)
    }
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `timestamp,name,email,phone,subject` with a trailing newline. Fields are
/// written verbatim, unquoted.
pub fn log_line(timestamp: &str, submission: &Submission) -> String {
    format!(
        "{timestamp},{},{},{},{}\n",
        submission.name, submission.email, submission.phone, submission.subject
    )
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn submission(name: &str, message: &str) -> Submission {
        Submission {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            subject: "Quote".to_string(),
            message: message.to_string(),
        }
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn log_line_drops_message() {
        let line = log_line("2024-01-01 10:00:00", &submission("Ann", "please call"));
        assert_eq!(line, "2024-01-01 10:00:00,Ann,ann@example.com,555-0100,Quote\n");
    }

    #[tokio::test]
    async fn first_append_creates_file_with_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contact_submissions.csv");
        let log = SubmissionLog::new(path.clone());

        log.append(&submission("Ann", "hello")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[tokio::test]
    async fn appends_keep_order_and_prior_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = SubmissionLog::new(path.clone());

        log.write_entry(at(1, 9), &submission("Ann", "a")).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        log.write_entry(at(1, 10), &submission("Bob", "b")).await.unwrap();
        log.write_entry(at(2, 11), &submission("Cara", "c")).await.unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(contents.starts_with(&first));
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "2024-01-01 09:00:00,Ann,ann@example.com,555-0100,Quote",
                "2024-01-01 10:00:00,Bob,bob@example.com,555-0100,Quote",
                "2024-01-02 11:00:00,Cara,cara@example.com,555-0100,Quote",
            ]
        );

        let days = report::daily_counts(&path).await.unwrap();
        let counts: Vec<_> = days.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![2, 1]);
    }

    #[tokio::test]
    async fn comma_in_message_still_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = SubmissionLog::new(path.clone());

        log.record(&submission("Ann", "hello, world, again"))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(!contents.contains("again"));
    }

    #[tokio::test]
    async fn record_survives_malformed_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "not,a,valid,row\n").unwrap();
        let log = SubmissionLog::new(path.clone());

        log.record(&submission("Ann", "x")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn append_fails_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("missing").join("log.csv"));
        assert!(log.record(&submission("Ann", "x")).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_records_each_land_whole() {
        const WRITERS: usize = 32;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = SubmissionLog::new(path.clone());

        let mut tasks = Vec::with_capacity(WRITERS);
        for i in 0..WRITERS {
            let log = log.clone();
            let entry = submission(&format!("Writer{i}"), "hi");
            tasks.push(tokio::spawn(async move { log.record(&entry).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), WRITERS);
        for line in &lines {
            assert_eq!(line.split(',').count(), 5, "{line}");
        }
        for i in 0..WRITERS {
            let name = format!(",Writer{i},");
            assert_eq!(lines.iter().filter(|l| l.contains(&name)).count(), 1);
        }
        let stamps: Vec<_> = lines.iter().map(|l| l.split(',').next().unwrap()).collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
