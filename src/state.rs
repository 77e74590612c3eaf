use crate::submissions::SubmissionLog;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub static_dir: Arc<PathBuf>,
    pub submissions: SubmissionLog,
}

impl AppState {
    pub fn new(log_path: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            static_dir: Arc::new(static_dir),
            submissions: SubmissionLog::new(log_path),
        }
    }
}
