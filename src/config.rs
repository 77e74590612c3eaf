use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_PATH: &str = "contact_submissions.csv";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(),
            log_path: resolve_log_path(),
            static_dir: resolve_static_dir(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn resolve_log_path() -> PathBuf {
    env::var("CONTACT_LOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH))
}

pub fn resolve_static_dir() -> PathBuf {
    env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR))
}
