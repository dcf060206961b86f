use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use log::LevelFilter;
use stories_core::{SearchSettings, API_ENDPOINT, DEFAULT_SEARCH_TERM};
use stories_engine::{EngineConfig, FetchSettings, KeyValueStore, MemoryStore};

use super::persistence::RonFileStore;

/// Hacker Stories - search Hacker News from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "hacker-stories")]
#[command(version)]
#[command(about = "Search Hacker News from the terminal", long_about = None)]
pub struct AppConfig {
    /// RON file holding the last search term
    #[arg(long, default_value = ".hacker_stories.ron")]
    pub store: PathBuf,

    /// Keep the search term in memory only; nothing is read from or written to disk
    #[arg(long)]
    pub in_memory: bool,

    /// Search endpoint; the search term is appended verbatim
    #[arg(long, default_value = API_ENDPOINT)]
    pub api_base: String,

    /// Term to search for when nothing is stored
    #[arg(long, default_value = DEFAULT_SEARCH_TERM)]
    pub default_term: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log file (the terminal is used by the UI)
    #[arg(long, default_value = "hacker_stories.log")]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        if self.in_memory {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(RonFileStore::open(self.store.clone()))
        }
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            api_base: self.api_base.clone(),
            default_term: self.default_term.clone(),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
            fetched_utc: Arc::new(|| Utc::now().to_rfc3339()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_algolia() {
        let config = AppConfig::try_parse_from(["hacker-stories"]).unwrap();

        assert_eq!(config.search_settings(), SearchSettings::default());
        assert_eq!(config.store, PathBuf::from(".hacker_stories.ron"));
        assert!(!config.in_memory);
        assert_eq!(config.log_level(), LevelFilter::Info);
        assert_eq!(
            config.engine_config().fetch.request_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "hacker-stories",
            "--api-base",
            "http://localhost:9000/search?query=",
            "--default-term",
            "rust",
            "--request-timeout-secs",
            "5",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.search_settings().default_term, "rust");
        assert_eq!(
            config.search_settings().api_base,
            "http://localhost:9000/search?query="
        );
        assert_eq!(
            config.engine_config().fetch.request_timeout,
            Duration::from_secs(5)
        );
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn store_file_is_written_unless_in_memory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("store.ron");
        let path_arg = path.to_str().unwrap();

        let config =
            AppConfig::try_parse_from(["hacker-stories", "--store", path_arg, "--in-memory"])
                .unwrap();
        let store = config.open_store();
        store.set("search", "rust").unwrap();
        assert_eq!(store.get("search").as_deref(), Some("rust"));
        assert!(!path.exists());

        let config = AppConfig::try_parse_from(["hacker-stories", "--store", path_arg]).unwrap();
        config.open_store().set("search", "go").unwrap();
        assert!(path.exists());
        assert_eq!(config.open_store().get("search").as_deref(), Some("go"));
    }
}
