use std::sync::Arc;

use board::{
    Job, SpreadsheetResponse,
    parse::parse_jobs,
    remote::{Fetch, FetchError, client, get_remote_sheet},
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use super::config::Config;

#[derive(Debug, Default)]
pub struct Sheet {
    pub fetch: Fetch<SpreadsheetResponse>,
    pub jobs: Vec<Job>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sheet {
    fn apply(&mut self, result: Result<SpreadsheetResponse, FetchError>) {
        let fetched = result.is_ok();

        self.fetch.finish(result);
        self.jobs = parse_jobs(self.fetch.data.as_ref());

        if fetched {
            self.updated_at = Some(Utc::now());
        }
    }
}

pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub sheet: RwLock<Sheet>,
    refreshing: Mutex<()>,
}

impl AppState {
    pub async fn new(config: Config) -> Arc<Self> {
        let state = Self::with_sheet(config, None);
        state.refresh().await;

        state
    }

    /// State seeded with an already loaded sheet, nothing is fetched.
    pub fn with_sheet(config: Config, sheet: Option<SpreadsheetResponse>) -> Arc<Self> {
        let mut initial = Sheet::default();
        if let Some(sheet) = sheet {
            initial.apply(Ok(sheet));
        }

        Arc::new(Self {
            config,
            client: client(),
            sheet: RwLock::new(initial),
            refreshing: Mutex::new(()),
        })
    }

    pub async fn refresh(&self) {
        let _guard = self.refreshing.lock().await;

        self.sheet.write().await.fetch.begin();

        info!("Fetching jobs...");
        let result = get_remote_sheet(&self.client, &self.config.sheet_url).await;

        let mut sheet = self.sheet.write().await;
        sheet.apply(result);
        info!("Loaded {} jobs", sheet.jobs.len());
    }
}
