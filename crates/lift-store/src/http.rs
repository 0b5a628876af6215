//! HTTP backend for the reference CRUD collaborator.
//!
//! `POST {base}/simulation` and `POST {base}/elevator_request`, JSON bodies,
//! `{ "id": … }` replies.

use serde::Deserialize;

use crate::store::TrainingStore;
use crate::{RequestId, RequestRecord, SimulationId, SimulationRecord, StoreResult};

#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    pub base_url:     String,
    pub timeout_secs: u64,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url:     "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Blocking HTTP client for the training-data service.
#[derive(Debug, Clone)]
pub struct HttpStore {
    config: HttpStoreConfig,
    client: reqwest::blocking::Client,
}

impl HttpStore {
    pub fn new(config: HttpStoreConfig) -> StoreResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn post_for_id<T: serde::Serialize>(&self, path: &str, body: &T) -> StoreResult<u64> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let reply = self
            .client
            .post(url)
            .json(body)
            .send()?
            .error_for_status()?
            .json::<IdReply>()?;
        Ok(reply.id)
    }
}

impl TrainingStore for HttpStore {
    fn create_simulation(&mut self, record: &SimulationRecord) -> StoreResult<SimulationId> {
        self.post_for_id("simulation", record).map(SimulationId)
    }

    fn create_request(&mut self, record: &RequestRecord) -> StoreResult<RequestId> {
        self.post_for_id("elevator_request", record).map(RequestId)
    }
}

#[derive(Debug, Deserialize)]
struct IdReply {
    id: u64,
}
