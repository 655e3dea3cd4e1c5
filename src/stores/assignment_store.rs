use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use validator::Validate;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::AssignmentDefinition,
};

/// Read-only source of assignment definitions. Creation and editing live in
/// the surrounding system; the engine only ever fetches by slug.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn fetch_assignment(&self, slug: &str) -> AppResult<Option<AssignmentDefinition>>;
}

pub struct HttpAssignmentStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAssignmentStore {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.assignment_store_base_url.clone(),
        })
    }
}

#[async_trait]
impl AssignmentStore for HttpAssignmentStore {
    async fn fetch_assignment(&self, slug: &str) -> AppResult<Option<AssignmentDefinition>> {
        let url = format!("{}/api/assignments/{}", self.base_url, slug);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let definition: AssignmentDefinition =
            response.error_for_status()?.json().await?;

        // Malformed definitions are rejected here, before they can reach
        // the session engine.
        definition.validate()?;

        log::info!("Fetched assignment '{}'", definition.slug);
        Ok(Some(definition))
    }
}
