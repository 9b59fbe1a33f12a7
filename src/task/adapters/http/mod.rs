//! HTTP adapter for the remote task service.
//!
//! Implements [`TaskRepository`] against the REST surface at
//! `{base_url}/tasks`, translating transport failures, response status
//! classes, and malformed bodies into the repository error taxonomy.

mod config;
mod models;

pub use config::{API_BASE_URL_VAR, HTTP_TIMEOUT_VAR, HttpRepositoryConfig};
pub use models::{NewTaskRecord, TaskPatchRecord, TaskRecord};

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while constructing the HTTP adapter.
#[derive(Debug, Error)]
pub enum HttpRepositoryError {
    /// The `TASKFLOW_API_BASE_URL` environment variable is unset or empty.
    #[error("TASKFLOW_API_BASE_URL is not set")]
    MissingBaseUrl,

    /// The `TASKFLOW_HTTP_TIMEOUT_SECS` environment variable holds a value
    /// that is not a whole number of seconds.
    #[error("invalid TASKFLOW_HTTP_TIMEOUT_SECS value '{0}'")]
    InvalidTimeout(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Task repository backed by the remote REST service.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    client: Client,
    base_url: String,
}

impl HttpTaskRepository {
    /// Creates an adapter from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpRepositoryError::ClientBuild`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: &HttpRepositoryConfig) -> Result<Self, HttpRepositoryError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HttpRepositoryError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
        })
    }

    /// Creates an adapter from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpRepositoryError`] when the environment is incomplete
    /// or the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self, HttpRepositoryError> {
        Self::new(&HttpRepositoryConfig::from_env()?)
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn record_url(&self, id: &TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>> {
        let url = self.collection_url();
        debug!(url = %url, "listing tasks");
        let mut request = self.client.get(&url);
        if let Some(filter) = status {
            request = request.query(&[("status", filter.as_str())]);
        }
        let response = send(request).await?;
        if !response.status().is_success() {
            return Err(error_for(None, response).await);
        }
        let records = response
            .json::<Vec<TaskRecord>>()
            .await
            .map_err(TaskRepositoryError::decode)?;
        records.into_iter().map(TaskRecord::into_task).collect()
    }

    async fn get(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let url = self.record_url(id);
        debug!(url = %url, "fetching task");
        let response = send(self.client.get(&url)).await?;
        if !response.status().is_success() {
            return Err(error_for(Some(id), response).await);
        }
        decode_task(response).await
    }

    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let url = self.collection_url();
        debug!(url = %url, "creating task");
        let payload = NewTaskRecord::from(&new_task);
        let response = send(self.client.post(&url).json(&payload)).await?;
        if !response.status().is_success() {
            return Err(error_for(None, response).await);
        }
        decode_task(response).await
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let url = self.record_url(id);
        debug!(url = %url, "updating task");
        let payload = TaskPatchRecord::from(&patch);
        let response = send(self.client.put(&url).json(&payload)).await?;
        if !response.status().is_success() {
            return Err(error_for(Some(id), response).await);
        }
        decode_task(response).await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let url = self.record_url(id);
        debug!(url = %url, "deleting task");
        let response = send(self.client.delete(&url)).await?;
        if !response.status().is_success() {
            return Err(error_for(Some(id), response).await);
        }
        Ok(())
    }
}

/// Issues a request, surfacing transport failures as [`TaskRepositoryError::Network`].
async fn send(request: reqwest::RequestBuilder) -> TaskRepositoryResult<Response> {
    request.send().await.map_err(TaskRepositoryError::network)
}

/// Decodes a single-task response body through the validating gate.
async fn decode_task(response: Response) -> TaskRepositoryResult<Task> {
    let record = response
        .json::<TaskRecord>()
        .await
        .map_err(TaskRepositoryError::decode)?;
    record.into_task()
}

/// Maps a non-2xx response onto the repository error taxonomy.
///
/// 404 becomes [`TaskRepositoryError::NotFound`] when the request named a
/// record, 422 becomes [`TaskRepositoryError::Validation`] with the
/// response body as detail, and everything else is surfaced as
/// [`TaskRepositoryError::Server`].
async fn error_for(id: Option<&TaskId>, response: Response) -> TaskRepositoryError {
    let status = response.status();
    warn!(status = status.as_u16(), "task service error response");
    if status == StatusCode::NOT_FOUND {
        if let Some(missing) = id {
            return TaskRepositoryError::NotFound(missing.clone());
        }
    }
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let body = response.text().await.unwrap_or_default();
        let detail = if body.trim().is_empty() {
            "payload rejected by the task service".to_owned()
        } else {
            body
        };
        return TaskRepositoryError::Validation(detail);
    }
    TaskRepositoryError::Server {
        status: status.as_u16(),
    }
}
