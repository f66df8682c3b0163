//! reqwest implementation of [`UpstreamClient`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use roster_core::{CollectionSnapshot, EmployeeCreateRequest, EmployeeRecord};

use crate::client::{DeleteAck, UpstreamClient};
use crate::config::UpstreamConfig;
use crate::envelope::{decode_created, decode_delete, decode_list, decode_single, DeleteByNameBody};
use crate::errors::{config_error, create_failed, transport_error, Result};

const EMPLOYEE_SEGMENT: &str = "employee";

/// HTTP client for the upstream employee provider.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    base_url: Url,
}

impl HttpUpstreamClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// `Config` when the configuration is invalid or the TLS backend cannot
    /// be initialised.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| config_error(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/employee` or `{base}/employee/{id}`, with `id` encoded as one
    /// path segment.
    fn employee_url(&self, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| config_error("upstream base_url cannot carry a path"))?;
            segments.pop_if_empty().push(EMPLOYEE_SEGMENT);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Send one request and read the whole body.
    async fn send(&self, op: &str, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(op, error = %e, "upstream call failed");
            transport_error(op, &e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(op, &e))?;

        tracing::debug!(op, %status, body_len = body.len(), "upstream responded");
        Ok((status, body))
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn list_all(&self) -> Result<CollectionSnapshot> {
        const OP: &str = "upstream_list_all";
        let url = self.employee_url(None)?;
        tracing::debug!(op = OP, %url, "fetching employee collection");

        let (status, body) = self.send(OP, self.client.get(url)).await?;
        decode_list(OP, status, &body)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<EmployeeRecord>> {
        const OP: &str = "upstream_get_by_id";
        let url = self.employee_url(Some(id))?;
        tracing::debug!(op = OP, %url, employee_id = id, "fetching employee");

        let (status, body) = self.send(OP, self.client.get(url)).await?;
        let record = decode_single(OP, status, &body)?;
        if record.is_none() {
            tracing::warn!(op = OP, employee_id = id, "no employee found");
        }
        Ok(record)
    }

    async fn create(&self, request: &EmployeeCreateRequest) -> Result<EmployeeRecord> {
        const OP: &str = "upstream_create";
        let url = self.employee_url(None)?;
        tracing::debug!(op = OP, %url, employee_name = %request.name, "creating employee");

        let (status, body) = self
            .send(OP, self.client.post(url).json(request))
            .await
            .map_err(|e| create_failed(e.message().to_string()))?;
        let record = decode_created(status, &body)?;

        tracing::debug!(op = OP, employee_id = %record.id, "employee created");
        Ok(record)
    }

    async fn delete_by_name(&self, name: &str) -> Result<DeleteAck> {
        const OP: &str = "upstream_delete_by_name";
        let url = self.employee_url(None)?;
        tracing::debug!(op = OP, %url, employee_name = name, "deleting employee by name");

        let body = DeleteByNameBody {
            name: name.to_string(),
        };
        let (status, body) = self
            .send(OP, self.client.delete(url).json(&body))
            .await?;
        decode_delete(OP, status, &body)
    }
}
