//! Data sources for the attendee list.
//!
//! A [`DataSource`] answers one [`PageRequest`] with one [`ResultPage`].
//! [`HttpDataSource`] talks to the remote list endpoint:
//! `GET <endpoint>?pageIndex=<n>[&query=<text>]`.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;
use uuid::Uuid;

use crate::api::{ListResponse, PageRequest};
use crate::domain::{Record, ResultPage};
use crate::error::{FetchError, FetchResult};

pub trait DataSource: Send + Sync + 'static {
    type Record: Record + Send + 'static;

    fn fetch(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = FetchResult<ResultPage<Self::Record>>> + Send;
}

/// Error body some list endpoints return alongside a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for a paginated, filterable list endpoint.
pub struct HttpDataSource<T> {
    client: Client,
    endpoint: Url,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpDataSource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> HttpDataSource<T> {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: Url, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(endpoint = %endpoint, "List data source initialized");

        Ok(Self {
            client,
            endpoint,
            _record: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl<T> DataSource for HttpDataSource<T>
where
    T: DeserializeOwned + Record + Send + 'static,
{
    type Record = T;

    #[instrument(skip(self), fields(request_id = tracing::field::Empty))]
    async fn fetch(&self, request: PageRequest) -> FetchResult<ResultPage<T>> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        debug!(url = %self.endpoint, "List request");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .header("x-request-id", &request_id)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let payload: ListResponse<T> =
                serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(payload.into())
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());

            Err(FetchError::Status { status, message })
        }
    }
}
