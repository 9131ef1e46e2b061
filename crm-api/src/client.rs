use std::marker::PhantomData;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::domain::{Activity, Contact, CrmRecord, Deal};
use crate::CrmUrl;

/// HTTP client for the CRM service.
///
/// Every call is a single request/response pair. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct CrmClient {
    http: reqwest::Client,
    base_url: CrmUrl,
    token: Option<String>,
}

impl CrmClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CrmError> {
        let base_url = CrmUrl::parse(base_url)?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CrmError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &CrmUrl {
        &self.base_url
    }

    /// CRUD handle for the given record type.
    pub fn resource<T: CrmRecord>(&self) -> Resource<'_, T> {
        Resource {
            client: self,
            _record: PhantomData,
        }
    }

    pub fn activities(&self) -> Resource<'_, Activity> {
        self.resource()
    }

    pub fn contacts(&self) -> Resource<'_, Contact> {
        self.resource()
    }

    pub fn deals(&self) -> Resource<'_, Deal> {
        self.resource()
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response, CrmError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let resp = request
            .send()
            .await
            .map_err(|e| CrmError::Request(format!("{}: {}", call_name, e)))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CrmError::Unauthorized),
            StatusCode::NOT_FOUND => Err(CrmError::NotFound(call_name.to_string())),
            status if !status.is_success() => Err(CrmError::Status {
                call: call_name.to_string(),
                status: status.as_u16(),
            }),
            _ => Ok(resp),
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, CrmError> {
        let resp = self.send(request, call_name).await?;
        resp.json::<T>().await.map_err(|e| {
            CrmError::Parsing(format!("Failed to parse {} response: {}", call_name, e))
        })
    }
}

/// `get_all`/`create`/`update`/`delete` for one resource of the service.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a, T> {
    client: &'a CrmClient,
    _record: PhantomData<T>,
}

impl<T: CrmRecord> Resource<'_, T> {
    fn collection_url(&self) -> CrmUrl {
        self.client.base_url.append_path(T::PATH)
    }

    fn record_url(&self, id: i64) -> CrmUrl {
        self.collection_url().with_id(id)
    }

    #[instrument(name = "Resource::get_all", skip(self), fields(resource = T::PATH))]
    pub async fn get_all(&self) -> Result<Vec<T>, CrmError> {
        let call_name = format!("GET /{}", T::PATH);
        let request = self.client.http.get(self.collection_url().as_ref());
        self.client.send_json(request, &call_name).await
    }

    #[instrument(name = "Resource::create", skip(self, payload), fields(resource = T::PATH))]
    pub async fn create(&self, payload: &T::Payload) -> Result<T, CrmError> {
        let call_name = format!("POST /{}", T::PATH);
        let request = self
            .client
            .http
            .post(self.collection_url().as_ref())
            .json(payload);
        self.client.send_json(request, &call_name).await
    }

    #[instrument(name = "Resource::update", skip(self, payload), fields(resource = T::PATH))]
    pub async fn update(&self, id: i64, payload: &T::Payload) -> Result<T, CrmError> {
        let call_name = format!("PUT /{}/{}", T::PATH, id);
        let request = self
            .client
            .http
            .put(self.record_url(id).as_ref())
            .json(payload);
        self.client.send_json(request, &call_name).await
    }

    #[instrument(name = "Resource::delete", skip(self), fields(resource = T::PATH))]
    pub async fn delete(&self, id: i64) -> Result<(), CrmError> {
        let call_name = format!("DELETE /{}/{}", T::PATH, id);
        let request = self.client.http.delete(self.record_url(id).as_ref());
        self.client.send(request, &call_name).await?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("Unauthorized, check the configured API token")]
    Unauthorized,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{call} returned status {status}")]
    Status { call: String, status: u16 },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{0}")]
    Parsing(String),
}
