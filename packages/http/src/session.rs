//! Authenticated session against an iRODS HTTP API server.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use url::Url;

use avusync_catalog::{Avu, Catalog, CatalogError, ObjectKind, ObjectRef};

use crate::types::{self, MetadataOperation};
use crate::Error;

/// A logged-in session. Implements [`Catalog`].
///
/// The bearer token is dropped by [`close`](IrodsHttpSession::close) or, on
/// any other exit path, by `Drop`. The release is logged exactly once.
pub struct IrodsHttpSession {
    client: Client,
    base_url: Url,
    user: String,
    token: Option<String>,
}

impl IrodsHttpSession {
    /// Authenticate `user` against the HTTP API at `api_url` using a client
    /// with a 30 second timeout.
    pub fn open(api_url: &str, user: &str, password: &str) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Self::with_client(client, api_url, user, password)
    }

    /// Authenticate with a caller-supplied reqwest client.
    pub fn with_client(
        client: Client,
        api_url: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, Error> {
        let base_url = Self::parse_base_url(api_url)?;
        let url = base_url.join("authenticate")?;

        log::debug!("Authenticating {} at {}...", user, base_url);
        let response = client
            .post(url)
            .basic_auth(user, Some(password))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authentication {
                user: user.to_string(),
                status: status.as_u16(),
            });
        }

        let token = response.text()?.trim().to_string();
        log::info!("Opened iRODS session for {} at {}", user, base_url);

        Ok(Self {
            client,
            base_url,
            user: user.to_string(),
            token: Some(token),
        })
    }

    /// Parse `api_url`, making sure it ends in `/` so endpoint names join
    /// underneath it instead of replacing its last segment.
    fn parse_base_url(api_url: &str) -> Result<Url, Error> {
        let mut base_url = Url::parse(api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                message: format!("{} cannot be used as a base URL", api_url),
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn is_open(&self) -> bool {
        self.token.is_some()
    }

    /// End the session.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.token.take().is_some() {
            log::info!("Closed iRODS session for {}", self.user);
        }
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, CatalogError> {
        match &self.token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(CatalogError::transport("Session is closed")),
        }
    }

    fn endpoint_url(&self, kind: ObjectKind) -> Result<Url, CatalogError> {
        self.base_url
            .join(types::endpoint(kind))
            .map_err(|e| CatalogError::from(Error::from(e)))
    }

    fn send(request: RequestBuilder) -> Result<(u16, String), CatalogError> {
        let response = request
            .send()
            .map_err(|e| CatalogError::transport(format!("HTTP request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CatalogError::transport(format!("Failed to read response body: {}", e)))?;
        Ok((status, body))
    }

    fn stat(&mut self, kind: ObjectKind, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        let url = self.endpoint_url(kind)?;
        let request = self
            .authorized(self.client.get(url))?
            .query(&[("op", "stat"), ("lpath", path)]);

        let (status, body) = Self::send(request)?;
        let exists = types::interpret_stat(kind, status, &body)?;
        log::trace!("stat {} {}: exists={}", kind, path, exists);

        Ok(exists.then(|| ObjectRef {
            kind,
            path: path.to_string(),
        }))
    }
}

impl Catalog for IrodsHttpSession {
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.stat(ObjectKind::DataObject, path)
    }

    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.stat(ObjectKind::Collection, path)
    }

    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError> {
        let url = self.endpoint_url(object.kind)?;
        let operations = serde_json::to_string(&[MetadataOperation::add(avu)])
            .map_err(|e| CatalogError::from(Error::from(e)))?;

        let request = self.authorized(self.client.post(url))?.form(&[
            ("op", "modify_metadata"),
            ("lpath", object.path.as_str()),
            ("operations", operations.as_str()),
        ]);

        let (status, body) = Self::send(request)?;
        types::interpret_modify(status, &body)
    }
}

impl Drop for IrodsHttpSession {
    fn drop(&mut self) {
        self.release();
    }
}
