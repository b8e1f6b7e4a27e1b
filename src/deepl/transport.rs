//! Request transport: builds the authenticated HTTP request and hands back
//! the raw, unread response.

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use std::fmt;
use std::future::Future;
use tracing::{debug, trace};

use super::error::{ApiError, DecodeError};

/// Name of the form field used by [`AuthPlacement::FormField`].
pub const AUTH_KEY_FIELD: &str = "auth_key";

/// Where the authentication key travels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPlacement {
    /// `Authorization: DeepL-Auth-Key <key>`.
    #[default]
    Header,
    /// Legacy `auth_key` form/query parameter.
    FormField,
}

/// An authentication key. Its value never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: String,
    placement: AuthPlacement,
}

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            placement: AuthPlacement::Header,
        }
    }

    #[must_use]
    pub const fn with_placement(mut self, placement: AuthPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn placement(&self) -> AuthPlacement {
        self.placement
    }

    /// Free-plan keys carry a `:fx` suffix.
    pub fn is_free_key(&self) -> bool {
        self.key.ends_with(":fx")
    }

    fn header_value(&self) -> String {
        format!("DeepL-Auth-Key {}", self.key)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &"<redacted>")
            .field("placement", &self.placement)
            .finish()
    }
}

/// One outbound API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub credential: Credential,
}

impl ApiRequest {
    /// Method actually used on the wire.
    ///
    /// A form-field key must not end up in a URL, so such GET calls are sent
    /// as POST with a form body instead.
    pub fn wire_method(&self) -> Method {
        if self.method == Method::GET && self.credential.placement == AuthPlacement::FormField {
            Method::POST
        } else {
            self.method.clone()
        }
    }

    /// Parameters as they go on the wire, including a form-field credential.
    pub fn wire_params(&self) -> Vec<(&str, &str)> {
        let mut params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        if self.credential.placement == AuthPlacement::FormField {
            params.push((AUTH_KEY_FIELD, self.credential.key()));
        }
        params
    }
}

enum Body {
    Live(reqwest::Response),
    Buffered(Bytes),
}

/// Status code plus a body that has not been read yet.
///
/// Reading the body consumes the response, so it is read at most once and
/// the underlying connection is released when the value is dropped.
pub struct RawResponse {
    status: u16,
    body: Body,
}

impl RawResponse {
    /// A response whose body is already in memory.
    pub fn buffered(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: Body::Buffered(body.into()),
        }
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Reads the whole body.
    pub async fn bytes(self) -> Result<Bytes, DecodeError> {
        match self.body {
            Body::Live(response) => response.bytes().await.map_err(DecodeError::Read),
            Body::Buffered(bytes) => Ok(bytes),
        }
    }
}

impl From<reqwest::Response> for RawResponse {
    fn from(response: reqwest::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            body: Body::Live(response),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            Body::Live(_) => "live",
            Body::Buffered(_) => "buffered",
        };
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("body", &body)
            .finish()
    }
}

/// Something that can carry an [`ApiRequest`] to the service.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = request.wire_method();
        let params = request.wire_params();

        debug!(%method, url = %request.url, "sending request");
        trace!(
            params = ?params
                .iter()
                .map(|(name, _)| *name)
                .filter(|name| *name != AUTH_KEY_FIELD)
                .collect::<Vec<_>>(),
            "request parameters"
        );

        let mut builder = self.client.request(method.clone(), &request.url);

        if request.credential.placement == AuthPlacement::Header {
            builder = builder.header(AUTHORIZATION, request.credential.header_value());
        }

        builder = if method == Method::GET {
            builder.query(&params)
        } else {
            builder.form(&params)
        };

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            url: request.url.clone(),
            source,
        })?;

        debug!(status = response.status().as_u16(), "received response");
        Ok(RawResponse::from(response))
    }
}
