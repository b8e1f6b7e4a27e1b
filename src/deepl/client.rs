use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::options::{LanguageType, TranslateOptions};
use super::response::decode;
use super::transport::{ApiRequest, Credential, HttpTransport, Transport};
use super::types::{GlossaryLanguagePair, GlossaryLanguagePairs, Language, TranslationList, Usage};

pub const FREE_API_BASE: &str = "https://api-free.deepl.com/v2";
pub const PRO_API_BASE: &str = "https://api.deepl.com/v2";

/// Subscription tier; decides which host serves the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Free => FREE_API_BASE,
            Self::Pro => PRO_API_BASE,
        }
    }

    /// Guesses the plan from the key format (free keys end in `:fx`).
    pub fn for_credential(credential: &Credential) -> Self {
        if credential.is_free_key() {
            Self::Free
        } else {
            Self::Pro
        }
    }
}

/// Remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Translate,
    Usage,
    Languages,
    GlossaryLanguagePairs,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Translate => "/translate",
            Self::Usage => "/usage",
            Self::Languages => "/languages",
            Self::GlossaryLanguagePairs => "/glossary-language-pairs",
        }
    }

    /// HTTP method DeepL documents for the operation.
    pub fn method(self) -> Method {
        match self {
            Self::Translate => Method::POST,
            Self::Usage | Self::Languages | Self::GlossaryLanguagePairs => Method::GET,
        }
    }
}

/// Client for the DeepL v2 API.
#[derive(Debug, Clone)]
pub struct DeepLClient<T = HttpTransport> {
    transport: T,
    base_url: String,
    credential: Credential,
}

impl DeepLClient<HttpTransport> {
    pub fn new(plan: Plan, credential: Credential) -> Self {
        Self::with_transport(HttpTransport::new(), plan.base_url(), credential)
    }
}

impl<T: Transport + Sync> DeepLClient<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            credential,
        }
    }

    /// Points the client at a different base URL, e.g. a proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    /// Translates `text`, returning the translated segments in response order.
    ///
    /// Empty or whitespace-only text is rejected without contacting the service.
    pub async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<Vec<String>, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::EmptyInput);
        }

        let list: TranslationList = self
            .call(Endpoint::Translate, options.to_params(text))
            .await?;
        Ok(list.into_texts())
    }

    pub async fn usage(&self) -> Result<Usage, ApiError> {
        self.call(Endpoint::Usage, Vec::new()).await
    }

    pub async fn languages(&self, language_type: LanguageType) -> Result<Vec<Language>, ApiError> {
        let params = vec![("type".to_string(), language_type.as_str().to_string())];
        self.call(Endpoint::Languages, params).await
    }

    pub async fn glossary_language_pairs(&self) -> Result<Vec<GlossaryLanguagePair>, ApiError> {
        let pairs: GlossaryLanguagePairs = self
            .call(Endpoint::GlossaryLanguagePairs, Vec::new())
            .await?;
        Ok(pairs.supported_languages)
    }

    async fn call<R>(&self, endpoint: Endpoint, params: Vec<(String, String)>) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let request = ApiRequest {
            method: endpoint.method(),
            url: self.url(endpoint),
            params,
            credential: self.credential.clone(),
        };

        let response = self.transport.send(request).await?;
        debug!(?endpoint, status = response.status(), "decoding response");
        decode(response).await
    }
}
