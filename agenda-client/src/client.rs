use std::fmt;
use std::sync::Arc;

use chrono::{Local, Offset};
use reqwest::Method;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::model::{MeetingSettings, QueuedItem};

const SETTINGS_RESOURCE: &str = "settings";
const QUEUED_ITEMS_RESOURCE: &str = "queuedItems";
const JSON_MIME: &str = "application/json";

const REQUESTED_WITH: &str = "x-requested-with";
const TIMEZONE_OFFSET: &str = "x-timezone-offset";
const CSRF_TOKEN: &str = "x-csrf-token";

/// Supplier of the host's authentication headers.
///
/// Called once per request so that rotated credentials are picked up.
pub trait HeaderSource: Send + Sync {
    fn auth_headers(&self) -> Result<HeaderMap, ClientError>;
}

/// A fixed set of headers, cloned into every request.
#[derive(Debug, Clone, Default)]
pub struct StaticHeaders(HeaderMap);

impl StaticHeaders {
    pub fn new(headers: HeaderMap) -> Self {
        Self(headers)
    }

    /// Add one header, validating its name and value.
    pub fn with_header(
        mut self,
        name: &str,
        value: &str,
    ) -> Result<Self, ClientError> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            ClientError::InvalidHeader {
                message: format!("{name}: {err}"),
            }
        })?;
        let value = header_value(value, false)?;
        self.0.insert(name, value);
        Ok(self)
    }
}

impl HeaderSource for StaticHeaders {
    fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        Ok(self.0.clone())
    }
}

/// Bearer token plus optional CSRF token, kept out of logs.
#[derive(Debug, Clone)]
pub struct TokenHeaders {
    token: SecretString,
    csrf: Option<SecretString>,
}

impl TokenHeaders {
    pub fn new(token: SecretString) -> Self {
        Self { token, csrf: None }
    }

    pub fn with_csrf(mut self, csrf: SecretString) -> Self {
        self.csrf = Some(csrf);
        self
    }
}

impl HeaderSource for TokenHeaders {
    fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.token.expose_secret());
        headers.insert(AUTHORIZATION, header_value(&bearer, true)?);
        if let Some(csrf) = &self.csrf {
            headers.insert(
                HeaderName::from_static(CSRF_TOKEN),
                header_value(csrf.expose_secret(), true)?,
            );
        }
        Ok(headers)
    }
}

fn header_value(
    value: &str,
    sensitive: bool,
) -> Result<HeaderValue, ClientError> {
    let mut value = HeaderValue::from_str(value).map_err(|err| {
        ClientError::InvalidHeader {
            message: err.to_string(),
        }
    })?;
    value.set_sensitive(sensitive);
    Ok(value)
}

/// Authenticated client for the per-channel settings and queue resources.
#[derive(Clone)]
pub struct SettingsClient {
    http: reqwest::Client,
    config: ClientConfig,
    headers: Arc<dyn HeaderSource>,
}

impl fmt::Debug for SettingsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsClient")
            .field("api_base", &self.config.api_base().as_str())
            .field("timeout", &self.config.timeout())
            .finish()
    }
}

impl SettingsClient {
    pub fn new(
        config: ClientConfig,
        headers: Arc<dyn HeaderSource>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
            headers,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the meeting settings of a channel.
    pub async fn fetch_settings(
        &self,
        channel_id: &str,
    ) -> Result<MeetingSettings, ClientError> {
        let url = self
            .config
            .resource_url(SETTINGS_RESOURCE, Some(channel_id));
        let body = self.send(Method::GET, url, None).await?;
        decode(&body)
    }

    /// Persist meeting settings.
    ///
    /// Returns the record echoed by the server, or the submitted record
    /// when the server only acknowledges the write.
    pub async fn save_settings(
        &self,
        settings: &MeetingSettings,
    ) -> Result<MeetingSettings, ClientError> {
        let url = self.config.resource_url(SETTINGS_RESOURCE, None);
        let payload = serde_json::to_vec(settings)?;
        let body = self.send(Method::POST, url, Some(payload)).await?;

        match serde_json::from_slice::<MeetingSettings>(&body) {
            Ok(saved) => Ok(saved),
            Err(err) => {
                log::debug!(
                    "settings save for {} returned no record: {err}",
                    settings.channel_id
                );
                Ok(settings.clone())
            },
        }
    }

    /// Fetch the queued agenda items of a channel.
    pub async fn fetch_queued_items(
        &self,
        channel_id: &str,
    ) -> Result<Vec<QueuedItem>, ClientError> {
        let url = self
            .config
            .resource_url(QUEUED_ITEMS_RESOURCE, Some(channel_id));
        let body = self.send(Method::GET, url, None).await?;
        decode(&body)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ClientError> {
        let target = url.to_string();
        let mut headers = self.headers.auth_headers()?;
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
        headers.insert(
            HeaderName::from_static(REQUESTED_WITH),
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(
            HeaderName::from_static(TIMEZONE_OFFSET),
            HeaderValue::from(timezone_offset()),
        );

        let mut request = self.http.request(method.clone(), url);
        if let Some(payload) = payload {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
            request = request.body(payload);
        }

        log::debug!("agenda request {method} {target}");
        let response = request.headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::debug!("agenda request {method} {target} failed: {status}");
            return Err(ClientError::Remote {
                status_code: status.as_u16(),
                message,
                url: target,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    Ok(serde_json::from_slice(body)?)
}

/// Minutes to add to local time to reach UTC.
fn timezone_offset() -> i32 {
    let local_minus_utc = Local::now().offset().fix().local_minus_utc();
    -(local_minus_utc / 60)
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use secrecy::SecretString;

    use super::{CSRF_TOKEN, HeaderSource, StaticHeaders, TokenHeaders};
    use crate::errors::ClientError;

    #[test]
    fn given_token_headers_when_built_then_values_are_sensitive() {
        let source = TokenHeaders::new(SecretString::from("abc"))
            .with_csrf(SecretString::from("xyz"));

        let headers = source.auth_headers().expect("valid headers");

        let auth = headers.get(AUTHORIZATION).expect("authorization");
        assert_eq!(auth.to_str().expect("ascii"), "Bearer abc");
        assert!(auth.is_sensitive());
        assert!(headers.get(CSRF_TOKEN).expect("csrf").is_sensitive());
    }

    #[test]
    fn given_debug_output_when_formatted_then_token_is_redacted() {
        let source = TokenHeaders::new(SecretString::from("abc"));

        assert!(!format!("{source:?}").contains("abc"));
    }

    #[test]
    fn given_invalid_header_when_added_then_typed_error_is_returned() {
        let result = StaticHeaders::default().with_header("bad name", "v");

        assert!(matches!(result, Err(ClientError::InvalidHeader { .. })));
    }
}
