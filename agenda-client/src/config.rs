use std::time::Duration;

use url::Url;

use crate::errors::ClientError;

/// Location of the server plugin's API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: Url,
    plugin_id: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config for `server_url` and the plugin registered as
    /// `plugin_id`. Requests have no timeout until one is set.
    pub fn new(
        server_url: &str,
        plugin_id: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let server_url = Url::parse(server_url)?;
        if server_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        Ok(Self {
            server_url,
            plugin_id: plugin_id.into(),
            timeout: None,
        })
    }

    /// Apply a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Return `{server}/plugins/{plugin_id}/api/v1`.
    pub fn api_base(&self) -> Url {
        let mut url = self.server_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["plugins", self.plugin_id.as_str(), "api", "v1"]);
        }
        url
    }

    /// Return the URL of an API resource, scoped to a channel if given.
    pub(crate) fn resource_url(
        &self,
        resource: &str,
        channel_id: Option<&str>,
    ) -> Url {
        let mut url = self.api_base();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(resource);
        }
        if let Some(channel_id) = channel_id {
            url.query_pairs_mut().append_pair("channelId", channel_id);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ClientConfig;
    use crate::errors::ClientError;

    #[test]
    fn given_server_root_when_base_requested_then_plugin_path_is_appended() {
        let config = ClientConfig::new("http://chat.local:8065/", "agenda")
            .expect("valid url");

        assert_eq!(
            config.api_base().as_str(),
            "http://chat.local:8065/plugins/agenda/api/v1"
        );
    }

    #[test]
    fn given_server_subpath_when_resource_requested_then_subpath_is_kept() {
        let config = ClientConfig::new("https://example.com/chat", "agenda")
            .expect("valid url");

        let url = config.resource_url("settings", Some("a b&c"));

        assert_eq!(
            url.as_str(),
            "https://example.com/chat/plugins/agenda/api/v1/settings?channelId=a+b%26c"
        );
    }

    #[test]
    fn given_new_config_when_inspected_then_timeout_is_disabled() {
        let config =
            ClientConfig::new("http://localhost", "agenda").expect("valid url");

        assert_eq!(config.timeout(), None);
        assert_eq!(
            config.with_timeout(Duration::from_secs(5)).timeout(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn given_invalid_server_url_when_built_then_error_is_returned() {
        assert!(matches!(
            ClientConfig::new("not a url", "agenda"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("mailto:ops@example.com", "agenda"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
