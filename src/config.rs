// Client configuration, credentials and per-call context
use crate::error::ClientError;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    // Full URL of the XML web service endpoint
    pub base_url: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    // Ask for gzip-compressed replies and transparently inflate them
    pub gzip: bool,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: 30000,
            connect_timeout_ms: 10000,
            gzip: true,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::ConfigError("base_url is empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::ConfigError(format!(
                "base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ClientError::ConfigError(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

// Agency credentials, written into every protocol header
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub agency_id: i64,
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(agency_id: i64, user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            agency_id,
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("agency_id", &self.agency_id)
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .finish()
    }
}

// Carried with each call and handed to the transport untouched
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub correlation_id: String,
    pub timeout: Option<Duration>,
}

impl CallContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", false; "empty url")]
    #[test_case("ftp://example.com", false; "wrong scheme")]
    #[test_case("https://agency.xml.goglobal.travel/xmlwebservice.asmx", true; "https url")]
    #[test_case("http://localhost:8080/ws", true; "http url")]
    fn test_validate_base_url(url: &str, valid: bool) {
        assert_eq!(ClientConfig::new(url).validate().is_ok(), valid);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..ClientConfig::new("https://example.com")
        };
        assert!(matches!(config.validate(), Err(ClientError::ConfigError(_))));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new(1234, "agent", "s3cret");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("agent"));
        assert!(!rendered.contains("s3cret"));
    }
}
