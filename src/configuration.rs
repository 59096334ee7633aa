use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::time::Duration;
use url::Url;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub endpoint: EndpointSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EndpointSettings {
    pub url: String,
    // Absent means the request runs until the transport gives up on its own
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl EndpointSettings {
    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_telemetry_name")]
    pub name: String,
    #[serde(default = "default_env_filter")]
    pub env_filter: String,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            name: default_telemetry_name(),
            env_filter: default_env_filter(),
        }
    }
}

fn default_telemetry_name() -> String {
    env!("CARGO_PKG_NAME").to_owned()
}

fn default_env_filter() -> String {
    "info".to_owned()
}

// Read top-level configuration file with compatible extension YAML,JSON...
// Values can be overridden through environment variables such as APP__ENDPOINT__URL
pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::EndpointSettings;
    use claims::{assert_none, assert_ok, assert_some_eq};
    use std::time::Duration;

    #[test]
    fn endpoint_url_parses_when_absolute() {
        let settings = EndpointSettings {
            url: "https://forms.example.com/api/contact-us/".to_owned(),
            timeout_milliseconds: None,
        };
        let url = assert_ok!(settings.parsed_url());
        assert_eq!("forms.example.com", url.host_str().unwrap());
    }

    #[test]
    fn endpoint_without_timeout_has_none() {
        let settings = EndpointSettings {
            url: "http://127.0.0.1:8080/".to_owned(),
            timeout_milliseconds: None,
        };
        assert_none!(settings.timeout());
    }

    #[test]
    fn endpoint_timeout_is_milliseconds() {
        let settings = EndpointSettings {
            url: "http://127.0.0.1:8080/".to_owned(),
            timeout_milliseconds: Some(1500),
        };
        assert_some_eq!(settings.timeout(), Duration::from_millis(1500));
    }
}
