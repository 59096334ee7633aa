use claims::{assert_err, assert_none, assert_ok, assert_some_eq};
use contact_form_rs::configuration::get_configuration;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

// A YAML settings file with a unique name, deleted when dropped
struct SettingsFile {
    stem: PathBuf,
}

impl SettingsFile {
    fn new(contents: &str) -> Self {
        let directory = std::env::temp_dir();
        let stem = directory.join(format!("contact-form-rs-{}", Uuid::now_v7()));
        std::fs::write(stem.with_extension("yaml"), contents)
            .expect("Failed to write settings file");
        Self { stem }
    }

    // `config` resolves the extension itself
    fn name(&self) -> &str {
        self.stem.to_str().unwrap()
    }

    fn path(&self) -> PathBuf {
        self.stem.with_extension("yaml")
    }
}

impl Drop for SettingsFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(self.path());
    }
}

#[test]
fn reads_endpoint_and_defaults_telemetry() {
    let file = SettingsFile::new(
        r#"
endpoint:
  url: "https://forms.example.com/api/contact-us/"
"#,
    );
    let settings = assert_ok!(get_configuration(file.name()));
    assert_eq!("https://forms.example.com/api/contact-us/", settings.endpoint.url);
    assert_none!(settings.endpoint.timeout());
    assert_eq!("contact-form-rs", settings.telemetry.name);
    assert_eq!("info", settings.telemetry.env_filter);
}

#[test]
fn reads_timeout_given_as_string() {
    let file = SettingsFile::new(
        r#"
endpoint:
  url: "http://127.0.0.1:8000/api/contact-us/"
  timeout_milliseconds: "2500"
telemetry:
  name: "contact-form-test"
  env_filter: "debug"
"#,
    );
    let settings = assert_ok!(get_configuration(file.name()));
    assert_some_eq!(settings.endpoint.timeout(), Duration::from_millis(2500));
    assert_eq!("contact-form-test", settings.telemetry.name);
    assert_eq!("debug", settings.telemetry.env_filter);
}

#[test]
fn missing_endpoint_is_an_error() {
    let file = SettingsFile::new(
        r#"
telemetry:
  name: "contact-form-test"
"#,
    );
    assert_err!(get_configuration(file.name()));
}

#[test]
fn missing_file_is_an_error() {
    assert_err!(get_configuration("this-settings-file-does-not-exist"));
}

#[test]
fn settings_file_is_removed_on_drop() {
    let file = SettingsFile::new("endpoint:\n  url: \"http://127.0.0.1:8000/\"\n");
    let path = file.path();
    assert!(path.exists());
    drop(file);
    assert!(!path.exists());
}
