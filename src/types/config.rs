use crate::admin::DEFAULT_PASSWORD;
use crate::error::DonorscoreError;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_STORAGE_PATH: &str = ".donorscore/storage.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonorscoreConfig {
    pub storage: Option<StorageConfig>,
    pub share: Option<ShareConfig>,
    pub admin: Option<AdminConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub password: Option<String>,
}

impl DonorscoreConfig {
    pub fn storage_path(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.path.as_deref())
            .unwrap_or(DEFAULT_STORAGE_PATH)
    }

    pub fn base_url(&self) -> &str {
        self.share
            .as_ref()
            .and_then(|share| share.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn admin_password(&self) -> &str {
        self.admin
            .as_ref()
            .and_then(|admin| admin.password.as_deref())
            .unwrap_or(DEFAULT_PASSWORD)
    }

    pub fn validate(&self) -> Result<(), DonorscoreError> {
        if self.storage_path().trim().is_empty() {
            return Err(DonorscoreError::ConfigParse(
                "storage.path must not be empty".to_string(),
            ));
        }

        let base_url = self.base_url();
        let parsed = Url::parse(base_url).map_err(|e| {
            DonorscoreError::ConfigParse(format!("share.base_url is not a valid url: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DonorscoreError::ConfigParse(format!(
                "share.base_url must use http or https: {base_url}"
            )));
        }

        if self.admin_password().is_empty() {
            return Err(DonorscoreError::ConfigParse(
                "admin.password must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: DonorscoreConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.storage_path(), DEFAULT_STORAGE_PATH);
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.admin_password(), DEFAULT_PASSWORD);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[storage]
path = "/tmp/donorscore.json"

[share]
base_url = "https://assess.example.org"

[admin]
password = "s3cret"
"#;
        let cfg: DonorscoreConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.storage_path(), "/tmp/donorscore.json");
        assert_eq!(cfg.base_url(), "https://assess.example.org");
        assert_eq!(cfg.admin_password(), "s3cret");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let cfg: DonorscoreConfig = toml::from_str(
            r#"
[share]
base_url = "ftp://assess.example.org"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must use http or https"));
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let cfg: DonorscoreConfig = toml::from_str(
            r#"
[share]
base_url = "assess"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("not a valid url"));
    }

    #[test]
    fn validate_rejects_empty_password_and_storage() {
        let cfg: DonorscoreConfig = toml::from_str(
            r#"
[admin]
password = ""
"#,
        )
        .expect("config should parse");
        assert!(cfg
            .validate()
            .expect_err("validation should fail")
            .to_string()
            .contains("admin.password"));

        let cfg: DonorscoreConfig = toml::from_str(
            r#"
[storage]
path = "  "
"#,
        )
        .expect("config should parse");
        assert!(cfg
            .validate()
            .expect_err("validation should fail")
            .to_string()
            .contains("storage.path"));
    }
}
