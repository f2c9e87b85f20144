use serde::{Deserialize, Serialize};
use url::Url;

use std::future::Future;
use std::path::Path;
use std::path::PathBuf;

use crate::error::WeftError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin the application is served from. Route paths are joined onto it.
    pub base_url: String,
    /// Application routes used by the settings pages.
    pub routes: Routes,
}

impl Config {
    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self, WeftError> {
        loader.load().await
    }

    /// Saves the configuration using the provided saver.
    pub async fn save(&self, saver: &impl Saver) -> Result<(), WeftError> {
        saver.save(self).await
    }

    /// Absolute URL for a route path.
    pub fn resolve(&self, path: &str) -> Result<Url, WeftError> {
        Ok(Url::parse(&self.base_url)?.join(path)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_owned(),
            routes: Routes::default(),
        }
    }
}

/// Route paths, relative to [`Config::base_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub settings_payments: String,
    pub connect_paypal: String,
    pub disconnect_paypal: String,
    pub paypal_help_article: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            settings_payments: "/settings/payments".to_owned(),
            connect_paypal: "/paypal/connect".to_owned(),
            disconnect_paypal: "/paypal/disconnect".to_owned(),
            paypal_help_article: "/help/article/275-paypal-connect".to_owned(),
        }
    }
}

impl Routes {
    /// Connect path carrying the payments settings page as `referer`, so the
    /// processor sends the user back there.
    pub fn connect_paypal_path(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("referer", &self.settings_payments)
            .finish();
        format!("{}?{}", self.connect_paypal, query)
    }
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(&self) -> impl Future<Output = Result<Config, WeftError>> + Send;
}

/// The trait for saving configuration data.
pub trait Saver {
    /// Saves the configuration data.
    fn save(&self, config: &Config) -> impl Future<Output = Result<(), WeftError>> + Send;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a configuration file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// [`Config`] data is serialized by file extension: `.json` or `.toml`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn format(&self) -> Result<Format, WeftError> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(WeftError::Config(format!(
                "unsupported config file format: {}",
                self.path.display()
            ))),
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Loader for FileStore {
    async fn load(&self) -> Result<Config, WeftError> {
        let format = self.format()?;
        let text = std::fs::read_to_string(&self.path)?;
        let config: Config = match format {
            Format::Json => serde_json::from_str(&text)?,
            Format::Toml => toml::from_str(&text)?,
        };
        tracing::debug!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }
}

impl Saver for FileStore {
    async fn save(&self, config: &Config) -> Result<(), WeftError> {
        let text = match self.format()? {
            Format::Json => serde_json::to_string_pretty(config)?,
            Format::Toml => toml::to_string_pretty(config)?,
        };
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("weft-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_connect_path_carries_referer() {
        let routes = Routes::default();
        assert_eq!(
            routes.connect_paypal_path(),
            "/paypal/connect?referer=%2Fsettings%2Fpayments"
        );
    }

    #[test]
    fn test_resolve() {
        let config = Config {
            base_url: "https://shop.example.com/app/".to_owned(),
            ..Config::default()
        };
        assert_eq!(
            config.resolve(&config.routes.disconnect_paypal).unwrap().as_str(),
            "https://shop.example.com/paypal/disconnect"
        );
        assert!(matches!(
            Config { base_url: "not a url".into(), ..Config::default() }.resolve("/x"),
            Err(WeftError::Url(_))
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            base_url = "https://example.com"

            [routes]
            disconnect_paypal = "/settings/paypal/disconnect"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.routes.disconnect_paypal, "/settings/paypal/disconnect");
        assert_eq!(config.routes.settings_payments, "/settings/payments");
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        for ext in ["json", "toml"] {
            let path = temp_path(&format!("round-trip.{ext}"));
            let store = FileStore::new(&path);
            let config = Config {
                base_url: "https://example.org".to_owned(),
                ..Config::default()
            };

            config.save(&store).await.unwrap();
            let loaded = Config::load(&store).await.unwrap();
            assert_eq!(loaded, config);

            std::fs::remove_file(&path).unwrap();
        }
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let store = FileStore::new(temp_path("config.yaml"));
        let err = Config::load(&store).await.unwrap_err();
        assert!(matches!(err, WeftError::Config(_)));
    }
}
