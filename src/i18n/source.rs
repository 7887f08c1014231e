//! Translation sources
//!
//! A source returns the raw JSON payload stored for a (locale, namespace)
//! pair. The filesystem source only serves pairs found by an
//! [`AssetRegistry`] scan at startup, so the set of loadable resources is
//! fixed and request paths can never reach outside the base directory.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tokio::fs;
use tracing::{debug, info, warn};
use url::Url;

use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::is_safe_identifier;

/// Backend that yields raw translation payloads
#[async_trait]
pub trait TranslationSource: Send + Sync + std::fmt::Debug {
    /// Fetch the raw JSON for `locale`/`namespace`
    async fn fetch(&self, locale: &str, namespace: &str) -> Result<Vec<u8>>;

    /// Human-readable location of the resource, for logs
    fn describe(&self, locale: &str, namespace: &str) -> String;
}

/// Startup index of `{base}/{locale}/{namespace}.json` files
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    base_dir: PathBuf,
    assets: BTreeMap<(String, String), PathBuf>,
}

impl AssetRegistry {
    /// Scan `base_dir` for the translation files of each locale
    ///
    /// A missing base or locale directory is not an error: those locales
    /// simply have no namespaces. Only `*.json` files whose stem is a safe
    /// identifier are registered.
    pub async fn scan(base_dir: impl AsRef<Path>, locales: &[String]) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let mut assets = BTreeMap::new();

        if !fs::try_exists(&base_dir).await? {
            warn!("Translations directory not found: {}", base_dir.display());
            return Ok(Self { base_dir, assets });
        }

        for locale in locales {
            let locale_dir = base_dir.join(locale);
            if !fs::try_exists(&locale_dir).await? {
                warn!("No translations directory for locale {}: {}", locale, locale_dir.display());
                continue;
            }

            let mut entries = fs::read_dir(&locale_dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(namespace) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if !is_safe_identifier(namespace) {
                    debug!("Skipping translation file with unsafe name: {}", path.display());
                    continue;
                }
                assets.insert((locale.clone(), namespace.to_string()), path.clone());
            }
        }

        info!(
            base_dir = %base_dir.display(),
            assets = assets.len(),
            "Translation assets registered"
        );

        Ok(Self { base_dir, assets })
    }

    /// Path registered for a (locale, namespace) pair
    pub fn path(&self, locale: &str, namespace: &str) -> Option<&Path> {
        self.assets
            .get(&(locale.to_string(), namespace.to_string()))
            .map(PathBuf::as_path)
    }

    pub fn contains(&self, locale: &str, namespace: &str) -> bool {
        self.path(locale, namespace).is_some()
    }

    /// Namespaces registered for a locale, sorted
    pub fn namespaces(&self, locale: &str) -> Vec<&str> {
        self.assets
            .keys()
            .filter(|(l, _)| l == locale)
            .map(|(_, ns)| ns.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Reads registered translation files from disk
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    registry: AssetRegistry,
}

impl FileSystemSource {
    pub fn new(registry: AssetRegistry) -> Self {
        Self { registry }
    }

    /// Scan `base_dir` and build a source over the result
    pub async fn scan(base_dir: impl AsRef<Path>, locales: &[String]) -> Result<Self> {
        Ok(Self::new(AssetRegistry::scan(base_dir, locales).await?))
    }
}

#[async_trait]
impl TranslationSource for FileSystemSource {
    async fn fetch(&self, locale: &str, namespace: &str) -> Result<Vec<u8>> {
        let path = self
            .registry
            .path(locale, namespace)
            .ok_or_else(|| I18nError::UnknownResource {
                locale: locale.to_string(),
                namespace: namespace.to_string(),
            })?;

        Ok(fs::read(path).await?)
    }

    fn describe(&self, locale: &str, namespace: &str) -> String {
        match self.registry.path(locale, namespace) {
            Some(path) => path.display().to_string(),
            None => format!("{}/{}/{}.json", self.registry.base_dir().display(), locale, namespace),
        }
    }
}

/// Fetches `{base_url}/{locale}/{namespace}.json` over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a new HttpSource rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("route_i18n/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the resource for a (locale, namespace) pair
    pub fn resource_url(&self, locale: &str, namespace: &str) -> Result<Url> {
        let relative = format!(
            "{}/{}.json",
            urlencoding::encode(locale),
            urlencoding::encode(namespace)
        );
        Ok(self.base_url.join(&relative)?)
    }
}

#[async_trait]
impl TranslationSource for HttpSource {
    async fn fetch(&self, locale: &str, namespace: &str) -> Result<Vec<u8>> {
        let url = self.resource_url(locale, namespace)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(I18nError::HttpStatus {
                status: status.as_u16(),
                location: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self, locale: &str, namespace: &str) -> String {
        self.resource_url(locale, namespace)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}{}/{}.json", self.base_url, locale, namespace))
    }
}

/// In-memory table of payloads, for embedded resources and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<(String, String), Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the payload for a (locale, namespace) pair
    pub fn insert(&mut self, locale: &str, namespace: &str, payload: impl Into<Vec<u8>>) {
        self.resources
            .insert((locale.to_string(), namespace.to_string()), payload.into());
    }

    /// Builder-style variant of [`MemorySource::insert`]
    pub fn with_resource(mut self, locale: &str, namespace: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.insert(locale, namespace, payload);
        self
    }
}

#[async_trait]
impl TranslationSource for MemorySource {
    async fn fetch(&self, locale: &str, namespace: &str) -> Result<Vec<u8>> {
        self.resources
            .get(&(locale.to_string(), namespace.to_string()))
            .cloned()
            .ok_or_else(|| I18nError::UnknownResource {
                locale: locale.to_string(),
                namespace: namespace.to_string(),
            })
    }

    fn describe(&self, locale: &str, namespace: &str) -> String {
        format!("memory:{}/{}", locale, namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "ja".to_string()]
    }

    #[tokio::test]
    async fn test_registry_scans_locale_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("en")).unwrap();
        std::fs::create_dir_all(dir.path().join("de")).unwrap();
        std::fs::write(dir.path().join("en/common.json"), "{}").unwrap();
        std::fs::write(dir.path().join("en/about.json"), "{}").unwrap();
        std::fs::write(dir.path().join("en/notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("en/bad name.json"), "{}").unwrap();
        std::fs::write(dir.path().join("de/common.json"), "{}").unwrap();

        let registry = AssetRegistry::scan(dir.path(), &locales()).await.unwrap();

        assert_eq!(registry.namespaces("en"), vec!["about", "common"]);
        assert!(registry.namespaces("ja").is_empty());
        assert!(!registry.contains("de", "common"));
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn test_registry_tolerates_missing_base() {
        let dir = tempfile::tempdir().unwrap();
        let registry = AssetRegistry::scan(dir.path().join("missing"), &locales()).await.unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_filesystem_source_only_serves_registered_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("en")).unwrap();
        std::fs::write(dir.path().join("en/common.json"), r#"{"title":"Hi"}"#).unwrap();

        let source = FileSystemSource::scan(dir.path(), &locales()).await.unwrap();

        let payload = source.fetch("en", "common").await.unwrap();
        assert_eq!(payload, br#"{"title":"Hi"}"#);
        assert_matches!(
            source.fetch("en", "../en/common").await,
            Err(I18nError::UnknownResource { .. })
        );
        assert!(source.describe("en", "common").ends_with("common.json"));
    }

    #[test]
    fn test_http_resource_url() {
        let source = HttpSource::new("https://cdn.example.com/i18n", Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.resource_url("ja", "about").unwrap().as_str(),
            "https://cdn.example.com/i18n/ja/about.json"
        );
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_resource("en", "common", r#"{"a":"b"}"#);
        assert!(source.fetch("en", "common").await.is_ok());
        assert_matches!(source.fetch("ja", "common").await, Err(I18nError::UnknownResource { .. }));
    }
}
