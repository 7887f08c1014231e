//! Translation loading
//!
//! The store fetches the namespaces a request needs from a
//! [`TranslationSource`], validates them and assembles a [`Catalog`].
//! Loads run concurrently; a namespace that fails for any reason is logged
//! and left out of the catalog, so loading itself never fails.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use futures::future::join_all;

use crate::config::{I18nConfig, SourceKind};
use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::{is_safe_identifier, path_segments};
use crate::utils::logging::{log_catalog_ready, log_namespace_load_failure};
use super::catalog::{parse_table, Catalog, TranslationTable};
use super::source::{FileSystemSource, HttpSource, TranslationSource};

/// Timeout applied to each request of an HTTP translation source
pub const HTTP_SOURCE_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads translation catalogs for requests
#[derive(Debug, Clone)]
pub struct TranslationStore {
    source: Arc<dyn TranslationSource>,
    always_namespaces: Vec<String>,
}

impl TranslationStore {
    /// Create a new store over `source`
    pub fn new(source: Arc<dyn TranslationSource>, always_namespaces: Vec<String>) -> Self {
        Self {
            source,
            always_namespaces,
        }
    }

    /// Build the store described by the configuration
    ///
    /// For a filesystem source this scans the translations directory once.
    pub async fn from_config(config: &I18nConfig) -> Result<Self> {
        let source: Arc<dyn TranslationSource> = match config.source {
            SourceKind::Filesystem => Arc::new(
                FileSystemSource::scan(&config.translations_base, &config.supported_locales).await?,
            ),
            SourceKind::Http => Arc::new(HttpSource::new(&config.translations_base, HTTP_SOURCE_TIMEOUT)?),
        };

        Ok(Self::new(source, config.always_namespaces.clone()))
    }

    /// Namespaces needed to render `root_path`
    ///
    /// The always-loaded namespaces come first, followed by one namespace per
    /// path segment, without duplicates.
    pub fn namespaces_for_path(&self, root_path: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.always_namespaces
            .iter()
            .map(String::as_str)
            .chain(path_segments(root_path))
            .filter(|ns| seen.insert(*ns))
            .map(str::to_string)
            .collect()
    }

    /// Load the catalog for a request to `root_path` in `locale`
    pub async fn load_for_path(&self, locale: &str, root_path: &str) -> Catalog {
        let namespaces = self.namespaces_for_path(root_path);
        self.load(locale, &namespaces).await
    }

    /// Load `namespaces` for `locale`
    ///
    /// Each distinct namespace is fetched once; all fetches run concurrently
    /// and the catalog is assembled only after every one has finished.
    pub async fn load<S: AsRef<str>>(&self, locale: &str, namespaces: &[S]) -> Catalog {
        let started = Instant::now();

        let mut seen = HashSet::new();
        let unique: Vec<&str> = namespaces
            .iter()
            .map(AsRef::as_ref)
            .filter(|ns| seen.insert(*ns))
            .collect();

        let results = join_all(unique.iter().map(|namespace| async move {
            (*namespace, self.load_namespace(locale, namespace).await)
        }))
        .await;

        let mut catalog = Catalog::new();
        for (namespace, result) in results {
            match result {
                Ok(table) => catalog.insert(namespace, table),
                Err(e) => log_namespace_load_failure(
                    locale,
                    namespace,
                    &self.source.describe(locale, namespace),
                    &e,
                ),
            }
        }

        log_catalog_ready(locale, unique.len(), catalog.len(), started.elapsed().as_millis());
        catalog
    }

    /// Fetch and validate a single namespace
    async fn load_namespace(&self, locale: &str, namespace: &str) -> Result<TranslationTable> {
        if !is_safe_identifier(namespace) {
            return Err(I18nError::InvalidNamespace(namespace.to_string()));
        }

        let payload = self.source.fetch(locale, namespace).await?;
        parse_table(namespace, &payload)
    }
}
