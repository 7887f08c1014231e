//! On-disk translation fixtures
//!
//! Builds a temporary `{base}/{locale}/{namespace}.json` tree and matching
//! settings for filesystem-backed tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use route_i18n::config::{MissingLocalePolicy, Settings, SourceKind};
use route_i18n::state::AppContext;

/// Temporary translations directory
pub struct TranslationFixture {
    pub temp_dir: TempDir,
}

impl TranslationFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        super::init_test_logging();
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Fixture with the translations used by most tests
    pub fn standard() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let fixture = Self::new()?;
        fixture.write("en", "common", r#"{"title": "Welcome", "home": "Home"}"#)?;
        fixture.write("en", "metadata", r#"{"title": "Demo site"}"#)?;
        fixture.write("en", "about", r#"{"heading": "About us"}"#)?;
        fixture.write("ja", "common", r#"{"title": "ようこそ", "home": "ホーム"}"#)?;
        fixture.write("ja", "metadata", r#"{"title": "デモサイト"}"#)?;
        fixture.write("ja", "about", r#"{"heading": "私たちについて"}"#)?;
        Ok(fixture)
    }

    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `{base}/{locale}/{namespace}.json`
    pub fn write(&self, locale: &str, namespace: &str, contents: &str) -> std::io::Result<PathBuf> {
        let dir = self.base().join(locale);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.json", namespace));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Settings pointing at this fixture
    pub fn settings(&self, policy: MissingLocalePolicy) -> Settings {
        let mut settings = Settings::default();
        settings.i18n.supported_locales = super::test_locales();
        settings.i18n.default_locale = "en".to_string();
        settings.i18n.translations_base = self.base().to_string_lossy().into_owned();
        settings.i18n.source = SourceKind::Filesystem;
        settings.i18n.missing_locale_policy = policy;
        settings
    }

    /// Application context built from [`TranslationFixture::settings`]
    pub async fn app_context(
        &self,
        policy: MissingLocalePolicy,
    ) -> Result<Arc<AppContext>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Arc::new(AppContext::from_settings(self.settings(policy)).await?))
    }
}
