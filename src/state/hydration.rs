//! Client hydration payload
//!
//! The resolved locale, root path and catalog are serialized into the
//! rendered page so client-side code can continue translating with exactly
//! the data the server used, without fetching or resolving again.

use serde::{Deserialize, Serialize};

use crate::i18n::Catalog;
use crate::utils::errors::Result;
use crate::utils::helpers::escape_json_for_html;
use super::context::RequestI18n;

/// Element id of the inline hydration script
pub const HYDRATION_SCRIPT_ID: &str = "__i18n";

/// Serializable snapshot of a request's i18n state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationPayload {
    pub locale: String,
    pub root_path: String,
    pub translations: Catalog,
}

impl HydrationPayload {
    pub fn from_request(ctx: &RequestI18n) -> Self {
        Self {
            locale: ctx.locale.clone(),
            root_path: ctx.root_path.clone(),
            translations: ctx.catalog().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as an inline `<script type="application/json">` element
    pub fn to_script_tag(&self) -> Result<String> {
        Ok(format!(
            r#"<script type="application/json" id="{}">{}</script>"#,
            HYDRATION_SCRIPT_ID,
            escape_json_for_html(&self.to_json()?)
        ))
    }

    /// Rebuild the request state on the client side
    pub fn into_request_i18n(self) -> RequestI18n {
        RequestI18n::new(self.locale, self.root_path, self.translations)
    }
}
