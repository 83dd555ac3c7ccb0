//! The two logical resume records over a [`KvStore`].
//!
//! Loading is deliberately forgiving: a missing key, bytes that are not
//! UTF-8, or bytes that do not parse as JSON all collapse to "no input"
//! before normalization, so storage corruption is never user-visible. The
//! normalizer then guarantees a canonical document either way.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::resume::model::{ResumeDocument, Template};
use crate::resume::normalize::normalize;
use crate::storage::kv::KvStore;

pub const DOCUMENT_KEY: &str = "resume.document";
pub const TEMPLATE_KEY: &str = "resume.template";

#[derive(Debug)]
pub struct ResumeStore<S> {
    store: S,
}

impl<S: KvStore> ResumeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the document, always through the normalizer. Read failures and
    /// undecodable bytes degrade to the blank document.
    pub fn load_document(&self) -> ResumeDocument {
        let raw = match self.store.get(DOCUMENT_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to read stored document, starting blank");
                None
            }
        };

        let value = raw
            .as_deref()
            .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok())
            .unwrap_or(Value::Null);
        if raw.is_some() && value.is_null() {
            debug!("stored document is not valid JSON, treating as empty");
        }
        normalize(&value)
    }

    /// Persist the canonical form of the document.
    pub fn save_document(&mut self, doc: &ResumeDocument) -> Result<()> {
        let bytes = serde_json::to_vec(doc)?;
        self.store.set(DOCUMENT_KEY, &bytes)
    }

    /// Load the template choice; anything unrecognized falls back to the
    /// default.
    pub fn load_template(&self) -> Template {
        match self.store.get(TEMPLATE_KEY) {
            Ok(Some(bytes)) => {
                Template::parse_lenient(String::from_utf8_lossy(&bytes).as_ref())
            }
            Ok(None) => Template::default(),
            Err(e) => {
                warn!(error = %e, "failed to read stored template, using default");
                Template::default()
            }
        }
    }

    pub fn save_template(&mut self, template: Template) -> Result<()> {
        self.store.set(TEMPLATE_KEY, template.as_str().as_bytes())
    }

    /// Reset the document to blank. Clearing overwrites rather than
    /// removing the record.
    pub fn clear_document(&mut self) -> Result<()> {
        self.save_document(&ResumeDocument::blank())
    }
}
