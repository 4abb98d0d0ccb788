//! Polite refusals for advisory questions.
//!
//! A query is matched against ordered keyword rules to pick a
//! [`RefusalCategory`], the category's canned message and educational link are
//! returned, and a few factual questions are sampled as follow-ups.

pub mod audit;
pub mod category;
pub mod suggestions;
pub mod templates;

pub use audit::RefusalAuditEntry;
pub use category::{infer_category, RefusalCategory};
pub use templates::{template_for, EducationalTopic, RefusalTemplate};

use crate::config::ResponderConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream classifier output. Accepted for interface compatibility only.
pub type Classification = Map<String, Value>;

/// Payload handed back to the query pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefusalResponse {
    pub message: String,
    pub educational_link: String,
    pub suggestions: Vec<String>,
}

impl RefusalResponse {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefusalResponder {
    config: ResponderConfig,
}

impl RefusalResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResponderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    pub fn classify(&self, query: Option<&str>) -> RefusalCategory {
        infer_category(query)
    }

    pub fn template(&self, category: RefusalCategory) -> &'static RefusalTemplate {
        template_for(category)
    }

    pub fn educational_link(&self, topic: EducationalTopic) -> &'static str {
        topic.link()
    }

    /// Builds the refusal for `query`. Never fails; unmatched or missing
    /// queries get the default template.
    pub fn get_refusal(
        &self,
        query: Option<&str>,
        _classification: Option<&Classification>,
    ) -> RefusalResponse {
        let category = self.classify(query);
        let template = self.template(category);
        let suggestions = self.factual_suggestions(self.config.default_suggestion_count);
        tracing::debug!(
            category = %category,
            suggestions = suggestions.len(),
            "resolved refusal"
        );
        let response = RefusalResponse {
            message: template.message.to_string(),
            educational_link: template.educational_link.to_string(),
            suggestions,
        };
        if self.config.audit_enabled {
            emit_audit(&RefusalAuditEntry::new(
                category,
                query,
                response.suggestions.len(),
            ));
        }
        response
    }

    /// Random sample of `min(count, 8)` distinct factual questions.
    pub fn factual_suggestions(&self, count: usize) -> Vec<String> {
        self.factual_suggestions_with_rng(&mut rand::thread_rng(), count)
    }

    pub fn factual_suggestions_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Vec<String> {
        suggestions::sample_suggestions(rng, count)
    }

    pub fn audit(&self, query: Option<&str>, response: &RefusalResponse) -> RefusalAuditEntry {
        RefusalAuditEntry::new(self.classify(query), query, response.suggestions.len())
    }
}

fn emit_audit(entry: &RefusalAuditEntry) {
    match entry.to_json_line() {
        Ok(line) => tracing::info!(target: "fundguard::audit", "{line}"),
        Err(err) => tracing::warn!(error = %err, "failed to serialize refusal audit entry"),
    }
}
