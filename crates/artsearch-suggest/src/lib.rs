//! Live-typing suggestion composer.
//!
//! Issues the narrow autocomplete query per entity scope against the
//! external backend and merges the results into one tagged list. Stateless
//! per call: overlapping in-flight invocations are safe, and discarding a
//! stale response is the caller's job (by request sequence number), since
//! no ordering between call time and response arrival is guaranteed.

use artsearch_core::config::SuggestConfig;
use artsearch_core::traits::SuggestionBackend;
use artsearch_core::types::{EntityKind, Scope, Suggestion};
use artsearch_query::builder::build_autocomplete_query;
use tracing::debug;

pub struct SuggestComposer<B: SuggestionBackend> {
    backend: B,
    config: SuggestConfig,
}

impl<B: SuggestionBackend> SuggestComposer<B> {
    pub fn new(backend: B, config: SuggestConfig) -> Self {
        Self { backend, config }
    }

    /// Suggestions for a typed prefix, merged across the requested scope.
    ///
    /// Prefixes shorter than the configured minimum resolve to an empty
    /// list without contacting the backend. For `Scope::All` the two
    /// sub-queries run concurrently and artists precede workshops in the
    /// merged list; no cross-type re-ranking happens here, that is
    /// presentation policy.
    pub async fn suggest(&self, prefix: &str, scope: Scope) -> anyhow::Result<Vec<Suggestion>> {
        let prefix = prefix.trim();
        if prefix.chars().count() < self.config.min_prefix_len {
            debug!(prefix_len = prefix.chars().count(), "prefix below minimum, skipping backend");
            return Ok(Vec::new());
        }

        match scope {
            Scope::Artist => self.scoped(prefix, EntityKind::Artist).await,
            Scope::Workshop => self.scoped(prefix, EntityKind::Workshop).await,
            Scope::All => {
                let (mut artists, workshops) = tokio::try_join!(
                    self.scoped(prefix, EntityKind::Artist),
                    self.scoped(prefix, EntityKind::Workshop),
                )?;
                artists.extend(workshops);
                Ok(artists)
            }
        }
    }

    /// One sub-query against a single entity index, capped independently
    /// of the other scope.
    async fn scoped(&self, prefix: &str, kind: EntityKind) -> anyhow::Result<Vec<Suggestion>> {
        let query = build_autocomplete_query(prefix, kind).to_value()?;
        let hits = self
            .backend
            .run(kind.index_name(), &query, self.config.per_scope_limit)
            .await?;
        debug!(index = kind.index_name(), hits = hits.len(), "suggestion sub-query");
        Ok(hits
            .into_iter()
            .take(self.config.per_scope_limit)
            .map(|hit| Suggestion {
                id: hit.id,
                label: hit.label,
                kind,
            })
            .collect())
    }
}
