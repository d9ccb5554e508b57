use crate::types::SuggestionHit;

/// Executes a serialized query against one index of the external search
/// engine. The only I/O seam in the workspace; implementations live at the
/// transport layer and own timeouts and retries.
#[allow(async_fn_in_trait)]
pub trait SuggestionBackend: Send + Sync {
    /// `query` is the compound query document exactly as the engine
    /// expects it; `limit` caps the rows the backend may return.
    async fn run(
        &self,
        index: &str,
        query: &serde_json::Value,
        limit: usize,
    ) -> anyhow::Result<Vec<SuggestionHit>>;
}
