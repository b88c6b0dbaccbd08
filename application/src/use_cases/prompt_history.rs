//! Prompt History use case
//!
//! Read access to previously saved refinements.

use crate::ports::prompt_store::{PromptStore, SearchCriteria, StoreError, StoredPrompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when reading history
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("No saved prompt with id '{0}'")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case for browsing saved prompts
pub struct PromptHistoryUseCase {
    store: Arc<dyn PromptStore>,
}

impl PromptHistoryUseCase {
    pub fn new(store: Arc<dyn PromptStore>) -> Self {
        Self { store }
    }

    /// Saved prompts matching `criteria`, newest first
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<StoredPrompt>, HistoryError> {
        let found = self.store.search(criteria).await?;
        debug!(count = found.len(), "history search");
        Ok(found)
    }

    pub async fn get(&self, id: &str) -> Result<StoredPrompt, HistoryError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prompt_store::{PromptMetadata, ScoreSnapshot};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use refinery_domain::{Domain, QualityScore};

    /// Fixed records, oldest first
    struct FixedStore(Vec<StoredPrompt>);

    #[async_trait]
    impl PromptStore for FixedStore {
        async fn save(
            &self,
            _refined: &str,
            _metadata: PromptMetadata,
            _score: &QualityScore,
        ) -> Result<StoredPrompt, StoreError> {
            unimplemented!("read-only store")
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<StoredPrompt>, StoreError> {
            Ok(self.0.iter().find(|p| p.id == id).cloned())
        }

        async fn search(
            &self,
            criteria: &SearchCriteria,
        ) -> Result<Vec<StoredPrompt>, StoreError> {
            let mut found: Vec<_> = self
                .0
                .iter()
                .rev()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect();
            if let Some(limit) = criteria.limit {
                found.truncate(limit);
            }
            Ok(found)
        }
    }

    fn record(n: i64, domain: Domain, refined: &str) -> StoredPrompt {
        StoredPrompt {
            id: format!("prm-{}", n),
            refined: refined.to_string(),
            metadata: PromptMetadata {
                original: refined.to_lowercase(),
                domain,
                rules_applied: vec![],
            },
            score: ScoreSnapshot {
                clarity: 0.5,
                specificity: 0.5,
                structure: 0.5,
                completeness: 0.5,
                overall: 0.5,
            },
            created_at: Utc::now() + Duration::seconds(n),
        }
    }

    fn use_case() -> PromptHistoryUseCase {
        PromptHistoryUseCase::new(Arc::new(FixedStore(vec![
            record(1, Domain::Sql, "Write a SQL query for `orders`"),
            record(2, Domain::Devops, "Prepare a production-ready configuration"),
            record(3, Domain::Sql, "Generate a database schema"),
        ])))
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let use_case = use_case();
        assert_eq!(use_case.get("prm-2").await.unwrap().metadata.domain, Domain::Devops);

        let err = use_case.get("prm-9").await.unwrap_err();
        assert!(matches!(err, HistoryError::NotFound(ref id) if id == "prm-9"));
    }

    #[tokio::test]
    async fn test_search_by_domain_with_limit() {
        let found = use_case()
            .search(&SearchCriteria::new().with_domain(Domain::Sql).with_limit(1))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "prm-3");
    }
}
