//! JSON-file prompt store
//!
//! The whole history is one JSON array, rewritten on every save. Records
//! are kept in insertion order on disk and returned newest first.

use async_trait::async_trait;
use chrono::Utc;
use refinery_application::ports::prompt_store::{
    PromptMetadata, PromptStore, ScoreSnapshot, SearchCriteria, StoreError, StoredPrompt,
};
use refinery_domain::QualityScore;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

const ID_PREFIX: &str = "prm-";

/// [`PromptStore`] backed by a JSON array file.
pub struct JsonFilePromptStore {
    /// `None` keeps everything in memory
    path: Option<PathBuf>,
    records: Mutex<Vec<StoredPrompt>>,
}

impl JsonFilePromptStore {
    /// Open the store at `path`, loading existing records.
    ///
    /// A missing file is an empty store; it is created on the first save.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), records = records.len(), "prompt store opened");

        Ok(Self {
            path: Some(path),
            records: Mutex::new(records),
        })
    }

    /// Store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn persist(&self, records: &[StoredPrompt]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_string_pretty(records)?).await?;
        Ok(())
    }
}

/// One past the highest `prm-<n>` id in use
fn next_id(records: &[StoredPrompt]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", ID_PREFIX, max + 1)
}

#[async_trait]
impl PromptStore for JsonFilePromptStore {
    async fn save(
        &self,
        refined: &str,
        metadata: PromptMetadata,
        score: &QualityScore,
    ) -> Result<StoredPrompt, StoreError> {
        let mut records = self.records.lock().await;
        let stored = StoredPrompt {
            id: next_id(&records),
            refined: refined.to_string(),
            metadata,
            score: ScoreSnapshot::from(score),
            created_at: Utc::now(),
        };
        records.push(stored.clone());

        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        info!("Saved prompt {}", stored.id);
        Ok(stored)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<StoredPrompt>, StoreError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<StoredPrompt>, StoreError> {
        let records = self.records.lock().await;
        // Reverse first so equal timestamps keep newest-inserted first
        let mut found: Vec<StoredPrompt> = records
            .iter()
            .rev()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = criteria.limit {
            found.truncate(limit);
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refinery_domain::{Domain, DomainRegistry, QualityScorer, SubScores};
    use std::sync::Arc;

    fn score(value: f64, domain: Domain) -> QualityScore {
        let scorer = QualityScorer::new(Arc::new(DomainRegistry::with_builtin_domains().unwrap()));
        scorer.score(SubScores::splat(value), domain)
    }

    fn metadata(original: &str, domain: Domain) -> PromptMetadata {
        PromptMetadata {
            original: original.to_string(),
            domain,
            rules_applied: vec!["vague_nice_table".to_string()],
        }
    }

    async fn seeded(store: &JsonFilePromptStore) {
        store
            .save(
                "Generate a database schema for `users`",
                metadata("hazme una tabla para usuarios", Domain::Sql),
                &score(0.8, Domain::Sql),
            )
            .await
            .unwrap();
        store
            .save(
                "Prepare a production-ready configuration for Kubernetes",
                metadata("set up k8s", Domain::Devops),
                &score(0.4, Domain::Devops),
            )
            .await
            .unwrap();
        store
            .save(
                "Write a SQL query for `orders`",
                metadata("give me a query for orders", Domain::Sql),
                &score(0.6, Domain::Sql),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = JsonFilePromptStore::in_memory();
        seeded(&store).await;

        let all = store.search(&SearchCriteria::new()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["prm-3", "prm-2", "prm-1"]);
        assert!(store.path().is_none());
    }

    #[tokio::test]
    async fn test_search_filters_and_limit() {
        let store = JsonFilePromptStore::in_memory();
        seeded(&store).await;

        let sql = store
            .search(&SearchCriteria::new().with_domain(Domain::Sql))
            .await
            .unwrap();
        assert_eq!(sql.len(), 2);
        assert_eq!(sql[0].id, "prm-3");

        let strong = store
            .search(&SearchCriteria::new().with_min_score(0.7))
            .await
            .unwrap();
        assert_eq!(strong.len(), 1);
        assert_eq!(strong[0].id, "prm-1");

        let by_original = store
            .search(&SearchCriteria::new().with_text("K8S"))
            .await
            .unwrap();
        assert_eq!(by_original[0].id, "prm-2");

        let limited = store
            .search(&SearchCriteria::new().with_limit(1))
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "prm-3");
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history").join("prompts.json");

        {
            let store = JsonFilePromptStore::open(&path).await.unwrap();
            seeded(&store).await;
        }

        let reopened = JsonFilePromptStore::open(&path).await.unwrap();
        let first = reopened.get_by_id("prm-1").await.unwrap().unwrap();
        assert_eq!(first.metadata.domain, Domain::Sql);
        assert_eq!(first.metadata.rules_applied, ["vague_nice_table"]);
        assert!((first.score.overall - 0.8).abs() < 1e-9);
        assert!(reopened.get_by_id("prm-9").await.unwrap().is_none());

        let next = reopened
            .save(
                "Summarize this article.",
                metadata("summarize", Domain::General),
                &score(0.5, Domain::General),
            )
            .await
            .unwrap();
        assert_eq!(next.id, "prm-4");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonFilePromptStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePromptStore::open(dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(store.search(&SearchCriteria::new()).await.unwrap().is_empty());
    }
}
