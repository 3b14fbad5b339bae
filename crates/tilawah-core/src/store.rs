//! Evaluation record storage.
//!
//! Records live behind the [`EvaluationRepository`] trait so the HTTP
//! service and the CLI share one set of rules: unique codes are unique
//! case-insensitively, lookups match code prefixes, and a reciter may bind
//! their name once. [`JsonDirStore`] keeps one JSON file per record;
//! [`MemoryStore`] is for tests and ephemeral servers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::EvaluationError;
use crate::model::{normalize_code, validate_subject_name, EvaluationRecord};

/// Filters for listing records. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilter {
    /// Case-insensitive substring of the subject name.
    #[serde(default)]
    pub name: Option<String>,
    /// Exact examiner name.
    #[serde(default)]
    pub examiner: Option<String>,
    /// Exact activity label.
    #[serde(default)]
    pub activity: Option<String>,
    /// Case-insensitive substring of the unique code.
    #[serde(default)]
    pub code: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, record: &EvaluationRecord) -> bool {
        if let Some(name) = non_blank(&self.name) {
            let needle = name.to_lowercase();
            let hit = record
                .subject_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(examiner) = non_blank(&self.examiner) {
            if record.examiner != examiner {
                return false;
            }
        }
        if let Some(activity) = non_blank(&self.activity) {
            if record.activity != activity {
                return false;
            }
        }
        if let Some(code) = non_blank(&self.code) {
            if !normalize_code(&record.unique_code).contains(&normalize_code(code)) {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Storage backend for evaluation records.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Store a new record. Fails if its id or unique code is already taken.
    async fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, EvaluationError>;

    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> Result<Option<EvaluationRecord>, EvaluationError>;

    /// Replace an existing record (examiner edits).
    async fn update(&self, record: EvaluationRecord) -> Result<(), EvaluationError>;

    /// All records, unordered.
    async fn all(&self) -> Result<Vec<EvaluationRecord>, EvaluationError>;

    /// Bind a subject name to a record that has none.
    async fn bind_subject(&self, id: Uuid, name: &str) -> Result<EvaluationRecord, EvaluationError>;

    /// Find the record whose unique code starts with `typed`, ignoring case.
    /// When several match, the oldest wins.
    async fn find_by_code_prefix(
        &self,
        typed: &str,
    ) -> Result<Option<EvaluationRecord>, EvaluationError> {
        let typed = normalize_code(typed);
        if typed.is_empty() {
            return Err(EvaluationError::EmptyCode);
        }
        let records = self.all().await?;
        Ok(pick_by_prefix(records, &typed))
    }

    /// Records matching `filter`, newest first.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<EvaluationRecord>, EvaluationError> {
        let mut records: Vec<EvaluationRecord> = self
            .all()
            .await?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }
}

fn pick_by_prefix(records: Vec<EvaluationRecord>, typed: &str) -> Option<EvaluationRecord> {
    records
        .into_iter()
        .filter(|r| r.code_matches_prefix(typed))
        .min_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
}

fn check_code_free<'a>(
    record: &EvaluationRecord,
    existing: impl IntoIterator<Item = &'a EvaluationRecord>,
) -> Result<(), EvaluationError> {
    let code = normalize_code(&record.unique_code);
    if code.is_empty() {
        return Err(EvaluationError::EmptyCode);
    }
    let taken = existing
        .into_iter()
        .any(|r| r.id != record.id && normalize_code(&r.unique_code) == code);
    if taken {
        return Err(EvaluationError::DuplicateCode(code));
    }
    Ok(())
}

fn apply_binding(record: &mut EvaluationRecord, name: &str) -> Result<(), EvaluationError> {
    if record.has_bound_subject() {
        return Err(EvaluationError::SubjectAlreadyBound(record.id));
    }
    let name = validate_subject_name(name).map_err(EvaluationError::InvalidSubjectName)?;
    record.subject_name = Some(name);
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Volatile store backed by a map.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, EvaluationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = EvaluationRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id, r)).collect()),
        }
    }
}

#[async_trait]
impl EvaluationRepository for MemoryStore {
    async fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, EvaluationError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(EvaluationError::DuplicateId(record.id));
        }
        check_code_free(&record, records.values())?;
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<EvaluationRecord>, EvaluationError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update(&self, record: EvaluationRecord) -> Result<(), EvaluationError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(EvaluationError::NotFound(record.id));
        }
        check_code_free(&record, records.values())?;
        records.insert(record.id, record);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<EvaluationRecord>, EvaluationError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn bind_subject(&self, id: Uuid, name: &str) -> Result<EvaluationRecord, EvaluationError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(EvaluationError::NotFound(id))?;
        apply_binding(record, name)?;
        Ok(record.clone())
    }
}

// ---------------------------------------------------------------------------
// JSON directory store
// ---------------------------------------------------------------------------

/// Store keeping each record as `<dir>/<id>.json`.
pub struct JsonDirStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonDirStore {
    /// Open (and create if needed) a store directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, EvaluationError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn read_record(path: &Path) -> Result<EvaluationRecord, EvaluationError> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_record(&self, record: &EvaluationRecord) -> Result<(), EvaluationError> {
        let json = serde_json::to_string_pretty(record)?;
        let path = self.record_path(record.id);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl EvaluationRepository for JsonDirStore {
    async fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, EvaluationError> {
        let _guard = self.write_lock.lock().await;
        if tokio::fs::try_exists(self.record_path(record.id)).await? {
            return Err(EvaluationError::DuplicateId(record.id));
        }
        let existing = self.all().await?;
        check_code_free(&record, &existing)?;
        self.write_record(&record).await?;
        tracing::info!(id = %record.id, code = %record.unique_code, "evaluation recorded");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<EvaluationRecord>, EvaluationError> {
        let path = self.record_path(id);
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        Self::read_record(&path).await.map(Some)
    }

    async fn update(&self, record: EvaluationRecord) -> Result<(), EvaluationError> {
        let _guard = self.write_lock.lock().await;
        if !tokio::fs::try_exists(self.record_path(record.id)).await? {
            return Err(EvaluationError::NotFound(record.id));
        }
        let existing = self.all().await?;
        check_code_free(&record, &existing)?;
        self.write_record(&record).await?;
        tracing::info!(id = %record.id, "evaluation updated");
        Ok(())
    }

    async fn all(&self) -> Result<Vec<EvaluationRecord>, EvaluationError> {
        let mut records = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read_record(&path).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(records)
    }

    async fn bind_subject(&self, id: Uuid, name: &str) -> Result<EvaluationRecord, EvaluationError> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.get(id).await?.ok_or(EvaluationError::NotFound(id))?;
        apply_binding(&mut record, name)?;
        self.write_record(&record).await?;
        tracing::info!(id = %record.id, "subject name bound");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecommendedTrack;
    use chrono::{Duration, Utc};

    fn record(code: &str) -> EvaluationRecord {
        EvaluationRecord::new(code, "Ustadz Fulan", "Tahsin", "Ikhwan", RecommendedTrack::Foundation)
    }

    async fn exercise_rules(store: &dyn EvaluationRepository) {
        let mut older = record("ab12cd34");
        older.created_at = Utc::now() - Duration::hours(2);
        let newer = record("AB99ZZ00").with_subject_name("Ahmad Yusuf");
        store.insert(older.clone()).await.unwrap();
        store.insert(newer.clone()).await.unwrap();

        // duplicate code, any case
        let err = store.insert(record("Ab12Cd34")).await.unwrap_err();
        assert!(matches!(err, EvaluationError::DuplicateCode(_)));

        // insert never replaces an existing record
        let mut same_id = record("FRESH001");
        same_id.id = newer.id;
        let err = store.insert(same_id).await.unwrap_err();
        assert!(matches!(err, EvaluationError::DuplicateId(id) if id == newer.id));
        assert_eq!(
            store.get(newer.id).await.unwrap().unwrap().unique_code,
            "AB99ZZ00"
        );

        // prefix lookup is case-insensitive and prefers the oldest match
        let found = store.find_by_code_prefix("  ab ").await.unwrap().unwrap();
        assert_eq!(found.id, older.id);
        let found = store.find_by_code_prefix("ab99").await.unwrap().unwrap();
        assert_eq!(found.id, newer.id);
        assert!(store.find_by_code_prefix("zz").await.unwrap().is_none());
        assert!(matches!(
            store.find_by_code_prefix("   ").await,
            Err(EvaluationError::EmptyCode)
        ));

        // binding is one-time and validated
        assert!(matches!(
            store.bind_subject(older.id, "  ").await,
            Err(EvaluationError::InvalidSubjectName(_))
        ));
        let bound = store.bind_subject(older.id, " Siti Aminah ").await.unwrap();
        assert_eq!(bound.subject_name.as_deref(), Some("Siti Aminah"));
        assert!(matches!(
            store.bind_subject(older.id, "Someone Else").await,
            Err(EvaluationError::SubjectAlreadyBound(_))
        ));
        assert!(matches!(
            store.bind_subject(Uuid::new_v4(), "Nobody").await,
            Err(EvaluationError::NotFound(_))
        ));

        // listing is newest first and filterable
        let all = store.list(&ListFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newer.id);
        let filtered = store
            .list(&ListFilter {
                name: Some("siti".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, older.id);
        let by_code = store
            .list(&ListFilter {
                code: Some("99z".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_code.len(), 1);

        // updates keep code uniqueness
        let mut edited = store.get(newer.id).await.unwrap().unwrap();
        edited.unique_code = "AB12CD34".into();
        assert!(matches!(
            store.update(edited.clone()).await,
            Err(EvaluationError::DuplicateCode(_))
        ));
        edited.unique_code = "AB99ZZ00".into();
        edited.examiner = "Ustadzah A".into();
        store.update(edited).await.unwrap();
        assert_eq!(
            store.get(newer.id).await.unwrap().unwrap().examiner,
            "Ustadzah A"
        );
    }

    #[tokio::test]
    async fn memory_store_rules() {
        let store = MemoryStore::new();
        exercise_rules(&store).await;
    }

    #[tokio::test]
    async fn json_store_rules() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path().join("evaluations")).await.unwrap();
        exercise_rules(&store).await;
    }

    #[tokio::test]
    async fn json_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let r = record("PERSIST1");
        {
            let store = JsonDirStore::open(dir.path()).await.unwrap();
            store.insert(r.clone()).await.unwrap();
        }
        let store = JsonDirStore::open(dir.path()).await.unwrap();
        let loaded = store.get(r.id).await.unwrap().unwrap();
        assert_eq!(loaded, r);
        assert!(dir.path().join(format!("{}.json", r.id)).exists());
    }

    #[tokio::test]
    async fn json_store_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let store = JsonDirStore::open(dir.path()).await.unwrap();
        store.insert(record("OK000001")).await.unwrap();
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_binds_have_one_winner() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonDirStore::open(dir.path()).await.unwrap());
        let r = store.insert(record("RACE0001")).await.unwrap();

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.bind_subject(r.id, "First").await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.bind_subject(r.id, "Second").await })
        };
        let results = [a.await.unwrap(), b.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(store.get(r.id).await.unwrap().unwrap().has_bound_subject());
    }
}
