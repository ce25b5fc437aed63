//! In-memory record store.
//!
//! [`RecordStore`] owns the clinical and wellness collections, assigns
//! ids, and writes the whole store through its [`Persistence`] after
//! every change. Each kind has its own id space.
//!
//! Next-id counters are never persisted. They are recomputed from the
//! highest stored id on open, so an externally edited file cannot leave
//! them out of step.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{
    ClinicalRecord, NewRecord, Record, RecordKind, RecordPatch, WellnessRecord,
};
use crate::storage::{Collections, Persistence};

/// Owner of both record collections.
#[derive(Debug)]
pub struct RecordStore<P> {
    persistence: P,
    clinical: Vec<ClinicalRecord>,
    wellness: Vec<WellnessRecord>,
    next_clinical_id: u64,
    next_wellness_id: u64,
}

/// One past the highest id, or 1 for an empty collection.
///
/// `None` when the highest id is `u64::MAX` and no id is left to hand out.
fn next_id_after<I: IntoIterator<Item = u64>>(ids: I) -> Option<u64> {
    ids.into_iter().max().map_or(Some(1), |max| max.checked_add(1))
}

fn require_text(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::RequiredField(field));
    }
    Ok(())
}

impl<P: Persistence> RecordStore<P> {
    /// Load both collections and compute the id counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted data cannot be read.
    pub fn open(persistence: P) -> Result<Self> {
        let Collections { clinical, wellness } = persistence.load()?;
        let next_clinical_id = next_id_after(clinical.iter().map(|r| r.id))
            .ok_or(Error::IdExhausted(RecordKind::Clinical))?;
        let next_wellness_id = next_id_after(wellness.iter().map(|r| r.id))
            .ok_or(Error::IdExhausted(RecordKind::Wellness))?;

        debug!(
            clinical = clinical.len(),
            wellness = wellness.len(),
            next_clinical_id,
            next_wellness_id,
            "Record store opened"
        );

        Ok(Self {
            persistence,
            clinical,
            wellness,
            next_clinical_id,
            next_wellness_id,
        })
    }

    /// The persistence backend this store writes through.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Id the next created record of `kind` will receive.
    #[must_use]
    pub fn next_id(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::Clinical => self.next_clinical_id,
            RecordKind::Wellness => self.next_wellness_id,
        }
    }

    /// Number of records of `kind`.
    #[must_use]
    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Clinical => self.clinical.len(),
            RecordKind::Wellness => self.wellness.len(),
        }
    }

    /// True when both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clinical.is_empty() && self.wellness.is_empty()
    }

    /// Every record: clinical first, then wellness, ascending id within each.
    #[must_use]
    pub fn list_all(&self) -> Vec<Record> {
        let mut all = self.list_kind(RecordKind::Clinical);
        all.extend(self.list_kind(RecordKind::Wellness));
        all
    }

    /// One collection in ascending id order.
    #[must_use]
    pub fn list_kind(&self, kind: RecordKind) -> Vec<Record> {
        let mut records: Vec<Record> = match kind {
            RecordKind::Clinical => self.clinical.iter().cloned().map(Record::Clinical).collect(),
            RecordKind::Wellness => self.wellness.iter().cloned().map(Record::Wellness).collect(),
        };
        records.sort_by_key(Record::id);
        records
    }

    /// Records of `kind` whose category matches, ignoring case.
    ///
    /// Clinical records match on their free-text category, habits on
    /// the display name of their wellness category.
    #[must_use]
    pub fn list_by_category(&self, kind: RecordKind, category: &str) -> Vec<Record> {
        let wanted = category.trim().to_lowercase();
        self.list_kind(kind)
            .into_iter()
            .filter(|record| match record {
                Record::Clinical(r) => r.category.to_lowercase() == wanted,
                Record::Wellness(r) => r.wellness_category.as_str().to_lowercase() == wanted,
            })
            .collect()
    }

    /// Look up one record.
    #[must_use]
    pub fn get(&self, kind: RecordKind, id: u64) -> Option<Record> {
        match kind {
            RecordKind::Clinical => self
                .clinical
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .map(Record::Clinical),
            RecordKind::Wellness => self
                .wellness
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .map(Record::Wellness),
        }
    }

    /// Create a record and return its assigned id.
    ///
    /// The record and its id are only kept if the flush succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] if the label (or a clinical
    /// category) is blank, [`Error::IdExhausted`] if no id is left, or
    /// the flush error if writing fails.
    pub fn create(&mut self, new: NewRecord) -> Result<u64> {
        match &new {
            NewRecord::Clinical(fields) => {
                require_text(&fields.label, "label")?;
                require_text(&fields.category, "type")?;
            }
            NewRecord::Wellness(fields) => require_text(&fields.label, "label")?,
        }

        let kind = new.kind();
        let id = self.next_id(kind);
        let following = id.checked_add(1).ok_or(Error::IdExhausted(kind))?;

        match new {
            NewRecord::Clinical(fields) => self.clinical.push(fields.into_record(id)),
            NewRecord::Wellness(fields) => self.wellness.push(fields.into_record(id)),
        }

        if let Err(err) = self.flush() {
            match kind {
                RecordKind::Clinical => {
                    self.clinical.pop();
                }
                RecordKind::Wellness => {
                    self.wellness.pop();
                }
            }
            warn!(kind = %kind, id, error = %err, "Create rolled back");
            return Err(err);
        }

        match kind {
            RecordKind::Clinical => self.next_clinical_id = following,
            RecordKind::Wellness => self.next_wellness_id = following,
        }
        info!(kind = %kind, id, "Record created");
        Ok(id)
    }

    /// Merge `patch` into the record `id` of `kind`.
    ///
    /// Returns the updated record, or `None` when no such record exists.
    /// A miss changes nothing and writes nothing. If the flush fails the
    /// record keeps its previous fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the patch is for the other kind,
    /// [`Error::RequiredField`] if it would blank a required field, or the
    /// flush error if writing fails.
    pub fn update(&mut self, kind: RecordKind, id: u64, patch: RecordPatch) -> Result<Option<Record>> {
        if patch.kind() != kind {
            return Err(Error::KindMismatch {
                target: kind,
                patch: patch.kind(),
            });
        }
        if let Some(label) = patch.label() {
            require_text(label, "label")?;
        }

        let updated = match patch {
            RecordPatch::Clinical(patch) => {
                if let Some(category) = patch.category.as_deref() {
                    require_text(category, "type")?;
                }
                let Some(index) = self.clinical.iter().position(|r| r.id == id) else {
                    debug!(kind = %kind, id, "Update target not found");
                    return Ok(None);
                };
                let previous = self.clinical[index].clone();
                patch.apply(&mut self.clinical[index]);
                if let Err(err) = self.flush() {
                    self.clinical[index] = previous;
                    warn!(kind = %kind, id, error = %err, "Update rolled back");
                    return Err(err);
                }
                Record::Clinical(self.clinical[index].clone())
            }
            RecordPatch::Wellness(patch) => {
                let Some(index) = self.wellness.iter().position(|r| r.id == id) else {
                    debug!(kind = %kind, id, "Update target not found");
                    return Ok(None);
                };
                let previous = self.wellness[index].clone();
                patch.apply(&mut self.wellness[index]);
                if let Err(err) = self.flush() {
                    self.wellness[index] = previous;
                    warn!(kind = %kind, id, error = %err, "Update rolled back");
                    return Err(err);
                }
                Record::Wellness(self.wellness[index].clone())
            }
        };

        info!(kind = %kind, id, "Record updated");
        Ok(Some(updated))
    }

    /// Remove the record `id` of `kind`.
    ///
    /// Returns the removed record. Deleting an id that does not exist is
    /// a no-op that returns `None`. If the flush fails the record stays.
    ///
    /// # Errors
    ///
    /// Returns the flush error if writing fails.
    pub fn delete(&mut self, kind: RecordKind, id: u64) -> Result<Option<Record>> {
        let removed = match kind {
            RecordKind::Clinical => {
                let Some(found) = self.clinical.iter().find(|r| r.id == id).cloned() else {
                    debug!(kind = %kind, id, "Delete target not found");
                    return Ok(None);
                };
                let snapshot = self.clinical.clone();
                self.clinical.retain(|r| r.id != id);
                if let Err(err) = self.flush() {
                    self.clinical = snapshot;
                    warn!(kind = %kind, id, error = %err, "Delete rolled back");
                    return Err(err);
                }
                Record::Clinical(found)
            }
            RecordKind::Wellness => {
                let Some(found) = self.wellness.iter().find(|r| r.id == id).cloned() else {
                    debug!(kind = %kind, id, "Delete target not found");
                    return Ok(None);
                };
                let snapshot = self.wellness.clone();
                self.wellness.retain(|r| r.id != id);
                if let Err(err) = self.flush() {
                    self.wellness = snapshot;
                    warn!(kind = %kind, id, error = %err, "Delete rolled back");
                    return Err(err);
                }
                Record::Wellness(found)
            }
        };

        info!(kind = %kind, id, "Record deleted");
        Ok(Some(removed))
    }

    fn flush(&self) -> Result<()> {
        self.persistence.flush(&self.clinical, &self.wellness)
    }
}

// ── Shared handle ────────────────────────────────────────────

/// Cloneable, thread-safe handle to a [`RecordStore`].
///
/// A single mutex guards both collections, so each mutation and its
/// flush complete before another caller can observe the store.
#[derive(Debug)]
pub struct SharedStore<P> {
    inner: Arc<Mutex<RecordStore<P>>>,
}

impl<P> Clone for SharedStore<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Persistence> SharedStore<P> {
    #[must_use]
    pub fn new(store: RecordStore<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecordStore<P>>> {
        self.inner
            .lock()
            .map_err(|_| Error::Other("record store lock poisoned".to_string()))
    }

    /// See [`RecordStore::list_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        Ok(self.lock()?.list_all())
    }

    /// See [`RecordStore::list_by_category`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn list_by_category(&self, kind: RecordKind, category: &str) -> Result<Vec<Record>> {
        Ok(self.lock()?.list_by_category(kind, category))
    }

    /// See [`RecordStore::create`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the create fails.
    pub fn create(&self, new: NewRecord) -> Result<u64> {
        self.lock()?.create(new)
    }

    /// See [`RecordStore::update`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the update fails.
    pub fn update(&self, kind: RecordKind, id: u64, patch: RecordPatch) -> Result<Option<Record>> {
        self.lock()?.update(kind, id, patch)
    }

    /// See [`RecordStore::delete`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the delete fails.
    pub fn delete(&self, kind: RecordKind, id: u64) -> Result<Option<Record>> {
        self.lock()?.delete(kind, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClinicalPatch, Frequency, NewClinical, NewWellness, Severity, WellnessCategory,
        WellnessPatch,
    };
    use crate::storage::JsonFileStorage;
    use std::cell::{Cell, RefCell};
    use std::thread;
    use tempfile::TempDir;

    /// Persistence double that records every flush.
    ///
    /// While `failing` is set every flush returns an IO error and saves
    /// nothing.
    #[derive(Debug, Default)]
    struct MemoryPersistence {
        saved: RefCell<Collections>,
        flushes: Cell<usize>,
        failing: Cell<bool>,
    }

    impl MemoryPersistence {
        fn seeded(clinical: Vec<ClinicalRecord>, wellness: Vec<WellnessRecord>) -> Self {
            Self {
                saved: RefCell::new(Collections { clinical, wellness }),
                ..Self::default()
            }
        }
    }

    impl Persistence for MemoryPersistence {
        fn load(&self) -> Result<Collections> {
            Ok(self.saved.borrow().clone())
        }

        fn flush(&self, clinical: &[ClinicalRecord], wellness: &[WellnessRecord]) -> Result<()> {
            if self.failing.get() {
                return Err(Error::Io(std::io::Error::other("disk full")));
            }
            self.flushes.set(self.flushes.get() + 1);
            *self.saved.borrow_mut() = Collections {
                clinical: clinical.to_vec(),
                wellness: wellness.to_vec(),
            };
            Ok(())
        }
    }

    fn fever() -> NewRecord {
        NewRecord::Clinical(NewClinical {
            label: "Fever".to_string(),
            category: "Symptoms".to_string(),
            description: "High temp".to_string(),
            timestamp: "2024-01-01 09:00".to_string(),
            severity: Severity::Moderate,
        })
    }

    fn clinical(label: &str, category: &str) -> NewRecord {
        NewRecord::Clinical(NewClinical {
            label: label.to_string(),
            category: category.to_string(),
            description: String::new(),
            timestamp: String::new(),
            severity: Severity::Mild,
        })
    }

    fn walk() -> NewRecord {
        NewRecord::Wellness(NewWellness {
            label: "Walk".to_string(),
            wellness_category: WellnessCategory::Exercise,
            frequency: Frequency::Daily,
            description: "30 min".to_string(),
            timestamp: "2024-01-01 07:00".to_string(),
        })
    }

    fn empty_store() -> RecordStore<MemoryPersistence> {
        RecordStore::open(MemoryPersistence::default()).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<(RecordKind, u64)> {
        records.iter().map(|r| (r.kind(), r.id())).collect()
    }

    #[test]
    fn test_create_assigns_first_id_and_lists() {
        let mut store = empty_store();

        let id = store.create(fever()).unwrap();

        assert_eq!(id, 1);
        let all = store.list_all();
        assert_eq!(all.len(), 1);
        match &all[0] {
            Record::Clinical(r) => {
                assert_eq!(r.id, 1);
                assert_eq!(r.label, "Fever");
                assert_eq!(r.category, "Symptoms");
                assert_eq!(r.description, "High temp");
                assert_eq!(r.timestamp, "2024-01-01 09:00");
                assert_eq!(r.severity, Severity::Moderate);
            }
            other => panic!("expected clinical record, got {other:?}"),
        }
    }

    #[test]
    fn test_kinds_have_independent_id_spaces() {
        let mut store = empty_store();

        assert_eq!(store.create(fever()).unwrap(), 1);
        assert_eq!(store.create(walk()).unwrap(), 1);

        assert_eq!(
            ids(&store.list_all()),
            vec![(RecordKind::Clinical, 1), (RecordKind::Wellness, 1)]
        );
    }

    #[test]
    fn test_list_all_orders_clinical_first_then_by_id() {
        let persistence = MemoryPersistence::seeded(
            vec![
                clinical_record(5, "Medicine"),
                clinical_record(2, "Symptoms"),
            ],
            vec![wellness_record(3), wellness_record(1)],
        );
        let store = RecordStore::open(persistence).unwrap();

        assert_eq!(
            ids(&store.list_all()),
            vec![
                (RecordKind::Clinical, 2),
                (RecordKind::Clinical, 5),
                (RecordKind::Wellness, 1),
                (RecordKind::Wellness, 3),
            ]
        );
    }

    #[test]
    fn test_ids_strictly_increase_and_survive_deletes() {
        let mut store = empty_store();
        let first = store.create(clinical("a", "Symptoms")).unwrap();
        let second = store.create(clinical("b", "Symptoms")).unwrap();
        store.delete(RecordKind::Clinical, second).unwrap();
        let third = store.create(clinical("c", "Symptoms")).unwrap();

        assert!(first < second && second < third);
        assert_eq!(third, 3);
    }

    #[test]
    fn test_open_recomputes_next_id_from_max() {
        let persistence = MemoryPersistence::seeded(
            vec![clinical_record(4, "Symptoms"), clinical_record(9, "Medicine")],
            vec![],
        );
        let store = RecordStore::open(persistence).unwrap();

        assert_eq!(store.next_id(RecordKind::Clinical), 10);
        assert_eq!(store.next_id(RecordKind::Wellness), 1);
    }

    #[test]
    fn test_list_by_category_is_case_insensitive() {
        let mut store = empty_store();
        store.create(clinical("Fever", "Symptoms")).unwrap();
        store.create(clinical("Aspirin", "medicine")).unwrap();
        store.create(clinical("Cough", "SYMPTOMS")).unwrap();
        store.create(walk()).unwrap();

        let symptoms = store.list_by_category(RecordKind::Clinical, "symptoms");
        assert_eq!(
            ids(&symptoms),
            vec![(RecordKind::Clinical, 1), (RecordKind::Clinical, 3)]
        );

        let exercise = store.list_by_category(RecordKind::Wellness, "exercise");
        assert_eq!(ids(&exercise), vec![(RecordKind::Wellness, 1)]);
        assert!(store.list_by_category(RecordKind::Wellness, "sleep").is_empty());
    }

    #[test]
    fn test_list_kind_filters_one_collection() {
        let mut store = empty_store();
        store.create(fever()).unwrap();
        store.create(walk()).unwrap();

        let wellness = store.list_kind(RecordKind::Wellness);
        assert_eq!(ids(&wellness), vec![(RecordKind::Wellness, 1)]);
    }

    #[test]
    fn test_create_rejects_blank_label() {
        let mut store = empty_store();

        let result = store.create(clinical("   ", "Symptoms"));

        assert!(matches!(result, Err(Error::RequiredField("label"))));
        assert!(store.is_empty());
        assert_eq!(store.next_id(RecordKind::Clinical), 1);
        assert_eq!(store.persistence().flushes.get(), 0);
    }

    #[test]
    fn test_create_rejects_blank_clinical_type() {
        let mut store = empty_store();
        let result = store.create(clinical("Fever", ""));
        assert!(matches!(result, Err(Error::RequiredField("type"))));
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let mut store = empty_store();
        store.create(fever()).unwrap();

        let patch = RecordPatch::Clinical(ClinicalPatch {
            severity: Some(Severity::Critical),
            description: Some("Higher temp".to_string()),
            ..ClinicalPatch::default()
        });
        let updated = store.update(RecordKind::Clinical, 1, patch).unwrap();

        let Some(Record::Clinical(record)) = updated else {
            panic!("expected updated clinical record");
        };
        assert_eq!(record.id, 1);
        assert_eq!(record.severity, Severity::Critical);
        assert_eq!(record.description, "Higher temp");
        assert_eq!(record.label, "Fever");
        assert_eq!(record.category, "Symptoms");
        assert_eq!(record.timestamp, "2024-01-01 09:00");
        assert_eq!(store.get(RecordKind::Clinical, 1), Some(Record::Clinical(record)));
    }

    #[test]
    fn test_update_missing_id_is_detectable_noop() {
        let mut store = empty_store();
        store.create(walk()).unwrap();
        let flushes = store.persistence().flushes.get();

        let patch = RecordPatch::Wellness(WellnessPatch {
            frequency: Some(Frequency::Weekly),
            ..WellnessPatch::default()
        });
        let result = store.update(RecordKind::Wellness, 42, patch).unwrap();

        assert!(result.is_none());
        assert_eq!(store.persistence().flushes.get(), flushes);
    }

    #[test]
    fn test_update_rejects_kind_mismatch() {
        let mut store = empty_store();
        store.create(fever()).unwrap();

        let patch = RecordPatch::Wellness(WellnessPatch::default());
        let result = store.update(RecordKind::Clinical, 1, patch);

        assert!(matches!(
            result,
            Err(Error::KindMismatch {
                target: RecordKind::Clinical,
                patch: RecordKind::Wellness
            })
        ));
    }

    #[test]
    fn test_update_rejects_blank_label() {
        let mut store = empty_store();
        store.create(walk()).unwrap();

        let patch = RecordPatch::Wellness(WellnessPatch {
            label: Some(String::new()),
            ..WellnessPatch::default()
        });

        assert!(matches!(
            store.update(RecordKind::Wellness, 1, patch),
            Err(Error::RequiredField("label"))
        ));
        assert_eq!(store.get(RecordKind::Wellness, 1).unwrap().label(), "Walk");
    }

    #[test]
    fn test_delete_removes_only_target_kind() {
        let mut store = empty_store();
        store.create(fever()).unwrap();
        store.create(walk()).unwrap();

        let removed = store.delete(RecordKind::Clinical, 1).unwrap();

        assert_eq!(removed.map(|r| r.label().to_string()), Some("Fever".to_string()));
        assert_eq!(ids(&store.list_all()), vec![(RecordKind::Wellness, 1)]);
    }

    #[test]
    fn test_delete_missing_id_leaves_list_unchanged() {
        let mut store = empty_store();
        store.create(fever()).unwrap();
        let before = store.list_all();
        let flushes = store.persistence().flushes.get();

        assert!(store.delete(RecordKind::Clinical, 99).unwrap().is_none());
        assert!(store.delete(RecordKind::Wellness, 1).unwrap().is_none());

        assert_eq!(store.list_all(), before);
        assert_eq!(store.persistence().flushes.get(), flushes);
    }

    #[test]
    fn test_every_mutation_flushes_full_store() {
        let mut store = empty_store();
        store.create(fever()).unwrap();
        store.create(walk()).unwrap();
        store
            .update(
                RecordKind::Clinical,
                1,
                RecordPatch::Clinical(ClinicalPatch {
                    label: Some("High fever".to_string()),
                    ..ClinicalPatch::default()
                }),
            )
            .unwrap();
        store.delete(RecordKind::Wellness, 1).unwrap();

        let persistence = store.persistence();
        assert_eq!(persistence.flushes.get(), 4);
        let saved = persistence.saved.borrow();
        assert_eq!(saved.clinical.len(), 1);
        assert_eq!(saved.clinical[0].label, "High fever");
        assert!(saved.wellness.is_empty());
    }

    #[test]
    fn test_failed_create_keeps_store_and_id_unchanged() {
        let mut store = empty_store();
        store.create(fever()).unwrap();

        store.persistence().failing.set(true);
        let result = store.create(clinical("Aspirin", "Medicine"));
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(matches!(store.create(walk()), Err(Error::Io(_))));

        assert_eq!(ids(&store.list_all()), vec![(RecordKind::Clinical, 1)]);
        assert_eq!(store.next_id(RecordKind::Clinical), 2);
        assert_eq!(store.next_id(RecordKind::Wellness), 1);

        store.persistence().failing.set(false);
        assert_eq!(store.create(clinical("Cough", "Symptoms")).unwrap(), 2);

        let saved = store.persistence().saved.borrow();
        let labels: Vec<_> = saved.clinical.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Fever", "Cough"]);
        assert!(saved.wellness.is_empty());
    }

    #[test]
    fn test_failed_update_restores_previous_fields() {
        let mut store = empty_store();
        store.create(fever()).unwrap();
        let before = store.get(RecordKind::Clinical, 1);

        store.persistence().failing.set(true);
        let patch = RecordPatch::Clinical(ClinicalPatch {
            severity: Some(Severity::Critical),
            ..ClinicalPatch::default()
        });
        let result = store.update(RecordKind::Clinical, 1, patch);

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(store.get(RecordKind::Clinical, 1), before);
    }

    #[test]
    fn test_failed_delete_keeps_record() {
        let mut store = empty_store();
        store.create(walk()).unwrap();

        store.persistence().failing.set(true);
        let result = store.delete(RecordKind::Wellness, 1);

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(ids(&store.list_all()), vec![(RecordKind::Wellness, 1)]);
    }

    #[test]
    fn test_open_rejects_highest_possible_id() {
        let persistence = MemoryPersistence::seeded(vec![clinical_record(u64::MAX, "Symptoms")], vec![]);

        let result = RecordStore::open(persistence);

        assert!(matches!(result, Err(Error::IdExhausted(RecordKind::Clinical))));
    }

    #[test]
    fn test_create_refuses_when_ids_run_out() {
        let persistence = MemoryPersistence::seeded(vec![], vec![wellness_record(u64::MAX - 1)]);
        let mut store = RecordStore::open(persistence).unwrap();
        assert_eq!(store.next_id(RecordKind::Wellness), u64::MAX);

        let result = store.create(walk());

        assert!(matches!(result, Err(Error::IdExhausted(RecordKind::Wellness))));
        assert_eq!(store.len(RecordKind::Wellness), 1);
        assert_eq!(store.persistence().flushes.get(), 0);
        assert_eq!(store.create(fever()).unwrap(), 1);
    }

    #[test]
    fn test_reload_from_json_keeps_records_and_ids() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap();
            store.create(fever()).unwrap();
            store.create(clinical("Aspirin", "Medicine")).unwrap();
            store.create(walk()).unwrap();
        }

        let mut store = RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap();

        assert_eq!(
            ids(&store.list_all()),
            vec![
                (RecordKind::Clinical, 1),
                (RecordKind::Clinical, 2),
                (RecordKind::Wellness, 1),
            ]
        );
        assert_eq!(store.create(clinical("Checkup", "Appointment")).unwrap(), 3);
        assert_eq!(store.create(walk()).unwrap(), 2);
    }

    #[test]
    fn test_next_id_resets_after_emptying_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap();
            store.create(fever()).unwrap();
            store.delete(RecordKind::Clinical, 1).unwrap();
            assert_eq!(store.next_id(RecordKind::Clinical), 2);
        }

        let store = RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap();

        assert_eq!(store.next_id(RecordKind::Clinical), 1);
    }

    #[test]
    fn test_shared_store_serializes_concurrent_creates() {
        let temp_dir = TempDir::new().unwrap();
        let store = SharedStore::new(
            RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..5)
                        .map(|i| store.create(clinical(&format!("t{n}-{i}"), "Symptoms")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut assigned: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assigned.sort_unstable();

        assert_eq!(assigned, (1..=20).collect::<Vec<_>>());
        assert_eq!(store.list_all().unwrap().len(), 20);

        let reloaded = RecordStore::open(JsonFileStorage::in_dir(temp_dir.path())).unwrap();
        assert_eq!(reloaded.len(RecordKind::Clinical), 20);
    }

    #[test]
    fn test_shared_store_update_and_delete() {
        let store = SharedStore::new(empty_store());
        store.create(walk()).unwrap();

        let updated = store
            .update(
                RecordKind::Wellness,
                1,
                RecordPatch::Wellness(WellnessPatch {
                    wellness_category: Some(WellnessCategory::Sleep),
                    ..WellnessPatch::default()
                }),
            )
            .unwrap();
        assert!(updated.is_some());
        assert_eq!(
            store.list_by_category(RecordKind::Wellness, "Sleep").unwrap().len(),
            1
        );

        assert!(store.delete(RecordKind::Wellness, 1).unwrap().is_some());
        assert!(store.list_all().unwrap().is_empty());
    }

    fn clinical_record(id: u64, category: &str) -> ClinicalRecord {
        ClinicalRecord {
            id,
            label: format!("record {id}"),
            category: category.to_string(),
            description: String::new(),
            timestamp: String::new(),
            severity: Severity::Mild,
        }
    }

    fn wellness_record(id: u64) -> WellnessRecord {
        WellnessRecord {
            id,
            label: format!("habit {id}"),
            wellness_category: WellnessCategory::Hygiene,
            frequency: Frequency::Daily,
            description: String::new(),
            timestamp: String::new(),
        }
    }
}
