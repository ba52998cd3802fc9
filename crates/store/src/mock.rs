//! Mock Document Store Implementation
//!
//! Keeps collections in memory with the same equality-filter, `$set` and
//! upsert semantics as the MongoDB adapter. Thread-safe via `Arc<Mutex<>>`.
//! Failure injection lets tests exercise the store-failure path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use bson::{oid::ObjectId, Bson, Document};

use crate::{DeleteAck, DocumentStore, InsertOneAck, StoreError, UpdateAck};

const ID_FIELD: &str = "_id";

type Collections = HashMap<String, Vec<Document>>;

/// In-memory document store that records how often it was called.
#[derive(Debug, Clone, Default)]
pub struct MockDocumentStore {
    collections: Arc<Mutex<Collections>>,
    failing: Arc<AtomicBool>,
    operations: Arc<AtomicUsize>,
}

impl MockDocumentStore {
    /// Create a new, empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of store operations attempted so far (including failed ones).
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Snapshot of every document in a collection.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .expect("collections lock poisoned — prior test panicked")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Remove all documents and reset counters.
    pub fn reset(&self) {
        self.collections
            .lock()
            .expect("collections lock poisoned — prior test panicked")
            .clear();
        self.operations.store(0, Ordering::SeqCst);
        self.failing.store(false, Ordering::SeqCst);
    }

    fn begin(&self, operation: &str, collection: &str) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(operation, collection, "Mock store: operation");

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Connection(
                "mock store is unavailable".to_string(),
            ));
        }

        self.collections
            .lock()
            .map_err(|e| StoreError::Connection(format!("collections lock poisoned: {e}")))
    }
}

/// Resolve a possibly dotted path (`buyer.email`) inside a document.
fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = current.as_document()?.get(segment)?;
    }
    Some(current)
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(path, expected)| lookup(document, path) == Some(expected))
}

/// Assign `value` at a possibly dotted path, creating sub-documents as needed.
fn set_path(document: &mut Document, path: &str, value: Bson) -> Result<(), StoreError> {
    match path.split_once('.') {
        None => {
            document.insert(path, value);
            Ok(())
        }
        Some((head, rest)) => {
            if !document.contains_key(head) {
                document.insert(head, Document::new());
            }
            let inner = document.get_document_mut(head).map_err(|_| {
                StoreError::Query(format!(
                    "Cannot create field '{}' in element {{{}: ...}}",
                    rest, head
                ))
            })?;
            set_path(inner, rest, value)
        }
    }
}

fn apply_set(target: &Document, fields: &Document) -> Result<Document, StoreError> {
    let mut updated = target.clone();
    for (path, value) in fields {
        if path == ID_FIELD && target.get(ID_FIELD).is_some_and(|id| id != value) {
            return Err(StoreError::Query(
                "Performing an update on the path '_id' would modify the immutable field '_id'"
                    .to_string(),
            ));
        }
        set_path(&mut updated, path, value.clone())?;
    }
    Ok(updated)
}

/// Move (or create) the identifier so it is the first field, as the server stores it.
fn with_leading_id(mut document: Document) -> Result<(ObjectId, Document), StoreError> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(id)) => id,
        Some(other) => {
            return Err(StoreError::InvalidDocument(format!(
                "_id must be an object identifier, got {}",
                other
            )))
        }
        None => ObjectId::new(),
    };

    let mut stored = Document::new();
    stored.insert(ID_FIELD, id);
    for (key, value) in document {
        stored.insert(key, value);
    }
    Ok((id, stored))
}

#[async_trait::async_trait]
impl DocumentStore for MockDocumentStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.begin("find", collection)?;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.begin("find_one", collection)?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)).cloned()))
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneAck, StoreError> {
        let mut collections = self.begin("insert_one", collection)?;
        let docs = collections.entry(collection.to_string()).or_default();

        let (id, stored) = with_leading_id(document)?;
        if docs
            .iter()
            .any(|doc| matches!(doc.get(ID_FIELD), Some(Bson::ObjectId(existing)) if *existing == id))
        {
            return Err(StoreError::Query(format!(
                "E11000 duplicate key error collection: {} dup key: {{ _id: {} }}",
                collection, id
            )));
        }
        docs.push(stored);

        Ok(InsertOneAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError> {
        let mut collections = self.begin("update_one", collection)?;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter_mut().find(|doc| matches(doc, &filter)) {
            let updated = apply_set(existing, &fields)?;
            let modified = updated != *existing;
            *existing = updated;
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_count: 0,
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_count: 0,
                upserted_id: None,
            });
        }

        // Equality fields of the filter seed the new document
        let mut seed = Document::new();
        for (path, value) in &filter {
            set_path(&mut seed, path, value.clone())?;
        }
        let (id, created) = with_leading_id(apply_set(&seed, &fields)?)?;
        docs.push(created);

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteAck, StoreError> {
        let mut collections = self.begin("delete_one", collection)?;
        let deleted = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|doc| matches(doc, &filter)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: deleted,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.begin("ping", "admin").map(|_| ())
    }

    async fn shutdown(&self) {
        tracing::debug!("Mock store: shutdown");
    }
}
