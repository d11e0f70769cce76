//! # Typed Stores
//!
//! Typed views over the four storage keys of the persisted layout:
//!
//! - `documentosEmitidos` — map short id → [`DocumentRecord`]
//! - `solicitacoesTransferencia` — sequence of [`TransferRequest`]
//! - `notificacoes` — sequence of [`Notification`]
//! - `usuarioAtual` — the authenticated [`Actor`], if any
//!
//! Every mutation is a read-modify-write of the whole collection. The
//! backend is injected, never a hidden global; issuance and verification
//! receive a store reference explicitly.

use std::collections::BTreeMap;

use thiserror::Error;

use guia_core::ShortId;
use guia_store::{Collection, StorageBackend, StoreError};

use crate::actor::Actor;
use crate::document::DocumentRecord;
use crate::notification::Notification;
use crate::transfer::{TransferError, TransferRequest};

/// Storage key for issued documents.
pub const DOCUMENTS_KEY: &str = "documentosEmitidos";
/// Storage key for transfer requests.
pub const REQUESTS_KEY: &str = "solicitacoesTransferencia";
/// Storage key for notifications.
pub const NOTIFICATIONS_KEY: &str = "notificacoes";
/// Storage key for the authenticated actor slot.
pub const SESSION_KEY: &str = "usuarioAtual";

// ─── Documents ───────────────────────────────────────────────────────

/// Store of issued documents, keyed by short identifier.
#[derive(Debug)]
pub struct DocumentStore<'a, B> {
    collection: Collection<'a, B>,
}

impl<'a, B: StorageBackend> DocumentStore<'a, B> {
    /// Bind the store to a backend.
    pub fn new(backend: &'a B) -> Self {
        Self {
            collection: Collection::new(backend, DOCUMENTS_KEY),
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, DocumentRecord>, StoreError> {
        self.collection.read()
    }

    /// Insert or overwrite the record under its short identifier.
    pub fn put(&self, record: &DocumentRecord) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(record.short_id.as_str().to_string(), record.clone());
        self.collection.write(&map)
    }

    /// Exact-match lookup by short identifier.
    pub fn get(&self, short_id: &ShortId) -> Result<Option<DocumentRecord>, StoreError> {
        Ok(self.read_map()?.remove(short_id.as_str()))
    }

    /// Whether a record exists under the identifier.
    pub fn contains(&self, short_id: &ShortId) -> Result<bool, StoreError> {
        Ok(self.read_map()?.contains_key(short_id.as_str()))
    }

    /// Remove the record under the identifier. Returns whether a record
    /// was present.
    pub fn delete(&self, short_id: &ShortId) -> Result<bool, StoreError> {
        let mut map = self.read_map()?;
        let removed = map.remove(short_id.as_str()).is_some();
        if removed {
            self.collection.write(&map)?;
        }
        Ok(removed)
    }

    /// All issued documents.
    pub fn list_all(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        Ok(self.read_map()?.into_values().collect())
    }

    /// Documents issued by the given school.
    pub fn list_for_school(&self, school: &str) -> Result<Vec<DocumentRecord>, StoreError> {
        Ok(self
            .read_map()?
            .into_values()
            .filter(|d| d.origin_school == school)
            .collect())
    }
}

// ─── Transfer Requests ───────────────────────────────────────────────

/// Errors from deciding a stored transfer request.
#[derive(Error, Debug)]
pub enum RequestUpdateError {
    /// No request with the given identifier.
    #[error("transfer request not found: {0}")]
    NotFound(String),

    /// Storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The lifecycle transition was invalid.
    #[error(transparent)]
    Transition(#[from] TransferError),
}

/// Store of transfer requests.
#[derive(Debug)]
pub struct TransferRequestStore<'a, B> {
    collection: Collection<'a, B>,
}

impl<'a, B: StorageBackend> TransferRequestStore<'a, B> {
    /// Bind the store to a backend.
    pub fn new(backend: &'a B) -> Self {
        Self {
            collection: Collection::new(backend, REQUESTS_KEY),
        }
    }

    fn read_all(&self) -> Result<Vec<TransferRequest>, StoreError> {
        self.collection.read()
    }

    /// Append a newly filed request.
    pub fn submit(&self, request: &TransferRequest) -> Result<(), StoreError> {
        let mut all = self.read_all()?;
        all.push(request.clone());
        self.collection.write(&all)
    }

    /// All requests, in filing order.
    pub fn list_all(&self) -> Result<Vec<TransferRequest>, StoreError> {
        self.read_all()
    }

    /// Requests originating from the given school.
    pub fn list_for_school(&self, school: &str) -> Result<Vec<TransferRequest>, StoreError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| r.origin_school == school)
            .collect())
    }

    /// Lookup by request identifier.
    pub fn get(&self, id: &str) -> Result<Option<TransferRequest>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|r| r.id == id))
    }

    /// Approve the pending request with the given identifier.
    pub fn approve(&self, id: &str) -> Result<TransferRequest, RequestUpdateError> {
        self.decide(id, TransferRequest::approve)
    }

    /// Reject the pending request with the given identifier.
    pub fn reject(&self, id: &str) -> Result<TransferRequest, RequestUpdateError> {
        self.decide(id, TransferRequest::reject)
    }

    fn decide(
        &self,
        id: &str,
        transition: fn(&mut TransferRequest) -> Result<(), TransferError>,
    ) -> Result<TransferRequest, RequestUpdateError> {
        let mut all = self.read_all()?;
        let request = all
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RequestUpdateError::NotFound(id.to_string()))?;
        transition(request)?;
        let decided = request.clone();
        self.collection.write(&all)?;
        Ok(decided)
    }
}

// ─── Notifications ───────────────────────────────────────────────────

/// Store of notifications.
#[derive(Debug)]
pub struct NotificationStore<'a, B> {
    collection: Collection<'a, B>,
}

impl<'a, B: StorageBackend> NotificationStore<'a, B> {
    /// Bind the store to a backend.
    pub fn new(backend: &'a B) -> Self {
        Self {
            collection: Collection::new(backend, NOTIFICATIONS_KEY),
        }
    }

    /// Append a notification.
    pub fn push(&self, notification: &Notification) -> Result<(), StoreError> {
        let mut all: Vec<Notification> = self.collection.read()?;
        all.push(notification.clone());
        self.collection.write(&all)
    }

    /// All notifications, oldest first.
    pub fn list_all(&self) -> Result<Vec<Notification>, StoreError> {
        self.collection.read()
    }

    /// Notifications addressed to the given recipient.
    pub fn list_for(&self, recipient: &str) -> Result<Vec<Notification>, StoreError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|n| n.recipient == recipient)
            .collect())
    }

    /// Mark a notification as read. Returns whether it existed.
    pub fn mark_read(&self, id: &str) -> Result<bool, StoreError> {
        let mut all: Vec<Notification> = self.collection.read()?;
        match all.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                self.collection.write(&all)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ─── Session ─────────────────────────────────────────────────────────

/// The authenticated-actor slot.
#[derive(Debug)]
pub struct SessionStore<'a, B> {
    collection: Collection<'a, B>,
}

impl<'a, B: StorageBackend> SessionStore<'a, B> {
    /// Bind the store to a backend.
    pub fn new(backend: &'a B) -> Self {
        Self {
            collection: Collection::new(backend, SESSION_KEY),
        }
    }

    /// The currently signed-in actor, if any.
    pub fn current(&self) -> Result<Option<Actor>, StoreError> {
        self.collection.read()
    }

    /// Sign an actor in.
    pub fn set(&self, actor: &Actor) -> Result<(), StoreError> {
        self.collection.write(&Some(actor.clone()))
    }

    /// Sign out.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.collection.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Role;
    use crate::document::compute_digest;
    use crate::student::{AcademicTrack, StudentRecord};
    use guia_core::IssueDate;
    use guia_store::MemoryBackend;

    fn record(short: &str, school: &str) -> DocumentRecord {
        let short_id = ShortId::parse(short).unwrap();
        let student = StudentRecord {
            full_name: "Teste".to_string(),
            id_number: "1".to_string(),
            enrollment_date: "2024-02-01".to_string(),
            grade_level: "7".to_string(),
            track: AcademicTrack::Primary,
            grades: Default::default(),
            remarks: String::new(),
        };
        let issue_date = IssueDate::parse("2026-08-25").unwrap();
        let digest = compute_digest(&student, &issue_date, &short_id).unwrap();
        let qr_payload = format!("{short_id}|{digest}");
        DocumentRecord {
            id: format!("doc-{short}"),
            short_id,
            student,
            issue_date,
            origin_school: school.to_string(),
            origin_city: "Maputo".to_string(),
            track: AcademicTrack::Primary,
            digest,
            qr_payload,
        }
    }

    #[test]
    fn test_document_put_get_delete() {
        let backend = MemoryBackend::new();
        let store = DocumentStore::new(&backend);
        let rec = record("AB12CD34", "Escola A");

        store.put(&rec).unwrap();
        assert!(store.contains(&rec.short_id).unwrap());
        assert_eq!(store.get(&rec.short_id).unwrap().unwrap(), rec);

        assert!(store.delete(&rec.short_id).unwrap());
        assert!(!store.delete(&rec.short_id).unwrap());
        assert!(store.get(&rec.short_id).unwrap().is_none());
    }

    #[test]
    fn test_document_put_overwrites() {
        let backend = MemoryBackend::new();
        let store = DocumentStore::new(&backend);
        let mut rec = record("AB12CD34", "Escola A");
        store.put(&rec).unwrap();
        rec.origin_city = "Nampula".to_string();
        store.put(&rec).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
        assert_eq!(
            store.get(&rec.short_id).unwrap().unwrap().origin_city,
            "Nampula"
        );
    }

    #[test]
    fn test_document_list_for_school() {
        let backend = MemoryBackend::new();
        let store = DocumentStore::new(&backend);
        store.put(&record("AAAA1111", "Escola A")).unwrap();
        store.put(&record("BBBB2222", "Escola B")).unwrap();
        store.put(&record("CCCC3333", "Escola A")).unwrap();

        let a = store.list_for_school("Escola A").unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|d| d.origin_school == "Escola A"));
        assert_eq!(store.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_request_submit_and_decide() {
        let backend = MemoryBackend::new();
        let store = TransferRequestStore::new(&backend);
        let req = TransferRequest::new("A", "B", "Ana", "6", "1", "motivo");
        store.submit(&req).unwrap();

        let approved = store.approve(&req.id).unwrap();
        assert_eq!(approved.status, crate::transfer::RequestStatus::Approved);

        // Decision is persisted.
        let stored = store.get(&req.id).unwrap().unwrap();
        assert_eq!(stored.status, crate::transfer::RequestStatus::Approved);

        // Second decision fails and leaves state untouched.
        assert!(matches!(
            store.reject(&req.id),
            Err(RequestUpdateError::Transition(_))
        ));
    }

    #[test]
    fn test_request_decide_unknown_id() {
        let backend = MemoryBackend::new();
        let store = TransferRequestStore::new(&backend);
        assert!(matches!(
            store.approve("nope"),
            Err(RequestUpdateError::NotFound(_))
        ));
    }

    #[test]
    fn test_request_list_for_school() {
        let backend = MemoryBackend::new();
        let store = TransferRequestStore::new(&backend);
        store
            .submit(&TransferRequest::new("A", "B", "Ana", "6", "1", "m"))
            .unwrap();
        store
            .submit(&TransferRequest::new("C", "B", "Rui", "8", "2", "m"))
            .unwrap();
        assert_eq!(store.list_for_school("A").unwrap().len(), 1);
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_notifications_push_list_mark_read() {
        let backend = MemoryBackend::new();
        let store = NotificationStore::new(&backend);
        let n1 = Notification::new("Escola A", "Documento emitido");
        let n2 = Notification::new("Escola B", "Pedido aprovado");
        store.push(&n1).unwrap();
        store.push(&n2).unwrap();

        assert_eq!(store.list_for("Escola A").unwrap().len(), 1);
        assert!(store.mark_read(&n1.id).unwrap());
        assert!(!store.mark_read("missing").unwrap());
        assert!(store.list_for("Escola A").unwrap()[0].read);
    }

    #[test]
    fn test_session_set_current_clear() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(&backend);
        assert!(store.current().unwrap().is_none());

        let actor = Actor {
            id: "u-1".to_string(),
            name: "Albertina".to_string(),
            role: Role::Director,
            school: "Escola A".to_string(),
            city: "Maputo".to_string(),
        };
        store.set(&actor).unwrap();
        assert_eq!(store.current().unwrap().unwrap(), actor);

        store.clear().unwrap();
        assert!(store.current().unwrap().is_none());
    }
}
