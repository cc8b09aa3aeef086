//! The client store: the single owner of load/validate/mutate/save logic.
//!
//! Every operation re-reads the document at entry; mutating operations
//! rewrite it in full on exit. There is no in-memory cache held across
//! operations and no partial persistence: each operation is one atomic
//! step from the caller's perspective.

use crate::error::{Error, Result};
use crate::persist;
use crate::types::{Client, ClientDraft, ClientId};
use crate::validate::validate_draft;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store of client records.
///
/// This is the main entry point. Create a store with [`ClientStore::open`]
/// or [`ClientStore::builder`], then call the operations directly:
///
/// ```ignore
/// let store = ClientStore::open("./clients.json")?;
///
/// let client = store.create(ClientDraft::new("Ada Lovelace", "ada@example.com", "low"))?;
/// let same = store.get(&client.id.to_string())?;
/// store.delete(&client.id.to_string())?;
/// ```
///
/// # Concurrency
///
/// Mutating operations take an internal mutex for their whole
/// load-validate-mutate-save sequence, so read-modify-write is atomic per
/// store handle: concurrent mutators through one handle cannot lose writes
/// or mint duplicate ids. The document itself has no cross-process
/// protection — two independent writers on the same file are last-write-wins
/// at the document level. Single-writer deployment is assumed.
pub struct ClientStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    // Keeps a temp-backed store's directory alive for the store's lifetime.
    _tempdir: Option<tempfile::TempDir>,
}

impl ClientStore {
    /// Open a store backed by the document at `path`.
    ///
    /// Parent directories are created if needed. The document itself is not
    /// touched until the first mutating operation; a missing document reads
    /// as the empty collection.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create a builder for store configuration.
    pub fn builder() -> ClientStoreBuilder {
        ClientStoreBuilder::new()
    }

    /// The document path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All client records, in storage order.
    ///
    /// Infallible: an absent or malformed document reads as empty.
    pub fn list(&self) -> Vec<Client> {
        persist::load(&self.path)
    }

    /// Look up one client by caller-supplied id.
    ///
    /// The id is parsed as a positive integer and compared numerically;
    /// unparsable input and absent ids both yield [`Error::NotFound`]
    /// carrying the raw requested id.
    pub fn get(&self, id: &str) -> Result<Client> {
        let clients = persist::load(&self.path);
        find_by_id(&clients, id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Validate a draft and append it as a new record.
    ///
    /// On success the record gets a fresh id strictly greater than every id
    /// present at the time of the call, today's date as `created_date`, and
    /// the full collection is persisted before returning. On validation
    /// failure nothing is persisted.
    pub fn create(&self, draft: ClientDraft) -> Result<Client> {
        let _guard = self.write_lock.lock();
        let mut clients = persist::load(&self.path);

        let valid = validate_draft(&draft).map_err(Error::Validation)?;

        // max+1 stays fresh against every live id, including gap-creating
        // deletes.
        let next_id = clients
            .iter()
            .map(|c| c.id.value())
            .max()
            .unwrap_or(0)
            + 1;

        let client = Client {
            id: ClientId::new(next_id),
            full_name: valid.full_name,
            email: valid.email,
            risk_category: valid.risk_category,
            created_date: chrono::Local::now().date_naive(),
        };

        clients.push(client.clone());
        persist::save(&self.path, &clients)?;
        debug!(id = %client.id, "client created");
        Ok(client)
    }

    /// Replace the mutable fields of an existing record.
    ///
    /// Lookup failure short-circuits before validation; either failure
    /// persists nothing. `id` and `created_date` are never touched.
    pub fn update(&self, id: &str, draft: ClientDraft) -> Result<Client> {
        let _guard = self.write_lock.lock();
        let mut clients = persist::load(&self.path);

        let index = position_of(&clients, id).ok_or_else(|| Error::not_found(id))?;
        let valid = validate_draft(&draft).map_err(Error::Validation)?;

        let client = &mut clients[index];
        client.full_name = valid.full_name;
        client.email = valid.email;
        client.risk_category = valid.risk_category;
        let updated = client.clone();

        persist::save(&self.path, &clients)?;
        debug!(id = %updated.id, "client updated");
        Ok(updated)
    }

    /// Remove a record by id.
    ///
    /// Lookup failure short-circuits with nothing persisted. All other
    /// records keep their order.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut clients = persist::load(&self.path);

        let index = position_of(&clients, id).ok_or_else(|| Error::not_found(id))?;
        let removed = clients.remove(index);

        persist::save(&self.path, &clients)?;
        debug!(id = %removed.id, "client deleted");
        Ok(())
    }
}

fn find_by_id<'a>(clients: &'a [Client], id: &str) -> Option<&'a Client> {
    let id = ClientId::parse(id)?;
    clients.iter().find(|c| c.id == id)
}

fn position_of(clients: &[Client], id: &str) -> Option<usize> {
    let id = ClientId::parse(id)?;
    clients.iter().position(|c| c.id == id)
}

/// Builder for store configuration.
///
/// ```ignore
/// // Production: a fixed document path
/// let store = ClientStore::builder().path("./data/clients.json").open()?;
///
/// // Testing: temp-directory-backed, cleaned up on drop
/// let store = ClientStore::builder().open_temp()?;
/// ```
pub struct ClientStoreBuilder {
    path: Option<PathBuf>,
}

impl ClientStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Set the document path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the store at the configured path (default `clients.json`).
    ///
    /// Creates parent directories if needed.
    pub fn open(self) -> Result<ClientStore> {
        let path = self.path.unwrap_or_else(|| PathBuf::from("clients.json"));
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        Ok(ClientStore {
            path,
            write_lock: Mutex::new(()),
            _tempdir: None,
        })
    }

    /// Open a store backed by a fresh temporary directory.
    ///
    /// The directory (and the document in it) is removed when the store is
    /// dropped. Useful for tests and demos.
    pub fn open_temp(self) -> Result<ClientStore> {
        let tempdir = tempfile::tempdir()?;
        let path = tempdir.path().join("clients.json");
        Ok(ClientStore {
            path,
            write_lock: Mutex::new(()),
            _tempdir: Some(tempdir),
        })
    }
}

impl Default for ClientStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
