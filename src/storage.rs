use crate::error::{ReceiptError, Result};
use crate::schema::Receipt;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Image-to-text collaborator. Recognition failures must surface as
/// [`ReceiptError::OcrFailure`], never be swallowed into an empty draft.
pub trait OcrEngine {
    fn recognize(&self, image: &[u8]) -> Result<String>;
}

/// Persistence collaborator for confirmed receipts.
///
/// Inserts are atomic per receipt; reads are independent and may be issued
/// concurrently. Identifiers are opaque and assigned by the store at insert
/// time. The core never updates a stored receipt.
pub trait ReceiptStore {
    /// Persists `receipt`, assigning its id. Returns the stored form.
    fn insert(&self, receipt: Receipt) -> Result<Receipt>;

    /// All receipts owned by `user_id`, in insertion order.
    fn find_by_user(&self, user_id: &str) -> Result<Vec<Receipt>>;

    /// A single receipt, scoped to its owner. `Ok(None)` when the id does not
    /// exist or belongs to another user.
    fn find_by_id(&self, user_id: &str, receipt_id: &str) -> Result<Option<Receipt>>;

    /// Receipts for `user_id` with `created_at` in `[start, end]`, inclusive.
    fn find_in_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Receipt>>;
}

/// In-memory reference store used by tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    receipts: Mutex<Vec<Receipt>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn receipts(&self) -> Result<std::sync::MutexGuard<'_, Vec<Receipt>>> {
        self.receipts
            .lock()
            .map_err(|_| ReceiptError::Persistence("receipt store lock poisoned".to_string()))
    }
}

impl ReceiptStore for MemoryStore {
    fn insert(&self, mut receipt: Receipt) -> Result<Receipt> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        receipt.id = format!("r-{}", id);
        self.receipts()?.push(receipt.clone());
        Ok(receipt)
    }

    fn find_by_user(&self, user_id: &str) -> Result<Vec<Receipt>> {
        Ok(self
            .receipts()?
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_by_id(&self, user_id: &str, receipt_id: &str) -> Result<Option<Receipt>> {
        Ok(self
            .receipts()?
            .iter()
            .find(|r| r.user_id == user_id && r.id == receipt_id)
            .cloned())
    }

    fn find_in_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Receipt>> {
        Ok(self
            .receipts()?
            .iter()
            .filter(|r| r.user_id == user_id && r.created_at >= start && r.created_at <= end)
            .cloned()
            .collect())
    }
}
