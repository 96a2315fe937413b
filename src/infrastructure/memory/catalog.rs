//! In-memory catalog shared by the per-entity repositories.
//!
//! One [`MemoryCatalog`] owns all three collections behind a single
//! `RwLock`, so a book listing can resolve author/category names for
//! filtering without a second lock. Identifiers come from a monotonic
//! counter and are never reused, so deleting and recreating entities can
//! not produce duplicate ids.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{Author, Book, Category};
use crate::domain::id::EntityId;
use crate::error::AppError;

#[derive(Default)]
pub(super) struct CatalogInner {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
}

/// Shared mutable state of the in-memory backend.
///
/// Collections keep insertion order, which is also the listing order.
pub struct MemoryCatalog {
    next_id: AtomicU64,
    inner: RwLock<CatalogInner>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            inner: RwLock::new(CatalogInner::default()),
        }
    }

    /// Issues the next serial identifier. Shared across all entity types;
    /// strictly increasing, never reused after deletion.
    pub(super) fn mint_id(&self) -> EntityId {
        EntityId::new(self.next_id.fetch_add(1, Ordering::Relaxed).to_string())
    }

    pub(super) fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CatalogInner>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("catalog lock poisoned"))
    }

    pub(super) fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, CatalogInner>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("catalog lock poisoned"))
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match used by listing filters.
pub(super) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Applies 1-indexed page/limit slicing to an already-filtered collection.
/// Out-of-range pages yield an empty slice.
pub(super) fn paginate<T: Clone>(items: &[T], page: i64, limit: i64) -> Vec<T> {
    let start = (page - 1).saturating_mul(limit);
    if start < 0 || start as usize >= items.len() {
        return Vec::new();
    }
    let start = start as usize;
    let end = items.len().min(start.saturating_add(limit as usize));
    items[start..end].to_vec()
}
