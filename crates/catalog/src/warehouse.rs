use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Months, NaiveDate};

use warehouse_core::{DomainError, DomainResult, ProductId};

use crate::product::{Category, MAX_RATING, Product, today};

/// Thread-safe, in-memory product store.
///
/// The backing `Vec` preserves insertion order, which several queries are
/// specified in. Readers clone snapshots out under the read lock; writers do
/// their duplicate check and insert (or find and swap) under a single write
/// guard, so two adds can never both claim the same id and a reader sees the
/// collection entirely before or entirely after any write.
#[derive(Debug, Default)]
pub struct Warehouse {
    products: RwLock<Vec<Product>>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single push or slot assignment, so a poisoned lock
    // still guards a valid collection and can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        match self.products.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        match self.products.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Insert a fully-formed product.
    ///
    /// Fails with [`DomainError::DuplicateId`] when a product with the same id
    /// is already stored; the collection is untouched in that case.
    pub fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::duplicate_id(product.id().as_str()));
        }
        products.push(product);
        Ok(())
    }

    /// Replace the product with `id`, keeping its id and creation date and
    /// stamping today as the last-modified date.
    ///
    /// Returns the replacement, or `None` when no product with that id exists
    /// (a no-op, not an error). The replacement takes the old entry's slot, so
    /// insertion order is stable across modifications and a concurrent reader
    /// observes either the old or the new version, never a gap.
    pub fn modify(
        &self,
        id: &ProductId,
        new_name: impl Into<String>,
        new_category: Category,
        new_rating: u8,
    ) -> Option<Product> {
        let mut products = self.write();
        let slot = products.iter_mut().find(|p| p.id() == id)?;
        let replacement = slot.with_update(new_name, new_category, new_rating, today());
        *slot = replacement.clone();
        Some(replacement)
    }

    /// Snapshot of all products, in insertion order.
    pub fn get_all(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn get_by_id(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id() == id).cloned()
    }

    /// Products of `category`, sorted ascending by name, case-insensitively.
    /// The sort is stable, so products with names equal under lowercasing keep
    /// their insertion order.
    pub fn get_by_category(&self, category: Category) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.name().to_lowercase());
        matches
    }

    /// Products created strictly after `date`, in insertion order.
    pub fn get_created_after(&self, date: NaiveDate) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.creation_date() > date)
            .cloned()
            .collect()
    }

    /// Products modified at least once since creation, in insertion order.
    pub fn get_modified(&self) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.is_modified())
            .cloned()
            .collect()
    }

    /// Distinct categories with at least one product, ordered by the first
    /// appearance of each category in the collection.
    pub fn non_empty_categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in self.read().iter() {
            if !categories.contains(&product.category()) {
                categories.push(product.category());
            }
        }
        categories
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.read()
            .iter()
            .filter(|p| p.category() == category)
            .count()
    }

    /// Number of products per first character of their name. The character is
    /// taken literally: no case folding, no normalization.
    pub fn group_by_first_letter(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for product in self.read().iter() {
            if let Some(first) = product.name().chars().next() {
                *counts.entry(first).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Products rated [`MAX_RATING`] and created within the last calendar
    /// month, sorted ascending by creation date.
    ///
    /// The cutoff is a calendar-month subtraction from today; when today's
    /// day-of-month does not exist a month back (e.g. March 31st), it clamps
    /// to the last valid day (February 28th/29th). Only creation dates
    /// strictly after the cutoff qualify.
    pub fn top_rated_recent(&self) -> Vec<Product> {
        let cutoff = today()
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        let mut matches: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.rating() == MAX_RATING && p.creation_date() > cutoff)
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.creation_date());
        matches
    }
}
