use chrono::{NaiveDate, Utc};
use core::str::FromStr;
use serde::Serialize;

use warehouse_core::{DomainError, DomainResult, ProductId};

/// Lowest rating a product can carry.
pub const MIN_RATING: u8 = 1;

/// Highest rating a product can carry.
pub const MAX_RATING: u8 = 10;

/// Fixed product classification, serialized by enumerated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Shirt,
    Jeans,
    Hoodie,
    Jacket,
    Shoes,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Shirt,
        Category::Jeans,
        Category::Hoodie,
        Category::Jacket,
        Category::Shoes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shirt => "SHIRT",
            Category::Jeans => "JEANS",
            Category::Hoodie => "HOODIE",
            Category::Jacket => "JACKET",
            Category::Shoes => "SHOES",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive parse of the enumerated name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHIRT" => Ok(Category::Shirt),
            "JEANS" => Ok(Category::Jeans),
            "HOODIE" => Ok(Category::Hoodie),
            "JACKET" => Ok(Category::Jacket),
            "SHOES" => Ok(Category::Shoes),
            _ => Err(DomainError::validation(
                "category must be one of: SHIRT, JEANS, HOODIE, JACKET, SHOES",
            )),
        }
    }
}

/// Calendar date of the current day (UTC).
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A stored product.
///
/// Immutable once constructed; the warehouse replaces the whole value when a
/// product is modified. `creation_date` never changes after construction and
/// `last_modified_date` never precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    rating: u8,
    creation_date: NaiveDate,
    last_modified_date: NaiveDate,
}

impl Product {
    /// Build a validated product.
    ///
    /// Rejects blank names, ratings outside `MIN_RATING..=MAX_RATING`, dates
    /// in the future, and a last-modified date before the creation date.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        rating: u8,
        creation_date: NaiveDate,
        last_modified_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DomainError::validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        let today = today();
        if creation_date > today {
            return Err(DomainError::validation(
                "creation date must not be in the future",
            ));
        }
        if last_modified_date > today {
            return Err(DomainError::validation(
                "last modified date must not be in the future",
            ));
        }
        if last_modified_date < creation_date {
            return Err(DomainError::validation(
                "last modified date must not precede the creation date",
            ));
        }

        Ok(Self {
            id,
            name,
            category,
            rating,
            creation_date,
            last_modified_date,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn last_modified_date(&self) -> NaiveDate {
        self.last_modified_date
    }

    /// Whether this product has been modified since creation.
    pub fn is_modified(&self) -> bool {
        self.last_modified_date != self.creation_date
    }

    /// Replacement value for a modification: same id and creation date, new
    /// name/category/rating, `modified_on` as the last-modified date.
    pub(crate) fn with_update(
        &self,
        name: impl Into<String>,
        category: Category,
        rating: u8,
        modified_on: NaiveDate,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: name.into(),
            category,
            rating,
            creation_date: self.creation_date,
            last_modified_date: modified_on,
        }
    }
}
