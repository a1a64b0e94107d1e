//! Offset pagination for list reads.
//!
//! Clients address pages by row offset (`from`) and page length (`size`) rather than
//! by page number, so a page may start anywhere in the ordered result. Ordering is
//! never applied here; each repository method sorts its own query before paging.

use sea_orm::QuerySelect;

use crate::server::error::{field::ValidationErrors, AppError};

/// Row limit sent when the client asked for every row; SQLite has no `OFFSET` without
/// `LIMIT`.
const UNBOUNDED: u64 = i64::MAX as u64;

/// Validated `(from, size)` pair.
///
/// `size` of `None` means "every matching row from `from` onwards".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPage {
    pub from: u64,
    pub size: Option<u64>,
}

impl OffsetPage {
    /// Validates raw client parameters.
    ///
    /// # Arguments
    /// - `from` - Row offset, defaults to 0, must not be negative
    /// - `size` - Page length, must be at least 1 when present
    ///
    /// # Returns
    /// - `Ok(OffsetPage)` - Valid page
    /// - `Err(AppError::Validation)` - One or both parameters out of range, all
    ///   failures reported together
    pub fn new(from: Option<i64>, size: Option<i64>) -> Result<Self, AppError> {
        let mut errors = ValidationErrors::new();

        let from = from.unwrap_or(0);
        if from < 0 {
            errors.add("from", "must not be negative");
        }
        if let Some(size) = size {
            if size < 1 {
                errors.add("size", "must be at least 1");
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            from: from as u64,
            size: size.map(|size| size as u64),
        })
    }

    /// Page covering every row.
    pub fn all() -> Self {
        Self {
            from: 0,
            size: None,
        }
    }

    /// Adds `OFFSET`/`LIMIT` to an already ordered query.
    pub fn apply<Q: QuerySelect>(&self, query: Q) -> Q {
        query
            .offset(self.from)
            .limit(Some(self.size.unwrap_or(UNBOUNDED)))
    }

    /// Pages rows that were ordered and filtered in memory.
    pub fn slice<T>(&self, rows: Vec<T>) -> Vec<T> {
        let rows = rows.into_iter().skip(self.from as usize);
        match self.size {
            Some(size) => rows.take(size as usize).collect(),
            None => rows.collect(),
        }
    }
}

impl Default for OffsetPage {
    fn default() -> Self {
        Self::all()
    }
}
