//! SQLite-backed section store.
//!
//! Read-only access to the CMS database the admin panel writes to. The
//! ordering/visibility contract is pushed into SQL (`is_active` filter,
//! `ORDER BY sort_order, id`) and re-asserted in Rust via [`display_order`].
//!
//! Malformed `section_data` JSON never fails a page read: the payload
//! degrades to `Null` (the renderer then falls back to per-type defaults)
//! and a warning is logged.

use std::collections::HashMap;

use serde_json::Value;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};

use crate::section::{OwnerRef, Section, SectionType};
use crate::store::{StoreError, StoreErrorKind, display_order};

/// Read-only section store over a SQLite pool.
#[derive(Clone, Debug)]
pub struct SqliteSectionStore {
    pool: SqlitePool,
}

impl SqliteSectionStore {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database URL (e.g. `sqlite://cms.db`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// List the active, display-ordered sections of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails or a row cannot be decoded.
    pub async fn list_sections(&self, owner: OwnerRef) -> Result<Vec<Section>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, owner_id, section_type, section_data, sort_order, is_active \
             FROM sections \
             WHERE owner_type = ?1 AND owner_id = ?2 AND is_active = 1 \
             ORDER BY sort_order ASC, id ASC",
        )
        .bind(owner.kind.as_str())
        .bind(owner.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut sections = rows
            .into_iter()
            .map(|row| decode_section(&row, owner))
            .collect::<Result<Vec<_>, _>>()?;
        display_order(&mut sections);
        Ok(sections)
    }

    /// Load the site-wide `settings` key/value table.
    ///
    /// A missing table (fresh install) is tolerated and yields an empty map
    /// with a warning; callers layer these over configuration defaults.
    pub async fn load_settings(&self) -> HashMap<String, String> {
        let rows = match sqlx::query("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings table");
                return HashMap::new();
            }
        };

        rows.into_iter()
            .filter_map(|row| {
                let key: String = row.try_get("key").ok()?;
                let value: String = row.try_get("value").ok()?;
                Some((key, value))
            })
            .collect()
    }
}

/// Decode a sections row.
fn decode_section(row: &SqliteRow, owner: OwnerRef) -> Result<Section, StoreError> {
    let id: i64 = row.try_get("id").map_err(map_decode_error)?;
    let type_name: String = row.try_get("section_type").map_err(map_decode_error)?;
    let raw_data: String = row.try_get("section_data").map_err(map_decode_error)?;
    let sort_order: i64 = row.try_get("sort_order").map_err(map_decode_error)?;
    let is_active: i64 = row.try_get("is_active").map_err(map_decode_error)?;

    let data = match serde_json::from_str::<Value>(&raw_data) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(section_id = id, error = %e, "Malformed section_data, rendering defaults");
            Value::Null
        }
    };

    Ok(Section {
        id,
        owner,
        section_type: SectionType::parse(&type_name),
        data,
        sort_order: i32::try_from(sort_order).unwrap_or(0),
        is_active: is_active != 0,
    })
}

fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    let kind = match &e {
        sqlx::Error::RowNotFound => StoreErrorKind::NotFound,
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreErrorKind::Unavailable
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => StoreErrorKind::Malformed,
        _ => StoreErrorKind::Other,
    };
    StoreError::new(kind).with_backend("Sqlite").with_source(e)
}

fn map_decode_error(e: sqlx::Error) -> StoreError {
    StoreError::new(StoreErrorKind::Malformed)
        .with_backend("Sqlite")
        .with_source(e)
}
