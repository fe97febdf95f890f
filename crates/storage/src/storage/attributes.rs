use std::collections::BTreeSet;

use bookstall_core::SyntheticAttributeRecord;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::traits::attribute::ATTRIBUTES_ENTITY;

/// Raw `book_attributes` row before conversion into domain types.
struct AttributeRow {
    id: String,
    price: i64,
    rating: i64,
    created_at: String,
}

fn read_record(
    conn: &Connection,
    id: &str,
) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
    let row = conn
        .query_row(
            "SELECT id, price, rating, created_at FROM book_attributes WHERE id = ?1",
            params![id],
            |row| {
                Ok(AttributeRow {
                    id: row.get(0)?,
                    price: row.get(1)?,
                    rating: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut stmt = conn.prepare("SELECT user_id FROM book_likes WHERE book_id = ?1")?;
    let liked_by = stmt
        .query_map(params![id], |r| r.get::<_, String>(0))?
        .collect::<Result<BTreeSet<String>, _>>()?;

    Ok(Some(row_to_record(row, liked_by)?))
}

fn row_to_record(
    row: AttributeRow,
    liked_by: BTreeSet<String>,
) -> Result<SyntheticAttributeRecord, StorageError> {
    let price = u32::try_from(row.price)
        .map_err(|e| StorageError::corrupt(format!("price {} for {}", row.price, row.id), e))?;
    let rating = u8::try_from(row.rating)
        .map_err(|e| StorageError::corrupt(format!("rating {} for {}", row.rating, row.id), e))?;
    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .map_err(|e| StorageError::corrupt(format!("created_at for {}", row.id), e))?
        .with_timezone(&Utc);
    Ok(SyntheticAttributeRecord { id: row.id, price, rating, liked_by, created_at })
}

impl Storage {
    /// Get attribute record by book id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_attributes(
        &self,
        id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        read_record(&conn, id)
    }

    /// Insert a record unless the id is already taken. Returns `true` if inserted.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn insert_attributes_if_absent(
        &self,
        record: &SyntheticAttributeRecord,
    ) -> Result<bool, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let inserted = tx.execute(
            "INSERT INTO book_attributes (id, price, rating, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO NOTHING",
            params![
                record.id,
                i64::from(record.price),
                i64::from(record.rating),
                record.created_at.to_rfc3339(),
            ],
        )?;

        if inserted == 0 {
            return Ok(false);
        }

        let liked_at = Utc::now().to_rfc3339();
        for user_id in &record.liked_by {
            tx.execute(
                "INSERT OR IGNORE INTO book_likes (book_id, user_id, liked_at) VALUES (?1, ?2, ?3)",
                params![record.id, user_id, liked_at],
            )?;
        }
        tx.commit()?;
        Ok(true)
    }

    /// Add a user to the like set.
    ///
    /// # Errors
    /// Returns `NotFound` if no record exists for `id`, or a database error.
    pub fn add_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM book_attributes WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::NotFound { entity: ATTRIBUTES_ENTITY, id: id.to_owned() });
        }

        tx.execute(
            "INSERT OR IGNORE INTO book_likes (book_id, user_id, liked_at) VALUES (?1, ?2, ?3)",
            params![id, user_id, Utc::now().to_rfc3339()],
        )?;
        let record = read_record(&tx, id)?.ok_or_else(|| StorageError::NotFound {
            entity: ATTRIBUTES_ENTITY,
            id: id.to_owned(),
        })?;
        tx.commit()?;
        Ok(record)
    }

    /// Remove a user from the like set. `None` if the record does not exist.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn remove_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            "DELETE FROM book_likes WHERE book_id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        let record = read_record(&tx, id)?;
        tx.commit()?;
        Ok(record)
    }
}
