//! AttributeStore implementation for PgStorage.

use super::*;

use crate::traits::AttributeStore;
use crate::traits::attribute::ATTRIBUTES_ENTITY;
use async_trait::async_trait;

#[async_trait]
impl AttributeStore for PgStorage {
    async fn find_attributes(
        &self,
        id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        let sql = format!("SELECT {ATTRIBUTE_COLUMNS} FROM book_attributes WHERE id = $1");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(row_to_record).transpose()
    }

    async fn insert_attributes_if_absent(
        &self,
        record: &SyntheticAttributeRecord,
    ) -> Result<bool, StorageError> {
        let price = i32::try_from(record.price)
            .map_err(|e| StorageError::corrupt(format!("price {} out of range", record.price), e))?;
        let liked_by: Vec<String> = record.liked_by.iter().cloned().collect();
        let result = sqlx::query(&format!(
            "INSERT INTO book_attributes ({ATTRIBUTE_COLUMNS})
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO NOTHING"
        ))
        .bind(&record.id)
        .bind(price)
        .bind(i16::from(record.rating))
        .bind(&liked_by)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn add_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE book_attributes
             SET liked_by = CASE WHEN $2 = ANY(liked_by) THEN liked_by
                                 ELSE array_append(liked_by, $2) END
             WHERE id = $1
             RETURNING {ATTRIBUTE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_record(&row),
            None => Err(StorageError::NotFound { entity: ATTRIBUTES_ENTITY, id: id.to_owned() }),
        }
    }

    async fn remove_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE book_attributes
             SET liked_by = array_remove(liked_by, $2)
             WHERE id = $1
             RETURNING {ATTRIBUTE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_record).transpose()
    }
}
