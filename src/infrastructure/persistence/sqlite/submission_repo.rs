//! SQLite Submission Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, SubmissionRepositoryPort};
use crate::domain::{Submission, SubmissionFields, SubmissionId};

/// SQLite Submission Repository
pub struct SqliteSubmissionRepository {
    pool: DbPool,
}

impl SqliteSubmissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SubmissionRow {
    id: String,
    document: String,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = RepositoryError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let id = SubmissionId::parse(&row.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let fields: SubmissionFields = serde_json::from_str(&row.document)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Submission::new(id, fields))
    }
}

#[async_trait]
impl SubmissionRepositoryPort for SqliteSubmissionRepository {
    async fn insert(&self, fields: &SubmissionFields) -> Result<SubmissionId, RepositoryError> {
        let id = SubmissionId::new();
        let document = serde_json::to_string(fields)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query("INSERT INTO submissions (id, document, created_at) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(document)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Submission>, RepositoryError> {
        let rows: Vec<SubmissionRow> =
            sqlx::query_as("SELECT id, document FROM submissions ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Submission::try_from).collect()
    }

    async fn delete(&self, id: &SubmissionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use serde_json::json;

    async fn repo() -> SqliteSubmissionRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteSubmissionRepository::new(pool)
    }

    fn fields(body: serde_json::Value) -> SubmissionFields {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_all() {
        let repo = repo().await;
        let submitted = fields(json!({
            "fullName": "Ada Lovelace",
            "address": "12 St James's Square",
            "phone": "555-0100",
            "profession": "Mathematician",
            "newsletter": true
        }));

        let id = repo.insert(&submitted).await.unwrap();
        let all = repo.find_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].fields, submitted);
    }

    #[tokio::test]
    async fn test_duplicates_get_distinct_ids() {
        let repo = repo().await;
        let body = fields(json!({"fullName": "Same"}));

        let first = repo.insert(&body).await.unwrap();
        let second = repo.insert(&body).await.unwrap();

        assert_ne!(first, second);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // 插入顺序
        assert_eq!(all[0].id, first);
        assert_eq!(all[1].id, second);
    }

    #[tokio::test]
    async fn test_delete_is_at_most_once() {
        let repo = repo().await;
        let id = repo.insert(&fields(json!({"fullName": "Gone"}))).await.unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let repo = repo().await;
        repo.insert(&fields(json!({"fullName": "Stays"}))).await.unwrap();

        assert!(!repo.delete(&SubmissionId::new()).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
