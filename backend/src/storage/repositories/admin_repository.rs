use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::Admin;
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;
use crate::storage::traits::AdminStorage;

/// Repository for the admins table
#[derive(Clone)]
pub struct AdminRepository {
    db: DbConnection,
}

impl AdminRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminStorage for AdminRepository {
    async fn get_admin(&self) -> StorageResult<Option<Admin>> {
        let row = sqlx::query(
            r#"
            SELECT admin_id, password_hash
            FROM admins
            ORDER BY admin_id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Admin {
                id: r.try_get("admin_id")?,
                password_hash: r.try_get("password_hash")?,
            })),
            None => Ok(None),
        }
    }

    async fn store_admin(&self, password_hash: &str) -> StorageResult<i64> {
        let result = sqlx::query("INSERT INTO admins (password_hash) VALUES (?)")
            .bind(password_hash)
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }
}
