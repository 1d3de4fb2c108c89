use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::errors::internal::StoreError;
use crate::types::db::user::{self, Entity as User};

/// Refresh token validity window in days
const REFRESH_TOKEN_VALIDITY_DAYS: i64 = 7;

/// UserStore manages user account rows
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist a new user and return the stored row
    ///
    /// The store assigns the id, stamps the creation timestamp, and seeds
    /// the opaque refresh-token fields. Uniqueness violations surface as
    /// typed duplicate errors.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<user::Model, StoreError> {
        let existing = User::find()
            .filter(user::Column::Username.eq(&username))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("user lookup", e))?;
        if existing.is_some() {
            return Err(StoreError::DuplicateUsername);
        }

        let now = Utc::now().timestamp_millis();

        let new_user = user::ActiveModel {
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            last_login_at: Set(None),
            is_active: Set(true),
            refresh_token: Set(Some(Uuid::new_v4().to_string())),
            refresh_token_expires_at: Set(Some(now + refresh_validity_millis())),
            ..Default::default()
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // The username pre-check races with concurrent inserts, and email
            // uniqueness is enforced only here
            let message = e.to_string();
            if message.contains("users.username") {
                StoreError::DuplicateUsername
            } else if message.contains("users.email") {
                StoreError::DuplicateEmail
            } else {
                StoreError::database("user insert", e)
            }
        })
    }

    /// Look up a user by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, StoreError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("user lookup", e))
    }

    /// Look up a user by username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, StoreError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("user lookup", e))
    }

    /// Stamp the last-login timestamp and rotate the refresh token
    ///
    /// Returns whether the user existed.
    pub async fn record_login(&self, id: i32) -> Result<bool, StoreError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let now = Utc::now().timestamp_millis();

        let mut active: user::ActiveModel = existing.into();
        active.last_login_at = Set(Some(now));
        active.refresh_token = Set(Some(Uuid::new_v4().to_string()));
        active.refresh_token_expires_at = Set(Some(now + refresh_validity_millis()));
        active
            .update(&self.db)
            .await
            .map_err(|e| StoreError::database("login update", e))?;

        Ok(true)
    }

    /// Replace a user's password hash
    ///
    /// Returns whether the user existed.
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<bool, StoreError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(password_hash);
        active
            .update(&self.db)
            .await
            .map_err(|e| StoreError::database("password update", e))?;

        Ok(true)
    }

    /// Delete a user account
    ///
    /// The user's notes survive with their owner column nulled by the
    /// foreign key. Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = User::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::database("user delete", e))?;

        Ok(result.rows_affected > 0)
    }
}

fn refresh_validity_millis() -> i64 {
    REFRESH_TOKEN_VALIDITY_DAYS * 24 * 60 * 60 * 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use crate::types::db::note::{self, Entity as Note};

    async fn setup_test_db() -> (DatabaseConnection, UserStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = UserStore::new(db.clone());
        (db, store)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_seeds_fields() {
        let (_db, store) = setup_test_db().await;

        let user = store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "$argon2id$fake-digest".to_string(),
            )
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@x.com");
        assert!(user.is_active);
        assert!(user.last_login_at.is_none());
        assert!(user.refresh_token.is_some());
        assert!(user.refresh_token_expires_at.unwrap() > user.created_at);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let (_db, store) = setup_test_db().await;

        store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "hash1".to_string(),
            )
            .await
            .unwrap();

        let result = store
            .create(
                "alice".to_string(),
                "other@x.com".to_string(),
                "hash2".to_string(),
            )
            .await;

        assert!(matches!(result, Err(StoreError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let (_db, store) = setup_test_db().await;

        store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "hash1".to_string(),
            )
            .await
            .unwrap();

        let result = store
            .create(
                "bob".to_string(),
                "alice@x.com".to_string(),
                "hash2".to_string(),
            )
            .await;

        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let (_db, store) = setup_test_db().await;

        let created = store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "hash".to_string(),
            )
            .await
            .unwrap();

        let found = store.find_by_username("alice").await.unwrap();
        assert_eq!(found.unwrap().id, created.id);

        let missing = store.find_by_username("nobody").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_record_login_stamps_and_rotates() {
        let (_db, store) = setup_test_db().await;

        let created = store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "hash".to_string(),
            )
            .await
            .unwrap();
        let initial_token = created.refresh_token.clone();

        let updated = store.record_login(created.id).await.unwrap();
        assert!(updated);

        let user = store.find_by_id(created.id).await.unwrap().unwrap();
        assert!(user.last_login_at.is_some());
        assert_ne!(user.refresh_token, initial_token);
    }

    #[tokio::test]
    async fn test_record_login_for_missing_user_is_noop() {
        let (_db, store) = setup_test_db().await;

        let updated = store.record_login(9999).await.unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_update_password_replaces_hash() {
        let (_db, store) = setup_test_db().await;

        let created = store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "old-hash".to_string(),
            )
            .await
            .unwrap();

        let updated = store
            .update_password(created.id, "new-hash".to_string())
            .await
            .unwrap();
        assert!(updated);

        let user = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(user.password_hash, "new-hash");

        let missing = store
            .update_password(9999, "any".to_string())
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn test_delete_orphans_notes() {
        let (db, store) = setup_test_db().await;

        let user = store
            .create(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "hash".to_string(),
            )
            .await
            .unwrap();

        let now = Utc::now().timestamp_millis();
        let inserted = note::ActiveModel {
            user_id: Set(Some(user.id)),
            title: Set("Groceries".to_string()),
            content: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let deleted = store.delete(user.id).await.unwrap();
        assert!(deleted);

        // The note survives with its owner nulled
        let orphan = Note::find_by_id(inserted.id).one(&db).await.unwrap().unwrap();
        assert_eq!(orphan.user_id, None);
    }

    #[tokio::test]
    async fn test_delete_missing_user_returns_false() {
        let (_db, store) = setup_test_db().await;

        let deleted = store.delete(12345).await.unwrap();
        assert!(!deleted);
    }
}
