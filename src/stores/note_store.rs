use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::internal::StoreError;
use crate::types::db::note::{self, Entity as Note};

/// Sort fields accepted by note list queries
///
/// Raw query-string input is parsed into this enum and only the mapped
/// column ever reaches the ORDER BY clause; the raw string never enters
/// the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse a raw sort-field parameter, defaulting unknown or absent
    /// input to `UpdatedAt`
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("title") => SortField::Title,
            Some("createdat") => SortField::CreatedAt,
            Some("updatedat") => SortField::UpdatedAt,
            _ => SortField::UpdatedAt,
        }
    }

    fn column(self) -> note::Column {
        match self {
            SortField::Title => note::Column::Title,
            SortField::CreatedAt => note::Column::CreatedAt,
            SortField::UpdatedAt => note::Column::UpdatedAt,
        }
    }
}

/// Sort directions accepted by note list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a raw sort-order parameter; anything other than "asc" sorts
    /// descending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    fn into_order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// NoteStore manages note rows, always scoped to an owning user
pub struct NoteStore {
    db: DatabaseConnection,
}

impl NoteStore {
    /// Create a new NoteStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List an owner's notes with optional substring search and sorting
    ///
    /// A non-blank search term matches substrings of title or content;
    /// the predicate is parameter-bound, never interpolated.
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
        search_term: Option<&str>,
        sort_field: SortField,
        sort_order: SortOrder,
    ) -> Result<Vec<note::Model>, StoreError> {
        let mut query = Note::find().filter(note::Column::UserId.eq(owner_id));

        if let Some(term) = search_term.map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(note::Column::Title.contains(term))
                    .add(note::Column::Content.contains(term)),
            );
        }

        query
            .order_by(sort_field.column(), sort_order.into_order())
            .all(&self.db)
            .await
            .map_err(|e| StoreError::database("note list", e))
    }

    /// Fetch a single note scoped to its owner
    pub async fn find_by_id(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<note::Model>, StoreError> {
        Note::find()
            .filter(note::Column::Id.eq(id))
            .filter(note::Column::UserId.eq(owner_id))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::database("note lookup", e))
    }

    /// Persist a new note and return the stored row with its assigned id
    pub async fn insert(
        &self,
        owner_id: i32,
        title: String,
        content: Option<String>,
        timestamp: i64,
    ) -> Result<note::Model, StoreError> {
        let new_note = note::ActiveModel {
            user_id: Set(Some(owner_id)),
            title: Set(title),
            content: Set(content),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
            ..Default::default()
        };

        new_note
            .insert(&self.db)
            .await
            .map_err(|e| StoreError::database("note insert", e))
    }

    /// Overwrite a note's title and content, scoped to its owner
    ///
    /// A single statement with the ownership predicate in the WHERE
    /// clause; the creation timestamp is untouched. Returns whether a row
    /// changed.
    pub async fn update(
        &self,
        id: i32,
        owner_id: i32,
        title: String,
        content: Option<String>,
        updated_at: i64,
    ) -> Result<bool, StoreError> {
        let result = Note::update_many()
            .col_expr(note::Column::Title, Expr::value(title))
            .col_expr(note::Column::Content, Expr::value(content))
            .col_expr(note::Column::UpdatedAt, Expr::value(updated_at))
            .filter(note::Column::Id.eq(id))
            .filter(note::Column::UserId.eq(owner_id))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::database("note update", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a note scoped to its owner; returns whether a row was removed
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, StoreError> {
        let result = Note::delete_many()
            .filter(note::Column::Id.eq(id))
            .filter(note::Column::UserId.eq(owner_id))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::database("note delete", e))?;

        Ok(result.rows_affected > 0)
    }
}
