//! Binding between a typed row model and its declarative schema.

use medsite_core::schema::ResourceSchema;
use medsite_core::types::DbId;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A content row model whose table layout is described by a
/// [`ResourceSchema`].
///
/// Implementing this is all it takes for a model to be served by
/// [`ContentRepo`](crate::repositories::ContentRepo) or
/// [`SingletonRepo`](crate::repositories::SingletonRepo).
pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    fn schema() -> &'static ResourceSchema;

    /// Primary key of this row.
    fn id(&self) -> DbId;
}
