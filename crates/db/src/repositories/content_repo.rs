//! Generic repositories for schema-described content tables.
//!
//! [`ContentRepo`] serves collection resources (many rows, caller-supplied
//! ids); [`SingletonRepo`] serves resources that hold exactly one row at
//! [`SINGLETON_ID`]. Column lists, ordering and the set of written fields all
//! come from the model's [`ResourceSchema`](medsite_core::schema::ResourceSchema);
//! every write returns the fresh row through `RETURNING`.

use std::marker::PhantomData;

use medsite_core::types::{DbId, SINGLETON_ID};
use medsite_core::validation::{FieldValue, FieldValues};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::Resource;

/// Bind every validated value, in order, onto a `Query` or `QueryAs`.
macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for (_, value) in $values.iter() {
            query = match value {
                FieldValue::Text(v) => query.bind(v.as_deref()),
                FieldValue::Int(v) => query.bind(*v),
                FieldValue::Date(v) => query.bind(*v),
            };
        }
        query
    }};
}

/// Data access for a collection resource `R`.
pub struct ContentRepo<R>(PhantomData<R>);

impl<R: Resource> ContentRepo<R> {
    /// All rows in the schema's list order.
    pub async fn list(pool: &PgPool) -> Result<Vec<R>, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "SELECT {} FROM {} ORDER BY {}",
            schema.select_columns(),
            schema.table,
            schema.order_clause()
        );
        sqlx::query_as::<_, R>(&query).fetch_all(pool).await
    }

    /// Find a row by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<R>, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            schema.select_columns(),
            schema.table
        );
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a row by a unique field (e.g. the news `link` slug).
    ///
    /// Fails with `ColumnNotFound` if `key` is not a unique field of the
    /// schema.
    pub async fn find_by_unique(
        pool: &PgPool,
        key: &str,
        value: &str,
    ) -> Result<Option<R>, sqlx::Error> {
        let schema = R::schema();
        let field = schema
            .unique_fields()
            .find(|f| f.key == key)
            .ok_or_else(|| sqlx::Error::ColumnNotFound(key.to_string()))?;
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            schema.select_columns(),
            schema.table,
            field.column
        );
        sqlx::query_as::<_, R>(&query)
            .bind(value)
            .fetch_optional(pool)
            .await
    }

    /// Insert a row built from validated values, returning it with its
    /// generated id.
    pub async fn create(pool: &PgPool, values: &FieldValues) -> Result<R, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            schema.table,
            column_list(values),
            placeholders(values.len(), 1),
            schema.select_columns()
        );
        bind_values!(sqlx::query_as::<_, R>(&query), values)
            .fetch_one(pool)
            .await
    }

    /// Update only the supplied fields. Returns `None` if no row has `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        values: &FieldValues,
    ) -> Result<Option<R>, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "UPDATE {} SET {} WHERE id = $1 RETURNING {}",
            schema.table,
            assignments(values, 2),
            schema.select_columns()
        );
        bind_values!(sqlx::query_as::<_, R>(&query).bind(id), values)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", R::schema().table);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", R::schema().table);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }
}

/// Data access for a singleton resource `R`.
pub struct SingletonRepo<R>(PhantomData<R>);

impl<R: Resource> SingletonRepo<R> {
    /// The singleton row, or `None` if it has never been saved.
    pub async fn fetch(pool: &PgPool) -> Result<Option<R>, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            schema.select_columns(),
            schema.table
        );
        sqlx::query_as::<_, R>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert the singleton row or overwrite the supplied fields of the
    /// existing one, in a single statement.
    ///
    /// Returns the row and `true` if it was inserted, `false` if updated.
    pub async fn upsert(pool: &PgPool, values: &FieldValues) -> Result<(R, bool), sqlx::Error> {
        let schema = R::schema();
        let updates = values
            .iter()
            .map(|(f, _)| format!("{col} = EXCLUDED.{col}", col = f.column))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO {table} (id, {columns}) VALUES ($1, {placeholders}) \
             ON CONFLICT (id) DO UPDATE SET {updates} \
             RETURNING {select}, (xmax = 0) AS inserted",
            table = schema.table,
            columns = column_list(values),
            placeholders = placeholders(values.len(), 2),
            select = schema.select_columns(),
        );
        let row: PgRow = bind_values!(sqlx::query(&query).bind(SINGLETON_ID), values)
            .fetch_one(pool)
            .await?;
        let inserted: bool = row.try_get("inserted")?;
        Ok((R::from_row(&row)?, inserted))
    }

    /// Update only the supplied fields. Returns `None` if the row does not
    /// exist yet.
    pub async fn update(pool: &PgPool, values: &FieldValues) -> Result<Option<R>, sqlx::Error> {
        let schema = R::schema();
        let query = format!(
            "UPDATE {} SET {} WHERE id = $1 RETURNING {}",
            schema.table,
            assignments(values, 2),
            schema.select_columns()
        );
        bind_values!(sqlx::query_as::<_, R>(&query).bind(SINGLETON_ID), values)
            .fetch_optional(pool)
            .await
    }

    /// Number of rows in the table (0 or 1).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", R::schema().table);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// SQL helpers
// ---------------------------------------------------------------------------

fn column_list(values: &FieldValues) -> String {
    values
        .iter()
        .map(|(f, _)| f.column)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `$first, $first+1, ...` for `count` parameters.
fn placeholders(count: usize, first: usize) -> String {
    (first..first + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `col_a = $first, col_b = $first+1, ...`
fn assignments(values: &FieldValues, first: usize) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, (f, _))| format!("{} = ${}", f.column, first + i))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_numbered_from_offset() {
        assert_eq!(placeholders(3, 1), "$1, $2, $3");
        assert_eq!(placeholders(2, 2), "$2, $3");
        assert_eq!(placeholders(0, 1), "");
    }
}
