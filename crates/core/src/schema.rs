//! Declarative description of a content resource.
//!
//! A [`ResourceSchema`] names the table, the JSON/column mapping of every
//! editable field, which fields are required or unique, their defaults, and
//! how list results are ordered. Validation and SQL generation are both
//! driven from it, so the nine content types share one repository and one
//! handler set.

/// How a field's JSON value is checked and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Image or video reference: absolute http(s) URL or an `/uploads/` path.
    Media,
    /// External link: absolute http(s) URL.
    Link,
    /// E-mail address.
    Email,
    /// Unique path segment, normalized to start with `/`.
    Slug,
    /// 32-bit integer (accepts JSON numbers and numeric strings).
    Int,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// One of a fixed set of string values.
    Enum(&'static [&'static str]),
}

/// One editable field of a resource.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// camelCase key used in JSON payloads and responses.
    pub key: &'static str,
    /// snake_case database column.
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
    /// Applied on create when the field is omitted or blank.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(key: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            column,
            kind,
            required: false,
            unique: false,
            default: None,
        }
    }

    pub const fn text(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, FieldKind::Text)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

/// Whether a resource holds many rows or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Collection,
    /// Exactly one row at [`crate::types::SINGLETON_ID`].
    Singleton,
}

/// Ordering applied by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Explicit `position` ascending (unset last), then newest first.
    Position,
    /// Newest first.
    Newest,
}

/// Static description of one content resource.
#[derive(Debug)]
pub struct ResourceSchema {
    /// Human-readable entity name used in error messages and logs.
    pub entity: &'static str,
    pub table: &'static str,
    /// URL segment under `/api`.
    pub path: &'static str,
    pub kind: ResourceKind,
    pub order: ListOrder,
    pub fields: &'static [FieldSpec],
}

impl ResourceSchema {
    /// Look up a field by its JSON key.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Fields that carry a unique constraint.
    pub fn unique_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.unique)
    }

    pub fn is_singleton(&self) -> bool {
        self.kind == ResourceKind::Singleton
    }

    /// Full column list for `SELECT` / `RETURNING`.
    pub fn select_columns(&self) -> String {
        let mut columns = Vec::with_capacity(self.fields.len() + 3);
        columns.push("id");
        columns.extend(self.fields.iter().map(|f| f.column));
        columns.push("created_at");
        columns.push("updated_at");
        columns.join(", ")
    }

    /// `ORDER BY` clause body for list queries.
    pub fn order_clause(&self) -> &'static str {
        match self.order {
            ListOrder::Position => "position ASC NULLS LAST, created_at DESC, id DESC",
            ListOrder::Newest => "created_at DESC, id DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{GALLERY_ITEMS, NEWS_EVENTS, SERVICES, SITE_SETTINGS};

    #[test]
    fn select_columns_wraps_fields_with_id_and_timestamps() {
        let cols = SERVICES.select_columns();
        assert!(cols.starts_with("id, name, description, detailed_description, icon_name"));
        assert!(cols.ends_with("created_at, updated_at"));
    }

    #[test]
    fn position_ordered_resources_sort_by_position_first() {
        assert!(GALLERY_ITEMS.order_clause().starts_with("position ASC"));
        assert!(SERVICES.order_clause().starts_with("created_at DESC"));
    }

    #[test]
    fn field_lookup_uses_json_key() {
        let field = SERVICES.field("detailedDescription").unwrap();
        assert_eq!(field.column, "detailed_description");
        assert!(SERVICES.field("detailed_description").is_none());
    }

    #[test]
    fn news_link_is_the_only_unique_field() {
        let unique: Vec<_> = NEWS_EVENTS.unique_fields().map(|f| f.key).collect();
        assert_eq!(unique, vec!["link"]);
        assert_eq!(SERVICES.unique_fields().count(), 0);
    }

    #[test]
    fn site_settings_is_a_singleton() {
        assert!(SITE_SETTINGS.is_singleton());
        assert!(!SERVICES.is_singleton());
    }
}
