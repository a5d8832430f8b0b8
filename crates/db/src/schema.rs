//! Explicit table definitions and startup schema synchronization.
//!
//! There is no migration history. At startup [`sync_schema`] makes the live
//! table match the current definition: it creates the table when missing and
//! adds any column the definition has but the table lacks. Columns are never
//! dropped or retyped, so rows written under an older shape are read back
//! under the current one.

use sqlx::Row;

use crate::DbPool;

/// Column names of the `notes` table.
pub mod note_columns {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
    pub const IS_ARCHIVED: &str = "is_archived";
    pub const CREATED_AT: &str = "created_at";
    pub const CATEGORIES: &str = "categories";
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Boolean,
    /// RFC 3339 text written by sqlx's chrono support.
    Timestamp,
}

impl ColumnType {
    fn sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text | ColumnType::Timestamp => "TEXT",
            ColumnType::Boolean => "BOOLEAN",
        }
    }

    /// Default used when a NOT NULL column without its own default has to
    /// be added to a table that already holds rows.
    fn backfill_default(self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "0",
            ColumnType::Text => "''",
            ColumnType::Timestamp => "'1970-01-01T00:00:00+00:00'",
        }
    }
}

/// A single column definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    /// Literal SQL default expression, if any.
    pub default: Option<&'static str>,
}

impl ColumnDef {
    /// A NOT NULL column without a default.
    pub const fn required(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
            primary_key: false,
            default: None,
        }
    }

    /// A nullable column.
    pub const fn optional(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            nullable: true,
            ..Self::required(name, column_type)
        }
    }

    /// An auto-assigned integer primary key.
    pub const fn primary_key(name: &'static str) -> Self {
        Self {
            primary_key: true,
            ..Self::required(name, ColumnType::Integer)
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Column clause for `CREATE TABLE`.
    pub fn definition_sql(&self) -> String {
        if self.primary_key {
            return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", self.name);
        }
        let mut sql = format!("{} {}", self.name, self.column_type.sql());
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }

    /// Column clause for `ALTER TABLE ... ADD COLUMN`.
    ///
    /// SQLite refuses to add a NOT NULL column without a default, so one is
    /// supplied from the column type when the definition has none.
    fn add_column_sql(&self) -> String {
        if !self.nullable && self.default.is_none() {
            return self
                .with_default(self.column_type.backfill_default())
                .definition_sql();
        }
        self.definition_sql()
    }
}

/// A table definition: name plus ordered columns.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    /// Comma separated column names, in definition order.
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDef::definition_sql)
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({columns})", self.name)
    }
}

/// The `notes` table.
pub const NOTES: TableSchema = TableSchema {
    name: "notes",
    columns: &[
        ColumnDef::primary_key(note_columns::ID),
        ColumnDef::required(note_columns::TITLE, ColumnType::Text),
        ColumnDef::required(note_columns::CONTENT, ColumnType::Text),
        ColumnDef::required(note_columns::IS_ARCHIVED, ColumnType::Boolean).with_default("0"),
        ColumnDef::required(note_columns::CREATED_AT, ColumnType::Timestamp),
        ColumnDef::optional(note_columns::CATEGORIES, ColumnType::Text),
    ],
};

/// Every table the application owns.
pub const TABLES: &[TableSchema] = &[NOTES];

// ---------------------------------------------------------------------------
// Synchronization
// ---------------------------------------------------------------------------

/// Bring `table` in line with its definition. Returns the names of the
/// columns that had to be added to an existing table.
pub async fn sync_table(pool: &DbPool, table: &TableSchema) -> Result<Vec<&'static str>, sqlx::Error> {
    sqlx::query(&table.create_table_sql()).execute(pool).await?;

    let existing: Vec<String> = sqlx::query(&format!("PRAGMA table_info({})", table.name))
        .fetch_all(pool)
        .await?
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<_, _>>()?;

    let mut added = Vec::new();
    for column in table.columns {
        if existing.iter().any(|name| name == column.name) {
            continue;
        }
        if column.primary_key {
            tracing::warn!(
                table = table.name,
                column = column.name,
                "Primary key column missing from existing table; cannot be added in place"
            );
            continue;
        }
        let sql = format!("ALTER TABLE {} ADD COLUMN {}", table.name, column.add_column_sql());
        sqlx::query(&sql).execute(pool).await?;
        tracing::info!(table = table.name, column = column.name, "Added missing column");
        added.push(column.name);
    }

    Ok(added)
}

/// Synchronize every application table.
pub async fn sync_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for table in TABLES {
        sync_table(pool, table).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
