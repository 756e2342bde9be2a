//! SQL migration definitions for the BrandForge database.
//!
//! Migrations are applied in order on database open. Each migration has a
//! version number and a batch of SQL statements.

/// A database migration with a version and SQL statements.
pub(crate) struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All migrations, in ascending version order.
pub(crate) fn all_migrations() -> Vec<Migration> {
    vec![Migration {
        version: 1,
        description: "Initial schema: blueprints",
        sql: r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version   INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Generated blueprints, stored whole with index columns alongside
CREATE TABLE IF NOT EXISTS blueprints (
    id             TEXT PRIMARY KEY,
    brand_name     TEXT NOT NULL,
    industry       TEXT NOT NULL,
    created_at     TEXT NOT NULL,
    blueprint_json TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_blueprints_created_at ON blueprints(created_at);
CREATE INDEX IF NOT EXISTS idx_blueprints_industry ON blueprints(industry);

INSERT INTO schema_migrations (version) VALUES (1);
"#,
    }]
}
