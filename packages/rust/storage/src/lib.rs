//! libSQL storage layer for generated blueprints.
//!
//! The [`Storage`] struct wraps a local libSQL database holding every
//! persisted [`Blueprint`] as JSON, alongside the index columns used for
//! listing (brand name, industry, creation time).
//!
//! **Access rules:**
//! - Blueprint generation: read-write via [`Storage::open`]
//! - Inspection commands: read-only via [`Storage::open_readonly`]

mod migrations;

use std::path::Path;

use brandforge_shared::{BrandForgeError, Blueprint, Result};
use chrono::SecondsFormat;
use libsql::{Connection, Database, params};
use uuid::Uuid;

/// Primary storage handle wrapping a libSQL database.
pub struct Storage {
    #[allow(dead_code)]
    db: Database,
    conn: Connection,
    readonly: bool,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("readonly", &self.readonly)
            .finish_non_exhaustive()
    }
}

/// Index row for a persisted blueprint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BlueprintRecord {
    pub id: String,
    pub brand_name: String,
    pub industry: String,
    /// RFC 3339 creation time copied from the blueprint.
    pub created_at: String,
}

impl Storage {
    /// Open or create a database at `path` in read-write mode.
    pub async fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BrandForgeError::io(parent, e))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        let conn = db
            .connect()
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        let storage = Self {
            db,
            conn,
            readonly: false,
        };
        storage.run_migrations().await?;
        Ok(storage)
    }

    /// Open an existing database at `path` in read-only mode.
    pub async fn open_readonly(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BrandForgeError::Storage(format!(
                "no blueprint database at {}",
                path.display()
            )));
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        let conn = db
            .connect()
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        Ok(Self {
            db,
            conn,
            readonly: true,
        })
    }

    /// Run pending schema migrations.
    async fn run_migrations(&self) -> Result<()> {
        let current_version = self.get_schema_version().await;

        for migration in migrations::all_migrations() {
            if migration.version > current_version {
                tracing::info!(
                    version = migration.version,
                    description = migration.description,
                    "applying migration"
                );
                self.conn
                    .execute_batch(migration.sql)
                    .await
                    .map_err(|e| {
                        BrandForgeError::Storage(format!(
                            "migration v{} failed: {e}",
                            migration.version
                        ))
                    })?;
            }
        }
        Ok(())
    }

    /// Get the current schema version, or 0 if no migrations have been applied.
    async fn get_schema_version(&self) -> u32 {
        let result = self
            .conn
            .query("SELECT MAX(version) FROM schema_migrations", params![])
            .await;

        match result {
            Ok(mut rows) => {
                if let Ok(Some(row)) = rows.next().await {
                    row.get::<u32>(0).unwrap_or(0)
                } else {
                    0
                }
            }
            Err(_) => 0, // Table doesn't exist yet
        }
    }

    /// Ensure we're in read-write mode before writing.
    fn check_writable(&self) -> Result<()> {
        if self.readonly {
            return Err(BrandForgeError::Storage(
                "database is opened in read-only mode".into(),
            ));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Blueprint operations
    // -----------------------------------------------------------------------

    /// Insert a blueprint and return its generated ID.
    pub async fn insert_blueprint(&self, blueprint: &Blueprint) -> Result<String> {
        self.check_writable()?;

        let id = Uuid::now_v7().to_string();
        let json = serde_json::to_string(blueprint)
            .map_err(|e| BrandForgeError::Serialization(e.to_string()))?;
        // Fixed-width UTC timestamps sort lexically in time order
        let created_at = blueprint
            .created_at
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        self.conn
            .execute(
                "INSERT INTO blueprints (id, brand_name, industry, created_at, blueprint_json)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id.as_str(),
                    blueprint.brief.brand_name.as_str(),
                    blueprint.architect.industry.as_str(),
                    created_at.as_str(),
                    json.as_str()
                ],
            )
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        tracing::debug!(%id, brand = %blueprint.brief.brand_name, "blueprint stored");
        Ok(id)
    }

    /// Load a blueprint by ID.
    pub async fn get_blueprint(&self, id: &str) -> Result<Option<Blueprint>> {
        let mut rows = self
            .conn
            .query(
                "SELECT blueprint_json FROM blueprints WHERE id = ?1",
                params![id],
            )
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let json: String = row
                    .get(0)
                    .map_err(|e| BrandForgeError::Storage(e.to_string()))?;
                let blueprint = serde_json::from_str(&json).map_err(|e| {
                    BrandForgeError::Serialization(format!("stored blueprint {id}: {e}"))
                })?;
                Ok(Some(blueprint))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(BrandForgeError::Storage(e.to_string())),
        }
    }

    /// List the most recent blueprints, newest first.
    pub async fn list_blueprints(&self, limit: u32) -> Result<Vec<BlueprintRecord>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, brand_name, industry, created_at FROM blueprints
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1",
                params![limit],
            )
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        let mut results = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            results.push(row_to_record(&row)?);
        }
        Ok(results)
    }

    /// Total number of stored blueprints.
    pub async fn count_blueprints(&self) -> Result<u64> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM blueprints", params![])
            .await
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let count: i64 = row
                    .get(0)
                    .map_err(|e| BrandForgeError::Storage(e.to_string()))?;
                Ok(count.max(0) as u64)
            }
            Ok(None) => Ok(0),
            Err(e) => Err(BrandForgeError::Storage(e.to_string())),
        }
    }
}

/// Convert a database row to a [`BlueprintRecord`].
fn row_to_record(row: &libsql::Row) -> Result<BlueprintRecord> {
    Ok(BlueprintRecord {
        id: row
            .get::<String>(0)
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?,
        brand_name: row
            .get::<String>(1)
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?,
        industry: row
            .get::<String>(2)
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?,
        created_at: row
            .get::<String>(3)
            .map_err(|e| BrandForgeError::Storage(e.to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandforge_shared::{
        ArchitectBlueprint, Brief, ContactIntegration, ContactMethod, CopywriterBlueprint,
        Industry, IntegrationBlueprint, Theme, Tone, VisualBlueprint,
    };
    use chrono::{Duration, Utc};

    /// Create a temp file storage for testing.
    async fn test_storage() -> Storage {
        let tmp = std::env::temp_dir().join(format!("bf_test_{}.db", Uuid::now_v7()));
        Storage::open(&tmp).await.expect("open test db")
    }

    fn blueprint(brand: &str, industry: Industry) -> Blueprint {
        Blueprint {
            architect: ArchitectBlueprint {
                industry,
                theme: Theme::Minimalist,
                site_map: vec![],
            },
            copywriter: CopywriterBlueprint {
                hero_headline: format!("{brand} – Hello"),
                hero_subheadline: "Goals".into(),
                call_to_action: "Book a session".into(),
                meta_description: "Meta".into(),
                keywords: vec![],
                json_ld: None,
                page_sections: vec![],
            },
            visual: VisualBlueprint {
                hero_image_prompt: "prompt".into(),
                aesthetic_notes: vec![],
                color_palette: vec![],
                design_effects: vec![],
                generated_image_url: "https://example.com/hero.png".into(),
            },
            integration: IntegrationBlueprint {
                stripe: None,
                booking: None,
                contact: ContactIntegration {
                    enabled: true,
                    method: ContactMethod::Form,
                    endpoint: format!("/api/contact?brand={brand}"),
                },
            },
            created_at: Utc::now(),
            brief: Brief {
                brand_name: brand.into(),
                brand_tagline: "Hello".into(),
                project_goals: "Build a wonderful site".into(),
                target_audience: "Everyone".into(),
                tone: Tone::Friendly,
                key_features: vec!["Fast".into()],
                integrations: vec![],
                enable_booking: false,
                enable_payments: false,
            },
        }
    }

    #[tokio::test]
    async fn open_and_migrate() {
        let storage = test_storage().await;
        let version = storage.get_schema_version().await;
        assert_eq!(version, 1);
    }

    #[tokio::test]
    async fn idempotent_migration() {
        let tmp = std::env::temp_dir().join(format!("bf_test_{}.db", Uuid::now_v7()));
        let _s1 = Storage::open(&tmp).await.expect("first open");
        drop(_s1);
        let s2 = Storage::open(&tmp).await.expect("second open");
        assert_eq!(s2.get_schema_version().await, 1);
    }

    #[tokio::test]
    async fn blueprint_insert_and_get() {
        let storage = test_storage().await;
        let original = blueprint("Lumen", Industry::SaaS);

        let id = storage.insert_blueprint(&original).await.expect("insert");
        assert!(!id.is_empty());

        let loaded = storage
            .get_blueprint(&id)
            .await
            .expect("get")
            .expect("blueprint present");
        assert_eq!(loaded.brief, original.brief);
        assert_eq!(loaded.architect.industry, Industry::SaaS);

        let missing = storage.get_blueprint("nope").await.expect("get missing");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first_and_limited() {
        let storage = test_storage().await;

        let mut older = blueprint("Older", Industry::Travel);
        older.created_at = Utc::now() - Duration::minutes(5);
        let newer = blueprint("Newer", Industry::Media);

        storage.insert_blueprint(&older).await.unwrap();
        storage.insert_blueprint(&newer).await.unwrap();

        let all = storage.list_blueprints(10).await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].brand_name, "Newer");
        assert_eq!(all[0].industry, "Media");
        assert_eq!(all[1].brand_name, "Older");

        let one = storage.list_blueprints(1).await.expect("list limited");
        assert_eq!(one.len(), 1);

        assert_eq!(storage.count_blueprints().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn readonly_rejects_writes() {
        let tmp = std::env::temp_dir().join(format!("bf_test_{}.db", Uuid::now_v7()));
        let rw = Storage::open(&tmp).await.unwrap();
        rw.insert_blueprint(&blueprint("Lumen", Industry::SaaS))
            .await
            .unwrap();
        drop(rw);

        let ro = Storage::open_readonly(&tmp).await.unwrap();
        assert_eq!(ro.count_blueprints().await.unwrap(), 1);
        let result = ro.insert_blueprint(&blueprint("Other", Industry::Legal)).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read-only"));
    }

    #[tokio::test]
    async fn readonly_requires_existing_file() {
        let tmp = std::env::temp_dir().join(format!("bf_missing_{}.db", Uuid::now_v7()));
        let err = Storage::open_readonly(&tmp).await.unwrap_err();
        assert!(err.to_string().contains("no blueprint database"));
    }
}
