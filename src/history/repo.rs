use anyhow::Context;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repo_types::{HistoryEntry, HistoryRow, NewHistoryEntry};

/// Append-only store of calculation snapshots.
#[async_trait]
pub trait HistoryRepo: Send + Sync {
    async fn insert(&self, entry: NewHistoryEntry) -> anyhow::Result<HistoryEntry>;
    /// Exact, case-sensitive match on `name`, oldest first.
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Vec<HistoryEntry>>;
}

#[derive(Clone)]
pub struct PgHistoryRepo {
    db: PgPool,
}

impl PgHistoryRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepo for PgHistoryRepo {
    async fn insert(&self, e: NewHistoryEntry) -> anyhow::Result<HistoryEntry> {
        let row = sqlx::query_as::<_, HistoryRow>(
            r#"
            INSERT INTO history_entries
                (id, name, age, gender, height_inches, weight, bmi, bmi_category,
                 diet_type, recommended_protein, protein_total, protein_meal_breakdown)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, name, age, gender, height_inches, weight, bmi, bmi_category,
                      diet_type, recommended_protein, protein_total, protein_meal_breakdown,
                      created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&e.name)
        .bind(e.age)
        .bind(&e.gender)
        .bind(e.height_inches)
        .bind(e.weight)
        .bind(e.bmi)
        .bind(&e.bmi_category)
        .bind(&e.diet_type)
        .bind(e.recommended_protein)
        .bind(e.protein_total)
        .bind(Json(&e.protein_meal_breakdown))
        .fetch_one(&self.db)
        .await
        .context("insert history entry")?;
        Ok(row.into())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, name, age, gender, height_inches, weight, bmi, bmi_category,
                   diet_type, recommended_protein, protein_total, protein_meal_breakdown,
                   created_at
              FROM history_entries
             WHERE name = $1
             ORDER BY created_at ASC
            "#,
        )
        .bind(name)
        .fetch_all(&self.db)
        .await
        .context("find history by name")?;
        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }
}

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryHistoryRepo {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl InMemoryHistoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl HistoryRepo for InMemoryHistoryRepo {
    async fn insert(&self, e: NewHistoryEntry) -> anyhow::Result<HistoryEntry> {
        let entry = HistoryEntry::from_new(Uuid::new_v4(), OffsetDateTime::now_utc(), e);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Vec<HistoryEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.name == name)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::diet::plans::MealSlot;

    fn entry(name: &str) -> NewHistoryEntry {
        NewHistoryEntry {
            name: name.into(),
            age: 30,
            gender: "female".into(),
            height_inches: 67,
            weight: 70.0,
            bmi: 24.17,
            bmi_category: "Normal".into(),
            diet_type: "veg".into(),
            recommended_protein: 84.0,
            protein_total: 90.0,
            protein_meal_breakdown: BTreeMap::from([(MealSlot::Breakfast, 16.0)]),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_keeps_fields() {
        let repo = InMemoryHistoryRepo::new();
        let saved = repo.insert(entry("Asha")).await.unwrap();
        assert_eq!(saved.name, "Asha");
        assert_eq!(saved.bmi_category, "Normal");
        assert_eq!(saved.protein_meal_breakdown[&MealSlot::Breakfast], 16.0);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_by_name_is_exact_and_returns_all_matches() {
        let repo = InMemoryHistoryRepo::new();
        let first = repo.insert(entry("Asha")).await.unwrap();
        repo.insert(entry("Ravi")).await.unwrap();
        let second = repo.insert(entry("Asha")).await.unwrap();
        repo.insert(entry("asha")).await.unwrap();

        let found = repo.find_by_name("Asha").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, first.id);
        assert_eq!(found[1].id, second.id);
        assert_ne!(first.id, second.id);

        assert!(repo.find_by_name("Nobody").await.unwrap().is_empty());
    }

    #[test]
    fn entry_serializes_timestamp_as_rfc3339() {
        let e = HistoryEntry::from_new(
            Uuid::nil(),
            time::macros::datetime!(2024-03-01 12:00 UTC),
            entry("Asha"),
        );
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T12:00:00Z");
        assert_eq!(json["protein_meal_breakdown"]["breakfast"], 16.0);
    }
}
