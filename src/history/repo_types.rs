use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::diet::plans::MealSlot;

/// Snapshot written once per successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub height_inches: i32, // total inches
    pub weight: f64,
    pub bmi: f64,
    pub bmi_category: String,
    pub diet_type: String, // raw form value
    pub recommended_protein: f64,
    pub protein_total: f64,
    pub protein_meal_breakdown: BTreeMap<MealSlot, f64>,
}

#[derive(Debug, FromRow)]
pub struct HistoryRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub height_inches: i32,
    pub weight: f64,
    pub bmi: f64,
    pub bmi_category: String,
    pub diet_type: String,
    pub recommended_protein: f64,
    pub protein_total: f64,
    pub protein_meal_breakdown: Json<BTreeMap<MealSlot, f64>>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub height_inches: i32,
    pub weight: f64,
    pub bmi: f64,
    pub bmi_category: String,
    pub diet_type: String,
    pub recommended_protein: f64,
    pub protein_total: f64,
    pub protein_meal_breakdown: BTreeMap<MealSlot, f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<HistoryRow> for HistoryEntry {
    fn from(r: HistoryRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            age: r.age,
            gender: r.gender,
            height_inches: r.height_inches,
            weight: r.weight,
            bmi: r.bmi,
            bmi_category: r.bmi_category,
            diet_type: r.diet_type,
            recommended_protein: r.recommended_protein,
            protein_total: r.protein_total,
            protein_meal_breakdown: r.protein_meal_breakdown.0,
            created_at: r.created_at,
        }
    }
}

impl HistoryEntry {
    pub(crate) fn from_new(id: Uuid, created_at: OffsetDateTime, e: NewHistoryEntry) -> Self {
        Self {
            id,
            name: e.name,
            age: e.age,
            gender: e.gender,
            height_inches: e.height_inches,
            weight: e.weight,
            bmi: e.bmi,
            bmi_category: e.bmi_category,
            diet_type: e.diet_type,
            recommended_protein: e.recommended_protein,
            protein_total: e.protein_total,
            protein_meal_breakdown: e.protein_meal_breakdown,
            created_at,
        }
    }
}
