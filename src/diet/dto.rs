use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bmi::BmiCategory;
use super::plans::{DietPlan, MealSlot};

/// Raw `/calculate` form. Every field is optional here so that a missing one
/// can be reported by name instead of as a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub height_feet: Option<String>,
    pub height_inch: Option<String>,
    pub weight: Option<String>,
    pub diet_type: Option<String>,
}

/// Validated inputs for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub age: u16,
    pub gender: String,
    pub height_feet: u16,
    pub height_inch: u16,
    pub weight: f64,
    pub diet_type: String,
}

impl Measurement {
    pub fn height_inches(&self) -> i32 {
        i32::from(self.height_feet) * 12 + i32::from(self.height_inch)
    }

    pub fn height_meters(&self) -> f64 {
        f64::from(self.height_inches()) * super::bmi::METERS_PER_INCH
    }
}

/// Result object handed to presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub name: String,
    pub age: u16,
    pub gender: String,
    pub height: String,
    pub height_inches: i32,
    pub weight: f64,
    pub diet_type: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub diet_plan: &'static DietPlan,
    pub recommended_protein: f64,
    pub protein_total: f64,
    pub protein_meal_breakdown: BTreeMap<MealSlot, f64>,
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
