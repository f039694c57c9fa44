use std::str::FromStr;

use tracing::{debug, error, info};

use super::bmi::{categorize_bmi, compute_bmi, BmiCategory};
use super::dto::{title_case, CalculateForm, CalculationResult, Measurement};
use super::plans::{resolve_plan, DietPlan};
use super::protein::{aggregate_protein, recommended_protein, ProteinTally};
use crate::history::{repo::HistoryRepo, repo_types::NewHistoryEntry};

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("height must be greater than zero")]
    ZeroHeight,

    #[error("weight must be a positive number")]
    NonPositiveWeight,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl CalcError {
    /// True for anything the caller sent wrong; false for storage failures.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, CalcError::Storage(_))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CalcError> {
    value.ok_or(CalcError::MissingField(field))
}

fn parse_field<T: FromStr>(value: Option<String>, field: &'static str) -> Result<T, CalcError> {
    let raw = required(value, field)?;
    raw.trim()
        .parse()
        .map_err(|_| CalcError::InvalidField { field, value: raw })
}

impl TryFrom<CalculateForm> for Measurement {
    type Error = CalcError;

    fn try_from(form: CalculateForm) -> Result<Self, Self::Error> {
        let m = Measurement {
            name: required(form.name, "name")?,
            age: parse_field(form.age, "age")?,
            gender: required(form.gender, "gender")?,
            height_feet: parse_field(form.height_feet, "height_feet")?,
            height_inch: parse_field(form.height_inch, "height_inch")?,
            weight: parse_field(form.weight, "weight")?,
            diet_type: required(form.diet_type, "diet_type")?,
        };

        if m.height_inches() <= 0 {
            return Err(CalcError::ZeroHeight);
        }
        if !m.weight.is_finite() || m.weight <= 0.0 {
            return Err(CalcError::NonPositiveWeight);
        }
        Ok(m)
    }
}

/// Everything derived from one measurement.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub measurement: Measurement,
    pub bmi: f64,
    pub category: BmiCategory,
    pub plan: &'static DietPlan,
    pub recommended_protein: f64,
    pub protein: ProteinTally,
}

impl Calculation {
    pub fn history_entry(&self) -> NewHistoryEntry {
        let m = &self.measurement;
        NewHistoryEntry {
            name: m.name.clone(),
            age: i32::from(m.age),
            gender: m.gender.clone(),
            height_inches: m.height_inches(),
            weight: m.weight,
            bmi: self.bmi,
            bmi_category: self.category.as_str().to_string(),
            diet_type: m.diet_type.clone(),
            recommended_protein: self.recommended_protein,
            protein_total: self.protein.total,
            protein_meal_breakdown: self.protein.per_meal.clone(),
        }
    }

    pub fn into_result(self) -> CalculationResult {
        let m = self.measurement;
        CalculationResult {
            height: format!("{} ft {} in", m.height_feet, m.height_inch),
            height_inches: m.height_inches(),
            gender: title_case(&m.gender),
            diet_type: title_case(&m.diet_type),
            name: m.name,
            age: m.age,
            weight: m.weight,
            bmi: self.bmi,
            bmi_category: self.category,
            diet_plan: self.plan,
            recommended_protein: self.recommended_protein,
            protein_total: self.protein.total,
            protein_meal_breakdown: self.protein.per_meal,
        }
    }
}

/// Pure part of the calculate use case. Cannot fail on a validated measurement.
pub fn calculate(measurement: Measurement) -> Calculation {
    let bmi = compute_bmi(measurement.weight, measurement.height_meters());
    let category = categorize_bmi(bmi);
    let plan = resolve_plan(category, &measurement.diet_type);
    if plan.is_empty() {
        debug!(%category, diet_type = %measurement.diet_type, "no diet plan for combination");
    }
    let recommended_protein = recommended_protein(measurement.weight, plan.goal);
    let protein = aggregate_protein(&plan.meals);

    Calculation {
        measurement,
        bmi,
        category,
        plan,
        recommended_protein,
        protein,
    }
}

/// Validates the form, computes, and appends one history entry.
/// Nothing is written unless validation succeeds.
pub async fn calculate_and_record(
    repo: &dyn HistoryRepo,
    form: CalculateForm,
) -> Result<CalculationResult, CalcError> {
    let measurement = Measurement::try_from(form)?;
    let calculation = calculate(measurement);

    let saved = repo.insert(calculation.history_entry()).await.map_err(|e| {
        error!(error = %e, "failed to save history entry");
        e
    })?;
    info!(
        entry_id = %saved.id,
        bmi = calculation.bmi,
        category = %calculation.category,
        "calculation recorded"
    );

    Ok(calculation.into_result())
}
