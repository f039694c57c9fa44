use std::collections::BTreeMap;

use serde::Serialize;

use super::bmi::round_to;
use super::plans::{
    Meal, MealSlot, GOAL_MAINTENANCE, GOAL_SIGNIFICANT_LOSS, GOAL_WEIGHT_GAIN, GOAL_WEIGHT_LOSS,
};

/// Grams of protein per unit of body weight for a plan goal.
/// Unknown goals get the maintenance factor.
pub fn protein_factor(goal: &str) -> f64 {
    match goal {
        GOAL_WEIGHT_GAIN => 1.8,
        GOAL_MAINTENANCE => 1.2,
        GOAL_WEIGHT_LOSS | GOAL_SIGNIFICANT_LOSS => 1.5,
        _ => 1.2,
    }
}

/// Recommended daily protein, one decimal.
pub fn recommended_protein(weight: f64, goal: Option<&str>) -> f64 {
    round_to(weight * protein_factor(goal.unwrap_or(GOAL_MAINTENANCE)), 1)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProteinTally {
    pub total: f64,
    pub per_meal: BTreeMap<MealSlot, f64>,
}

/// Sums protein per meal slot and overall.
///
/// Subtotals are accumulated raw; each displayed figure (every slot and the
/// grand total) is rounded once to one decimal at the end.
pub fn aggregate_protein(meals: &[Meal]) -> ProteinTally {
    let mut raw: BTreeMap<MealSlot, f64> = BTreeMap::new();
    for meal in meals {
        let subtotal: f64 = meal.foods.iter().map(|f| f.protein_grams).sum();
        *raw.entry(meal.slot).or_insert(0.0) += subtotal;
    }

    let total = round_to(raw.values().sum(), 1);
    let per_meal = raw
        .into_iter()
        .map(|(slot, grams)| (slot, round_to(grams, 1)))
        .collect();

    ProteinTally { total, per_meal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet::bmi::BmiCategory;
    use crate::diet::plans::{resolve_plan, FoodItem};

    fn food(description: &'static str, protein_grams: f64) -> FoodItem {
        FoodItem {
            description,
            protein_grams,
        }
    }

    #[test]
    fn factors_by_goal() {
        assert_eq!(protein_factor("Weight Gain & Muscle Building"), 1.8);
        assert_eq!(protein_factor("Maintenance & Healthy Living"), 1.2);
        assert_eq!(protein_factor("Weight Loss & Fat Reduction"), 1.5);
        assert_eq!(protein_factor("Significant Weight Loss"), 1.5);
    }

    #[test]
    fn unknown_goal_falls_back_to_maintenance() {
        assert_eq!(protein_factor(""), 1.2);
        assert_eq!(protein_factor("Bulk"), 1.2);
        assert_eq!(protein_factor("weight gain & muscle building"), 1.2);
    }

    #[test]
    fn recommended_protein_uses_goal_or_default() {
        assert_eq!(recommended_protein(70.0, Some(GOAL_MAINTENANCE)), 84.0);
        assert_eq!(recommended_protein(50.0, Some(GOAL_WEIGHT_GAIN)), 90.0);
        assert_eq!(recommended_protein(70.0, None), 84.0);
        assert_eq!(recommended_protein(60.0, Some(GOAL_WEIGHT_LOSS)), 90.0);
    }

    #[test]
    fn normal_veg_plan_totals() {
        let plan = resolve_plan(BmiCategory::Normal, "veg");
        let tally = aggregate_protein(&plan.meals);
        assert_eq!(tally.total, 90.0);
        let breakdown: Vec<(MealSlot, f64)> = tally.per_meal.into_iter().collect();
        assert_eq!(
            breakdown,
            vec![
                (MealSlot::Breakfast, 16.0),
                (MealSlot::MidMorning, 4.0),
                (MealSlot::Lunch, 44.0),
                (MealSlot::Evening, 6.0),
                (MealSlot::Dinner, 20.0),
            ]
        );
    }

    #[test]
    fn other_plan_totals() {
        let underweight = resolve_plan(BmiCategory::Underweight, "nonveg");
        assert_eq!(aggregate_protein(&underweight.meals).total, 224.0);
        let obese = resolve_plan(BmiCategory::Obese, "nonveg");
        assert_eq!(aggregate_protein(&obese.meals).total, 86.0);
    }

    #[test]
    fn total_matches_breakdown_for_every_plan() {
        for category in [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ] {
            for diet in ["veg", "nonveg"] {
                let tally = aggregate_protein(&resolve_plan(category, diet).meals);
                let summed: f64 = tally.per_meal.values().sum();
                let tolerance = 0.1 * tally.per_meal.len() as f64;
                assert!((tally.total - summed).abs() <= tolerance);
            }
        }
    }

    #[test]
    fn order_of_foods_and_meals_does_not_matter() {
        let meals = vec![
            Meal {
                slot: MealSlot::Breakfast,
                foods: vec![food("oats", 12.4), food("seeds", 3.3), food("tea", 0.0)],
            },
            Meal {
                slot: MealSlot::Dinner,
                foods: vec![food("dal", 7.25), food("roti", 8.0)],
            },
            Meal {
                slot: MealSlot::Lunch,
                foods: vec![food("paneer", 12.0)],
            },
        ];
        let mut shuffled: Vec<Meal> = meals.iter().rev().cloned().collect();
        for meal in &mut shuffled {
            meal.foods.reverse();
        }

        assert_eq!(aggregate_protein(&meals), aggregate_protein(&shuffled));
    }

    #[test]
    fn rounds_after_summing() {
        let meals: Vec<Meal> = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
            .into_iter()
            .map(|slot| Meal {
                slot,
                foods: vec![food("pinch of seeds", 0.06)],
            })
            .collect();
        let tally = aggregate_protein(&meals);
        assert!(tally.per_meal.values().all(|&g| g == 0.1));
        // raw 0.18, not the 0.3 that summing rounded subtotals would give
        assert_eq!(tally.total, 0.2);
    }

    #[test]
    fn repeated_slots_accumulate() {
        let meals = vec![
            Meal {
                slot: MealSlot::Evening,
                foods: vec![food("eggs", 12.0)],
            },
            Meal {
                slot: MealSlot::Evening,
                foods: vec![food("shake", 25.0)],
            },
        ];
        let tally = aggregate_protein(&meals);
        assert_eq!(tally.per_meal.len(), 1);
        assert_eq!(tally.per_meal[&MealSlot::Evening], 37.0);
        assert_eq!(tally.total, 37.0);
    }

    #[test]
    fn empty_meals_yield_zero() {
        let tally = aggregate_protein(&[]);
        assert_eq!(tally.total, 0.0);
        assert!(tally.per_meal.is_empty());
    }
}
