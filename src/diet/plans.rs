//! Static diet-plan table keyed by BMI category and diet type.
//!
//! The table is built once on first use and never mutated. Protein figures are
//! grams per listed portion.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::bmi::BmiCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Veg,
    NonVeg,
}

impl DietType {
    /// Exact, case-sensitive match on the form values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "veg" => Some(DietType::Veg),
            "nonveg" => Some(DietType::NonVeg),
            _ => None,
        }
    }
}

/// Meal slots in serving order. `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MidMorning,
    Lunch,
    Evening,
    Dinner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub description: &'static str,
    pub protein_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub foods: Vec<FoodItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub goal: Option<&'static str>,
    pub daily_calories: Option<&'static str>,
    pub meals: Vec<Meal>,
    pub tips: Vec<&'static str>,
}

impl DietPlan {
    pub fn is_empty(&self) -> bool {
        self.goal.is_none() && self.meals.is_empty() && self.tips.is_empty()
    }
}

pub const GOAL_WEIGHT_GAIN: &str = "Weight Gain & Muscle Building";
pub const GOAL_MAINTENANCE: &str = "Maintenance & Healthy Living";
pub const GOAL_WEIGHT_LOSS: &str = "Weight Loss & Fat Reduction";
pub const GOAL_SIGNIFICANT_LOSS: &str = "Significant Weight Loss";

/// Returned for any (category, diet type) pair missing from the table.
pub static EMPTY_PLAN: DietPlan = DietPlan {
    goal: None,
    daily_calories: None,
    meals: Vec::new(),
    tips: Vec::new(),
};

/// Looks up the plan for `category` and the raw `diet_type` form value.
/// Never fails: unknown diet types get [`EMPTY_PLAN`].
pub fn resolve_plan(category: BmiCategory, diet_type: &str) -> &'static DietPlan {
    let Some(diet) = DietType::parse(diet_type) else {
        return &EMPTY_PLAN;
    };
    DIET_PLANS.get(&(category, diet)).unwrap_or(&EMPTY_PLAN)
}

fn meal(slot: MealSlot, foods: &[(&'static str, f64)]) -> Meal {
    Meal {
        slot,
        foods: foods
            .iter()
            .map(|&(description, protein_grams)| FoodItem {
                description,
                protein_grams,
            })
            .collect(),
    }
}

fn plan(
    goal: &'static str,
    daily_calories: &'static str,
    meals: Vec<Meal>,
    tips: &[&'static str],
) -> DietPlan {
    DietPlan {
        goal: Some(goal),
        daily_calories: Some(daily_calories),
        meals,
        tips: tips.to_vec(),
    }
}

lazy_static! {
    static ref DIET_PLANS: HashMap<(BmiCategory, DietType), DietPlan> = build_table();
}

fn build_table() -> HashMap<(BmiCategory, DietType), DietPlan> {
    use BmiCategory::*;
    use MealSlot::*;

    let mut table = HashMap::with_capacity(8);

    table.insert(
        (Underweight, DietType::Veg),
        plan(
            GOAL_WEIGHT_GAIN,
            "2500-3000",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("Banana & Peanut Butter Smoothie (400 cal)", 12.0),
                        ("2 Whole Wheat Parathas with Ghee (350 cal)", 10.0),
                        ("Mixed nuts & Almonds (200 cal)", 6.0),
                        ("Green Tea (5 cal)", 0.0),
                    ],
                ),
                meal(
                    MidMorning,
                    &[
                        ("Mixed fruit bowl with honey (150 cal)", 2.0),
                        ("8-10 Almonds & 4 Walnuts (180 cal)", 6.0),
                    ],
                ),
                meal(
                    Lunch,
                    &[
                        ("2 Cups Brown Rice (220 cal)", 10.0),
                        ("1 Cup Dal/Rajma/Chickpea Curry (200 cal)", 15.0),
                        ("Paneer Curry - 100g (265 cal)", 18.0),
                        ("Mixed Vegetable Sabzi (100 cal)", 3.0),
                        ("Curd - 1 cup (150 cal)", 8.0),
                        ("Salad with olive oil dressing (80 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Protein Smoothie with banana & oats (300 cal)", 20.0),
                        ("Handful of mixed nuts (200 cal)", 6.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("3 Whole Wheat Rotis (210 cal)", 9.0),
                        ("Palak Paneer (200 cal)", 15.0),
                        ("Mixed Vegetable Curry (120 cal)", 3.0),
                        ("1 Cup Milk (150 cal)", 8.0),
                    ],
                ),
            ],
            &[
                "Eat every 2-3 hours",
                "Include healthy fats like ghee, nuts, avocado",
                "Drink protein smoothies between meals",
                "Stay hydrated with 3-4 liters water daily",
            ],
        ),
    );

    table.insert(
        (Underweight, DietType::NonVeg),
        plan(
            GOAL_WEIGHT_GAIN,
            "2500-3000",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("3 Egg Omelette with vegetables (300 cal)", 18.0),
                        ("2 Whole Wheat Toast (140 cal)", 6.0),
                        ("Banana Milkshake (250 cal)", 8.0),
                        ("Mixed nuts (200 cal)", 6.0),
                    ],
                ),
                meal(
                    MidMorning,
                    &[
                        ("Greek Yogurt with fruits (200 cal)", 12.0),
                        ("Almonds & Walnuts (150 cal)", 6.0),
                    ],
                ),
                meal(
                    Lunch,
                    &[
                        ("2 Cups Brown Rice (220 cal)", 10.0),
                        ("Grilled Chicken Breast - 150g (250 cal)", 31.0),
                        ("Dal - 1 cup (150 cal)", 15.0),
                        ("Mixed Vegetables (100 cal)", 3.0),
                        ("Curd (100 cal)", 8.0),
                        ("Salad (50 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Protein Shake with milk (300 cal)", 25.0),
                        ("4 Boiled Eggs (280 cal)", 24.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("3 Whole Wheat Rotis (210 cal)", 9.0),
                        ("Fish/Chicken Curry - 150g (300 cal)", 30.0),
                        ("Vegetable Sabzi (100 cal)", 3.0),
                        ("1 Cup Milk (150 cal)", 8.0),
                    ],
                ),
            ],
            &[
                "Include lean protein in every meal",
                "Eat 6-8 meals per day",
                "Combine carbs with protein",
                "Stay hydrated and exercise regularly",
            ],
        ),
    );

    table.insert(
        (Normal, DietType::Veg),
        plan(
            GOAL_MAINTENANCE,
            "2000-2200",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("Oats with fruits & nuts (300 cal)", 12.0),
                        ("Green Tea (5 cal)", 0.0),
                        ("Mixed seeds - 1 tbsp (50 cal)", 4.0),
                    ],
                ),
                meal(MidMorning, &[("1 Apple with 6 almonds (120 cal)", 4.0)]),
                meal(
                    Lunch,
                    &[
                        ("1.5 Cups Brown Rice (165 cal)", 8.0),
                        ("Dal - 1 cup (150 cal)", 15.0),
                        ("Paneer Sabzi - 80g (200 cal)", 12.0),
                        ("Mixed Vegetables (80 cal)", 3.0),
                        ("Curd - 1/2 cup (75 cal)", 4.0),
                        ("Green Salad (40 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[("Green Tea (5 cal)", 0.0), ("Sprouts Chat (100 cal)", 6.0)],
                ),
                meal(
                    Dinner,
                    &[
                        ("2 Whole Wheat Rotis (140 cal)", 8.0),
                        ("Vegetable Curry (100 cal)", 3.0),
                        ("Dal - 1/2 cup (75 cal)", 7.0),
                        ("Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "Maintain balanced macronutrients",
                "Include variety of colorful vegetables",
                "Exercise 4-5 times per week",
                "Stay hydrated with 8-10 glasses water",
                "Incorporate regular cardio exercises like jogging, cycling, or swimming",
                "Focus on high-intensity interval training (HIIT) to boost fat loss",
                "Combine strength training with cardio for optimal fat burning",
                "Keep active throughout the day to increase overall calorie expenditure",
            ],
        ),
    );

    table.insert(
        (Normal, DietType::NonVeg),
        plan(
            GOAL_MAINTENANCE,
            "2000-2200",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("2 Egg Omelette with vegetables (200 cal)", 12.0),
                        ("1 Whole Wheat Toast (70 cal)", 4.0),
                        ("Green Tea (5 cal)", 0.0),
                    ],
                ),
                meal(MidMorning, &[("1 Apple with almonds (120 cal)", 4.0)]),
                meal(
                    Lunch,
                    &[
                        ("1.5 Cups Brown Rice (165 cal)", 8.0),
                        ("Grilled Chicken - 100g (165 cal)", 31.0),
                        ("Dal - 1 cup (150 cal)", 15.0),
                        ("Mixed Vegetables (80 cal)", 3.0),
                        ("Curd (75 cal)", 4.0),
                        ("Salad (40 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Green Tea (5 cal)", 0.0),
                        ("Boiled Eggs - 2 (140 cal)", 12.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("2 Whole Wheat Rotis (140 cal)", 8.0),
                        ("Fish/Chicken Curry - 100g (200 cal)", 25.0),
                        ("Vegetable Sabzi (80 cal)", 3.0),
                        ("Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "Choose lean protein sources",
                "Include omega-3 rich fish twice a week",
                "Regular exercise and strength training",
                "Monitor portion sizes",
            ],
        ),
    );

    table.insert(
        (Overweight, DietType::Veg),
        plan(
            GOAL_WEIGHT_LOSS,
            "1500-1800",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("Vegetable Poha with minimal oil (200 cal)", 6.0),
                        ("Green Tea (5 cal)", 0.0),
                        ("6 Almonds (42 cal)", 4.0),
                    ],
                ),
                meal(MidMorning, &[("1 Orange or seasonal fruit (60 cal)", 1.0)]),
                meal(
                    Lunch,
                    &[
                        ("1 Cup Brown Rice (110 cal)", 6.0),
                        ("Mixed Dal - 3/4 cup (110 cal)", 12.0),
                        ("Mixed Vegetable Curry (60 cal)", 3.0),
                        ("Large Green Salad with lemon (50 cal)", 2.0),
                        ("Buttermilk - 1 glass (60 cal)", 3.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Green Tea (5 cal)", 0.0),
                        ("Roasted Chana - handful (100 cal)", 8.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("2 Whole Wheat Rotis (140 cal)", 8.0),
                        ("Mixed Vegetable Curry (80 cal)", 3.0),
                        ("Dal - 1/2 cup (75 cal)", 7.0),
                        ("Large Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "Control portion sizes",
                "Eat slowly and mindfully",
                "Increase fiber intake",
                "Exercise daily - cardio + strength training",
                "Drink water before meals",
            ],
        ),
    );

    table.insert(
        (Overweight, DietType::NonVeg),
        plan(
            GOAL_WEIGHT_LOSS,
            "1500-1800",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("2 Egg White Omelette with vegetables (120 cal)", 10.0),
                        ("1 Whole Wheat Toast (70 cal)", 4.0),
                        ("Green Tea (5 cal)", 0.0),
                    ],
                ),
                meal(MidMorning, &[("1 Apple (80 cal)", 1.0)]),
                meal(
                    Lunch,
                    &[
                        ("1 Cup Brown Rice (110 cal)", 6.0),
                        ("Grilled Chicken Breast - 80g (130 cal)", 25.0),
                        ("Dal - 3/4 cup (110 cal)", 12.0),
                        ("Steamed Vegetables (40 cal)", 3.0),
                        ("Large Salad (50 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Green Tea (5 cal)", 0.0),
                        ("2 Boiled Egg Whites (34 cal)", 7.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("2 Whole Wheat Rotis (140 cal)", 8.0),
                        ("Grilled Fish/Chicken - 80g (150 cal)", 26.0),
                        ("Steamed Vegetables (60 cal)", 3.0),
                        ("Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "Choose lean cuts of meat",
                "Grill, bake, or steam instead of frying",
                "Include protein in every meal",
                "Regular cardio exercise",
                "Track your food intake",
            ],
        ),
    );

    table.insert(
        (Obese, DietType::Veg),
        plan(
            GOAL_SIGNIFICANT_LOSS,
            "1200-1500",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("Vegetable Daliya/Oats (180 cal)", 6.0),
                        ("Green Tea (5 cal)", 0.0),
                        ("4 Almonds (28 cal)", 3.0),
                    ],
                ),
                meal(MidMorning, &[("1 Small apple (60 cal)", 1.0)]),
                meal(
                    Lunch,
                    &[
                        ("3/4 Cup Brown Rice (85 cal)", 4.0),
                        ("Dal - 3/4 cup (110 cal)", 13.0),
                        ("Steamed Vegetables - large portion (50 cal)", 3.0),
                        ("Large Green Salad (40 cal)", 2.0),
                        ("Buttermilk (50 cal)", 3.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Green Tea (5 cal)", 0.0),
                        ("Cucumber/Carrot sticks (20 cal)", 1.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("2 Small Whole Wheat Rotis (120 cal)", 7.0),
                        ("Mixed Vegetable Curry (low oil) (60 cal)", 3.0),
                        ("Clear Dal - 1/2 cup (60 cal)", 6.0),
                        ("Large Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "Strict portion control",
                "Eat vegetables first, then proteins, then carbs",
                "Daily exercise minimum 45 minutes",
                "Drink warm water with lemon",
                "Avoid processed foods completely",
                "Consult a nutritionist",
            ],
        ),
    );

    table.insert(
        (Obese, DietType::NonVeg),
        plan(
            GOAL_SIGNIFICANT_LOSS,
            "1200-1500",
            vec![
                meal(
                    Breakfast,
                    &[
                        ("2 Egg White Scramble with vegetables (100 cal)", 10.0),
                        ("Green Tea (5 cal)", 0.0),
                    ],
                ),
                meal(MidMorning, &[("1 Small seasonal fruit (50 cal)", 1.0)]),
                meal(
                    Lunch,
                    &[
                        ("3/4 Cup Brown Rice (85 cal)", 4.0),
                        ("Grilled Chicken/Fish - 60g (100 cal)", 20.0),
                        ("Clear Dal (80 cal)", 7.0),
                        ("Large portion steamed vegetables (50 cal)", 3.0),
                        ("Large Salad (40 cal)", 2.0),
                    ],
                ),
                meal(
                    Evening,
                    &[
                        ("Green Tea (5 cal)", 0.0),
                        ("1 Boiled Egg White (17 cal)", 4.0),
                    ],
                ),
                meal(
                    Dinner,
                    &[
                        ("1.5 Small Rotis (90 cal)", 6.0),
                        ("Grilled Fish/Chicken - 60g (120 cal)", 24.0),
                        ("Steamed/Boiled Vegetables (50 cal)", 3.0),
                        ("Large Salad (40 cal)", 2.0),
                    ],
                ),
            ],
            &[
                "High protein, low carb approach",
                "Intensive exercise program",
                "Meal prep and planning",
                "Regular health check-ups",
                "Consider professional guidance",
                "Track progress weekly",
            ],
        ),
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    #[test]
    fn every_category_and_diet_has_a_plan() {
        for category in CATEGORIES {
            for diet in ["veg", "nonveg"] {
                let plan = resolve_plan(category, diet);
                assert!(!plan.is_empty(), "{category}/{diet} should have a plan");
                assert!(plan.goal.is_some());
                assert!(plan.daily_calories.is_some());
                assert!(!plan.tips.is_empty());
            }
        }
    }

    #[test]
    fn meals_follow_serving_order() {
        let expected = [
            MealSlot::Breakfast,
            MealSlot::MidMorning,
            MealSlot::Lunch,
            MealSlot::Evening,
            MealSlot::Dinner,
        ];
        for category in CATEGORIES {
            for diet in ["veg", "nonveg"] {
                let slots: Vec<MealSlot> =
                    resolve_plan(category, diet).meals.iter().map(|m| m.slot).collect();
                assert_eq!(slots, expected);
            }
        }
    }

    #[test]
    fn goals_match_category() {
        assert_eq!(resolve_plan(BmiCategory::Underweight, "veg").goal, Some(GOAL_WEIGHT_GAIN));
        assert_eq!(resolve_plan(BmiCategory::Normal, "nonveg").goal, Some(GOAL_MAINTENANCE));
        assert_eq!(resolve_plan(BmiCategory::Overweight, "veg").goal, Some(GOAL_WEIGHT_LOSS));
        assert_eq!(
            resolve_plan(BmiCategory::Obese, "nonveg").goal,
            Some(GOAL_SIGNIFICANT_LOSS)
        );
        assert_eq!(
            resolve_plan(BmiCategory::Obese, "veg").daily_calories,
            Some("1200-1500")
        );
    }

    #[test]
    fn unknown_diet_type_resolves_to_empty_plan() {
        for raw in ["pescatarian", "", "Veg", "NONVEG", " veg"] {
            let plan = resolve_plan(BmiCategory::Normal, raw);
            assert!(plan.is_empty(), "{raw:?} should miss");
            assert_eq!(plan, &EMPTY_PLAN);
        }
    }

    #[test]
    fn diet_type_parse_is_exact() {
        assert_eq!(DietType::parse("veg"), Some(DietType::Veg));
        assert_eq!(DietType::parse("nonveg"), Some(DietType::NonVeg));
        assert_eq!(DietType::parse("non-veg"), None);
    }

    #[test]
    fn meal_slot_serializes_snake_case() {
        let json = serde_json::to_string(&MealSlot::MidMorning).unwrap();
        assert_eq!(json, "\"mid_morning\"");
    }
}
