//! Body metric calculations
//!
//! Pure functions for body-mass index, BMI banding and basal metabolic rate.
//!
//! BMR uses the Mifflin-St Jeor equation (1990):
//! `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + s`, where `s` is +5
//! for men and -161 for women.

use thiserror::Error;

/// Errors from metric calculations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MetricError {
    #[error("height must be a positive finite number, got {0}")]
    NonPositiveHeight(f64),
}

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Display label used in replies
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }

    fn mifflin_offset(self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

/// BMI band. Bands are half-open with an inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// `< 18.5`
    Underweight,
    /// `[18.5, 24)`
    Normal,
    /// `[24, 27)`
    Overweight,
    /// `[27, 30)`
    MildObesity,
    /// `[30, 35)`
    ModerateObesity,
    /// `>= 35`
    SevereObesity,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::MildObesity,
        BmiCategory::ModerateObesity,
        BmiCategory::SevereObesity,
    ];

    /// Band containing `bmi`. NaN lands in the top band.
    pub fn from_bmi(bmi: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.contains(bmi))
            .unwrap_or(BmiCategory::SevereObesity)
    }

    pub fn contains(self, bmi: f64) -> bool {
        let (lower, upper) = self.bounds();
        bmi >= lower && bmi < upper
    }

    /// Half-open `[lower, upper)` bounds of the band. Open ends are infinite.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (f64::NEG_INFINITY, 18.5),
            BmiCategory::Normal => (18.5, 24.0),
            BmiCategory::Overweight => (24.0, 27.0),
            BmiCategory::MildObesity => (27.0, 30.0),
            BmiCategory::ModerateObesity => (30.0, 35.0),
            BmiCategory::SevereObesity => (35.0, f64::INFINITY),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "體重過輕",
            BmiCategory::Normal => "正常範圍",
            BmiCategory::Overweight => "體重過重",
            BmiCategory::MildObesity => "輕度肥胖",
            BmiCategory::ModerateObesity => "中度肥胖",
            BmiCategory::SevereObesity => "重度肥胖",
        }
    }
}

/// Body-mass index, `weight_kg / height_m²`, rounded half-to-even to 2 decimals.
///
/// # Errors
///
/// Returns [`MetricError::NonPositiveHeight`] when the height is zero,
/// negative or not finite.
pub fn bmi(height_m: f64, weight_kg: f64) -> Result<f64, MetricError> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(MetricError::NonPositiveHeight(height_m));
    }
    Ok(round_to(weight_kg / (height_m * height_m), 2))
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor), rounded to 1 decimal.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let raw = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.mifflin_offset();
    round_to(raw, 1)
}

/// Round to `decimals` places. Exact ties go to the even neighbour.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
