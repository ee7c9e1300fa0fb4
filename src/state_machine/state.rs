//! Dialogue state types

use crate::catalog::{recommend_exercise, Recommendation};
use crate::metrics::{BmiCategory, Gender};

// ============================================================================
// Intake
// ============================================================================

/// Position in the health intake. Each step carries the answers validated
/// so far, so a step can never be reached with a missing earlier answer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IntakeStep {
    /// Step 1: waiting for height (cm)
    #[default]
    Height,
    /// Step 2: waiting for weight (kg)
    Weight { height_cm: f64 },
    /// Step 3: waiting for age (years)
    Age { height_cm: f64, weight_kg: f64 },
    /// Step 4: waiting for gender
    Gender {
        height_cm: f64,
        weight_kg: f64,
        age: u32,
    },
}

impl IntakeStep {
    /// 1-based position in the height → weight → age → gender sequence
    pub fn ordinal(&self) -> u8 {
        match self {
            IntakeStep::Height => 1,
            IntakeStep::Weight { .. } => 2,
            IntakeStep::Age { .. } => 3,
            IntakeStep::Gender { .. } => 4,
        }
    }

    /// Answers accumulated so far
    pub fn pending(&self) -> PendingInputs {
        match *self {
            IntakeStep::Height => PendingInputs::default(),
            IntakeStep::Weight { height_cm } => PendingInputs {
                height_cm: Some(height_cm),
                ..PendingInputs::default()
            },
            IntakeStep::Age {
                height_cm,
                weight_kg,
            } => PendingInputs {
                height_cm: Some(height_cm),
                weight_kg: Some(weight_kg),
                age: None,
            },
            IntakeStep::Gender {
                height_cm,
                weight_kg,
                age,
            } => PendingInputs {
                height_cm: Some(height_cm),
                weight_kg: Some(weight_kg),
                age: Some(age),
            },
        }
    }
}

/// Flat view of the intake answers collected so far
#[allow(dead_code)] // Read through pending_inputs()
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendingInputs {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age: Option<u32>,
}

// ============================================================================
// Completed results
// ============================================================================

/// Snapshot of the most recently completed intake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthData {
    pub bmi: f64,
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    pub age: u32,
    pub gender: Gender,
    #[allow(dead_code)] // Kept alongside height_cm in the stored snapshot
    pub height_m: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl HealthData {
    pub fn category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }

    pub fn recommendation(&self) -> Recommendation {
        recommend_exercise(self.bmi, self.age)
    }
}

// ============================================================================
// Dialogue State
// ============================================================================

/// Top-level branch of the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    /// Main menu, waiting for a feature selection
    #[default]
    Menu,
    /// Collecting body metrics
    HealthIntake { step: IntakeStep },
    /// Choosing an exercise category
    ExerciseMenu,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::HealthIntake { .. } => "health_intake",
            Mode::ExerciseMenu => "exercise_menu",
        }
    }
}

/// Per-user dialogue state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialogueState {
    pub mode: Mode,
    /// Survives every mode change; replaced only by a newer completed intake
    pub health_data: Option<HealthData>,
}

impl DialogueState {
    /// Menu state that keeps previously computed results
    pub fn menu(health_data: Option<HealthData>) -> Self {
        Self {
            mode: Mode::Menu,
            health_data,
        }
    }

    /// Current intake step ordinal, `None` outside the intake
    pub fn step(&self) -> Option<u8> {
        match &self.mode {
            Mode::HealthIntake { step } => Some(step.ordinal()),
            _ => None,
        }
    }

    /// Intake answers collected so far, `None` outside the intake
    #[allow(dead_code)] // Inspection helper
    pub fn pending_inputs(&self) -> Option<PendingInputs> {
        match &self.mode {
            Mode::HealthIntake { step } => Some(step.pending()),
            _ => None,
        }
    }
}
