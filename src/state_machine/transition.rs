//! Pure state transition function
//!
//! Given the same state and event, always produces the same new state and
//! effects. A transition that leaves the state untouched emits no
//! [`Effect::PersistState`], so rejected input never reaches the store.

use super::event::{
    parse_age, parse_gender, parse_height_cm, parse_weight_kg, Event, MenuSelection,
};
use super::{DialogueState, Effect, HealthData, IntakeStep, Mode};
use crate::catalog::{self, ExerciseKind};
use crate::metrics::{self, Gender};

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: DialogueState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: DialogueState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    /// State changed: persist it, then reply
    fn commit(state: DialogueState, reply: String) -> Self {
        Self::new(state)
            .with_effect(Effect::PersistState)
            .with_effect(Effect::reply(reply))
    }

    /// State unchanged: reply only
    fn stay(state: &DialogueState, reply: String) -> Self {
        Self::new(*state).with_effect(Effect::reply(reply))
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Text of the reply effect, if any
    #[cfg(test)]
    pub fn reply(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Reply { text } => Some(text.as_str()),
            Effect::PersistState => None,
        })
    }

    pub fn persists(&self) -> bool {
        self.effects.contains(&Effect::PersistState)
    }
}

/// Pure transition function
pub fn transition(state: &DialogueState, event: Event) -> TransitionResult {
    match (&state.mode, event) {
        // ============================================================
        // Global commands: back to the menu from anywhere
        // ============================================================
        (_, Event::Command(_)) => {
            TransitionResult::commit(DialogueState::menu(state.health_data), catalog::main_menu())
        }

        // ============================================================
        // Main menu
        // ============================================================
        (Mode::Menu, Event::Text(text)) => on_menu(state, &text),

        // ============================================================
        // Health intake
        // ============================================================
        (Mode::HealthIntake { step }, Event::Text(text)) => on_intake(state, *step, &text),

        // ============================================================
        // Exercise menu
        // ============================================================
        (Mode::ExerciseMenu, Event::Text(text)) => on_exercise_menu(state, &text),
    }
}

fn on_menu(state: &DialogueState, text: &str) -> TransitionResult {
    match MenuSelection::parse(text) {
        Some(MenuSelection::HealthCheck) => TransitionResult::commit(
            DialogueState {
                mode: Mode::HealthIntake {
                    step: IntakeStep::Height,
                },
                health_data: state.health_data,
            },
            catalog::height_prompt(),
        ),
        Some(MenuSelection::ExercisePlan) => TransitionResult::commit(
            DialogueState {
                mode: Mode::ExerciseMenu,
                health_data: state.health_data,
            },
            exercise_menu_for(state),
        ),
        Some(MenuSelection::DietPlan) => {
            let reply = state.health_data.as_ref().map_or_else(
                || catalog::DIET_NEEDS_INTAKE.to_string(),
                |data| catalog::diet_plan(data.category()),
            );
            TransitionResult::stay(state, reply)
        }
        None => TransitionResult::stay(state, catalog::main_menu()),
    }
}

fn on_intake(state: &DialogueState, step: IntakeStep, text: &str) -> TransitionResult {
    let advance = |next: IntakeStep, reply: String| {
        TransitionResult::commit(
            DialogueState {
                mode: Mode::HealthIntake { step: next },
                health_data: state.health_data,
            },
            reply,
        )
    };

    let outcome = match step {
        IntakeStep::Height => parse_height_cm(text).map(|height_cm| {
            advance(
                IntakeStep::Weight { height_cm },
                catalog::weight_prompt(height_cm),
            )
        }),
        IntakeStep::Weight { height_cm } => parse_weight_kg(text).map(|weight_kg| {
            advance(
                IntakeStep::Age {
                    height_cm,
                    weight_kg,
                },
                catalog::age_prompt(weight_kg),
            )
        }),
        IntakeStep::Age {
            height_cm,
            weight_kg,
        } => parse_age(text).map(|age| {
            advance(
                IntakeStep::Gender {
                    height_cm,
                    weight_kg,
                    age,
                },
                catalog::gender_prompt(age),
            )
        }),
        IntakeStep::Gender {
            height_cm,
            weight_kg,
            age,
        } => parse_gender(text)
            .map(|gender| complete_intake(state, height_cm, weight_kg, age, gender)),
    };

    outcome.unwrap_or_else(|err| TransitionResult::stay(state, catalog::intake_error(&err)))
}

fn complete_intake(
    state: &DialogueState,
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: Gender,
) -> TransitionResult {
    let height_m = height_cm / 100.0;
    let Ok(bmi) = metrics::bmi(height_m, weight_kg) else {
        // Range checks make this unreachable; drop the intake, keep old results
        return TransitionResult::commit(
            DialogueState::menu(state.health_data),
            catalog::incomplete_data(),
        );
    };
    let bmr = metrics::bmr(weight_kg, height_cm, age, gender);

    let data = HealthData {
        bmi,
        bmr,
        age,
        gender,
        height_m,
        height_cm,
        weight_kg,
    };
    let reply = catalog::health_summary(
        data.height_cm,
        data.weight_kg,
        data.gender,
        data.bmi,
        data.category(),
        data.bmr,
    );
    TransitionResult::commit(DialogueState::menu(Some(data)), reply)
}

fn on_exercise_menu(state: &DialogueState, text: &str) -> TransitionResult {
    match ExerciseKind::from_selector(text) {
        // One selection per visit
        Some(kind) => TransitionResult::commit(
            DialogueState::menu(state.health_data),
            kind.plan(),
        ),
        None => TransitionResult::stay(state, exercise_menu_for(state)),
    }
}

fn exercise_menu_for(state: &DialogueState) -> String {
    catalog::exercise_menu(state.health_data.as_ref().map(HealthData::recommendation))
}
