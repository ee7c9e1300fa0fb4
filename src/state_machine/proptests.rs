//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::event::GlobalCommand;
use super::state::*;
use super::transition::*;
use super::*;
use crate::metrics::Gender;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_health_data() -> impl Strategy<Value = HealthData> {
    (100.0f64..=250.0, 30.0f64..=300.0, 10u32..=120, arb_gender()).prop_map(
        |(height_cm, weight_kg, age, gender)| {
            let height_m = height_cm / 100.0;
            HealthData {
                bmi: crate::metrics::bmi(height_m, weight_kg).unwrap_or_default(),
                bmr: crate::metrics::bmr(weight_kg, height_cm, age, gender),
                age,
                gender,
                height_m,
                height_cm,
                weight_kg,
            }
        },
    )
}

fn arb_intake_step() -> impl Strategy<Value = IntakeStep> {
    (100.0f64..=250.0, 30.0f64..=300.0, 10u32..=120).prop_flat_map(
        |(height_cm, weight_kg, age)| {
            prop_oneof![
                Just(IntakeStep::Height),
                Just(IntakeStep::Weight { height_cm }),
                Just(IntakeStep::Age {
                    height_cm,
                    weight_kg
                }),
                Just(IntakeStep::Gender {
                    height_cm,
                    weight_kg,
                    age
                }),
            ]
        },
    )
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Menu),
        arb_intake_step().prop_map(|step| Mode::HealthIntake { step }),
        Just(Mode::ExerciseMenu),
    ]
}

fn arb_state() -> impl Strategy<Value = DialogueState> {
    (arb_mode(), proptest::option::of(arb_health_data()))
        .prop_map(|(mode, health_data)| DialogueState { mode, health_data })
}

fn arb_intake_state() -> impl Strategy<Value = DialogueState> {
    (arb_intake_step(), proptest::option::of(arb_health_data())).prop_map(
        |(step, health_data)| DialogueState {
            mode: Mode::HealthIntake { step },
            health_data,
        },
    )
}

fn arb_command_phrase() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(
        GlobalCommand::ALL_PHRASES
            .iter()
            .map(|(phrase, _)| *phrase)
            .collect::<Vec<_>>(),
    )
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_command_phrase().prop_map(String::from),
        "[0-9]{1,3}",
        "[0-9]{1,3}\\.[0-9]{1,2}",
        "-[0-9]{1,3}",
        Just("男".to_string()),
        Just("女".to_string()),
        "[a-zA-Z ]{0,12}",
    ]
}

/// Numbers rejected by every numeric intake step
fn arb_out_of_range_number() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i64..=9).prop_map(|n| n.to_string()),
        (301i64..=100_000).prop_map(|n| n.to_string()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every message produces exactly one reply
    #[test]
    fn prop_exactly_one_reply(state in arb_state(), message in arb_message()) {
        let result = transition(&state, Event::from_message(&message));
        let replies = result
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::Reply { .. }))
            .count();
        prop_assert_eq!(replies, 1);
    }

    /// Unpersisted transitions never change the state
    #[test]
    fn prop_no_persist_means_no_change(state in arb_state(), message in arb_message()) {
        let result = transition(&state, Event::from_message(&message));
        if !result.persists() {
            prop_assert_eq!(result.new_state, state);
        }
    }

    /// Health data is kept as-is unless a full intake just completed
    #[test]
    fn prop_health_data_never_partially_changes(state in arb_state(), message in arb_message()) {
        let result = transition(&state, Event::from_message(&message));
        let completed_intake = matches!(
            state.mode,
            Mode::HealthIntake { step: IntakeStep::Gender { .. } }
        ) && result.new_state.mode == Mode::Menu
            && result.new_state.health_data != state.health_data;

        if completed_intake {
            let data = result.new_state.health_data.unwrap();
            if let Mode::HealthIntake { step: IntakeStep::Gender { height_cm, weight_kg, age } } = state.mode {
                prop_assert_eq!(data.height_cm, height_cm);
                prop_assert_eq!(data.weight_kg, weight_kg);
                prop_assert_eq!(data.age, age);
            }
        } else {
            prop_assert_eq!(result.new_state.health_data, state.health_data);
        }
    }

    /// Global commands always land on the menu with results preserved
    #[test]
    fn prop_global_command_resets_to_menu(state in arb_state(), phrase in arb_command_phrase()) {
        let result = transition(&state, Event::from_message(phrase));
        prop_assert_eq!(result.new_state, DialogueState::menu(state.health_data));
    }

    /// Out-of-range numbers never move the intake forward
    #[test]
    fn prop_out_of_range_is_idempotent(
        state in arb_intake_state(),
        number in arb_out_of_range_number(),
    ) {
        let first = transition(&state, Event::from_message(&number));
        prop_assert_eq!(first.new_state, state);
        prop_assert!(!first.persists());

        let second = transition(&first.new_state, Event::from_message(&number));
        prop_assert_eq!(second.reply(), first.reply());
    }

    /// `step` is only observable inside the intake
    #[test]
    fn prop_step_only_in_intake(state in arb_state(), message in arb_message()) {
        let result = transition(&state, Event::from_message(&message));
        let in_intake = matches!(result.new_state.mode, Mode::HealthIntake { .. });
        prop_assert_eq!(result.new_state.step().is_some(), in_intake);
    }
}
