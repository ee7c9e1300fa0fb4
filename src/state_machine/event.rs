//! Inbound messages and the input vocabulary

use crate::metrics::Gender;
use thiserror::Error;

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A global command, honoured in every mode
    Command(GlobalCommand),
    /// Any other text, interpreted by the current mode
    Text(String),
}

impl Event {
    /// Classify a raw user message. Surrounding whitespace is ignored.
    pub fn from_message(raw: &str) -> Self {
        let text = raw.trim();
        GlobalCommand::parse(text).map_or_else(|| Event::Text(text.to_string()), Event::Command)
    }
}

// ============================================================================
// Global commands
// ============================================================================

/// Commands that return to the main menu from anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalCommand {
    Menu,
    Start,
    Back,
    Help,
}

impl GlobalCommand {
    /// Every recognised trigger phrase. Matching is exact and case-sensitive.
    pub const ALL_PHRASES: &'static [(&'static str, GlobalCommand)] = &[
        ("選單", GlobalCommand::Menu),
        ("功能", GlobalCommand::Menu),
        ("menu", GlobalCommand::Menu),
        ("開始", GlobalCommand::Start),
        ("start", GlobalCommand::Start),
        ("返回", GlobalCommand::Back),
        ("back", GlobalCommand::Back),
        ("重新選擇", GlobalCommand::Back),
        ("help", GlobalCommand::Help),
    ];

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL_PHRASES
            .iter()
            .find(|(phrase, _)| *phrase == text)
            .map(|(_, command)| *command)
    }
}

// ============================================================================
// Menu selections
// ============================================================================

/// Feature picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    HealthCheck,
    ExercisePlan,
    DietPlan,
}

impl MenuSelection {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "1" => Some(MenuSelection::HealthCheck),
            "2" => Some(MenuSelection::ExercisePlan),
            "3" => Some(MenuSelection::DietPlan),
            _ => None,
        }
    }
}

// ============================================================================
// Intake answers
// ============================================================================

pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);
pub const AGE_RANGE: (i64, i64) = (10, 120);

/// Why an intake answer was rejected. The message is shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("請輸入有效數字")]
    NotANumber,
    #[error("年齡請輸入整數,例如: 30")]
    NotAnInteger,
    #[error("請輸入{min}-{max}之間的數字")]
    OutOfRange { min: String, max: String },
    #[error("請輸入: 男 或 女")]
    UnrecognizedGender,
}

impl InputError {
    fn out_of_range(min: impl ToString, max: impl ToString) -> Self {
        InputError::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Map full-width digits and the full-width full stop to ASCII, as typed by
/// CJK input methods.
fn fold_full_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(u32::from(c) - 0xFF10 + u32::from('0')).unwrap_or(c),
            '．' => '.',
            _ => c,
        })
        .collect()
}

fn parse_decimal(text: &str, (min, max): (f64, f64)) -> Result<f64, InputError> {
    let value: f64 = fold_full_width(text)
        .parse()
        .map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::out_of_range(min, max))
    }
}

/// Height in centimeters, 100–250 inclusive
pub fn parse_height_cm(text: &str) -> Result<f64, InputError> {
    parse_decimal(text, HEIGHT_CM_RANGE)
}

/// Weight in kilograms, 30–300 inclusive
pub fn parse_weight_kg(text: &str) -> Result<f64, InputError> {
    parse_decimal(text, WEIGHT_KG_RANGE)
}

/// Age in whole years, 10–120 inclusive
pub fn parse_age(text: &str) -> Result<u32, InputError> {
    let value: i64 = fold_full_width(text).parse().map_err(|_| {
        if parse_decimal(text, (f64::MIN, f64::MAX)).is_ok() {
            InputError::NotAnInteger
        } else {
            InputError::NotANumber
        }
    })?;
    let (min, max) = AGE_RANGE;
    if !(min..=max).contains(&value) {
        return Err(InputError::out_of_range(min, max));
    }
    u32::try_from(value).map_err(|_| InputError::out_of_range(min, max))
}

pub fn parse_gender(text: &str) -> Result<Gender, InputError> {
    match text {
        "男" | "male" => Ok(Gender::Male),
        "女" | "female" => Ok(Gender::Female),
        _ => Err(InputError::UnrecognizedGender),
    }
}
