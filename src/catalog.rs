//! Static reply catalog
//!
//! Every user-facing string the bot sends lives here. Lookups are pure and
//! total: unknown keys map to a fallback text instead of failing.

mod diet;
mod exercise;
mod menus;

pub use diet::diet_plan;
pub use exercise::{exercise_menu, recommend_exercise, ExerciseKind, Recommendation};
pub use menus::{
    age_prompt, gender_prompt, health_summary, height_prompt, incomplete_data, intake_error,
    main_menu, unrecognized_command, weight_prompt, DIET_NEEDS_INTAKE,
};

/// Escape hint appended to every intake prompt
pub const ESCAPE_HINT: &str = "💬 輸入「返回」可重新選擇";

/// Footer for texts that end a branch and lead back to the menu
pub const BACK_TO_MENU_HINT: &str = "💬 輸入「返回」回到選單";
