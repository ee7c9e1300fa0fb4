//! Menus, intake prompts and result summaries

use super::{BACK_TO_MENU_HINT, ESCAPE_HINT};
use crate::metrics::{BmiCategory, Gender};
use std::fmt::Display;

const MAIN_MENU: &str = "👋 歡迎使用健康數據管家!

請選擇功能:

1️⃣ 健康檢測
   分析身體數值+飲食建議

2️⃣ 運動計畫
   個人化運動+影片教學

3️⃣ 飲食計畫
   超商組合+外食建議

請輸入數字 1-3";

/// Reply when the diet plan is requested before any intake completed
pub const DIET_NEEDS_INTAKE: &str = "💡 建議先完成「健康檢測」
可獲得個人化飲食建議

輸入「1」開始檢測
或輸入「返回」重新選擇";

pub fn main_menu() -> String {
    MAIN_MENU.to_string()
}

pub fn unrecognized_command() -> String {
    "❓ 無法識別指令\n\n請輸入「選單」查看功能".to_string()
}

pub fn incomplete_data() -> String {
    format!("❌ 資料不完整,請重新開始\n\n{BACK_TO_MENU_HINT}")
}

pub fn height_prompt() -> String {
    format!("📊 健康檢測\n\n請輸入你的身高(公分)\n例如: 170\n\n{ESCAPE_HINT}")
}

pub fn weight_prompt(height_cm: f64) -> String {
    format!("✅ 身高: {height_cm:.0}cm\n\n請輸入體重(公斤)\n例如: 70\n\n{ESCAPE_HINT}")
}

pub fn age_prompt(weight_kg: f64) -> String {
    format!("✅ 體重: {weight_kg}kg\n\n請輸入年齡(歲)\n例如: 30\n\n{ESCAPE_HINT}")
}

pub fn gender_prompt(age: u32) -> String {
    format!("✅ 年齡: {age}歲\n\n請輸入性別\n請輸入: 男 或 女\n\n{ESCAPE_HINT}")
}

/// Guidance for a rejected intake answer. `reason` is the validation error.
pub fn intake_error(reason: &impl Display) -> String {
    format!("⚠️ {reason}\n\n{ESCAPE_HINT}")
}

/// Result summary for a completed intake
pub fn health_summary(
    height_cm: f64,
    weight_kg: f64,
    gender: Gender,
    bmi: f64,
    category: BmiCategory,
    bmr: f64,
) -> String {
    let label = category.label();
    let gender = gender.label();
    format!(
        "📊 健康分析結果\n\n\
         性別: {gender}\n\
         身高: {height_cm:.0}cm\n\
         體重: {weight_kg}kg\n\
         BMI: {bmi} ({label})\n\
         基礎代謝率: {bmr}大卡/天\n\n\
         ✅ 分析完成!\n\n\
         💬 輸入「選單」查看:\n\
         • 運動計畫(AI推薦)\n\
         • 飲食計畫(個人化)\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_mention_escape() {
        for prompt in [
            height_prompt(),
            weight_prompt(170.0),
            age_prompt(70.0),
            gender_prompt(30),
            intake_error(&"請輸入有效數字"),
        ] {
            assert!(prompt.contains("返回"), "missing escape hint: {prompt}");
        }
    }

    #[test]
    fn test_confirmation_formatting() {
        assert!(weight_prompt(172.4).starts_with("✅ 身高: 172cm"));
        assert!(age_prompt(70.0).starts_with("✅ 體重: 70kg"));
        assert!(age_prompt(65.5).starts_with("✅ 體重: 65.5kg"));
    }

    #[test]
    fn test_summary_contains_metrics() {
        let summary = health_summary(
            170.0,
            70.0,
            Gender::Male,
            24.22,
            BmiCategory::Overweight,
            1617.5,
        );
        assert!(summary.contains("性別: 男"));
        assert!(summary.contains("身高: 170cm"));
        assert!(summary.contains("BMI: 24.22 (體重過重)"));
        assert!(summary.contains("基礎代謝率: 1617.5大卡/天"));
    }

    #[test]
    fn test_main_menu_lists_three_features() {
        let menu = main_menu();
        assert!(menu.contains("1️⃣ 健康檢測"));
        assert!(menu.contains("2️⃣ 運動計畫"));
        assert!(menu.contains("3️⃣ 飲食計畫"));
    }
}
