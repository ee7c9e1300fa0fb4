//! Exercise plans and the BMI/age based recommendation

use super::BACK_TO_MENU_HINT;
use std::fmt::Write;

/// Exercise categories offered by the exercise menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    UpperBody,
    LowerBody,
    SeniorHome,
}

/// Returned when a selector matches no exercise plan
const UNKNOWN_EXERCISE: &str = "找不到該運動計畫";

const UPPER_BODY_DETAIL: &str = "💪 上肢訓練計畫

🎯 目標:強化手臂、肩膀、胸部

📋 訓練動作:
• 伏地挺身 10次 x 3組
• 啞鈴彎舉 12次 x 3組
• 肩推 10次 x 3組

⏱️ 組間休息:60秒
📅 建議頻率:每週3次
• 強度:適中,可感受肌肉收縮

⚠️ 不適立即停止,疼痛請就醫";

const LOWER_BODY_DETAIL: &str = "🦵 下肢訓練計畫

🎯 目標:強化大腿、臀部、小腿

📋 訓練動作:
• 深蹲 15次 x 3組
• 弓箭步 12次 x 3組(每腿)
• 橋式 15次 x 3組

⏱️ 組間休息:60秒
📅 建議頻率:每週3次
• 強度:適中,膝蓋不超過腳尖

⚠️ 不適立即停止,膝痛請就醫";

const SENIOR_HOME_DETAIL: &str = "🧓 長者居家運動

🎯 目標:維持活動力、預防跌倒

📋 訓練動作:
• 坐姿抬腿 10次 x 2組
• 手臂畫圈 10次 x 2組
• 站姿側抬腿 8次 x 2組(扶椅)

⏱️ 組間休息:90秒
📅 建議頻率:每天輕鬆做
• 強度:輕鬆不費力

⚠️ 不適立即停止,頭暈胸悶請就醫";

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::UpperBody,
        ExerciseKind::LowerBody,
        ExerciseKind::SeniorHome,
    ];

    /// Parse a menu selector (`"1"`..`"3"`)
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(ExerciseKind::UpperBody),
            "2" => Some(ExerciseKind::LowerBody),
            "3" => Some(ExerciseKind::SeniorHome),
            _ => None,
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            ExerciseKind::UpperBody => "1",
            ExerciseKind::LowerBody => "2",
            ExerciseKind::SeniorHome => "3",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExerciseKind::UpperBody => "上肢訓練",
            ExerciseKind::LowerBody => "下肢訓練",
            ExerciseKind::SeniorHome => "長者居家運動",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            ExerciseKind::UpperBody => UPPER_BODY_DETAIL,
            ExerciseKind::LowerBody => LOWER_BODY_DETAIL,
            ExerciseKind::SeniorHome => SENIOR_HOME_DETAIL,
        }
    }

    /// Video tutorial search link (title, percent-encoded)
    pub fn video_url(self) -> &'static str {
        match self {
            ExerciseKind::UpperBody => {
                "https://www.youtube.com/results?search_query=%E4%B8%8A%E8%82%A2%E8%A8%93%E7%B7%B4"
            }
            ExerciseKind::LowerBody => {
                "https://www.youtube.com/results?search_query=%E4%B8%8B%E8%82%A2%E8%A8%93%E7%B7%B4"
            }
            ExerciseKind::SeniorHome => {
                "https://www.youtube.com/results?search_query=%E9%95%B7%E8%80%85%E5%B1%85%E5%AE%B6%E9%81%8B%E5%8B%95"
            }
        }
    }

    /// Full plan text for this category
    pub fn plan(self) -> String {
        format!(
            "{}\n\n🎬 影片教學:\n{}\n\n{BACK_TO_MENU_HINT}",
            self.detail(),
            self.video_url()
        )
    }
}

/// Exercise plan text for a raw menu selector
#[allow(dead_code)] // Lookup for callers holding an unparsed selector
pub fn exercise_detail(selector: &str) -> String {
    ExerciseKind::from_selector(selector).map_or_else(
        || format!("{UNKNOWN_EXERCISE}\n\n{BACK_TO_MENU_HINT}"),
        ExerciseKind::plan,
    )
}

/// Suggested exercise category with its rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: ExerciseKind,
    pub reason: &'static str,
}

/// Pick an exercise category from BMI and age.
///
/// Age takes priority: 65 and over always gets the senior programme.
pub fn recommend_exercise(bmi: f64, age: u32) -> Recommendation {
    if age >= 65 {
        Recommendation {
            kind: ExerciseKind::SeniorHome,
            reason: "適合銀髮族的低衝擊運動",
        }
    } else if bmi < 18.5 {
        Recommendation {
            kind: ExerciseKind::UpperBody,
            reason: "增加肌肉量,提升體重",
        }
    } else if bmi >= 27.0 {
        Recommendation {
            kind: ExerciseKind::LowerBody,
            reason: "大肌群運動,有效消耗熱量",
        }
    } else {
        Recommendation {
            kind: ExerciseKind::UpperBody,
            reason: "均衡訓練,維持健康",
        }
    }
}

/// Exercise menu, headed by the recommendation when one is available
pub fn exercise_menu(recommendation: Option<Recommendation>) -> String {
    let mut menu = String::from("💪 運動計畫\n\n");

    if let Some(rec) = recommendation {
        let _ = writeln!(menu, "🎯 AI推薦: {}", rec.kind.title());
        let _ = writeln!(menu, "   {}\n", rec.reason);
    }

    menu.push_str("請選擇運動類型:\n");
    for kind in ExerciseKind::ALL {
        // Digit + VS16 + combining keycap renders as 1️⃣
        let _ = writeln!(menu, "{}\u{fe0f}\u{20e3} {}", kind.selector(), kind.title());
    }
    menu.push_str("\n請輸入數字 1-3\n\n");
    menu.push_str(BACK_TO_MENU_HINT);
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip() {
        for kind in ExerciseKind::ALL {
            assert_eq!(ExerciseKind::from_selector(kind.selector()), Some(kind));
        }
        assert_eq!(ExerciseKind::from_selector("4"), None);
        assert_eq!(ExerciseKind::from_selector(""), None);
    }

    #[test]
    fn test_unknown_selector_falls_back() {
        assert!(exercise_detail("9").starts_with(UNKNOWN_EXERCISE));
        assert!(exercise_detail("2").starts_with("🦵 下肢訓練計畫"));
    }

    #[test]
    fn test_plan_includes_video_link() {
        let plan = ExerciseKind::SeniorHome.plan();
        assert!(plan.contains("🎬 影片教學"));
        assert!(plan.contains("youtube.com/results"));
    }

    #[test]
    fn test_recommendation_rules() {
        assert_eq!(recommend_exercise(30.0, 70).kind, ExerciseKind::SeniorHome);
        assert_eq!(recommend_exercise(17.0, 30).kind, ExerciseKind::UpperBody);
        assert_eq!(recommend_exercise(27.0, 30).kind, ExerciseKind::LowerBody);
        assert_eq!(recommend_exercise(24.22, 30).kind, ExerciseKind::UpperBody);
        assert_eq!(recommend_exercise(24.22, 30).reason, "均衡訓練,維持健康");
        assert_eq!(recommend_exercise(26.99, 64).kind, ExerciseKind::UpperBody);
    }

    #[test]
    fn test_menu_with_and_without_recommendation() {
        let plain = exercise_menu(None);
        assert!(!plain.contains("AI推薦"));
        assert!(plain.contains("1️⃣ 上肢訓練"));
        assert!(plain.contains("3️⃣ 長者居家運動"));

        let rec = recommend_exercise(28.0, 40);
        let personalised = exercise_menu(Some(rec));
        assert!(personalised.contains("🎯 AI推薦: 下肢訓練"));
        assert!(personalised.contains("大肌群運動"));
    }
}
