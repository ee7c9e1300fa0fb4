//! Diet plans keyed by BMI band

use super::BACK_TO_MENU_HINT;
use crate::metrics::BmiCategory;

struct DietPlan {
    headline: &'static str,
    advice: &'static str,
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
}

const UNDERWEIGHT: DietPlan = DietPlan {
    headline: "📊 您的體重偏輕",
    advice: "建議:增加熱量攝取",
    breakfast: "豆漿+三明治+香蕉",
    lunch: "便當+雞腿+多吃飯",
    dinner: "牛排+義大利麵",
};

const NORMAL: DietPlan = DietPlan {
    headline: "✅ 您的體重正常",
    advice: "建議:維持均衡飲食",
    breakfast: "燕麥+水果+堅果",
    lunch: "糙米飯+雞胸肉+青菜",
    dinner: "魚肉+地瓜+沙拉",
};

const OVERWEIGHT: DietPlan = DietPlan {
    headline: "⚠️ 您的體重偏重",
    advice: "建議:控制熱量攝取",
    breakfast: "無糖豆漿+茶葉蛋",
    lunch: "半碗飯+瘦肉+2碗菜",
    dinner: "蒸魚+燙青菜(少澱粉)",
};

// All obesity bands (BMI >= 27) share one plan.
const OBESE: DietPlan = DietPlan {
    headline: "🔴 建議諮詢營養師",
    advice: "建議:積極控制飲食",
    breakfast: "無糖豆漿+地瓜",
    lunch: "少量飯+瘦肉+3碗菜",
    dinner: "蒸魚+燙青菜3碗(不吃澱粉)",
};

fn plan_for(category: BmiCategory) -> &'static DietPlan {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT,
        BmiCategory::Normal => &NORMAL,
        BmiCategory::Overweight => &OVERWEIGHT,
        BmiCategory::MildObesity | BmiCategory::ModerateObesity | BmiCategory::SevereObesity => {
            &OBESE
        }
    }
}

/// Personalised diet plan for a BMI band
pub fn diet_plan(category: BmiCategory) -> String {
    let plan = plan_for(category);
    format!(
        "🍽️ 個人化飲食計畫\n\n\
         {headline}\n\
         {advice}\n\n\
         🌅 早:{breakfast}\n\
         🌞 午:{lunch}\n\
         🌙 晚:{dinner}\n\n\
         ⚠️ 請諮詢醫師或營養師\n\n\
         {BACK_TO_MENU_HINT}",
        headline = plan.headline,
        advice = plan.advice,
        breakfast = plan.breakfast,
        lunch = plan.lunch,
        dinner = plan.dinner,
    )
}
