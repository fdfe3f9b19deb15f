use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

const SALES_INSTRUCTION: &str = concat!(
    "あなたは一流の営業コンサルタントです。",
    "法人営業・個人営業どちらにも精通しており、",
    "具体的なトーク例や行動レベルのアドバイスをわかりやすく提案してください。"
);

const MARKETING_INSTRUCTION: &str = concat!(
    "あなたは一流のマーケティング専門家です。",
    "デジタル広告、SNS運用、コンテンツマーケティング、",
    "LTV向上などを踏まえた具体的な施策を提案してください。"
);

const GENERAL_INSTRUCTION: &str = "あなたはビジネス全般に詳しいコンサルタントです。";

/// The consultation category picked by the user. Decides which instruction
/// frames the model for a submission.
///
/// Parsing never fails: any identifier outside the selectable set lands on
/// [`ExpertRole::General`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum ExpertRole {
    #[strum(to_string = "sales", serialize = "営業")]
    Sales,
    #[strum(to_string = "marketing", serialize = "マーケティング")]
    Marketing,
    #[default]
    #[strum(to_string = "general")]
    General,
}

impl ExpertRole {
    /// Resolves a role identifier, falling back to [`ExpertRole::General`]
    /// for anything unrecognized.
    pub fn parse(id: &str) -> Self {
        id.trim().parse().unwrap_or_default()
    }

    /// The choices offered on the consultation form, in display order.
    pub fn selectable() -> [ExpertRole; 2] {
        [ExpertRole::Sales, ExpertRole::Marketing]
    }

    /// The fixed system instruction for this role.
    pub fn instruction(&self) -> &'static str {
        match self {
            ExpertRole::Sales => SALES_INSTRUCTION,
            ExpertRole::Marketing => MARKETING_INSTRUCTION,
            ExpertRole::General => GENERAL_INSTRUCTION,
        }
    }

    /// Human readable label shown next to the role's radio button.
    pub fn label(&self) -> &'static str {
        match self {
            ExpertRole::Sales => "営業",
            ExpertRole::Marketing => "マーケティング",
            ExpertRole::General => "ビジネス全般",
        }
    }
}

impl From<String> for ExpertRole {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ExpertRole> for String {
    fn from(value: ExpertRole) -> Self {
        value.to_string()
    }
}
