use crate::types::record::Tool;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PolicyObjective {
    /// National energy planning (supply mix, capacity expansion)
    NationalPlanning,
    /// Electrification / energy access (off-grid, mini-grid)
    Electrification,
    /// Regional power trade (interconnections, power pools)
    RegionalTrade,
    /// Short-term dispatch and grid flexibility
    Dispatch,
    /// Climate-energy-water-land nexus
    Nexus,
    /// Demand forecasting
    DemandForecasting,
    /// Environmental / climate impact assessment
    Environmental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisScale {
    National,
    SubNational,
    Regional,
    Continental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    /// Zero budget (open source only)
    Zero,
    /// Low / freemium acceptable
    Low,
    /// Any budget
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TeamCapacity {
    /// No programming, GUI-only
    Limited,
    /// Scripting, some technical skills
    Intermediate,
    /// Full programming
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimeHorizon {
    /// 2030-2060 strategic planning
    LongTerm,
    /// 5-15 years
    MediumTerm,
    /// Sub-annual dispatch
    ShortTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataContext {
    /// Detailed national statistics available
    Good,
    /// Some gaps, proxy data needed
    Moderate,
    /// Data-scarce, low-income context
    Limited,
}

/// The six-question user profile. Every answer is optional; unanswered
/// questions contribute no adjustments.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RecommenderQuery {
    pub policy: Option<PolicyObjective>,
    pub scale: Option<AnalysisScale>,
    pub budget: Option<BudgetBand>,
    pub capacity: Option<TeamCapacity>,
    pub horizon: Option<TimeHorizon>,
    pub data_context: Option<DataContext>,
}

impl RecommenderQuery {
    pub fn is_empty(&self) -> bool {
        self.policy.is_none()
            && self.scale.is_none()
            && self.budget.is_none()
            && self.capacity.is_none()
            && self.horizon.is_none()
            && self.data_context.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredTool {
    #[serde(flatten)]
    pub tool: Tool,
    pub match_score: i32,
}
