use crate::types::record::{LearningCurve, License, Programming, Tool};
use crate::types::recommend::{
    AnalysisScale, BudgetBand, DataContext, PolicyObjective, TeamCapacity, TimeHorizon,
};

// Fixed point values; the rule engine is policy, not configuration.
pub const POLICY_MATCH: i32 = 30;
pub const SCALE_MATCH: i32 = 8;
pub const DATA_SCARCITY: i32 = 5;
pub const TRAINING: i32 = 5;
pub const HORIZON_MATCH: i32 = 10;
pub const TRACK_RECORD_STRONG: i32 = 10;
pub const TRACK_RECORD_SOME: i32 = 5;
pub const TRACK_RECORD_STRONG_MIN: u32 = 10;
pub const TRACK_RECORD_SOME_MIN: u32 = 5;

/// Tool families suited to long-horizon strategic planning, matched as
/// substrings of the tool name.
pub const LONG_HORIZON_TOOLS: [&str; 7] = [
    "OSeMOSYS", "TIMES", "MESSAGE", "LEAP", "TEMBA", "CLEWs", "Balmorel",
];

/// Tool families suited to short-term / dispatch analysis.
pub const SHORT_HORIZON_TOOLS: [&str; 5] =
    ["FlexTool", "PLEXOS", "Dispa-SET", "SWITCH", "EnergyPLAN"];

/// Best-for tag each policy objective maps onto.
pub fn policy_tag(objective: PolicyObjective) -> &'static str {
    match objective {
        PolicyObjective::NationalPlanning => "national_planning",
        PolicyObjective::Electrification => "electrification",
        PolicyObjective::RegionalTrade => "regional_trade",
        PolicyObjective::Dispatch => "dispatch_flexibility",
        PolicyObjective::Nexus => "nexus",
        PolicyObjective::DemandForecasting => "demand_forecasting",
        PolicyObjective::Environmental => "environmental",
    }
}

pub fn policy_points(tool: &Tool, objective: PolicyObjective) -> i32 {
    if tool.best_for_tag(policy_tag(objective)) {
        POLICY_MATCH
    } else {
        0
    }
}

pub fn budget_points(tool: &Tool, budget: BudgetBand) -> i32 {
    match budget {
        BudgetBand::Zero => match tool.license {
            License::OpenSource => 15,
            License::Proprietary => -25,
            _ => 0,
        },
        BudgetBand::Low => match tool.license {
            License::OpenSource | License::Freemium => 10,
            License::Proprietary => -10,
            License::Unknown => 0,
        },
        BudgetBand::Any => 0,
    }
}

pub fn capacity_points(tool: &Tool, capacity: TeamCapacity) -> i32 {
    match capacity {
        TeamCapacity::Limited => match tool.programming_required {
            Programming::None => 15,
            Programming::Advanced => -20,
            _ => 0,
        },
        TeamCapacity::Intermediate => match tool.programming_required {
            Programming::None | Programming::Intermediate => 8,
            _ => 0,
        },
        TeamCapacity::Advanced => match tool.programming_required {
            Programming::Advanced => 10,
            _ => 0,
        },
    }
}

pub fn horizon_points(tool: &Tool, horizon: TimeHorizon) -> i32 {
    let family = match horizon {
        TimeHorizon::LongTerm => &LONG_HORIZON_TOOLS[..],
        TimeHorizon::ShortTerm => &SHORT_HORIZON_TOOLS[..],
        TimeHorizon::MediumTerm => return 0,
    };
    if family.iter().any(|name| tool.tool_name.contains(name)) {
        HORIZON_MATCH
    } else {
        0
    }
}

pub fn scale_points(tool: &Tool, scale: AnalysisScale) -> i32 {
    match scale {
        AnalysisScale::SubNational if tool.best_for_tag("electrification") => SCALE_MATCH,
        AnalysisScale::Regional if tool.best_for_tag("regional_trade") => SCALE_MATCH,
        _ => 0,
    }
}

pub fn data_context_points(tool: &Tool, context: DataContext) -> i32 {
    if context == DataContext::Limited
        && matches!(
            tool.learning_curve,
            LearningCurve::Low | LearningCurve::Medium
        )
    {
        DATA_SCARCITY
    } else {
        0
    }
}

/// Higher threshold wins; never both.
pub fn track_record_points(tool: &Tool) -> i32 {
    if tool.nb_studies_in_inventory >= TRACK_RECORD_STRONG_MIN {
        TRACK_RECORD_STRONG
    } else if tool.nb_studies_in_inventory >= TRACK_RECORD_SOME_MIN {
        TRACK_RECORD_SOME
    } else {
        0
    }
}

pub fn training_points(tool: &Tool) -> i32 {
    if tool.training_available {
        TRAINING
    } else {
        0
    }
}
