use serde::Serialize;
use std::collections::BTreeSet;

use super::input::{BonusKind, DutyRole, LifeGuidanceAnswer, ScoreInput};
use super::tables::{TEACHING_HOURS_TABLE, TRAINING_HOURS_TABLE};

/// Nominal maximum of the four category scores combined
pub const SUBTOTAL_CAP: f64 = 100.0;

pub const TEACHING_MAX: f64 = 30.0;
pub const LIFE_GUIDANCE_MAX: f64 = 30.0;
pub const DUTY_MAX: f64 = 30.0;
pub const PROFESSIONAL_DEVELOPMENT_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Teaching", "Bonus"
    pub description: String, // e.g. "21.0 weighted hours, matched >=18 -> 30.0"
    pub score: f64,
    pub max: Option<f64>, // None for the uncapped bonus
}

/// Result of the life-guidance question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeGuidanceOutcome {
    Homeroom,
    SpecialDuty,
    NonHomeroom,
    /// No question was answered "yes". Scores 0 but is not a valid result.
    Incomplete,
}

impl LifeGuidanceOutcome {
    pub fn score(self) -> f64 {
        match self {
            LifeGuidanceOutcome::Homeroom => 30.0,
            LifeGuidanceOutcome::SpecialDuty => 26.0,
            LifeGuidanceOutcome::NonHomeroom => 22.0,
            LifeGuidanceOutcome::Incomplete => 0.0,
        }
    }

    pub fn is_incomplete(self) -> bool {
        self == LifeGuidanceOutcome::Incomplete
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub teaching_score: f64,
    pub life_guidance_score: f64,
    pub duty_score: f64,
    pub professional_development_score: f64,
    pub bonus_score: f64,
    /// Sum of the four category scores, 0..=100
    pub subtotal: f64,
    /// Subtotal plus bonus. Never clamped.
    pub final_total: f64,
    pub weighted_teaching_hours: f64,
    pub life_guidance: LifeGuidanceOutcome,
    pub incomplete: bool,
    pub over_cap: bool,
    pub factors: Vec<FactorContribution>,
}

/// Weighted weekly teaching hours: creative activities count half, and each
/// homeroom or club role adds a fixed credit.
pub fn compute_teaching_hours(input: &ScoreInput) -> f64 {
    let mut total = input.actual_teaching_hours + input.creative_activity_hours * 0.5;
    total += input.homeroom_status.hour_credit();

    for held in [
        input.is_club_homeroom,
        input.is_department_head,
        input.is_sports_club_homeroom,
    ] {
        if held {
            total += 1.0;
        }
    }

    total
}

pub fn teaching_hours_to_score(hours: f64) -> f64 {
    TEACHING_HOURS_TABLE.lookup(hours)
}

pub fn life_guidance_outcome(answer: LifeGuidanceAnswer) -> LifeGuidanceOutcome {
    match answer {
        LifeGuidanceAnswer::HomeroomYes => LifeGuidanceOutcome::Homeroom,
        LifeGuidanceAnswer::SpecialDutyYes => LifeGuidanceOutcome::SpecialDuty,
        LifeGuidanceAnswer::NonHomeroomYes => LifeGuidanceOutcome::NonHomeroom,
        LifeGuidanceAnswer::NoneSelected => LifeGuidanceOutcome::Incomplete,
    }
}

pub fn duty_role_score(role: DutyRole) -> f64 {
    match role {
        DutyRole::DepartmentHead => 30.0,
        DutyRole::SpecialStaff => 26.0,
        DutyRole::GeneralStaff => 22.0,
        DutyRole::None => 0.0,
    }
}

pub fn training_hours_to_score(hours: f64) -> f64 {
    TRAINING_HOURS_TABLE.lookup(hours)
}

/// Sum of bonus weights. Uncapped.
pub fn bonus_score(flags: &BTreeSet<BonusKind>) -> f64 {
    flags.iter().map(|kind| kind.weight()).sum()
}

/// Score every category independently and aggregate.
///
/// Total over any input: a category with missing answers degrades to its own
/// zero or floor value instead of failing the whole computation.
pub fn compute_breakdown(input: &ScoreInput) -> ScoreBreakdown {
    let mut factors = Vec::with_capacity(5);

    let weighted_teaching_hours = compute_teaching_hours(input);
    let teaching_match = TEACHING_HOURS_TABLE.matched(weighted_teaching_hours);
    let teaching_score = teaching_match.score();
    factors.push(FactorContribution {
        label: "Teaching".to_string(),
        description: format!(
            "{:.1} weighted hours, matched {}",
            weighted_teaching_hours,
            teaching_match.describe()
        ),
        score: teaching_score,
        max: Some(TEACHING_MAX),
    });

    let life_guidance = life_guidance_outcome(input.life_guidance);
    let life_guidance_score = life_guidance.score();
    factors.push(FactorContribution {
        label: "Life guidance".to_string(),
        description: match life_guidance {
            LifeGuidanceOutcome::Homeroom => "homeroom teacher".to_string(),
            LifeGuidanceOutcome::SpecialDuty => "special duty assignment".to_string(),
            LifeGuidanceOutcome::NonHomeroom => "non-homeroom teacher".to_string(),
            LifeGuidanceOutcome::Incomplete => "no answer selected (incomplete)".to_string(),
        },
        score: life_guidance_score,
        max: Some(LIFE_GUIDANCE_MAX),
    });

    let duty_score = duty_role_score(input.duty_role);
    factors.push(FactorContribution {
        label: "Duty".to_string(),
        description: match input.duty_role {
            DutyRole::DepartmentHead => "department head".to_string(),
            DutyRole::SpecialStaff => "planning, health, librarian or counseling".to_string(),
            DutyRole::GeneralStaff => "general staff".to_string(),
            DutyRole::None => "no duty role".to_string(),
        },
        score: duty_score,
        max: Some(DUTY_MAX),
    });

    let training_match = TRAINING_HOURS_TABLE.matched(input.training_hours);
    let professional_development_score = training_match.score();
    factors.push(FactorContribution {
        label: "Professional development".to_string(),
        description: format!(
            "{} training hours, matched {}",
            input.training_hours,
            training_match.describe()
        ),
        score: professional_development_score,
        max: Some(PROFESSIONAL_DEVELOPMENT_MAX),
    });

    let bonus = bonus_score(&input.bonus_flags);
    factors.push(FactorContribution {
        label: "Bonus".to_string(),
        description: format!("{} of {} items", input.bonus_flags.len(), BonusKind::ALL.len()),
        score: bonus,
        max: None,
    });

    let subtotal = teaching_score + life_guidance_score + duty_score + professional_development_score;
    let final_total = subtotal + bonus;

    ScoreBreakdown {
        teaching_score,
        life_guidance_score,
        duty_score,
        professional_development_score,
        bonus_score: bonus,
        subtotal,
        final_total,
        weighted_teaching_hours,
        life_guidance,
        incomplete: life_guidance.is_incomplete(),
        over_cap: final_total > SUBTOTAL_CAP,
        factors,
    }
}
