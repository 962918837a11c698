pub mod engine;
pub mod input;
pub mod tables;
pub mod validation;

pub use engine::{
    bonus_score, compute_breakdown, compute_teaching_hours, duty_role_score,
    life_guidance_outcome, teaching_hours_to_score, training_hours_to_score, FactorContribution,
    LifeGuidanceOutcome, ScoreBreakdown, SUBTOTAL_CAP,
};
pub use input::*;
pub use tables::{StepTable, TEACHING_HOURS_TABLE, TRAINING_HOURS_TABLE};
pub use validation::{consistency_warnings, validate_input};
