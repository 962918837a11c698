use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Homeroom assignment. A single value, so primary and assistant never stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HomeroomStatus {
    #[default]
    None,
    Primary,
    Assistant,
}

impl HomeroomStatus {
    /// Extra weighted teaching hours for this homeroom status
    pub fn hour_credit(self) -> f64 {
        match self {
            HomeroomStatus::None => 0.0,
            HomeroomStatus::Primary => 1.0,
            HomeroomStatus::Assistant => 0.5,
        }
    }
}

/// First "yes" in the life-guidance question sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LifeGuidanceAnswer {
    HomeroomYes,
    SpecialDutyYes,
    NonHomeroomYes,
    #[default]
    NoneSelected,
}

/// Raw yes/no answers to the three life-guidance questions.
///
/// Question order is fixed: homeroom, special duty, non-homeroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeGuidanceAnswers {
    pub is_homeroom: bool,
    /// Remote-campus assignment, lead sports-club duty, health, librarian,
    /// counseling, or safety-department head/planner roles
    pub has_special_duty: bool,
    pub is_non_homeroom: bool,
}

impl LifeGuidanceAnswers {
    /// Collapse the raw answers to the first "yes", ignoring everything after it
    pub fn resolve(&self) -> LifeGuidanceAnswer {
        if self.is_homeroom {
            LifeGuidanceAnswer::HomeroomYes
        } else if self.has_special_duty {
            LifeGuidanceAnswer::SpecialDutyYes
        } else if self.is_non_homeroom {
            LifeGuidanceAnswer::NonHomeroomYes
        } else {
            LifeGuidanceAnswer::NoneSelected
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DutyRole {
    DepartmentHead,
    /// Planning, health, librarian, counseling
    SpecialStaff,
    GeneralStaff,
    #[default]
    None,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    SubjectHead,
    /// More than 18 weekly teaching hours, creative activities excluded
    #[value(name = "over18-hours")]
    Over18Hours,
    /// Teaching three or more subjects, creative activities excluded
    ThreeSubjects,
    SchoolViolenceCommittee,
    PersonnelCommittee,
    /// Teacher member of the school operating council
    SchoolCouncil,
    /// Mutual-aid society officer (president, treasurer)
    MutualAid,
    /// Lesson research for the ministry, education office or district
    LessonResearch,
}

impl BonusKind {
    pub const ALL: [BonusKind; 8] = [
        BonusKind::SubjectHead,
        BonusKind::Over18Hours,
        BonusKind::ThreeSubjects,
        BonusKind::SchoolViolenceCommittee,
        BonusKind::PersonnelCommittee,
        BonusKind::SchoolCouncil,
        BonusKind::MutualAid,
        BonusKind::LessonResearch,
    ];

    pub fn weight(self) -> f64 {
        match self {
            BonusKind::SubjectHead
            | BonusKind::Over18Hours
            | BonusKind::ThreeSubjects
            | BonusKind::SchoolViolenceCommittee
            | BonusKind::PersonnelCommittee => 0.5,
            BonusKind::SchoolCouncil | BonusKind::MutualAid | BonusKind::LessonResearch => 1.0,
        }
    }

    /// Human-readable label used in prompts and reports
    pub fn label(self) -> &'static str {
        match self {
            BonusKind::SubjectHead => "Subject head",
            BonusKind::Over18Hours => "Over 18 teaching hours (creative activities excluded)",
            BonusKind::ThreeSubjects => "Three or more subjects (creative activities excluded)",
            BonusKind::SchoolViolenceCommittee => "School violence committee member",
            BonusKind::PersonnelCommittee => "Personnel advisory committee member",
            BonusKind::SchoolCouncil => "School council teacher member",
            BonusKind::MutualAid => "Mutual-aid society officer",
            BonusKind::LessonResearch => "Lesson research (ministry, office, district)",
        }
    }
}

/// Answers for a single evaluation.
///
/// Every field defaults to the form's initial state: zero hours, no homeroom,
/// no life-guidance answer, no duty role and no bonus flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreInput {
    /// Weekly teaching hours, creative activities excluded
    pub actual_teaching_hours: f64,
    /// Weekly creative-activity hours, counted at half weight
    pub creative_activity_hours: f64,
    pub homeroom_status: HomeroomStatus,
    pub is_club_homeroom: bool,
    pub is_department_head: bool,
    pub is_sports_club_homeroom: bool,
    pub life_guidance: LifeGuidanceAnswer,
    pub duty_role: DutyRole,
    pub training_hours: f64,
    pub bonus_flags: BTreeSet<BonusKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_initial_form_state() {
        let input = ScoreInput::default();
        assert_eq!(input.actual_teaching_hours, 0.0);
        assert_eq!(input.homeroom_status, HomeroomStatus::None);
        assert_eq!(input.life_guidance, LifeGuidanceAnswer::NoneSelected);
        assert_eq!(input.duty_role, DutyRole::None);
        assert!(input.bonus_flags.is_empty());
    }

    #[test]
    fn test_resolve_first_yes_wins() {
        let all_yes = LifeGuidanceAnswers {
            is_homeroom: true,
            has_special_duty: true,
            is_non_homeroom: true,
        };
        assert_eq!(all_yes.resolve(), LifeGuidanceAnswer::HomeroomYes);

        let special = LifeGuidanceAnswers {
            is_homeroom: false,
            has_special_duty: true,
            is_non_homeroom: true,
        };
        assert_eq!(special.resolve(), LifeGuidanceAnswer::SpecialDutyYes);

        let non_homeroom = LifeGuidanceAnswers {
            is_non_homeroom: true,
            ..Default::default()
        };
        assert_eq!(non_homeroom.resolve(), LifeGuidanceAnswer::NonHomeroomYes);
    }

    #[test]
    fn test_resolve_all_no() {
        assert_eq!(
            LifeGuidanceAnswers::default().resolve(),
            LifeGuidanceAnswer::NoneSelected
        );
    }

    #[test]
    fn test_homeroom_hour_credit() {
        assert_eq!(HomeroomStatus::None.hour_credit(), 0.0);
        assert_eq!(HomeroomStatus::Primary.hour_credit(), 1.0);
        assert_eq!(HomeroomStatus::Assistant.hour_credit(), 0.5);
    }

    #[test]
    fn test_bonus_weights_sum_to_five_and_a_half() {
        // Five half-point items and three one-point items
        let total: f64 = BonusKind::ALL.iter().map(|k| k.weight()).sum();
        assert_eq!(total, 5.5);
    }

    #[test]
    fn test_input_yaml_uses_snake_case() {
        let yaml = r#"
actual_teaching_hours: 16.5
homeroom_status: assistant
life_guidance: special_duty_yes
duty_role: general_staff
bonus_flags: [mutual_aid, over18_hours]
"#;
        let input: ScoreInput = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(input.actual_teaching_hours, 16.5);
        assert_eq!(input.homeroom_status, HomeroomStatus::Assistant);
        assert_eq!(input.life_guidance, LifeGuidanceAnswer::SpecialDutyYes);
        assert_eq!(input.duty_role, DutyRole::GeneralStaff);
        assert!(input.bonus_flags.contains(&BonusKind::MutualAid));
        assert!(input.bonus_flags.contains(&BonusKind::Over18Hours));
        assert_eq!(input.creative_activity_hours, 0.0);
    }

    #[test]
    fn test_input_rejects_unknown_field() {
        let yaml = "actual_teaching_hours: 10\nfavorite_color: blue\n";
        let result: Result<ScoreInput, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
