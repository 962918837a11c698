use super::input::{BonusKind, LifeGuidanceAnswer, ScoreInput};

/// Validate answers before they reach the engine.
/// Returns all validation errors at once (not just the first).
pub fn validate_input(input: &ScoreInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let hours = [
        ("actual_teaching_hours", input.actual_teaching_hours),
        ("creative_activity_hours", input.creative_activity_hours),
        ("training_hours", input.training_hours),
    ];
    for (field, value) in hours {
        if !value.is_finite() {
            errors.push(format!("answers.{}: must be a finite number", field));
        } else if value < 0.0 {
            errors.push(format!(
                "answers.{}: must be non-negative (got {})",
                field, value
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Answers that are valid on their own but contradict each other.
/// These never change the score; the caller decides whether to show them.
pub fn consistency_warnings(input: &ScoreInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.life_guidance == LifeGuidanceAnswer::NoneSelected {
        warnings.push(
            "answers.life_guidance: no life-guidance answer selected, scored as 0".to_string(),
        );
    }

    if input.bonus_flags.contains(&BonusKind::Over18Hours) && input.actual_teaching_hours <= 18.0 {
        warnings.push(format!(
            "answers.bonus_flags: over18_hours is set but actual_teaching_hours is {}",
            input.actual_teaching_hours
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = ScoreInput {
            actual_teaching_hours: 18.0,
            creative_activity_hours: 2.0,
            training_hours: 30.0,
            ..Default::default()
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(validate_input(&ScoreInput::default()).is_ok());
    }

    #[test]
    fn test_negative_hours() {
        let input = ScoreInput {
            training_hours: -1.0,
            ..Default::default()
        };
        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("answers.training_hours"));
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_non_finite_hours() {
        let input = ScoreInput {
            actual_teaching_hours: f64::NAN,
            creative_activity_hours: f64::INFINITY,
            ..Default::default()
        };
        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("answers.actual_teaching_hours"));
        assert!(errors[1].contains("answers.creative_activity_hours"));
    }

    #[test]
    fn test_collects_all_errors() {
        let input = ScoreInput {
            actual_teaching_hours: -2.0,
            creative_activity_hours: -0.5,
            training_hours: -10.0,
            ..Default::default()
        };
        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_warns_when_life_guidance_missing() {
        let warnings = consistency_warnings(&ScoreInput::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("answers.life_guidance"));
    }

    #[test]
    fn test_warns_on_over18_bonus_without_hours() {
        let input = ScoreInput {
            actual_teaching_hours: 18.0,
            life_guidance: LifeGuidanceAnswer::NonHomeroomYes,
            bonus_flags: [BonusKind::Over18Hours].into_iter().collect(),
            ..Default::default()
        };
        let warnings = consistency_warnings(&input);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("over18_hours"));
    }

    #[test]
    fn test_no_warning_when_over18_consistent() {
        let input = ScoreInput {
            actual_teaching_hours: 19.0,
            life_guidance: LifeGuidanceAnswer::HomeroomYes,
            bonus_flags: [BonusKind::Over18Hours].into_iter().collect(),
            ..Default::default()
        };
        assert!(consistency_warnings(&input).is_empty());
    }
}
