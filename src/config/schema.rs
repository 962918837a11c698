use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreInput;

/// Answers file contents.
///
/// Example YAML:
/// ```yaml
/// answers:
///   actual_teaching_hours: 18
///   life_guidance: non_homeroom_yes
///   duty_role: general_staff
/// output:
///   format: text
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub answers: ScoreInput,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Colorize text output: auto (TTY only), always or never
    #[serde(default)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Tab-separated values for scripting
    Tsv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{BonusKind, DutyRole, HomeroomStatus, LifeGuidanceAnswer};

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
answers:
  actual_teaching_hours: 15
  homeroom_status: primary
output:
  format: json
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.answers.actual_teaching_hours, 15.0);
        assert_eq!(config.answers.homeroom_status, HomeroomStatus::Primary);
        assert_eq!(config.answers.duty_role, DutyRole::None);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.color, ColorChoice::Auto);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
answers:
  actual_teaching_hours: 18
  creative_activity_hours: 2
  homeroom_status: primary
  is_department_head: true
  life_guidance: homeroom_yes
  duty_role: department_head
  training_hours: 60
  bonus_flags:
    - school_council
    - lesson_research
output:
  format: tsv
  color: never
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.answers.is_department_head);
        assert_eq!(config.answers.life_guidance, LifeGuidanceAnswer::HomeroomYes);
        assert_eq!(config.answers.bonus_flags.len(), 2);
        assert!(config.answers.bonus_flags.contains(&BonusKind::LessonResearch));
        assert_eq!(config.output.format, OutputFormat::Tsv);
        assert_eq!(config.output.color, ColorChoice::Never);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.answers.actual_teaching_hours = 17.5;
        config.answers.duty_role = DutyRole::SpecialStaff;
        config.answers.bonus_flags.insert(BonusKind::Over18Hours);
        config.output.format = OutputFormat::Json;

        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let yaml = "answers: {}\nqueries: []\n";
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
