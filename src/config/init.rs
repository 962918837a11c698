use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config};
use crate::output::{format_breakdown, format_points};
use crate::scoring::{
    bonus_score, compute_breakdown, compute_teaching_hours, duty_role_score,
    life_guidance_outcome, teaching_hours_to_score, training_hours_to_score, BonusKind, DutyRole,
    HomeroomStatus, LifeGuidanceAnswers, ScoreInput,
};

/// Line-oriented question/answer session over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before all questions were answered");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
        let input = input.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Prompt for a non-negative number of hours, re-asking until one is given.
    fn prompt_hours(&mut self, message: &str, default: f64) -> Result<f64> {
        loop {
            let input = self.prompt(&format!("{} [{}]: ", message, default))?;
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => return Ok(v),
                Ok(_) => self.say("  Invalid: must be non-negative. Try again.")?,
                Err(_) => self.say("  Invalid: must be a non-negative number. Try again.")?,
            }
        }
    }

    /// Numbered single-choice question. `default` is a zero-based option index.
    fn prompt_choice<T: Copy>(
        &mut self,
        message: &str,
        options: &[(&str, T)],
        default: usize,
    ) -> Result<T> {
        self.say(message)?;
        for (i, (label, _)) in options.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, label))?;
        }
        loop {
            let input = self.prompt(&format!("Choice [{}]: ", default + 1))?;
            if input.is_empty() {
                return Ok(options[default].1);
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].1),
                _ => self.say(&format!(
                    "  Invalid: enter a number from 1 to {}. Try again.",
                    options.len()
                ))?,
            }
        }
    }
}

/// Ask every question in form order and collect the answers.
///
/// Life guidance stops at the first "yes"; later questions are never asked.
pub fn ask_answers<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<ScoreInput> {
    let mut input = ScoreInput::default();

    p.say("")?;
    p.say("1. Teaching (30 points)")?;
    input.actual_teaching_hours =
        p.prompt_hours("Weekly teaching hours, creative activities excluded", 18.0)?;
    input.creative_activity_hours = p.prompt_hours("Weekly creative-activity hours", 0.0)?;
    input.homeroom_status = p.prompt_choice(
        "Homeroom status:",
        &[
            ("None", HomeroomStatus::None),
            ("Homeroom teacher", HomeroomStatus::Primary),
            ("Assistant homeroom teacher", HomeroomStatus::Assistant),
        ],
        0,
    )?;
    input.is_club_homeroom = p.prompt_yes_no("Club homeroom teacher?", false)?;
    input.is_department_head = p.prompt_yes_no("Department head?", false)?;
    input.is_sports_club_homeroom = p.prompt_yes_no("Sports club homeroom teacher?", false)?;

    let weighted = compute_teaching_hours(&input);
    p.say(&format!(
        "  -> {:.1} weighted hours, teaching score {} / 30",
        weighted,
        format_points(teaching_hours_to_score(weighted))
    ))?;

    p.say("")?;
    p.say("2. Life guidance (30 points)")?;
    let mut answers = LifeGuidanceAnswers::default();
    answers.is_homeroom = p.prompt_yes_no("1) Are you a homeroom teacher?", false)?;
    if !answers.is_homeroom {
        answers.has_special_duty = p.prompt_yes_no(
            "2) Remote campus, lead sports club, health, librarian, counseling, \
             or safety department head/planner?",
            false,
        )?;
        if !answers.has_special_duty {
            answers.is_non_homeroom = p.prompt_yes_no("3) Are you a non-homeroom teacher?", false)?;
        }
    }
    input.life_guidance = answers.resolve();

    let outcome = life_guidance_outcome(input.life_guidance);
    if outcome.is_incomplete() {
        p.say("  -> No life-guidance answer selected. Life guidance scores 0 points.")?;
    } else {
        p.say(&format!(
            "  -> Life guidance score {} / 30",
            format_points(outcome.score())
        ))?;
    }

    p.say("")?;
    p.say("3. Duty (30 points)")?;
    input.duty_role = p.prompt_choice(
        "Which duty role applies?",
        &[
            ("Department head", DutyRole::DepartmentHead),
            (
                "Planning, health, librarian or counseling",
                DutyRole::SpecialStaff,
            ),
            ("General staff", DutyRole::GeneralStaff),
            ("None", DutyRole::None),
        ],
        0,
    )?;
    p.say(&format!(
        "  -> Duty score {} / 30",
        format_points(duty_role_score(input.duty_role))
    ))?;

    p.say("")?;
    p.say("4. Professional development (10 points)")?;
    input.training_hours = p.prompt_hours("Completed training hours", 0.0)?;
    p.say(&format!(
        "  -> Professional development score {} / 10",
        format_points(training_hours_to_score(input.training_hours))
    ))?;

    p.say("")?;
    p.say("5. Bonus (may push the total above 100)")?;
    for kind in BonusKind::ALL {
        let label = format!("{} (+{})", kind.label(), format_points(kind.weight()));
        if p.prompt_yes_no(&label, false)? {
            input.bonus_flags.insert(kind);
        }
    }
    p.say(&format!(
        "  -> Bonus total {}",
        format_points(bonus_score(&input.bonus_flags))
    ))?;

    Ok(input)
}

/// Run the interactive wizard: ask the questions, show the result, and offer
/// to save the answers file.
///
/// If `default_path` is Some, it is offered as the save location.
pub fn run_init_wizard(default_path: Option<PathBuf>, use_colors: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut p = Prompter::new(stdin.lock(), std::io::stdout());

    p.say("Multi-faceted evaluation score calculator")?;
    p.say("=========================================")?;
    p.say("Answer each question; press Enter to accept the value in brackets.")?;

    let answers = ask_answers(&mut p)?;
    let breakdown = compute_breakdown(&answers);
    tracing::debug!(final_total = breakdown.final_total, "wizard computed score");

    p.say("")?;
    p.say(&format_breakdown(&breakdown, use_colors))?;
    p.say("")?;

    if !p.prompt_yes_no("Save these answers?", true)? {
        return Ok(());
    }

    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    let path_str = p.prompt(&format!(
        "Where should the answers be saved? [{}]: ",
        default_config_path.display()
    ))?;
    let config_path = if path_str.is_empty() {
        default_config_path
    } else {
        PathBuf::from(path_str)
    };

    if config_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!(
                "Answers already exist at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            p.say("Aborted.")?;
            return Ok(());
        }
    }

    let config = Config {
        answers,
        ..Default::default()
    };
    save_config(&config_path, &config)?;

    p.say(&format!("Answers written to {}", config_path.display()))?;
    p.say("Run `merit-calc` to recalculate from the saved answers.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::LifeGuidanceAnswer;
    use std::io::Cursor;

    fn run_script(lines: &[&str]) -> (Result<ScoreInput>, String) {
        let script = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        let mut output = Vec::new();
        let result = {
            let mut p = Prompter::new(Cursor::new(script.into_bytes()), &mut output);
            ask_answers(&mut p)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_homeroom_yes_skips_remaining_life_questions() {
        let mut lines = vec![
            "20", // teaching hours
            "",   // creative hours
            "2",  // homeroom teacher
            "n",  // club homeroom
            "y",  // department head
            "n",  // sports club
            "y",  // life guidance Q1
            "1",  // duty: department head
            "60", // training hours
        ];
        lines.extend(["y"; 8]);

        let (result, output) = run_script(&lines);
        let input = result.unwrap();

        assert_eq!(input.actual_teaching_hours, 20.0);
        assert_eq!(input.creative_activity_hours, 0.0);
        assert_eq!(input.homeroom_status, HomeroomStatus::Primary);
        assert!(input.is_department_head);
        assert_eq!(input.life_guidance, LifeGuidanceAnswer::HomeroomYes);
        assert_eq!(input.duty_role, DutyRole::DepartmentHead);
        assert_eq!(input.training_hours, 60.0);
        assert_eq!(input.bonus_flags.len(), 8);

        assert!(!output.contains("Remote campus"));
        assert!(!output.contains("non-homeroom teacher?"));
        assert!(output.contains("22.0 weighted hours, teaching score 30.0 / 30"));
        assert!(output.contains("Bonus total 5.5"));
    }

    #[test]
    fn test_all_no_leaves_life_guidance_unselected() {
        let mut lines = vec!["", "", "", "", "", "", "n", "n", "n", "4", ""];
        lines.extend([""; 8]);

        let (result, output) = run_script(&lines);
        let input = result.unwrap();

        assert_eq!(input.actual_teaching_hours, 18.0);
        assert_eq!(input.life_guidance, LifeGuidanceAnswer::NoneSelected);
        assert_eq!(input.duty_role, DutyRole::None);
        assert!(input.bonus_flags.is_empty());
        assert!(output.contains("No life-guidance answer selected"));
    }

    #[test]
    fn test_special_duty_stops_before_third_question() {
        let mut lines = vec!["", "", "", "", "", "", "n", "y", "2", ""];
        lines.extend([""; 8]);

        let (result, output) = run_script(&lines);
        let input = result.unwrap();

        assert_eq!(input.life_guidance, LifeGuidanceAnswer::SpecialDutyYes);
        assert_eq!(input.duty_role, DutyRole::SpecialStaff);
        assert!(!output.contains("non-homeroom teacher?"));
    }

    #[test]
    fn test_invalid_answers_are_reasked() {
        let mut lines = vec![
            "-3", "abc", "12", // teaching hours, two rejected
            "", "9", "3", // homeroom: out of range, then assistant
            "", "", "", "n", "n", "y", "", "",
        ];
        lines.extend([""; 8]);

        let (result, output) = run_script(&lines);
        let input = result.unwrap();

        assert_eq!(input.actual_teaching_hours, 12.0);
        assert_eq!(input.homeroom_status, HomeroomStatus::Assistant);
        assert_eq!(input.life_guidance, LifeGuidanceAnswer::NonHomeroomYes);
        assert!(output.contains("Invalid: must be non-negative"));
        assert!(output.contains("Invalid: must be a non-negative number"));
        assert!(output.contains("Invalid: enter a number from 1 to 3"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run_script(&["18"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }
}
