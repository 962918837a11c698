use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use merit_calc::config::{ColorChoice, OutputFormat};
use merit_calc::output;
use merit_calc::scoring::{self, BonusKind, DutyRole, HomeroomStatus, LifeGuidanceAnswer, ScoreInput};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_ANSWERS: i32 = 1;
const EXIT_OUTPUT: i32 = 2;
const EXIT_INCOMPLETE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

/// Per-field overrides applied on top of the answers file
#[derive(Args, Debug, Default)]
struct AnswerOverrides {
    /// Weekly teaching hours, creative activities excluded
    #[arg(long)]
    teaching_hours: Option<f64>,

    /// Weekly creative-activity hours (counted at half weight)
    #[arg(long)]
    creative_hours: Option<f64>,

    #[arg(long, value_enum)]
    homeroom: Option<HomeroomStatus>,

    #[arg(long)]
    club_homeroom: Option<bool>,

    #[arg(long)]
    department_head: Option<bool>,

    #[arg(long)]
    sports_club: Option<bool>,

    /// First "yes" among the life-guidance questions
    #[arg(long, value_enum)]
    life_guidance: Option<LifeGuidanceAnswer>,

    #[arg(long, value_enum)]
    duty: Option<DutyRole>,

    /// Completed training hours
    #[arg(long)]
    training_hours: Option<f64>,

    /// Bonus item to add (repeatable)
    #[arg(long = "bonus", value_enum)]
    bonus: Vec<BonusKind>,

    /// Bonus item to clear, even if the answers file sets it (repeatable)
    #[arg(long = "no-bonus", value_enum)]
    no_bonus: Vec<BonusKind>,
}

impl AnswerOverrides {
    fn apply(self, input: &mut ScoreInput) {
        if let Some(v) = self.teaching_hours {
            input.actual_teaching_hours = v;
        }
        if let Some(v) = self.creative_hours {
            input.creative_activity_hours = v;
        }
        if let Some(v) = self.homeroom {
            input.homeroom_status = v;
        }
        if let Some(v) = self.club_homeroom {
            input.is_club_homeroom = v;
        }
        if let Some(v) = self.department_head {
            input.is_department_head = v;
        }
        if let Some(v) = self.sports_club {
            input.is_sports_club_homeroom = v;
        }
        if let Some(v) = self.life_guidance {
            input.life_guidance = v;
        }
        if let Some(v) = self.duty {
            input.duty_role = v;
        }
        if let Some(v) = self.training_hours {
            input.training_hours = v;
        }
        input.bonus_flags.extend(self.bonus);
        for kind in self.no_bonus {
            input.bonus_flags.remove(&kind);
        }
    }
}

#[derive(Args, Debug, Default)]
struct CalcArgs {
    #[command(flatten)]
    overrides: AnswerOverrides,

    /// Output format (overrides the answers file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Colorize text output (overrides the answers file)
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Exit with an error when no life-guidance answer is selected
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the score from saved answers and flags (default if no subcommand)
    Calc(CalcArgs),
    /// Answer the questions interactively and optionally save them
    Init {
        /// Where to offer saving the answers (defaults to --config or ~/.config/merit-calc/answers.yaml)
        path: Option<PathBuf>,
    },
    /// Print the scoring tables and bonus weights
    Tables,
}

#[derive(Parser, Debug)]
#[command(name = "merit-calc")]
#[command(about = "Multi-faceted teacher evaluation score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and per-category details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to answers file (defaults to ~/.config/merit-calc/answers.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Score the effective answers, writing the report to `out` and diagnostics to `err`.
/// Returns the process exit code.
fn run_calc<O: Write, E: Write>(
    config_path: Option<PathBuf>,
    args: CalcArgs,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let config = match merit_calc::config::load_config_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            writeln!(err, "Config error: {:#}", e)?;
            return Ok(EXIT_CONFIG);
        }
    };

    let mut answers = config.answers;
    args.overrides.apply(&mut answers);
    tracing::debug!(?answers, "effective answers");

    if let Err(errors) = scoring::validate_input(&answers) {
        writeln!(err, "Invalid answers:")?;
        for error in errors {
            writeln!(err, "  - {}", error)?;
        }
        return Ok(EXIT_INVALID_ANSWERS);
    }

    for warning in scoring::consistency_warnings(&answers) {
        tracing::warn!("{}", warning);
    }

    let breakdown = scoring::compute_breakdown(&answers);
    tracing::debug!(
        subtotal = breakdown.subtotal,
        bonus = breakdown.bonus_score,
        final_total = breakdown.final_total,
        "score computed"
    );

    let format = args.format.unwrap_or(config.output.format);
    let color = args.color.unwrap_or(config.output.color);

    match format {
        OutputFormat::Text => {
            let use_colors = output::should_use_colors(color);
            writeln!(out, "{}", output::format_breakdown(&breakdown, use_colors))?;
            if verbose {
                writeln!(out)?;
                writeln!(out, "{}", output::format_factors(&breakdown))?;
            }
        }
        OutputFormat::Json => match output::format_json(&breakdown) {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(e) => {
                writeln!(err, "Failed to serialize result: {}", e)?;
                return Ok(EXIT_OUTPUT);
            }
        },
        OutputFormat::Tsv => writeln!(out, "{}", output::format_tsv(&breakdown))?,
    }

    if breakdown.incomplete && args.strict {
        writeln!(
            err,
            "Life guidance is incomplete: answer one of the life-guidance questions."
        )?;
        return Ok(EXIT_INCOMPLETE);
    }

    Ok(EXIT_SUCCESS)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = merit_calc::telemetry::init(cli.verbose) {
        eprintln!("Logging setup failed: {}", e);
    }

    let config_path = cli.config.map(PathBuf::from);
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Calc(CalcArgs::default()));

    let code = match command {
        Commands::Calc(args) => {
            let mut stdout = io::stdout().lock();
            let mut stderr = io::stderr().lock();
            match run_calc(config_path, args, cli.verbose, &mut stdout, &mut stderr) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Failed to write output: {}", e);
                    EXIT_OUTPUT
                }
            }
        }
        Commands::Init { path } => {
            let use_colors = output::should_use_colors(ColorChoice::Auto);
            match merit_calc::config::init::run_init_wizard(path.or(config_path), use_colors) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Wizard error: {:#}", e);
                    EXIT_CONFIG
                }
            }
        }
        Commands::Tables => {
            println!("{}", output::format_tables());
            EXIT_SUCCESS
        }
    };

    std::process::exit(code);
}
