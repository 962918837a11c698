/// One row of a step table: values at or above `min` score `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub min: f64,
    pub score: f64,
}

/// Threshold lookup table. Steps are sorted highest `min` first and the first
/// step whose threshold is met wins. Values below every step get `floor`.
#[derive(Debug, Clone, Copy)]
pub struct StepTable {
    steps: &'static [Step],
    floor: f64,
}

/// Which row of a table produced a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMatch {
    Step(Step),
    Floor(f64),
}

impl StepMatch {
    pub fn score(&self) -> f64 {
        match self {
            StepMatch::Step(step) => step.score,
            StepMatch::Floor(score) => *score,
        }
    }

    /// Short description for breakdown output, e.g. ">=17.5 -> 29.5"
    pub fn describe(&self) -> String {
        match self {
            StepMatch::Step(step) => format!(">={} -> {:.1}", step.min, step.score),
            StepMatch::Floor(score) => format!("below all steps -> floor {:.1}", score),
        }
    }
}

impl StepTable {
    pub const fn new(steps: &'static [Step], floor: f64) -> Self {
        Self { steps, floor }
    }

    /// Find the matching row. Boundaries are inclusive-low; NaN falls to the floor.
    pub fn matched(&self, value: f64) -> StepMatch {
        self.steps
            .iter()
            .find(|step| value >= step.min)
            .map(|step| StepMatch::Step(*step))
            .unwrap_or(StepMatch::Floor(self.floor))
    }

    pub fn lookup(&self, value: f64) -> f64 {
        self.matched(value).score()
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Highest score the table can produce
    pub fn max_score(&self) -> f64 {
        self.steps
            .iter()
            .map(|step| step.score)
            .fold(self.floor, f64::max)
    }
}

const fn step(min: f64, score: f64) -> Step {
    Step { min, score }
}

/// Weighted weekly teaching hours to the 30-point teaching score.
/// Every half hour below 18 costs half a point, down to 10.5 hours.
pub const TEACHING_HOURS_TABLE: StepTable = StepTable::new(
    &[
        step(18.0, 30.0),
        step(17.5, 29.5),
        step(17.0, 29.0),
        step(16.5, 28.5),
        step(16.0, 28.0),
        step(15.5, 27.5),
        step(15.0, 27.0),
        step(14.5, 26.5),
        step(14.0, 26.0),
        step(13.5, 25.5),
        step(13.0, 25.0),
        step(12.5, 24.5),
        step(12.0, 24.0),
        step(11.5, 23.5),
        step(11.0, 23.0),
        step(10.5, 22.5),
    ],
    22.0,
);

/// Completed training hours to the 10-point professional-development score.
/// Step sizes are uneven and must not be interpolated.
pub const TRAINING_HOURS_TABLE: StepTable = StepTable::new(
    &[
        step(60.0, 10.0),
        step(45.0, 9.0),
        step(30.0, 8.0),
        step(15.0, 6.0),
        step(1.0, 5.0),
    ],
    0.0,
);
