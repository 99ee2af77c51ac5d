//! The goal variant set: five kinds of trackable goals sharing one contract.
//!
//! Every goal has an immutable name, description, and points-per-event; each
//! kind adds its own mutable progress state. Recording an event mutates that
//! state and returns the points awarded (which can be zero or negative) for
//! the ledger to accumulate. No variant fails out of `record_event` — bad
//! input degrades to a zero-point no-op.

/// A trackable unit of progress with its own scoring and completion rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    name: String,
    description: String,
    points: i64,
    kind: GoalKind,
}

/// Per-variant mutable state. The set is closed: the five kinds are fixed,
/// so a tagged enum beats an open trait here.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalKind {
    /// Done after one recording.
    Simple { completed: bool },

    /// Never completes; awards points on every recording.
    Eternal,

    /// Completes after `target` recordings, with a one-time bonus on the
    /// recording that reaches the target.
    Checklist { current: u32, target: u32, bonus: i64 },

    /// Never completes; every recording costs points. Models a habit the
    /// user wants to log and discourage.
    Negative,

    /// Accumulates caller-supplied units toward a target. Points scale
    /// with the units recorded.
    Progress { current_units: f64, target_units: f64 },
}

/// Bonus awarded when a progress goal's running total reaches its target.
const PROGRESS_BONUS: i64 = 500;

impl Goal {
    /// A one-shot goal worth `points` the first time it is recorded.
    pub fn simple(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::from_parts(name, description, points, GoalKind::Simple { completed: false })
    }

    /// A repeatable goal worth `points` on every recording.
    pub fn eternal(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::from_parts(name, description, points, GoalKind::Eternal)
    }

    /// A goal requiring `target` recordings, each worth `points`, with
    /// `bonus` added on the recording that completes it.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        target: u32,
        bonus: i64,
    ) -> Self {
        Self::from_parts(
            name,
            description,
            points,
            GoalKind::Checklist { current: 0, target, bonus },
        )
    }

    /// A penalty goal: recording it always subtracts `points`.
    pub fn negative(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::from_parts(name, description, points, GoalKind::Negative)
    }

    /// A goal accumulating units toward `target_units`, awarding `points`
    /// per unit recorded.
    pub fn progress(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        target_units: f64,
    ) -> Self {
        Self::from_parts(
            name,
            description,
            points,
            GoalKind::Progress { current_units: 0.0, target_units },
        )
    }

    /// Construct a goal with explicit kind state. Used by the codec to
    /// restore saved progress.
    pub(crate) fn from_parts(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        kind: GoalKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub(crate) fn kind(&self) -> &GoalKind {
        &self.kind
    }

    /// Record one event against this goal, returning the points awarded.
    ///
    /// `units` only matters for progress goals, where it is the delta to
    /// accumulate; other kinds ignore it. A missing or non-finite delta on
    /// a progress goal awards nothing and changes nothing.
    pub fn record_event(&mut self, units: Option<f64>) -> i64 {
        match &mut self.kind {
            GoalKind::Simple { completed } => {
                if *completed {
                    0
                } else {
                    *completed = true;
                    self.points
                }
            }
            GoalKind::Eternal => self.points,
            GoalKind::Checklist { current, target, bonus } => {
                // Completion is checked before incrementing, so a finished
                // checklist never awards again.
                if *current >= *target {
                    return 0;
                }
                *current += 1;
                let mut total = self.points;
                if *current >= *target {
                    total += *bonus;
                }
                total
            }
            GoalKind::Negative => -self.points.abs(),
            GoalKind::Progress { current_units, target_units } => {
                let Some(units) = units.filter(|u| u.is_finite()) else {
                    return 0;
                };
                *current_units += units;
                let mut award = (units * self.points as f64).round() as i64;
                // The bonus re-fires on every recording at or past the
                // target, matching the score history of existing save files.
                if *current_units >= *target_units {
                    award += PROGRESS_BONUS;
                }
                award
            }
        }
    }

    /// Whether this goal's completion condition holds. Eternal and negative
    /// goals never complete.
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            GoalKind::Simple { completed } => *completed,
            GoalKind::Eternal | GoalKind::Negative => false,
            GoalKind::Checklist { current, target, .. } => current >= target,
            GoalKind::Progress { current_units, target_units } => current_units >= target_units,
        }
    }

    /// One-line human-readable summary: completion marker, name,
    /// description, and the variant's progress.
    pub fn details(&self) -> String {
        let check = if self.is_complete() { 'X' } else { ' ' };
        match &self.kind {
            GoalKind::Simple { .. } => format!(
                "[{check}] {} - {} (one-time rewards: {} pts)",
                self.name, self.description, self.points
            ),
            GoalKind::Eternal => format!(
                "[∞] {} - {} (per event: {} pts)",
                self.name, self.description, self.points
            ),
            GoalKind::Checklist { current, target, .. } => format!(
                "[{check}] {} - {} (Completed {current}/{target}) +{}/event",
                self.name, self.description, self.points
            ),
            GoalKind::Negative => format!(
                "[!] {} - {} (negative: {} pts when recorded)",
                self.name, self.description, self.points
            ),
            GoalKind::Progress { current_units, target_units } => format!(
                "[{check}] {} - {} (Progress {current_units}/{target_units})",
                self.name, self.description
            ),
        }
    }
}
