//! The quest ledger: the owning collection of goals plus cumulative score.
//!
//! Goals are kept in insertion order, which is also display and save order.
//! Level and title are derived from the score on demand — nothing cached.
//! Save and load move the whole ledger through a text blob: the score on
//! the first line, then one encoded goal per line.

use crate::codec;
use crate::model::Goal;

/// Errors the ledger reports to its caller.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("no goal at position {0}")]
    GoalOutOfRange(usize),
}

/// What a successful event recording awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// Points awarded by this recording (zero or negative included).
    pub awarded: i64,
    /// The score after applying the award.
    pub total: i64,
}

/// What a load restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Goals decoded successfully; malformed lines are dropped silently.
    pub goals_loaded: usize,
    /// The restored score.
    pub score: i64,
}

/// The goal collection and its cumulative score.
#[derive(Debug, Default)]
pub struct Ledger {
    goals: Vec<Goal>,
    score: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal. Goals are addressed by position and never deleted
    /// individually; only a load replaces the collection.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Numbered one-line summaries in insertion order. An empty ledger
    /// yields an explicit placeholder line instead of an empty list.
    pub fn list_goals(&self) -> Vec<String> {
        if self.goals.is_empty() {
            return vec!["(No goals yet)".to_string()];
        }
        self.goals
            .iter()
            .enumerate()
            .map(|(i, goal)| format!("{}. {}", i + 1, goal.details()))
            .collect()
    }

    /// Record an event against the goal at `index` (0-based), folding the
    /// award into the score.
    ///
    /// `units` is the delta for progress goals; other kinds ignore it.
    /// An out-of-range index fails without touching any state.
    pub fn record_event(
        &mut self,
        index: usize,
        units: Option<f64>,
    ) -> Result<EventOutcome, LedgerError> {
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(LedgerError::GoalOutOfRange(index))?;
        let awarded = goal.record_event(units);
        self.score += awarded;
        Ok(EventOutcome { awarded, total: self.score })
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Current level: one level per 1000 points, never below 1. The floor
    /// rounds toward negative infinity, so a negative score still clamps
    /// cleanly to level 1.
    pub fn level(&self) -> i64 {
        (self.score.div_euclid(1000) + 1).max(1)
    }

    /// Display title for the current level.
    pub fn title(&self) -> &'static str {
        match self.level() {
            ..3 => "Apprentice",
            3..6 => "Adept",
            6..10 => "Champion",
            _ => "Legendary Ninja Unicorn",
        }
    }

    /// Serialize the whole ledger: score first, then one line per goal.
    pub fn save(&self) -> String {
        let mut blob = self.score.to_string();
        blob.push('\n');
        for goal in &self.goals {
            blob.push_str(&codec::encode(goal));
            blob.push('\n');
        }
        blob
    }

    /// Replace the ledger's entire contents from a saved blob.
    ///
    /// The first line becomes the score (0 when unparseable or absent);
    /// every later line that decodes becomes a goal, in file order.
    /// Malformed lines are skipped without complaint, visible only as a
    /// reduced count in the summary.
    pub fn load(&mut self, blob: &str) -> LoadSummary {
        self.goals.clear();
        let mut lines = blob.lines();
        self.score = lines.next().and_then(|l| l.trim().parse().ok()).unwrap_or(0);
        for line in lines {
            if let Some(goal) = codec::decode(line) {
                self.goals.push(goal);
            }
        }
        LoadSummary { goals_loaded: self.goals.len(), score: self.score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_an_empty_ledger_says_so() {
        let ledger = Ledger::new();
        assert!(ledger.goals().is_empty());
        assert_eq!(ledger.list_goals(), vec!["(No goals yet)".to_string()]);
    }

    #[test]
    fn goals_list_in_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::simple("Read", "Finish the book", 100));
        ledger.add_goal(Goal::eternal("Scriptures", "Daily reading", 50));

        let lines = ledger.list_goals();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1. [ ] Read - Finish the book (one-time rewards: 100 pts)");
        assert_eq!(lines[1], "2. [∞] Scriptures - Daily reading (per event: 50 pts)");
    }

    #[test]
    fn checklist_scenario_accumulates_five_five_fiftyfive() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::checklist("Temple", "Attend weekly", 5, 3, 50));

        assert_eq!(ledger.record_event(0, None).unwrap(), EventOutcome { awarded: 5, total: 5 });
        assert_eq!(ledger.record_event(0, None).unwrap(), EventOutcome { awarded: 5, total: 10 });
        assert_eq!(ledger.record_event(0, None).unwrap(), EventOutcome { awarded: 55, total: 65 });
        assert_eq!(ledger.score(), 65);
    }

    #[test]
    fn negative_goals_can_drive_the_score_below_zero() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::negative("Junk food", "Skip the candy", 25));

        let outcome = ledger.record_event(0, None).unwrap();
        assert_eq!(outcome.awarded, -25);
        assert_eq!(ledger.score(), -25);
        assert_eq!(ledger.level(), 1);
    }

    #[test]
    fn out_of_range_index_fails_and_changes_nothing() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::simple("Read", "Finish the book", 100));

        let err = ledger.record_event(5, None).unwrap_err();
        assert!(matches!(err, LedgerError::GoalOutOfRange(5)));
        assert_eq!(ledger.score(), 0);
        assert!(!ledger.goals()[0].is_complete());
    }

    #[test]
    fn progress_units_flow_through_to_the_goal() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::progress("Run", "Weekly km", 10, 20.0));

        assert_eq!(ledger.record_event(0, Some(3.0)).unwrap().awarded, 30);
        // No units supplied: the recording is a zero-point no-op.
        assert_eq!(ledger.record_event(0, None).unwrap().awarded, 0);
        assert_eq!(ledger.score(), 30);
    }

    #[test]
    fn level_thresholds() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.level(), 1);

        ledger.add_goal(Goal::eternal("Grind", "Points", 999));
        ledger.record_event(0, None).unwrap();
        assert_eq!(ledger.score(), 999);
        assert_eq!(ledger.level(), 1);

        ledger.load("1000\n");
        assert_eq!(ledger.level(), 2);
    }

    #[test]
    fn level_floors_toward_negative_infinity_then_clamps() {
        let mut ledger = Ledger::new();
        // -1500 / 1000 floors to -2, giving raw level -1, clamped to 1.
        ledger.load("-1500\n");
        assert_eq!(ledger.score(), -1500);
        assert_eq!(ledger.level(), 1);
        assert_eq!(ledger.title(), "Apprentice");
    }

    #[test]
    fn titles_step_with_level() {
        let mut ledger = Ledger::new();
        let cases = [
            (0, "Apprentice"),
            (1999, "Apprentice"),
            (2000, "Adept"),
            (4999, "Adept"),
            (5000, "Champion"),
            (8999, "Champion"),
            (9000, "Legendary Ninja Unicorn"),
        ];
        for (score, title) in cases {
            ledger.load(&format!("{score}\n"));
            assert_eq!(ledger.title(), title, "score {score}");
        }
    }

    #[test]
    fn save_then_load_restores_score_and_goals() {
        let blob = "120\n\
                    Simple|Read|Finish the book|100|False\n\
                    Checklist|Temple|Attend weekly|5|0|3|50\n";
        let mut ledger = Ledger::new();
        ledger.load(blob);
        assert_eq!(ledger.score(), 120);

        // Saving reproduces the blob byte for byte.
        assert_eq!(ledger.save(), blob);

        let mut fresh = Ledger::new();
        let summary = fresh.load(&ledger.save());
        assert_eq!(summary, LoadSummary { goals_loaded: 2, score: 120 });
        assert_eq!(fresh.list_goals(), ledger.list_goals());
    }

    #[test]
    fn load_replaces_prior_contents_entirely() {
        let mut ledger = Ledger::new();
        ledger.add_goal(Goal::simple("Old", "Replaced on load", 10));
        ledger.add_goal(Goal::simple("Older", "Also replaced", 10));

        let summary = ledger.load("40\nEternal|New|Fresh start|5\n");
        assert_eq!(summary.goals_loaded, 1);
        assert_eq!(ledger.score(), 40);
        assert_eq!(ledger.goals().len(), 1);
        assert_eq!(ledger.goals()[0].name(), "New");
    }

    #[test]
    fn load_skips_malformed_lines_silently() {
        let mut ledger = Ledger::new();
        let blob = "75\n\
                    Simple|Read|Finish the book|100|False\n\
                    Mystery|What|Is this|10\n";

        let summary = ledger.load(blob);
        assert_eq!(summary, LoadSummary { goals_loaded: 1, score: 75 });
        assert_eq!(ledger.goals()[0].name(), "Read");
    }

    #[test]
    fn load_defaults_score_to_zero_when_unparseable() {
        let mut ledger = Ledger::new();
        let summary = ledger.load("not a number\nEternal|Scriptures|Daily reading|50\n");
        assert_eq!(summary, LoadSummary { goals_loaded: 1, score: 0 });

        // An empty blob is a valid, empty ledger.
        let summary = ledger.load("");
        assert_eq!(summary, LoadSummary { goals_loaded: 0, score: 0 });
        assert!(ledger.goals().is_empty());
    }
}
