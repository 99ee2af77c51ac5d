//! Text codec for goals: one pipe-delimited line per goal.
//!
//! The leading field is a discriminator naming the variant; the rest are
//! positional per variant:
//!
//! ```text
//! Simple|name|description|points|completed
//! Eternal|name|description|points
//! Checklist|name|description|points|current|target|bonus
//! Negative|name|description|points
//! Progress|name|description|points|current_units|target_units
//! ```
//!
//! Literal `|` inside name or description is escaped as `\|`; that is the
//! only escape in the format. Newlines (and a field ending in a lone
//! backslash) are unsupported. Decoding never panics: a line that cannot be
//! fully parsed produces no goal at all.

use crate::model::{Goal, GoalKind};

/// Escape a field for embedding in a line: `|` becomes `\|`.
pub fn escape(field: &str) -> String {
    field.replace('|', "\\|")
}

/// Reverse [`escape`]: each `\|` pair collapses back to `|`. Backslashes
/// not followed by a pipe pass through untouched.
pub fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'|') {
            // Drop the backslash; the pipe is pushed on the next pass.
            continue;
        }
        out.push(c);
    }
    out
}

/// Split a line on unescaped pipes, unescaping each field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                field.push('\\');
                field.push('|');
                chars.next();
            }
            '|' => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields.iter().map(|f| unescape(f)).collect()
}

/// Encode a goal as one line of text, without a trailing newline.
pub fn encode(goal: &Goal) -> String {
    let name = escape(goal.name());
    let description = escape(goal.description());
    let points = goal.points();
    match goal.kind() {
        GoalKind::Simple { completed } => {
            let completed = if *completed { "True" } else { "False" };
            format!("Simple|{name}|{description}|{points}|{completed}")
        }
        GoalKind::Eternal => format!("Eternal|{name}|{description}|{points}"),
        GoalKind::Checklist { current, target, bonus } => {
            format!("Checklist|{name}|{description}|{points}|{current}|{target}|{bonus}")
        }
        GoalKind::Negative => format!("Negative|{name}|{description}|{points}"),
        GoalKind::Progress { current_units, target_units } => {
            format!("Progress|{name}|{description}|{points}|{current_units}|{target_units}")
        }
    }
}

/// Decode one line back into a goal.
///
/// Returns `None` — never a partial goal — when the discriminator is
/// unrecognized, a field is missing, or a numeric/boolean conversion fails.
pub fn decode(line: &str) -> Option<Goal> {
    let fields = split_fields(line);
    let [tag, name, description, points, rest @ ..] = fields.as_slice() else {
        return None;
    };
    let points: i64 = points.parse().ok()?;

    let kind = match (tag.as_str(), rest) {
        ("Simple", [completed]) => GoalKind::Simple { completed: parse_bool(completed)? },
        ("Eternal", []) => GoalKind::Eternal,
        ("Checklist", [current, target, bonus]) => GoalKind::Checklist {
            current: current.parse().ok()?,
            target: target.parse().ok()?,
            bonus: bonus.parse().ok()?,
        },
        ("Negative", []) => GoalKind::Negative,
        ("Progress", [current_units, target_units]) => GoalKind::Progress {
            current_units: current_units.parse().ok()?,
            target_units: target_units.parse().ok()?,
        },
        _ => return None,
    };

    Some(Goal::from_parts(name.clone(), description.clone(), points, kind))
}

/// Booleans persist in `True`/`False` form; anything else is a parse
/// failure.
fn parse_bool(field: &str) -> Option<bool> {
    match field {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}
