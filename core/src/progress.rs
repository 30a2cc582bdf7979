//! Per-grapheme status of the target text, for rendering typed progress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphemeStatus {
    /// Typed and equal to the target grapheme
    Correct,
    /// Typed part of a multi-keystroke grapheme
    Partial,
    /// Typed and different from the target grapheme
    Incorrect,
    /// Not typed yet
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphemeProgress {
    pub grapheme: String,
    pub status: GraphemeStatus,
}

/// Target graphemes annotated with typing status, plus the caret index
/// (the number of typed graphemes).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub graphemes: Vec<GraphemeProgress>,
    pub caret: usize,
}

impl Progress {
    pub fn count(&self, status: GraphemeStatus) -> usize {
        self.graphemes.iter().filter(|g| g.status == status).count()
    }
}

pub fn progress(target: &[String], input: &[String]) -> Progress {
    let graphemes = target
        .iter()
        .enumerate()
        .map(|(i, expected)| {
            let status = match input.get(i) {
                None => GraphemeStatus::Pending,
                Some(typed) if typed == expected => GraphemeStatus::Correct,
                Some(typed) if expected.starts_with(typed.as_str()) => GraphemeStatus::Partial,
                Some(_) => GraphemeStatus::Incorrect,
            };
            GraphemeProgress {
                grapheme: expected.clone(),
                status,
            }
        })
        .collect();

    Progress {
        graphemes,
        caret: input.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_progress_statuses() {
        let p = progress(&g(&["മ", "കാ", "ല", "ത"]), &g(&["മ", "ക"]));
        let statuses: Vec<_> = p.graphemes.iter().map(|g| g.status).collect();
        assert_eq!(
            statuses,
            vec![
                GraphemeStatus::Correct,
                GraphemeStatus::Partial,
                GraphemeStatus::Pending,
                GraphemeStatus::Pending,
            ]
        );
        assert_eq!(p.caret, 2);
    }

    #[test]
    fn test_progress_incorrect() {
        let p = progress(&g(&["മ", "ല"]), &g(&["ത"]));
        assert_eq!(p.graphemes[0].status, GraphemeStatus::Incorrect);
        assert_eq!(p.count(GraphemeStatus::Pending), 1);
    }

    #[test]
    fn test_progress_empty() {
        let p = progress(&[], &[]);
        assert!(p.graphemes.is_empty());
        assert_eq!(p.caret, 0);
    }
}
