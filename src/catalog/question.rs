//! Question data model

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

/// Category assigned to questions that carry none
pub const DEFAULT_CATEGORY: &str = "General";

/// Sentinel category name meaning "no filter"
pub const ALL_CATEGORIES: &str = "All";

/// Question difficulty tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A single multiple-choice question
///
/// Owned by the question bank; the session borrows (clones) it for the
/// duration of one attempt and never writes it back. Wire field names stay
/// camelCase to match the catalog JSON produced by the admin surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique, stable identity
    pub id: String,
    /// Question text
    pub text: String,
    /// Exactly [`OPTION_COUNT`] answer options, in display order
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_option_index: usize,
    /// Scripture citation, e.g. "Jonah 1:17"
    pub reference: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Free-form category; `None`/empty means [`DEFAULT_CATEGORY`]
    #[serde(default)]
    pub category: Option<String>,
}

impl Question {
    /// Effective category name, with the `General` fallback applied
    #[inline]
    pub fn category_name(&self) -> &str {
        match self.category.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Text of the correct option
    #[inline]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_option_index]
    }

    /// Whether `index` names the correct option
    #[inline]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option_index
    }

    /// Validate the structural invariants before a question enters a catalog
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(QuizError::InvalidQuestion("blank id".to_string()));
        }
        if self.text.trim().is_empty() {
            return Err(QuizError::InvalidQuestion(format!("{}: blank text", self.id)));
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::InvalidQuestion(format!(
                "{}: expected {} options, got {}",
                self.id,
                OPTION_COUNT,
                self.options.len()
            )));
        }
        if self.correct_option_index >= self.options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "{}: correct option index {} out of range",
                self.id, self.correct_option_index
            )));
        }
        Ok(())
    }
}

/// Category filter for sampling, with the `All` sentinel meaning unfiltered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a raw filter string; [`ALL_CATEGORIES`] selects everything
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(raw.to_string())
        }
    }

    /// Whether `question` passes this filter
    #[inline]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => question.category_name() == name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        CategoryFilter::parse(raw)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(id: &str, category: Option<&str>) -> Question {
        Question {
            id: id.to_string(),
            text: "Who was swallowed by a great fish?".to_string(),
            options: vec![
                "Jonah".to_string(),
                "Peter".to_string(),
                "Paul".to_string(),
                "Noah".to_string(),
            ],
            correct_option_index: 0,
            reference: "Jonah 1:17".to_string(),
            difficulty: Difficulty::Easy,
            category: category.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_category_name_fallback() {
        assert_eq!(sample_question("q1", None).category_name(), "General");
        assert_eq!(sample_question("q1", Some("")).category_name(), "General");
        assert_eq!(
            sample_question("q1", Some("Old Testament")).category_name(),
            "Old Testament"
        );
    }

    #[test]
    fn test_filter_matching() {
        let q = sample_question("q1", Some("Gospels"));
        assert!(CategoryFilter::All.matches(&q));
        assert!(CategoryFilter::parse("Gospels").matches(&q));
        assert!(!CategoryFilter::parse("Prophecy").matches(&q));

        let uncategorized = sample_question("q2", None);
        assert!(CategoryFilter::parse("General").matches(&uncategorized));
    }

    #[test]
    fn test_all_sentinel_parses_to_all() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("All").to_string(), "All");
    }

    #[test]
    fn test_validate_rejects_bad_questions() {
        let mut q = sample_question("q1", None);
        q.options.pop();
        assert!(q.validate().is_err());

        let mut q = sample_question("q1", None);
        q.correct_option_index = 4;
        assert!(q.validate().is_err());

        let mut q = sample_question("q1", None);
        q.id = "  ".to_string();
        assert!(q.validate().is_err());

        assert!(sample_question("q1", None).validate().is_ok());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let q = sample_question("q1", Some("Old Testament"));
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"correctOptionIndex\":0"));

        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
