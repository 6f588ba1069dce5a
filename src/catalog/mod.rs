//! Question catalog — the immutable view over the externally owned bank
//!
//! The engine only ever reads the catalog. Mutation (CRUD, imports, AI
//! generation) happens in the owning application before the catalog is
//! handed over.

mod question;

pub use question::*;

use ahash::AHashMap;

use crate::error::Result;

/// Read-only question catalog with category taxonomy
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Wrap an already validated set of questions
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Hydrate a catalog from its JSON wire form, validating every record
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        for question in &questions {
            question.validate()?;
        }
        Ok(Self { questions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Look up a question by id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of questions passing `filter`
    pub fn count_matching(&self, filter: &CategoryFilter) -> usize {
        self.questions.iter().filter(|q| filter.matches(q)).count()
    }

    /// Distinct category names, sorted, with the `General` default applied
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .category_counts()
            .into_keys()
            .collect();
        names.sort();
        names
    }

    /// Per-category question tallies (start-screen data)
    pub fn category_counts(&self) -> AHashMap<String, usize> {
        let mut counts = AHashMap::new();
        for question in &self.questions {
            *counts.entry(question.category_name().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Question>> for QuestionCatalog {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
