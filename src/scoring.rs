//! Keyword-based categorization of generated statements, plus the two
//! summary metrics derived from an analysis: confidence and complexity.
//!
//! Classification is exclusive. Each statement is lower-cased and checked
//! against [`CATEGORY_RULES`] in order; the first rule with a matching
//! keyword substring decides the bucket, and anything unmatched falls back to
//! [`Category::PerformanceTechnical`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DialecticsError;
use crate::models::ComplexityLevel;

const BASE_CONFIDENCE: f64 = 0.6;
const PER_ANTITHESIS: f64 = 0.05;
const MAX_ANTITHESES_FACTOR: f64 = 0.2;
const LONG_SYNTHESIS_CHARS: usize = 100;
const LONG_SYNTHESIS_FACTOR: f64 = 0.15;
const SHORT_SYNTHESIS_FACTOR: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const MIN_CONFIDENCE: f64 = BASE_CONFIDENCE;

/// Topic buckets for AI-ethics challenges. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Performance & Technical")]
    PerformanceTechnical,
    #[serde(rename = "Fairness & Bias")]
    FairnessBias,
    #[serde(rename = "Interpretability & Trust")]
    InterpretabilityTrust,
    #[serde(rename = "Societal Impact")]
    SocietalImpact,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::PerformanceTechnical => "Performance & Technical",
            Category::FairnessBias => "Fairness & Bias",
            Category::InterpretabilityTrust => "Interpretability & Trust",
            Category::SocietalImpact => "Societal Impact",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Evaluated top to bottom; the first rule with a hit wins.
pub const CATEGORY_RULES: [CategoryRule; 3] = [
    CategoryRule {
        category: Category::FairnessBias,
        keywords: &["bias", "fairness", "discrimination", "equality"],
    },
    CategoryRule {
        category: Category::InterpretabilityTrust,
        keywords: &["black box", "explainable", "interpretable", "transparent"],
    },
    CategoryRule {
        category: Category::SocietalImpact,
        keywords: &["social", "society", "human", "employment", "democracy"],
    },
];

pub const FALLBACK_CATEGORY: Category = Category::PerformanceTechnical;

/// Statements grouped by category. Only non-empty buckets are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Category, Vec<String>>",
    into = "BTreeMap<Category, Vec<String>>"
)]
pub struct Categorized {
    buckets: BTreeMap<Category, Vec<String>>,
}

impl TryFrom<BTreeMap<Category, Vec<String>>> for Categorized {
    type Error = DialecticsError;

    fn try_from(buckets: BTreeMap<Category, Vec<String>>) -> Result<Self, Self::Error> {
        if let Some((category, _)) = buckets.iter().find(|(_, s)| s.is_empty()) {
            return Err(DialecticsError::invalid_input(format!(
                "empty bucket for category {}",
                category
            )));
        }
        Ok(Self { buckets })
    }
}

impl From<Categorized> for BTreeMap<Category, Vec<String>> {
    fn from(categorized: Categorized) -> Self {
        categorized.buckets
    }
}

impl Categorized {
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.buckets.get(&category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.buckets.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.buckets.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push(&mut self, category: Category, statement: String) {
        self.buckets.entry(category).or_default().push(statement);
    }
}

pub struct CategorizationScorer {
    rules: &'static [CategoryRule],
}

impl CategorizationScorer {
    pub fn new() -> Self {
        Self {
            rules: &CATEGORY_RULES,
        }
    }

    pub fn classify(&self, statement: &str) -> Category {
        let lowered = statement.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(*k)))
            .map(|rule| rule.category)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    pub fn categorize<S: AsRef<str>>(&self, statements: &[S]) -> Categorized {
        let mut categorized = Categorized::default();
        for statement in statements {
            let statement = statement.as_ref();
            categorized.push(self.classify(statement), statement.to_string());
        }
        categorized
    }

    /// Richness score in [0.6, 0.95]; grows with the antithesis count and
    /// gets a bonus for a synthesis longer than 100 characters.
    pub fn confidence_score<S: AsRef<str>>(&self, antitheses: &[S], synthesis: &str) -> f64 {
        let antitheses_factor = (antitheses.len() as f64 * PER_ANTITHESIS).min(MAX_ANTITHESES_FACTOR);
        let synthesis_factor = if synthesis.chars().count() > LONG_SYNTHESIS_CHARS {
            LONG_SYNTHESIS_FACTOR
        } else {
            SHORT_SYNTHESIS_FACTOR
        };

        (BASE_CONFIDENCE + antitheses_factor + synthesis_factor).min(MAX_CONFIDENCE)
    }

    pub fn complexity_label<S: AsRef<str>>(&self, thesis: &str, antitheses: &[S]) -> ComplexityLevel {
        let factor = antitheses.len() + thesis.split_whitespace().count();
        ComplexityLevel::from_factor(factor)
    }
}

impl Default for CategorizationScorer {
    fn default() -> Self {
        Self::new()
    }
}
