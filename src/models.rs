// Core data types shared by the analyzers and the report layer
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DialecticsError;

/// Setting an analysis is performed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    #[default]
    General,
    AiEthics,
    Educational,
    Corporate,
    Healthcare,
    Government,
    Personal,
}

impl Context {
    pub const ALL: [Context; 7] = [
        Context::General,
        Context::AiEthics,
        Context::Educational,
        Context::Corporate,
        Context::Healthcare,
        Context::Government,
        Context::Personal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Context::General => "general",
            Context::AiEthics => "ai_ethics",
            Context::Educational => "educational",
            Context::Corporate => "corporate",
            Context::Healthcare => "healthcare",
            Context::Government => "government",
            Context::Personal => "personal",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Context {
    type Err = DialecticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Context::General),
            "ai_ethics" | "ai-ethics" => Ok(Context::AiEthics),
            "educational" => Ok(Context::Educational),
            "corporate" => Ok(Context::Corporate),
            "healthcare" => Ok(Context::Healthcare),
            "government" => Ok(Context::Government),
            "personal" => Ok(Context::Personal),
            _ => Err(DialecticsError::UnknownContext(s.to_string())),
        }
    }
}

/// Coarse three-level complexity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    /// Step function over the combined statement/word count.
    pub fn from_factor(factor: usize) -> Self {
        if factor < 20 {
            ComplexityLevel::Low
        } else if factor < 40 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComplexityLevel {
    type Err = DialecticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ComplexityLevel::Low),
            "medium" => Ok(ComplexityLevel::Medium),
            "high" => Ok(ComplexityLevel::High),
            _ => Err(DialecticsError::UnknownLevel(s.to_string())),
        }
    }
}

/// Kinds of contrasting statement generated against a thesis, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    LogicalOpposition,
    PracticalConstraints,
    EthicalConcerns,
    SystemicImplications,
    TemporalContradictions,
}

impl Perspective {
    pub const ALL: [Perspective; 5] = [
        Perspective::LogicalOpposition,
        Perspective::PracticalConstraints,
        Perspective::EthicalConcerns,
        Perspective::SystemicImplications,
        Perspective::TemporalContradictions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Perspective::LogicalOpposition => "Logical Opposition",
            Perspective::PracticalConstraints => "Practical Constraints",
            Perspective::EthicalConcerns => "Ethical Concerns",
            Perspective::SystemicImplications => "Systemic Implications",
            Perspective::TemporalContradictions => "Temporal Contradictions",
        }
    }

    pub fn antithesis(&self, thesis: &str) -> String {
        match self {
            Perspective::LogicalOpposition => format!(
                "The logical opposite of '{}' reveals fundamental contradictions in its basic assumptions",
                thesis
            ),
            Perspective::PracticalConstraints => format!(
                "Practical implementation of '{}' faces significant resource, timeline, and feasibility challenges",
                thesis
            ),
            Perspective::EthicalConcerns => format!(
                "The ethical implications of '{}' may conflict with moral principles and societal values",
                thesis
            ),
            Perspective::SystemicImplications => format!(
                "'{}' may create unintended systemic consequences that contradict its intended benefits",
                thesis
            ),
            Perspective::TemporalContradictions => format!(
                "The temporal aspects of '{}' reveal contradictions between short-term and long-term outcomes",
                thesis
            ),
        }
    }
}

/// Outcome of a single dialectical analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub thesis: String,
    pub context: Context,
    pub antitheses: Vec<String>,
    /// Empty when meta-cognition is disabled
    pub transformed_perspectives: Vec<String>,
    pub synthesis: String,
    pub key_insights: Vec<String>,
    pub confidence_score: f64,
    pub complexity_level: ComplexityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub context: Context,
    pub record: AnalysisRecord,
}

/// Append-only log of past analyses, owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisHistory {
    entries: Vec<HistoryEntry>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &AnalysisRecord) {
        self.entries.push(HistoryEntry {
            timestamp: Utc::now(),
            context: record.context,
            record: record.clone(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn average_confidence(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self
            .entries
            .iter()
            .map(|e| e.record.confidence_score)
            .sum();
        Some(total / self.entries.len() as f64)
    }
}
