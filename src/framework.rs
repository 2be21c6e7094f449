use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DialecticalParameters;
use crate::error::{require_text, Result};
use crate::models::{AnalysisHistory, AnalysisRecord, Context, Perspective};
use crate::scoring::{CategorizationScorer, Categorized};

const KEY_INSIGHTS: [&str; 5] = [
    "Multiple perspectives reveal hidden assumptions in the original thesis",
    "Contradictions point to areas requiring deeper investigation",
    "Synthesis enables action despite complexity and uncertainty",
    "Dialectical thinking enhances cognitive flexibility and creativity",
    "Co-thinking with AI augments rather than replaces human reasoning",
];

/// AI-ethics analysis: the base record plus its antitheses grouped by concern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicsAnalysis {
    pub record: AnalysisRecord,
    pub challenges: Categorized,
}

pub struct DialecticalFramework {
    parameters: DialecticalParameters,
    scorer: CategorizationScorer,
}

impl DialecticalFramework {
    pub fn new() -> Self {
        Self {
            parameters: DialecticalParameters::default(),
            scorer: CategorizationScorer::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: DialecticalParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn parameters(&self) -> &DialecticalParameters {
        &self.parameters
    }

    /// Run a full thesis/antithesis/synthesis pass and append it to `history`.
    pub fn analyze(
        &self,
        thesis: &str,
        context: Context,
        history: &mut AnalysisHistory,
    ) -> Result<AnalysisRecord> {
        require_text("thesis", thesis)?;
        self.parameters.validate()?;
        info!("Analyzing thesis in {} context", context);

        let antitheses = self.generate_antitheses(thesis);
        let transformed_perspectives = if self.parameters.enable_meta_cognition {
            self.apply_lambda_transformations(thesis, &antitheses)
        } else {
            Vec::new()
        };
        let synthesis = self.generate_synthesis(thesis);

        let confidence_score = self.scorer.confidence_score(&antitheses, &synthesis);
        let complexity_level = self.scorer.complexity_label(thesis, &antitheses);
        debug!(
            "confidence={:.2} complexity={} antitheses={}",
            confidence_score,
            complexity_level,
            antitheses.len()
        );

        let record = AnalysisRecord {
            thesis: thesis.to_string(),
            context,
            antitheses,
            transformed_perspectives,
            synthesis,
            key_insights: KEY_INSIGHTS.iter().map(|s| s.to_string()).collect(),
            confidence_score,
            complexity_level,
        };

        history.record(&record);
        Ok(record)
    }

    /// Analyze in the AI-ethics context and bucket the antitheses by concern.
    pub fn analyze_ai_ethics(
        &self,
        scenario: &str,
        history: &mut AnalysisHistory,
    ) -> Result<EthicsAnalysis> {
        let record = self.analyze(scenario, Context::AiEthics, history)?;
        let challenges = self.scorer.categorize(&record.antitheses);
        debug!("Ethics challenges span {} categories", challenges.len());

        Ok(EthicsAnalysis { record, challenges })
    }

    fn generate_antitheses(&self, thesis: &str) -> Vec<String> {
        Perspective::ALL
            .iter()
            .take(self.parameters.perspective_count)
            .map(|p| p.antithesis(thesis))
            .collect()
    }

    fn apply_lambda_transformations(&self, thesis: &str, antitheses: &[String]) -> Vec<String> {
        antitheses
            .iter()
            .enumerate()
            .map(|(i, antithesis)| {
                format!(
                    "λ-transformed perspective {}: Superposition of '{}' and '{}' reveals emergent cognitive possibilities beyond binary opposition",
                    i + 1,
                    thesis,
                    antithesis
                )
            })
            .collect()
    }

    fn generate_synthesis(&self, thesis: &str) -> String {
        format!(
            "Dialectical synthesis of '{}': Through systematic integration of \
             multiple contradictory perspectives and λ-parameter transformations, \
             a higher-order understanding emerges that transcends binary opposition. \
             This synthesis preserves the valid insights from each perspective while \
             resolving contradictions through emergent cognitive evolution.",
            thesis
        )
    }
}

impl Default for DialecticalFramework {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialecticsError;
    use crate::models::ComplexityLevel;
    use crate::scoring::Category;

    #[test]
    fn test_analyze_basic() {
        let framework = DialecticalFramework::new();
        let mut history = AnalysisHistory::new();

        let record = framework
            .analyze("Implementing AI in educational assessment", Context::General, &mut history)
            .unwrap();

        assert_eq!(record.antitheses.len(), 5);
        assert_eq!(record.transformed_perspectives.len(), 5);
        assert_eq!(record.key_insights.len(), 5);
        assert!(record.antitheses[0].starts_with("The logical opposite of 'Implementing AI"));
        assert!(record.transformed_perspectives[2].starts_with("λ-transformed perspective 3:"));
        assert!(record.synthesis.starts_with("Dialectical synthesis of 'Implementing AI in educational assessment':"));
        assert!((record.confidence_score - 0.95).abs() < 1e-9);
        // 5 antitheses + 5 words
        assert_eq!(record.complexity_level, ComplexityLevel::Low);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().record, record);
    }

    #[test]
    fn test_blank_thesis_rejected() {
        let framework = DialecticalFramework::new();
        let mut history = AnalysisHistory::new();

        let err = framework.analyze("  ", Context::General, &mut history).unwrap_err();
        assert!(matches!(err, DialecticsError::InvalidInput(_)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_parameters_shape_output() {
        let framework = DialecticalFramework::new().with_parameters(DialecticalParameters {
            perspective_count: 2,
            enable_meta_cognition: false,
        });
        assert_eq!(framework.parameters().perspective_count, 2);
        assert!(!framework.parameters().enable_meta_cognition);
        let mut history = AnalysisHistory::new();

        let record = framework.analyze("Four day week", Context::Corporate, &mut history).unwrap();
        assert_eq!(record.antitheses.len(), 2);
        assert!(record.antitheses[1].starts_with("Practical implementation"));
        assert!(record.transformed_perspectives.is_empty());
        // 0.6 + 0.1 + 0.15
        assert!((record.confidence_score - 0.85).abs() < 1e-9);
        assert_eq!(record.context, Context::Corporate);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let framework = DialecticalFramework::new().with_parameters(DialecticalParameters {
            perspective_count: 0,
            enable_meta_cognition: true,
        });
        let mut history = AnalysisHistory::new();
        assert!(framework.analyze("Anything", Context::General, &mut history).is_err());
    }

    #[test]
    fn test_history_accumulates() {
        let framework = DialecticalFramework::new();
        let mut history = AnalysisHistory::new();

        framework.analyze("First", Context::General, &mut history).unwrap();
        framework.analyze("Second", Context::Healthcare, &mut history).unwrap();
        framework.analyze_ai_ethics("Third", &mut history).unwrap();

        let contexts: Vec<_> = history.entries().iter().map(|e| e.context).collect();
        assert_eq!(contexts, vec![Context::General, Context::Healthcare, Context::AiEthics]);
    }

    #[test]
    fn test_ethics_neutral_scenario_is_technical() {
        let framework = DialecticalFramework::new();
        let mut history = AnalysisHistory::new();

        let analysis = framework
            .analyze_ai_ethics("Autonomous trading algorithms", &mut history)
            .unwrap();

        assert_eq!(analysis.record.context, Context::AiEthics);
        assert_eq!(analysis.challenges.categories(), vec![Category::PerformanceTechnical]);
        assert_eq!(analysis.challenges.get(Category::PerformanceTechnical).unwrap().len(), 5);
    }

    #[test]
    fn test_ethics_scenario_keywords_drive_buckets() {
        let framework = DialecticalFramework::new();
        let mut history = AnalysisHistory::new();

        // Every antithesis quotes the scenario, so the fairness keyword wins everywhere
        let analysis = framework
            .analyze_ai_ethics("Hiring models trained on biased data", &mut history)
            .unwrap();
        assert_eq!(analysis.challenges.categories(), vec![Category::FairnessBias]);

        let analysis = framework
            .analyze_ai_ethics("Black box credit scoring", &mut history)
            .unwrap();
        assert_eq!(
            analysis.challenges.categories(),
            vec![Category::InterpretabilityTrust]
        );
    }
}
