// Multi-layer scenario analysis: cognitive, temporal and stakeholder triads
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{require_text, Result};
use crate::models::ComplexityLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triad {
    pub thesis: String,
    pub antithesis: String,
    pub synthesis: String,
}

impl Triad {
    fn new(thesis: String, antithesis: String, synthesis: String) -> Self {
        Self {
            thesis,
            antithesis,
            synthesis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Cognitive,
    Temporal,
    Stakeholder,
}

impl Dimension {
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Cognitive => "cognitive",
            Dimension::Temporal => "temporal",
            Dimension::Stakeholder => "stakeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CognitiveLayer {
    Logical,
    Emotional,
    Ethical,
    Pragmatic,
    Systemic,
}

impl CognitiveLayer {
    pub const ALL: [CognitiveLayer; 5] = [
        CognitiveLayer::Logical,
        CognitiveLayer::Emotional,
        CognitiveLayer::Ethical,
        CognitiveLayer::Pragmatic,
        CognitiveLayer::Systemic,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CognitiveLayer::Logical => "logical",
            CognitiveLayer::Emotional => "emotional",
            CognitiveLayer::Ethical => "ethical",
            CognitiveLayer::Pragmatic => "pragmatic",
            CognitiveLayer::Systemic => "systemic",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CognitiveLayer::Logical => "Logical",
            CognitiveLayer::Emotional => "Emotional",
            CognitiveLayer::Ethical => "Ethical",
            CognitiveLayer::Pragmatic => "Pragmatic",
            CognitiveLayer::Systemic => "Systemic",
        }
    }

    pub fn triad(&self, s: &str) -> Triad {
        match self {
            CognitiveLayer::Logical => Triad::new(
                format!("Logical approach to {} suggests systematic problem-solving", s),
                format!("Pure logic may miss emotional and contextual nuances in {}", s),
                format!("Logic-informed but contextually sensitive approach to {}", s),
            ),
            CognitiveLayer::Emotional => Triad::new(
                format!("Emotional considerations in {} highlight human impact and motivation", s),
                format!("Emotional responses may lead to biased or impulsive decisions in {}", s),
                format!("Emotionally aware but rationally guided decision-making for {}", s),
            ),
            CognitiveLayer::Ethical => Triad::new(
                format!("Ethical framework provides moral guidance for {}", s),
                format!("Rigid ethical rules may conflict with practical necessities in {}", s),
                format!("Principled pragmatism balancing ethics and effectiveness in {}", s),
            ),
            CognitiveLayer::Pragmatic => Triad::new(
                format!("Practical solutions prioritize immediate effectiveness in {}", s),
                format!("Short-term pragmatism may compromise long-term sustainability in {}", s),
                format!("Strategic pragmatism balancing immediate needs and future consequences in {}", s),
            ),
            CognitiveLayer::Systemic => Triad::new(
                format!("Systemic perspective reveals interconnected factors in {}", s),
                format!("Systems thinking may lead to paralysis by analysis in {}", s),
                format!("Systems-informed action with appropriate scope boundaries for {}", s),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalDimension {
    Immediate,
    ShortTerm,
    LongTerm,
    Generational,
}

impl TemporalDimension {
    pub const ALL: [TemporalDimension; 4] = [
        TemporalDimension::Immediate,
        TemporalDimension::ShortTerm,
        TemporalDimension::LongTerm,
        TemporalDimension::Generational,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TemporalDimension::Immediate => "immediate",
            TemporalDimension::ShortTerm => "short_term",
            TemporalDimension::LongTerm => "long_term",
            TemporalDimension::Generational => "generational",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TemporalDimension::Immediate => "Immediate",
            TemporalDimension::ShortTerm => "Short-term",
            TemporalDimension::LongTerm => "Long-term",
            TemporalDimension::Generational => "Generational",
        }
    }

    pub fn triad(&self, s: &str) -> Triad {
        match self {
            TemporalDimension::Immediate => Triad::new(
                format!("Immediate action on {} prevents escalation", s),
                format!("Rushed decisions on {} may create bigger problems", s),
                format!("Thoughtful urgency: Quick but considered response to {}", s),
            ),
            TemporalDimension::ShortTerm => Triad::new(
                format!("Short-term planning for {} provides manageable milestones", s),
                format!("Short-term focus may miss important long-term implications of {}", s),
                format!("Strategic short-term action aligned with long-term vision for {}", s),
            ),
            TemporalDimension::LongTerm => Triad::new(
                format!("Long-term perspective ensures sustainability in {}", s),
                format!("Long-term planning may ignore urgent current needs in {}", s),
                format!("Adaptive long-term strategy responsive to immediate realities in {}", s),
            ),
            TemporalDimension::Generational => Triad::new(
                format!("Generational thinking ensures legacy considerations in {}", s),
                format!("Generational focus may neglect present-day stakeholders in {}", s),
                format!("Intergenerational responsibility balanced with current needs in {}", s),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeholderPerspective {
    Individual,
    Organizational,
    Societal,
    Global,
}

impl StakeholderPerspective {
    pub const ALL: [StakeholderPerspective; 4] = [
        StakeholderPerspective::Individual,
        StakeholderPerspective::Organizational,
        StakeholderPerspective::Societal,
        StakeholderPerspective::Global,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StakeholderPerspective::Individual => "individual",
            StakeholderPerspective::Organizational => "organizational",
            StakeholderPerspective::Societal => "societal",
            StakeholderPerspective::Global => "global",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StakeholderPerspective::Individual => "Individual",
            StakeholderPerspective::Organizational => "Organizational",
            StakeholderPerspective::Societal => "Societal",
            StakeholderPerspective::Global => "Global",
        }
    }

    pub fn triad(&self, s: &str) -> Triad {
        match self {
            StakeholderPerspective::Individual => Triad::new(
                format!("Individual focus in {} ensures personal agency and responsibility", s),
                format!("Individual perspective may miss collective and systemic dimensions of {}", s),
                format!("Individual empowerment within collective framework for {}", s),
            ),
            StakeholderPerspective::Organizational => Triad::new(
                format!("Organizational approach to {} provides structure and resources", s),
                format!("Organizational constraints may limit innovation and flexibility in {}", s),
                format!("Adaptive organizational response balancing structure and agility for {}", s),
            ),
            StakeholderPerspective::Societal => Triad::new(
                format!("Societal lens reveals broader implications and responsibilities in {}", s),
                format!("Societal focus may dilute specific stakeholder needs in {}", s),
                format!("Society-conscious action attentive to specific community needs in {}", s),
            ),
            StakeholderPerspective::Global => Triad::new(
                format!("Global perspective ensures universal and planetary considerations in {}", s),
                format!("Global focus may obscure local realities and cultural specifics in {}", s),
                format!("Glocal approach: Global awareness with local sensitivity in {}", s),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerAnalysis {
    pub dimension: Dimension,
    /// e.g. `cognitive_logical`, `temporal_short_term`
    pub key: String,
    pub title: String,
    pub triad: Triad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLayerReport {
    pub scenario: String,
    pub complexity_level: ComplexityLevel,
    pub layers: Vec<LayerAnalysis>,
    pub meta_insights: Vec<String>,
}

impl MultiLayerReport {
    pub fn dimension(&self, dimension: Dimension) -> impl Iterator<Item = &LayerAnalysis> {
        self.layers.iter().filter(move |l| l.dimension == dimension)
    }

    pub fn layer(&self, key: &str) -> Option<&LayerAnalysis> {
        self.layers.iter().find(|l| l.key == key)
    }
}

fn layer(dimension: Dimension, key: &str, title: &str, triad: Triad) -> LayerAnalysis {
    LayerAnalysis {
        dimension,
        key: format!("{}_{}", dimension.name(), key),
        title: title.to_string(),
        triad,
    }
}

pub fn multi_layer_analysis(scenario: &str, complexity_level: ComplexityLevel) -> Result<MultiLayerReport> {
    require_text("scenario", scenario)?;
    info!("Running multi-layer analysis at {} complexity", complexity_level);

    let mut layers = Vec::with_capacity(13);
    for l in CognitiveLayer::ALL {
        layers.push(layer(Dimension::Cognitive, l.key(), l.title(), l.triad(scenario)));
    }
    for t in TemporalDimension::ALL {
        layers.push(layer(Dimension::Temporal, t.key(), t.title(), t.triad(scenario)));
    }
    for p in StakeholderPerspective::ALL {
        layers.push(layer(Dimension::Stakeholder, p.key(), p.title(), p.triad(scenario)));
    }

    let meta_insights = vec![
        format!("Cognitive integration reveals the need for multi-dimensional thinking in {}", scenario),
        format!("Temporal analysis suggests adaptive planning cycles for {}", scenario),
        format!("Stakeholder analysis indicates the importance of multi-level engagement in {}", scenario),
        format!("Overall synthesis: Holistic, adaptive, and inclusive approach to {}", scenario),
    ];

    Ok(MultiLayerReport {
        scenario: scenario.to_string(),
        complexity_level,
        layers,
        meta_insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_counts_and_order() {
        let report = multi_layer_analysis("Urban smart city development", ComplexityLevel::High).unwrap();

        assert_eq!(report.layers.len(), 13);
        assert_eq!(report.dimension(Dimension::Cognitive).count(), 5);
        assert_eq!(report.dimension(Dimension::Temporal).count(), 4);
        assert_eq!(report.dimension(Dimension::Stakeholder).count(), 4);
        assert_eq!(report.layers[0].key, "cognitive_logical");
        assert_eq!(report.layers[6].key, "temporal_short_term");
        assert_eq!(report.layers[12].key, "stakeholder_global");
        assert_eq!(report.complexity_level, ComplexityLevel::High);
        assert_eq!(report.meta_insights.len(), 4);
    }

    #[test]
    fn test_templates_interpolate_scenario() {
        let report = multi_layer_analysis("remote work", ComplexityLevel::Medium).unwrap();

        let pragmatic = report.layer("cognitive_pragmatic").unwrap();
        assert_eq!(
            pragmatic.triad.antithesis,
            "Short-term pragmatism may compromise long-term sustainability in remote work"
        );

        let global = report.layer("stakeholder_global").unwrap();
        assert_eq!(
            global.triad.synthesis,
            "Glocal approach: Global awareness with local sensitivity in remote work"
        );

        for l in &report.layers {
            assert!(l.triad.thesis.contains("remote work"), "{}", l.key);
            assert!(l.triad.antithesis.contains("remote work"), "{}", l.key);
            assert!(l.triad.synthesis.contains("remote work"), "{}", l.key);
        }
    }

    #[test]
    fn test_blank_scenario_rejected() {
        assert!(multi_layer_analysis("", ComplexityLevel::Low).is_err());
    }

    #[test]
    fn test_unknown_layer_key() {
        let report = multi_layer_analysis("x", ComplexityLevel::Low).unwrap();
        assert!(report.layer("temporal_eternal").is_none());
    }
}
