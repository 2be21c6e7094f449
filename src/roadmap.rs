// Implementation roadmap and context-specific guidance tables
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DialecticsError, Result};
use crate::models::Context;

pub const DEFAULT_TIMELINE_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationStage {
    Assessment,
    Design,
    Pilot,
    Scale,
    Evolve,
}

impl ImplementationStage {
    pub const ALL: [ImplementationStage; 5] = [
        ImplementationStage::Assessment,
        ImplementationStage::Design,
        ImplementationStage::Pilot,
        ImplementationStage::Scale,
        ImplementationStage::Evolve,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImplementationStage::Assessment => "assessment",
            ImplementationStage::Design => "design",
            ImplementationStage::Pilot => "pilot",
            ImplementationStage::Scale => "scale",
            ImplementationStage::Evolve => "evolve",
        }
    }

    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            ImplementationStage::Assessment => &[
                "Evaluate current thinking and decision-making processes",
                "Identify cognitive biases and blind spots",
                "Map stakeholder perspectives and interests",
                "Assess readiness for dialectical thinking adoption",
                "Establish baseline metrics for cognitive effectiveness",
            ],
            ImplementationStage::Design => &[
                "Design context-specific AADT protocols",
                "Develop training materials and resources",
                "Create measurement and evaluation frameworks",
                "Design pilot program structure",
                "Establish change management strategy",
            ],
            ImplementationStage::Pilot => &[
                "Launch pilot program with selected groups",
                "Conduct AADT training and orientation",
                "Implement dialectical thinking protocols",
                "Collect feedback and performance data",
                "Adjust and refine approaches based on learning",
            ],
            ImplementationStage::Scale => &[
                "Roll out refined AADT across broader organization",
                "Implement comprehensive training programs",
                "Establish ongoing support and coaching",
                "Monitor adoption and effectiveness metrics",
                "Build internal capability and expertise",
            ],
            ImplementationStage::Evolve => &[
                "Continuously refine and improve AADT practices",
                "Integrate lessons learned into organizational culture",
                "Develop advanced applications and innovations",
                "Share learning with broader community",
                "Plan for next evolution cycle",
            ],
        }
    }

    pub fn deliverables(&self) -> &'static [&'static str] {
        match self {
            ImplementationStage::Assessment => &[
                "Current State Analysis Report",
                "Stakeholder Mapping Document",
                "Readiness Assessment Results",
                "Baseline Metrics Dashboard",
            ],
            ImplementationStage::Design => &[
                "AADT Protocol Design Document",
                "Training Curriculum and Materials",
                "Evaluation Framework",
                "Pilot Program Plan",
            ],
            ImplementationStage::Pilot => &[
                "Pilot Program Results",
                "Feedback Analysis Report",
                "Refined Protocol Document",
                "Scaling Recommendations",
            ],
            ImplementationStage::Scale => &[
                "Full-Scale Implementation Report",
                "Training Completion Metrics",
                "Effectiveness Measurement Results",
                "Internal Capability Assessment",
            ],
            ImplementationStage::Evolve => &[
                "Continuous Improvement Plan",
                "Cultural Integration Assessment",
                "Innovation Pipeline Report",
                "Knowledge Sharing Strategy",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePlan {
    pub stage: ImplementationStage,
    pub start_month: u32,
    pub end_month: u32,
    pub activities: Vec<String>,
    pub deliverables: Vec<String>,
}

impl StagePlan {
    pub fn timeline(&self) -> String {
        format!("Months {}-{}", self.start_month, self.end_month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub context: Context,
    pub objectives: Vec<String>,
    pub timeline_months: u32,
    pub stages: Vec<StagePlan>,
}

/// Split `timeline_months` evenly across the five stages. Leftover months
/// from the integer division are not assigned to any stage.
pub fn create_roadmap(context: Context, objectives: &[String], timeline_months: u32) -> Result<Roadmap> {
    let stage_count = ImplementationStage::ALL.len() as u32;
    if timeline_months < stage_count {
        return Err(DialecticsError::invalid_input(format!(
            "timeline must be at least {} months, got {}",
            stage_count, timeline_months
        )));
    }
    info!("Building {}-month roadmap for {} context", timeline_months, context);

    let months_per_stage = timeline_months / stage_count;
    let stages = ImplementationStage::ALL
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let i = i as u32;
            StagePlan {
                stage: *stage,
                start_month: i * months_per_stage + 1,
                end_month: (i + 1) * months_per_stage,
                activities: stage.activities().iter().map(|s| s.to_string()).collect(),
                deliverables: stage.deliverables().iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();

    Ok(Roadmap {
        context,
        objectives: objectives.to_vec(),
        timeline_months,
        stages,
    })
}

/// Heading shown above a context's guidance list
pub fn guidance_heading(context: Context) -> &'static str {
    match context {
        Context::Educational => "📚 Educational Context Guidance",
        Context::Corporate => "🏢 Corporate Context Guidance",
        Context::Healthcare => "🏥 Healthcare Context Guidance",
        Context::Government => "🏛️ Government Context Guidance",
        Context::Personal => "👤 Personal Context Guidance",
        Context::General | Context::AiEthics => "🔧 General Context Guidance",
    }
}

pub fn guidance(context: Context) -> &'static [&'static str] {
    match context {
        Context::Educational => &[
            "Integrate dialectical thinking into curriculum design",
            "Train educators in AADT facilitation techniques",
            "Create student assessment frameworks for dialectical reasoning",
            "Develop collaborative learning environments that encourage thesis-antithesis exploration",
            "Implement peer learning and co-thinking protocols",
        ],
        Context::Corporate => &[
            "Apply AADT to strategic planning and decision-making processes",
            "Use dialectical analysis for innovation and product development",
            "Implement in leadership development and management training",
            "Apply to conflict resolution and team collaboration",
            "Integrate into performance management and goal-setting",
        ],
        Context::Healthcare => &[
            "Apply dialectical thinking to clinical decision-making",
            "Use AADT for patient care planning and treatment options",
            "Implement in medical ethics and complex case discussions",
            "Apply to healthcare policy and system improvement",
            "Use for interdisciplinary team communication and collaboration",
        ],
        Context::Government => &[
            "Apply AADT to policy development and analysis",
            "Use for stakeholder engagement and public consultation",
            "Implement in inter-agency collaboration and coordination",
            "Apply to crisis management and emergency response",
            "Use for long-term strategic planning and governance",
        ],
        Context::Personal => &[
            "Apply dialectical thinking to personal decision-making",
            "Use AADT for career planning and life choices",
            "Implement in relationship and communication skills",
            "Apply to personal growth and self-reflection",
            "Use for goal-setting and personal development",
        ],
        Context::General | Context::AiEthics => &[
            "Assess specific context needs and constraints",
            "Adapt AADT principles to local culture and practices",
            "Start with pilot programs to test effectiveness",
            "Build internal capability and expertise",
            "Measure and iterate based on results",
        ],
    }
}
