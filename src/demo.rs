// Fixed demonstration run across every analyzer
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::cli_output::{OutputMode, OutputWriter};
use crate::framework::{DialecticalFramework, EthicsAnalysis};
use crate::layers::{multi_layer_analysis, MultiLayerReport};
use crate::models::{AnalysisHistory, AnalysisRecord, ComplexityLevel, Context};
use crate::report::{render_analysis, render_ethics, render_guidance, render_layers, render_roadmap};
use crate::roadmap::{create_roadmap, guidance, Roadmap};
use crate::Result;

pub const BASIC_SCENARIO: &str = "Implementing AI in educational assessment";
pub const LAYERED_SCENARIO: &str = "Urban smart city development";
pub const ETHICS_SCENARIO: &str = "Automated hiring decisions trained on historically biased data";
pub const ROADMAP_MONTHS: u32 = 18;
pub const ROADMAP_OBJECTIVES: [&str; 3] = [
    "Improve decision-making quality",
    "Enhance collaborative thinking",
    "Reduce cognitive bias",
];

#[derive(Debug, Serialize)]
pub struct DemoOutput {
    pub basic: AnalysisRecord,
    pub layered: MultiLayerReport,
    pub roadmap: Roadmap,
    pub guidance: Vec<String>,
    pub ethics: EthicsAnalysis,
}

pub fn run_demonstration<W: Write>(
    writer: &mut OutputWriter<W>,
    framework: &DialecticalFramework,
    history: &mut AnalysisHistory,
) -> Result<DemoOutput> {
    info!("Running demonstration sequence");

    let basic = framework.analyze(BASIC_SCENARIO, Context::General, history)?;
    let layered = multi_layer_analysis(LAYERED_SCENARIO, ComplexityLevel::High)?;
    let objectives: Vec<String> = ROADMAP_OBJECTIVES.iter().map(|s| s.to_string()).collect();
    let roadmap = create_roadmap(Context::Corporate, &objectives, ROADMAP_MONTHS)?;
    let ethics = framework.analyze_ai_ethics(ETHICS_SCENARIO, history)?;

    let output = DemoOutput {
        basic,
        layered,
        roadmap,
        guidance: guidance(Context::Educational).iter().map(|s| s.to_string()).collect(),
        ethics,
    };

    if writer.mode() == OutputMode::Json {
        writer.emit_json(&output)?;
        return Ok(output);
    }

    writer.banner("🚀 AI-AUGMENTED DIALECTICS - COMPREHENSIVE DEMONSTRATION", 80)?;

    writer.section("📊 DEMONSTRATION 1: BASIC DIALECTICAL ANALYSIS")?;
    render_analysis(writer, &output.basic)?;

    writer.section("🔬 DEMONSTRATION 2: ADVANCED MULTI-LAYER ANALYSIS")?;
    render_layers(writer, &output.layered)?;

    writer.section("🗺️ DEMONSTRATION 3: IMPLEMENTATION PLANNING")?;
    render_roadmap(writer, &output.roadmap)?;

    writer.section("🎯 DEMONSTRATION 4: CONTEXT-SPECIFIC GUIDANCE")?;
    render_guidance(writer, Context::Educational)?;

    writer.section("⚖️ DEMONSTRATION 5: AI ETHICS CATEGORIZATION")?;
    render_ethics(writer, &output.ethics)?;

    writer.line("")?;
    writer.success("DEMONSTRATION COMPLETE")?;
    writer.line("For full use, run the subcommands with your own scenarios and contexts.")?;

    Ok(output)
}
