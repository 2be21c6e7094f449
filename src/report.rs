//! Text and JSON rendering of analysis results.
//!
//! Every `render_*` function writes through an [`OutputWriter`]: text
//! helpers are silent in JSON mode and `emit_json` is silent otherwise, so
//! each renderer serves all three output modes.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::Serialize;
use std::io::Write;

use crate::cli_output::{OutputMode, OutputWriter};
use crate::framework::EthicsAnalysis;
use crate::layers::{Dimension, MultiLayerReport};
use crate::models::{AnalysisRecord, Context, Perspective};
use crate::roadmap::{guidance, guidance_heading, Roadmap};
use crate::Result;

pub fn render_analysis<W: Write>(writer: &mut OutputWriter<W>, record: &AnalysisRecord) -> Result<()> {
    write_analysis(writer, record)?;
    writer.emit_json(record)
}

fn write_analysis<W: Write>(writer: &mut OutputWriter<W>, record: &AnalysisRecord) -> Result<()> {
    writer.banner("🎯 DIALECTICAL ANALYSIS FRAMEWORK", 80)?;
    writer.labeled("Thesis:", &record.thesis)?;
    writer.labeled("Context:", &record.context.name().to_uppercase())?;

    writer.section(&format!("🔄 Generated Antitheses ({})", record.antitheses.len()))?;
    let titled: Vec<String> = Perspective::ALL
        .iter()
        .zip(&record.antitheses)
        .map(|(p, a)| format!("{}: {}", p.title(), a))
        .collect();
    writer.numbered(&titled)?;

    if !record.transformed_perspectives.is_empty() {
        writer.section("⚡ λ-Parameter Transformations")?;
        for (i, t) in record.transformed_perspectives.iter().enumerate() {
            writer.line(&format!("λ{}: {}", i + 1, t))?;
        }
    }

    writer.section("🌟 Synthesis")?;
    writer.line(&record.synthesis)?;

    writer.section("💡 Key Insights")?;
    writer.numbered(&record.key_insights)?;

    writer.section("📈 Analysis Metrics")?;
    writer.metric("Confidence Score", &format!("{:.2}", record.confidence_score))?;
    writer.metric("Complexity Level", &record.complexity_level.name().to_uppercase())?;
    Ok(())
}

pub fn render_ethics<W: Write>(writer: &mut OutputWriter<W>, analysis: &EthicsAnalysis) -> Result<()> {
    write_analysis(writer, &analysis.record)?;

    writer.section("🔄 AI ETHICS ANTITHESES")?;
    for (category, challenges) in analysis.challenges.iter() {
        writer.heading(&format!("📊 {}:", category.label()))?;
        writer.numbered(challenges)?;
    }
    writer.emit_json(analysis)
}

pub fn render_layers<W: Write>(writer: &mut OutputWriter<W>, report: &MultiLayerReport) -> Result<()> {
    writer.banner("🔬 MULTI-LAYER DIALECTICAL ANALYSIS", 80)?;
    writer.labeled("Scenario:", &report.scenario)?;
    writer.labeled("Complexity Level:", &report.complexity_level.name().to_uppercase())?;

    for (dimension, title, suffix) in [
        (Dimension::Cognitive, "🧠 COGNITIVE LAYER ANALYSIS", "Analysis"),
        (Dimension::Temporal, "⏰ TEMPORAL DIMENSION ANALYSIS", "Perspective"),
        (Dimension::Stakeholder, "👥 STAKEHOLDER PERSPECTIVE ANALYSIS", "Perspective"),
    ] {
        writer.section(title)?;
        for layer in report.dimension(dimension) {
            writer.heading(&format!("{} {}:", layer.title, suffix))?;
            writer.line(&format!("   💭 Thesis: {}", layer.triad.thesis))?;
            writer.line(&format!("   🔄 Antithesis: {}", layer.triad.antithesis))?;
            writer.line(&format!("   ⚡ Synthesis: {}", layer.triad.synthesis))?;
        }
    }

    writer.section("🌟 META-SYNTHESIS: INTEGRATED INSIGHTS")?;
    writer.numbered(&report.meta_insights)?;
    writer.emit_json(report)
}

fn stage_table(roadmap: &Roadmap, human: bool) -> Table {
    let mut table = Table::new();
    let preset = if human { UTF8_FULL } else { ASCII_FULL };
    table
        .load_preset(preset)
        .set_header(vec!["Stage", "Timeline", "Activities", "Deliverables"]);

    for (i, plan) in roadmap.stages.iter().enumerate() {
        table.add_row(vec![
            format!("{}. {}", i + 1, plan.stage.name()),
            plan.timeline(),
            plan.activities.len().to_string(),
            plan.deliverables.len().to_string(),
        ]);
    }
    table
}

pub fn render_roadmap<W: Write>(writer: &mut OutputWriter<W>, roadmap: &Roadmap) -> Result<()> {
    writer.banner("🗺️ AADT IMPLEMENTATION ROADMAP", 80)?;
    writer.labeled("Context:", &capitalize(roadmap.context.name()))?;
    writer.labeled("Timeline:", &format!("{} months", roadmap.timeline_months))?;
    writer.labeled("Objectives:", &roadmap.objectives.join(", "))?;

    if writer.mode() != OutputMode::Json {
        let table = stage_table(roadmap, writer.is_human());
        writer.line("")?;
        writer.block(&table.to_string())?;
    }

    for (i, plan) in roadmap.stages.iter().enumerate() {
        writer.section(&format!(
            "📋 STAGE {}: {} ({})",
            i + 1,
            plan.stage.name().to_uppercase(),
            plan.timeline()
        ))?;
        writer.heading("🎯 Key Activities:")?;
        writer.bullets(&plan.activities)?;
        writer.heading("📋 Deliverables:")?;
        writer.bullets(&plan.deliverables)?;
    }
    writer.emit_json(roadmap)
}

#[derive(Serialize)]
struct GuidanceOutput<'a> {
    context: Context,
    guidance: &'a [&'a str],
}

pub fn render_guidance<W: Write>(writer: &mut OutputWriter<W>, context: Context) -> Result<()> {
    let items = guidance(context);

    writer.section("🎯 CONTEXT-SPECIFIC IMPLEMENTATION GUIDANCE")?;
    writer.labeled("Context:", &context.name().to_uppercase())?;
    writer.heading(&format!("{}:", guidance_heading(context)))?;
    writer.numbered(items)?;
    writer.emit_json(&GuidanceOutput {
        context,
        guidance: items,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::DialecticalFramework;
    use crate::layers::multi_layer_analysis;
    use crate::models::{AnalysisHistory, ComplexityLevel};
    use crate::roadmap::create_roadmap;

    fn plain() -> OutputWriter<Vec<u8>> {
        OutputWriter::new(OutputMode::Plain, Vec::new())
    }

    fn text(writer: OutputWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_analysis_plain() {
        let mut history = AnalysisHistory::new();
        let record = DialecticalFramework::new()
            .analyze("Universal basic income", Context::General, &mut history)
            .unwrap();

        let mut writer = plain();
        render_analysis(&mut writer, &record).unwrap();
        let out = text(writer);

        assert!(out.contains("Thesis: Universal basic income"));
        assert!(out.contains("Context: GENERAL"));
        assert!(out.contains("Generated Antitheses (5)"));
        assert!(out.contains("   1. Logical Opposition: The logical opposite of 'Universal basic income'"));
        assert!(out.contains("λ5: λ-transformed perspective 5:"));
        assert!(out.contains("   - Confidence Score: 0.95"));
        assert!(out.contains("   - Complexity Level: LOW"));
    }

    #[test]
    fn test_render_analysis_json() {
        let mut history = AnalysisHistory::new();
        let record = DialecticalFramework::new()
            .analyze("Universal basic income", Context::Personal, &mut history)
            .unwrap();

        let mut writer = OutputWriter::new(OutputMode::Json, Vec::new());
        render_analysis(&mut writer, &record).unwrap();

        let parsed: AnalysisRecord = serde_json::from_str(&text(writer)).unwrap();
        assert_eq!(parsed.thesis, record.thesis);
        assert_eq!(parsed.context, Context::Personal);
        assert_eq!(parsed.antitheses, record.antitheses);
        assert_eq!(parsed.complexity_level, record.complexity_level);
        assert!((parsed.confidence_score - record.confidence_score).abs() < 1e-9);
    }

    #[test]
    fn test_render_ethics_shows_only_filled_categories() {
        let mut history = AnalysisHistory::new();
        let analysis = DialecticalFramework::new()
            .analyze_ai_ethics("Predictive policing with biased datasets", &mut history)
            .unwrap();

        let mut writer = plain();
        render_ethics(&mut writer, &analysis).unwrap();
        let out = text(writer);

        assert!(out.contains("📊 Fairness & Bias:"));
        assert!(!out.contains("📊 Performance & Technical:"));
        assert!(!out.contains("📊 Societal Impact:"));
    }

    #[test]
    fn test_render_layers() {
        let report = multi_layer_analysis("Urban smart city development", ComplexityLevel::High).unwrap();
        let mut writer = plain();
        render_layers(&mut writer, &report).unwrap();
        let out = text(writer);

        assert!(out.contains("Complexity Level: HIGH"));
        assert!(out.contains("Short-term Perspective:"));
        assert!(out.contains("Logical Analysis:"));
        assert!(out.contains("   4. Overall synthesis: Holistic, adaptive, and inclusive approach to Urban smart city development"));
    }

    #[test]
    fn test_render_roadmap_has_table_and_stages() {
        let objectives = vec!["Enhance collaborative thinking".to_string()];
        let roadmap = create_roadmap(Context::Corporate, &objectives, 18).unwrap();
        let mut writer = plain();
        render_roadmap(&mut writer, &roadmap).unwrap();
        let out = text(writer);

        assert!(out.contains("Context: Corporate"));
        assert!(out.contains("Timeline: 18 months"));
        assert!(out.contains("| Stage"));
        assert!(out.contains("STAGE 5: EVOLVE (Months 13-15)"));
        assert!(out.contains("   - Knowledge Sharing Strategy"));
    }

    #[test]
    fn test_human_roadmap_uses_box_table() {
        let roadmap = create_roadmap(Context::Healthcare, &[], 10).unwrap();
        let mut writer = OutputWriter::new(OutputMode::Human, Vec::new());
        render_roadmap(&mut writer, &roadmap).unwrap();
        let out = text(writer);

        assert!(out.contains('│'));
        assert!(!out.contains("| Stage"));
    }

    #[test]
    fn test_render_guidance() {
        let mut writer = plain();
        render_guidance(&mut writer, Context::Educational).unwrap();
        let out = text(writer);

        assert!(out.contains("Context: EDUCATIONAL"));
        assert!(out.contains("Educational Context Guidance:"));
        assert!(out.contains("   5. Implement peer learning and co-thinking protocols"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("corporate"), "Corporate");
        assert_eq!(capitalize(""), "");
    }
}
