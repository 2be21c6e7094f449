//! Template-driven dialectical analysis reports.
//!
//! A subject phrase is interpolated into fixed thesis/antithesis/synthesis
//! templates; [`scoring::CategorizationScorer`] groups the generated
//! statements by keyword and derives confidence and complexity metrics.

pub mod cli_output;
pub mod config;
pub mod demo;
pub mod error;
pub mod framework;
pub mod layers;
pub mod models;
pub mod report;
pub mod roadmap;
pub mod scoring;

pub use error::{DialecticsError, Result};
pub use framework::{DialecticalFramework, EthicsAnalysis};
pub use models::{AnalysisHistory, AnalysisRecord, ComplexityLevel, Context};
pub use scoring::{CategorizationScorer, Categorized, Category};
