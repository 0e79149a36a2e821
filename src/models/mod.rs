pub mod clause;
pub mod document;
pub mod entity;
pub mod report;
pub mod risk;
pub mod template;

pub use clause::{clause_id, Clause, ClauseCategory, Span};
pub use document::{Document, SourceFormat};
pub use entity::{Entity, EntityKind};
pub use report::{
    AnalysisReport, CategorySummary, Classification, ClauseAnalysis, KeyTermCount,
    ReadabilityMetrics, RiskDistribution,
};
pub use risk::{CategoryScore, ClauseRisk, RiskFlag, RiskLevel};
pub use template::MatchResult;
