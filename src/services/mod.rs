//! Analysis services: segmentation, classification, risk scoring,
//! template matching, aggregation, and the pipeline that wires them.

pub mod aggregator;
pub mod classifier;
pub mod explain;
pub mod matcher;
pub mod pipeline;
pub mod scorer;
pub mod segmenter;

pub use aggregator::{Aggregator, DEFAULT_SEVERITY_FLOOR, DEFAULT_TOP_K};
pub use classifier::Classifier;
pub use explain::{explain_requests, ExplainRequest, ExplanationProvider, NoopExplanationProvider};
pub use matcher::{TemplateMatcher, MIN_SIMILARITY};
pub use pipeline::AnalysisPipeline;
pub use scorer::RiskScorer;
pub use segmenter::{Segmenter, MAX_CLAUSE_LEN, MIN_CLAUSE_LEN};
