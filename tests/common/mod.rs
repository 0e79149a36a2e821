//! Shared fixtures for integration tests.

use std::sync::Arc;

use clauselens::catalog::{RiskCatalog, TemplateCorpus};
use clauselens::services::AnalysisPipeline;

/// A deliberately one-sided service agreement. Every numbered section
/// carries at least one catalog trigger.
pub const RISKY_CONTRACT: &str = "\
1. Liability
The Service Provider shall be liable for all damages whatsoever without limit arising out of this Agreement.

2. Termination
The Company may terminate this Agreement at its sole discretion without cause at any time.

3. Renewal
This Agreement shall automatically renew for successive one year terms unless cancelled in writing.

4. Restrictions
The Contractor shall not engage in any competing business, and this exclusivity survives termination.

5. Waiver
The Contractor waives all claims and foregoes any right to seek remedies before any court.
";

/// A balanced agreement close to the reference templates. Should produce
/// no risk flags.
pub const BALANCED_CONTRACT: &str = "\
1. Payment
Payment shall be made within 30 days of receipt of invoice. Late payments shall accrue interest at a reasonable rate per month.

2. Termination
Either party may terminate this Agreement by providing 30 days' written notice to the other party, with opportunity to cure within 15 days.

3. Liability
Total liability of either party shall not exceed the total amount paid under this Agreement in the 12 months preceding the claim.
";

/// Pipeline over the embedded catalogs.
pub fn default_pipeline() -> AnalysisPipeline {
    let catalog = RiskCatalog::embedded_default().expect("embedded catalog");
    let corpus = TemplateCorpus::embedded_default().expect("embedded corpus");
    AnalysisPipeline::new(Arc::new(catalog), Arc::new(corpus)).expect("pipeline")
}
