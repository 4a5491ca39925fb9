//! Analysis Orchestrator — fans out all twelve sections and joins them.
//!
//! Flow: spawn one task per section → wait for all → normalize each in
//! section order → assemble the keyed result.
//!
//! Nothing is cached; identical profiles regenerate every section.

use std::sync::Arc;
use std::time::Instant;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::analysis::analyzer::SectionAnalyzer;
use crate::analysis::models::{AnalysisResult, BusinessProfile, ContentSource, SectionResult};
use crate::analysis::normalizer::normalize;
use crate::analysis::sections::SECTIONS;
use crate::errors::AppError;

/// Runs the full twelve-section analysis for one profile.
///
/// Section failures arrive as fallback text and never fail the request. Only a
/// task that panics or is cancelled turns into a request-level error.
pub async fn run_analysis(
    analyzer: &SectionAnalyzer,
    profile: BusinessProfile,
) -> Result<AnalysisResult, AppError> {
    let start = Instant::now();
    let profile = Arc::new(profile);

    let handles = SECTIONS.iter().map(|section| {
        let analyzer = analyzer.clone();
        let profile = Arc::clone(&profile);
        tokio::spawn(async move { analyzer.analyze(&profile, section).await })
    });

    let outcomes = try_join_all(handles).await?;

    let sections: Vec<SectionResult> = SECTIONS
        .iter()
        .zip(outcomes)
        .map(|(section, outcome)| SectionResult {
            key: section.key,
            title: section.title,
            source: outcome.source(),
            text: normalize(Some(outcome.text())),
        })
        .collect();

    let result = AnalysisResult::new(sections);

    let degraded: Vec<&str> = result
        .sections()
        .iter()
        .filter(|s| s.source == ContentSource::Fallback)
        .map(|s| s.title)
        .collect();
    if !degraded.is_empty() {
        warn!("Sections served as fallback: {}", degraded.join(", "));
    }

    info!(
        "Analysis complete: {} generated, {} fallback in {}ms",
        result.len() - result.fallback_count(),
        result.fallback_count(),
        start.elapsed().as_millis()
    );

    Ok(result)
}
