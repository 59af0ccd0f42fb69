use edulog_core::models::threshold::Threshold;

/// Find the assessment text for `score`.
///
/// `levels` must be sorted by ascending level. The first band whose
/// inclusive `[min, max]` contains the score wins, so where bands overlap
/// the lowest level takes precedence. The data source does not guarantee
/// disjoint bands; this ordering is the tie-break.
///
/// Returns `""` when no band matches or the matching band has no text.
pub fn classify(score: f64, levels: &[Threshold]) -> String {
    levels
        .iter()
        .find(|t| t.contains(score))
        .map(|t| t.description.clone())
        .unwrap_or_default()
}
