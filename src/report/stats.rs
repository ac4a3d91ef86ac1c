//! Coverage statistics for the team member table.
//!
//! All "is this field present" checks go through the shared filled predicate
//! in `types`, so coverage, sampling and export agree on what counts.

use crate::types::*;
use std::collections::HashMap;

/// Coverage of one member field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoverage {
    /// Human label, e.g. "LinkedIn URL"
    pub label: &'static str,
    pub filled: usize,
    pub total: usize,
    /// `100 * filled / total` rounded to one decimal; 0.0 for an empty table
    pub percent: f64,
}

/// Members-per-firm distribution over firms with at least one member
#[derive(Debug, Clone, PartialEq)]
pub struct MembersPerFirm {
    pub firms: usize,
    /// Rounded to one decimal
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

/// One decision-maker tier and how often it occurs
#[derive(Debug, Clone, PartialEq)]
pub struct TierCount {
    pub tier: String,
    pub count: usize,
    pub percent: f64,
}

/// Everything the quality-metrics block prints
#[derive(Debug, Clone, PartialEq)]
pub struct QualityMetrics {
    pub members_per_firm: Option<MembersPerFirm>,
    pub coverage: Vec<FieldCoverage>,
    /// `None` when the tier column does not exist
    pub tiers: Option<Vec<TierCount>>,
}

/// Round to one decimal place the way `{:.1}` prints it: the exact binary
/// value is rounded, ties to even
pub fn round1(x: f64) -> f64 {
    format!("{:.1}", x).parse().unwrap_or(x)
}

/// Percentage of `part` in `total`, rounded to one decimal
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { round1(100.0 * part as f64 / total as f64) }
}

/// Count rows where `column` is filled. A missing column counts as zero.
pub fn field_coverage(members: &Table, label: &'static str, column: &'static str) -> FieldCoverage {
    let filled = members.rows().iter().filter(|row| members.is_filled(row, column)).count();
    let total = members.len();
    FieldCoverage { label, filled, total, percent: percent(filled, total) }
}

/// Coverage lines in report order. Portfolio companies only appears when the column exists.
pub fn coverage_report(members: &Table) -> Vec<FieldCoverage> {
    let mut coverage = vec![
        field_coverage(members, "LinkedIn URL", COL_LINKEDIN_URL),
        field_coverage(members, "Email", COL_EMAIL),
    ];
    if members.has_column(COL_PORTFOLIO_COMPANIES) {
        coverage.push(field_coverage(members, "Portfolio Companies", COL_PORTFOLIO_COMPANIES));
    }
    coverage.push(field_coverage(members, "Title", COL_TITLE));
    coverage
}

/// Member counts grouped by firm reference. Rows without a firm reference are skipped.
pub fn members_per_firm(members: &Table) -> Option<MembersPerFirm> {
    if members.is_empty() {
        return None;
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in members.rows() {
        if let Some(firm) = members.text(row, COL_VC_FIRM) {
            *counts.entry(firm).or_default() += 1;
        }
    }

    let min = *counts.values().min()?;
    let max = *counts.values().max()?;
    let sum: usize = counts.values().sum();

    Some(MembersPerFirm { firms: counts.len(), mean: round1(sum as f64 / counts.len() as f64), min, max })
}

/// Frequency of each tier, most frequent first; equal counts keep first-seen order
pub fn tier_distribution(members: &Table) -> Option<Vec<TierCount>> {
    if !members.has_column(COL_DECISION_MAKER_TIER) {
        return None;
    }

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in members.rows() {
        if let Some(tier) = members.text(row, COL_DECISION_MAKER_TIER) {
            let count = counts.entry(tier.clone()).or_default();
            if *count == 0 {
                order.push(tier);
            }
            *count += 1;
        }
    }

    let total = members.len();
    let mut tiers: Vec<TierCount> = order
        .into_iter()
        .map(|tier| {
            let count = counts[&tier];
            TierCount { tier, count, percent: percent(count, total) }
        })
        .collect();

    // Stable sort keeps first-seen order among ties
    tiers.sort_by(|a, b| b.count.cmp(&a.count));
    Some(tiers)
}

/// Compute the whole quality-metrics block
pub fn quality_metrics(members: &Table) -> QualityMetrics {
    QualityMetrics {
        members_per_firm: members_per_firm(members),
        coverage: coverage_report(members),
        tiers: tier_distribution(members),
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
