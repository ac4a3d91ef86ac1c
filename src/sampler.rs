/// Seeded firm sampling for manual verification
///
/// The random source is built by the caller and passed in, so a run is
/// reproducible from the seed alone.
use crate::types::*;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;
/// Number of firms sampled when none is configured
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Contact-field presence for one sampled member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceFlags {
    pub email: bool,
    pub linkedin: bool,
    pub portfolio: bool,
}

/// A team member row of a sampled firm
#[derive(Debug, Clone)]
pub struct SampledMember<'a> {
    pub row: &'a Row,
    pub name: String,
    /// `None` when the title column is absent or the cell is blank
    pub title: Option<String>,
    pub flags: PresenceFlags,
}

/// One sampled firm with every member that references it
#[derive(Debug, Clone)]
pub struct SampledFirm<'a> {
    pub name: String,
    /// First firm row carrying this name
    pub row: &'a Row,
    /// `None` when the website column is absent or the cell is blank
    pub website: Option<String>,
    pub members: Vec<SampledMember<'a>>,
}

/// Create the random source for a run
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Distinct filled firm names, in first-appearance order
pub fn distinct_firm_names(firms: &Table) -> Vec<String> {
    let mut seen = HashSet::new();
    firms
        .rows()
        .iter()
        .filter_map(|row| firms.text(row, COL_COMPANY_NAME))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Pick `min(sample_size, names.len())` distinct names without replacement
pub fn sample_names<R: Rng + ?Sized>(names: &[String], sample_size: usize, rng: &mut R) -> Vec<String> {
    let amount = sample_size.min(names.len());
    rand::seq::index::sample(rng, names.len(), amount).into_iter().map(|i| names[i].clone()).collect()
}

/// Sample firms and gather their members
pub fn sample_firms<'a, R: Rng + ?Sized>(
    tables: &'a AuditTables,
    sample_size: usize,
    rng: &mut R,
) -> Vec<SampledFirm<'a>> {
    let names = distinct_firm_names(&tables.firms);
    let picked = sample_names(&names, sample_size, rng);

    debug!("Sampled {} of {} distinct firms: {:?}", picked.len(), names.len(), picked);

    picked.into_iter().filter_map(|name| collect_firm(tables, name)).collect()
}

fn collect_firm(tables: &AuditTables, name: String) -> Option<SampledFirm<'_>> {
    let firms = &tables.firms;
    let members = &tables.members;

    // Names come from the firms table, so a row always exists
    let row = firms.rows_matching(COL_COMPANY_NAME, &name).next()?;
    let website = firms.text(row, COL_WEBSITE_URL);

    let sampled_members = members
        .rows_matching(COL_VC_FIRM, &name)
        .map(|m| SampledMember {
            row: m,
            name: members.get(m, COL_NAME).map(Cell::as_text).unwrap_or_default(),
            title: members.text(m, COL_TITLE),
            flags: PresenceFlags {
                email: members.is_filled(m, COL_EMAIL),
                linkedin: members.is_filled(m, COL_LINKEDIN_URL),
                portfolio: members.is_filled(m, COL_PORTFOLIO_COMPANIES),
            },
        })
        .collect();

    Some(SampledFirm { name, row, website, members: sampled_members })
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;
