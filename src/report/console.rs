//! Console rendering of the audit report.
//!
//! Output goes through `ReportWriter`, which accepts any `std::io::Write`
//! destination so the same code renders to stdout and to test buffers.

use super::stats::{FieldCoverage, QualityMetrics, TierCount};
use crate::sampler::{SampledFirm, SampledMember};
use crate::types::{AuditTables, Table};
use std::io::{self, Write};
use std::path::Path;
use term::color::Color;

const BANNER_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;

/// Everything needed to render one report
pub struct ReportContext<'a> {
    pub tables: &'a AuditTables,
    pub metrics: &'a QualityMetrics,
    pub sample: &'a [SampledFirm<'a>],
    pub distinct_firms: usize,
    pub preview_limit: usize,
    pub generated_at: &'a str,
}

/// Writer for the audit report, configurable for color/plain text
pub struct ReportWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Consume the writer and return the underlying destination
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stdout() {
                self.writer.flush()?;
                let _ = t.fg(color);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                return Ok(());
            }
        }
        write!(self.writer, "{}", text)
    }

    fn write_mark(&mut self, present: bool) -> io::Result<()> {
        if present {
            self.write_colored("✓", term::color::GREEN)
        } else {
            self.write_colored("✗", term::color::RED)
        }
    }

    fn write_section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "\n{}", title)?;
        writeln!(self.writer, "{}", "-".repeat(SECTION_WIDTH))
    }

    /// Write every section up to and including the sample preview.
    /// The footer is written separately once the sample file exists.
    pub fn write_report(&mut self, ctx: &ReportContext<'_>) -> io::Result<()> {
        self.write_banner(ctx.generated_at)?;
        self.write_overview(ctx.tables)?;
        self.write_columns(&ctx.tables.firms, &ctx.tables.members)?;
        self.write_quality_metrics(ctx.metrics)?;
        if let Some(ref tiers) = ctx.metrics.tiers {
            self.write_tier_distribution(tiers)?;
        }
        self.write_sample(ctx.sample, ctx.distinct_firms, ctx.preview_limit)?;
        self.writer.flush()
    }

    pub fn write_banner(&mut self, generated_at: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.writer, "VC ENRICHMENT DATA QUALITY AUDIT")?;
        writeln!(self.writer, "Generated: {}", generated_at)?;
        writeln!(self.writer, "{}", "=".repeat(BANNER_WIDTH))
    }

    pub fn write_overview(&mut self, tables: &AuditTables) -> io::Result<()> {
        self.write_section("📊 DATA OVERVIEW")?;
        writeln!(self.writer, "Total VC Firms: {}", tables.firms.len())?;
        writeln!(self.writer, "Total Team Members: {}", tables.members.len())?;
        if let Some(ref portfolio) = tables.portfolio {
            writeln!(self.writer, "Total Portfolio Companies: {}", portfolio.len())?;
        }
        let metrics = if tables.metrics.is_some() { "Yes" } else { "No" };
        writeln!(self.writer, "Extraction Metrics Available: {}", metrics)
    }

    pub fn write_columns(&mut self, firms: &Table, members: &Table) -> io::Result<()> {
        writeln!(self.writer, "\n📋 FIRMS DATA COLUMNS:")?;
        writeln!(self.writer, "{}", format_column_list(firms.columns()))?;
        writeln!(self.writer, "\n👥 TEAM MEMBERS DATA COLUMNS:")?;
        writeln!(self.writer, "{}", format_column_list(members.columns()))
    }

    pub fn write_quality_metrics(&mut self, metrics: &QualityMetrics) -> io::Result<()> {
        self.write_section("📈 DATA QUALITY METRICS")?;

        match metrics.members_per_firm {
            Some(ref per_firm) => {
                writeln!(self.writer, "Firms with team members: {}", per_firm.firms)?;
                writeln!(self.writer, "Avg team members per firm: {:.1}", per_firm.mean)?;
                writeln!(self.writer, "Min team members: {}", per_firm.min)?;
                writeln!(self.writer, "Max team members: {}", per_firm.max)?;
            }
            None => writeln!(self.writer, "Avg team members per firm: n/a (no team members)")?,
        }

        writeln!(self.writer)?;
        for coverage in &metrics.coverage {
            writeln!(self.writer, "{}", format_coverage_line(coverage))?;
        }
        Ok(())
    }

    pub fn write_tier_distribution(&mut self, tiers: &[TierCount]) -> io::Result<()> {
        writeln!(self.writer, "\n📊 TIER DISTRIBUTION:")?;
        for tier in tiers {
            writeln!(self.writer, "  {}: {} ({:.1}%)", tier.tier, tier.count, tier.percent)?;
        }
        Ok(())
    }

    pub fn write_sample(&mut self, sample: &[SampledFirm<'_>], distinct_firms: usize, preview_limit: usize) -> io::Result<()> {
        self.write_section("🎲 RANDOM SAMPLE FOR AUDIT")?;
        writeln!(self.writer, "Total unique firms: {}", distinct_firms)?;
        writeln!(self.writer, "\nSelected firms for audit:")?;

        for (i, firm) in sample.iter().enumerate() {
            writeln!(self.writer, "\n{}. {}", i + 1, firm.name)?;
            writeln!(self.writer, "   Website: {}", firm.website.as_deref().unwrap_or("N/A"))?;
            writeln!(self.writer, "   Team members extracted: {}", firm.members.len())?;
            writeln!(self.writer, "   Sample team members:")?;
            for member in firm.members.iter().take(preview_limit) {
                self.write_member_line(member)?;
            }
        }
        Ok(())
    }

    fn write_member_line(&mut self, member: &SampledMember<'_>) -> io::Result<()> {
        write!(self.writer, "     - {} | {} | Email:", member.name, member.title.as_deref().unwrap_or("N/A"))?;
        self.write_mark(member.flags.email)?;
        write!(self.writer, " LinkedIn:")?;
        self.write_mark(member.flags.linkedin)?;
        write!(self.writer, " Portfolio:")?;
        self.write_mark(member.flags.portfolio)?;
        writeln!(self.writer)
    }

    pub fn write_footer(&mut self, output_path: &Path) -> io::Result<()> {
        writeln!(self.writer, "\n✅ Sample data saved to {}", output_path.display())?;
        writeln!(self.writer, "\nNext step: Visit each firm's website to verify data accuracy")?;
        self.writer.flush()
    }
}

/// `Email coverage: 1/2 (50.0%)`
pub fn format_coverage_line(coverage: &FieldCoverage) -> String {
    format!("{} coverage: {}/{} ({:.1}%)", coverage.label, coverage.filled, coverage.total, coverage.percent)
}

/// `['a', 'b']`
pub fn format_column_list(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;
