//! Summary report
//!
//! Sums expense amounts grouped by category or by month over a period. The
//! grouping itself is done by the store; this module picks the period,
//! orders the rows, and computes shares of the total.

use std::fmt;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::SpendoraResult;
use crate::models::{Money, Month, Year};
use crate::storage::{GroupTotal, Storage, TransactionFilter};

/// Kind of summary to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    /// Totals per category for one month (current month by default)
    #[default]
    Monthly,
    /// Totals per month for one year (current year by default)
    Yearly,
    /// Totals per category over all time, a month, or a year
    Category,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
            Self::Category => write!(f, "Category"),
        }
    }
}

/// Period a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    AllTime,
    Month(Month),
    Year(Year),
}

impl ReportPeriod {
    fn filter(&self) -> TransactionFilter {
        match self {
            Self::AllTime => TransactionFilter::new(),
            Self::Month(month) => TransactionFilter::new().month(*month),
            Self::Year(year) => TransactionFilter::new().date_range(year.start_date(), year.end_date()),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTime => write!(f, "all time"),
            Self::Month(month) => write!(f, "{}", month),
            Self::Year(year) => write!(f, "{}", year),
        }
    }
}

/// One aggregated row
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Category name or `YYYY-MM` month
    pub key: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the report total, 0-100
    pub percentage: f64,
}

/// Aggregated expense totals
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub kind: ReportKind,
    pub period: ReportPeriod,
    pub rows: Vec<SummaryRow>,
    pub total: Money,
    pub transaction_count: usize,
}

impl SummaryReport {
    /// Generate a report
    ///
    /// `month` and `year` narrow the period; which one applies depends on
    /// `kind`. Missing periods default to the current month or year for
    /// monthly and yearly reports, and to all time for category reports.
    pub fn generate(
        storage: &Storage,
        kind: ReportKind,
        month: Option<Month>,
        year: Option<Year>,
    ) -> SpendoraResult<Self> {
        let period = match kind {
            ReportKind::Monthly => ReportPeriod::Month(month.unwrap_or_else(Month::current)),
            ReportKind::Yearly => ReportPeriod::Year(year.unwrap_or_else(Year::current)),
            ReportKind::Category => match (month, year) {
                (Some(month), _) => ReportPeriod::Month(month),
                (None, Some(year)) => ReportPeriod::Year(year),
                (None, None) => ReportPeriod::AllTime,
            },
        };

        let filter = period.filter();
        let repo = storage.transactions();
        let mut groups = match kind {
            ReportKind::Monthly | ReportKind::Category => repo.sum_by_category(&filter)?,
            ReportKind::Yearly => repo.sum_by_month(&filter)?,
        };

        // Months stay chronological; categories go largest first
        if kind != ReportKind::Yearly {
            groups.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
        }

        Ok(Self::from_groups(kind, period, groups))
    }

    fn from_groups(kind: ReportKind, period: ReportPeriod, groups: Vec<GroupTotal>) -> Self {
        let total: Money = groups.iter().map(|g| g.total).sum();
        let transaction_count = groups.iter().map(|g| g.count).sum();

        let rows = groups
            .into_iter()
            .map(|g| SummaryRow {
                percentage: percentage_of(g.total, total),
                key: g.key,
                total: g.total,
                transaction_count: g.count,
            })
            .collect();

        Self {
            kind,
            period,
            rows,
            total,
            transaction_count,
        }
    }

    /// Total for a group key, if the group has any expenses
    pub fn total_for(&self, key: &str) -> Option<Money> {
        self.rows.iter().find(|r| r.key == key).map(|r| r.total)
    }

    /// Heading of the grouping column
    pub fn group_label(&self) -> &'static str {
        match self.kind {
            ReportKind::Yearly => "Month",
            ReportKind::Monthly | ReportKind::Category => "Category",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        const WIDTH: usize = 70;
        const BAR_WIDTH: usize = 20;

        let mut output = String::new();
        output.push_str(&format!(
            "{} Expense Report ({})\n",
            self.kind, self.period
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded for this period.\n");
            output.push_str(&format!(
                "Total: {}\n",
                Money::zero().format_with_symbol(currency_symbol)
            ));
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>6}  {}\n",
            self.group_label(),
            "Total",
            "Count",
            "%",
            ""
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        let max_total = self
            .rows
            .iter()
            .map(|r| r.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6} {:>6}  {}\n",
                crate::display::truncate(&row.key, 20),
                row.total.format_with_symbol(currency_symbol),
                row.transaction_count,
                format_percentage(row.percentage),
                format_bar(row.total.cents() as f64, max_total, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>6}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol),
            self.transaction_count
        ));

        output
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}
