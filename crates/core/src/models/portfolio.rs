use serde::{Deserialize, Serialize};

/// Number of colors in the allocation palette.
pub const PALETTE_SIZE: usize = 12;

/// Display palette for allocation entries, indexed by `AllocationEntry::color_index`.
pub const PALETTE: [&str; PALETTE_SIZE] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4",
    "#ec4899", "#84cc16", "#f97316", "#14b8a6", "#6366f1", "#a855f7",
];

/// Look up the hex color for a palette index (wraps around).
pub fn palette_color(color_index: usize) -> &'static str {
    PALETTE[color_index % PALETTE_SIZE]
}

/// Totals for one portfolio snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of cost value over included holdings
    pub total_investment: f64,

    /// Sum of current market value over included holdings
    pub current_value: f64,

    /// current_value - total_investment
    pub total_gain_loss: f64,

    /// total_gain_loss / total_investment * 100, or 0 when nothing was invested
    pub gain_loss_percentage: f64,
}

/// One included holding's share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Stable list key (see `HoldingRecord::list_key`)
    pub key: String,

    /// Scheme name
    pub label: String,

    /// Current market value
    pub amount: f64,

    /// Share of total current value, rounded per entry (0-100)
    pub percentage: u32,

    /// Position in the palette cycle
    pub color_index: usize,

    /// Lower-cased asset type
    pub category: String,
}

impl AllocationEntry {
    pub fn color(&self) -> &'static str {
        palette_color(self.color_index)
    }
}

/// Summary and allocations computed from the same holdings, always handed
/// out together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub summary: PortfolioSummary,
    pub allocations: Vec<AllocationEntry>,
}

/// Allocation rolled up per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub percentage: u32,
    pub amount: f64,
}

/// Equity / debt / everything-else split shown under the donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub equity: u32,
    pub debt: u32,
    pub other: u32,
}
