use crate::errors::CoreError;
use crate::models::holding::{HoldingGain, HoldingRecord};
use crate::models::portfolio::{
    AllocationEntry, CategoryBreakdown, CategoryTotal, PortfolioSnapshot, PortfolioSummary,
    PALETTE_SIZE,
};

/// Turns a raw holdings list into a portfolio summary plus per-scheme allocations.
///
/// Pure business logic: no I/O and no shared state.
pub struct PortfolioAggregator;

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh snapshot from `holdings`.
    ///
    /// 1. Reject negative or non-finite magnitudes, and totals that overflow
    /// 2. Drop zero-weight holdings (no cost and no market value)
    /// 3. Sum cost and market value, derive gain/loss (0 % when nothing invested)
    /// 4. Give every kept holding a rounded share of market value, a palette
    ///    slot by position and a lower-cased category
    ///
    /// Percentages are rounded independently, so they may sum to 100 ± (n - 1).
    pub fn normalize(&self, holdings: &[HoldingRecord]) -> Result<PortfolioSnapshot, CoreError> {
        for holding in holdings {
            Self::validate_holding(holding)?;
        }

        let included: Vec<&HoldingRecord> =
            holdings.iter().filter(|h| !h.is_zero_weight()).collect();

        let excluded = holdings.len() - included.len();
        if excluded > 0 {
            log::debug!("Excluded {excluded} zero-weight holding(s) from allocation");
        }

        let total_investment: f64 = included.iter().map(|h| h.cost_value).sum();
        let current_value: f64 = included.iter().map(|h| h.current_mkt_value).sum();
        if !total_investment.is_finite() || !current_value.is_finite() {
            return Err(CoreError::invalid(format!(
                "portfolio totals overflow ({} holding(s))",
                included.len()
            )));
        }
        let total_gain_loss = current_value - total_investment;
        let gain_loss_percentage = if total_investment > 0.0 {
            total_gain_loss / total_investment * 100.0
        } else {
            0.0
        };

        let allocations = included
            .iter()
            .enumerate()
            .map(|(index, h)| AllocationEntry {
                key: h.list_key(),
                label: h.scheme_name.clone(),
                amount: h.current_mkt_value,
                percentage: Self::share_of(h.current_mkt_value, current_value),
                color_index: index % PALETTE_SIZE,
                category: h.category(),
            })
            .collect();

        Ok(PortfolioSnapshot {
            summary: PortfolioSummary {
                total_investment,
                current_value,
                total_gain_loss,
                gain_loss_percentage,
            },
            allocations,
        })
    }

    /// Recompute gain/loss for a single holding, ignoring the upstream fields.
    pub fn holding_gain(&self, holding: &HoldingRecord) -> HoldingGain {
        let gain_loss = holding.current_mkt_value - holding.cost_value;
        let gain_loss_percentage = if holding.cost_value > 0.0 {
            gain_loss / holding.cost_value * 100.0
        } else {
            0.0
        };
        HoldingGain {
            gain_loss,
            gain_loss_percentage,
        }
    }

    /// Roll allocations up per category, in order of first appearance.
    pub fn category_totals(&self, allocations: &[AllocationEntry]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for entry in allocations {
            match totals.iter_mut().find(|t| t.category == entry.category) {
                Some(total) => {
                    total.percentage += entry.percentage;
                    total.amount += entry.amount;
                }
                None => totals.push(CategoryTotal {
                    category: entry.category.clone(),
                    percentage: entry.percentage,
                    amount: entry.amount,
                }),
            }
        }
        totals
    }

    /// Equity / debt / other split of the allocation percentages.
    pub fn category_breakdown(&self, allocations: &[AllocationEntry]) -> CategoryBreakdown {
        allocations
            .iter()
            .fold(CategoryBreakdown::default(), |mut acc, entry| {
                match entry.category.as_str() {
                    "equity" => acc.equity += entry.percentage,
                    "debt" => acc.debt += entry.percentage,
                    _ => acc.other += entry.percentage,
                }
                acc
            })
    }

    // ── Internal ────────────────────────────────────────────────────

    fn validate_holding(holding: &HoldingRecord) -> Result<(), CoreError> {
        for (field, value) in [
            ("costValue", holding.cost_value),
            ("currentMktValue", holding.current_mkt_value),
        ] {
            if !value.is_finite() {
                return Err(CoreError::invalid(format!(
                    "{field} of '{}' is not a finite number",
                    holding.scheme_name
                )));
            }
            if value < 0.0 {
                return Err(CoreError::invalid(format!(
                    "{field} of '{}' is negative ({value})",
                    holding.scheme_name
                )));
            }
        }
        Ok(())
    }

    fn share_of(amount: f64, total: f64) -> u32 {
        if total > 0.0 {
            // amount <= total, so the rounded share fits in 0..=100
            (amount / total * 100.0).round() as u32
        } else {
            0
        }
    }
}

impl Default for PortfolioAggregator {
    fn default() -> Self {
        Self::new()
    }
}
