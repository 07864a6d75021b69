use crate::data::{DataError, DataTable};
use crate::domain::{fan_columns, Tier};
use serde::Serialize;

pub const HISTOGRAM_BINS: usize = 20;

/// Headline numbers of the overview section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStats {
    pub total_fans: usize,
    /// Mean over the scores present; `None` when there are none.
    pub mean_score: Option<f64>,
    /// Share of rows tagged Premium, in `[0, 100]`. `None` when the table is empty.
    pub premium_pct: Option<f64>,
}

impl OverviewStats {
    pub fn compute(fans: &DataTable) -> Result<Self, DataError> {
        let scores = present(fans.optional_numeric_column(fan_columns::SCORE)?);
        let tiers = fans.column(fan_columns::TIER)?;
        let total = fans.len();

        if total == 0 {
            return Ok(Self {
                total_fans: 0,
                mean_score: None,
                premium_pct: None,
            });
        }

        let premium = tiers
            .iter()
            .filter(|tier| **tier == Tier::Premium.as_str())
            .count();

        Ok(Self {
            total_fans: total,
            mean_score: mean(&scores),
            premium_pct: Some(premium as f64 / total as f64 * 100.0),
        })
    }

    pub fn total_label(&self) -> String {
        format_thousands(self.total_fans)
    }

    pub fn mean_label(&self) -> String {
        self.mean_score
            .map_or_else(|| "n/a".to_string(), |mean| format!("{mean:.1}"))
    }

    pub fn premium_label(&self) -> String {
        self.premium_pct
            .map_or_else(|| "n/a".to_string(), |pct| format!("{pct:.1}%"))
    }
}

fn present(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().flatten().collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Equal-width bins over `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Returns `None` for an empty input. When every value is equal all of
    /// them land in the first bin.
    pub fn build(values: &[f64], bins: usize) -> Option<Self> {
        let bins = bins.max(1);
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;
        let bin_width = (max - min) / bins as f64;

        let mut counts = vec![0_u64; bins];
        for value in values {
            counts[bin_index(*value, min, bin_width, bins)] += 1;
        }

        Some(Self {
            min,
            max,
            bin_width,
            counts,
        })
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Lower edge of bin `index`.
    pub fn lower_edge(&self, index: usize) -> f64 {
        (index as f64).mul_add(self.bin_width, self.min)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(value: f64, min: f64, width: f64, bins: usize) -> usize {
    if width <= 0.0 {
        return 0;
    }
    let raw = ((value - min) / width).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(bins - 1)
    }
}

/// Histogram of the scores present; blank cells are left out.
pub fn score_histogram(fans: &DataTable) -> Result<Option<Histogram>, DataError> {
    let scores = present(fans.optional_numeric_column(fan_columns::SCORE)?);
    Ok(Histogram::build(&scores, HISTOGRAM_BINS))
}

/// One slice of the tier breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierShare {
    pub label: String,
    pub count: usize,
    pub pct: f64,
}

/// Count of each distinct tier label, largest first; ties keep first appearance.
pub fn tier_breakdown(fans: &DataTable) -> Result<Vec<TierShare>, DataError> {
    let tiers = fans.column(fan_columns::TIER)?;
    let total = tiers.len();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tier in tiers {
        match counts.iter_mut().find(|(label, _)| *label == tier) {
            Some((_, count)) => *count += 1,
            None => counts.push((tier, 1)),
        }
    }
    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts
        .into_iter()
        .map(|(label, count)| TierShare {
            label: label.to_string(),
            count,
            pct: count as f64 / total as f64 * 100.0,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fans(rows: &[(&str, f64, &str)]) -> DataTable {
        DataTable::new(
            "fan_data.csv",
            vec!["Fan_ID".into(), "Fan_Score".into(), "Nivel_Fan".into()],
            rows.iter()
                .map(|(id, score, tier)| vec![(*id).to_string(), score.to_string(), (*tier).to_string()])
                .collect(),
        )
    }

    fn hundred_fans_twenty_premium() -> DataTable {
        let rows: Vec<(String, f64, &str)> = (0..100)
            .map(|i| {
                let tier = if i < 20 { "Premium" } else { "Medio" };
                (format!("F{i:03}"), f64::from(i), tier)
            })
            .collect();
        let borrowed: Vec<(&str, f64, &str)> = rows
            .iter()
            .map(|(id, score, tier)| (id.as_str(), *score, *tier))
            .collect();
        fans(&borrowed)
    }

    #[test]
    fn premium_share_of_hundred_rows() -> Result<(), DataError> {
        let stats = OverviewStats::compute(&hundred_fans_twenty_premium())?;

        assert_eq!(stats.total_fans, 100);
        assert_eq!(stats.premium_label(), "20.0%");
        assert_eq!(stats.mean_label(), "49.5");
        assert_eq!(stats.total_label(), "100");
        Ok(())
    }

    #[test]
    fn premium_share_without_premium_rows_is_zero() -> Result<(), DataError> {
        let stats = OverviewStats::compute(&fans(&[("a", 1.0, "Bajo"), ("b", 3.0, "Alto")]))?;

        assert_eq!(stats.premium_pct, Some(0.0));
        assert_eq!(stats.mean_score, Some(2.0));
        Ok(())
    }

    #[test]
    fn empty_table_has_no_mean_or_share() -> Result<(), DataError> {
        let stats = OverviewStats::compute(&fans(&[]))?;

        assert_eq!(stats.total_fans, 0);
        assert_eq!(stats.mean_label(), "n/a");
        assert_eq!(stats.premium_label(), "n/a");
        Ok(())
    }

    #[test]
    fn blank_scores_are_left_out_of_mean_and_histogram() -> Result<(), DataError> {
        let table = DataTable::new(
            "fan_data.csv",
            vec!["Fan_ID".into(), "Fan_Score".into(), "Nivel_Fan".into()],
            vec![
                vec!["a".into(), "10".into(), "Premium".into()],
                vec!["b".into(), String::new(), "Bajo".into()],
                vec!["c".into(), "nan".into(), "Bajo".into()],
                vec!["d".into(), "30".into(), "Alto".into()],
            ],
        );

        let stats = OverviewStats::compute(&table)?;
        assert_eq!(stats.total_fans, 4);
        assert_eq!(stats.mean_score, Some(20.0));
        assert_eq!(stats.premium_pct, Some(25.0));

        let Some(histogram) = score_histogram(&table)? else {
            panic!("two present scores must produce a histogram");
        };
        assert_eq!(histogram.total(), 2);
        Ok(())
    }

    #[test]
    fn all_blank_scores_have_no_mean() -> Result<(), DataError> {
        let table = DataTable::new(
            "fan_data.csv",
            vec!["Fan_ID".into(), "Fan_Score".into(), "Nivel_Fan".into()],
            vec![vec!["a".into(), String::new(), "Premium".into()]],
        );

        let stats = OverviewStats::compute(&table)?;
        assert_eq!(stats.mean_label(), "n/a");
        assert_eq!(stats.premium_label(), "100.0%");
        assert!(score_histogram(&table)?.is_none());
        Ok(())
    }

    #[test]
    fn premium_share_stays_within_bounds() -> Result<(), DataError> {
        let all_premium = fans(&[("a", 1.0, "Premium"), ("b", 2.0, "Premium")]);
        let stats = OverviewStats::compute(&all_premium)?;
        assert_eq!(stats.premium_pct, Some(100.0));
        Ok(())
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn histogram_has_twenty_bins_and_counts_everything() -> Result<(), DataError> {
        let Some(histogram) = score_histogram(&hundred_fans_twenty_premium())? else {
            panic!("expected a histogram for a non-empty table");
        };

        assert_eq!(histogram.counts.len(), HISTOGRAM_BINS);
        assert_eq!(histogram.total(), 100);
        assert!(histogram.counts.iter().all(|count| *count == 5));
        Ok(())
    }

    #[test]
    fn histogram_puts_max_in_last_bin() {
        let Some(histogram) = Histogram::build(&[0.0, 10.0], 4) else {
            panic!("non-empty input must produce a histogram");
        };
        assert_eq!(histogram.counts, vec![1, 0, 0, 1]);
        assert!((histogram.lower_edge(2) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_of_constant_values_uses_first_bin() {
        let Some(histogram) = Histogram::build(&[3.0, 3.0, 3.0], 20) else {
            panic!("non-empty input must produce a histogram");
        };
        assert_eq!(histogram.counts[0], 3);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn histogram_of_nothing_is_none() {
        assert!(Histogram::build(&[], 20).is_none());
    }

    #[test]
    fn tier_breakdown_orders_by_count() -> Result<(), DataError> {
        let table = fans(&[
            ("a", 1.0, "Bajo"),
            ("b", 1.0, "Premium"),
            ("c", 1.0, "Premium"),
            ("d", 1.0, "Alto"),
        ]);

        let shares = tier_breakdown(&table)?;
        let labels: Vec<&str> = shares.iter().map(|share| share.label.as_str()).collect();
        assert_eq!(labels, ["Premium", "Bajo", "Alto"]);
        assert!((shares[0].pct - 50.0).abs() < f64::EPSILON);
        assert_eq!(shares.iter().map(|share| share.count).sum::<usize>(), 4);
        Ok(())
    }
}
