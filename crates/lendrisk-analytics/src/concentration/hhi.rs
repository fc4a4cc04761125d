//! Daily HHI computation and calendar densification.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use lendrisk_core::{DailyConcentration, DailyDebtRecord};
use log::debug;

/// Computes the Herfindahl-Hirschman Index over a set of debt amounts.
///
/// Returns `(hhi, hhi_ideal)` where `hhi` is the sum of squared amounts
/// and `hhi_ideal` is the HHI the same total would produce if split evenly
/// across the same number of borrowers: `total² / n`.
///
/// Degenerate distributions (no borrowers, or zero total debt) yield
/// `(0.0, 0.0)`.
#[must_use]
pub fn hhi(borrower_debts: &[f64]) -> (f64, f64) {
    if borrower_debts.is_empty() {
        return (0.0, 0.0);
    }
    let total: f64 = borrower_debts.iter().sum();
    if total == 0.0 {
        return (0.0, 0.0);
    }

    let hhi = borrower_debts.iter().map(|d| d * d).sum();
    let hhi_ideal = total * total / borrower_debts.len() as f64;
    (hhi, hhi_ideal)
}

/// Computes densified daily concentration over a debt panel.
///
/// Groups panel records by date, computes HHI and ideal HHI per date, then
/// reindexes the result to every calendar day between the first and last
/// panel date (inclusive), forward-filling gaps: a day with no panel entry
/// is assumed unchanged from the last known state.
#[must_use]
pub fn daily_concentration(panel: &[DailyDebtRecord]) -> Vec<DailyConcentration> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for record in panel {
        by_date.entry(record.date).or_default().push(record.debt_amount);
    }

    debug!("computing daily concentration over {} panel dates", by_date.len());

    let sparse: Vec<DailyConcentration> = by_date
        .into_iter()
        .map(|(date, debts)| {
            let (hhi_value, hhi_ideal) = hhi(&debts);
            DailyConcentration::new(date, hhi_value, hhi_ideal)
        })
        .collect();

    forward_fill_daily(&sparse)
}

/// Reindexes a date-sorted concentration series to every calendar day in
/// its range, forward-filling missing days from the prior known value.
#[must_use]
pub fn forward_fill_daily(series: &[DailyConcentration]) -> Vec<DailyConcentration> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    let last_date = series[series.len() - 1].date;

    let mut filled = Vec::new();
    let mut cursor = 0usize;
    let mut current = *first;
    let mut date = first.date;
    while date <= last_date {
        while cursor < series.len() && series[cursor].date <= date {
            current = series[cursor];
            cursor += 1;
        }
        filled.push(DailyConcentration::new(date, current.hhi, current.hhi_ideal));
        date = date + Duration::days(1);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_hhi_even_distribution_matches_ideal() {
        // n entities with equal debt d: hhi == hhi_ideal == n * d²
        let debts = vec![250.0; 4];
        let (h, ideal) = hhi(&debts);
        assert_relative_eq!(h, 4.0 * 250.0 * 250.0);
        assert_relative_eq!(ideal, 4.0 * 250.0 * 250.0);
        assert_relative_eq!(h / ideal, 1.0);
    }

    #[test]
    fn test_hhi_uneven_distribution() {
        let (h, ideal) = hhi(&[50.0, 150.0]);
        assert_relative_eq!(h, 25_000.0);
        assert_relative_eq!(ideal, 20_000.0);
    }

    #[test]
    fn test_hhi_degenerate() {
        assert_eq!(hhi(&[]), (0.0, 0.0));
        assert_eq!(hhi(&[0.0, 0.0]), (0.0, 0.0));
    }

    #[test]
    fn test_daily_concentration_two_entities() {
        let panel = vec![
            DailyDebtRecord::new("A", date(1), 50.0),
            DailyDebtRecord::new("B", date(1), 150.0),
            DailyDebtRecord::new("B", date(2), 150.0),
        ];
        let daily = daily_concentration(&panel);

        assert_eq!(daily.len(), 2);
        assert_relative_eq!(daily[0].hhi, 25_000.0);
        assert_relative_eq!(daily[0].hhi_ideal, 20_000.0);
        assert_relative_eq!(daily[1].hhi, 22_500.0);
        assert_relative_eq!(daily[1].hhi_ideal, 22_500.0);
    }

    #[test]
    fn test_forward_fill_covers_calendar_gaps() {
        let sparse = vec![
            DailyConcentration::new(date(1), 100.0, 80.0),
            DailyConcentration::new(date(5), 200.0, 160.0),
        ];
        let filled = forward_fill_daily(&sparse);

        assert_eq!(filled.len(), 5);
        for (i, c) in filled.iter().enumerate() {
            assert_eq!(c.date, date(1) + Duration::days(i as i64));
        }
        assert_relative_eq!(filled[1].hhi, 100.0);
        assert_relative_eq!(filled[3].hhi, 100.0);
        assert_relative_eq!(filled[4].hhi, 200.0);
    }

    #[test]
    fn test_forward_fill_empty() {
        assert!(forward_fill_daily(&[]).is_empty());
    }

    #[test]
    fn test_daily_concentration_densifies() {
        let panel = vec![
            DailyDebtRecord::new("A", date(1), 10.0),
            DailyDebtRecord::new("A", date(4), 20.0),
        ];
        let daily = daily_concentration(&panel);
        assert_eq!(daily.len(), 4);
        assert_relative_eq!(daily[2].hhi, 100.0);
        assert_relative_eq!(daily[3].hhi, 400.0);
    }
}
