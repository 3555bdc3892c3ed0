use crate::domain::model::{CountryTotals, MedalRecord};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Distinct country codes in the order they first appear.
pub fn distinct_countries(records: &[MedalRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut countries = Vec::new();

    for record in records {
        if seen.insert(record.country.as_str()) {
            countries.push(record.country.as_str());
        }
    }

    countries
}

/// One `CountryTotals` per distinct country, in first-seen order.
pub fn aggregate(records: &[MedalRecord]) -> Vec<CountryTotals> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CountryTotals> = Vec::new();

    for record in records {
        let slot = *index.entry(record.country.as_str()).or_insert_with(|| {
            totals.push(CountryTotals::new(record.country.as_str()));
            totals.len() - 1
        });
        totals[slot].add(record.medal);
    }

    tracing::debug!(
        "Aggregated {} records into {} countries",
        records.len(),
        totals.len()
    );
    totals
}

/// Orders by total, then gold, silver and bronze, all descending.
///
/// The sort is stable, so countries equal on every count keep their input order.
pub fn rank(mut totals: Vec<CountryTotals>) -> Vec<CountryTotals> {
    totals.sort_by_key(|t| Reverse(t.rank_key()));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Gender, Medal};

    fn totals(country: &str, gold: u32, silver: u32, bronze: u32) -> CountryTotals {
        CountryTotals {
            country: country.to_string(),
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }

    #[test]
    fn test_aggregate_counts_each_medal_kind() {
        let records = vec![
            MedalRecord::new(Medal::Gold, "GUA", Gender::M),
            MedalRecord::new(Medal::Bronze, "GUA", Gender::W),
            MedalRecord::new(Medal::Silver, "QAT", Gender::M),
            MedalRecord::new(Medal::Gold, "GUA", Gender::X),
        ];

        let result = aggregate(&records);

        assert_eq!(result, vec![totals("GUA", 2, 0, 1), totals("QAT", 0, 1, 0)]);
        for t in &result {
            assert_eq!(t.total, t.gold + t.silver + t.bronze);
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
        assert!(distinct_countries(&[]).is_empty());
    }

    #[test]
    fn test_distinct_countries_keeps_first_seen_order() {
        let records = vec![
            MedalRecord::new(Medal::Bronze, "GUA", Gender::M),
            MedalRecord::new(Medal::Gold, "QAT", Gender::W),
            MedalRecord::new(Medal::Bronze, "GUA", Gender::M),
            MedalRecord::new(Medal::Bronze, "CIV", Gender::M),
        ];

        assert_eq!(distinct_countries(&records), vec!["GUA", "QAT", "CIV"]);
    }

    #[test]
    fn test_rank_by_total() {
        let ranked = rank(vec![
            totals("BEL", 3, 1, 6),
            totals("ITA", 12, 13, 15),
            totals("AUS", 18, 19, 16),
        ]);

        let order: Vec<&str> = ranked.iter().map(|t| t.country.as_str()).collect();
        assert_eq!(order, vec!["AUS", "ITA", "BEL"]);
    }

    #[test]
    fn test_rank_tie_breaks_and_stability() {
        let ranked = rank(vec![
            totals("AAA", 1, 1, 1),
            totals("BBB", 1, 2, 0),
            totals("CCC", 2, 0, 1),
            totals("DDD", 1, 1, 1),
            totals("EEE", 1, 0, 2),
        ]);

        let order: Vec<&str> = ranked.iter().map(|t| t.country.as_str()).collect();
        assert_eq!(order, vec!["CCC", "BBB", "AAA", "DDD", "EEE"]);

        for pair in ranked.windows(2) {
            assert!(pair[0].rank_key() >= pair[1].rank_key());
        }
    }
}
