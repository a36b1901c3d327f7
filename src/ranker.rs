use crate::aggregator::AggregationTable;
use crate::key::RankKey;
use crate::normalize_mode::NormalizeMode;
use crate::safe_chars::SafeChars;

/// Order the drugs of `table` by decreasing total cost, then by their name normalized with
/// `mode`, then by the name itself.
///
/// # Examples
/// ```
/// use pharmacy_counting::aggregator::Aggregator;
/// use pharmacy_counting::normalize_mode::NormalizeMode;
/// use pharmacy_counting::ranker::rank;
/// use pharmacy_counting::record::ClaimRecord;
/// use pharmacy_counting::safe_chars::SafeChars;
///
/// let mut aggregator = Aggregator::new();
/// aggregator.add(&ClaimRecord::new("1".into(), "Lee".into(), "Ann".into(), "Vitamin, D".into(), 7.5));
/// aggregator.add(&ClaimRecord::new("2".into(), "Doe".into(), "John".into(), "Aspirin".into(), 18.0));
/// let order = rank(&aggregator.finish(), NormalizeMode::Full, &SafeChars::default());
/// assert_eq!(order, vec!["ASPIRIN", "VITAMIN, D"]);
/// ```
pub fn rank(table: &AggregationTable, mode: NormalizeMode, safe_chars: &SafeChars) -> Vec<String> {
    let mut keys: Vec<RankKey> = table
        .iter()
        .map(|(name, stats)| {
            RankKey::new(
                stats.total_cost(),
                mode.normalize(name, safe_chars),
                name.clone(),
            )
        })
        .collect();
    keys.sort_unstable();
    keys.into_iter().map(RankKey::name).collect()
}
