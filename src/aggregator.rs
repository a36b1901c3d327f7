use std::collections::{HashMap, HashSet};

use crate::record::ClaimRecord;

/// Identity of a prescriber within one drug: last name and first name, case sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrescriberKey {
    last_name: String,
    first_name: String,
}

impl PrescriberKey {
    pub fn new(last_name: String, first_name: String) -> PrescriberKey {
        PrescriberKey {
            last_name,
            first_name,
        }
    }

    pub fn last_name(&self) -> &String {
        &self.last_name
    }

    pub fn first_name(&self) -> &String {
        &self.first_name
    }
}

/// Compensated running sum. Values are accumulated in arrival order so the same input always
/// produces the same total.
#[derive(Clone, Debug, Default)]
struct CostSum {
    sum: f64,
    compensation: f64,
}

impl CostSum {
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if !t.is_finite() {
            // the correction term of an overflowed sum is not a number
            self.sum = t;
            return;
        }
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    fn total(&self) -> f64 {
        if self.sum.is_finite() {
            self.sum + self.compensation
        } else {
            self.sum
        }
    }
}

/// Statistics collected for a single drug
#[derive(Clone, Debug, Default)]
pub struct CategoryStats {
    prescribers: HashSet<PrescriberKey>,
    cost: CostSum,
}

impl CategoryStats {
    /// Number of distinct prescribers seen for this drug.
    pub fn prescriber_count(&self) -> usize {
        self.prescribers.len()
    }

    /// Sum of every cost seen for this drug, repeated prescribers included.
    pub fn total_cost(&self) -> f64 {
        self.cost.total()
    }

    pub fn contains(&self, prescriber: &PrescriberKey) -> bool {
        self.prescribers.contains(prescriber)
    }
}

/// Per drug statistics keyed by the upper case drug name. Read only once built by [Aggregator].
#[derive(Clone, Debug, Default)]
pub struct AggregationTable {
    categories: HashMap<String, CategoryStats>,
}

impl AggregationTable {
    pub fn get(&self, name: &str) -> Option<&CategoryStats> {
        self.categories.get(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over drug names and their statistics in no particular order.
    pub fn iter(&self) -> impl Iterator<Item=(&String, &CategoryStats)> {
        self.categories.iter()
    }
}

/// Folds validated records into an [AggregationTable].
///
/// # Examples
/// ```
/// use pharmacy_counting::aggregator::Aggregator;
/// use pharmacy_counting::record::ClaimRecord;
///
/// let mut aggregator = Aggregator::new();
/// aggregator.add(&ClaimRecord::new("1".into(), "Smith".into(), "Jane".into(), "Aspirin".into(), 10.0));
/// aggregator.add(&ClaimRecord::new("2".into(), "Smith".into(), "Jane".into(), "aspirin".into(), 3.0));
/// let table = aggregator.finish();
/// assert_eq!(table.get("ASPIRIN").unwrap().prescriber_count(), 1);
/// assert_eq!(table.get("ASPIRIN").unwrap().total_cost(), 13.0);
/// ```
#[derive(Debug, Default)]
pub struct Aggregator {
    table: AggregationTable,
    records: usize,
}

impl Aggregator {
    pub fn new() -> Aggregator {
        Aggregator::default()
    }

    /// Add one record: the drug name is upper cased, the prescriber joins the drug's set of
    /// prescribers and the cost is always added to the drug's total.
    pub fn add(&mut self, record: &ClaimRecord) {
        let stats = self.table.categories
            .entry(record.drug_name().to_uppercase())
            .or_default();
        stats.prescribers.insert(record.prescriber());
        stats.cost.add(record.cost());
        self.records += 1;
    }

    /// Number of records added so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn finish(self) -> AggregationTable {
        self.table
    }
}

impl<'a> FromIterator<&'a ClaimRecord> for AggregationTable {
    fn from_iter<T: IntoIterator<Item=&'a ClaimRecord>>(iter: T) -> Self {
        let mut aggregator = Aggregator::new();
        for record in iter {
            aggregator.add(record);
        }
        aggregator.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregator::{AggregationTable, PrescriberKey};
    use crate::record::ClaimRecord;

    fn record(id: &str, last: &str, first: &str, drug: &str, cost: f64) -> ClaimRecord {
        ClaimRecord::new(id.to_string(), last.to_string(), first.to_string(), drug.to_string(), cost)
    }

    fn sample() -> Vec<ClaimRecord> {
        vec![
            record("1", "Smith", "Jane", "Aspirin", 10.0),
            record("2", "Doe", "John", "Aspirin", 5.0),
            record("3", "Smith", "Jane", "Aspirin", 3.0),
            record("4", "Lee", "Ann", "Vitamin, D", 7.5),
        ]
    }

    #[test]
    fn test_sample() {
        let table: AggregationTable = sample().iter().collect();
        assert_eq!(table.len(), 2);
        let aspirin = table.get("ASPIRIN").unwrap();
        assert_eq!(aspirin.prescriber_count(), 2);
        assert_eq!(aspirin.total_cost(), 18.0);
        assert!(aspirin.contains(&PrescriberKey::new("Doe".to_string(), "John".to_string())));
        let vitamin = table.get("VITAMIN, D").unwrap();
        assert_eq!(vitamin.prescriber_count(), 1);
        assert_eq!(vitamin.total_cost(), 7.5);
    }

    #[test]
    fn test_prescriber_identity_is_case_sensitive() {
        let records = vec![
            record("1", "Smith", "Jane", "Aspirin", 1.0),
            record("2", "SMITH", "Jane", "Aspirin", 1.0),
            record("3", "Smith", "Jane", "ASPIRIN", 1.0),
        ];
        let table: AggregationTable = records.iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ASPIRIN").unwrap().prescriber_count(), 2);
    }

    #[test]
    fn test_prescriber_not_shared_across_drugs() {
        let records = vec![
            record("1", "Smith", "Jane", "Aspirin", 1.0),
            record("1", "Smith", "Jane", "Ambien", 2.0),
        ];
        let table: AggregationTable = records.iter().collect();
        assert_eq!(table.get("ASPIRIN").unwrap().prescriber_count(), 1);
        assert_eq!(table.get("AMBIEN").unwrap().prescriber_count(), 1);
    }

    #[test]
    fn test_order_independent_counts() {
        let mut records = sample();
        let forward: AggregationTable = records.iter().collect();
        records.reverse();
        let backward: AggregationTable = records.iter().collect();
        for (name, stats) in forward.iter() {
            let other = backward.get(name).unwrap();
            assert_eq!(stats.prescriber_count(), other.prescriber_count());
            assert_eq!(format!("{:.2}", stats.total_cost()), format!("{:.2}", other.total_cost()));
        }
    }

    #[test]
    fn test_compensated_sum() {
        let records: Vec<ClaimRecord> = (0..10)
            .map(|i| record(&i.to_string(), "Smith", "Jane", "Aspirin", 0.1))
            .collect();
        let table: AggregationTable = records.iter().collect();
        assert_eq!(table.get("ASPIRIN").unwrap().total_cost(), 1.0);
    }

    #[test]
    fn test_overflowing_sum_is_not_nan() {
        let records = vec![
            record("1", "Smith", "Jane", "Aspirin", 1e308),
            record("2", "Smith", "Jane", "Aspirin", 1e308),
            record("3", "Smith", "Jane", "Aspirin", 1.0),
        ];
        let table: AggregationTable = records.iter().collect();
        let total = table.get("ASPIRIN").unwrap().total_cost();
        assert!(!total.is_nan());
        assert_eq!(total, f64::INFINITY);
        assert!(total >= 0.0);
    }

    #[test]
    fn test_empty() {
        let table: AggregationTable = Vec::<ClaimRecord>::new().iter().collect();
        assert!(table.is_empty());
    }
}
