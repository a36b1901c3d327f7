use std::cmp::Ordering;

/// Sort key of one drug in the report.
///
/// Orders by decreasing total cost, then by increasing normalized name and finally by the name
/// itself, so two drugs never compare equal unless they share a name.
#[derive(Debug, Clone)]
pub(crate) struct RankKey {
    total_cost: f64,
    normalized: String,
    name: String,
}

impl RankKey {
    pub(crate) fn new(total_cost: f64, normalized: String, name: String) -> RankKey {
        RankKey {
            total_cost,
            normalized,
            name,
        }
    }

    pub(crate) fn name(self) -> String {
        self.name
    }
}

impl Eq for RankKey {}

impl PartialEq<Self> for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN sorts last
        let cost = match (self.total_cost.is_nan(), other.total_cost.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => other.total_cost.total_cmp(&self.total_cost),
        };
        cost
            .then_with(|| self.normalized.cmp(&other.normalized))
            .then_with(|| self.name.cmp(&other.name))
    }
}
