use crate::aggregator::PrescriberKey;

/// A validated claim line
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimRecord {
    id: String,
    last_name: String,
    first_name: String,
    drug_name: String,
    cost: f64,
}

impl ClaimRecord {
    pub fn new(id: String, last_name: String, first_name: String, drug_name: String, cost: f64) -> ClaimRecord {
        ClaimRecord {
            id,
            last_name,
            first_name,
            drug_name,
            cost,
        }
    }

    pub fn id(&self) -> &String {
        &self.id
    }

    pub fn last_name(&self) -> &String {
        &self.last_name
    }

    pub fn first_name(&self) -> &String {
        &self.first_name
    }

    pub fn drug_name(&self) -> &String {
        &self.drug_name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn prescriber(&self) -> PrescriberKey {
        PrescriberKey::new(self.last_name.clone(), self.first_name.clone())
    }
}
