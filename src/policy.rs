use crate::errors::ReportError;
use crate::field::{Field, RECORD_WIDTH};
use crate::record::ClaimRecord;

/// Punctuation skipped by [ValidationPolicy::Lenient] before a field's class is checked
pub const LENIENT_EXEMPT: [char; 4] = [' ', '-', '\'', '.'];

/// How strictly the checked fields of a record are held to their [FieldClass](crate::field_class::FieldClass)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Ids and costs are digits only (a cost may carry one decimal point), names are letters only
    Strict,
    /// Like [ValidationPolicy::Strict] but space, hyphen, apostrophe and period are ignored, so
    /// names such as `O'Brien` or `Smith-Jones` are accepted
    #[default]
    Lenient,
}

impl ValidationPolicy {
    /// Characters ignored by the class check under this policy.
    pub fn exempt_chars(&self) -> &'static [char] {
        match self {
            ValidationPolicy::Strict => &[],
            ValidationPolicy::Lenient => &LENIENT_EXEMPT,
        }
    }

    /// Check a split line and convert it into a [ClaimRecord].
    ///
    /// Fails with [ReportError::Structural] when the line does not have exactly
    /// [RECORD_WIDTH] fields and with [ReportError::Content] when a checked field is outside
    /// its class or the cost is not a non negative number.
    pub fn validate(&self, values: Vec<String>, fields: &[Field]) -> Result<ClaimRecord, ReportError> {
        let id = values.first().cloned().unwrap_or_default();
        if values.len() != RECORD_WIDTH {
            return Err(
                ReportError::Structural {
                    id,
                    count: values.len(),
                    expected: RECORD_WIDTH,
                }
            );
        }

        for field in fields {
            let value = match field.index().checked_sub(1).and_then(|i| values.get(i)) {
                Some(value) => value,
                None => continue,
            };
            if !field.field_class().admits(value, self.exempt_chars()) {
                return Err(content_error(&id, field.name(), value, field.field_class().describe()));
            }
        }

        let cost = values[4].trim().parse::<f64>()
            .ok()
            .filter(|cost| cost.is_finite() && *cost >= 0.0)
            // -0 becomes 0
            .map(f64::abs)
            .ok_or_else(|| content_error(&id, "drug cost", &values[4], "a non negative number"))?;

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(ClaimRecord::new(next(), next(), next(), next(), cost))
    }
}

fn content_error(id: &str, field: &str, value: &str, class: &str) -> ReportError {
    ReportError::Content {
        id: id.to_string(),
        field: field.to_string(),
        value: value.to_string(),
        class: class.to_string(),
    }
}
