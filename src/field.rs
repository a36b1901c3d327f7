use crate::field_class::FieldClass;

/// Number of fields in a claim record
pub const RECORD_WIDTH: usize = 5;

/// Defines a checked field in a claim record.
///
/// # Examples
/// ```
/// use pharmacy_counting::field::Field;
/// use pharmacy_counting::field_class::FieldClass;
/// let field = Field::new(5, FieldClass::Number).with_str_name("drug cost");
/// assert_eq!(field.index(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    index: usize,
    field_class: FieldClass,
}

impl Field {
    /// Create a new [Field]
    ///
    /// # Arguments
    /// * `index` - the index of the field, starting at 1
    /// * `field_class` - the character class the field must belong to
    pub fn new(index: usize, field_class: FieldClass) -> Field {
        Field {
            name: String::new(),
            index,
            field_class,
        }
    }

    /// Get the name for this field.
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Get the index for this field.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the [FieldClass] for this field.
    pub fn field_class(&self) -> FieldClass {
        self.field_class
    }

    /// Specify a name for this field
    pub fn with_name(mut self, name: String) -> Field {
        self.name = name;
        self
    }

    /// Specify a name for this field as &str
    pub fn with_str_name(mut self, name: &str) -> Field {
        self.name = name.to_string();
        self
    }
}

/// The checked positions of a claim record: prescriber id, last name, first name and drug cost.
/// The drug name is not checked.
pub fn claim_fields() -> Vec<Field> {
    vec![
        Field::new(1, FieldClass::Integer).with_str_name("prescriber id"),
        Field::new(2, FieldClass::Alphabetic).with_str_name("prescriber last name"),
        Field::new(3, FieldClass::Alphabetic).with_str_name("prescriber first name"),
        Field::new(5, FieldClass::Number).with_str_name("drug cost"),
    ]
}
