/// A car described only by its attributes.
///
/// Note: fields are public on purpose. This is the "attributes and classes" sample,
/// where the caller creates an empty car and fills it in field by field.
/// Compare with [`crate::Student`], which hides its fields behind accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub brand: String,
    pub colour: String,
    pub horsepower: i32,
}

impl Car {
    /// Create a car with empty strings and zero horsepower.
    pub fn new() -> Self {
        Self::default()
    }
}
