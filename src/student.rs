use std::fmt;

/// Name given to a student created with [`Student::with_defaults`].
pub const DEFAULT_NAME: &str = "Pathum";
/// Age given to a student created with [`Student::with_defaults`].
pub const DEFAULT_AGE: i32 = 21;
/// Gender given to a student created with [`Student::with_defaults`].
pub const DEFAULT_GENDER: &str = "Male";

/// A student record with encapsulated fields.
///
/// Fields can only be read and changed through accessor methods. There are three ways
/// to build one:
/// - [`Student::with_defaults`]: preset values (`"Pathum"`, `21`, `"Male"`);
/// - [`Student::new`]: values supplied by the caller, taken as is;
/// - [`Student::empty`] (or [`Default`]): empty strings and zero, to be filled in with setters.
///
/// No value is validated: negative ages and empty names are accepted.
///
/// Example
/// ```
/// use oop_samples::Student;
/// let mut s = Student::with_defaults();
/// s.set_name("Lakshan");
/// assert_eq!(s.name(), "Lakshan");
/// assert_eq!(s.age(), 21);
/// assert_eq!(s.gender(), "Male");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    name: String,
    age: i32,
    gender: String,
}

impl Student {
    /// Create a student from the given values.
    pub fn new(name: impl Into<String>, age: i32, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    /// Create a student with the preset name, age and gender.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_AGE, DEFAULT_GENDER)
    }

    /// Create a student whose fields are left at their type defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Add up subject marks.
    ///
    /// The number of marks picks the variant, e.g. `(m1, m2)` or `(m1, m2, m3)`; see
    /// [`Marks`] for the accepted shapes. The result does not depend on the student.
    ///
    /// ```
    /// use oop_samples::Student;
    /// let s = Student::empty();
    /// assert_eq!(s.calc_total_marks((56, 46)), 102);
    /// assert_eq!(s.calc_total_marks((56, 46, 87)), 189);
    /// ```
    pub fn calc_total_marks(&self, marks: impl Marks) -> i32 {
        marks.total()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.age, self.gender)
    }
}

/// A set of subject marks that can be summed.
///
/// Implemented for two- and three-element tuples, which stand in for overloads by
/// arity, and for arrays and slices of any length. Sums wrap around on overflow.
pub trait Marks {
    fn total(&self) -> i32;
}

impl Marks for (i32, i32) {
    fn total(&self) -> i32 {
        sum([self.0, self.1])
    }
}

impl Marks for (i32, i32, i32) {
    fn total(&self) -> i32 {
        sum([self.0, self.1, self.2])
    }
}

impl<const N: usize> Marks for [i32; N] {
    fn total(&self) -> i32 {
        sum(self.iter().copied())
    }
}

impl Marks for &[i32] {
    fn total(&self) -> i32 {
        sum(self.iter().copied())
    }
}

fn sum(marks: impl IntoIterator<Item = i32>) -> i32 {
    marks.into_iter().fold(0, i32::wrapping_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults() {
        for _ in 0..3 {
            let s = Student::with_defaults();
            assert_eq!(s.name(), "Pathum");
            assert_eq!(s.age(), 21);
            assert_eq!(s.gender(), "Male");
        }
    }

    #[test]
    fn test_new_keeps_values_as_given() {
        let s = Student::new("Kamala", 26, "Female");
        assert_eq!(s.name(), "Kamala");
        assert_eq!(s.age(), 26);
        assert_eq!(s.gender(), "Female");

        // nothing is validated
        let odd = Student::new("", -4, "");
        assert_eq!(odd.name(), "");
        assert_eq!(odd.age(), -4);
        assert_eq!(odd.gender(), "");
    }

    #[test]
    fn test_empty_uses_type_defaults() {
        let s = Student::empty();
        assert_eq!(s.name(), "");
        assert_eq!(s.age(), 0);
        assert_eq!(s.gender(), "");
        assert_eq!(s, Student::default());
    }

    #[test]
    fn test_set_name_not_affected_by_set_age() {
        let mut s = Student::with_defaults();
        s.set_name("Lakshan");
        s.set_age(30);
        assert_eq!(s.name(), "Lakshan");
        assert_eq!(s.age(), 30);
        assert_eq!(s.gender(), "Male");
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut s1 = Student::new("Pathum", 21, "Male");
        let s2 = Student::new("Kamala", 26, "Female");
        let copy = s1.clone();

        s1.set_name("Nimal");

        assert_eq!(s2.name(), "Kamala");
        assert_eq!(s2.age(), 26);
        assert_eq!(s2.gender(), "Female");
        assert_eq!(copy.name(), "Pathum");
    }

    #[test]
    fn test_calc_total_marks_by_arity() {
        let s = Student::empty();
        assert_eq!(s.calc_total_marks((56, 46)), 102);
        assert_eq!(s.calc_total_marks((56, 46, 87)), 189);
        assert_eq!(s.calc_total_marks([56, 46, 87, 11]), 200);
        let none: &[i32] = &[];
        assert_eq!(s.calc_total_marks(none), 0);
    }

    #[test]
    fn test_calc_total_marks_ignores_fields() {
        let a = Student::with_defaults();
        let b = Student::new("Kamala", 26, "Female");
        assert_eq!(a.calc_total_marks((1, 2)), b.calc_total_marks((1, 2)));
    }

    #[test]
    fn test_calc_total_marks_wraps_on_overflow() {
        let s = Student::empty();
        assert_eq!(s.calc_total_marks((i32::MAX, 1)), i32::MIN);
        assert_eq!(s.calc_total_marks((i32::MIN, -1, 0)), i32::MAX);
    }

    #[test]
    fn test_overload_scenario() {
        let mut s = Student::empty();
        let total = s.calc_total_marks((56, 46, 87));
        s.set_name("Pathum");
        s.set_age(21);

        assert_eq!(s.name(), "Pathum");
        assert_eq!(s.age(), 21);
        assert_eq!(total, 189);
    }

    #[test]
    fn test_display() {
        assert_eq!(Student::with_defaults().to_string(), "Pathum (21, Male)");
    }
}
