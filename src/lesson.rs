use crate::car::Car;
use crate::student::Student;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// A small driver program that builds some records and prints what they hold.
///
/// Lessons write to the provided output instead of the process stdout so that the
/// [`crate::Runner`] and tests can choose where the text goes.
pub trait Lesson {
    /// Canonical name of the lesson, e.g. "attributes".
    fn name(&self) -> &'static str;

    /// One-line description shown by `--list`.
    fn summary(&self) -> &'static str;

    /// Runs the lesson, writing its output line by line.
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Create a car, set each attribute directly and print them.
pub struct Attributes;

impl Lesson for Attributes {
    fn name(&self) -> &'static str {
        "attributes"
    }

    fn summary(&self) -> &'static str {
        "class attributes set directly on a Car"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut my_car = Car::new();

        my_car.brand = "BMW".to_string();
        my_car.colour = "White".to_string();
        my_car.horsepower = 1600;
        debug!("car filled in: {:?}", my_car);

        writeln!(out, "Car Brand is: {}", my_car.brand)?;
        writeln!(out, "Car Colour is: {}", my_car.colour)?;
        // sic: the sample has always printed "Hourse"
        writeln!(out, "Car Hourse Power is: {}", my_car.horsepower)?;
        Ok(())
    }
}

/// Two students built with preset values; the second one gets renamed.
pub struct DefaultConstructor;

impl Lesson for DefaultConstructor {
    fn name(&self) -> &'static str {
        "default-constructor"
    }

    fn summary(&self) -> &'static str {
        "students created with preset values, one renamed through a setter"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let s1 = Student::with_defaults();
        print_details(out, &s1)?;

        let mut s2 = Student::with_defaults();
        writeln!(out)?;

        s2.set_name("Lakshan");
        debug!("s1 = {}, s2 = {}", s1, s2);
        print_details(out, &s2)?;
        Ok(())
    }
}

/// Two students built from caller-supplied values.
pub struct ParameterizedConstructor;

impl Lesson for ParameterizedConstructor {
    fn name(&self) -> &'static str {
        "parameterized-constructor"
    }

    fn summary(&self) -> &'static str {
        "students created from name, age and gender arguments"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;

        let s1 = Student::new("Pathum", 21, "Male");
        writeln!(out, "s1 Details")?;
        print_details(out, &s1)?;

        writeln!(out)?;

        let s2 = Student::new("Kamala", 26, "Female");
        writeln!(out, "s2 Details")?;
        print_details(out, &s2)?;
        Ok(())
    }
}

/// An empty student filled in with setters, plus a three-subject mark total.
pub struct MethodOverload;

impl Lesson for MethodOverload {
    fn name(&self) -> &'static str {
        "method-overload"
    }

    fn summary(&self) -> &'static str {
        "setters and calc_total_marks overloaded by number of marks"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut s1 = Student::empty();

        let total_marks = s1.calc_total_marks((56, 46, 87));
        s1.set_name("Pathum");
        s1.set_age(21);
        debug!("{} scored {}", s1, total_marks);

        writeln!(out, "Name : {}", s1.name())?;
        writeln!(out, "Age : {}", s1.age())?;
        writeln!(out, "Total Marks : {}", total_marks)?;
        Ok(())
    }
}

fn print_details(out: &mut dyn Write, student: &Student) -> Result<()> {
    writeln!(out, "{}", student.name())?;
    writeln!(out, "{}", student.age())?;
    writeln!(out, "{}", student.gender())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(lesson: &dyn Lesson) -> String {
        let mut out: Vec<u8> = Vec::new();
        let res = lesson.run(&mut out);
        assert!(res.is_ok());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_attributes_output() {
        assert_eq!(
            output_of(&Attributes),
            "Car Brand is: BMW\nCar Colour is: White\nCar Hourse Power is: 1600\n"
        );
    }

    #[test]
    fn test_default_constructor_output() {
        assert_eq!(
            output_of(&DefaultConstructor),
            "Pathum\n21\nMale\n\nLakshan\n21\nMale\n"
        );
    }

    #[test]
    fn test_parameterized_constructor_output() {
        assert_eq!(
            output_of(&ParameterizedConstructor),
            "\ns1 Details\nPathum\n21\nMale\n\ns2 Details\nKamala\n26\nFemale\n"
        );
    }

    #[test]
    fn test_method_overload_output() {
        assert_eq!(
            output_of(&MethodOverload),
            "Name : Pathum\nAge : 21\nTotal Marks : 189\n"
        );
    }

    #[test]
    fn test_lesson_names_are_distinct() {
        let lessons: [&dyn Lesson; 4] = [
            &Attributes,
            &DefaultConstructor,
            &ParameterizedConstructor,
            &MethodOverload,
        ];
        let mut names: Vec<_> = lessons.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
