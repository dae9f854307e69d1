use crate::lesson::{
    Attributes, DefaultConstructor, Lesson, MethodOverload, ParameterizedConstructor,
};
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

/// Runs lessons by name.
///
/// The runner keeps an ordered list of [`Lesson`] objects. See [`Default`] for the
/// lessons included out of the box.
///
/// Example
/// ```
/// use oop_samples::Runner;
/// let runner = Runner::default();
/// let mut out: Vec<u8> = Vec::new();
/// runner.run("method-overload", &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Name : Pathum\nAge : 21\nTotal Marks : 189\n"
/// );
/// ```
pub struct Runner {
    lessons: Vec<Box<dyn Lesson>>,
}

impl Runner {
    /// Create a runner with a custom set of lessons.
    pub fn new(lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self { lessons }
    }

    /// Iterate over the registered lessons in registration order.
    pub fn lessons(&self) -> impl Iterator<Item = &dyn Lesson> {
        self.lessons.iter().map(|l| l.as_ref())
    }

    /// Run a single lesson by name.
    ///
    /// Returns an error if no lesson has that name or if writing the output fails.
    pub fn run(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        let lesson = self
            .lessons()
            .find(|l| l.name() == name)
            .ok_or_else(|| anyhow::anyhow!("lesson not found: {}", name))?;
        info!("running lesson {}", lesson.name());
        lesson.run(out)
    }

    /// Run every lesson, one after another.
    pub fn run_all(&self, out: &mut dyn Write) -> Result<()> {
        debug!("running {} lessons", self.lessons.len());
        for lesson in self.lessons() {
            info!("running lesson {}", lesson.name());
            lesson.run(out)?;
        }
        Ok(())
    }
}

impl Default for Runner {
    /// Create a runner with the four course lessons:
    /// `attributes`, `default-constructor`, `parameterized-constructor`, `method-overload`.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Attributes),
            Box::new(DefaultConstructor),
            Box::new(ParameterizedConstructor),
            Box::new(MethodOverload),
        ])
    }
}
