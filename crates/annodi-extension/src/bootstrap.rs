//! Bootstrap sequences
//!
//! A startup routine modeled as an ordered list of named steps instead of
//! generated code. The extension contributes one step - installing the
//! global loader - prepended to whatever initialization the host already
//! performs, preserving the original order of the existing steps.

use std::fmt;

use tracing::debug;

/// One named initialization step
pub struct InitStep {
    name: String,
    run: Box<dyn Fn() + Send + Sync>,
}

impl InitStep {
    /// Create a step with the given name and action
    pub fn new(name: impl Into<String>, run: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }

    /// Step name for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the step
    pub fn run(&self) {
        (self.run)();
    }
}

impl fmt::Debug for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitStep").field("name", &self.name).finish()
    }
}

/// Ordered process-startup routine
#[derive(Debug, Default)]
pub struct BootstrapSequence {
    steps: Vec<InitStep>,
}

impl BootstrapSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn push(&mut self, name: impl Into<String>, run: impl Fn() + Send + Sync + 'static) {
        self.steps.push(InitStep::new(name, run));
    }

    /// Append every step of `other`, preserving its order
    pub fn extend(&mut self, other: BootstrapSequence) {
        self.steps.extend(other.steps);
    }

    /// Run all steps in order
    pub fn run(&self) {
        for step in &self.steps {
            debug!(step = step.name(), "running bootstrap step");
            step.run();
        }
    }

    /// Step names in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(InitStep::name).collect()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
