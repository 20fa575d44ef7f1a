//! A plan is the sequence of actions leading from the initial state to a goal
//! state. This module provides the [`Plan`] struct, which represents a plan.
//! An empty plan is a valid solution when the initial state is already a goal.

use std::fmt::Display;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A: Display> Plan<A> {
    /// Render the plan with each step separated by `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.steps
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<String>>()
            .join(separator)
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
