//! Bookkeeping for project creation.
//!
//! Every child row written while creating a project is recorded as a [`Step`]. When a
//! later step fails the recorded steps are undone by deleting the rows again: fields
//! first, then investors, managers and finally the customer. Rows of the same kind are
//! deleted in the order they were created.

use std::fmt;

/// A child row created by this call, identified by its storage id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Customer(i64),
    Manager(i64),
    Investor(i64),
    Field(i64),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Customer(id) => write!(f, "customer {id}"),
            Step::Manager(id) => write!(f, "manager {id}"),
            Step::Investor(id) => write!(f, "investor {id}"),
            Step::Field(id) => write!(f, "field {id}"),
        }
    }
}

/// A compensating delete that did not go through.
#[derive(Debug, Clone, PartialEq)]
pub struct CompensationFailure {
    pub step: Step,
    pub error: String,
}

impl fmt::Display for CompensationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delete {}: {}", self.step, self.error)
    }
}

#[derive(Debug, Default)]
pub struct Saga {
    customer: Option<i64>,
    managers: Vec<i64>,
    investors: Vec<i64>,
    fields: Vec<i64>,
}

impl Saga {
    pub fn record(&mut self, step: Step) {
        match step {
            Step::Customer(id) => self.customer = Some(id),
            Step::Manager(id) => self.managers.push(id),
            Step::Investor(id) => self.investors.push(id),
            Step::Field(id) => self.fields.push(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.customer.is_none()
            && self.managers.is_empty()
            && self.investors.is_empty()
            && self.fields.is_empty()
    }

    /// The deletes to issue, in the order they must run.
    pub fn compensation_order(&self) -> Vec<Step> {
        self.fields
            .iter()
            .map(|&id| Step::Field(id))
            .chain(self.investors.iter().map(|&id| Step::Investor(id)))
            .chain(self.managers.iter().map(|&id| Step::Manager(id)))
            .chain(self.customer.map(Step::Customer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_unwind_in_reverse_creation_order() {
        let mut saga = Saga::default();
        saga.record(Step::Customer(10));
        saga.record(Step::Manager(20));
        saga.record(Step::Manager(21));
        saga.record(Step::Investor(30));
        saga.record(Step::Field(40));
        saga.record(Step::Field(41));

        assert_eq!(
            saga.compensation_order(),
            vec![
                Step::Field(40),
                Step::Field(41),
                Step::Investor(30),
                Step::Manager(20),
                Step::Manager(21),
                Step::Customer(10),
            ]
        );
    }

    #[test]
    fn test_reused_children_leave_nothing_to_undo() {
        let saga = Saga::default();
        assert!(saga.is_empty());
        assert!(saga.compensation_order().is_empty());
    }

    #[test]
    fn test_failure_renders_step_and_cause() {
        let failure = CompensationFailure {
            step: Step::Investor(30),
            error: "Internal error: timeout".into(),
        };
        assert_eq!(failure.to_string(), "delete investor 30: Internal error: timeout");
    }
}
