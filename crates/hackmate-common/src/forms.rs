use crate::markers::WAS_VALIDATED_CLASS;

/// What to do with a submit event on a `.needs-validation` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitVerdict {
    /// Prevent the default action and stop propagation.
    pub block: bool,
    /// Add the `was-validated` class. Always set, valid or not.
    pub mark_validated: bool,
}

impl SubmitVerdict {
    pub fn from_validity(valid: bool) -> Self {
        Self {
            block: !valid,
            mark_validated: true,
        }
    }
}

/// A form together with the submit event being dispatched to it.
pub trait SubmitTarget {
    /// Native constraint validation.
    fn is_valid(&self) -> bool;

    /// Prevent navigation and stop propagation.
    fn cancel_submission(&self);

    fn add_class(&self, class: &str);
}

pub fn handle_submit<T: SubmitTarget>(target: &T) -> SubmitVerdict {
    let verdict = SubmitVerdict::from_validity(target.is_valid());
    if verdict.block {
        target.cancel_submission();
    }
    if verdict.mark_validated {
        target.add_class(WAS_VALIDATED_CLASS);
    }
    verdict
}
