//! Inbound Ports (Driving Ports)
//!
//! The two-operation contract shared by every strategy and by the
//! multi-strategy composer.

use crate::domain::Value;
use crate::error::FilterError;

/// Probabilistic set-membership API (Driving Port)
///
/// Implementations never produce false negatives: once `store(v)` has
/// succeeded, `definitely_not_in_set(v)` returns `Ok(false)` for as long as
/// the filter lives.
pub trait MembershipFilter: Send + Sync {
    /// Record a value in the filter
    ///
    /// Bits only ever go from unset to set. A value the strategy cannot
    /// represent is rejected with an error.
    fn store(&mut self, value: &Value) -> Result<(), FilterError>;

    /// Test whether a value was never stored
    ///
    /// Returns:
    /// - `true` if the value is definitely NOT in the set
    /// - `false` if the value might be in the set (could be false positive)
    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError>;
}

impl<F: MembershipFilter + ?Sized> MembershipFilter for Box<F> {
    fn store(&mut self, value: &Value) -> Result<(), FilterError> {
        (**self).store(value)
    }

    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError> {
        (**self).definitely_not_in_set(value)
    }
}
