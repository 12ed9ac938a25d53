//! Multi-strategy composition
//!
//! ANDs the judgments of several independently configured filters. A false
//! positive needs every member to false-positive on the same query, so the
//! combined rate is lower than any single member's.
//!
//! Query order matters for cost only: put the cheapest or most
//! discriminating member first.

use tracing::trace;

use super::value::Value;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Ordered, non-empty set of member filters queried as one
pub struct MultiStrategyBloomFilter {
    filters: Vec<Box<dyn MembershipFilter>>,
}

impl MultiStrategyBloomFilter {
    /// Compose `filters`, which are queried in the given order
    pub fn new(filters: Vec<Box<dyn MembershipFilter>>) -> Result<Self, FilterError> {
        if filters.is_empty() {
            return Err(FilterError::EmptyComposite);
        }
        Ok(Self { filters })
    }

    /// Number of member filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether there are no member filters
    ///
    /// Companion to `len`. `new` refuses an empty member list, so a
    /// composite that exists has at least one member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl MembershipFilter for MultiStrategyBloomFilter {
    /// Forward to every member. Stops at the first member error; members
    /// before it keep the value.
    fn store(&mut self, value: &Value) -> Result<(), FilterError> {
        for filter in &mut self.filters {
            filter.store(value)?;
        }
        Ok(())
    }

    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError> {
        for (index, filter) in self.filters.iter().enumerate() {
            if filter.definitely_not_in_set(value)? {
                trace!(member = index, "Definite absence, skipping remaining members");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
