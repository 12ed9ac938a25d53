//! Filter configuration and validation
//!
//! A `FilterConfig` lists member strategies in query order and builds them
//! into a `MultiStrategyBloomFilter`.
//!
//! # Example
//!
//! ```ignore
//! use charset_bloom::{Alphabet, FilterConfigBuilder, HasherKind};
//!
//! let filter = FilterConfigBuilder::new()
//!     .alphabet(Alphabet::LowercaseAlphanumeric, HasherKind::Sha256)
//!     .alphabet(Alphabet::Base64, HasherKind::Base64)
//!     .build()?
//!     .build_filter()?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::alphabet::Alphabet;
use super::alphabet_filter::AlphabetBloomFilter;
use super::binary_integer::BinaryIntegerBloomFilter;
use super::multi_strategy::MultiStrategyBloomFilter;
use crate::adapters::HasherKind;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// One member of a composed filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Bit vector indexed by `alphabet`, fed by `hasher`
    Alphabet {
        alphabet: Alphabet,
        hasher: HasherKind,
    },
    /// Integer bitmask; values must be decimal digit strings
    BinaryInteger,
}

impl StrategyConfig {
    /// Construct an empty filter for this strategy
    pub fn build(self) -> Box<dyn MembershipFilter> {
        match self {
            StrategyConfig::Alphabet { alphabet, hasher } => {
                Box::new(AlphabetBloomFilter::new(alphabet, hasher.build()))
            }
            StrategyConfig::BinaryInteger => Box::new(BinaryIntegerBloomFilter::new()),
        }
    }
}

/// Ordered member strategies of a composed filter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Members in query order
    pub strategies: Vec<StrategyConfig>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strategies: vec![
                StrategyConfig::Alphabet {
                    alphabet: Alphabet::LowercaseAlphanumeric,
                    hasher: HasherKind::Sha256,
                },
                StrategyConfig::Alphabet {
                    alphabet: Alphabet::Base64,
                    hasher: HasherKind::Base64,
                },
            ],
        }
    }
}

impl FilterConfig {
    /// Create a configuration with validation
    pub fn new(strategies: Vec<StrategyConfig>) -> Result<Self, FilterError> {
        let config = Self { strategies };
        config.validate()?;
        Ok(config)
    }

    /// Check the member list is usable
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.strategies.is_empty() {
            return Err(FilterError::InvalidConfig(
                "at least one strategy is required".to_string(),
            ));
        }

        for (index, strategy) in self.strategies.iter().enumerate() {
            if let StrategyConfig::Alphabet { alphabet, hasher } = *strategy {
                if !hasher.can_feed(alphabet) {
                    return Err(FilterError::InvalidConfig(format!(
                        "strategy {index}: {hasher:?} hasher output never fits the {alphabet} alphabet"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate and construct the composed filter
    pub fn build_filter(&self) -> Result<MultiStrategyBloomFilter, FilterError> {
        self.validate()?;

        let filters = self
            .strategies
            .iter()
            .map(|strategy| strategy.build())
            .collect();

        debug!(members = self.strategies.len(), "Built multi-strategy filter");
        MultiStrategyBloomFilter::new(filters)
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    strategies: Vec<StrategyConfig>,
}

impl FilterConfigBuilder {
    /// Create a builder with no strategies
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alphabet strategy
    pub fn alphabet(mut self, alphabet: Alphabet, hasher: HasherKind) -> Self {
        self.strategies
            .push(StrategyConfig::Alphabet { alphabet, hasher });
        self
    }

    /// Append a binary-integer strategy
    pub fn binary_integer(mut self) -> Self {
        self.strategies.push(StrategyConfig::BinaryInteger);
        self
    }

    /// Build the FilterConfig, validating the member list
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        FilterConfig::new(self.strategies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategies.len(), 2);
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let result = FilterConfigBuilder::new().build();
        assert!(matches!(result, Err(FilterError::InvalidConfig(_))));
    }

    #[test]
    fn test_incompatible_hasher_is_rejected() {
        let result = FilterConfigBuilder::new()
            .alphabet(Alphabet::FullAscii, HasherKind::Identity)
            .alphabet(Alphabet::LowercaseAlphanumeric, HasherKind::Base64)
            .build();

        match result {
            Err(FilterError::InvalidConfig(message)) => {
                assert!(message.starts_with("strategy 1"), "got: {message}");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_preserves_order() {
        let config = FilterConfigBuilder::new()
            .binary_integer()
            .alphabet(Alphabet::FullAscii, HasherKind::Identity)
            .build()
            .expect("Should create valid config");

        assert_eq!(
            config.strategies,
            vec![
                StrategyConfig::BinaryInteger,
                StrategyConfig::Alphabet {
                    alphabet: Alphabet::FullAscii,
                    hasher: HasherKind::Identity,
                },
            ]
        );
    }

    #[test]
    fn test_build_filter_round_trip() {
        let mut filter = FilterConfig::default()
            .build_filter()
            .expect("default config builds");

        filter.store(&Value::from("Hello, World!")).unwrap();

        assert_eq!(filter.len(), 2);
        assert!(!filter
            .definitely_not_in_set(&Value::from("Hello, World!"))
            .unwrap());
    }

    #[test]
    fn test_build_filter_revalidates_public_fields() {
        let config = FilterConfig {
            strategies: Vec::new(),
        };
        assert!(matches!(
            config.build_filter(),
            Err(FilterError::InvalidConfig(_))
        ));
    }
}
