// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the configuration of the best-first solver.

use derive_builder::Builder;

/// This is how you configure a `BestFirstSolver`. The simplest is to start
/// from the default configuration (pruning enabled, no capacity ceiling) and
/// to use the builder to change what you need.
///
/// # Example
/// ```
/// # use bnb::*;
/// let config = SolverConfigBuilder::default()
///     .max_live_nodes(1_000)
///     .build()
///     .unwrap();
/// assert!(config.pruning);
/// assert_eq!(Some(1_000), config.max_live_nodes);
///
/// // a capacity of zero makes no sense
/// assert!(SolverConfigBuilder::default().max_live_nodes(0).build().is_err());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SolverConfig {
    /// This flag must be true (default) if you want the solver to discard the
    /// nodes whose bound cannot beat the incumbent. Turning it off makes the
    /// search exhaustive, which is only ever useful to compare both behaviors.
    #[builder(default="true")]
    pub pruning: bool,
    /// When set, this is the maximum number of live nodes the fringe may have
    /// to hold. The solver refuses to start on a problem whose worst case
    /// exceeds it, and otherwise preallocates the fringe accordingly.
    #[builder(default, setter(strip_option))]
    pub max_live_nodes: Option<usize>,
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self { pruning: true, max_live_nodes: None }
    }
}
impl SolverConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.max_live_nodes {
            Err("max_live_nodes must be positive".to_string())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn by_default_pruning_is_enabled_and_there_is_no_ceiling() {
        let config = SolverConfig::default();
        assert!(config.pruning);
        assert_eq!(None, config.max_live_nodes);
    }
    #[test]
    fn the_builder_defaults_match_the_default_config() {
        let config = SolverConfigBuilder::default().build().unwrap();
        assert!(config.pruning);
        assert_eq!(None, config.max_live_nodes);
    }
    #[test]
    fn pruning_can_be_disabled() {
        let config = SolverConfigBuilder::default().pruning(false).build().unwrap();
        assert!(!config.pruning);
    }
    #[test]
    fn a_zero_capacity_is_rejected_as_a_config_error() {
        let res: Result<SolverConfig, Error> = SolverConfigBuilder::default()
            .max_live_nodes(0)
            .build()
            .map_err(Error::from);
        assert!(matches!(res, Err(Error::Config(_))));
    }
}
