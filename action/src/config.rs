//! Caller-side configuration.
use serde::Deserialize;

use crate::common::quantity::Quantity;

/// Defaults applied when sending actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gas limit to authorize. Zero means the action's intrinsic gas is used.
    pub gas_limit: u64,
    /// Gas price to offer. When unset, the gas price oracle is queried.
    pub gas_price: Option<Quantity>,
}
