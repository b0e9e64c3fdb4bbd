//! Statistical transforms over census distributions.
//!
//! - [`percent`] and [`set_percent_values`] for shares of a total
//! - [`collapse`] for recoding raw categories into public ones
//! - [`median_category`], [`median_estimate`] and [`exact_median`]
//! - [`group_remainder`] for top-N plus "Other"
//! - [`get_stat_data`] tying a [`StatQuery`] to a count source

pub mod collapse;
pub mod error;
pub mod median;
pub mod percent;
pub mod remainder;
pub mod stat;

pub use collapse::collapse;
pub use error::{Result, TransformError};
pub use median::{exact_median, median_category, median_estimate};
pub use percent::{percent, round2, set_count_values, set_percent_values};
pub use remainder::{REMAINDER_LABEL, group_remainder};
pub use stat::{StatData, StatOrder, StatQuery, get_stat_data, table_metadata};
