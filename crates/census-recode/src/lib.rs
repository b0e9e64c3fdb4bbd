//! Static recode tables for census categories.
//!
//! Each table maps raw census labels onto the simplified public categories
//! shown in profiles. Display orders and median bin estimates live beside the
//! tables they belong to.

pub mod age;
pub mod birth;
pub mod education;
pub mod employment;
pub mod error;
pub mod household;
pub mod income;
pub mod services;
pub mod table;

pub use error::{RecodeError, Result};
pub use table::{BinEstimates, Recode, RecodeFn, RecodeTable};
