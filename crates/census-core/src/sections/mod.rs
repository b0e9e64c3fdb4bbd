//! One module per profile section.

pub(crate) mod child_households;
pub(crate) mod children;
pub(crate) mod common;
pub(crate) mod crime;
pub(crate) mod demographics;
pub(crate) mod economics;
pub(crate) mod education;
pub(crate) mod households;
pub(crate) mod service_delivery;
