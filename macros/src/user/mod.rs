//! User-facing macro implementations

pub mod contract_check;
pub mod tagged;
