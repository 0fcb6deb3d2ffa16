//! Human-readable number formatting for prices, supplies and form amounts.

pub mod decimal;
pub mod num;
