pub mod coerce;
pub mod debug;

pub use coerce::{coerce_non_negative_number, parse_float_prefix, parse_int_prefix};
