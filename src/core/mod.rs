// Core exports
pub mod coercion;
pub mod input;

pub use coercion::{coerce_quantity, coerce_score, CoercionError};
pub use input::{resolve_input, ResolveError, FILE_PREFIX};
