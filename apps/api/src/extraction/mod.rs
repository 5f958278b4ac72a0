pub mod coerce;
pub mod handlers;
pub mod pdf;
