// Reusable UI widgets

pub mod value_gauge;

pub use value_gauge::ValueGauge;
