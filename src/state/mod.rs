//! Screen state management.
//!
//! Each path entry owns one [`ScreenState`]. Using an enum ensures an entry
//! holds exactly one kind of screen state, and the coordinator keeps it
//! alive across redraws until the entry is popped.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ NavigationPath                               │
//! │  ┌──────────────┐   ┌─────────────────────┐  │
//! │  │ entry 0      │   │ entry 1             │  │
//! │  │ First        │   │ Second { reply }    │  │
//! │  │ state: First │   │ state: Second       │  │
//! │  └──────────────┘   └─────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod screen;
pub mod stepper;

pub use screen::{FirstScreenState, ScreenState, SecondScreenState};
pub use stepper::{clamp_value, step_value, value_ratio, VALUE_MAX, VALUE_MIN};
