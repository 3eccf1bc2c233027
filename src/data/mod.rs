/// Data layer: core types, parsing, and aggregation.
///
/// Architecture:
/// ```text
///  plot data (.dat)                 pps log
///        │                             │
///        ▼                             ▼
///   ┌──────────┐                 ┌──────────┐
///   │  loader   │ lines → Series │  trials   │ lines → TrialGroups
///   └──────────┘                 └──────────┘
///        │  (filter: cutoff)           │
///        ▼                             ▼
///   render / ui                  ┌──────────┐
///                                │  stats    │ mean / std dev per group
///                                └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod trials;
