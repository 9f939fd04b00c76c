//! Adapters — concrete implementations of the non-device port traits.
//!
//! | Adapter    | Implements | Connects to      |
//! |------------|------------|------------------|
//! | `log_sink` | EventSink  | `log` facade     |

pub mod log_sink;
