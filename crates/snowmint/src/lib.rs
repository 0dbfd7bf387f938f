//! # snowmint
//!
//! Thread-safe generation of 64-bit, time-ordered Snowflake IDs.
//!
//! Every ID packs a millisecond timestamp, the worker id of the generator that
//! minted it, and a per-millisecond sequence number:
//!
//! ```text
//!  Bit Index:  63          62          22 21         12 11          0
//!              +----------+--------------+------------+-------------+
//!  Field:      | reserved |  timestamp   | worker id  |  sequence   |
//!              |   (1)    |    (41)      |   (10)     |    (12)     |
//!              +----------+--------------+------------+-------------+
//!              |<-- MSB ------------- 64 bits ------------- LSB -->|
//! ```
//!
//! The timestamp counts milliseconds since [`SNOWFLAKE_EPOCH`]
//! (2022-01-01T00:00:00Z). Worker ids are assigned externally and range over
//! `0..=1023`; two generators with distinct worker ids never collide.
//!
//! ## Example
//!
//! ```
//! use snowmint::IdGenerator;
//!
//! let generator = IdGenerator::new(7)?;
//! let a = generator.generate_id()?;
//! let b = generator.generate_id()?;
//!
//! assert!(a < b);
//! assert_eq!(a.worker_id(), 7);
//! # Ok::<(), snowmint::Error>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: instruments ID generation with [`tracing`](https://docs.rs/tracing)
//!   spans and events.
//! - `serde`: `Serialize`/`Deserialize` for [`SnowflakeId`] as a signed 64-bit
//!   integer.

mod error;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::time::*;
