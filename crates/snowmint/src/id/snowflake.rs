use crate::SNOWFLAKE_EPOCH_MILLIS;
use core::fmt;

/// A 64-bit Snowflake ID.
///
/// - 1 bit reserved (always zero, keeps the value positive as an `i64`)
/// - 41 bits timestamp (ms since [`SNOWFLAKE_EPOCH`])
/// - 10 bits worker id
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63          62          22 21         12 11          0
///              +----------+--------------+------------+-------------+
///  Field:      | reserved |  timestamp   | worker id  |  sequence   |
///              |   (1)    |    (41)      |   (10)     |    (12)     |
///              +----------+--------------+------------+-------------+
/// ```
///
/// Ordering follows the raw integer, so IDs sort by timestamp first, then
/// worker id, then sequence.
///
/// [`SNOWFLAKE_EPOCH`]: crate::SNOWFLAKE_EPOCH
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SnowflakeId {
    id: u64,
}

const _: () = {
    // Compile-time check: total bit width _must_ equal the backing type.
    assert!(
        SnowflakeId::RESERVED_BITS
            + SnowflakeId::TIMESTAMP_BITS
            + SnowflakeId::WORKER_ID_BITS
            + SnowflakeId::SEQUENCE_BITS
            == u64::BITS as u64,
        "Snowflake layout does not fill the underlying integer type"
    );
};

impl SnowflakeId {
    pub const RESERVED_BITS: u64 = 1;
    pub const TIMESTAMP_BITS: u64 = 41;
    pub const WORKER_ID_BITS: u64 = 10;
    pub const SEQUENCE_BITS: u64 = 12;

    pub const SEQUENCE_SHIFT: u64 = 0;
    pub const WORKER_ID_SHIFT: u64 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;
    pub const TIMESTAMP_SHIFT: u64 = Self::WORKER_ID_SHIFT + Self::WORKER_ID_BITS;
    pub const RESERVED_SHIFT: u64 = Self::TIMESTAMP_SHIFT + Self::TIMESTAMP_BITS;

    pub const RESERVED_MASK: u64 = (1 << Self::RESERVED_BITS) - 1;
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const WORKER_ID_MASK: u64 = (1 << Self::WORKER_ID_BITS) - 1;
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Packs the three components into an ID.
    ///
    /// `timestamp` is the delta in milliseconds since the layout epoch. Each
    /// component is truncated to its field width.
    #[must_use]
    pub const fn from_components(timestamp: u64, worker_id: u64, sequence: u64) -> Self {
        debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
        debug_assert!(worker_id <= Self::WORKER_ID_MASK, "worker_id overflow");
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");

        let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let w = (worker_id & Self::WORKER_ID_MASK) << Self::WORKER_ID_SHIFT;
        let s = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self { id: t | w | s }
    }

    /// Wraps a raw value without validation. See [`Self::is_valid`].
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Returns the ID as a signed integer. Valid IDs are never negative.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64(&self) -> i64 {
        self.id as i64
    }

    /// Extracts the timestamp (ms since the layout epoch).
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the worker id.
    #[must_use]
    pub const fn worker_id(&self) -> u64 {
        (self.id >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK
    }

    /// Extracts the sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Extracts the reserved bit.
    #[must_use]
    pub const fn reserved(&self) -> u64 {
        (self.id >> Self::RESERVED_SHIFT) & Self::RESERVED_MASK
    }

    /// The wall-clock time the ID was minted at, in ms since the Unix epoch.
    #[must_use]
    pub const fn unix_millis(&self) -> u64 {
        self.timestamp() + SNOWFLAKE_EPOCH_MILLIS
    }

    #[must_use]
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    #[must_use]
    pub const fn max_worker_id() -> u64 {
        Self::WORKER_ID_MASK
    }

    #[must_use]
    pub const fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    /// Returns `true` if the reserved bit is clear.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.reserved() == 0
    }
}

impl From<SnowflakeId> for u64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_i64()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
