use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    id::SnowflakeId,
    time::{SNOWFLAKE_EPOCH_MILLIS, SystemClock, TimeSource},
};

/// Mutable generator state, only ever touched under the generator's lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    /// Clock reading (ms since the Unix epoch) of the most recent ID.
    pub(crate) last_timestamp: u64,
    /// IDs minted within `last_timestamp`, minus one.
    pub(crate) sequence: u64,
}

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// One instance owns one worker id for its whole lifetime. All calls to
/// [`generate_id`] on the same instance are serialized by a single
/// [`parking_lot::Mutex`], which is what guarantees that no two calls return
/// the same `(timestamp, sequence)` pair. Share it between threads behind an
/// [`Arc`](std::sync::Arc).
///
/// When more than 4096 IDs are requested within one millisecond the generator
/// busy-polls the clock until the next millisecond while still holding the
/// lock, so other callers on the same instance stall for that duration.
/// Callers that need more throughput should run more instances with distinct
/// worker ids.
///
/// [`generate_id`]: Self::generate_id
#[derive(Debug)]
pub struct IdGenerator<T = SystemClock>
where
    T: TimeSource,
{
    worker_id: u64,
    state: Mutex<State>,
    time: T,
}

impl IdGenerator<SystemClock> {
    /// Creates a generator for `worker_id` that reads the system wall clock.
    ///
    /// The generator starts with a last timestamp and sequence of zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWorkerId`] if `worker_id` is negative or
    /// greater than 1023.
    ///
    /// # Example
    /// ```
    /// use snowmint::{Error, IdGenerator};
    ///
    /// assert!(IdGenerator::new(0).is_ok());
    /// assert!(IdGenerator::new(1023).is_ok());
    /// assert!(matches!(
    ///     IdGenerator::new(1024),
    ///     Err(Error::InvalidWorkerId { worker_id: 1024, .. })
    /// ));
    /// ```
    pub fn new(worker_id: i64) -> Result<Self> {
        Self::with_clock(worker_id, SystemClock)
    }
}

impl<T> IdGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator for `worker_id` that reads time from `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWorkerId`] if `worker_id` is outside
    /// `0..=1023`.
    pub fn with_clock(worker_id: i64, time: T) -> Result<Self> {
        Self::from_components(0, worker_id, 0, time)
    }

    /// Creates a generator preloaded with explicit state.
    ///
    /// This constructor is primarily useful for resuming from a known point
    /// or for controlling the starting state manually.
    ///
    /// # Parameters
    /// - `last_timestamp`: clock reading of the last minted ID, in ms since
    ///   the Unix epoch
    /// - `worker_id`: the worker identifier
    /// - `sequence`: the sequence of the last minted ID, truncated to 12 bits
    /// - `time`: A [`TimeSource`] used to fetch the current time
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWorkerId`] if `worker_id` is outside
    /// `0..=1023`.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub fn from_components(
        last_timestamp: u64,
        worker_id: i64,
        sequence: u64,
        time: T,
    ) -> Result<Self> {
        let worker_id = u64::try_from(worker_id)
            .ok()
            .filter(|&id| id <= SnowflakeId::max_worker_id())
            .ok_or(Error::InvalidWorkerId {
                worker_id,
                max: SnowflakeId::max_worker_id(),
            })?;

        Ok(Self {
            worker_id,
            state: Mutex::new(State {
                last_timestamp,
                sequence: sequence & SnowflakeId::SEQUENCE_MASK,
            }),
            time,
        })
    }

    /// The worker id encoded into every ID from this generator.
    pub fn worker_id(&self) -> u64 {
        self.worker_id
    }

    /// Generates the next ID.
    ///
    /// The clock is read while holding the lock. Within one millisecond the
    /// sequence increments; once it is exhausted the call spins until the
    /// clock advances and continues at sequence zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackwards`] if the clock reads earlier than
    /// the last minted timestamp (or earlier than the layout epoch). The
    /// generator state is not modified and nothing is retried.
    ///
    /// # Example
    /// ```
    /// use snowmint::IdGenerator;
    ///
    /// let generator = IdGenerator::new(3)?;
    /// let id = generator.generate_id()?;
    ///
    /// assert_eq!(id.worker_id(), 3);
    /// assert!(id.to_i64() > 0);
    /// # Ok::<(), snowmint::Error>(())
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(worker_id = self.worker_id)))]
    pub fn generate_id(&self) -> Result<SnowflakeId> {
        let mut state = self.state.lock();

        let mut now = self.time.current_millis();
        let floor = state.last_timestamp.max(SNOWFLAKE_EPOCH_MILLIS);
        if now < floor {
            return Err(Self::cold_clock_behind(now, floor));
        }

        if now == state.last_timestamp {
            if state.sequence < SnowflakeId::max_sequence() {
                state.sequence += 1;
            } else {
                now = self.cold_wait_next_millis(state.last_timestamp);
                state.sequence = 0;
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = now;

        Ok(SnowflakeId::from_components(
            now - SNOWFLAKE_EPOCH_MILLIS,
            self.worker_id,
            state.sequence,
        ))
    }

    /// Spins until the clock reads strictly past `last_timestamp`.
    #[cold]
    #[inline(never)]
    fn cold_wait_next_millis(&self, last_timestamp: u64) -> u64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(last_timestamp, "sequence exhausted, waiting for next millisecond");

        let mut now = self.time.current_millis();
        while now <= last_timestamp {
            core::hint::spin_loop();
            now = self.time.current_millis();
        }
        now
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, last_timestamp: u64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::warn!(now, last_timestamp, "clock moved backwards");

        Error::ClockMovedBackwards {
            now,
            last_timestamp,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> State {
        *self.state.lock()
    }
}
