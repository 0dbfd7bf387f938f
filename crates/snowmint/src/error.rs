/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `snowmint` can produce.
///
/// Sequence exhaustion is not an error: the generator waits for the next
/// millisecond instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The worker id passed to a constructor is outside `0..=max`.
    ///
    /// No generator is produced.
    #[error("worker id {worker_id} is out of range (expected 0..={max})")]
    InvalidWorkerId {
        /// The rejected worker id.
        worker_id: i64,
        /// The largest worker id the layout can encode.
        max: u64,
    },

    /// The clock reported a time earlier than the last minted timestamp.
    ///
    /// Generator state is left untouched, so a later call succeeds once the
    /// clock catches up. A clock reading before the layout epoch is reported
    /// with `last_timestamp` set to the epoch.
    #[error("clock moved backwards: now {now} ms is behind last timestamp {last_timestamp} ms")]
    ClockMovedBackwards {
        /// The offending clock reading, in milliseconds since the Unix epoch.
        now: u64,
        /// The last timestamp the generator accepted, in milliseconds since
        /// the Unix epoch.
        last_timestamp: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_offending_values() {
        let err = Error::InvalidWorkerId {
            worker_id: 1024,
            max: 1023,
        };
        assert_eq!(
            err.to_string(),
            "worker id 1024 is out of range (expected 0..=1023)"
        );

        let err = Error::ClockMovedBackwards {
            now: 5,
            last_timestamp: 9,
        };
        assert_eq!(
            err.to_string(),
            "clock moved backwards: now 5 ms is behind last timestamp 9 ms"
        );
    }
}
