use core::time::Duration;

/// Layout epoch: Saturday, January 1, 2022 00:00:00 UTC
pub const SNOWFLAKE_EPOCH: Duration = Duration::from_millis(SNOWFLAKE_EPOCH_MILLIS);

/// [`SNOWFLAKE_EPOCH`] in milliseconds since the Unix epoch.
pub const SNOWFLAKE_EPOCH_MILLIS: u64 = 1_640_966_400_000;

/// A trait for clocks that report wall-clock time in milliseconds.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The returned value is **milliseconds since the Unix
/// epoch**; the generator subtracts [`SNOWFLAKE_EPOCH`] itself.
///
/// # Example
///
/// ```
/// use snowmint::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}
