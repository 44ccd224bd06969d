//! Time queries.

use std::time::Duration;

use crate::error::Result;
use crate::ffi;

/// Milliseconds since the runtime was initialised.
///
/// Wraps after about 49 days.
pub fn ticks() -> Result<u32> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetTicks)() })
}

/// Sleep for at least `duration`, at millisecond granularity.
pub fn delay(duration: Duration) -> Result<()> {
    let api = ffi::api()?;
    let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    unsafe { (api.SDL_Delay)(ms) };
    Ok(())
}

/// Current value of the high resolution counter.
pub fn performance_counter() -> Result<u64> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetPerformanceCounter)() })
}

/// Counts per second of [`performance_counter`].
pub fn performance_frequency() -> Result<u64> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetPerformanceFrequency)() })
}

/// Convert a span of performance counter ticks to a duration.
pub fn counter_to_duration(ticks: u64, frequency: u64) -> Duration {
    if frequency == 0 {
        return Duration::ZERO;
    }
    let secs = ticks / frequency;
    let rem = ticks % frequency;
    let nanos = (rem as u128 * 1_000_000_000 / frequency as u128) as u32;
    Duration::new(secs, nanos)
}
