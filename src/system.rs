//! Platform queries: CPU, memory, power and application paths.

use std::os::raw::c_int;
use std::time::Duration;

use crate::error::Result;
use crate::ffi::{self, take_string, to_cstring, SDL_TRUE};

/// Number of logical CPU cores.
pub fn cpu_count() -> Result<u32> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetCPUCount)() }.max(1) as u32)
}

/// L1 cache line size in bytes.
pub fn cpu_cache_line_size() -> Result<u32> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetCPUCacheLineSize)() }.max(0) as u32)
}

/// Installed memory in MiB.
pub fn system_ram() -> Result<u32> {
    let api = ffi::api()?;
    Ok(unsafe { (api.SDL_GetSystemRAM)() }.max(0) as u32)
}

/// SIMD instruction sets the runtime detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    pub sse2: bool,
    pub avx: bool,
    pub avx2: bool,
    pub neon: bool,
}

/// SIMD support of the running CPU.
pub fn cpu_features() -> Result<CpuFeatures> {
    let api = ffi::api()?;
    unsafe {
        Ok(CpuFeatures {
            sse2: (api.SDL_HasSSE2)() == SDL_TRUE,
            avx: (api.SDL_HasAVX)() == SDL_TRUE,
            avx2: (api.SDL_HasAVX2)() == SDL_TRUE,
            neon: (api.SDL_HasNEON)() == SDL_TRUE,
        })
    }
}

/// Battery state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    Unknown,
    OnBattery,
    NoBattery,
    Charging,
    Charged,
}

impl PowerState {
    fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => Self::OnBattery,
            2 => Self::NoBattery,
            3 => Self::Charging,
            4 => Self::Charged,
            _ => Self::Unknown,
        }
    }
}

/// Battery state with the remaining time and charge, when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerInfo {
    pub state: PowerState,
    pub remaining: Option<Duration>,
    /// Charge left, 0 to 100.
    pub percent: Option<u8>,
}

impl PowerInfo {
    fn from_raw(state: c_int, secs: c_int, pct: c_int) -> Self {
        Self {
            state: PowerState::from_raw(state),
            remaining: u64::try_from(secs).ok().map(Duration::from_secs),
            percent: u8::try_from(pct).ok().map(|p| p.min(100)),
        }
    }
}

/// Current battery state.
pub fn power_info() -> Result<PowerInfo> {
    let api = ffi::api()?;
    let (mut secs, mut pct) = (-1, -1);
    let state = unsafe { (api.SDL_GetPowerInfo)(&mut secs, &mut pct) };
    Ok(PowerInfo::from_raw(state, secs, pct))
}

/// Directory the application was run from, with a trailing separator.
pub fn base_path() -> Result<String> {
    let api = ffi::api()?;
    unsafe { take_string(api, (api.SDL_GetBasePath)()) }.ok_or_else(|| ffi::error_from_sdl(api))
}

/// A writable per-user directory for `app` by `org`, created if missing.
pub fn pref_path(org: &str, app: &str) -> Result<String> {
    let api = ffi::api()?;
    let org = to_cstring("organization", org)?;
    let app = to_cstring("application", app)?;
    unsafe { take_string(api, (api.SDL_GetPrefPath)(org.as_ptr(), app.as_ptr())) }
        .ok_or_else(|| ffi::error_from_sdl(api))
}
