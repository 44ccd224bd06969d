//! Audio drivers and queue-based audio devices.

use std::os::raw::{c_int, c_void};
use std::ptr;

use crate::error::{Error, Result};
use crate::ffi::{self, sdl_bool, string_from_ptr, to_cstring, Api, SDL_AudioDeviceID, SDL_AudioSpec};
use crate::resource::Resource;
use crate::types::{AllowedChanges, AudioSpec, AudioStatus};

/// Names of the audio drivers compiled into the runtime.
pub fn drivers() -> Result<Vec<String>> {
    let api = ffi::api()?;
    let n = unsafe { (api.SDL_GetNumAudioDrivers)() };

    Ok((0..n)
        .filter_map(|i| unsafe { string_from_ptr((api.SDL_GetAudioDriver)(i)) })
        .collect())
}

/// The audio driver in use, if the audio subsystem is initialised.
pub fn current_driver() -> Result<Option<String>> {
    let api = ffi::api()?;
    Ok(unsafe { string_from_ptr((api.SDL_GetCurrentAudioDriver)()) })
}

/// Names of the available playback (or capture) devices.
///
/// Fails when the list cannot be determined, which is different from an
/// empty list.
pub fn devices(capture: bool) -> Result<Vec<String>> {
    let api = ffi::api()?;
    let iscapture = sdl_bool(capture);
    let n = unsafe { (api.SDL_GetNumAudioDevices)(iscapture) };
    if n < 0 {
        return Err(ffi::error_from_sdl(api));
    }

    Ok((0..n)
        .filter_map(|i| unsafe { string_from_ptr((api.SDL_GetAudioDeviceName)(i, iscapture)) })
        .collect())
}

/// An open audio device fed through the runtime's queue.
///
/// Devices start paused. Closed when dropped.
///
/// # Example
///
/// ```no_run
/// use sdl::{AllowedChanges, AudioDevice, AudioFormat, AudioSpec};
///
/// let desired = AudioSpec {
///     format: AudioFormat::S16_SYS,
///     channels: 1,
///     ..Default::default()
/// };
/// let device = AudioDevice::open(None, &desired, AllowedChanges::empty(), false)?;
///
/// let silence = vec![0u8; device.spec().size as usize];
/// device.queue(&silence)?;
/// device.resume();
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct AudioDevice {
    api: &'static Api,
    resource: Resource<SDL_AudioDeviceID>,
    name: Option<String>,
    spec: AudioSpec,
    capture: bool,
}

impl AudioDevice {
    /// Open a device by name, or the default device when `name` is `None`.
    ///
    /// `allowed` lists the parameters the runtime may change from `desired`;
    /// the actual parameters are available from [`spec`](Self::spec).
    pub fn open(name: Option<&str>, desired: &AudioSpec, allowed: AllowedChanges, capture: bool) -> Result<Self> {
        let api = ffi::api()?;
        let name_c = name.map(|n| to_cstring("device name", n)).transpose()?;
        let name_ptr = name_c.as_ref().map_or(ptr::null(), |n| n.as_ptr());

        let wanted = desired.to_raw();
        let mut obtained = SDL_AudioSpec::default();
        let close = api.SDL_CloseAudioDevice;

        let resource = Resource::construct(
            || unsafe { (api.SDL_OpenAudioDevice)(name_ptr, sdl_bool(capture), &wanted, &mut obtained, allowed.bits()) },
            move |id| unsafe { close(id) },
        );
        let resource = ffi::check_resource(api, resource)?;

        let spec = AudioSpec::from_raw(&obtained);
        log::debug!("opened audio device {} ({:?}): {:?}", resource.get(), name, spec);

        Ok(Self {
            api,
            resource,
            name: name.map(str::to_string),
            spec,
            capture,
        })
    }

    fn handle(&self) -> Result<SDL_AudioDeviceID> {
        if self.resource.is_valid() {
            Ok(self.resource.get())
        } else {
            Err(Error::AlreadyClosed)
        }
    }

    /// Device id; `0` after [`close`](Self::close).
    pub fn id(&self) -> u32 {
        self.resource.get()
    }

    /// Name requested at open time; `None` for the default device.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parameters obtained from the runtime.
    pub fn spec(&self) -> &AudioSpec {
        &self.spec
    }

    /// Whether the device records rather than plays.
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Playback state; `Stopped` once closed.
    pub fn status(&self) -> AudioStatus {
        match self.handle() {
            Ok(id) => AudioStatus::from_raw(unsafe { (self.api.SDL_GetAudioDeviceStatus)(id) }),
            Err(_) => AudioStatus::Stopped,
        }
    }

    /// Stop pulling samples from the queue. No-op once closed.
    pub fn pause(&self) {
        self.set_paused(true)
    }

    /// Start or continue playback (or capture).
    pub fn resume(&self) {
        self.set_paused(false)
    }

    fn set_paused(&self, paused: bool) {
        if let Ok(id) = self.handle() {
            unsafe { (self.api.SDL_PauseAudioDevice)(id, paused as c_int) }
        }
    }

    /// Append samples to a playback device's queue.
    pub fn queue(&self, data: &[u8]) -> Result<()> {
        let id = self.handle()?;
        if self.capture {
            return Err(Error::InvalidArgument("cannot queue audio to a capture device".to_string()));
        }

        let len = queue_len(data.len())?;
        let code = unsafe { (self.api.SDL_QueueAudio)(id, data.as_ptr() as *const c_void, len) };
        ffi::check(self.api, code)
    }

    /// Take captured samples; returns the number of bytes written to `buf`.
    pub fn dequeue(&self, buf: &mut [u8]) -> Result<usize> {
        let id = self.handle()?;
        if !self.capture {
            return Err(Error::InvalidArgument("cannot dequeue audio from a playback device".to_string()));
        }

        let len = queue_len(buf.len())?;
        let n = unsafe { (self.api.SDL_DequeueAudio)(id, buf.as_mut_ptr() as *mut c_void, len) };
        Ok(n as usize)
    }

    /// Bytes currently queued.
    pub fn queued_size(&self) -> u32 {
        match self.handle() {
            Ok(id) => unsafe { (self.api.SDL_GetQueuedAudioSize)(id) },
            Err(_) => 0,
        }
    }

    /// Drop everything queued.
    pub fn clear(&self) {
        if let Ok(id) = self.handle() {
            unsafe { (self.api.SDL_ClearQueuedAudio)(id) }
        }
    }

    /// Block the device's audio thread until the guard is dropped.
    pub fn lock(&self) -> Result<AudioLockGuard<'_>> {
        let id = self.handle()?;
        unsafe { (self.api.SDL_LockAudioDevice)(id) };
        Ok(AudioLockGuard { device: self, id })
    }

    /// Close the device now; later calls fail with `AlreadyClosed`.
    pub fn close(&mut self) {
        if self.resource.is_valid() {
            log::debug!("closing audio device {}", self.resource.get());
            self.resource.reset();
        }
    }
}

/// Holds the audio device lock.
#[derive(Debug)]
pub struct AudioLockGuard<'a> {
    device: &'a AudioDevice,
    id: SDL_AudioDeviceID,
}

impl Drop for AudioLockGuard<'_> {
    fn drop(&mut self) {
        unsafe { (self.device.api.SDL_UnlockAudioDevice)(self.id) }
    }
}

fn queue_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::InvalidArgument(format!("buffer of {} bytes is too large", len)))
}
