//! WAVE files decoded by the runtime.

use crate::error::Result;
use crate::ffi::{self, Api, SDL_AudioSpec};
use crate::file::File;
use crate::resource::Resource;
use crate::types::AudioSpec;

/// A decoded WAVE file: its format and raw samples.
///
/// The sample buffer belongs to the runtime and is freed when dropped.
///
/// # Example
///
/// ```no_run
/// use sdl::{AllowedChanges, AudioDevice, Wav};
///
/// let wav = Wav::load("click.wav")?;
/// let device = AudioDevice::open(None, wav.spec(), AllowedChanges::empty(), false)?;
/// device.queue(wav.buffer())?;
/// device.resume();
/// # Ok::<(), sdl::Error>(())
/// ```
#[derive(Debug)]
pub struct Wav {
    resource: Resource<*mut u8>,
    len: u32,
    spec: AudioSpec,
}

impl Wav {
    /// Load a WAVE file from disk.
    pub fn load(path: &str) -> Result<Self> {
        Self::from_file(File::open(path, "rb")?)
    }

    /// Decode a WAVE file held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_file(File::from_bytes(data)?)
    }

    /// Decode from an open stream; the stream is consumed.
    pub fn from_file(file: File<'_>) -> Result<Self> {
        let api = ffi::api()?;
        let mut raw = SDL_AudioSpec::default();
        let mut len = 0u32;

        // The runtime closes the stream (freesrc = 1)
        let rw = file.into_raw();
        let resource = Resource::construct(
            || {
                let mut buf = std::ptr::null_mut();
                let loaded = unsafe { (api.SDL_LoadWAV_RW)(rw, 1, &mut raw, &mut buf, &mut len) };
                if loaded.is_null() {
                    std::ptr::null_mut()
                } else {
                    buf
                }
            },
            free_wav(api),
        );
        let resource = ffi::check_resource(api, resource)?;

        let spec = AudioSpec::from_raw(&raw);
        log::debug!("decoded {} bytes of WAVE audio: {:?}", len, spec);

        Ok(Self { resource, len, spec })
    }

    /// Sample format, rate and channel count.
    pub fn spec(&self) -> &AudioSpec {
        &self.spec
    }

    /// The decoded samples in [`spec`](Self::spec)'s format.
    pub fn buffer(&self) -> &[u8] {
        // SAFETY: the runtime allocated `len` bytes, freed only on drop.
        unsafe { std::slice::from_raw_parts(self.resource.get(), self.len as usize) }
    }

    /// Length of the sample data in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the file held no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn free_wav(api: &'static Api) -> impl FnOnce(*mut u8) {
    let free = api.SDL_FreeWAV;
    move |buf| unsafe { free(buf) }
}
