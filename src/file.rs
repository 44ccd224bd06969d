//! File streams backed by the runtime's RWops.

use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::os::raw::{c_int, c_void};

use crate::error::{Error, Result};
use crate::ffi::{self, check_resource, to_cstring, Api, SDL_RWops};
use crate::resource::Resource;
use crate::types::SeekWhence;

/// A read/write stream over a file or a memory buffer.
///
/// Supports RAII pattern for automatic cleanup. Streams over borrowed
/// memory carry the buffer's lifetime.
///
/// # Example
///
/// ```no_run
/// use std::io::{Read, Write};
/// use sdl::File;
///
/// let mut file = File::open("/tmp/test.txt", "wb")?;
/// file.write_all(b"Hello, World!")?;
/// file.close()?;
///
/// let mut file = File::open("/tmp/test.txt", "rb")?;
/// let mut contents = String::new();
/// file.read_to_string(&mut contents)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct File<'a> {
    api: &'static Api,
    resource: Resource<*mut SDL_RWops>,
    path: Option<String>,
    _data: PhantomData<&'a mut [u8]>,
}

impl File<'static> {
    /// Open a file; `mode` takes `fopen` strings such as `"rb"` or `"w+"`.
    pub fn open(path: &str, mode: &str) -> Result<Self> {
        let api = ffi::api()?;
        let path_c = to_cstring("path", path)?;
        let mode_c = to_cstring("mode", mode)?;

        let resource = Resource::construct(
            || unsafe { (api.SDL_RWFromFile)(path_c.as_ptr(), mode_c.as_ptr()) },
            close_releaser(api),
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
            path: Some(path.to_string()),
            _data: PhantomData,
        })
    }
}

impl<'a> File<'a> {
    /// Read-only stream over `data`.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        let api = ffi::api()?;
        let len = buffer_len(data.len())?;

        let resource = Resource::construct(
            || unsafe { (api.SDL_RWFromConstMem)(data.as_ptr() as *const c_void, len) },
            close_releaser(api),
        );

        Self::from_memory(api, resource)
    }

    /// Read/write stream over `data`; writes cannot grow the buffer.
    pub fn from_bytes_mut(data: &'a mut [u8]) -> Result<Self> {
        let api = ffi::api()?;
        let len = buffer_len(data.len())?;

        let resource = Resource::construct(
            || unsafe { (api.SDL_RWFromMem)(data.as_mut_ptr() as *mut c_void, len) },
            close_releaser(api),
        );

        Self::from_memory(api, resource)
    }

    fn from_memory(api: &'static Api, resource: Resource<*mut SDL_RWops>) -> Result<Self> {
        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
            path: None,
            _data: PhantomData,
        })
    }

    /// Get the file path, if the stream was opened from one.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Check if the stream is still open.
    pub fn is_open(&self) -> bool {
        self.resource.is_valid()
    }

    fn handle(&self) -> Result<*mut SDL_RWops> {
        if self.resource.is_valid() {
            Ok(self.resource.get())
        } else {
            Err(Error::AlreadyClosed)
        }
    }

    /// Total size of the stream in bytes.
    pub fn size(&self) -> Result<u64> {
        let handle = self.handle()?;
        let size = unsafe { (self.api.SDL_RWsize)(handle) };
        u64::try_from(size).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Read up to `buf.len()` bytes from the stream.
    ///
    /// Returns the number of bytes read; `0` at end of stream.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let handle = self.handle()?;
        if buf.is_empty() {
            return Ok(0);
        }

        let n = unsafe { (self.api.SDL_RWread)(handle, buf.as_mut_ptr() as *mut c_void, 1, buf.len()) };
        Ok(n)
    }

    /// Write data to the stream.
    ///
    /// Returns the number of bytes written.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let handle = self.handle()?;
        if buf.is_empty() {
            return Ok(0);
        }

        let n = unsafe { (self.api.SDL_RWwrite)(handle, buf.as_ptr() as *const c_void, 1, buf.len()) };
        if n == 0 {
            return Err(ffi::error_from_sdl(self.api));
        }

        Ok(n)
    }

    /// Seek to a position in the stream.
    ///
    /// Returns the new stream position.
    pub fn seek(&mut self, offset: i64, whence: SeekWhence) -> Result<u64> {
        let handle = self.handle()?;
        let pos = unsafe { (self.api.SDL_RWseek)(handle, offset, whence.into()) };
        u64::try_from(pos).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Current stream position.
    pub fn tell(&self) -> Result<u64> {
        let handle = self.handle()?;
        let pos = unsafe { (self.api.SDL_RWtell)(handle) };
        u64::try_from(pos).map_err(|_| ffi::error_from_sdl(self.api))
    }

    /// Close the stream.
    ///
    /// This is called automatically on drop, but can be called explicitly
    /// to handle any errors that may occur during close.
    pub fn close(&mut self) -> Result<()> {
        if !self.resource.is_valid() {
            return Ok(());
        }

        let handle = self.resource.release();
        let code = unsafe { (self.api.SDL_RWclose)(handle) };
        ffi::check(self.api, code)
    }

    /// Hand the stream over to a runtime call that closes it.
    pub(crate) fn into_raw(mut self) -> *mut SDL_RWops {
        self.resource.release()
    }
}

fn close_releaser(api: &'static Api) -> impl FnOnce(*mut SDL_RWops) {
    let close = api.SDL_RWclose;
    move |handle| {
        // Ignore errors on drop
        if unsafe { close(handle) } < 0 {
            log::warn!("SDL_RWclose failed while dropping a stream");
        }
    }
}

fn buffer_len(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| Error::InvalidArgument(format!("buffer of {} bytes is too large", len)))
}

fn to_io_error(e: Error) -> io::Error {
    match e {
        Error::Io(inner) => inner,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

// Implement std::io::Read
impl Read for File<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_bytes(buf).map_err(to_io_error)
    }
}

// Implement std::io::Write
impl Write for File<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(to_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Implement std::io::Seek
impl io::Seek for File<'_> {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            io::SeekFrom::Start(n) => (
                i64::try_from(n).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "offset too large"))?,
                SeekWhence::Set,
            ),
            io::SeekFrom::Current(n) => (n, SeekWhence::Current),
            io::SeekFrom::End(n) => (n, SeekWhence::End),
        };

        File::seek(self, offset, whence).map_err(to_io_error)
    }
}
