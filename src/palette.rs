//! Color palettes for indexed surfaces.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi::{self, check, check_resource, Api, SDL_Color, SDL_Palette};
use crate::resource::Resource;
use crate::types::Color;

/// A palette of colors, initialised to white.
#[derive(Debug)]
pub struct Palette {
    api: &'static Api,
    resource: Resource<*mut SDL_Palette>,
}

impl Palette {
    /// Allocate a palette with `ncolors` entries.
    pub fn new(ncolors: usize) -> Result<Self> {
        if ncolors == 0 {
            return Err(Error::InvalidArgument("palette needs at least one color".to_string()));
        }
        let n = i32::try_from(ncolors)
            .map_err(|_| Error::InvalidArgument(format!("{} colors is too many", ncolors)))?;

        let api = ffi::api()?;
        let free = api.SDL_FreePalette;
        let resource = Resource::construct(
            || unsafe { (api.SDL_AllocPalette)(n) },
            move |p| unsafe { free(p) },
        );

        Ok(Self {
            api,
            resource: check_resource(api, resource)?,
        })
    }

    /// The raw palette pointer.
    pub fn raw(&self) -> *mut SDL_Palette {
        self.resource.get()
    }

    fn inner(&self) -> &SDL_Palette {
        // SAFETY: the resource is valid for the life of `self`.
        unsafe { &*self.resource.get() }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner().ncolors.max(0) as usize
    }

    /// Always false for a successfully allocated palette.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counter bumped by the runtime on every change.
    pub fn version(&self) -> u32 {
        self.inner().version
    }

    /// Copy out every entry.
    pub fn colors(&self) -> Vec<Color> {
        let inner = self.inner();
        if inner.colors.is_null() {
            return Vec::new();
        }

        // SAFETY: `colors` points to `ncolors` entries owned by the palette.
        let raw = unsafe { std::slice::from_raw_parts(inner.colors, self.len()) };
        raw.iter().copied().map(Color::from).collect()
    }

    /// Overwrite entries starting at `first`.
    pub fn set_colors(&self, colors: &[Color], first: usize) -> Result<()> {
        let (first, count) = color_range(first, colors.len(), self.len())?;

        let raw: Vec<SDL_Color> = colors.iter().copied().map(SDL_Color::from).collect();
        let code = unsafe { (self.api.SDL_SetPaletteColors)(self.raw(), raw.as_ptr(), first, count) };
        check(self.api, code)
    }
}

/// Check that `count` entries starting at `first` fit a palette of `len`.
fn color_range(first: usize, count: usize, len: usize) -> Result<(c_int, c_int)> {
    let out_of_range = || Error::InvalidArgument(format!("{} colors at {} overflow a palette of {}", count, first, len));

    match first.checked_add(count) {
        Some(end) if end <= len => {}
        _ => return Err(out_of_range()),
    }

    let first = c_int::try_from(first).map_err(|_| out_of_range())?;
    let count = c_int::try_from(count).map_err(|_| out_of_range())?;
    Ok((first, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_range() {
        assert_eq!(color_range(0, 4, 4).unwrap(), (0, 4));
        assert_eq!(color_range(2, 2, 4).unwrap(), (2, 2));
        assert_eq!(color_range(4, 0, 4).unwrap(), (4, 0));
        assert!(color_range(3, 2, 4).is_err());
    }

    #[test]
    fn test_color_range_overflow() {
        assert!(matches!(color_range(usize::MAX, 1, 4), Err(Error::InvalidArgument(_))));
        assert!(matches!(color_range(1, usize::MAX, 4), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            color_range(c_int::MAX as usize + 1, 0, usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }
}
