//! Type definitions, enums and flags.

use bitflags::bitflags;

use crate::ffi;

bitflags! {
    /// Subsystems passed to [`crate::init`] and [`crate::Subsystem`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InitFlags: u32 {
        /// Timer subsystem.
        const TIMER = ffi::SDL_INIT_TIMER;
        /// Audio subsystem.
        const AUDIO = ffi::SDL_INIT_AUDIO;
        /// Video subsystem; implies events.
        const VIDEO = ffi::SDL_INIT_VIDEO;
        /// Joystick subsystem; implies events.
        const JOYSTICK = ffi::SDL_INIT_JOYSTICK;
        /// Haptic (force feedback) subsystem.
        const HAPTIC = ffi::SDL_INIT_HAPTIC;
        /// Game controller subsystem; implies joystick.
        const GAMECONTROLLER = ffi::SDL_INIT_GAMECONTROLLER;
        /// Events subsystem.
        const EVENTS = ffi::SDL_INIT_EVENTS;
        /// Sensor subsystem.
        const SENSOR = ffi::SDL_INIT_SENSOR;
        /// All of the above.
        const EVERYTHING = Self::TIMER.bits()
            | Self::AUDIO.bits()
            | Self::VIDEO.bits()
            | Self::JOYSTICK.bits()
            | Self::HAPTIC.bits()
            | Self::GAMECONTROLLER.bits()
            | Self::EVENTS.bits()
            | Self::SENSOR.bits();
    }
}

bitflags! {
    /// Window state and creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const FULLSCREEN = 0x0000_0001;
        const OPENGL = 0x0000_0002;
        const SHOWN = 0x0000_0004;
        const HIDDEN = 0x0000_0008;
        const BORDERLESS = 0x0000_0010;
        const RESIZABLE = 0x0000_0020;
        const MINIMIZED = 0x0000_0040;
        const MAXIMIZED = 0x0000_0080;
        const INPUT_GRABBED = 0x0000_0100;
        const INPUT_FOCUS = 0x0000_0200;
        const MOUSE_FOCUS = 0x0000_0400;
        const FOREIGN = 0x0000_0800;
        /// Fullscreen at the desktop resolution.
        const FULLSCREEN_DESKTOP = Self::FULLSCREEN.bits() | 0x0000_1000;
        const ALLOW_HIGHDPI = 0x0000_2000;
        const MOUSE_CAPTURE = 0x0000_4000;
        const ALWAYS_ON_TOP = 0x0000_8000;
        const SKIP_TASKBAR = 0x0001_0000;
        const UTILITY = 0x0002_0000;
        const TOOLTIP = 0x0004_0000;
        const POPUP_MENU = 0x0008_0000;
        const VULKAN = 0x1000_0000;
    }
}

bitflags! {
    /// Renderer creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RendererFlags: u32 {
        const SOFTWARE = 0x0000_0001;
        const ACCELERATED = 0x0000_0002;
        const PRESENTVSYNC = 0x0000_0004;
        const TARGETTEXTURE = 0x0000_0008;
    }
}

bitflags! {
    /// Which parts of the desired audio spec the device may change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AllowedChanges: i32 {
        const FREQUENCY = 0x0000_0001;
        const FORMAT = 0x0000_0002;
        const CHANNELS = 0x0000_0004;
        const SAMPLES = 0x0000_0008;
        const ANY = Self::FREQUENCY.bits()
            | Self::FORMAT.bits()
            | Self::CHANNELS.bits()
            | Self::SAMPLES.bits();
    }
}

impl Default for AllowedChanges {
    fn default() -> Self {
        Self::ANY
    }
}

/// Window placement on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPosition {
    /// Let the window manager decide.
    #[default]
    Undefined,
    /// Center on the display.
    Centered,
    /// Absolute coordinate.
    At(i32),
}

impl From<WindowPosition> for i32 {
    fn from(pos: WindowPosition) -> i32 {
        match pos {
            WindowPosition::Undefined => ffi::SDL_WINDOWPOS_UNDEFINED,
            WindowPosition::Centered => ffi::SDL_WINDOWPOS_CENTERED,
            WindowPosition::At(v) => v,
        }
    }
}

/// Options for creating a window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    /// Window title (UTF-8).
    pub title: String,
    /// Horizontal placement.
    pub x: WindowPosition,
    /// Vertical placement.
    pub y: WindowPosition,
    /// Width in screen coordinates (default: 640).
    pub width: u32,
    /// Height in screen coordinates (default: 480).
    pub height: u32,
    /// Creation flags.
    pub flags: WindowFlags,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x: WindowPosition::Centered,
            y: WindowPosition::Centered,
            width: 640,
            height: 480,
            flags: WindowFlags::empty(),
        }
    }
}

/// Texture access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureAccess {
    /// Changes rarely, not lockable.
    #[default]
    Static,
    /// Changes frequently, lockable.
    Streaming,
    /// Can be used as a render target.
    Target,
}

impl From<TextureAccess> for i32 {
    fn from(access: TextureAccess) -> i32 {
        match access {
            TextureAccess::Static => 0,
            TextureAccess::Streaming => 1,
            TextureAccess::Target => 2,
        }
    }
}

impl TextureAccess {
    /// Decode a raw access value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Static),
            1 => Some(Self::Streaming),
            2 => Some(Self::Target),
            _ => None,
        }
    }
}

/// Blend mode used by draw and copy operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// No blending.
    #[default]
    None,
    /// Alpha blending.
    Blend,
    /// Additive blending.
    Add,
    /// Color modulate.
    Mod,
    /// Color multiply.
    Mul,
}

impl From<BlendMode> for i32 {
    fn from(mode: BlendMode) -> i32 {
        match mode {
            BlendMode::None => 0x0,
            BlendMode::Blend => 0x1,
            BlendMode::Add => 0x2,
            BlendMode::Mod => 0x4,
            BlendMode::Mul => 0x8,
        }
    }
}

impl BlendMode {
    /// Decode a raw blend mode.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0x0 => Some(Self::None),
            0x1 => Some(Self::Blend),
            0x2 => Some(Self::Add),
            0x4 => Some(Self::Mod),
            0x8 => Some(Self::Mul),
            _ => None,
        }
    }
}

/// Playback state of an audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioStatus {
    Stopped,
    Playing,
    Paused,
}

impl AudioStatus {
    /// Decode a raw status; unknown values read as stopped.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Playing,
            2 => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

/// Sample format of an audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u16)]
pub enum AudioFormat {
    U8 = 0x0008,
    S8 = 0x8008,
    U16Lsb = 0x0010,
    S16Lsb = 0x8010,
    U16Msb = 0x1010,
    S16Msb = 0x9010,
    S32Lsb = 0x8020,
    S32Msb = 0x9020,
    #[default]
    F32Lsb = 0x8120,
    F32Msb = 0x9120,
}

impl AudioFormat {
    /// Native-endian signed 16-bit.
    #[cfg(target_endian = "little")]
    pub const S16_SYS: Self = Self::S16Lsb;
    /// Native-endian signed 16-bit.
    #[cfg(target_endian = "big")]
    pub const S16_SYS: Self = Self::S16Msb;

    /// Decode a raw format value.
    pub fn from_raw(raw: u16) -> Option<Self> {
        Some(match raw {
            0x0008 => Self::U8,
            0x8008 => Self::S8,
            0x0010 => Self::U16Lsb,
            0x8010 => Self::S16Lsb,
            0x1010 => Self::U16Msb,
            0x9010 => Self::S16Msb,
            0x8020 => Self::S32Lsb,
            0x9020 => Self::S32Msb,
            0x8120 => Self::F32Lsb,
            0x9120 => Self::F32Msb,
            _ => return None,
        })
    }

    /// Raw format value.
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Bits per sample.
    pub fn bit_size(self) -> u16 {
        self.raw() & 0xFF
    }

    /// Whether samples are signed.
    pub fn is_signed(self) -> bool {
        self.raw() & 0x8000 != 0
    }

    /// Whether samples are big-endian.
    pub fn is_big_endian(self) -> bool {
        self.raw() & 0x1000 != 0
    }

    /// Whether samples are floating point.
    pub fn is_float(self) -> bool {
        self.raw() & 0x0100 != 0
    }
}

/// Desired or obtained audio device parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Samples per second.
    pub frequency: i32,
    /// Sample format.
    pub format: AudioFormat,
    /// Number of channels (1 mono, 2 stereo, ...).
    pub channels: u8,
    /// Buffer size in sample frames (power of two).
    pub samples: u16,
    /// Silence value; filled in by the device.
    pub silence: u8,
    /// Buffer size in bytes; filled in by the device.
    pub size: u32,
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self {
            frequency: 48_000,
            format: AudioFormat::F32Lsb,
            channels: 2,
            samples: 4096,
            silence: 0,
            size: 0,
        }
    }
}

impl AudioSpec {
    pub(crate) fn to_raw(self) -> ffi::SDL_AudioSpec {
        ffi::SDL_AudioSpec {
            freq: self.frequency,
            format: self.format.raw(),
            channels: self.channels,
            samples: self.samples,
            ..Default::default()
        }
    }

    pub(crate) fn from_raw(raw: &ffi::SDL_AudioSpec) -> Self {
        Self {
            frequency: raw.freq,
            format: AudioFormat::from_raw(raw.format).unwrap_or_default(),
            channels: raw.channels,
            samples: raw.samples,
            silence: raw.silence,
            size: raw.size,
        }
    }
}

/// Seek origin for file operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekWhence {
    /// Seek from beginning of file.
    #[default]
    Set,
    /// Seek from current position.
    Current,
    /// Seek from end of file.
    End,
}

impl From<SeekWhence> for i32 {
    fn from(whence: SeekWhence) -> i32 {
        match whence {
            SeekWhence::Set => ffi::RW_SEEK_SET,
            SeekWhence::Current => ffi::RW_SEEK_CUR,
            SeekWhence::End => ffi::RW_SEEK_END,
        }
    }
}

/// Well-known pixel formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormatEnum {
    Unknown = 0,
    Index8 = 0x1300_0801,
    Rgb565 = 0x1515_1002,
    Rgb24 = 0x1710_1803,
    Rgb888 = 0x1616_1804,
    Argb8888 = 0x1636_2004,
    Rgba8888 = 0x1646_2004,
    Abgr8888 = 0x1676_2004,
    Bgra8888 = 0x1686_2004,
}

impl PixelFormatEnum {
    /// Byte-order independent 32-bit RGBA.
    #[cfg(target_endian = "little")]
    pub const RGBA32: Self = Self::Abgr8888;
    /// Byte-order independent 32-bit RGBA.
    #[cfg(target_endian = "big")]
    pub const RGBA32: Self = Self::Rgba8888;

    /// Decode a raw format value.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Unknown,
            0x1300_0801 => Self::Index8,
            0x1515_1002 => Self::Rgb565,
            0x1710_1803 => Self::Rgb24,
            0x1616_1804 => Self::Rgb888,
            0x1636_2004 => Self::Argb8888,
            0x1646_2004 => Self::Rgba8888,
            0x1676_2004 => Self::Abgr8888,
            0x1686_2004 => Self::Bgra8888,
            _ => return None,
        })
    }

    /// Raw format value.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Bits per pixel.
    pub fn bits_per_pixel(self) -> u8 {
        pixel_format_bits(self.raw())
    }

    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> u8 {
        pixel_format_bytes(self.raw())
    }

    /// Whether pixels are palette indices.
    pub fn is_indexed(self) -> bool {
        pixel_format_is_indexed(self.raw())
    }
}

fn is_fourcc(raw: u32) -> bool {
    raw != 0 && (raw >> 28) & 0x0F != 1
}

/// Bits per pixel encoded in a raw format value.
pub fn pixel_format_bits(raw: u32) -> u8 {
    if is_fourcc(raw) {
        0
    } else {
        ((raw >> 8) & 0xFF) as u8
    }
}

/// Bytes per pixel encoded in a raw format value.
pub fn pixel_format_bytes(raw: u32) -> u8 {
    if is_fourcc(raw) {
        // Packed YUV formats use two bytes, planar ones one
        match &raw.to_le_bytes() {
            b"YUY2" | b"UYVY" | b"YVYU" => 2,
            _ => 1,
        }
    } else {
        (raw & 0xFF) as u8
    }
}

/// Whether a raw format value stores palette indices.
pub fn pixel_format_is_indexed(raw: u32) -> bool {
    !is_fourcc(raw) && matches!((raw >> 24) & 0x0F, 1..=3)
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for ffi::SDL_Color {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<ffi::SDL_Color> for Color {
    fn from(c: ffi::SDL_Color) -> Self {
        Self::rgba(c.r, c.g, c.b, c.a)
    }
}

/// Integer point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// A point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// A rectangle with its top-left corner at `(x, y)`.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Right edge (exclusive). Wide enough for any `x + w`.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    /// Check if `p` lies inside; the right and bottom edges are exclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && i64::from(p.x) < self.right() && p.y >= self.y && i64::from(p.y) < self.bottom()
    }

    /// The overlapping area, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let w = self.right().min(other.right()) - i64::from(x);
        let h = self.bottom().min(other.bottom()) - i64::from(y);
        if w <= 0 || h <= 0 {
            return None;
        }

        // Bounded by the narrower input, so it fits
        Some(Rect::new(x, y, w as i32, h as i32))
    }

    /// Check if the two rectangles overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

impl From<Rect> for ffi::SDL_Rect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
        }
    }
}

impl From<ffi::SDL_Rect> for Rect {
    fn from(r: ffi::SDL_Rect) -> Self {
        Self::new(r.x, r.y, r.w, r.h)
    }
}

/// Linked library version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_flags_everything() {
        assert_eq!(InitFlags::EVERYTHING.bits(), 0xF231);
        assert!(InitFlags::EVERYTHING.contains(InitFlags::VIDEO | InitFlags::AUDIO));
    }

    #[test]
    fn test_fullscreen_desktop_includes_fullscreen() {
        assert!(WindowFlags::FULLSCREEN_DESKTOP.contains(WindowFlags::FULLSCREEN));
        assert_eq!(WindowFlags::FULLSCREEN_DESKTOP.bits(), 0x1001);
    }

    #[test]
    fn test_window_position() {
        assert_eq!(i32::from(WindowPosition::Centered), 0x2FFF_0000);
        assert_eq!(i32::from(WindowPosition::Undefined), 0x1FFF_0000);
        assert_eq!(i32::from(WindowPosition::At(-20)), -20);
    }

    #[test]
    fn test_blend_mode_roundtrip() {
        for mode in [BlendMode::None, BlendMode::Blend, BlendMode::Add, BlendMode::Mod, BlendMode::Mul] {
            assert_eq!(BlendMode::from_raw(mode.into()), Some(mode));
        }
        assert_eq!(BlendMode::from_raw(0x7FFF_FFFF), None);
    }

    #[test]
    fn test_audio_format_bits() {
        assert_eq!(AudioFormat::S16Lsb.bit_size(), 16);
        assert!(AudioFormat::S16Lsb.is_signed());
        assert!(!AudioFormat::U8.is_signed());
        assert!(AudioFormat::F32Msb.is_float());
        assert!(AudioFormat::F32Msb.is_big_endian());
        assert!(!AudioFormat::F32Lsb.is_big_endian());
        assert_eq!(AudioFormat::from_raw(0x1234), None);
    }

    #[test]
    fn test_audio_status_unknown_is_stopped() {
        assert_eq!(AudioStatus::from_raw(1), AudioStatus::Playing);
        assert_eq!(AudioStatus::from_raw(99), AudioStatus::Stopped);
    }

    #[test]
    fn test_pixel_format_sizes() {
        assert_eq!(PixelFormatEnum::Argb8888.bits_per_pixel(), 32);
        assert_eq!(PixelFormatEnum::Argb8888.bytes_per_pixel(), 4);
        assert_eq!(PixelFormatEnum::Rgb888.bits_per_pixel(), 24);
        assert_eq!(PixelFormatEnum::Rgb888.bytes_per_pixel(), 4);
        assert_eq!(PixelFormatEnum::Rgb24.bytes_per_pixel(), 3);
        assert_eq!(PixelFormatEnum::Rgb565.bytes_per_pixel(), 2);
        assert!(PixelFormatEnum::Index8.is_indexed());
        assert!(!PixelFormatEnum::Rgba8888.is_indexed());
    }

    #[test]
    fn test_pixel_format_fourcc() {
        let yuy2 = u32::from_le_bytes(*b"YUY2");
        let iyuv = u32::from_le_bytes(*b"IYUV");
        assert_eq!(pixel_format_bytes(yuy2), 2);
        assert_eq!(pixel_format_bytes(iyuv), 1);
        assert_eq!(pixel_format_bits(yuy2), 0);
        assert!(!pixel_format_is_indexed(yuy2));
    }

    #[test]
    fn test_pixel_format_from_raw() {
        assert_eq!(PixelFormatEnum::from_raw(0x1646_2004), Some(PixelFormatEnum::Rgba8888));
        assert_eq!(PixelFormatEnum::from_raw(0xDEAD), None);
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(9, 12)));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));

        let touching = Rect::new(10, 0, 5, 5);
        assert!(!a.intersects(&touching));
        assert!(!a.intersects(&Rect::new(2, 2, 0, 4)));
    }

    #[test]
    fn test_rect_near_i32_limits() {
        let far = Rect::new(i32::MAX - 5, 0, 10, 10);
        assert_eq!(far.right(), i64::from(i32::MAX) + 5);
        assert!(far.contains(Point::new(i32::MAX - 1, 1)));
        assert!(far.contains(Point::new(i32::MAX, 9)));
        assert!(!far.contains(Point::new(i32::MAX - 6, 1)));

        assert_eq!(far.intersection(&Rect::new(0, 0, 10, 10)), None);
        assert_eq!(
            far.intersection(&Rect::new(i32::MAX - 1, 5, i32::MAX, i32::MAX)),
            Some(Rect::new(i32::MAX - 1, 5, 6, 5))
        );

        let whole = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert!(whole.contains(Point::new(i32::MIN, -2)));
        assert!(!whole.contains(Point::new(-1, 0)));
        assert!(whole.intersects(&Rect::new(-10, -10, 5, 5)));
    }

    #[test]
    fn test_color_conversion() {
        let raw: ffi::SDL_Color = Color::rgb(1, 2, 3).into();
        assert_eq!(raw.a, 0xFF);
        assert_eq!(Color::from(raw), Color::rgba(1, 2, 3, 0xFF));
    }

    #[test]
    fn test_audio_spec_raw() {
        let spec = AudioSpec {
            frequency: 22_050,
            format: AudioFormat::S16Lsb,
            channels: 1,
            samples: 512,
            ..Default::default()
        };
        let raw = spec.to_raw();
        assert_eq!(raw.freq, 22_050);
        assert_eq!(raw.format, 0x8010);
        assert!(raw.callback.is_none());

        let back = AudioSpec::from_raw(&raw);
        assert_eq!(back.format, AudioFormat::S16Lsb);
        assert_eq!(back.samples, 512);
    }

    #[test]
    fn test_version_display() {
        let v = Version { major: 2, minor: 28, patch: 5 };
        assert_eq!(v.to_string(), "2.28.5");
    }
}
