//! Exclusive ownership of handles allocated by the native runtime.
//!
//! Every owning wrapper in this crate (windows, renderers, textures, audio
//! devices, ...) stores its raw handle in a [`Resource`]. The resource pairs
//! the handle with the runtime call that destroys it and guarantees that call
//! happens exactly once, whichever way ownership ends.
//!
//! The runtime signals creation failure by returning a null handle and
//! recording an error string. `Resource` keeps that convention: a failed
//! construction yields an empty resource and it is up to the caller to check
//! [`Resource::is_valid`] and query the runtime for the error.

use std::fmt;

/// A raw handle type understood by the native runtime.
///
/// `NULL` is the sentinel the runtime returns on failure and the value an
/// empty [`Resource`] holds.
pub trait RawHandle: Copy + PartialEq + fmt::Debug {
    /// The "owns nothing" value.
    const NULL: Self;

    /// Check if this is the sentinel value.
    #[inline]
    fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl<T> RawHandle for *mut T {
    const NULL: Self = std::ptr::null_mut();
}

impl<T> RawHandle for *const T {
    const NULL: Self = std::ptr::null();
}

/// Macro to implement [`RawHandle`] for integer identifiers.
macro_rules! integer_handle {
    ($($ty:ty),*) => {
        $(
            impl RawHandle for $ty {
                const NULL: Self = 0;
            }
        )*
    };
}

integer_handle!(u32, i32, u64, usize);

type Releaser<H> = Box<dyn FnOnce(H)>;

/// Move-only owner of one raw handle.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use sdl::Resource;
///
/// let released = Rc::new(Cell::new(0u32));
/// let seen = Rc::clone(&released);
///
/// let mut res = Resource::construct(|| 0x1000u32, move |h| seen.set(h));
/// assert!(res.is_valid());
/// assert_eq!(res.get(), 0x1000);
///
/// res.reset();
/// assert!(!res.is_valid());
/// assert_eq!(released.get(), 0x1000);
/// ```
pub struct Resource<H: RawHandle> {
    raw: H,
    releaser: Option<Releaser<H>>,
}

impl<H: RawHandle> Resource<H> {
    /// Create a resource that owns nothing.
    pub fn empty() -> Self {
        Self {
            raw: H::NULL,
            releaser: None,
        }
    }

    /// Run `create` once and take ownership of whatever it returns.
    ///
    /// `release` is bound to the handle and runs when ownership ends. If
    /// `create` returns the null sentinel the resource is empty and `release`
    /// is never called.
    pub fn construct<C, R>(create: C, release: R) -> Self
    where
        C: FnOnce() -> H,
        R: FnOnce(H) + 'static,
    {
        Self::new(create(), release)
    }

    /// Take ownership of an already created handle.
    pub fn new<R>(raw: H, release: R) -> Self
    where
        R: FnOnce(H) + 'static,
    {
        if raw.is_null() {
            log::trace!("resource construction returned null");
        } else {
            log::trace!("acquired resource {:?}", raw);
        }

        Self {
            raw,
            releaser: Some(Box::new(release)),
        }
    }

    /// Wrap a handle owned by someone else.
    ///
    /// Dropping the returned resource does nothing.
    pub fn borrowed(raw: H) -> Self {
        Self {
            raw,
            releaser: None,
        }
    }

    /// Check if this resource holds a non-null handle.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.raw.is_null()
    }

    /// Check if dropping this resource would release its handle.
    #[inline]
    pub fn is_owning(&self) -> bool {
        self.is_valid() && self.releaser.is_some()
    }

    /// Get the raw handle without giving up ownership.
    ///
    /// Returns the null sentinel when the resource is empty.
    #[inline]
    pub fn get(&self) -> H {
        self.raw
    }

    /// Release the held handle, if any, and become empty.
    pub fn reset(&mut self) {
        let raw = std::mem::replace(&mut self.raw, H::NULL);
        let releaser = self.releaser.take();

        if raw.is_null() {
            return;
        }

        if let Some(release) = releaser {
            log::trace!("releasing resource {:?}", raw);
            release(raw);
        }
    }

    /// Release the held handle, then take over `other`.
    pub fn reset_with(&mut self, mut other: Resource<H>) {
        self.reset();
        self.raw = std::mem::replace(&mut other.raw, H::NULL);
        self.releaser = other.releaser.take();
    }

    /// Give up ownership without releasing.
    ///
    /// The caller becomes responsible for the returned handle; this resource
    /// is left empty.
    pub fn release(&mut self) -> H {
        self.releaser = None;
        std::mem::replace(&mut self.raw, H::NULL)
    }

    /// Consume the resource and return its handle without releasing it.
    pub fn into_raw(mut self) -> H {
        self.release()
    }
}

impl<H: RawHandle> Default for Resource<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H: RawHandle> Drop for Resource<H> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<H: RawHandle> fmt::Debug for Resource<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("raw", &self.raw)
            .field("owning", &self.is_owning())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every handle passed to a releaser.
    #[derive(Clone, Default)]
    struct Releases(Rc<RefCell<Vec<u32>>>);

    impl Releases {
        fn releaser(&self) -> impl FnOnce(u32) + 'static {
            let log = Rc::clone(&self.0);
            move |h| log.borrow_mut().push(h)
        }

        fn calls(&self) -> Vec<u32> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn test_construct_success() {
        let releases = Releases::default();
        let res = Resource::construct(|| 0x1000u32, releases.releaser());

        assert!(res.is_valid());
        assert!(res.is_owning());
        assert_eq!(res.get(), 0x1000);
        assert!(releases.calls().is_empty());
    }

    #[test]
    fn test_construct_calls_creator_once() {
        let created = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&created);
        let _res = Resource::construct(
            move || {
                *counter.borrow_mut() += 1;
                7u32
            },
            |_| {},
        );

        assert_eq!(*created.borrow(), 1);
    }

    #[test]
    fn test_construct_failure_never_releases() {
        let releases = Releases::default();
        let res = Resource::construct(|| 0u32, releases.releaser());

        assert!(!res.is_valid());
        assert!(!res.is_owning());
        drop(res);

        assert!(releases.calls().is_empty());
    }

    #[test]
    fn test_drop_releases_once() {
        let releases = Releases::default();
        {
            let _res = Resource::construct(|| 0x42u32, releases.releaser());
        }

        assert_eq!(releases.calls(), vec![0x42]);
    }

    #[test]
    fn test_reset_releases_and_empties() {
        let releases = Releases::default();
        let mut res = Resource::construct(|| 0x1000u32, releases.releaser());
        assert!(res.is_valid());
        assert_eq!(res.get(), 0x1000);

        res.reset();

        assert_eq!(releases.calls(), vec![0x1000]);
        assert!(!res.is_valid());
        assert_eq!(res.get(), 0);

        // A second reset and the final drop are no-ops
        res.reset();
        drop(res);
        assert_eq!(releases.calls(), vec![0x1000]);
    }

    #[test]
    fn test_move_transfers_ownership() {
        let releases = Releases::default();
        let a = Resource::construct(|| 0x2000u32, releases.releaser());

        let b = a;
        assert!(b.is_valid());
        assert_eq!(b.get(), 0x2000);
        assert!(releases.calls().is_empty());

        drop(b);
        assert_eq!(releases.calls(), vec![0x2000]);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let releases = Releases::default();
        let mut a = Resource::construct(|| 0x2000u32, releases.releaser());

        let b = std::mem::take(&mut a);
        assert!(!a.is_valid());
        assert!(b.is_valid());

        drop(a);
        assert!(releases.calls().is_empty());

        drop(b);
        assert_eq!(releases.calls(), vec![0x2000]);
    }

    #[test]
    fn test_move_assign_releases_previous() {
        let releases = Releases::default();
        let mut dst = Resource::construct(|| 1u32, releases.releaser());
        let src = Resource::construct(|| 2u32, releases.releaser());

        dst = src;
        assert_eq!(releases.calls(), vec![1]);
        assert_eq!(dst.get(), 2);

        drop(dst);
        assert_eq!(releases.calls(), vec![1, 2]);
    }

    #[test]
    #[allow(clippy::self_assignment)]
    fn test_self_move_is_noop() {
        let releases = Releases::default();
        let mut res = Resource::construct(|| 0x3000u32, releases.releaser());

        res = res;
        assert!(res.is_valid());
        assert_eq!(res.get(), 0x3000);
        assert!(releases.calls().is_empty());

        drop(res);
        assert_eq!(releases.calls(), vec![0x3000]);
    }

    #[test]
    fn test_release_gives_up_ownership() {
        let releases = Releases::default();
        let mut res = Resource::construct(|| 0x4000u32, releases.releaser());

        let raw = res.release();
        assert_eq!(raw, 0x4000);
        assert!(!res.is_valid());
        assert!(releases.calls().is_empty());

        drop(res);
        assert!(releases.calls().is_empty());
    }

    #[test]
    fn test_into_raw() {
        let releases = Releases::default();
        let res = Resource::construct(|| 9u32, releases.releaser());

        assert_eq!(res.into_raw(), 9);
        assert!(releases.calls().is_empty());
    }

    #[test]
    fn test_reset_with_releases_then_adopts() {
        let releases = Releases::default();
        let mut res = Resource::construct(|| 0x10u32, releases.releaser());

        res.reset_with(Resource::construct(|| 0x20u32, releases.releaser()));
        assert_eq!(releases.calls(), vec![0x10]);
        assert_eq!(res.get(), 0x20);

        drop(res);
        assert_eq!(releases.calls(), vec![0x10, 0x20]);
    }

    #[test]
    fn test_reset_with_on_empty() {
        let releases = Releases::default();
        let mut res = Resource::<u32>::empty();

        res.reset_with(Resource::construct(|| 5u32, releases.releaser()));
        assert!(releases.calls().is_empty());
        assert!(res.is_owning());
    }

    #[test]
    fn test_borrowed_never_releases() {
        let mut res = Resource::borrowed(0x77u32);
        assert!(res.is_valid());
        assert!(!res.is_owning());

        res.reset();
        assert!(!res.is_valid());
    }

    #[test]
    fn test_pointer_handles() {
        let mut value = 5i32;
        let ptr: *mut i32 = &mut value;
        let released = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&released);

        let res = Resource::construct(move || ptr, move |p| *seen.borrow_mut() = Some(p));
        assert_eq!(res.get(), ptr);
        drop(res);

        assert_eq!(*released.borrow(), Some(ptr));

        let empty = Resource::<*mut i32>::default();
        assert!(empty.get().is_null());
    }

    #[test]
    fn test_release_during_unwind() {
        let releases = Releases::default();
        let inner = releases.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _res = Resource::construct(|| 0x55u32, inner.releaser());
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(releases.calls(), vec![0x55]);
    }

    #[test]
    fn test_debug_output() {
        let res = Resource::borrowed(3u32);
        let text = format!("{:?}", res);
        assert!(text.contains("raw: 3"));
        assert!(text.contains("owning: false"));
    }
}
