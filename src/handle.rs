use alloc::boxed::Box;
use core::fmt::{Debug, Formatter};
use core::mem::ManuallyDrop;
use core::ptr;

/// Owning-pointer capability.
///
/// Implemented by payloads that behave like raw handles: they have a null
/// state and own a resource that has to be released. Releasing is idempotent,
/// the first call frees the pointee and leaves the handle null.
///
/// Implementors must call [`release`](Handle::release) from their `Drop` impl.
/// Dropping or clearing the container that holds a handle only drops it, so a
/// handle that frees nothing on drop leaks. [`Optional::release`](crate::Optional::release)
/// releases explicitly before clearing.
pub trait Handle {
	fn null() -> Self;

	fn is_null(&self) -> bool;

	fn release(&mut self);
}

/// A raw owning pointer to a heap allocated `P`.
///
/// Starts out null when created through [`Default`] and releases its pointee
/// exactly once, either through [`Handle::release`] or on drop.
pub struct OwnedPtr<P> {
	pointer: *mut P,
}

impl<P> OwnedPtr<P> {
	pub const fn null() -> Self {
		Self {
			pointer: ptr::null_mut(),
		}
	}

	pub fn new(value: P) -> Self {
		Self {
			pointer: Box::into_raw(Box::new(value)),
		}
	}

	/// Takes ownership of `pointer`.
	///
	/// # Safety
	/// `pointer` must be null or come from [`Box::into_raw`] (or
	/// [`OwnedPtr::into_raw`]) and must not be owned by anything else.
	pub const unsafe fn from_raw(pointer: *mut P) -> Self {
		Self { pointer }
	}

	/// Gives up ownership without releasing the pointee.
	pub fn into_raw(self) -> *mut P {
		let this = ManuallyDrop::new(self);
		this.pointer
	}

	pub fn is_null(&self) -> bool {
		self.pointer.is_null()
	}

	pub fn as_ref(&self) -> Option<&P> {
		// SAFETY: a non-null pointer is always a live allocation owned by `self`
		unsafe { self.pointer.as_ref() }
	}

	pub fn as_mut(&mut self) -> Option<&mut P> {
		// SAFETY: a non-null pointer is always a live allocation owned by `self`
		unsafe { self.pointer.as_mut() }
	}

	pub fn release(&mut self) {
		if !self.pointer.is_null() {
			// SAFETY: the pointer came from `Box::into_raw` and is nulled right after,
			// so it is freed only once
			drop(unsafe { Box::from_raw(self.pointer) });
			self.pointer = ptr::null_mut();
		}
	}
}

impl<P> Handle for OwnedPtr<P> {
	fn null() -> Self {
		OwnedPtr::null()
	}

	fn is_null(&self) -> bool {
		OwnedPtr::is_null(self)
	}

	fn release(&mut self) {
		OwnedPtr::release(self)
	}
}

impl<P> Handle for Option<Box<P>> {
	fn null() -> Self {
		None
	}

	fn is_null(&self) -> bool {
		self.is_none()
	}

	fn release(&mut self) {
		*self = None;
	}
}

impl<P> Drop for OwnedPtr<P> {
	fn drop(&mut self) {
		self.release();
	}
}

impl<P> Default for OwnedPtr<P> {
	fn default() -> Self {
		OwnedPtr::null()
	}
}

impl<P> From<Box<P>> for OwnedPtr<P> {
	fn from(boxed: Box<P>) -> Self {
		Self {
			pointer: Box::into_raw(boxed),
		}
	}
}

impl<P> Clone for OwnedPtr<P>
where
	P: Clone,
{
	fn clone(&self) -> Self {
		match self.as_ref() {
			Some(value) => OwnedPtr::new(value.clone()),
			None => OwnedPtr::null(),
		}
	}
}

impl<P> Debug for OwnedPtr<P>
where
	P: Debug,
{
	fn fmt(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
		match self.as_ref() {
			Some(value) => formatter.debug_tuple("OwnedPtr").field(value).finish(),
			None => formatter.write_str("OwnedPtr(null)"),
		}
	}
}

// SAFETY: `OwnedPtr<P>` uniquely owns its pointee, like `Box<P>`
unsafe impl<P> Send for OwnedPtr<P> where P: Send {}
// SAFETY: shared access only hands out `&P`, like `Box<P>`
unsafe impl<P> Sync for OwnedPtr<P> where P: Sync {}
