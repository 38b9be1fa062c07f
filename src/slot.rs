use crate::{Iter, Optional};
use core::fmt::{Debug, Formatter};
use core::mem::{ManuallyDrop, MaybeUninit};

/// A single-assignment container whose occupancy is part of its type.
///
/// `Slot<T, false>` is empty and can be filled exactly once, producing a
/// `Slot<T, true>`. There is no way to set a value on a `Slot<T, true>`, so a
/// second assignment is a compile error rather than a runtime one.
///
/// A builder that only offers `build` once every field is set:
/// ```
/// use iter_option::Slot;
///
/// #[derive(Debug, PartialEq)]
/// struct Endpoint {
/// 	host: String,
/// 	port: u16,
/// }
///
/// struct Builder<const HOST: bool, const PORT: bool> {
/// 	host: Slot<String, HOST>,
/// 	port: Slot<u16, PORT>,
/// }
///
/// impl Builder<false, false> {
/// 	fn new() -> Self {
/// 		Builder {
/// 			host: Slot::vacant(),
/// 			port: Slot::vacant(),
/// 		}
/// 	}
/// }
///
/// impl<const PORT: bool> Builder<false, PORT> {
/// 	fn host(self, host: &str) -> Builder<true, PORT> {
/// 		Builder {
/// 			host: self.host.emplace(host),
/// 			port: self.port,
/// 		}
/// 	}
/// }
///
/// impl<const HOST: bool> Builder<HOST, false> {
/// 	fn port(self, port: u16) -> Builder<HOST, true> {
/// 		Builder {
/// 			host: self.host,
/// 			port: self.port.fill(port),
/// 		}
/// 	}
/// }
///
/// impl Builder<true, true> {
/// 	fn build(self) -> Endpoint {
/// 		Endpoint {
/// 			host: self.host.into_inner(),
/// 			port: self.port.into_inner(),
/// 		}
/// 	}
/// }
///
/// let endpoint = Builder::<false, false>::new().port(8080).host("localhost").build();
/// assert_eq!(Endpoint { host: "localhost".into(), port: 8080 }, endpoint);
/// ```
///
/// Filling a slot twice does not compile:
/// ```compile_fail
/// use iter_option::Slot;
///
/// let slot = Slot::<u8, false>::vacant().fill(1);
/// let _ = slot.fill(2);
/// ```
pub struct Slot<T, const SET: bool> {
	value: MaybeUninit<T>,
}

impl<T> Slot<T, false> {
	pub const fn vacant() -> Self {
		Self {
			value: MaybeUninit::uninit(),
		}
	}

	pub fn fill(self, value: T) -> Slot<T, true> {
		Slot::new(value)
	}

	/// Constructs the value from `args` directly into the filled slot.
	pub fn emplace<A>(self, args: A) -> Slot<T, true>
	where
		T: From<A>,
	{
		Slot::new(T::from(args))
	}
}

impl<T> Slot<T, true> {
	pub const fn new(value: T) -> Self {
		Self {
			value: MaybeUninit::new(value),
		}
	}

	pub fn get(&mut self) -> &mut T {
		// SAFETY: Slot<T, true> can only be constructed with a value inside (tracked by the `true`)
		unsafe { self.value.assume_init_mut() }
	}

	pub fn get_ref(&self) -> &T {
		// SAFETY: Slot<T, true> can only be constructed with a value inside (tracked by the `true`)
		unsafe { self.value.assume_init_ref() }
	}

	pub fn into_inner(self) -> T {
		let this = ManuallyDrop::new(self);
		// SAFETY: the value is initialized (tracked by the `true`) and `this` is never dropped,
		// so it is read out exactly once
		unsafe { this.value.assume_init_read() }
	}
}

impl<T, const SET: bool> Slot<T, SET> {
	pub const fn is_empty(&self) -> bool {
		!SET
	}

	pub const fn is_defined(&self) -> bool {
		SET
	}

	pub fn as_option(&self) -> Option<&T> {
		if SET {
			// SAFETY: Slot<T, true> can only be constructed with a value inside (tracked by the `true`)
			Some(unsafe { self.value.assume_init_ref() })
		} else {
			None
		}
	}

	pub fn as_mut_option(&mut self) -> Option<&mut T> {
		if SET {
			// SAFETY: Slot<T, true> can only be constructed with a value inside (tracked by the `true`)
			Some(unsafe { self.value.assume_init_mut() })
		} else {
			None
		}
	}

	pub fn iter(&self) -> Iter<&T> {
		Iter::new(self.as_option())
	}

	pub fn iter_mut(&mut self) -> Iter<&mut T> {
		Iter::new(self.as_mut_option())
	}

	/// Converts into a runtime-checked [`Optional`].
	pub fn into_optional(self) -> Optional<T> {
		let this = ManuallyDrop::new(self);
		if SET {
			// SAFETY: the value is initialized (tracked by the `true`) and `this` is never dropped,
			// so it is read out exactly once
			Optional::of(unsafe { this.value.assume_init_read() })
		} else {
			Optional::empty()
		}
	}
}

impl<T, const SET: bool> Drop for Slot<T, SET> {
	fn drop(&mut self) {
		if SET {
			// SAFETY: Slot<T, true> can only be constructed with a value inside (tracked by the `true`)
			unsafe { self.value.assume_init_drop() }
		}
	}
}

impl<T> Default for Slot<T, false> {
	fn default() -> Self {
		Slot::vacant()
	}
}

impl<T> From<T> for Slot<T, true> {
	fn from(value: T) -> Self {
		Slot::new(value)
	}
}

impl<T, const SET: bool> From<Slot<T, SET>> for Optional<T> {
	fn from(slot: Slot<T, SET>) -> Self {
		slot.into_optional()
	}
}

impl<T> Clone for Slot<T, true>
where
	T: Clone,
{
	fn clone(&self) -> Self {
		Slot::new(self.get_ref().clone())
	}
}

impl<T> Clone for Slot<T, false> {
	fn clone(&self) -> Self {
		Slot::vacant()
	}
}

impl<T, const SET: bool> Debug for Slot<T, SET>
where
	T: Debug,
{
	fn fmt(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
		match self.as_option() {
			Some(value) => formatter.debug_tuple("Slot::new").field(value).finish(),
			None => formatter.write_str("Slot::vacant"),
		}
	}
}

impl<T, const SET: bool> PartialEq for Slot<T, SET>
where
	T: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.as_option().eq(&other.as_option())
	}
}

impl<T, const SET: bool> Eq for Slot<T, SET> where T: Eq {}

impl<T, const SET: bool> IntoIterator for Slot<T, SET> {
	type Item = T;
	type IntoIter = Iter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_optional().into_iter()
	}
}

impl<'a, T, const SET: bool> IntoIterator for &'a Slot<T, SET> {
	type Item = &'a T;
	type IntoIter = Iter<&'a T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T, const SET: bool> IntoIterator for &'a mut Slot<T, SET> {
	type Item = &'a mut T;
	type IntoIter = Iter<&'a mut T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}
