use crate::{Handle, Iter, OptionalError};
use core::fmt::{Debug, Formatter};

/// A container holding zero or one value of type `T`.
///
/// Consumers can loop over it instead of checking for presence:
/// ```
/// use iter_option::Optional;
///
/// let mut name = Optional::<String>::emplace("90");
/// for value in &mut name {
/// 	value.push('!');
/// }
/// assert_eq!("90!", name.get().unwrap().as_str());
///
/// let mut nothing = Optional::<String>::empty();
/// assert_eq!(0, nothing.iter().count());
/// assert!(nothing.get().is_err());
/// ```
///
/// Once occupied, a container refuses a second value through
/// [`try_emplace`](Optional::try_emplace) instead of overwriting it. Use
/// [`Slot`](crate::Slot) to have that guarantee checked at compile time.
///
/// `Optional` does no locking of its own; sharing it mutably across threads
/// needs external synchronization.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Optional<T> {
	value: Option<T>,
}

impl<T> Optional<T> {
	pub const fn empty() -> Self {
		Self { value: None }
	}

	pub const fn of(value: T) -> Self {
		Self { value: Some(value) }
	}

	pub fn copy_of(value: &T) -> Self
	where
		T: Clone,
	{
		Self::of(value.clone())
	}

	/// Constructs the contained value from `args` directly inside the container.
	///
	/// Several constructor arguments go in as a tuple with a matching `From` impl.
	pub fn emplace<A>(args: A) -> Self
	where
		T: From<A>,
	{
		Self {
			value: Some(T::from(args)),
		}
	}

	/// Constructs a value from `args` in an empty container.
	///
	/// Fails with [`OptionalError::AlreadySet`] if a value is present, in which
	/// case `args` is dropped without constructing a `T` and the stored value is
	/// left untouched.
	#[track_caller]
	pub fn try_emplace<A>(&mut self, args: A) -> Result<&mut T, OptionalError>
	where
		T: From<A>,
	{
		if self.value.is_some() {
			return Err(OptionalError::already_set());
		}
		Ok(self.value.insert(T::from(args)))
	}

	#[track_caller]
	pub fn try_set(&mut self, value: T) -> Result<&mut T, OptionalError> {
		self.try_emplace(value)
	}

	pub const fn is_empty(&self) -> bool {
		self.value.is_none()
	}

	pub const fn is_defined(&self) -> bool {
		self.value.is_some()
	}

	/// Mutable access to the contained value.
	///
	/// Fails with [`OptionalError::UnsetAccess`] on an empty container.
	#[track_caller]
	pub fn get(&mut self) -> Result<&mut T, OptionalError> {
		match self.value.as_mut() {
			Some(value) => Ok(value),
			None => Err(OptionalError::unset_access()),
		}
	}

	#[track_caller]
	pub fn get_ref(&self) -> Result<&T, OptionalError> {
		match self.value.as_ref() {
			Some(value) => Ok(value),
			None => Err(OptionalError::unset_access()),
		}
	}

	pub fn iter(&self) -> Iter<&T> {
		Iter::new(self.value.as_ref())
	}

	pub fn iter_mut(&mut self) -> Iter<&mut T> {
		Iter::new(self.value.as_mut())
	}

	/// Moves the value out, leaving the container empty.
	pub fn take(&mut self) -> Option<T> {
		self.value.take()
	}

	/// Drops the contained value, if any.
	pub fn clear(&mut self) {
		self.value = None;
	}

	pub fn into_option(self) -> Option<T> {
		self.value
	}

	pub fn as_option(&self) -> Option<&T> {
		self.value.as_ref()
	}

	pub fn as_mut_option(&mut self) -> Option<&mut T> {
		self.value.as_mut()
	}
}

impl<H> Optional<H>
where
	H: Handle,
{
	/// `true` if the container is empty or holds a null handle.
	pub fn holds_null(&self) -> bool {
		self.value.as_ref().map_or(true, Handle::is_null)
	}

	/// Releases the held handle, then clears the container.
	///
	/// The handle is released exactly once even if its `Drop` releases again.
	pub fn release(&mut self) {
		if let Some(mut handle) = self.value.take() {
			handle.release();
		}
	}
}

impl<T> Default for Optional<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> From<T> for Optional<T> {
	fn from(value: T) -> Self {
		Self::of(value)
	}
}

impl<T> From<Option<T>> for Optional<T> {
	fn from(value: Option<T>) -> Self {
		Self { value }
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(optional: Optional<T>) -> Self {
		optional.into_option()
	}
}

impl<T> Debug for Optional<T>
where
	T: Debug,
{
	fn fmt(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
		match self.as_option() {
			Some(value) => formatter.debug_tuple("Optional::of").field(value).finish(),
			None => formatter.write_str("Optional::empty"),
		}
	}
}

impl<T> IntoIterator for Optional<T> {
	type Item = T;
	type IntoIter = Iter<T>;

	fn into_iter(self) -> Self::IntoIter {
		Iter::new(self.value)
	}
}

impl<'a, T> IntoIterator for &'a Optional<T> {
	type Item = &'a T;
	type IntoIter = Iter<&'a T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
	type Item = &'a mut T;
	type IntoIter = Iter<&'a mut T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}
