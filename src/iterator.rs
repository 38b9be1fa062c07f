use core::iter::FusedIterator;

/// Sequence view over an [`Optional`](crate::Optional) or [`Slot`](crate::Slot).
///
/// Yields the contained value once, or nothing if the container is empty. Once
/// exhausted it keeps returning `None`, so advancing past the end is harmless.
///
/// Cursors compare by position only: two cursors are equal when both still
/// have their value ahead, or when both are at the end. Which container they
/// came from and what value they hold is not part of the comparison.
#[derive(Debug, Clone)]
pub struct Iter<T> {
	value: Option<T>,
}

impl<T> Iter<T> {
	pub(crate) fn new(value: Option<T>) -> Self {
		Self { value }
	}

	/// `true` once the cursor has reached the end position.
	pub const fn is_exhausted(&self) -> bool {
		self.value.is_none()
	}
}

impl<T> Iterator for Iter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		self.value.take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = usize::from(self.value.is_some());
		(remaining, Some(remaining))
	}
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<T> FusedIterator for Iter<T> {}

impl<T> PartialEq for Iter<T> {
	fn eq(&self, other: &Self) -> bool {
		self.value.is_some() == other.value.is_some()
	}
}

impl<T> Eq for Iter<T> {}
