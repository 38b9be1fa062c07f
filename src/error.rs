use core::panic::Location;
use thiserror::Error;

/// Errors returned by [`Optional`](crate::Optional).
///
/// Both variants record the call site that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
	/// Direct access on an empty container.
	#[error("the Optional needs to be set before access ({location})")]
	UnsetAccess { location: &'static Location<'static> },

	/// A value was set on a container that already holds one.
	#[error("the Optional already holds a value and cannot be set again ({location})")]
	AlreadySet { location: &'static Location<'static> },
}

impl OptionalError {
	#[track_caller]
	pub(crate) fn unset_access() -> Self {
		OptionalError::UnsetAccess {
			location: Location::caller(),
		}
	}

	#[track_caller]
	pub(crate) fn already_set() -> Self {
		OptionalError::AlreadySet {
			location: Location::caller(),
		}
	}

	pub fn location(&self) -> &'static Location<'static> {
		match self {
			OptionalError::UnsetAccess { location } | OptionalError::AlreadySet { location } => *location,
		}
	}
}
