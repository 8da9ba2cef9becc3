//! Result type for operations that degrade instead of failing.

/// Value produced by an operation that always yields something usable.
///
/// `Fallback` carries the substitute value together with the reason the
/// regular path was abandoned, so callers and tests can tell the two apart
/// without inspecting log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
	Complete(T),
	Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
	pub fn value(&self) -> &T {
		match self {
			Outcome::Complete(value) | Outcome::Fallback { value, .. } => value,
		}
	}

	pub fn into_value(self) -> T {
		match self {
			Outcome::Complete(value) | Outcome::Fallback { value, .. } => value,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, Outcome::Fallback { .. })
	}

	/// Reason for the fallback, if one was taken.
	pub fn reason(&self) -> Option<&str> {
		match self {
			Outcome::Complete(_) => None,
			Outcome::Fallback { reason, .. } => Some(reason),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exposes_value_on_both_paths() {
		let ok: Outcome<u8> = Outcome::Complete(1);
		let degraded = Outcome::Fallback {
			value: 2u8,
			reason: "boom".to_string(),
		};

		assert_eq!(*ok.value(), 1);
		assert!(!ok.is_fallback());
		assert_eq!(ok.reason(), None);

		assert!(degraded.is_fallback());
		assert_eq!(degraded.reason(), Some("boom"));
		assert_eq!(degraded.into_value(), 2);
	}
}
