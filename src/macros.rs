/// Macro to create an anonymous `ScopeGuard` (run on any scope exit).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// The guard is anonymous, so it cannot be released; use
/// [`guard`](crate::guard) directly when conditional disarming is needed.
#[macro_export]
macro_rules! defer {
	($($t:tt)*) => {
		let _guard = $crate::guard((), |()| { $($t)* });
	};
}

/// Macro to create an anonymous `ScopeGuard` (run only if no new panic
/// starts unwinding in the current scope).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_success {
	($($t:tt)*) => {
		let _guard = $crate::guard_on_success((), |()| { $($t)* });
	};
}

/// Macro to create an anonymous `ScopeGuard` (run only if a new panic
/// starts unwinding in the current scope).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_unwind {
	($($t:tt)*) => {
		let _guard = $crate::guard_on_unwind((), |()| { $($t)* });
	};
}
