use core::fmt;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;

#[cfg(feature = "use_std")]
use crate::{OnSuccess, OnUnwind};
use crate::{Always, Strategy};

/// A scope guard that may own a protected value.
///
/// If you place a guard in a local variable, the closure can run regardless
/// how you leave the scope — through regular return or panic (except if panic
/// or other code aborts; so as long as destructors run). It is run at most
/// once.
///
/// The `S` parameter for [`Strategy`](trait.Strategy.html) determines if the
/// closure actually runs; the strategy is armed when the guard is created and
/// can be permanently disarmed with [`release`](ScopeGuard::release).
///
/// When the guard fires, the closure is called with the held value.
///
/// The `ScopeGuard` implements `Deref` so that you can access the inner
/// value. Guards are movable but can never be cloned or created without a
/// closure, so each one has a single identity from construction to drop:
///
/// ```compile_fail
/// fn assert_clone<C: Clone>(_: &C) {}
///
/// let guard = exitguard::guard((), |()| {});
/// assert_clone(&guard);
/// ```
pub struct ScopeGuard<T, F, S = Always>
	where F: FnOnce(T),
		S: Strategy,
{
	value: ManuallyDrop<T>,
	dropfn: ManuallyDrop<F>,
	strategy: S,
}

impl<T, F, S> ScopeGuard<T, F, S>
	where F: FnOnce(T),
		S: Strategy,
{
	/// Create a `ScopeGuard` that owns `v` (accessible through deref) and
	/// calls `dropfn` when its destructor runs.
	///
	/// The `Strategy` is armed here; it decides at drop whether the closure
	/// should run.
	#[inline]
	pub fn with_strategy(v: T, dropfn: F) -> ScopeGuard<T, F, S> {
		ScopeGuard {
			value: ManuallyDrop::new(v),
			dropfn: ManuallyDrop::new(dropfn),
			strategy: S::armed(),
		}
	}

	/// Permanently disarm the guard: the closure will not run at scope exit,
	/// no matter how the scope is left.
	///
	/// Releasing is idempotent and cannot be undone. The guard keeps owning
	/// the value, which is dropped normally at scope exit; use
	/// [`into_inner`](ScopeGuard::into_inner) to disarm and take the value
	/// back instead.
	///
	/// ```
	/// use exitguard::guard;
	///
	/// let mut cleanup = guard((), |()| unreachable!("released"));
	/// cleanup.release();
	/// cleanup.release(); // releasing again is a no-op
	/// ```
	#[inline]
	pub fn release(&mut self) {
		self.strategy.disarm();
	}

	/// Disarm the guard and extract the value without calling the closure.
	///
	/// ```
	/// use exitguard::{guard, ScopeGuard};
	///
	/// fn conditional() -> bool { true }
	///
	/// let mut guard = guard(Vec::new(), |mut v| v.clear());
	/// guard.push(1);
	///
	/// if conditional() {
	///     // a condition maybe makes us decide to
	///     // disarm the guard and get back its inner parts
	///     let value = ScopeGuard::into_inner(guard);
	/// }
	/// ```
	#[inline]
	pub fn into_inner(guard: Self) -> T {
		// Cannot move out of `Drop`-implementing types,
		// so `ptr::read` the value and forget the guard.
		let mut guard = ManuallyDrop::new(guard);
		unsafe {
			let value = ptr::read(&*guard.value);
			// Drop the closure after `value` has been read, so that if the
			// closure's `drop` function panics, unwinding still tries to drop
			// `value`.
			ManuallyDrop::drop(&mut guard.dropfn);
			value
		}
	}
}

/// Create a new `ScopeGuard` owning `v` and with deferred closure `dropfn`,
/// fired on any scope exit.
#[inline]
pub fn guard<T, F>(v: T, dropfn: F) -> ScopeGuard<T, F, Always>
	where F: FnOnce(T)
{
	ScopeGuard::with_strategy(v, dropfn)
}

/// Create a new `ScopeGuard` owning `v` and with deferred closure `dropfn`,
/// fired only if no new panic starts unwinding inside the guard's scope.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[inline]
pub fn guard_on_success<T, F>(v: T, dropfn: F) -> ScopeGuard<T, F, OnSuccess>
	where F: FnOnce(T)
{
	ScopeGuard::with_strategy(v, dropfn)
}

/// Create a new `ScopeGuard` owning `v` and with deferred closure `dropfn`,
/// fired only if a new panic starts unwinding inside the guard's scope.
///
/// Requires crate feature `use_std`.
///
/// ## Examples
///
/// For performance reasons, or to emulate "only run guard on unwind" in
/// no-std environments, we can also use the default guard and simply
/// [`release`](ScopeGuard::release) it at the end of scope like the following
/// example. (The performance reason would be if the [`OnUnwind`]'s call to
/// [std::thread::panicking()] is an issue.)
///
/// ```
/// use exitguard::guard;
///
/// {
///     let mut cleanup = guard((), |()| { /* rollback */ });
///
///     // rest of the code here
///
///     // we reached the end of scope without unwinding - disarm it
///     cleanup.release();
/// }
/// ```
#[cfg(feature = "use_std")]
#[inline]
pub fn guard_on_unwind<T, F>(v: T, dropfn: F) -> ScopeGuard<T, F, OnUnwind>
	where F: FnOnce(T)
{
	ScopeGuard::with_strategy(v, dropfn)
}

// ScopeGuard can be Sync even if F isn't because the closure is
// not accessible from references.
unsafe impl<T, F, S> Sync for ScopeGuard<T, F, S>
	where T: Sync,
		F: FnOnce(T),
		S: Strategy + Sync
{}

impl<T, F, S> Deref for ScopeGuard<T, F, S>
	where F: FnOnce(T),
		S: Strategy
{
	type Target = T;

	fn deref(&self) -> &T {
		&*self.value
	}
}

impl<T, F, S> DerefMut for ScopeGuard<T, F, S>
	where F: FnOnce(T),
		S: Strategy
{
	fn deref_mut(&mut self) -> &mut T {
		&mut *self.value
	}
}

impl<T, F, S> Drop for ScopeGuard<T, F, S>
	where F: FnOnce(T),
		S: Strategy
{
	fn drop(&mut self) {
		// This is OK because the fields are `ManuallyDrop`s
		// which will not be dropped by the compiler.
		let (value, dropfn) = unsafe {
			(ptr::read(&*self.value), ptr::read(&*self.dropfn))
		};
		if self.strategy.should_run() {
			dropfn(value);
		}
	}
}

impl<T, F, S> fmt::Debug for ScopeGuard<T, F, S>
	where T: fmt::Debug,
		F: FnOnce(T),
		S: Strategy + fmt::Debug
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct(stringify!(ScopeGuard))
			.field("value", &*self.value)
			.field("strategy", &self.strategy)
			.finish()
	}
}
