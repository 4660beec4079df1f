/// Decides, at scope exit, whether the guard's deferred closure should run.
///
/// A strategy is sampled once when the guard is armed (constructed) and
/// consulted once when the guard is dropped. [`disarm`](Strategy::disarm) is
/// a one-way transition after which [`should_run`](Strategy::should_run) can
/// never return `true` again.
pub trait Strategy {
	/// Sample the ambient unwinding state of the current thread and return
	/// an armed strategy.
	fn armed() -> Self;

	/// Permanently prevent `should_run` from returning `true`.
	///
	/// Idempotent.
	fn disarm(&mut self);

	/// Return `true` if the guard's deferred closure should run
	/// (in the context where this method is called).
	fn should_run(&self) -> bool;
}

/// The number of unwinding operations in flight on the current thread.
///
/// Rust never runs more than one unwind per thread (a panic while already
/// unwinding aborts the process), so this is 0 or 1.
#[cfg(feature = "use_std")]
#[inline]
fn unwind_count() -> i32 {
	std::thread::panicking() as i32
}

/// Run on any scope exit.
///
/// Fires on regular exit from a scope and on unwinding from a panic; it can
/// not fire on abort, process exit, and other catastrophic events where
/// destructors don't run. [`ScopeGuard::release`](crate::ScopeGuard::release)
/// suppresses it.
#[derive(Debug)]
pub struct Always {
	armed: bool,
}

/// Run on scope exit only if no new panic started unwinding inside the
/// guard's scope.
///
/// The ambient unwind count is recorded when the guard is armed and compared
/// at drop. The guard fires when the count has not grown, so it still fires
/// inside a destructor that runs during an *older* unwind which was already
/// in flight when the guard was created.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub struct OnSuccess {
	baseline: i32,
}

/// Run on scope exit only if a new panic started unwinding inside the
/// guard's scope.
///
/// Exact complement of [`OnSuccess`]: fires when the ambient unwind count at
/// drop is strictly greater than the baseline recorded at construction. A
/// guard created inside a destructor that is itself running during an older
/// unwind does not fire from that same unwind.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub struct OnUnwind {
	baseline: i32,
}

impl Strategy for Always {
	#[inline(always)]
	fn armed() -> Self {
		Always { armed: true }
	}

	#[inline(always)]
	fn disarm(&mut self) {
		self.armed = false;
	}

	#[inline(always)]
	fn should_run(&self) -> bool {
		self.armed
	}
}

#[cfg(feature = "use_std")]
impl Strategy for OnSuccess {
	#[inline]
	fn armed() -> Self {
		OnSuccess { baseline: unwind_count() }
	}

	#[inline]
	fn disarm(&mut self) {
		// The ambient count is never negative, so it can never again be
		// less than or equal to the baseline.
		self.baseline = i32::MIN;
	}

	#[inline]
	fn should_run(&self) -> bool {
		unwind_count() <= self.baseline
	}
}

#[cfg(feature = "use_std")]
impl Strategy for OnUnwind {
	#[inline]
	fn armed() -> Self {
		OnUnwind { baseline: unwind_count() }
	}

	#[inline]
	fn disarm(&mut self) {
		// The ambient count can never exceed this baseline.
		self.baseline = i32::MAX;
	}

	#[inline]
	fn should_run(&self) -> bool {
		unwind_count() > self.baseline
	}
}
