//! Exit-path matrix: each strategy against clean and unwinding scope exits,
//! armed and released.

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rstest::rstest;

use exitguard::{guard, guard_on_success, guard_on_unwind};

/// Run `body` in its own scope, optionally panicking at the end of it.
fn exit_scope(unwind: bool, body: impl FnOnce()) {
	let outcome = catch_unwind(AssertUnwindSafe(|| {
		body();
		if unwind {
			panic!("scope failure");
		}
	}));
	assert_eq!(outcome.is_err(), unwind);
}

#[rstest]
#[case::clean_exit(false, 1)]
#[case::unwinding(true, 1)]
fn always_fires_on_every_exit(#[case] unwind: bool, #[case] expected: i32) {
	let calls = Cell::new(0);
	exit_scope(unwind, || {
		let _guard = guard((), |()| calls.set(calls.get() + 1));
		assert_eq!(calls.get(), 0);
	});
	assert_eq!(calls.get(), expected);
}

#[rstest]
#[case::clean_exit(false, 1)]
#[case::unwinding(true, 0)]
fn on_success_fires_only_on_clean_exit(#[case] unwind: bool, #[case] expected: i32) {
	let calls = Cell::new(0);
	exit_scope(unwind, || {
		let _guard = guard_on_success((), |()| calls.set(calls.get() + 1));
		assert_eq!(calls.get(), 0);
	});
	assert_eq!(calls.get(), expected);
}

#[rstest]
#[case::clean_exit(false, 0)]
#[case::unwinding(true, 1)]
fn on_unwind_fires_only_when_unwinding(#[case] unwind: bool, #[case] expected: i32) {
	let calls = Cell::new(0);
	exit_scope(unwind, || {
		let _guard = guard_on_unwind((), |()| calls.set(calls.get() + 1));
		assert_eq!(calls.get(), 0);
	});
	assert_eq!(calls.get(), expected);
}

#[rstest]
#[case::clean_exit(false)]
#[case::unwinding(true)]
fn released_guards_never_fire(#[case] unwind: bool) {
	let calls = Cell::new(0);
	exit_scope(unwind, || {
		let mut always = guard((), |()| calls.set(calls.get() + 1));
		let mut success = guard_on_success((), |()| calls.set(calls.get() + 1));
		let mut fail = guard_on_unwind((), |()| calls.set(calls.get() + 1));
		always.release();
		success.release();
		fail.release();
	});
	assert_eq!(calls.get(), 0);
}

#[rstest]
#[case::clean_exit(false, 1)]
#[case::unwinding(true, 1)]
fn moved_guard_fires_exactly_once(#[case] unwind: bool, #[case] expected: i32) {
	let calls = Cell::new(0);
	exit_scope(unwind, || {
		let original = guard((), |()| calls.set(calls.get() + 1));
		let moved = original;
		let _boxed = Box::new(moved);
		assert_eq!(calls.get(), 0);
	});
	assert_eq!(calls.get(), expected);
}
