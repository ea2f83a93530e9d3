//! Assertion helpers
//!
//! Each helper checks one condition and, when it does not hold, counts a
//! failure, records a decorated message and marks the host failed. None of
//! them stop the test.

use std::fmt::Debug;

use crate::handle::Handle;
use crate::nil::{self, IsNil};
use crate::render;

pub const NOT_TRUE: &str = "Expression was not true";
pub const NOT_FALSE: &str = "Expression was not false";
pub const NOT_NIL: &str = "Expression was not nil";
pub const WAS_NIL: &str = "Expression was nil";
pub const NOT_EQUAL: &str = "Values were not equal";
pub const NOT_UNEQUAL: &str = "Values were not unequal";
pub const UNSAFE_COMPARISON: &str = "Can't safely compare nil values for equality";

fn got_wanted<A, B>(headline: &str, got: &A, want: &B) -> String
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    format!(
        "{headline}\n   Got: {}\nWanted: {}",
        render::annotated(got),
        render::annotated(want)
    )
}

impl Handle {
    #[track_caller]
    pub fn expect_true(&self, cond: bool) {
        if !cond {
            self.failure(NOT_TRUE);
        }
    }

    #[track_caller]
    pub fn expect_false(&self, cond: bool) {
        if cond {
            self.failure(NOT_FALSE);
        }
    }

    /// Fails unless `value` is [`Nil`](crate::Nil) or an empty reference
    #[track_caller]
    pub fn expect_nil<V: IsNil>(&self, value: V) {
        if !value.is_nil() {
            self.failure(NOT_NIL);
        }
    }

    #[track_caller]
    pub fn expect_not_nil<V: IsNil>(&self, value: V) {
        if value.is_nil() {
            self.failure(WAS_NIL);
        }
    }

    /// Fails unless `got == want`, showing both values with their types.
    ///
    /// Either side being [`Nil`](crate::Nil) is always a failure: there is
    /// nothing meaningful to compare.
    #[track_caller]
    pub fn expect_eq<A, B>(&self, got: A, want: B)
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        if nil::is_nil_marker::<A>() || nil::is_nil_marker::<B>() {
            self.failure(&got_wanted(UNSAFE_COMPARISON, &got, &want));
        } else if got != want {
            self.failure(&got_wanted(NOT_EQUAL, &got, &want));
        }
    }

    /// Fails if `got == want`, showing the shared value.
    ///
    /// `expect_ne(Nil, Nil)` fails with the unsafe-comparison message, like
    /// every other comparison involving [`Nil`](crate::Nil).
    #[track_caller]
    pub fn expect_ne<A, B>(&self, got: A, want: B)
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        if nil::is_nil_marker::<A>() || nil::is_nil_marker::<B>() {
            self.failure(&got_wanted(UNSAFE_COMPARISON, &got, &want));
        } else if got == want {
            self.failure(&format!("{NOT_UNEQUAL}\n  Both: {}", render::value(&got)));
        }
    }
}
