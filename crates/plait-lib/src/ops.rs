//! Operator syntax for the combinator algebra.
//!
//! | operator | method |
//! |----------|--------|
//! | `a >> b` | [`then`](Parser::then) |
//! | `a << b` | [`skip`](Parser::skip) |
//! | `a \| b` | [`or`](Parser::or) |
//! | `a & b`  | [`pair`](Parser::pair) |
//! | `a + b`  | [`concat_with`](Parser::concat_with) |
//! | `a * n`  | [`times`](Parser::times) / [`times_between`](Parser::times_between) |

use std::ops::{Add, BitAnd, BitOr, Mul, Range, RangeFrom, RangeInclusive, Shl, Shr};

use plait_core::ConfigError;

use crate::invariants::ensure_config;
use crate::parser::Parser;

impl<T: 'static, U: 'static> Shr<Parser<U>> for Parser<T> {
    type Output = Parser<U>;

    fn shr(self, rhs: Parser<U>) -> Self::Output {
        self.then(rhs)
    }
}

impl<T: 'static, U: 'static> Shl<Parser<U>> for Parser<T> {
    type Output = Parser<T>;

    fn shl(self, rhs: Parser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

impl<T: 'static> BitOr for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: 'static, U: 'static> BitAnd<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;

    fn bitand(self, rhs: Parser<U>) -> Self::Output {
        self.pair(rhs)
    }
}

/// Values that can be joined end to end: strings, lists and tuples.
pub trait Concat<Rhs = Self> {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl Concat for String {
    type Output = String;

    fn concat(mut self, rhs: String) -> String {
        self.push_str(&rhs);
        self
    }
}

impl<T> Concat for Vec<T> {
    type Output = Vec<T>;

    fn concat(mut self, rhs: Vec<T>) -> Vec<T> {
        self.extend(rhs);
        self
    }
}

macro_rules! concat_tuples {
    ($(($($l:ident)+) ($($r:ident)+);)+) => {$(
        impl<$($l,)+ $($r,)+> Concat<($($r,)+)> for ($($l,)+) {
            type Output = ($($l,)+ $($r,)+);

            #[allow(non_snake_case)]
            fn concat(self, rhs: ($($r,)+)) -> Self::Output {
                let ($($l,)+) = self;
                let ($($r,)+) = rhs;
                ($($l,)+ $($r,)+)
            }
        }
    )+};
}

concat_tuples! {
    (A) (B);
    (A) (B C);
    (A) (B C D);
    (A) (B C D E);
    (A) (B C D E F);
    (A B) (C);
    (A B) (C D);
    (A B) (C D E);
    (A B) (C D E F);
    (A B C) (D);
    (A B C) (D E);
    (A B C) (D E F);
    (A B C D) (E);
    (A B C D) (E F);
    (A B C D E) (F);
}

impl<T: 'static> Parser<T> {
    /// Run `self` then `other` and join their values.
    pub fn concat_with<U: 'static>(self, other: Parser<U>) -> Parser<T::Output>
    where
        T: Concat<U>,
        T::Output: 'static,
    {
        self.pair(other).map(|(left, right)| left.concat(right))
    }
}

impl<T, U> Add<Parser<U>> for Parser<T>
where
    T: Concat<U> + 'static,
    U: 'static,
    T::Output: 'static,
{
    type Output = Parser<T::Output>;

    fn add(self, rhs: Parser<U>) -> Self::Output {
        self.concat_with(rhs)
    }
}

/// Repetition bounds accepted by `parser * bounds`.
pub trait RepeatBounds {
    /// Inclusive `(min, max)`.
    fn bounds(self) -> Result<(usize, usize), ConfigError>;
}

impl RepeatBounds for usize {
    fn bounds(self) -> Result<(usize, usize), ConfigError> {
        Ok((self, self))
    }
}

impl RepeatBounds for Range<usize> {
    fn bounds(self) -> Result<(usize, usize), ConfigError> {
        if self.start >= self.end {
            return Err(ConfigError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok((self.start, self.end - 1))
    }
}

impl RepeatBounds for RangeInclusive<usize> {
    fn bounds(self) -> Result<(usize, usize), ConfigError> {
        Ok(self.into_inner())
    }
}

impl RepeatBounds for RangeFrom<usize> {
    fn bounds(self) -> Result<(usize, usize), ConfigError> {
        Ok((self.start, usize::MAX))
    }
}

impl<T: 'static, R: RepeatBounds> Mul<R> for Parser<T> {
    type Output = Parser<Vec<T>>;

    /// # Panics
    ///
    /// On an empty range, or an inclusive range whose start exceeds its end.
    fn mul(self, rhs: R) -> Self::Output {
        ensure_config(
            rhs.bounds()
                .and_then(|(min, max)| self.try_times_between(min, max)),
        )
    }
}
