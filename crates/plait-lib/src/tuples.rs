//! Accumulating values into flat tuples across a sequence.

use crate::parser::Parser;

/// Tuples that can grow by one element.
pub trait Append<X> {
    type Output;

    fn append(self, value: X) -> Self::Output;
}

/// Functions callable with a tuple spread into their arguments.
pub trait TupleFn<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! tuple_impls {
    ($(($($t:ident)*);)+) => {$(
        impl<$($t,)* X> Append<X> for ($($t,)*) {
            type Output = ($($t,)* X,);

            #[allow(non_snake_case)]
            fn append(self, value: X) -> Self::Output {
                let ($($t,)*) = self;
                ($($t,)* value,)
            }
        }

        impl<Func, Ret, $($t,)*> TupleFn<($($t,)*)> for Func
        where
            Func: Fn($($t),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn call(&self, args: ($($t,)*)) -> Ret {
                let ($($t,)*) = args;
                self($($t),*)
            }
        }
    )+};
}

tuple_impls! {
    ();
    (A);
    (A B);
    (A B C);
    (A B C D);
    (A B C D E);
}

impl<Func, Ret, A, B, C, D, E, F> TupleFn<(A, B, C, D, E, F)> for Func
where
    Func: Fn(A, B, C, D, E, F) -> Ret,
{
    type Output = Ret;

    fn call(&self, (a, b, c, d, e, f): (A, B, C, D, E, F)) -> Ret {
        self(a, b, c, d, e, f)
    }
}

impl<T: 'static> Parser<T> {
    /// Run `self` then `other`, appending `other`'s value to this tuple.
    pub fn append<U: 'static>(self, other: Parser<U>) -> Parser<T::Output>
    where
        T: Append<U>,
        T::Output: 'static,
    {
        self.pair(other).map(|(values, value)| values.append(value))
    }

    /// Spread this tuple into the arguments of `f`.
    pub fn combine<F>(self, f: F) -> Parser<F::Output>
    where
        F: TupleFn<T> + Send + Sync + 'static,
        F::Output: 'static,
    {
        self.map(move |args| f.call(args))
    }
}

/// Sequence parsers into a tuple parser.
///
/// `seq!(a, b, c)` runs `a`, `b` and `c` in order and yields `(A, B, C)`.
/// Up to six parsers are supported.
#[macro_export]
macro_rules! seq {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Parser::tuple($first) $(.append($rest))*
    };
}
