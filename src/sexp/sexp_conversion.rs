// Should not be used directly. Use list! below.
macro_rules! list_inner {
    () => { $crate::sexp::Sexp::Nil };
    (@cons $car:expr, $cdr:expr) => {
        <$crate::sexp::Sexp>::from(
            $crate::sexp::Cons::new(
                $crate::sexp::HeapSexp::new($car.into()),
                $crate::sexp::HeapSexp::new($cdr.into()),
            ))
    };
    (($($sub:tt)*), $($tail:tt)*) => {
        {
            list_inner!(@cons
                list_inner!($($sub)*),
                list_inner!($($tail)*))
        }
    };
    ($elem:expr, $($tail:tt)*) => {
        {
            list_inner!(@cons
                $elem,
                list_inner!($($tail)*))
        }
    };
}

/// Returns the elements as a proper Sexp list.
///
/// Elements must implement Into<Sexp>; a parenthesized group becomes a
/// sublist. Trailing commas currently must be used.
///
/// Example:
///   list!(a, b, (c, (d,),), e,)
macro_rules! list {
    ($($tail:tt)*) => {
        list_inner!($($tail)*)
    }
}
