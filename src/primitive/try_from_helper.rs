/// Implements TryFrom<Sexp-like> for a Primitive variant.
///
/// Failed conversions hand back the original value so callers can report it.
///
/// Example:
///   impl_try_from!(Symbol; Sexp -> Symbol, ref Sexp -> ref Symbol,);
macro_rules! impl_try_from {
    ($name:ident; $($tail:tt)*) => {
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident; Sexp -> $to:ident, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::sexp::Sexp> for $to {
            type Error = $crate::sexp::Sexp;

            fn try_from(value: $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$name(val)) =
                    value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident; ref Sexp -> ref $to:ident, $($tail:tt)*) => {
        impl<'a> std::convert::TryFrom<&'a $crate::sexp::Sexp> for &'a $to {
            type Error = &'a $crate::sexp::Sexp;

            fn try_from(value: &'a $crate::sexp::Sexp) -> Result<Self, Self::Error> {
                if let $crate::sexp::Sexp::Primitive($crate::primitive::Primitive::$name(val)) =
                    value
                {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident; Primitive -> $to:ident, $($tail:tt)*) => {
        impl std::convert::TryFrom<$crate::primitive::Primitive> for $to {
            type Error = $crate::primitive::Primitive;

            fn try_from(value: $crate::primitive::Primitive) -> Result<Self, Self::Error> {
                if let $crate::primitive::Primitive::$name(val) = value {
                    Ok(val)
                } else {
                    Err(value)
                }
            }
        }
        impl_try_from!(@impl $name; $($tail)*);
    };
    (@impl $name:ident;) => {};
}
