//! Case analysis for the `OneOf` unions.
//!
//! `fold` and `switch` take exactly one callback per alternative, named after
//! the position (`on_first`, `on_second`, ...). Exactly one callback runs.
//!
//! # Examples
//!
//! ```rust
//! use functional_sum::OneOf3;
//!
//! let value: OneOf3<i32, String, bool> = OneOf3::new(String::from("abc"));
//! let size = value.fold(
//!     |number| number as usize,
//!     |text| text.len(),
//!     |flag| usize::from(flag),
//! );
//! assert_eq!(size, 3);
//! ```

use crate::monads::{OneOf2, OneOf3, OneOf4};

macro_rules! one_of_case_analysis {
    ($name:ident<$($type:ident => $variant:ident),+>) => {
        paste::paste! {
            impl<$($type),+> $name<$($type),+> {
                /// Reduces the union to one value, with one callback per
                /// alternative.
                #[inline]
                pub fn fold<R, $([<On $variant>]),+>(
                    self,
                    $([<on_ $variant:snake>]: [<On $variant>]),+
                ) -> R
                where
                    $([<On $variant>]: FnOnce($type) -> R,)+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $variant:snake>](value),)+
                    }
                }

                /// [`fold`](Self::fold) with a context value passed to the
                /// callback that runs.
                #[inline]
                pub fn fold_with<C, R, $([<On $variant>]),+>(
                    self,
                    context: C,
                    $([<on_ $variant:snake>]: [<On $variant>]),+
                ) -> R
                where
                    $([<On $variant>]: FnOnce(C, $type) -> R,)+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $variant:snake>](context, value),)+
                    }
                }

                /// Runs the callback for the populated alternative for its
                /// effect.
                #[inline]
                pub fn switch<$([<On $variant>]),+>(
                    self,
                    $([<on_ $variant:snake>]: [<On $variant>]),+
                )
                where
                    $([<On $variant>]: FnOnce($type),)+
                {
                    self.fold($([<on_ $variant:snake>]),+);
                }

                /// [`switch`](Self::switch) with a context value passed to the
                /// callback that runs.
                #[inline]
                pub fn switch_with<C, $([<On $variant>]),+>(
                    self,
                    context: C,
                    $([<on_ $variant:snake>]: [<On $variant>]),+
                )
                where
                    $([<On $variant>]: FnOnce(C, $type),)+
                {
                    self.fold_with(context, $([<on_ $variant:snake>]),+);
                }
            }
        }
    };
}

one_of_case_analysis!(OneOf2<T1 => First, T2 => Second>);
one_of_case_analysis!(OneOf3<T1 => First, T2 => Second, T3 => Third>);
one_of_case_analysis!(OneOf4<T1 => First, T2 => Second, T3 => Third, T4 => Fourth>);
