//! Macros for creating and combining vectors and matrices with a convenient syntax.

/// Creates a [`Vector`](crate::Vector) from a list of values, or from a value
/// and a length.
///
/// # Examples
/// ```
/// use linrust::*;
///
/// let v = vector![1.0, 2.0, 3.0];
/// assert_eq!(v.len(), 3);
///
/// let zeros = vector![0u8; 4];
/// assert_eq!(zeros, Vector::new([0, 0, 0, 0]));
/// ```
#[macro_export]
macro_rules! vector {
    ($x:expr; $n:expr) => {
        $crate::ops::fill::<{ $n }, _>($x)
    };
    ($($x:expr),* $(,)?) => {
        $crate::Vector::new([$($x),*])
    };
}

/// Creates a [`Matrix`](crate::Matrix) from rows of values.
///
/// # Examples
/// ```
/// use linrust::*;
///
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[1][0], 4);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),* $(,)?) => {
        $crate::Matrix::new([$([$($x),*]),*])
    };
}

/// Applies a function position-wise to any number (up to eight) of vectors
/// of the same length.
///
/// Each vector expression is evaluated exactly once. Vectors of different
/// lengths fail to compile.
///
/// # Examples
/// ```
/// use linrust::*;
///
/// let a = vector![1, 2];
/// let b = vector![10, 20];
/// let c = vector![100, 200];
/// let d = vector![1000, 2000];
/// let total = elementwise!(|w: i32, x: i32, y: i32, z: i32| w + x + y + z, a, b, c, d);
/// assert_eq!(total, vector![1111, 2222]);
/// ```
///
/// ```compile_fail
/// use linrust::*;
///
/// let _ = elementwise!(|x: i32, y: i32| x + y, vector![1, 2], vector![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! elementwise {
    (
        @bind $f:expr; [$name:ident $($names:ident)*]; [$($bound:ident)*];
        $v:expr $(, $rest:expr)*
    ) => {{
        let $name = &$v;
        $crate::elementwise!(@bind $f; [$($names)*]; [$($bound)* $name]; $($rest),*)
    }};
    (@bind $f:expr; [$($names:ident)*]; [$first:ident $($bound:ident)*];) => {{
        $( $crate::ops::same_length($first, $bound); )*
        let mut __f = $f;
        $crate::ops::generate_like($first, |__i| __f($first[__i] $(, $bound[__i])*))
    }};
    ($f:expr, $($v:expr),+ $(,)?) => {
        $crate::elementwise!(@bind $f; [__v0 __v1 __v2 __v3 __v4 __v5 __v6 __v7]; []; $($v),+)
    };
}
