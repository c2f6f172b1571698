//! Function composition primitives.
//!
//! [`pipe`] applies functions left-to-right, [`compose`] right-to-left. Both
//! accept any number of functions of one type, including none (identity).
//! The `pipe!` and `compose!` macros chain functions whose input and output
//! types differ.

/// The identity function.
pub fn identity<T>() -> impl Fn(T) -> T + Clone + Send + Sync {
    |x| x
}

/// `pipe2(f, g)(x) == g(f(x))`.
pub fn pipe2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// `compose2(f, g)(x) == f(g(x))`.
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Left-to-right composition of fallible steps; the first error short-circuits.
pub fn try_pipe2<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |x| f(x).and_then(|y| g(y))
}

/// Apply `fns` in order: `pipe([f, g, h])(x) == h(g(f(x)))`.
pub fn pipe<T, F, I>(fns: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let fns: Vec<F> = fns.into_iter().collect();
    move |x| fns.iter().fold(x, |acc, f| f(acc))
}

/// Apply `fns` in reverse order: `compose([f, g, h])(x) == f(g(h(x)))`.
pub fn compose<T, F, I>(fns: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let fns: Vec<F> = fns.into_iter().collect();
    move |x| fns.iter().rev().fold(x, |acc, f| f(acc))
}

/// Left-to-right composition of functions with differing types.
///
/// ```
/// use retail_ts::pipe;
///
/// let f = pipe!(|x: i32| x + 1, |x: i32| x.to_string(), |s: String| s.len());
/// assert_eq!(f(99), 3);
///
/// let id = pipe!();
/// assert_eq!(id(5), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::pipeline::identity()
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipeline::pipe2($f, $crate::pipe!($($rest),+))
    };
}

/// Right-to-left composition of functions with differing types.
///
/// ```
/// use retail_ts::compose;
///
/// let f = compose!(|s: String| s.len(), |x: i32| x.to_string());
/// assert_eq!(f(1234), 4);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::pipeline::identity()
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipeline::compose2($f, $crate::compose!($($rest),+))
    };
}
