//! Pipeline steps.
//!
//! A step is anything implementing [`Transform`]: one typed input, one typed
//! output, possibly failing. Built-in steps wrap the statistics primitives;
//! [`Bound`] pre-binds configuration to a free function and [`FnTransform`]
//! wraps a bare closure.

use crate::core::{Anomaly, Series};
use crate::detection::Detector;
use crate::error::Result;
use crate::transform::{
    difference, moving_average, normalize_with, sliding_window, NormalizationParams,
    NormalizeMethod,
};
use std::fmt;

/// A single-input, single-output transformation.
pub trait Transform<I> {
    type Output;

    /// Apply the transformation.
    fn apply(&self, input: I) -> Result<Self::Output>;

    /// Name used in pipeline introspection and logs.
    fn name(&self) -> &str;
}

/// Moving average with a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    pub window: usize,
}

impl MovingAverage {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Transform<Series> for MovingAverage {
    type Output = Series;

    fn apply(&self, input: Series) -> Result<Series> {
        moving_average(&input, self.window)
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}

/// Lagged differencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    pub lag: usize,
}

impl Difference {
    pub fn new(lag: usize) -> Self {
        Self { lag }
    }
}

impl Default for Difference {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Transform<Series> for Difference {
    type Output = Series;

    fn apply(&self, input: Series) -> Result<Series> {
        difference(&input, self.lag)
    }

    fn name(&self) -> &str {
        "difference"
    }
}

/// Normalization, producing the scaled series and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalize {
    pub method: NormalizeMethod,
}

impl Normalize {
    pub fn new(method: NormalizeMethod) -> Self {
        Self { method }
    }

    pub fn minmax() -> Self {
        Self::new(NormalizeMethod::MinMax)
    }

    pub fn zscore() -> Self {
        Self::new(NormalizeMethod::ZScore)
    }
}

impl Transform<Series> for Normalize {
    type Output = (Series, NormalizationParams);

    fn apply(&self, input: Series) -> Result<Self::Output> {
        normalize_with(&input, self.method)
    }

    fn name(&self) -> &str {
        "normalize"
    }
}

/// Split into fixed-length windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    pub window: usize,
    pub step: usize,
}

impl SlidingWindow {
    pub fn new(window: usize, step: usize) -> Self {
        Self { window, step }
    }
}

impl Transform<Series> for SlidingWindow {
    type Output = Vec<Series>;

    fn apply(&self, input: Series) -> Result<Vec<Series>> {
        sliding_window(&input, self.window, self.step)
    }

    fn name(&self) -> &str {
        "sliding_window"
    }
}

/// Terminal step running a [`Detector`] over the series.
#[derive(Debug, Clone)]
pub struct Detect<D> {
    detector: D,
}

impl<D: Detector> Detect<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }
}

impl<D: Detector> Transform<Series> for Detect<D> {
    type Output = Vec<Anomaly>;

    fn apply(&self, input: Series) -> Result<Vec<Anomaly>> {
        Ok(self.detector.detect(&input))
    }

    fn name(&self) -> &str {
        self.detector.name()
    }
}

/// A function over a series with extra arguments fixed up front.
///
/// # Example
///
/// ```
/// use retail_ts::pipeline::{bind, Transform};
/// use retail_ts::transform::moving_average;
///
/// let ma3 = bind("ma3", moving_average, 3);
/// assert_eq!(ma3.apply(vec![3.0, 6.0, 9.0, 12.0]).unwrap(), vec![6.0, 9.0]);
/// ```
#[derive(Clone)]
pub struct Bound<F, A> {
    name: String,
    func: F,
    args: A,
}

/// Pre-bind `args` to `func`, producing a step over a series.
pub fn bind<F, A, O>(name: impl Into<String>, func: F, args: A) -> Bound<F, A>
where
    F: Fn(&[f64], A) -> Result<O>,
{
    Bound {
        name: name.into(),
        func,
        args,
    }
}

impl<F, A> Bound<F, A> {
    /// The bound arguments.
    pub fn args(&self) -> &A {
        &self.args
    }
}

impl<F, A, O> Transform<Series> for Bound<F, A>
where
    F: Fn(&[f64], A) -> Result<O>,
    A: Clone,
{
    type Output = O;

    fn apply(&self, input: Series) -> Result<O> {
        (self.func)(&input, self.args.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F, A: fmt::Debug> fmt::Debug for Bound<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish()
    }
}

/// A bare function used as a step, with no bound arguments.
#[derive(Clone)]
pub struct FnTransform<F> {
    name: String,
    func: F,
}

/// Wrap `func` as a named step.
pub fn from_fn<I, O, F>(name: impl Into<String>, func: F) -> FnTransform<F>
where
    F: Fn(I) -> Result<O>,
{
    FnTransform {
        name: name.into(),
        func,
    }
}

impl<I, O, F> Transform<I> for FnTransform<F>
where
    F: Fn(I) -> Result<O>,
{
    type Output = O;

    fn apply(&self, input: I) -> Result<O> {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnTransform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform")
            .field("name", &self.name)
            .finish()
    }
}
