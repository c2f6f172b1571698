//! Immutable, copy-on-append transformation pipeline.

use super::compose::try_pipe2;
use super::transform::{from_fn, Transform};
use crate::core::Series;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

type Runner<O> = Arc<dyn Fn(Series) -> Result<O> + Send + Sync>;

/// An ordered chain of transformations over one input series.
///
/// `O` is the output type of the last step. Appending a step never touches
/// the receiver: it returns a new pipeline that shares the input series and
/// the already-composed prefix, so one prefix can be extended in several
/// directions and executed from several threads.
///
/// # Example
///
/// ```
/// use retail_ts::pipeline::{MovingAverage, Normalize, Pipeline};
///
/// let base = Pipeline::new(vec![2.0, 4.0, 6.0, 8.0, 10.0]);
/// let smoothed = base.add_transformation(MovingAverage::new(3));
/// let scaled = smoothed.add_transformation(Normalize::minmax());
///
/// assert_eq!(smoothed.execute().unwrap(), vec![4.0, 6.0, 8.0]);
/// let (values, _params) = scaled.execute().unwrap();
/// assert_eq!(values, vec![0.0, 0.5, 1.0]);
/// assert_eq!(base.execute().unwrap(), base.get_data());
/// ```
pub struct Pipeline<O = Series> {
    data: Arc<[f64]>,
    steps: Vec<String>,
    runner: Runner<O>,
}

impl Pipeline<Series> {
    /// Start an empty pipeline over `data`.
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        let data: Vec<f64> = data.into();
        Self {
            data: data.into(),
            steps: Vec::new(),
            runner: Arc::new(|input: Series| Ok(input)),
        }
    }
}

impl<O: 'static> Pipeline<O> {
    /// A new pipeline with `step` applied after the existing steps.
    pub fn add_transformation<T>(&self, step: T) -> Pipeline<T::Output>
    where
        T: Transform<O> + Send + Sync + 'static,
        T::Output: 'static,
    {
        let name = step.name().to_string();
        let mut steps = self.steps.clone();
        steps.push(name.clone());

        let previous = Arc::clone(&self.runner);
        let position = steps.len();
        let runner = try_pipe2(
            move |input: Series| previous(input),
            move |value: O| {
                trace!(step = %name, position, "applying pipeline step");
                step.apply(value)
            },
        );

        Pipeline {
            data: Arc::clone(&self.data),
            steps,
            runner: Arc::new(runner),
        }
    }

    /// Append a bare function as a step.
    pub fn add_fn<P, F>(&self, name: impl Into<String>, func: F) -> Pipeline<P>
    where
        F: Fn(O) -> Result<P> + Send + Sync + 'static,
        P: 'static,
    {
        self.add_transformation(from_fn(name, func))
    }

    /// Run every step, first-added first, over a fresh copy of the input.
    pub fn execute(&self) -> Result<O> {
        debug!(steps = self.steps.len(), len = self.data.len(), "executing pipeline");
        (self.runner)(self.data.to_vec())
    }
}

impl<O> Pipeline<O> {
    /// A copy of the original input series.
    pub fn get_data(&self) -> Series {
        self.data.to_vec()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in application order.
    pub fn step_names(&self) -> &[String] {
        &self.steps
    }
}

impl<O> Clone for Pipeline<O> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            steps: self.steps.clone(),
            runner: Arc::clone(&self.runner),
        }
    }
}

impl<O> fmt::Debug for Pipeline<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("len", &self.data.len())
            .field("steps", &self.steps)
            .finish()
    }
}
