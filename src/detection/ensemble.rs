//! Ensemble voting over anomaly detectors.

use super::outlier::Detector;
use crate::core::Anomaly;
use crate::error::{AnalysisError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Quorum rule for combining detector votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voting {
    /// More than half of the detectors must agree.
    #[default]
    Majority,
    /// Every detector must agree.
    Unanimous,
}

impl Voting {
    /// Votes an index needs among `n_detectors` to be reported.
    pub fn required_votes(&self, n_detectors: usize) -> usize {
        match self {
            Voting::Majority => n_detectors / 2 + 1,
            Voting::Unanimous => n_detectors,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Voting::Majority => "majority",
            Voting::Unanimous => "unanimous",
        }
    }
}

impl fmt::Display for Voting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voting {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "majority" => Ok(Voting::Majority),
            "unanimous" => Ok(Voting::Unanimous),
            other => Err(AnalysisError::InvalidArgument(format!(
                "unknown voting rule: {other}"
            ))),
        }
    }
}

/// Run every detector on `series` and keep the indices enough of them agree on.
///
/// Each detector votes at most once per index. Reported values are read back
/// from `series`; indices a detector returns outside the series are ignored.
/// The result is sorted by index.
pub fn ensemble_anomaly_detection(
    series: &[f64],
    detectors: &[&dyn Detector],
    voting: Voting,
) -> Vec<Anomaly> {
    tally_votes(series, detectors.iter().copied(), voting)
}

fn tally_votes<'a, I>(series: &[f64], detectors: I, voting: Voting) -> Vec<Anomaly>
where
    I: IntoIterator<Item = &'a dyn Detector>,
{
    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    let mut n_detectors = 0;
    for detector in detectors {
        n_detectors += 1;
        let flagged: BTreeSet<usize> = detector
            .detect(series)
            .into_iter()
            .map(|a| a.index)
            .collect();
        debug!(detector = detector.name(), flagged = flagged.len(), "detector voted");
        for index in flagged {
            *tally.entry(index).or_insert(0) += 1;
        }
    }

    let required = voting.required_votes(n_detectors);
    tally
        .into_iter()
        .filter(|&(_, votes)| votes >= required)
        .filter_map(|(index, _)| Anomaly::at(series, index))
        .collect()
}

/// An owned set of detectors combined by a voting rule.
///
/// Itself a [`Detector`], so ensembles can be nested.
pub struct EnsembleDetector {
    detectors: Vec<Box<dyn Detector + Send + Sync>>,
    voting: Voting,
}

impl EnsembleDetector {
    pub fn new(voting: Voting) -> Self {
        Self {
            detectors: Vec::new(),
            voting,
        }
    }

    /// Add a detector to the ensemble.
    pub fn with_detector<D>(mut self, detector: D) -> Self
    where
        D: Detector + Send + Sync + 'static,
    {
        self.detectors.push(Box::new(detector));
        self
    }

    pub fn voting(&self) -> Voting {
        self.voting
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Detector for EnsembleDetector {
    fn detect(&self, series: &[f64]) -> Vec<Anomaly> {
        tally_votes(
            series,
            self.detectors.iter().map(|d| d.as_ref() as &dyn Detector),
            self.voting,
        )
    }

    fn name(&self) -> &str {
        "ensemble"
    }
}

impl fmt::Debug for EnsembleDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.detectors.iter().map(|d| d.name()).collect();
        f.debug_struct("EnsembleDetector")
            .field("detectors", &names)
            .field("voting", &self.voting)
            .finish()
    }
}
