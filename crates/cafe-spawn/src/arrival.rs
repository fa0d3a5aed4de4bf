//! Arrival types: `Arrival`, `ArrivalPlan`, and `SpawnPolicy`.

use serde::{Deserialize, Serialize};

use crate::{SpawnError, SpawnResult};

// ── Arrival ───────────────────────────────────────────────────────────────────

/// One customer walking in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    /// Simulated seconds since the start of the run.
    pub at_secs: f64,
    /// Patience budget; `None` means "use the configured base".
    #[serde(default)]
    pub patience_secs: Option<f64>,
}

impl Arrival {
    pub fn new(at_secs: f64, patience_secs: Option<f64>) -> Self {
        Self { at_secs, patience_secs }
    }

    #[inline]
    pub fn patience_or(&self, base_secs: f64) -> f64 {
        self.patience_secs.unwrap_or(base_secs)
    }

    fn check(&self, index: usize) -> SpawnResult<()> {
        let invalid = |reason: String| SpawnError::InvalidArrival { index, reason };
        if !(self.at_secs.is_finite() && self.at_secs >= 0.0) {
            return Err(invalid(format!("at_secs must be finite and >= 0, got {}", self.at_secs)));
        }
        if let Some(p) = self.patience_secs
            && !(p.is_finite() && p >= 0.0)
        {
            return Err(invalid(format!("patience_secs must be finite and >= 0, got {p}")));
        }
        Ok(())
    }
}

// ── ArrivalPlan ───────────────────────────────────────────────────────────────

/// Arrivals in ascending `at_secs` order.
///
/// Ties keep their input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Arrival>", into = "Vec<Arrival>")]
pub struct ArrivalPlan {
    arrivals: Vec<Arrival>,
}

impl ArrivalPlan {
    /// Validate and sort `arrivals`.
    pub fn new(mut arrivals: Vec<Arrival>) -> SpawnResult<Self> {
        for (i, a) in arrivals.iter().enumerate() {
            a.check(i)?;
        }
        arrivals.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Ok(Self { arrivals })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}

impl TryFrom<Vec<Arrival>> for ArrivalPlan {
    type Error = SpawnError;

    fn try_from(arrivals: Vec<Arrival>) -> SpawnResult<Self> {
        Self::new(arrivals)
    }
}

impl From<ArrivalPlan> for Vec<Arrival> {
    fn from(plan: ArrivalPlan) -> Self {
        plan.arrivals
    }
}

// ── SpawnPolicy ───────────────────────────────────────────────────────────────

/// How customers arrive over a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Exactly these arrivals.
    Scheduled(ArrivalPlan),

    /// One arrival every `interval_secs`, each gap shifted by up to
    /// `±jitter_secs`.  The first customer arrives at time zero.
    Periodic {
        interval_secs: f64,
        #[serde(default)]
        jitter_secs: f64,
        /// Stop after this many arrivals; `None` runs until the sim ends.
        #[serde(default)]
        limit: Option<u32>,
    },
}

impl SpawnPolicy {
    pub fn validate(&self) -> SpawnResult<()> {
        match self {
            SpawnPolicy::Scheduled(_) => Ok(()),
            SpawnPolicy::Periodic { interval_secs, jitter_secs, .. } => {
                if !(interval_secs.is_finite() && *interval_secs > 0.0) {
                    return Err(SpawnError::InvalidPolicy(format!(
                        "interval_secs must be positive, got {interval_secs}"
                    )));
                }
                if !(jitter_secs.is_finite() && *jitter_secs >= 0.0 && jitter_secs < interval_secs) {
                    return Err(SpawnError::InvalidPolicy(format!(
                        "jitter_secs must be in [0, interval_secs), got {jitter_secs}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Periodic { interval_secs: 6.0, jitter_secs: 2.0, limit: None }
    }
}
