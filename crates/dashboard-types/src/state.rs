// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discharge (shot) number. Any integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShotNumber(pub i64);

impl fmt::Display for ShotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for ShotNumber {
    fn from(n: i64) -> Self {
        ShotNumber(n)
    }
}

/// One loaded discharge: four time-aligned diagnostic signals.
/// Immutable once built; a new load replaces it wholesale.
#[derive(Debug, Clone)]
pub struct ShotData {
    shot: ShotNumber,
    time: Array1<f64>,     // [s], strictly increasing [n]
    current: Array1<f64>,  // IPRogo [kA] [n]
    dalpha: Array1<f64>,   // D-alpha radiation proxy [n]
    te: Array2<f64>,       // ECE Te profile [n, n_channels], normalized
}

impl ShotData {
    /// Bundle the four signals.
    ///
    /// # Panics
    /// If the first dimensions of the arrays differ.
    pub fn new(
        shot: ShotNumber,
        time: Array1<f64>,
        current: Array1<f64>,
        dalpha: Array1<f64>,
        te: Array2<f64>,
    ) -> Self {
        let n = time.len();
        assert_eq!(current.len(), n, "current not aligned with time axis");
        assert_eq!(dalpha.len(), n, "D-alpha not aligned with time axis");
        assert_eq!(te.nrows(), n, "Te profile not aligned with time axis");
        ShotData {
            shot,
            time,
            current,
            dalpha,
            te,
        }
    }

    pub fn shot(&self) -> ShotNumber {
        self.shot
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn current(&self) -> &Array1<f64> {
        &self.current
    }

    pub fn dalpha(&self) -> &Array1<f64> {
        &self.dalpha
    }

    /// Temperature profile, rows = time, columns = channel.
    pub fn te_profile(&self) -> &Array2<f64> {
        &self.te
    }

    pub fn n_samples(&self) -> usize {
        self.time.len()
    }

    pub fn n_channels(&self) -> usize {
        self.te.ncols()
    }
}

/// Per-session slot holding the most recent load.
///
/// Owned by the shell and passed explicitly to the composer. One writer
/// (the load action), any number of readers (redraws).
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    data: Option<ShotData>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&ShotData> {
        self.data.as_ref()
    }

    fn log_load(&self, data: &ShotData) {
        match &self.data {
            Some(prev) => log::info!("Session: replacing shot {} with {}", prev.shot, data.shot),
            None => log::info!("Session: loaded shot {}", data.shot),
        }
    }

    /// Store a new load, returning the one it replaces.
    pub fn set(&mut self, data: ShotData) -> Option<ShotData> {
        self.log_load(&data);
        self.data.replace(data)
    }

    /// Store a new load and borrow it back.
    pub fn store(&mut self, data: ShotData) -> &ShotData {
        self.log_load(&data);
        self.data.insert(data)
    }

    pub fn clear(&mut self) {
        if let Some(prev) = self.data.take() {
            log::info!("Session: cleared shot {}", prev.shot);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}
