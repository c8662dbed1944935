// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Default discharge waveform constants.
//!
//! 5 s window sampled at 1 ms, EAST-like current envelope.

/// Number of time samples. 1 ms over 5 s.
pub const N_SAMPLES: usize = 5000;

/// End of the time window [s].
pub const T_END: f64 = 5.0;

/// Flat-top plasma current [kA].
pub const IP_SCALE: f64 = 500.0;

/// Current ramp-up time constant [s].
pub const TAU_RISE: f64 = 0.5;

/// Ramp-down midpoint [s].
pub const T_RAMP_DOWN: f64 = 4.5;

/// Ramp-down logistic steepness [1/s].
pub const K_RAMP_DOWN: f64 = 10.0;

/// D-alpha baseline mean (L-mode).
pub const DALPHA_MEAN: f64 = 10.0;

/// D-alpha baseline standard deviation.
pub const DALPHA_STD: f64 = 1.0;

/// Sample index of the L→H drop. 2.5 s at 1 ms.
pub const DALPHA_CUTOFF: usize = 2500;

/// Post-transition D-alpha gain.
pub const DALPHA_H_GAIN: f64 = 0.3;

/// Post-transition D-alpha offset.
pub const DALPHA_H_OFFSET: f64 = 2.0;

/// ECE radiometer channel count.
pub const N_CHANNELS: usize = 32;

/// Multiplicative Te noise standard deviation (mean 1).
pub const TE_NOISE_STD: f64 = 0.05;

/// Time of the static H-mode trigger marker [s].
pub const H_MODE_MARKER_T: f64 = 2.5;

/// Shot number pre-filled in the input field.
pub const DEFAULT_SHOT: i64 = 10086;
