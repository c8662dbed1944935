// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Signal Synthesizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic discharge signals.
//!
//! Plasma current envelope (ramp-up, flat-top, ramp-down), a D-alpha
//! radiation proxy with an L→H drop, and a 32-channel ECE Te profile.
//! The shot number does not shape the signals; it only seeds the RNG
//! under [`SeedPolicy::PerShot`].

use dashboard_types::config::{SeedPolicy, SynthConfig};
use dashboard_types::error::DashboardResult;
use dashboard_types::state::{ShotData, ShotNumber};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Draw from N(mean, std).
fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std * z
}

/// Evenly spaced time axis on [0, t_end], both ends included.
pub fn time_axis(cfg: &SynthConfig) -> Array1<f64> {
    Array1::linspace(0.0, cfg.t_end, cfg.n_samples)
}

/// Plasma current I(t) = S (1 - e^{-t/τ}) (1 - σ((t - t_off) k)).
pub fn current_trace(time: &Array1<f64>, cfg: &SynthConfig) -> Array1<f64> {
    time.mapv(|t| {
        let rise = 1.0 - (-t / cfg.tau_rise).exp();
        let fall = 1.0 - 1.0 / (1.0 + (-(t - cfg.t_ramp_down) * cfg.k_ramp_down).exp());
        cfg.ip_scale * rise * fall
    })
}

/// D-alpha proxy: N(mean, std) baseline, `x * gain + offset` from the cutoff on.
pub fn radiation_trace<R: Rng + ?Sized>(cfg: &SynthConfig, rng: &mut R) -> Array1<f64> {
    let mut dalpha = Array1::from_shape_fn(cfg.n_samples, |_| {
        gaussian(rng, cfg.dalpha_mean, cfg.dalpha_std)
    });
    let cutoff = cfg.dalpha_cutoff.min(cfg.n_samples);
    dalpha
        .slice_mut(ndarray::s![cutoff..])
        .mapv_inplace(|v| v * cfg.dalpha_h_gain + cfg.dalpha_h_offset);
    dalpha
}

/// Te[t, ch] = (1 - (ch/n_ch)²) · I(t)/S · N(1, σ). Centre high, edge low.
pub fn temperature_profile<R: Rng + ?Sized>(
    current: &Array1<f64>,
    cfg: &SynthConfig,
    rng: &mut R,
) -> Array2<f64> {
    let n = current.len();
    let n_ch = cfg.n_channels;
    let mut te = Array2::zeros((n, n_ch));

    // Channel-major fill: one full time series per channel
    for ch in 0..n_ch {
        let x = ch as f64 / n_ch as f64;
        let falloff = 1.0 - x * x;
        for it in 0..n {
            let noise = gaussian(rng, 1.0, cfg.te_noise_std);
            te[[it, ch]] = falloff * current[it] / cfg.ip_scale * noise;
        }
    }
    te
}

/// Signal synthesizer bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Synthesizer {
            config: SynthConfig::default(),
        }
    }
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Synthesizer { config })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Generate all four signals for a shot. Never fails.
    pub fn generate(&self, shot: ShotNumber) -> ShotData {
        match self.config.seed {
            SeedPolicy::Entropy => self.generate_with_rng(shot, &mut rand::thread_rng()),
            SeedPolicy::PerShot => {
                let mut rng = StdRng::seed_from_u64(shot.0 as u64);
                self.generate_with_rng(shot, &mut rng)
            }
        }
    }

    /// Generate using a caller-supplied random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, shot: ShotNumber, rng: &mut R) -> ShotData {
        let cfg = &self.config;
        let time = time_axis(cfg);
        let current = current_trace(&time, cfg);
        let dalpha = radiation_trace(cfg, rng);
        let te = temperature_profile(&current, cfg, rng);

        log::debug!(
            "Generated shot {shot}: {} samples on [0, {}] s, Te {}x{}",
            time.len(),
            cfg.t_end,
            te.nrows(),
            te.ncols()
        );
        ShotData::new(shot, time, current, dalpha, te)
    }
}

/// Generate a shot with the default 5 s / 5000-sample / 32-channel setup.
pub fn generate(shot: i64) -> ShotData {
    Synthesizer::default().generate(ShotNumber(shot))
}
