// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::*;
use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration.
/// Maps 1:1 to dashboard_config.json. Every field is optional in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub synth: SynthConfig,
    #[serde(default)]
    pub panels: PanelConfig,
}

/// Random source used by the synthesizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Fresh OS-seeded draws on every call. Same shot, different noise.
    #[default]
    Entropy,
    /// RNG seeded from the shot number. Same shot, same arrays.
    PerShot,
}

/// Synthetic waveform parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub n_samples: usize,
    pub t_end: f64,
    pub ip_scale: f64,
    pub tau_rise: f64,
    pub t_ramp_down: f64,
    pub k_ramp_down: f64,
    pub dalpha_mean: f64,
    pub dalpha_std: f64,
    /// First sample index in the H-mode phase. Equal to n_samples means no drop.
    pub dalpha_cutoff: usize,
    pub dalpha_h_gain: f64,
    pub dalpha_h_offset: f64,
    pub n_channels: usize,
    pub te_noise_std: f64,
    pub seed: SeedPolicy,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            n_samples: N_SAMPLES,
            t_end: T_END,
            ip_scale: IP_SCALE,
            tau_rise: TAU_RISE,
            t_ramp_down: T_RAMP_DOWN,
            k_ramp_down: K_RAMP_DOWN,
            dalpha_mean: DALPHA_MEAN,
            dalpha_std: DALPHA_STD,
            dalpha_cutoff: DALPHA_CUTOFF,
            dalpha_h_gain: DALPHA_H_GAIN,
            dalpha_h_offset: DALPHA_H_OFFSET,
            n_channels: N_CHANNELS,
            te_noise_std: TE_NOISE_STD,
            seed: SeedPolicy::Entropy,
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> DashboardResult<()> {
        if self.n_samples < 2 {
            return Err(DashboardError::ConfigError(format!(
                "n_samples must be >= 2, got {}",
                self.n_samples
            )));
        }
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(DashboardError::ConfigError(format!(
                "t_end must be finite and > 0, got {}",
                self.t_end
            )));
        }
        if !(self.ip_scale.is_finite() && self.ip_scale > 0.0) {
            return Err(DashboardError::ConfigError(format!(
                "ip_scale must be finite and > 0, got {}",
                self.ip_scale
            )));
        }
        if !(self.tau_rise.is_finite() && self.tau_rise > 0.0) {
            return Err(DashboardError::ConfigError(format!(
                "tau_rise must be finite and > 0, got {}",
                self.tau_rise
            )));
        }
        if !self.t_ramp_down.is_finite() {
            return Err(DashboardError::ConfigError(format!(
                "t_ramp_down must be finite, got {}",
                self.t_ramp_down
            )));
        }
        if !(self.k_ramp_down.is_finite() && self.k_ramp_down > 0.0) {
            return Err(DashboardError::ConfigError(format!(
                "k_ramp_down must be finite and > 0, got {}",
                self.k_ramp_down
            )));
        }
        if self.dalpha_cutoff > self.n_samples {
            return Err(DashboardError::ConfigError(format!(
                "dalpha_cutoff {} exceeds n_samples {}",
                self.dalpha_cutoff, self.n_samples
            )));
        }
        if self.n_channels == 0 {
            return Err(DashboardError::ConfigError(
                "n_channels must be >= 1".to_string(),
            ));
        }
        for (name, value) in [
            ("dalpha_mean", self.dalpha_mean),
            ("dalpha_h_gain", self.dalpha_h_gain),
            ("dalpha_h_offset", self.dalpha_h_offset),
        ] {
            if !value.is_finite() {
                return Err(DashboardError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        for (name, std) in [
            ("dalpha_std", self.dalpha_std),
            ("te_noise_std", self.te_noise_std),
        ] {
            if !(std.is_finite() && std >= 0.0) {
                return Err(DashboardError::ConfigError(format!(
                    "{name} must be finite and >= 0, got {std}"
                )));
            }
        }
        Ok(())
    }
}

/// Chart appearance. Colours are Plotly colour names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Static H-mode trigger marker time [s]. Not derived from the signal.
    pub h_mode_marker_t: f64,
    pub line_height: u32,
    pub heatmap_height: u32,
    pub current_color: String,
    pub dalpha_color: String,
    pub marker_color: String,
    pub colorscale: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            h_mode_marker_t: H_MODE_MARKER_T,
            line_height: 300,
            heatmap_height: 400,
            current_color: "blue".to_string(),
            dalpha_color: "orange".to_string(),
            marker_color: "red".to_string(),
            colorscale: "Viridis".to_string(),
        }
    }
}

impl PanelConfig {
    /// Heights must be positive; the marker must fall inside [0, t_end].
    pub fn validate(&self, t_end: f64) -> DashboardResult<()> {
        if self.line_height == 0 || self.heatmap_height == 0 {
            return Err(DashboardError::ConfigError(format!(
                "chart heights must be > 0, got line={} heatmap={}",
                self.line_height, self.heatmap_height
            )));
        }
        if !(self.h_mode_marker_t.is_finite() && (0.0..=t_end).contains(&self.h_mode_marker_t)) {
            return Err(DashboardError::ConfigError(format!(
                "h_mode_marker_t must lie in [0, {t_end}], got {}",
                self.h_mode_marker_t
            )));
        }
        Ok(())
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> DashboardResult<()> {
        self.synth.validate()?;
        self.panels.validate(self.synth.t_end)
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded dashboard config from {path}");
        Ok(config)
    }
}
