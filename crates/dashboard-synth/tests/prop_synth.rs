// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Property-Based Tests (proptest) for dashboard-synth
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for dashboard-synth using proptest.
//!
//! Covers: signal alignment for arbitrary shots and window sizes,
//! current envelope bounds, per-shot seeding.

use dashboard_synth::synth::{current_trace, time_axis, Synthesizer};
use dashboard_types::config::{SeedPolicy, SynthConfig};
use dashboard_types::state::ShotNumber;
use proptest::prelude::*;

fn small_config(n: usize, n_channels: usize, seed: SeedPolicy) -> SynthConfig {
    SynthConfig {
        n_samples: n,
        dalpha_cutoff: n / 2,
        n_channels,
        seed,
        ..Default::default()
    }
}

// ── Alignment ────────────────────────────────────────────────────────

proptest! {
    /// Every signal shares the time axis length, for any shot number.
    #[test]
    fn signals_aligned_for_any_shot(
        shot in any::<i64>(),
        n in 2usize..400,
        n_channels in 1usize..48,
    ) {
        let synth = Synthesizer::new(small_config(n, n_channels, SeedPolicy::Entropy)).unwrap();
        let data = synth.generate(ShotNumber(shot));

        prop_assert_eq!(data.time().len(), n);
        prop_assert_eq!(data.current().len(), n);
        prop_assert_eq!(data.dalpha().len(), n);
        prop_assert_eq!(data.te_profile().shape(), &[n, n_channels]);
        prop_assert_eq!(data.shot(), ShotNumber(shot));
    }

    /// Default channel count is always 32.
    #[test]
    fn default_profile_has_32_channels(shot in any::<i64>()) {
        let cfg = SynthConfig { n_samples: 50, dalpha_cutoff: 25, ..Default::default() };
        let data = Synthesizer::new(cfg).unwrap().generate(ShotNumber(shot));
        prop_assert_eq!(data.n_channels(), 32);
    }
}

// ── Current Envelope ─────────────────────────────────────────────────

proptest! {
    /// Current stays within [0, ip_scale] for any window length.
    #[test]
    fn current_bounded(
        n in 2usize..2000,
        t_end in 0.1f64..20.0,
        scale in 1.0f64..2000.0,
    ) {
        let cfg = SynthConfig {
            n_samples: n,
            t_end,
            ip_scale: scale,
            dalpha_cutoff: 0,
            ..Default::default()
        };
        let ip = current_trace(&time_axis(&cfg), &cfg);
        for &v in ip.iter() {
            prop_assert!(v >= 0.0, "negative current {}", v);
            prop_assert!(v <= scale, "current {} above scale {}", v, scale);
        }
    }

    /// Time axis is strictly increasing and spans [0, t_end].
    #[test]
    fn time_axis_monotone(n in 2usize..2000, t_end in 0.1f64..20.0) {
        let cfg = SynthConfig { n_samples: n, t_end, dalpha_cutoff: 0, ..Default::default() };
        let t = time_axis(&cfg);
        prop_assert_eq!(t[0], 0.0);
        prop_assert!((t[n - 1] - t_end).abs() < 1e-9 * t_end.max(1.0));
        for i in 1..n {
            prop_assert!(t[i] > t[i - 1]);
        }
    }
}

// ── Seeding ──────────────────────────────────────────────────────────

proptest! {
    /// Per-shot seeding reproduces identical arrays.
    #[test]
    fn per_shot_seed_reproducible(shot in any::<i64>()) {
        let synth = Synthesizer::new(small_config(128, 8, SeedPolicy::PerShot)).unwrap();
        let a = synth.generate(ShotNumber(shot));
        let b = synth.generate(ShotNumber(shot));
        prop_assert_eq!(a.dalpha(), b.dalpha());
        prop_assert_eq!(a.te_profile(), b.te_profile());
    }
}
