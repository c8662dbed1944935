// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Panel Composer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Turns a loaded shot into three panels: plasma current, D-alpha with
//! the H-mode marker, and the Te profile heatmap.
//!
//! The H-mode marker sits at a fixed configured time. It is an
//! annotation, not a detection result.

use crate::chart::{Figure, Layout, Margin};
use dashboard_types::config::PanelConfig;
use dashboard_types::state::{SessionContext, ShotData, ShotNumber};
use serde::Serialize;

/// Shown instead of the panels until a shot is loaded.
pub const PROMPT_MESSAGE: &str = "Enter a shot number in the sidebar and click 'Load Data'";

pub const CURRENT_TRACE_NAME: &str = "IPRogo (Current)";
pub const DALPHA_TRACE_NAME: &str = "D_alpha (Radiation)";
pub const H_MODE_LABEL: &str = "H-mode Trigger";

pub const MACRO_SIGNALS_TITLE: &str = "User ID / Current";
pub const H_MODE_TITLE: &str = "Conversion Event / D_alpha";
pub const TE_PROFILE_TITLE: &str = "User Interest Embedding (Te Profile Evolution)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    MacroSignals,
    HModeDetection,
    TeProfile,
}

/// One chart with its heading and caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub subheader: String,
    pub figure: Figure,
    pub caption: String,
}

/// What the shell draws on a redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    /// No shot loaded: prompt only, no chart data.
    Prompt { message: String },
    /// Macro signals and H-mode side by side, Te profile full width below.
    Panels {
        shot: ShotNumber,
        macro_signals: Panel,
        h_mode: Panel,
        te_profile: Panel,
    },
}

impl DashboardView {
    pub fn is_prompt(&self) -> bool {
        matches!(self, DashboardView::Prompt { .. })
    }

    /// Panels in display order. Empty for the prompt.
    pub fn panels(&self) -> Vec<&Panel> {
        match self {
            DashboardView::Prompt { .. } => Vec::new(),
            DashboardView::Panels {
                macro_signals,
                h_mode,
                te_profile,
                ..
            } => vec![macro_signals, h_mode, te_profile],
        }
    }
}

pub fn macro_signals_panel(data: &ShotData, cfg: &PanelConfig) -> Panel {
    let layout = Layout::new(MACRO_SIGNALS_TITLE, cfg.line_height).with_margin(Margin::ZERO);
    let mut figure = Figure::new(layout);
    figure.add_line(
        data.time().to_vec(),
        data.current().to_vec(),
        CURRENT_TRACE_NAME,
        &cfg.current_color,
    );
    Panel {
        kind: PanelKind::MacroSignals,
        subheader: "Macro Signals".to_string(),
        figure,
        caption: "**Physical meaning:** discharge lifecycle. A steady flat-top means \
                  a sustained plasma; the fall to zero marks the ramp-down."
            .to_string(),
    }
}

pub fn h_mode_panel(data: &ShotData, cfg: &PanelConfig) -> Panel {
    let layout = Layout::new(H_MODE_TITLE, cfg.line_height).with_margin(Margin::ZERO);
    let mut figure = Figure::new(layout);
    figure
        .add_line(
            data.time().to_vec(),
            data.dalpha().to_vec(),
            DALPHA_TRACE_NAME,
            &cfg.dalpha_color,
        )
        .add_vline(cfg.h_mode_marker_t, &cfg.marker_color, H_MODE_LABEL);
    Panel {
        kind: PanelKind::HModeDetection,
        subheader: "H-mode Detection".to_string(),
        figure,
        caption: "**Physical meaning:** the red line marks the sudden `D_alpha` drop, \
                  labelled as the L→H transition (**Label = 1**)."
            .to_string(),
    }
}

pub fn te_profile_panel(data: &ShotData, cfg: &PanelConfig) -> Panel {
    let layout = Layout::new(TE_PROFILE_TITLE, cfg.heatmap_height)
        .with_axis_titles("Time (s)", "Channel (Space)");
    let mut figure = Figure::new(layout);

    // Rows = channels, columns = time
    let z: Vec<Vec<f64>> = data
        .te_profile()
        .t()
        .outer_iter()
        .map(|row| row.to_vec())
        .collect();
    let channels: Vec<usize> = (0..data.n_channels()).collect();
    figure.add_heatmap(z, data.time().to_vec(), channels, &cfg.colorscale);

    Panel {
        kind: PanelKind::TeProfile,
        subheader: "ECE Temperature Profile".to_string(),
        figure,
        caption: format!(
            "**Spatiotemporal view:** the {}-channel Te profile as it evolves in time. \
             After the H-mode transition ({} s) the edge gradient steepens.",
            data.n_channels(),
            cfg.h_mode_marker_t
        ),
    }
}

/// Build the view for the current session state.
pub fn compose(session: &SessionContext, cfg: &PanelConfig) -> DashboardView {
    match session.get() {
        None => DashboardView::Prompt {
            message: PROMPT_MESSAGE.to_string(),
        },
        Some(data) => DashboardView::Panels {
            shot: data.shot(),
            macro_signals: macro_signals_panel(data, cfg),
            h_mode: h_mode_panel(data, cfg),
            te_profile: te_profile_panel(data, cfg),
        },
    }
}
