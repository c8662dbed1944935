// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Page Chrome
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static page furniture drawn around the panels: titles, sidebar
//! controls and the mode banner.

use dashboard_types::constants::DEFAULT_SHOT;
use dashboard_types::state::ShotNumber;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotInput {
    pub label: String,
    pub default: ShotNumber,
    pub step: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageChrome {
    pub page_title: String,
    /// "wide" or "centered".
    pub layout: String,
    pub title: String,
    pub subtitle: String,
    pub sidebar_header: String,
    pub shot_input: ShotInput,
    pub load_button: String,
    pub mode_banner: String,
}

impl Default for PageChrome {
    fn default() -> Self {
        PageChrome {
            page_title: "EAST Feature Analysis Dashboard".to_string(),
            layout: "wide".to_string(),
            title: "EAST Plasma Behaviour Analysis & Feature Extraction".to_string(),
            subtitle: "Sequence-model data preprocessing board".to_string(),
            sidebar_header: "Console".to_string(),
            shot_input: ShotInput {
                label: "Shot Number".to_string(),
                default: ShotNumber(DEFAULT_SHOT),
                step: 1,
            },
            load_button: "Load Data".to_string(),
            mode_banner: "Current mode: Offline Analysis".to_string(),
        }
    }
}
