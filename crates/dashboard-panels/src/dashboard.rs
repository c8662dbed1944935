// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Dashboard Controller
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Load/redraw loop of the dashboard, minus the widgets.
//!
//! The shell calls [`Dashboard::load`] when the load button fires and
//! [`Dashboard::render`] on every redraw.

use crate::chrome::PageChrome;
use crate::compose::{compose, DashboardView};
use dashboard_synth::Synthesizer;
use dashboard_types::config::{DashboardConfig, PanelConfig};
use dashboard_types::error::DashboardResult;
use dashboard_types::state::{SessionContext, ShotData, ShotNumber};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    synthesizer: Synthesizer,
    panels: PanelConfig,
    session: SessionContext,
    chrome: PageChrome,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Dashboard {
            synthesizer: Synthesizer::new(config.synth)?,
            panels: config.panels,
            session: SessionContext::new(),
            chrome: PageChrome::default(),
        })
    }

    /// Load button: generate the shot and replace the session slot.
    pub fn load(&mut self, shot: ShotNumber) -> &ShotData {
        log::info!("Loading shot {shot}");
        let data = self.synthesizer.generate(shot);
        self.session.store(data)
    }

    pub fn render(&self) -> DashboardView {
        compose(&self.session, &self.panels)
    }

    pub fn reset(&mut self) {
        self.session.clear();
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn chrome(&self) -> &PageChrome {
        &self.chrome
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }
}
