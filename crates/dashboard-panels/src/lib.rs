// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Dashboard Panels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Panel composition: chart specs, page chrome and the load/redraw
//! controller.

pub mod chart;
pub mod chrome;
pub mod compose;
pub mod dashboard;

pub use compose::{compose, DashboardView};
pub use dashboard::Dashboard;
