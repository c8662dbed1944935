// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — End-to-End Scenarios
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Full load → compose → JSON path at the default 5000 x 32 resolution.

use dashboard_panels::chart::Trace;
use dashboard_panels::{Dashboard, DashboardView};
use dashboard_types::state::ShotNumber;

#[test]
fn shot_10086_default_dashboard() {
    let mut dash = Dashboard::default();
    assert!(dash.render().is_prompt());

    let data = dash.load(ShotNumber(10086));
    let t = data.time();
    assert_eq!(t.len(), 5000);
    assert_eq!(t[0], 0.0);
    assert!((t[4999] - 5.0).abs() < 1e-12);

    let ip = data.current();
    assert!(ip[0].abs() < 1e-12);
    assert!((400.0..=500.0).contains(&ip[2000]));

    let te = data.te_profile();
    assert_eq!(te.ncols(), 32);
    let center: f64 = te.column(0).sum();
    let edge: f64 = te.column(31).sum();
    assert!(center > edge);

    let view = dash.render();
    let (macro_signals, h_mode, te_profile) = match &view {
        DashboardView::Panels {
            macro_signals,
            h_mode,
            te_profile,
            ..
        } => (macro_signals, h_mode, te_profile),
        other => panic!("expected panels, got {other:?}"),
    };
    assert_eq!(macro_signals.figure.n_points(), 5000);
    assert_eq!(h_mode.figure.n_points(), 5000);
    assert_eq!(te_profile.figure.n_points(), 5000 * 32);

    match &te_profile.figure.data[0] {
        Trace::Heatmap(h) => {
            assert_eq!(h.z.len(), 32);
            assert!(h.z.iter().all(|row| row.len() == 5000));
        }
        other => panic!("expected heatmap, got {other:?}"),
    }
}

#[test]
fn view_serializes_for_plotly() {
    let mut dash = Dashboard::default();
    dash.load(ShotNumber(10086));
    let json = serde_json::to_value(dash.render()).unwrap();

    assert_eq!(json["view"], "panels");
    let macro_fig = &json["macro_signals"]["figure"];
    assert_eq!(macro_fig["data"][0]["name"], "IPRogo (Current)");
    assert_eq!(macro_fig["data"][0]["line"]["color"], "blue");

    let h_fig = &json["h_mode"]["figure"];
    assert_eq!(h_fig["data"][0]["line"]["color"], "orange");
    assert_eq!(h_fig["layout"]["shapes"][0]["x0"], 2.5);

    let te_fig = &json["te_profile"]["figure"];
    assert_eq!(te_fig["layout"]["xaxis"]["title"]["text"], "Time (s)");
    assert_eq!(te_fig["layout"]["yaxis"]["title"]["text"], "Channel (Space)");
    assert_eq!(te_fig["data"][0]["y"].as_array().unwrap().len(), 32);
}
