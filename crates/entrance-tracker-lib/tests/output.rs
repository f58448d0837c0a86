mod common;

use entrance_tracker_lib::{
    find_route, ConnectionStore, RouteAlgorithm, RouteRenderMode, RouteRequest, RouteSummary,
};

use common::fixture_catalog;

fn summary(connections: &ConnectionStore, start: &str, goal: &str) -> RouteSummary {
    let catalog = fixture_catalog();
    let request = RouteRequest::bfs(start, goal).with_algorithm(RouteAlgorithm::Dijkstra);
    let route = find_route(&catalog, connections, start, goal);
    RouteSummary::new(&catalog, &request, route)
}

fn connected() -> ConnectionStore {
    [("E1", "Village Gate"), ("E2", "Village Well")]
        .into_iter()
        .collect()
}

#[test]
fn plain_text_lists_numbered_hops() {
    let text = summary(&connected(), "E1", "village-well").render(RouteRenderMode::PlainText);
    assert!(text.starts_with(
        "Route found: Forest - E1 -> Village - Village Well (2 steps, algorithm: dijkstra)"
    ));
    assert!(text.contains("  1. From: Forest - E1"));
    assert!(text.contains("     To:   Village Gate"));
    assert!(text.contains("  2. From: Village - Village Gate"));
}

#[test]
fn steps_mode_is_one_sentence_per_hop() {
    let text = summary(&connected(), "E1", "E2").render(RouteRenderMode::Steps);
    assert_eq!(
        text,
        "1. From Forest, use exit Forest - E1 to Village Gate.\nTotal steps: 1\n"
    );
}

#[test]
fn failure_panel_gives_guidance() {
    let text = summary(&ConnectionStore::new(), "E1", "E2").render(RouteRenderMode::PlainText);
    assert!(text.starts_with("No route found: Forest - E1 -> Village - Village Gate"));
    assert!(text.contains("This could be because:"));
    assert!(text.contains("Tip:"));

    let rich = summary(&ConnectionStore::new(), "E1", "E2").render(RouteRenderMode::RichText);
    assert!(rich.starts_with("**No route found**"));
}

#[test]
fn unknown_endpoints_keep_the_typed_label() {
    let summary = summary(&connected(), "E1", "Nowhere");
    assert_eq!(summary.goal.id, None);
    assert_eq!(summary.goal.label, "Nowhere");
    assert_eq!(summary.start.id.as_deref(), Some("E1"));
    assert_eq!(summary.start.label, "Forest - E1");
}

#[test]
fn summary_json_flattens_the_route() {
    let value = serde_json::to_value(summary(&connected(), "E1", "E2")).expect("serialize");
    assert_eq!(value["algorithm"], "dijkstra");
    assert_eq!(value["start"]["label"], "Forest - E1");
    assert_eq!(value["totalSteps"], 1);
    assert_eq!(value["isComplete"], true);
    assert_eq!(value["steps"][0]["areaName"], "Forest");
}
