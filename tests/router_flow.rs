use atrium::core::history::{History, MemoryHistory};
use atrium::core::route::RouteTable;
use atrium::core::router::{Phase, Router};

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds the two-route table from the shell: "/" and "/about". Views are
/// plain labels here; the core treats them as opaque payloads either way.
fn sample_table() -> RouteTable<&'static str> {
    let mut table = RouteTable::new();
    table.register("/", "Home");
    table.register("/about", "About");
    table
}

/// A router over `sample_table`, mounted at "/".
fn sample_router() -> Router<&'static str> {
    Router::new(sample_table(), Box::new(MemoryHistory::new("/")))
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_root_path_matches_home() {
    let table = sample_table();
    assert_eq!(table.resolve("/"), Some(&"Home"));
}

#[test]
fn test_about_path_matches_about() {
    let table = sample_table();
    assert_eq!(table.resolve("/about"), Some(&"About"));
}

#[test]
fn test_unregistered_path_is_not_found() {
    let table = sample_table();
    assert_eq!(table.resolve("/missing"), None);
}

#[test]
fn test_first_registration_wins_on_duplicate_patterns() {
    let mut table = RouteTable::new();
    table.register("/about", "About");
    table.register("/about", "OtherAbout");
    assert_eq!(table.resolve("/about"), Some(&"About"));
}

#[test]
fn test_every_registered_pattern_resolves_to_its_first_view() {
    let table = sample_table();
    for route in table.routes() {
        let resolved = table.resolve(&route.pattern);
        let first = table
            .routes()
            .iter()
            .find(|r| r.pattern == route.pattern)
            .map(|r| &r.view);
        assert_eq!(resolved, first);
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigate_then_back_restores_previous_view() {
    let mut router = sample_router();
    assert_eq!(router.current_view(), Some(&"Home"));

    assert!(router.navigate("/about"));
    assert_eq!(router.current_view(), Some(&"About"));

    // Simulated back event from the host
    assert!(router.back());
    assert_eq!(router.current_view(), Some(&"Home"));
}

#[test]
fn test_repeated_navigation_pushes_no_extra_history_entry() {
    let mut router = sample_router();
    assert!(router.navigate("/about"));
    assert!(!router.navigate("/about"));
    assert_eq!(router.location().path, "/about");

    // One back reaches the start; a second hits the boundary.
    assert!(router.back());
    assert_eq!(router.location().path, "/");
    assert!(!router.back());
}

#[test]
fn test_back_then_forward_is_a_round_trip() {
    let mut router = sample_router();
    router.navigate("/about");
    router.back();
    assert!(router.forward());
    assert_eq!(router.current_view(), Some(&"About"));
}

#[test]
fn test_navigating_somewhere_new_discards_forward_entries() {
    let mut router = sample_router();
    router.navigate("/about");
    router.back();
    router.navigate("/contact");
    assert!(!router.forward());
    assert_eq!(router.location().path, "/contact");
}

#[test]
fn test_not_found_location_is_recoverable() {
    let mut router = sample_router();
    assert!(router.navigate("/nowhere"));
    // NotFound is a value, not a failure: the router keeps working.
    assert_eq!(router.current_view(), None);
    assert_eq!(router.phase(), Phase::Idle);
    assert!(router.back());
    assert_eq!(router.current_view(), Some(&"Home"));
}

#[test]
fn test_only_the_router_moves_the_location() {
    let mut router = sample_router();
    // Reads never move the Location.
    let _ = router.current_view();
    let _ = router.table();
    assert_eq!(router.location().path, "/");
    router.navigate("/about");
    assert_eq!(router.location().path, "/about");
}

// ============================================================================
// History seam
// ============================================================================

#[test]
fn test_router_initial_location_comes_from_history() {
    let router: Router<&'static str> =
        Router::new(sample_table(), Box::new(MemoryHistory::new("/about")));
    assert_eq!(router.location().path, "/about");
    assert_eq!(router.current_view(), Some(&"About"));
}

#[test]
fn test_memory_history_matches_browser_semantics() {
    let mut history = MemoryHistory::new("/");
    history.push("/a");
    history.push("/b");
    assert_eq!(history.back(), Some("/a".to_string()));
    history.push("/c");
    // "/b" became unreachable the moment "/c" was pushed.
    assert_eq!(history.forward(), None);
    assert_eq!(history.back(), Some("/a".to_string()));
    assert_eq!(history.back(), Some("/".to_string()));
    assert_eq!(history.back(), None);
}
