use warden::access::matcher::PatternMatcher;
use warden::access::snapshot::PermissionSnapshot;

fn patterns(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|p| p.to_string()).collect()
}

#[test]
fn regex_metacharacters_are_literal() {
    let matcher = PatternMatcher::new();
    // Without a `*` the pattern is compared literally, dot included.
    assert!(!matcher.matches_any(&patterns(&["warehouse.products"]), "warehouseXproducts"));
    // With a `*` the literal chunks are escaped before compilation.
    assert!(!matcher.matches_any(&patterns(&["warehouse.*"]), "warehouseXproducts.read"));
    assert!(matcher.matches_any(&patterns(&["report+v2.*"]), "report+v2.export"));
    assert!(!matcher.matches_any(&patterns(&["report+v2.*"]), "reportv2.export"));
}

#[test]
fn wildcard_matches_zero_characters() {
    let matcher = PatternMatcher::new();
    assert!(matcher.matches_any(&patterns(&["warehouse.products*"]), "warehouse.products"));
    assert!(matcher.matches_any(&patterns(&["warehouse.*"]), "warehouse."));
}

#[test]
fn multiple_wildcards_in_one_pattern() {
    let matcher = PatternMatcher::new();
    let list = patterns(&["*.products.*"]);
    assert!(matcher.matches_any(&list, "warehouse.products.read"));
    assert!(matcher.matches_any(&list, "shop.products.archive.all"));
    assert!(!matcher.matches_any(&list, "warehouse.stock.read"));
}

#[test]
fn later_patterns_still_match() {
    let matcher = PatternMatcher::new();
    let list = patterns(&["org.update", "warehouse.stock.read", "teams.*"]);
    assert!(matcher.matches_any(&list, "teams.chat.read"));
}

#[test]
fn deny_identical_to_allow_cancels_the_grant() {
    let matcher = PatternMatcher::new();
    let snapshot = PermissionSnapshot::new(patterns(&["org.update"]), patterns(&["org.update"]));
    assert!(!matcher.check(&snapshot, "org.update"));
}

#[test]
fn compiled_patterns_are_cached_once() {
    let matcher = PatternMatcher::new();
    let list = patterns(&["warehouse.*"]);

    assert_eq!(matcher.cached_patterns(), 0);
    assert!(matcher.matches_any(&list, "warehouse.products.read"));
    assert_eq!(matcher.cached_patterns(), 1);
    assert!(matcher.matches_any(&list, "warehouse.stock.read"));
    assert_eq!(matcher.cached_patterns(), 1);

    // Literal and universal patterns never touch the cache.
    assert!(matcher.matches_any(&patterns(&["*"]), "org.update"));
    assert!(!matcher.matches_any(&patterns(&["org.update"]), "org.delete"));
    assert_eq!(matcher.cached_patterns(), 1);
}

#[test]
fn clearing_the_cache_does_not_change_results() {
    let matcher = PatternMatcher::new();
    let list = patterns(&["warehouse.*", "teams.*.read"]);

    let before: Vec<bool> = ["warehouse.stock.read", "teams.chat.read", "org.update"]
        .iter()
        .map(|required| matcher.matches_any(&list, required))
        .collect();
    assert_eq!(matcher.cached_patterns(), 2);

    matcher.clear_cache();
    assert_eq!(matcher.cached_patterns(), 0);

    let after: Vec<bool> = ["warehouse.stock.read", "teams.chat.read", "org.update"]
        .iter()
        .map(|required| matcher.matches_any(&list, required))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let matcher = std::sync::Arc::new(PatternMatcher::new());
    let list = patterns(&["warehouse.*"]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = std::sync::Arc::clone(&matcher);
            let list = list.clone();
            std::thread::spawn(move || matcher.matches_any(&list, "warehouse.products.read"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread"));
    }
    assert_eq!(matcher.cached_patterns(), 1);
}
