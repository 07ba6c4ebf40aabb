use chrono::{TimeZone, Utc};
use uuid::Uuid;
use warden::access::assemble::{
    assemble_snapshot,
    OverrideEffect,
    OverrideScope,
    PermissionOverride,
    SubjectContext,
};
use warden::access::matcher::PatternMatcher;

fn at(minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, 0).unwrap()
}

#[test]
fn organization_scope_beats_global_scope() {
    let overrides = vec![
        PermissionOverride::new(
            "warehouse.stock.adjust",
            OverrideEffect::Allow,
            OverrideScope::Global,
            at(30),
        ),
        PermissionOverride::new(
            "warehouse.stock.adjust",
            OverrideEffect::Deny,
            OverrideScope::Organization,
            at(1),
        ),
    ];
    let snapshot = assemble_snapshot(&[], &overrides);
    assert_eq!(snapshot.deny, vec!["warehouse.stock.adjust"]);
    assert!(snapshot.allow.is_empty());
}

#[test]
fn slugs_resolve_independently() {
    let overrides = vec![
        PermissionOverride::new(
            "org.members.invite",
            OverrideEffect::Deny,
            OverrideScope::Branch,
            at(0),
        ),
        PermissionOverride::new(
            "teams.chat.write",
            OverrideEffect::Allow,
            OverrideScope::Global,
            at(1),
        ),
        PermissionOverride::new(
            "org.members.invite",
            OverrideEffect::Allow,
            OverrideScope::Global,
            at(2),
        ),
    ];
    let snapshot = assemble_snapshot(&["org.members.read".to_string()], &overrides);
    assert_eq!(snapshot.allow, vec!["org.members.read", "teams.chat.write"]);
    assert_eq!(snapshot.deny, vec!["org.members.invite"]);
}

#[test]
fn assembled_snapshot_flows_through_the_matcher() {
    let base = vec!["warehouse.*".to_string()];
    let overrides = vec![PermissionOverride::new(
        "warehouse.products.delete",
        OverrideEffect::Deny,
        OverrideScope::Branch,
        at(10),
    )];
    let snapshot = assemble_snapshot(&base, &overrides);

    let matcher = PatternMatcher::new();
    assert!(matcher.check(&snapshot, "warehouse.products.read"));
    assert!(!matcher.check(&snapshot, "warehouse.products.delete"));
}

#[test]
fn wildcard_deny_override_revokes_a_whole_family() {
    let base = vec!["warehouse.labels.read".to_string(), "warehouse.labels.print".to_string()];
    let overrides = vec![PermissionOverride::new(
        "warehouse.labels.*",
        OverrideEffect::Deny,
        OverrideScope::Organization,
        at(3),
    )];
    let snapshot = assemble_snapshot(&base, &overrides);

    let matcher = PatternMatcher::new();
    assert!(!matcher.check(&snapshot, "warehouse.labels.read"));
    assert!(!matcher.check(&snapshot, "warehouse.labels.print"));
}

#[test]
fn subject_context_carries_branch() {
    let user = Uuid::new_v4();
    let org = Uuid::new_v4();
    let branch = Uuid::new_v4();

    let subject = SubjectContext::new(user, org);
    assert_eq!(subject.branch_id, None);

    let subject = subject.with_branch(branch);
    assert_eq!(subject.user_id, user);
    assert_eq!(subject.organization_id, org);
    assert_eq!(subject.branch_id, Some(branch));
}
