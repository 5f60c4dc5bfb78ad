use super::*;
use crate::routes::RouteTarget;

#[test]
fn shipped_views_have_constructors() {
    assert!(constructor(ViewKey::Home).is_some());
    assert!(constructor(ViewKey::IndividualDomainCheck).is_some());
    assert!(constructor(ViewKey::AddPolicyTemplate).is_some());
}

#[test]
fn other_views_fall_back_to_unavailable() {
    assert!(constructor(ViewKey::ListAlerts).is_none());
    assert!(constructor(ViewKey::TeamsList).is_none());
}

#[test]
fn shipped_views_are_reachable_from_the_table() {
    let routes = registry().unwrap();
    let shipped = routes
        .entries()
        .iter()
        .filter_map(|entry| match entry.target {
            RouteTarget::View(key) if constructor(key).is_some() => Some(entry.path),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(
        shipped,
        vec!["/home", "/tenant/standards/individual-domains", "/endpoint/MEM/add-policy-template"]
    );
}
