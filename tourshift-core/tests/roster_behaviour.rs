//! Behaviour tests for a fleet day: several tours sharing named resources,
//! walked through ordering and adjacency queries.

use rstest::{fixture, rstest};
use tourshift_core::roster::{
    next_tour_requiring_resource, previous_tour_requiring_resource,
    sort_tours_by_earliest_pickup, tours_using_resource,
};
use tourshift_core::test_support::{camera, pax_at, tour_with_pax, untimed_pax, vehicle};
use tourshift_core::{ResourceKind, Tour};

/// Four tours: three with Van1 (one of them untimed), one camera-only.
///
/// Index map: 0 = van 11:00, 1 = van 8:00, 2 = camera 9:00, 3 = van untimed.
#[fixture]
fn fleet_day() -> Vec<Tour> {
    vec![
        tour_with_pax(vec![pax_at("11:00")]).with_resources(vec![vehicle("Van1")]),
        tour_with_pax(vec![pax_at("8:00")])
            .with_resources(vec![vehicle("Van1"), camera("Cam2")]),
        tour_with_pax(vec![pax_at("9:00")]).with_resources(vec![camera("Cam2")]),
        tour_with_pax(vec![untimed_pax()]).with_resources(vec![vehicle("Van1")]),
    ]
}

fn positions(ordered: &[&Tour], tours: &[Tour]) -> Vec<usize> {
    ordered
        .iter()
        .map(|t| tours.iter().position(|x| std::ptr::eq(x, *t)).unwrap())
        .collect()
}

#[rstest]
fn ordering_sorts_timed_tours_and_leaves_untimed_in_place(fleet_day: Vec<Tour>) {
    let ordered = sort_tours_by_earliest_pickup(&fleet_day, true).unwrap();
    // 11:00 and 8:00 and 9:00 sort; the untimed tour keeps slot 3.
    assert_eq!(positions(&ordered, &fleet_day), [1, 2, 0, 3]);

    let descending = sort_tours_by_earliest_pickup(&fleet_day, false).unwrap();
    assert_eq!(positions(&descending, &fleet_day), [0, 2, 1, 3]);
}

#[rstest]
#[case("Van1", ResourceKind::Vehicle, vec![0, 1, 3])]
#[case("van1", ResourceKind::Vehicle, vec![0, 1, 3])] // case-insensitive by default
#[case("Cam2", ResourceKind::Camera, vec![1, 2])]
#[case("Van1", ResourceKind::Camera, vec![])] // kind must match the same entry
#[case("Cam9", ResourceKind::Camera, vec![])]
fn resource_filter_selects_matching_tours(
    fleet_day: Vec<Tour>,
    #[case] name: &str,
    #[case] kind: ResourceKind,
    #[case] expected: Vec<usize>,
) {
    let matched = tours_using_resource(&fleet_day, name, kind, false);
    assert_eq!(positions(&matched, &fleet_day), expected);
}

#[rstest]
fn case_sensitive_lookup_requires_exact_name(fleet_day: Vec<Tour>) {
    assert!(tours_using_resource(&fleet_day, "van1", ResourceKind::Vehicle, true).is_empty());
    assert_eq!(
        tours_using_resource(&fleet_day, "Van1", ResourceKind::Vehicle, true).len(),
        3
    );
}

#[rstest]
fn van_schedule_walks_forward_and_back(fleet_day: Vec<Tour>) {
    // Timed van tours in order: 8:00 (index 1) then 11:00 (index 0).
    let next =
        next_tour_requiring_resource(&fleet_day, &fleet_day[1], ResourceKind::Vehicle, "Van1")
            .unwrap();
    assert!(std::ptr::eq(next.unwrap(), &fleet_day[0]));

    let previous =
        previous_tour_requiring_resource(&fleet_day, &fleet_day[0], ResourceKind::Vehicle, "Van1")
            .unwrap();
    assert!(std::ptr::eq(previous.unwrap(), &fleet_day[1]));
}

#[rstest]
fn camera_adjacency_ignores_van_only_tours(fleet_day: Vec<Tour>) {
    let next =
        next_tour_requiring_resource(&fleet_day, &fleet_day[1], ResourceKind::Camera, "Cam2")
            .unwrap();
    assert!(std::ptr::eq(next.unwrap(), &fleet_day[2]));
}

#[rstest]
fn adjacency_matches_current_tour_by_identity(fleet_day: Vec<Tour>) {
    // A field-for-field copy is not the same tour.
    let copy = fleet_day[1].clone();
    let next = next_tour_requiring_resource(&fleet_day, &copy, ResourceKind::Vehicle, "Van1")
        .unwrap();
    assert!(next.is_none());
}

#[rstest]
fn adjacency_resolves_resource_names_case_insensitively(fleet_day: Vec<Tour>) {
    let next =
        next_tour_requiring_resource(&fleet_day, &fleet_day[1], ResourceKind::Vehicle, "VAN1")
            .unwrap();
    assert!(std::ptr::eq(next.unwrap(), &fleet_day[0]));
}
