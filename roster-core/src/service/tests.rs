use super::*;
use crate::models::Activity;

fn create_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .seed(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        )
        .unwrap();
    catalog
        .seed(
            "Art Studio",
            Activity::new("Painting and sketching", "Thursdays, 3:30 PM - 5:00 PM", 15),
        )
        .unwrap();
    catalog
        .seed(
            "Tiny Club",
            Activity::new("Two chairs only", "Mondays, 3:30 PM - 4:00 PM", 2)
                .with_participants(["a@mergington.edu"]),
        )
        .unwrap();
    catalog
}

fn create_test_service() -> RosterService {
    RosterService::new(create_test_catalog())
}

fn create_enforcing_service() -> RosterService {
    RosterService::with_capacity_policy(create_test_catalog(), CapacityPolicy::Enforced)
}

#[test]
fn test_signup_appends_at_tail() {
    let mut service = create_test_service();

    let confirmation = service.signup("Chess Club", "emma@mergington.edu").unwrap();
    assert_eq!(confirmation.activity(), "Chess Club");
    assert_eq!(confirmation.participant(), "emma@mergington.edu");

    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(
        roster.as_slice(),
        [
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "emma@mergington.edu",
        ],
        "New signups must land at the end of the roster"
    );
}

#[test]
fn test_signup_unknown_activity() {
    let mut service = create_test_service();
    let before = service.list();

    let err = service.signup("Knitting Circle", "emma@mergington.edu").unwrap_err();
    assert_eq!(err, RosterError::ActivityNotFound("Knitting Circle".to_string()));
    assert_eq!(service.list(), before, "Failed lookup must not touch the catalog");
}

#[test]
fn test_signup_duplicate_is_rejected_without_side_effects() {
    let mut service = create_test_service();

    let err = service.signup("Chess Club", "michael@mergington.edu").unwrap_err();
    assert_eq!(
        err,
        RosterError::AlreadyEnrolled {
            activity: "Chess Club".to_string(),
            participant: "michael@mergington.edu".to_string(),
        }
    );

    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(roster.len(), 2, "Failed signup must leave the roster untouched");
}

#[test]
fn test_participant_ids_are_case_sensitive() {
    let mut service = create_test_service();

    // Differs only in case, so it counts as a distinct participant.
    service.signup("Chess Club", "Michael@mergington.edu").unwrap();

    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert!(roster.contains("michael@mergington.edu"));
    assert!(roster.contains("Michael@mergington.edu"));
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_same_participant_across_activities() {
    let mut service = create_test_service();

    service.signup("Chess Club", "emma@mergington.edu").unwrap();
    service.signup("Art Studio", "emma@mergington.edu").unwrap();

    let catalog = service.catalog();
    assert!(catalog.get("Chess Club").unwrap().participants().contains("emma@mergington.edu"));
    assert!(catalog.get("Art Studio").unwrap().participants().contains("emma@mergington.edu"));
}

#[test]
fn test_unregister_removes_and_closes_gap() {
    let mut service = create_test_service();
    service.signup("Chess Club", "emma@mergington.edu").unwrap();

    let confirmation = service.unregister("Chess Club", "daniel@mergington.edu").unwrap();
    assert_eq!(confirmation.participant(), "daniel@mergington.edu");

    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(
        roster.as_slice(),
        ["michael@mergington.edu", "emma@mergington.edu"],
        "Remaining participants keep their relative order"
    );
}

#[test]
fn test_unregister_unknown_activity() {
    let mut service = create_test_service();
    let before = service.list();

    let err = service.unregister("Knitting Circle", "emma@mergington.edu").unwrap_err();
    assert_eq!(err, RosterError::ActivityNotFound("Knitting Circle".to_string()));
    assert_eq!(service.list(), before, "Failed lookup must not touch the catalog");
}

#[test]
fn test_unregister_not_enrolled() {
    let mut service = create_test_service();

    let err = service.unregister("Chess Club", "emma@mergington.edu").unwrap_err();
    assert_eq!(
        err,
        RosterError::NotEnrolled {
            activity: "Chess Club".to_string(),
            participant: "emma@mergington.edu".to_string(),
        }
    );

    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(roster.len(), 2, "Failed unregister must leave the roster untouched");
}

#[test]
fn test_signup_then_unregister_round_trip() {
    let mut service = create_test_service();
    let before = service.catalog().get("Chess Club").unwrap().view();

    service.signup("Chess Club", "emma@mergington.edu").unwrap();
    service.unregister("Chess Club", "emma@mergington.edu").unwrap();

    let after = service.catalog().get("Chess Club").unwrap().view();
    assert_eq!(before, after, "Signup followed by unregister must restore the roster");
}

#[test]
fn test_lifecycle_from_an_empty_roster() {
    let mut catalog = Catalog::new();
    catalog
        .seed("Chess Club", Activity::new("Chess for beginners", "Fridays", 12))
        .unwrap();
    let mut service = RosterService::new(catalog);

    service.signup("Chess Club", "a@x.edu").unwrap();
    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(roster.as_slice(), ["a@x.edu"]);

    let err = service.signup("Chess Club", "a@x.edu").unwrap_err();
    assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));
    let roster = service.catalog().get("Chess Club").unwrap().participants();
    assert_eq!(roster.len(), 1);

    service.unregister("Chess Club", "a@x.edu").unwrap();
    assert!(service.catalog().get("Chess Club").unwrap().participants().is_empty());

    let err = service.unregister("Chess Club", "a@x.edu").unwrap_err();
    assert!(matches!(err, RosterError::NotEnrolled { .. }));
}

#[test]
fn test_three_signups_list_in_order() {
    let mut service = create_test_service();

    service.signup("Art Studio", "first@mergington.edu").unwrap();
    service.signup("Art Studio", "second@mergington.edu").unwrap();
    service.signup("Art Studio", "third@mergington.edu").unwrap();

    assert_eq!(
        service.list()["Art Studio"].participants,
        [
            "first@mergington.edu",
            "second@mergington.edu",
            "third@mergington.edu",
        ]
    );
}

#[test]
fn test_advisory_policy_lets_rosters_overflow() {
    let mut service = create_test_service();

    // Tiny Club holds 1/2; two more signups pass capacity without complaint.
    service.signup("Tiny Club", "b@mergington.edu").unwrap();
    service.signup("Tiny Club", "c@mergington.edu").unwrap();

    let activity = service.catalog().get("Tiny Club").unwrap();
    assert_eq!(activity.participants().len(), 3);
    assert!(activity.is_full());
}

#[test]
fn test_enforced_policy_rejects_full_roster() {
    let mut service = create_enforcing_service();

    service.signup("Tiny Club", "b@mergington.edu").unwrap();
    let err = service.signup("Tiny Club", "c@mergington.edu").unwrap_err();
    assert_eq!(
        err,
        RosterError::CapacityExceeded {
            activity: "Tiny Club".to_string(),
            capacity: 2,
        }
    );
    assert_eq!(service.catalog().get("Tiny Club").unwrap().participants().len(), 2);
}

#[test]
fn test_enforced_policy_frees_a_spot_on_unregister() {
    let mut service = create_enforcing_service();

    service.signup("Tiny Club", "b@mergington.edu").unwrap();
    assert!(service.signup("Tiny Club", "c@mergington.edu").is_err());

    service.unregister("Tiny Club", "a@mergington.edu").unwrap();
    service.signup("Tiny Club", "c@mergington.edu").unwrap();

    let roster = service.catalog().get("Tiny Club").unwrap().participants();
    assert_eq!(roster.as_slice(), ["b@mergington.edu", "c@mergington.edu"]);
}

#[test]
fn test_duplicate_beats_capacity_on_a_full_roster() {
    let mut service = create_enforcing_service();
    service.signup("Tiny Club", "b@mergington.edu").unwrap();

    // a@ is already enrolled and the roster is full; the duplicate check wins.
    let err = service.signup("Tiny Club", "a@mergington.edu").unwrap_err();
    assert!(
        matches!(err, RosterError::AlreadyEnrolled { .. }),
        "Expected AlreadyEnrolled, got {err:?}"
    );
}

#[test]
fn test_list_order_and_contents() {
    let service = create_test_service();
    let listing = service.list();

    let names: Vec<&str> = listing.keys().map(String::as_str).collect();
    assert_eq!(names, ["Chess Club", "Art Studio", "Tiny Club"]);

    let chess = &listing["Chess Club"];
    assert_eq!(chess.description, "Learn strategies and compete in chess tournaments");
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess.max_participants, 12);
    assert_eq!(chess.participants, ["michael@mergington.edu", "daniel@mergington.edu"]);
}

#[test]
fn test_list_snapshot_ignores_later_changes() {
    let mut service = create_test_service();
    let listing = service.list();

    service.signup("Chess Club", "emma@mergington.edu").unwrap();

    assert_eq!(
        listing["Chess Club"].participants.len(),
        2,
        "A listing taken earlier must not reflect later signups"
    );
    assert_eq!(service.list()["Chess Club"].participants.len(), 3);
}

#[test]
fn test_error_messages_name_the_parties() {
    let mut service = create_test_service();

    let err = service.signup("Chess Club", "michael@mergington.edu").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("michael@mergington.edu"), "Message was: {msg}");
    assert!(msg.contains("Chess Club"), "Message was: {msg}");
}

#[test]
fn test_capacity_policy_default_and_serde() {
    assert_eq!(CapacityPolicy::default(), CapacityPolicy::Advisory);

    let json = serde_json::to_string(&CapacityPolicy::Enforced).unwrap();
    assert_eq!(json, "\"enforced\"");
    let parsed: CapacityPolicy = serde_json::from_str("\"advisory\"").unwrap();
    assert_eq!(parsed, CapacityPolicy::Advisory);
}
