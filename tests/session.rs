use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan::{SearchOutcome, SeatingConfig, SeatingSession};

fn session(seed: u64) -> SeatingSession {
    let config = SeatingConfig::new(
        3,
        2,
        2,
        vec!["Alice".into(), "Bob".into(), "Carol".into()],
    );
    SeatingSession::with_rng(config, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn session_caches_a_congruent_display_grid() {
    let s = session(1);
    assert_eq!(s.display().rows(), s.plan().rows());
    assert_eq!(s.display().cols(), s.plan().cols());
    assert_eq!(s.display().occupied_count(), s.plan().occupied_count());
}

#[test]
fn session_search_is_read_only() {
    let s = session(2);
    let plan_before = s.plan().clone();
    let display_before = s.display().clone();
    assert!(matches!(
        s.search("Alice").unwrap(),
        SearchOutcome::Matches { .. }
    ));
    assert!(matches!(s.search("Nobody").unwrap(), SearchOutcome::NoMatch));
    assert_eq!(s.plan(), &plan_before);
    assert_eq!(s.display(), &display_before);
}

#[test]
fn reconfigure_replaces_the_whole_pair() {
    let mut s = session(3);
    s.reconfigure(SeatingConfig::new(2, 1, 3, vec!["Dana".into()]))
        .unwrap();
    assert_eq!(s.plan().rows(), 1);
    assert_eq!(s.plan().cols(), 3);
    assert_eq!(s.plan().occupied_count(), 2);
    assert_eq!(s.display().rows(), 1);
    assert!(matches!(
        s.search("Dana").unwrap(),
        SearchOutcome::Matches { .. }
    ));
}

#[test]
fn failed_reconfigure_leaves_the_session_untouched() {
    let mut s = session(4);
    let plan_before = s.plan().clone();
    let display_before = s.display().clone();
    // Capacity 1 cannot hold 5 participants.
    assert!(s
        .reconfigure(SeatingConfig::new(5, 1, 1, vec![]))
        .is_err());
    assert_eq!(s.plan(), &plan_before);
    assert_eq!(s.display(), &display_before);
}

#[test]
fn session_export_uses_the_supplied_timestamp() {
    let s = session(5);
    let text = s.export("2025-02-03 10:00:00").unwrap();
    assert!(text.contains("2025-02-03 10:00:00"));
}
