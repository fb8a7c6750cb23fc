use simmerge::EventKey;

#[test]
fn extreme_bunch_crossings_stay_distinct() {
    // The packed encoding 10000 * event + bunch_crossing would alias all of
    // these pairs; the composite key keeps them apart.
    assert_ne!(EventKey::new(1, -1), EventKey::new(0, 9999));
    assert_ne!(EventKey::new(0, 10000), EventKey::new(1, 0));
    assert_ne!(EventKey::new(2, -10000), EventKey::new(1, 0));
}

#[test]
fn orders_by_event_then_bunch_crossing() {
    let mut keys = vec![
        EventKey::new(1, 2),
        EventKey::new(0, 5),
        EventKey::new(1, -3),
    ];
    keys.sort();
    assert_eq!(
        keys,
        vec![
            EventKey::new(0, 5),
            EventKey::new(1, -3),
            EventKey::new(1, 2),
        ]
    );
}

#[test]
fn classifies_signal_and_pileup() {
    assert!(EventKey::new(12, 0).is_signal());
    assert!(!EventKey::new(12, -1).is_signal());
    assert!(!EventKey::new(12, 1).is_signal());
}

#[test]
fn displays_event_and_bunch_crossing() {
    assert_eq!(EventKey::new(3, -1).to_string(), "event 3 bunchx -1");
}
