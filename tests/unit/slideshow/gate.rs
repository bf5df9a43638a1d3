use super::*;

#[test]
fn unarmed_gate_never_fires() {
    let mut g = SettleGate::default();
    assert!(!g.observe(SlotId::FIRST));
    assert!(!g.observe(SlotId::SECOND));
    assert_eq!(g.raw_count(), 0);
}

#[test]
fn first_notification_wins_rest_are_counted() {
    for props in 1..=3u32 {
        let mut g = SettleGate::default();
        g.arm(SlotId::FIRST);
        let fired = (0..props).filter(|_| g.observe(SlotId::FIRST)).count();
        assert_eq!(fired, 1);
        assert_eq!(g.raw_count(), props);
    }
}

#[test]
fn notifications_from_the_other_slot_are_out_of_scope() {
    let mut g = SettleGate::default();
    g.arm(SlotId::SECOND);
    assert!(!g.observe(SlotId::FIRST));
    assert_eq!(g.raw_count(), 0);
    assert!(g.observe(SlotId::SECOND));
}

#[test]
fn rearming_resets_the_counter() {
    let mut g = SettleGate::default();
    g.arm(SlotId::FIRST);
    assert!(g.observe(SlotId::FIRST));
    assert!(!g.observe(SlotId::FIRST));
    g.arm(SlotId::FIRST);
    assert_eq!(g.raw_count(), 0);
    assert!(g.observe(SlotId::FIRST));
}

#[test]
fn arming_sets_the_scope() {
    let mut g = SettleGate::default();
    assert_eq!(g.scope(), None);
    g.arm(SlotId::SECOND);
    assert_eq!(g.scope(), Some(SlotId::SECOND));
}
