use super::*;

#[test]
fn compares_pairs_three_ways() {
    use GestureState::{Ended, Started};

    assert_eq!(Coincidence::compare(Started, Started), Coincidence::BothStarted);
    assert_eq!(Coincidence::compare(Ended, Ended), Coincidence::BothEnded);
    assert_eq!(Coincidence::compare(Started, Ended), Coincidence::Mismatched);
    assert_eq!(Coincidence::compare(Ended, Started), Coincidence::Mismatched);
}

#[test]
fn frame_keeps_one_state_per_source() {
    let mut frame = StateFrame::from_change(StateChange::new(
        GestureSource::Pan,
        GestureState::Started,
    ));
    assert!(!frame.is_empty());
    assert_eq!(frame.rotate, None);

    frame.set(StateChange::new(GestureSource::Pan, GestureState::Ended));
    frame.set(StateChange::new(GestureSource::Rotate, GestureState::Started));
    assert_eq!(frame, StateFrame::pair(Some(GestureState::Ended), Some(GestureState::Started)));
    assert!(StateFrame::default().is_empty());
}

#[test]
fn reactor_events_serialize_with_event_tag() {
    assert_eq!(
        serde_json::to_string(&ReactorEvent::Tick { count: 2 }).expect("json"),
        r#"{"event":"tick","count":2}"#
    );
    assert_eq!(
        serde_json::to_string(&ReactorEvent::Start).expect("json"),
        r#"{"event":"start"}"#
    );
}
