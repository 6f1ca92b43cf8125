use super::*;

#[test]
fn ticks_up_to_bound_then_completes() {
    let mut session = CountdownSession::new(7);
    assert_eq!(session.id(), 7);
    assert_eq!(session.ticks(), 0);

    assert_eq!(session.advance(), SessionStep::Tick(1));
    assert_eq!(session.advance(), SessionStep::Tick(2));
    assert_eq!(session.advance(), SessionStep::Tick(3));
    assert_eq!(session.advance(), SessionStep::Complete);
}

#[test]
fn counter_never_passes_bound() {
    let mut session = CountdownSession::new(1);
    for _ in 0..10 {
        session.advance();
    }
    assert_eq!(session.ticks(), TICK_BOUND);
    assert_eq!(session.advance(), SessionStep::Complete);
}
