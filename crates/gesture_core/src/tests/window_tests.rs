use super::*;

fn pan(state: GestureState) -> StateFrame {
    StateFrame::pair(Some(state), None)
}

fn rotate(state: GestureState) -> StateFrame {
    StateFrame::pair(None, Some(state))
}

#[test]
fn no_comparison_until_both_sources_reported() {
    let mut window = CoincidenceWindow::new();
    assert_eq!(window.apply(pan(GestureState::Started)), WindowEdge::Unchanged);
    assert_eq!(window.coincidence(), None);
    assert_eq!(window.pan(), Some(GestureState::Started));
    assert_eq!(window.rotate(), None);
}

#[test]
fn rises_once_when_both_started() {
    let mut window = CoincidenceWindow::new();
    window.apply(pan(GestureState::Started));
    assert_eq!(window.apply(rotate(GestureState::Started)), WindowEdge::Rising);
    assert_eq!(window.coincidence(), Some(Coincidence::BothStarted));

    assert_eq!(window.apply(pan(GestureState::Started)), WindowEdge::Unchanged);
    assert_eq!(window.apply(rotate(GestureState::Started)), WindowEdge::Unchanged);
}

#[test]
fn either_end_falls_and_rearms() {
    let mut window = CoincidenceWindow::new();
    window.apply(StateFrame::pair(
        Some(GestureState::Started),
        Some(GestureState::Started),
    ));

    assert_eq!(window.apply(rotate(GestureState::Ended)), WindowEdge::Falling);
    assert_eq!(window.coincidence(), Some(Coincidence::Mismatched));
    assert_eq!(window.apply(pan(GestureState::Ended)), WindowEdge::Unchanged);
    assert_eq!(window.coincidence(), Some(Coincidence::BothEnded));

    window.apply(pan(GestureState::Started));
    assert_eq!(window.apply(rotate(GestureState::Started)), WindowEdge::Rising);
}

#[test]
fn end_before_any_start_is_inert() {
    let mut window = CoincidenceWindow::new();
    assert_eq!(window.apply(pan(GestureState::Ended)), WindowEdge::Unchanged);
    assert_eq!(window.apply(rotate(GestureState::Ended)), WindowEdge::Unchanged);
    assert_eq!(window.coincidence(), Some(Coincidence::BothEnded));
}

#[test]
fn simultaneous_start_rises_once() {
    let mut window = CoincidenceWindow::new();
    assert_eq!(
        window.apply(StateFrame::pair(
            Some(GestureState::Started),
            Some(GestureState::Started)
        )),
        WindowEdge::Rising
    );
}

#[test]
fn simultaneous_end_falls_once() {
    let mut window = CoincidenceWindow::new();
    window.apply(StateFrame::pair(
        Some(GestureState::Started),
        Some(GestureState::Started),
    ));

    assert_eq!(
        window.apply(StateFrame::pair(
            Some(GestureState::Ended),
            Some(GestureState::Ended)
        )),
        WindowEdge::Falling
    );
    assert_eq!(window.coincidence(), Some(Coincidence::BothEnded));
}
