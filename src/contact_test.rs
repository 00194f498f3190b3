use super::*;

const LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

#[test]
fn begin_disables_and_shows_busy_label() {
    let mut relay = SubmitRelay::new();
    let view = relay.begin(LABEL).expect("ready relay should go busy");
    assert_eq!(view, ButtonView { label: BUSY_LABEL.to_owned(), disabled: true });
    assert_eq!(relay.phase(), &SubmitPhase::Busy { original_label: LABEL.to_owned() });
}

#[test]
fn reset_restores_original_label() {
    let mut relay = SubmitRelay::new();
    relay.begin(LABEL);
    assert_eq!(relay.reset(), Some(ButtonView { label: LABEL.to_owned(), disabled: false }));
    assert_eq!(relay.phase(), &SubmitPhase::Ready);
}

#[test]
fn second_submit_while_busy_keeps_first_label() {
    let mut relay = SubmitRelay::new();
    relay.begin(LABEL);
    assert_eq!(relay.begin(BUSY_LABEL), None);
    assert_eq!(relay.reset().map(|v| v.label), Some(LABEL.to_owned()));
}

#[test]
fn reset_when_ready_does_nothing() {
    let mut relay = SubmitRelay::new();
    assert_eq!(relay.reset(), None);
}

#[test]
fn relay_can_be_reused_after_reset() {
    let mut relay = SubmitRelay::new();
    relay.begin(LABEL);
    relay.reset();
    assert!(relay.begin("Send").is_some());
    assert_eq!(relay.reset().map(|v| v.label).as_deref(), Some("Send"));
}
