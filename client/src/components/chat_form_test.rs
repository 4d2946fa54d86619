use super::{FormAction, form_action};
use advice::{Rejection, SubmitOutcome};

#[test]
fn success_clears_the_input() {
    assert_eq!(form_action(&SubmitOutcome::Success), FormAction::ClearInput);
}

#[test]
fn server_error_notifies_with_server_message() {
    let outcome = SubmitOutcome::ServerError("Error: bad category".to_owned());
    assert_eq!(form_action(&outcome), FormAction::Notify("Error: bad category".to_owned()));
}

#[test]
fn network_error_notifies_and_keeps_input() {
    let outcome = SubmitOutcome::NetworkError("Network error: offline".to_owned());
    assert_eq!(form_action(&outcome), FormAction::Notify("Network error: offline".to_owned()));
}

#[test]
fn rejected_submission_is_silent() {
    assert_eq!(form_action(&SubmitOutcome::Rejected(Rejection::EmptyMessage)), FormAction::Nothing);
    assert_eq!(form_action(&SubmitOutcome::Rejected(Rejection::Busy)), FormAction::Nothing);
}
