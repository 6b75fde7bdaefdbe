use serde::Serialize;

/// How long the thank-you notice stays up before the form resets and closes.
pub const SUCCESS_NOTICE_MS: u32 = 3_000;

pub const REJECTED_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LeadField {
    Name,
    Email,
    Number,
    Designation,
    SchoolName,
    Message,
}

#[derive(Serialize, Clone, PartialEq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub number: String,
    pub designation: String,
    pub school_name: String,
    pub message: String,
}

impl LeadSubmission {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Number => self.number = value,
            LeadField::Designation => self.designation = value,
            LeadField::SchoolName => self.school_name = value,
            LeadField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
}

/// How a submission attempt came back from the intake service.
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(Option<String>),
    TransportFailed,
}

/// Reports a user-facing message. The browser build shows a blocking
/// alert; tests record the messages instead.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// What the caller has to do after an outcome was applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitEffect {
    /// Call `finish_success` once this many milliseconds have passed.
    ScheduleReset { delay_ms: u32 },
    None,
}

/// Form fields plus submission lifecycle, kept apart from the rendering
/// layer. Only `begin_submit` admits a network call; everything else is
/// a pure transition.
pub struct ContactFormState {
    lead: LeadSubmission,
    state: SubmissionState,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            lead: LeadSubmission::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn lead(&self) -> &LeadSubmission {
        &self.lead
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn update_field(&mut self, field: LeadField, value: String) {
        self.lead.set(field, value);
    }

    /// Returns false while a request is already in flight; the caller
    /// must not issue a request in that case.
    pub fn begin_submit(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    pub fn resolve_submit<N: Notifier>(&mut self, outcome: SubmitOutcome, notifier: &N) -> SubmitEffect {
        match outcome {
            SubmitOutcome::Accepted => {
                self.state = SubmissionState::Succeeded;
                SubmitEffect::ScheduleReset {
                    delay_ms: SUCCESS_NOTICE_MS,
                }
            }
            SubmitOutcome::Rejected(message) => {
                self.state = SubmissionState::Idle;
                notifier.notify(message.as_deref().unwrap_or(REJECTED_FALLBACK_MESSAGE));
                SubmitEffect::None
            }
            SubmitOutcome::TransportFailed => {
                self.state = SubmissionState::Idle;
                notifier.notify(SERVER_ERROR_MESSAGE);
                SubmitEffect::None
            }
        }
    }

    /// Timer-driven exit from the thank-you notice.
    pub fn finish_success(&mut self) {
        self.lead = LeadSubmission::default();
        self.state = SubmissionState::Idle;
    }

    /// Manual close. Entered values survive so the visitor can pick up
    /// where they left off, unless the submission already went through,
    /// in which case the pending reset happens right away.
    pub fn close(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.finish_success();
        }
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn filled_form() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.update_field(LeadField::Name, "Asha Verma".to_string());
        form.update_field(LeadField::Email, "asha@school.edu".to_string());
        form.update_field(LeadField::Number, "+91 98765 43210".to_string());
        form.update_field(LeadField::Designation, "Principal".to_string());
        form.update_field(LeadField::SchoolName, "Sunrise Public School".to_string());
        form.update_field(LeadField::Message, "Interested in the program.".to_string());
        form
    }

    #[test]
    fn field_updates_do_not_cross_talk() {
        let mut form = ContactFormState::new();
        form.update_field(LeadField::Name, "first".to_string());
        form.update_field(LeadField::Email, "a@b.c".to_string());
        form.update_field(LeadField::Name, "second".to_string());

        assert_eq!(form.lead().name, "second");
        assert_eq!(form.lead().email, "a@b.c");
        assert_eq!(form.lead().number, "");
        assert_eq!(form.lead().school_name, "");
    }

    #[test]
    fn begin_submit_blocks_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert_eq!(form.state(), SubmissionState::Submitting);
        // A second gesture while the first is in flight gets no request.
        assert!(!form.begin_submit());
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn accepted_outcome_schedules_the_delayed_reset() {
        let mut form = filled_form();
        let notifier = RecordingNotifier::default();
        assert!(form.begin_submit());

        let effect = form.resolve_submit(SubmitOutcome::Accepted, &notifier);
        assert_eq!(effect, SubmitEffect::ScheduleReset { delay_ms: 3_000 });
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(notifier.messages.borrow().is_empty());

        form.finish_success();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(*form.lead(), LeadSubmission::default());
    }

    #[test]
    fn rejected_outcome_keeps_fields_and_surfaces_message() {
        let mut form = filled_form();
        let submitted = form.lead().clone();
        let notifier = RecordingNotifier::default();
        assert!(form.begin_submit());

        let effect = form.resolve_submit(
            SubmitOutcome::Rejected(Some("Duplicate entry".to_string())),
            &notifier,
        );
        assert_eq!(effect, SubmitEffect::None);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(*form.lead(), submitted);
        assert_eq!(*notifier.messages.borrow(), ["Duplicate entry"]);
    }

    #[test]
    fn rejected_outcome_without_message_uses_fallback() {
        let mut form = filled_form();
        let notifier = RecordingNotifier::default();
        form.begin_submit();
        form.resolve_submit(SubmitOutcome::Rejected(None), &notifier);
        assert_eq!(
            *notifier.messages.borrow(),
            [REJECTED_FALLBACK_MESSAGE]
        );
    }

    #[test]
    fn transport_failure_surfaces_generic_message_and_returns_to_idle() {
        let mut form = filled_form();
        let notifier = RecordingNotifier::default();
        form.begin_submit();

        let effect = form.resolve_submit(SubmitOutcome::TransportFailed, &notifier);
        assert_eq!(effect, SubmitEffect::None);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(*notifier.messages.borrow(), [SERVER_ERROR_MESSAGE]);
    }

    #[test]
    fn manual_close_retains_fields_for_the_next_open() {
        let mut form = filled_form();
        let entered = form.lead().clone();
        form.close();
        assert_eq!(*form.lead(), entered);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn close_during_success_notice_resets_immediately() {
        let mut form = filled_form();
        let notifier = RecordingNotifier::default();
        form.begin_submit();
        form.resolve_submit(SubmitOutcome::Accepted, &notifier);

        // Closing before the 3 s timer fires must not leave stale data
        // behind for the next open.
        form.close();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(*form.lead(), LeadSubmission::default());
    }

    #[test]
    fn retry_after_rejection_is_admitted_again() {
        let mut form = filled_form();
        let notifier = RecordingNotifier::default();
        form.begin_submit();
        form.resolve_submit(SubmitOutcome::Rejected(Some("Duplicate entry".to_string())), &notifier);
        assert!(form.begin_submit());
    }

    #[test]
    fn serializes_school_name_as_camel_case() {
        let lead = filled_form().lead().clone();
        let json = serde_json::to_value(&lead).unwrap();
        assert!(json.get("schoolName").is_some());
        assert!(json.get("school_name").is_none());
    }
}
