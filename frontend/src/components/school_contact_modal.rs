use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{
    ContactFormState, LeadField, Notifier, SubmissionState, SubmitEffect, SubmitOutcome,
};
use crate::contact::intake;

/// Blocking browser alert, the production side of the notifier seam.
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SchoolContactModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum SchoolContactModalMsg {
    FieldChanged(LeadField, String),
    Submit(SubmitEvent),
    Resolved(SubmitOutcome),
    ResetAfterSuccess,
    RequestClose,
}

pub struct SchoolContactModal {
    form: ContactFormState,
    // Dropping the handle cancels the timer, so a manual close can never
    // be followed by a stray reset firing into a reopened form.
    pending_reset: Option<Timeout>,
}

impl Component for SchoolContactModal {
    type Message = SchoolContactModalMsg;
    type Properties = SchoolContactModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormState::new(),
            pending_reset: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SchoolContactModalMsg::FieldChanged(field, value) => {
                self.form.update_field(field, value);
                true
            }
            SchoolContactModalMsg::Submit(e) => {
                e.prevent_default();
                if !self.form.begin_submit() {
                    return false;
                }
                let lead = self.form.lead().clone();
                ctx.link().send_future(async move {
                    let outcome = intake::submit_lead(config::api_base_url(), &lead).await;
                    SchoolContactModalMsg::Resolved(outcome)
                });
                true
            }
            SchoolContactModalMsg::Resolved(outcome) => {
                match self.form.resolve_submit(outcome, &AlertNotifier) {
                    SubmitEffect::ScheduleReset { delay_ms } => {
                        let link = ctx.link().clone();
                        self.pending_reset = Some(Timeout::new(delay_ms, move || {
                            link.send_message(SchoolContactModalMsg::ResetAfterSuccess);
                        }));
                    }
                    SubmitEffect::None => {}
                }
                true
            }
            SchoolContactModalMsg::ResetAfterSuccess => {
                self.pending_reset = None;
                self.form.finish_success();
                ctx.props().on_close.emit(());
                true
            }
            SchoolContactModalMsg::RequestClose => {
                self.pending_reset = None;
                self.form.close();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let close = ctx
            .link()
            .callback(|_: MouseEvent| SchoolContactModalMsg::RequestClose);
        let backdrop_close = ctx
            .link()
            .callback(|_: MouseEvent| SchoolContactModalMsg::RequestClose);
        let onsubmit = ctx.link().callback(SchoolContactModalMsg::Submit);
        let is_submitting = self.form.state() == SubmissionState::Submitting;

        let text_field = |field: LeadField| {
            ctx.link().callback(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                SchoolContactModalMsg::FieldChanged(field, input.value())
            })
        };
        let message_changed = ctx.link().callback(|e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            SchoolContactModalMsg::FieldChanged(LeadField::Message, input.value())
        });

        html! {
            <div class="school-modal-overlay">
                <div class="school-modal-backdrop" onclick={backdrop_close}></div>
                <div class="school-modal">
                    <button class="school-modal-close" onclick={close}>{"✕"}</button>
                    {
                        if self.form.state() == SubmissionState::Succeeded {
                            html! {
                                <div class="school-modal-success">
                                    <div class="success-check">{"✓"}</div>
                                    <h3>{"Request Received!"}</h3>
                                    <p>{"Thank you for your interest. Our team will contact you shortly to discuss how we can implement Inlighn Tech at your school."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="school-modal-body">
                                    <div class="school-modal-header">
                                        <h2>{"Implement at School"}</h2>
                                        <p>{"Partner with us to bring future-ready skills to your students."}</p>
                                    </div>
                                    <form onsubmit={onsubmit}>
                                        <div class="field-row">
                                            <div class="field">
                                                <label>{"Name"}</label>
                                                <input
                                                    required={true}
                                                    type="text"
                                                    placeholder="Full Name"
                                                    value={self.form.lead().name.clone()}
                                                    onchange={text_field(LeadField::Name)}
                                                />
                                            </div>
                                            <div class="field">
                                                <label>{"Email"}</label>
                                                <input
                                                    required={true}
                                                    type="email"
                                                    placeholder="Official Email"
                                                    value={self.form.lead().email.clone()}
                                                    onchange={text_field(LeadField::Email)}
                                                />
                                            </div>
                                        </div>
                                        <div class="field-row">
                                            <div class="field">
                                                <label>{"Number"}</label>
                                                <input
                                                    required={true}
                                                    type="tel"
                                                    placeholder="Phone Number"
                                                    value={self.form.lead().number.clone()}
                                                    onchange={text_field(LeadField::Number)}
                                                />
                                            </div>
                                            <div class="field">
                                                <label>{"Designation"}</label>
                                                <input
                                                    required={true}
                                                    type="text"
                                                    placeholder="e.g. Principal"
                                                    value={self.form.lead().designation.clone()}
                                                    onchange={text_field(LeadField::Designation)}
                                                />
                                            </div>
                                        </div>
                                        <div class="field">
                                            <label>{"School Name"}</label>
                                            <input
                                                required={true}
                                                type="text"
                                                placeholder="Name of your institution"
                                                value={self.form.lead().school_name.clone()}
                                                onchange={text_field(LeadField::SchoolName)}
                                            />
                                        </div>
                                        <div class="field">
                                            <label>{"Message"}</label>
                                            <textarea
                                                rows="3"
                                                placeholder="How can we help you?"
                                                value={self.form.lead().message.clone()}
                                                onchange={message_changed}
                                            />
                                        </div>
                                        <button type="submit" class="school-modal-submit" disabled={is_submitting}>
                                            {
                                                if is_submitting {
                                                    html! { <span class="submit-spinner"></span> }
                                                } else {
                                                    html! { <>{"Send Request "}{"✈"}</> }
                                                }
                                            }
                                        </button>
                                    </form>
                                </div>
                            }
                        }
                    }
                    <style>
                        {r#"
                        .school-modal-overlay {
                            position: fixed;
                            inset: 0;
                            z-index: 9999;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 1rem;
                        }
                        .school-modal-backdrop {
                            position: absolute;
                            inset: 0;
                            background: rgba(0, 0, 0, 0.6);
                            backdrop-filter: blur(6px);
                        }
                        .school-modal {
                            position: relative;
                            width: 100%;
                            max-width: 36rem;
                            background: #fff;
                            border-radius: 24px;
                            box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                            overflow: hidden;
                        }
                        .school-modal-close {
                            position: absolute;
                            top: 1.25rem;
                            right: 1.25rem;
                            padding: 0.5rem 0.75rem;
                            background: #f3f4f6;
                            color: #6b7280;
                            border: none;
                            border-radius: 50%;
                            cursor: pointer;
                            z-index: 10;
                        }
                        .school-modal-close:hover {
                            background: #e5e7eb;
                        }
                        .school-modal-body {
                            padding: 2.5rem;
                        }
                        .school-modal-header h2 {
                            font-size: 1.9rem;
                            font-weight: 800;
                            color: #111827;
                            margin-bottom: 0.5rem;
                        }
                        .school-modal-header p {
                            color: #6b7280;
                            margin-bottom: 2rem;
                        }
                        .school-modal .field-row {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 1rem;
                        }
                        .school-modal .field {
                            margin-bottom: 1rem;
                        }
                        .school-modal label {
                            display: block;
                            font-size: 0.7rem;
                            font-weight: 700;
                            letter-spacing: 0.08em;
                            text-transform: uppercase;
                            color: #9ca3af;
                            margin-bottom: 0.5rem;
                        }
                        .school-modal input,
                        .school-modal textarea {
                            width: 100%;
                            padding: 0.75rem 1rem;
                            background: #f9fafb;
                            border: 1px solid transparent;
                            border-radius: 12px;
                            color: #111827;
                            outline: none;
                            resize: none;
                            box-sizing: border-box;
                        }
                        .school-modal input:focus,
                        .school-modal textarea:focus {
                            border-color: #ff6b35;
                            background: #fff;
                        }
                        .school-modal-submit {
                            width: 100%;
                            padding: 1rem;
                            margin-top: 0.5rem;
                            border: none;
                            border-radius: 12px;
                            background: #ff6b35;
                            color: #fff;
                            font-size: 1.1rem;
                            font-weight: 700;
                            cursor: pointer;
                            box-shadow: 0 10px 20px rgba(255, 107, 53, 0.3);
                        }
                        .school-modal-submit:hover:not(:disabled) {
                            background: #e55a2b;
                        }
                        .school-modal-submit:disabled {
                            background: #fb923c;
                            cursor: not-allowed;
                        }
                        .submit-spinner {
                            display: inline-block;
                            width: 1.2rem;
                            height: 1.2rem;
                            border: 2px solid rgba(255, 255, 255, 0.3);
                            border-top-color: #fff;
                            border-radius: 50%;
                            animation: school-modal-spin 1s linear infinite;
                        }
                        @keyframes school-modal-spin {
                            to { transform: rotate(360deg); }
                        }
                        .school-modal-success {
                            min-height: 380px;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            text-align: center;
                            padding: 2.5rem;
                        }
                        .school-modal-success .success-check {
                            width: 5rem;
                            height: 5rem;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            font-size: 2rem;
                            color: #16a34a;
                            background: #dcfce7;
                            border-radius: 50%;
                            margin-bottom: 1rem;
                        }
                        .school-modal-success h3 {
                            font-size: 1.5rem;
                            font-weight: 700;
                            color: #111827;
                            margin-bottom: 0.75rem;
                        }
                        .school-modal-success p {
                            color: #6b7280;
                            max-width: 26rem;
                        }
                        @media (max-width: 640px) {
                            .school-modal .field-row {
                                grid-template-columns: 1fr;
                                gap: 0;
                            }
                            .school-modal-body {
                                padding: 1.75rem;
                            }
                        }
                        "#}
                    </style>
                </div>
            </div>
        }
    }
}
