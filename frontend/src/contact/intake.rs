use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;

use super::form::{LeadSubmission, SubmitOutcome};

#[derive(Deserialize)]
pub struct IntakeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One POST per call. Transport and parse failures collapse into
/// `TransportFailed`; the caller does not distinguish between them.
pub async fn submit_lead(base_url: &str, lead: &LeadSubmission) -> SubmitOutcome {
    let request = match Request::post(&format!("{}/api/school-applications", base_url)).json(lead) {
        Ok(request) => request,
        Err(e) => {
            log!("Error building application request:", e.to_string());
            return SubmitOutcome::TransportFailed;
        }
    };

    match request.send().await {
        Ok(response) => match response.json::<IntakeResponse>().await {
            Ok(body) if body.success => SubmitOutcome::Accepted,
            Ok(body) => SubmitOutcome::Rejected(body.message),
            Err(e) => {
                log!("Error parsing application response:", e.to_string());
                SubmitOutcome::TransportFailed
            }
        },
        Err(e) => {
            log!("Error submitting application:", e.to_string());
            SubmitOutcome::TransportFailed
        }
    }
}
