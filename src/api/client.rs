//! HTTP API Client
//!
//! Functions for communicating with the MentorMatch REST API.
//!
//! Every operation resolves to `Result<T, ApiError>`: transport failures,
//! undecodable bodies, non-2xx statuses, and `success: false` acknowledgment
//! bodies are all normalized into `ApiError` here, so callers never inspect
//! response shapes themselves.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::session::SessionUser;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("mentormatch_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// Unified error for every remote operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),
    /// The response body could not be decoded into the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The server reported a failure; the message is shown verbatim.
    #[error("{message}")]
    Server { message: String },
}

/// Error body shape used by the backend on failed requests.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Acknowledgment body for operations that signal outcome in-band.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// Fold an in-band `success` flag into the uniform result type.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Server {
                message: self.message.unwrap_or_else(|| "Unknown error".to_string()),
            })
        }
    }
}

/// Extract the server's message from a failed response.
async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::Server { message }
}

// ============ Request helpers ============

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(server_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let mut request = Request::get(&format!("{}{}", get_api_base(), path));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let mut request = Request::post(&format!("{}{}", get_api_base(), path));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST for operations whose success body is irrelevant to the caller.
async fn post_ignore_body<B: Serialize>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .header("Authorization", &format!("Bearer {}", token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

// ============ Entities ============

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub contact_person: Option<String>,
}

/// Lightweight event reference embedded in other records.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct EventRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Lightweight user reference embedded in other records.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Member {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id")]
    pub id: String,
    /// Populated event record (wire field `eventId`).
    #[serde(rename = "eventId")]
    pub event: Event,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub study_year: String,
    #[serde(default)]
    pub end_year: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedStudent {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub college: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub from_user: Member,
    pub event: EventRef,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teammate {
    #[serde(default)]
    pub team_id: String,
    pub user: Member,
    pub event: EventRef,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Mentor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub experience: String,
}

/// A pending mentorship request as seen by the mentor.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRequestView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub introduction: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub event: Option<EventRef>,
    #[serde(default)]
    pub teammates: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub mentor: Option<Member>,
}

/// Feedback record shared by the student view (`mentor_name` populated) and
/// the mentor view (`student_name` populated). `student_reply` present means
/// the record is answered and no reply form is rendered.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub mentor_name: String,
    #[serde(default)]
    pub student_name: String,
    pub feedback: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub student_reply: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

// ============ Student API ============

/// Fetch all open events. Public, no token required.
pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    get_json("/events", None).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEventRequest {
    pub event_id: String,
    pub name: String,
    pub college: String,
    pub degree: String,
    pub study_year: String,
    pub end_year: String,
    pub domain: String,
    pub category: String,
}

/// Register the current student for an event. The created registration is
/// reloaded via [`fetch_registered_events`], so the response body is dropped.
pub async fn register_event(token: &str, request: &RegisterEventRequest) -> Result<(), ApiError> {
    post_ignore_body("/student/register-event", token, request).await
}

pub async fn fetch_suggestions(token: &str) -> Result<Vec<Suggestion>, ApiError> {
    get_json("/student/suggestions", Some(token)).await
}

pub async fn fetch_registered_events(token: &str) -> Result<Vec<Registration>, ApiError> {
    get_json("/student/registered-events", Some(token)).await
}

/// Students matching the current user's domain, category, and state.
pub async fn fetch_matching_students(token: &str) -> Result<Vec<MatchedStudent>, ApiError> {
    get_json("/student/match", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamRequestPayload<'a> {
    target_user_id: &'a str,
    event_id: &'a str,
}

/// Invite another student to team up for an event.
pub async fn send_team_request(
    token: &str,
    target_user_id: &str,
    event_id: &str,
) -> Result<(), ApiError> {
    let ack: Ack = post_json(
        "/student/team-request",
        Some(token),
        &TeamRequestPayload {
            target_user_id,
            event_id,
        },
    )
    .await?;
    ack.into_result()
}

pub async fn fetch_team_requests(token: &str) -> Result<Vec<TeamRequest>, ApiError> {
    get_json("/student/team-requests", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApproveTeamRequestPayload<'a> {
    request_id: &'a str,
    is_approved: bool,
}

/// Accept (`true`) or decline (`false`) a pending team request.
pub async fn approve_team_request(
    token: &str,
    request_id: &str,
    is_approved: bool,
) -> Result<(), ApiError> {
    let ack: Ack = post_json(
        "/student/approve-request",
        Some(token),
        &ApproveTeamRequestPayload {
            request_id,
            is_approved,
        },
    )
    .await?;
    ack.into_result()
}

pub async fn fetch_teammates(token: &str) -> Result<Vec<Teammate>, ApiError> {
    get_json("/student/teammates", Some(token)).await
}

pub async fn fetch_mentors_by_domain(token: &str) -> Result<Vec<Mentor>, ApiError> {
    get_json("/student/mentors-by-domain", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct MentorRequestPayload<'a> {
    mentor_id: &'a str,
    introduction: &'a str,
}

/// Request mentorship. The server's rejection message (duplicate request,
/// mentor at capacity, ...) is surfaced verbatim to the caller.
pub async fn send_mentor_request(
    token: &str,
    mentor_id: &str,
    introduction: &str,
) -> Result<(), ApiError> {
    post_ignore_body(
        "/student/mentor-request",
        token,
        &MentorRequestPayload {
            mentor_id,
            introduction,
        },
    )
    .await
}

pub async fn fetch_mentor_feedback(token: &str) -> Result<Vec<Feedback>, ApiError> {
    get_json("/student/mentor-feedback", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackResponsePayload<'a> {
    feedback_id: &'a str,
    response: &'a str,
}

pub async fn submit_feedback_response(
    token: &str,
    feedback_id: &str,
    response: &str,
) -> Result<(), ApiError> {
    post_ignore_body(
        "/student/feedback-response",
        token,
        &FeedbackResponsePayload {
            feedback_id,
            response,
        },
    )
    .await
}

// ============ Mentor API ============

pub async fn fetch_mentor_requests(token: &str) -> Result<Vec<MentorRequestView>, ApiError> {
    get_json("/mentor/requests", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApproveMentorRequestPayload<'a> {
    request_id: &'a str,
}

pub async fn approve_mentor_request(token: &str, request_id: &str) -> Result<(), ApiError> {
    let ack: Ack = post_json(
        "/mentor/approve",
        Some(token),
        &ApproveMentorRequestPayload { request_id },
    )
    .await?;
    ack.into_result()
}

pub async fn fetch_mentees(token: &str) -> Result<Vec<Mentee>, ApiError> {
    get_json("/mentor/mentees", Some(token)).await
}

/// Feedback the mentor has already given, with any student replies.
pub async fn fetch_given_feedback(token: &str) -> Result<Vec<Feedback>, ApiError> {
    get_json("/mentor/feedbacks", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GiveFeedbackPayload<'a> {
    student_id: &'a str,
    feedback: &'a str,
}

pub async fn give_feedback(token: &str, student_id: &str, feedback: &str) -> Result<(), ApiError> {
    post_ignore_body(
        "/mentor/feedback",
        token,
        &GiveFeedbackPayload {
            student_id,
            feedback,
        },
    )
    .await
}

// ============ Admin API ============

pub async fn fetch_all_registrations(token: &str) -> Result<Vec<Registration>, ApiError> {
    get_json("/admin/registrations", Some(token)).await
}

pub async fn fetch_all_teams(token: &str) -> Result<Vec<Team>, ApiError> {
    get_json("/admin/teams", Some(token)).await
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub host: String,
    pub team_size: u32,
    pub description: String,
    pub deadline: String,
    pub contact_person: String,
}

/// Create an event; decoding the created record is the success check.
pub async fn create_event(token: &str, event: &NewEvent) -> Result<Event, ApiError> {
    post_json("/admin/add-event", Some(token), event).await
}

// ============ Auth API ============

#[derive(Debug, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/login", None, request).await
}

#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub college: String,
    pub state: String,
    pub city: String,
    pub domain: String,
    pub category: String,
    pub experience: String,
}

pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/register", None, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_success_maps_to_ok() {
        let ack: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ack.into_result(), Ok(()));
    }

    #[test]
    fn ack_failure_carries_server_message() {
        let ack: Ack =
            serde_json::from_str(r#"{"success": false, "message": "Already in a team"}"#).unwrap();
        assert_eq!(
            ack.into_result(),
            Err(ApiError::Server {
                message: "Already in a team".to_string()
            })
        );
    }

    #[test]
    fn ack_failure_without_message_uses_fallback() {
        let ack: Ack = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = ack.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn server_error_displays_message_verbatim() {
        let err = ApiError::Server {
            message: "Mentor request already pending".to_string(),
        };
        assert_eq!(err.to_string(), "Mentor request already pending");
    }

    #[test]
    fn registration_decodes_populated_event() {
        let reg: Registration = serde_json::from_str(
            r#"{
                "_id": "r1",
                "eventId": {"_id": "e1", "name": "Hackathon 2025", "host": "ACM", "deadline": "2025-09-01"},
                "name": "Asha",
                "college": "IIT",
                "degree": "BTech",
                "studyYear": "3",
                "endYear": "2026",
                "domain": "AI",
                "category": "Robotics"
            }"#,
        )
        .unwrap();
        assert_eq!(reg.event.name, "Hackathon 2025");
        assert_eq!(reg.study_year, "3");
    }

    #[test]
    fn team_request_decodes_populated_refs() {
        let request: TeamRequest = serde_json::from_str(
            r#"{
                "_id": "t1",
                "fromUser": {"_id": "u2", "name": "Bob", "college": "NIT"},
                "event": {"_id": "e1", "name": "Hackathon 2025"}
            }"#,
        )
        .unwrap();
        assert_eq!(request.from_user.name, "Bob");
        assert_eq!(request.event.id, "e1");
    }

    #[test]
    fn feedback_without_reply_is_unanswered() {
        let feedback: Feedback = serde_json::from_str(
            r#"{"_id": "f1", "mentorName": "Dr. Rao", "feedback": "Good start", "createdAt": "2025-08-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(feedback.student_reply.is_none());
        assert_eq!(feedback.mentor_name, "Dr. Rao");
    }

    #[test]
    fn team_tolerates_missing_mentor() {
        let team: Team = serde_json::from_str(
            r#"{"_id": "tm1", "domain": "AI", "category": "SaaS", "members": [{"_id": "u1", "name": "Asha"}]}"#,
        )
        .unwrap();
        assert!(team.mentor.is_none());
        assert_eq!(team.members.len(), 1);
    }
}
