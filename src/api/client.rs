//! HTTP API Client
//!
//! Functions for communicating with the SUP REST API. Every call is a
//! single attempt with no retries or timeouts; a failed call surfaces a
//! human-readable message the caller shows as a toast.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::session::{self, Session};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("sup_api_url") {
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

// ============ Domain Records ============
//
// Opaque records owned by the backend; the client only caches the latest
// fetched snapshot.

/// Roster member
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub callsign: Option<String>,
    pub unit: String,
}

/// Duty type reference record
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DutyType {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub blocks_availability: i64,
}

/// Equipment reference record (uav / vehicle / battery)
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub category: String,
}

/// Duty roster row, joined with person and duty type by the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub duty_date: String,
    pub person_id: i64,
    pub duty_type_id: i64,
    #[serde(default)]
    pub note: Option<String>,
    pub full_name: String,
    pub code: String,
    pub color: String,
}

/// Mission plan row. Crew and equipment names are present on list
/// responses only; the create response returns the bare row.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PlanEntry {
    pub id: i64,
    pub plan_date: String,
    pub unit: String,
    pub mission: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub pilot_id: Option<i64>,
    #[serde(default)]
    pub navigator_id: Option<i64>,
    #[serde(default)]
    pub uav_id: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
    #[serde(default)]
    pub battery_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub pilot_name: Option<String>,
    #[serde(default)]
    pub navigator_name: Option<String>,
    #[serde(default)]
    pub uav_name: Option<String>,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    #[serde(default)]
    pub battery_name: Option<String>,
}

/// Vacation row, joined with the person on list responses
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct VacationEntry {
    pub id: i64,
    pub person_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Per-person availability line on the dashboard
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PersonStatus {
    pub person: Person,
    pub status: String,
}

/// Dashboard payload: today's plan plus per-person statuses
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DashboardData {
    pub date: String,
    pub plan: Vec<PlanEntry>,
    pub statuses: Vec<PersonStatus>,
}

/// Duty totals per duty type
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DutySummaryRow {
    pub code: String,
    pub name: String,
    pub total: i64,
}

/// Duty totals per person
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct WorkloadRow {
    pub full_name: String,
    pub total: i64,
}

/// Analytics payload
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AnalyticsSummary {
    pub duty_summary: Vec<DutySummaryRow>,
    pub workload: Vec<WorkloadRow>,
}

#[derive(Debug, serde::Deserialize)]
struct ScheduleResponse {
    entries: Vec<ScheduleEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct PlanResponse {
    entries: Vec<PlanEntry>,
}

// ============ Error Extraction ============

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    /// Message preference: `detail`, then `message`, then the fallback
    fn into_message(self, fallback: &str) -> String {
        self.detail
            .or(self.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Extract a human-readable message from a failed response. JSON bodies
/// carry the message in `detail` or `message`; anything else is read as
/// plain text, with the status text as the last resort.
async fn error_message(response: Response) -> String {
    let fallback = {
        let text = response.status_text();
        if text.is_empty() {
            format!("HTTP {}", response.status())
        } else {
            text
        }
    };

    let is_json = response
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    if is_json {
        match response.json::<ErrorBody>().await {
            Ok(body) => body.into_message(&fallback),
            Err(_) => fallback,
        }
    } else {
        match response.text().await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => fallback,
        }
    }
}

/// Attach the JSON content type and, when a session is held, the bearer token
fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

// ============ Auth ============

/// Log in and obtain a session token
pub async fn login(username: &str, password: &str) -> Result<Session, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/login", get_api_base()))
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Invalidate the server-side session. Callers ignore failures: logout
/// always proceeds client-side.
pub async fn logout() -> Result<(), String> {
    let response = prepare(Request::post(&format!("{}/auth/logout", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ Reference Data ============

/// Fetch the full roster
pub async fn fetch_personnel() -> Result<Vec<Person>, String> {
    let response = prepare(Request::get(&format!("{}/personnel", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all duty types
pub async fn fetch_duty_types() -> Result<Vec<DutyType>, String> {
    let response = prepare(Request::get(&format!("{}/duty-types", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all equipment
pub async fn fetch_equipment() -> Result<Vec<Equipment>, String> {
    let response = prepare(Request::get(&format!("{}/equipment", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a roster member
pub async fn create_person(person: &NewPerson) -> Result<Person, String> {
    let response = prepare(Request::post(&format!("{}/personnel", get_api_base())))
        .json(person)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// New roster member payload
#[derive(Debug, serde::Serialize)]
pub struct NewPerson {
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    pub unit: String,
}

// ============ Dashboard ============

/// Fetch today's plan and per-person statuses
pub async fn fetch_dashboard() -> Result<DashboardData, String> {
    let response = prepare(Request::get(&format!("{}/dashboard", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Schedule ============

/// Fetch the duty roster for a month (`YYYY-MM`)
pub async fn fetch_schedule(month: &str) -> Result<Vec<ScheduleEntry>, String> {
    let response = prepare(Request::get(&format!(
        "{}/schedule?month={}",
        get_api_base(),
        month
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ScheduleResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.entries)
}

/// Duty assignment payload. The backend upserts on (duty_date, person_id).
#[derive(Debug, serde::Serialize)]
pub struct NewScheduleEntry {
    pub duty_date: String,
    pub person_id: i64,
    pub duty_type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Assign a duty to a person for a date
pub async fn create_schedule_entry(entry: &NewScheduleEntry) -> Result<ScheduleEntry, String> {
    let response = prepare(Request::post(&format!("{}/schedule", get_api_base())))
        .json(entry)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Plan ============

/// Fetch the mission plan for a date (`YYYY-MM-DD`)
pub async fn fetch_plan(date: &str) -> Result<Vec<PlanEntry>, String> {
    let response = prepare(Request::get(&format!(
        "{}/plan?date={}",
        get_api_base(),
        date
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: PlanResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.entries)
}

/// Mission plan payload; crew and equipment are optional
#[derive(Debug, serde::Serialize)]
pub struct NewPlanEntry {
    pub plan_date: String,
    pub unit: String,
    pub mission: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pilot_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uav_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create a mission plan entry
pub async fn create_plan_entry(entry: &NewPlanEntry) -> Result<PlanEntry, String> {
    let response = prepare(Request::post(&format!("{}/plan", get_api_base())))
        .json(entry)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Vacations ============

/// Fetch all vacations
pub async fn fetch_vacations() -> Result<Vec<VacationEntry>, String> {
    let response = prepare(Request::get(&format!("{}/vacations", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Vacation payload
#[derive(Debug, serde::Serialize)]
pub struct NewVacation {
    pub person_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Register a vacation
pub async fn create_vacation(entry: &NewVacation) -> Result<VacationEntry, String> {
    let response = prepare(Request::post(&format!("{}/vacations", get_api_base())))
        .json(entry)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Analytics ============

/// Fetch duty and workload totals, optionally bounded by a date range.
/// The backend filters only when both bounds are present.
pub async fn fetch_analytics(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<AnalyticsSummary, String> {
    let mut url = format!("{}/analytics/summary", get_api_base());
    if let (Some(start), Some(end)) = (start, end) {
        url.push_str(&format!("?start={}&end={}", start, end));
    }

    let response = prepare(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_detail() {
        let body = ErrorBody {
            detail: Some("Невірні облікові дані".to_string()),
            message: Some("other".to_string()),
        };
        assert_eq!(body.into_message("Bad Request"), "Невірні облікові дані");
    }

    #[test]
    fn error_body_falls_back_to_message_then_status() {
        let body = ErrorBody {
            detail: None,
            message: Some("save failed".to_string()),
        };
        assert_eq!(body.into_message("Bad Request"), "save failed");

        let empty = ErrorBody::default();
        assert_eq!(empty.into_message("Bad Request"), "Bad Request");
    }

    #[test]
    fn error_body_ignores_empty_detail() {
        let body = ErrorBody {
            detail: Some(String::new()),
            message: None,
        };
        assert_eq!(body.into_message("Forbidden"), "Forbidden");
    }

    #[test]
    fn schedule_row_deserializes_joined_fields() {
        let json = r##"{
            "id": 7,
            "duty_date": "2025-01-15",
            "person_id": 1,
            "duty_type_id": 1,
            "note": "Нічне чергування",
            "full_name": "Іван Петренко",
            "code": "р",
            "color": "#e74c3c"
        }"##;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.full_name, "Іван Петренко");
        assert_eq!(entry.color, "#e74c3c");
        assert_eq!(entry.note.as_deref(), Some("Нічне чергування"));
    }

    #[test]
    fn plan_row_tolerates_missing_crew_names() {
        // The create response returns the bare row without joined names.
        let json = r#"{
            "id": 3,
            "plan_date": "2025-01-15",
            "unit": "11 ПрикЗ",
            "mission": "Патрулювання",
            "start_time": "08:00",
            "end_time": null,
            "pilot_id": 1
        }"#;
        let entry: PlanEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.pilot_id, Some(1));
        assert_eq!(entry.pilot_name, None);
        assert_eq!(entry.end_time, None);
    }

    #[test]
    fn dashboard_payload_deserializes() {
        let json = r#"{
            "date": "2025-01-15",
            "plan": [],
            "statuses": [
                {
                    "person": {
                        "id": 1,
                        "full_name": "Іван Петренко",
                        "role": "Пілот",
                        "callsign": "Сокол",
                        "unit": "11 ПрикЗ"
                    },
                    "status": "Вільний"
                }
            ]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert!(data.plan.is_empty());
        assert_eq!(data.statuses[0].status, "Вільний");
        assert_eq!(data.statuses[0].person.callsign.as_deref(), Some("Сокол"));
    }

    #[test]
    fn analytics_payload_deserializes() {
        let json = r#"{
            "duty_summary": [{"code": "р", "name": "Бойове чергування", "total": 4}],
            "workload": [{"full_name": "Іван Петренко", "total": 2}]
        }"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.duty_summary[0].total, 4);
        assert_eq!(summary.workload[0].full_name, "Іван Петренко");
    }

    #[test]
    fn new_plan_entry_omits_empty_optionals() {
        let entry = NewPlanEntry {
            plan_date: "2025-01-15".to_string(),
            unit: "11 ПрикЗ".to_string(),
            mission: "Патрулювання".to_string(),
            start_time: None,
            end_time: None,
            pilot_id: Some(1),
            navigator_id: None,
            uav_id: None,
            vehicle_id: None,
            battery_id: None,
            notes: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["pilot_id"], 1);
        assert!(json.get("navigator_id").is_none());
        assert!(json.get("start_time").is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn anonymous_requests_carry_json_content_type() {
        session::clear();

        let request = prepare(Request::get("/api/personnel")).build().unwrap();
        assert_eq!(
            request.headers().get("content-type").as_deref(),
            Some("application/json")
        );
        assert!(request.headers().get("authorization").is_none());
    }

    #[wasm_bindgen_test]
    fn signed_in_requests_carry_the_bearer_token() {
        session::save(&Session {
            token: "t-42".to_string(),
            role: "viewer".to_string(),
            username: "viewer".to_string(),
        });

        let request = prepare(Request::get("/api/schedule")).build().unwrap();
        assert_eq!(
            request.headers().get("authorization").as_deref(),
            Some("Bearer t-42")
        );
        assert_eq!(
            request.headers().get("content-type").as_deref(),
            Some("application/json")
        );

        session::clear();
    }
}
