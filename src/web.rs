use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::Serialize;

use crate::display::{format_start_time, BAR_MINUTES, WORKDAY_MINUTES};
use crate::form::submission::{validate_form, MeetingForm};
use crate::schedule::calendar::{is_weekday, week_of, weekday_name, MONTH_DAYS};
use crate::schedule::{build_schedule, MeetingRequest, MeetingType};

// The request list lives in the cookie session, so every browser session
// plans its own month and a server restart starts everyone fresh.
const MEETINGS_KEY: &str = "meetings";

#[derive(Serialize)]
pub struct ScheduleResponse {
    days: Vec<DayView>,
}

#[derive(Serialize)]
pub struct DayView {
    day: u8,
    weekday: String,
    week: u8,
    is_weekday: bool,
    occurrences: Vec<OccurrenceView>,
}

/// Everything the client needs to draw one meeting bar inside a day cell.
#[derive(Serialize)]
pub struct OccurrenceView {
    day: u8,
    time_slot: String,
    start_offset: u16,
    time_label: String,
    text: String,
    color: String,
    text_color: String,
    /// Fraction of the 480-minute day at which the bar starts.
    bar_top: f32,
    /// Fraction of the 480-minute day the bar covers (fixed height).
    bar_height: f32,
}

#[derive(Serialize)]
pub struct MeetingTypeView {
    name: String,
    color: String,
    needs_person_name: bool,
}

fn session_requests(session: &Session) -> Vec<MeetingRequest> {
    session
        .get::<Vec<MeetingRequest>>(MEETINGS_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

// Intake endpoint: validate, stamp the submission order, store in session.
async fn add_meeting(
    form: web::Json<MeetingForm>,
    session: Session,
) -> Result<HttpResponse> {
    let mut requests = session_requests(&session);
    let submission_order = requests.len() as u32 + 1;

    match validate_form(&form, submission_order) {
        Ok(request) => {
            requests.push(request);
            session
                .insert(MEETINGS_KEY, &requests)
                .map_err(actix_web::error::ErrorInternalServerError)?;
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "submission_order": submission_order
            })))
        }
        Err(err) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": err.to_string()
        }))),
    }
}

async fn list_meetings(session: Session) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(session_requests(&session)))
}

// Reset: the next submission restarts numbering at 1.
async fn clear_meetings(session: Session) -> Result<HttpResponse> {
    session.purge();
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn list_meeting_types() -> Result<HttpResponse> {
    let types: Vec<MeetingTypeView> = MeetingType::ALL
        .iter()
        .map(|mt| MeetingTypeView {
            name: mt.display_name().to_string(),
            color: mt.color().to_string(),
            needs_person_name: *mt == MeetingType::OneToOne,
        })
        .collect();
    Ok(HttpResponse::Ok().json(types))
}

// Runs the engine over the session's requests and returns the full month,
// weekends included so the client can draw the complete grid.
async fn get_schedule(session: Session) -> Result<HttpResponse> {
    let requests = session_requests(&session);
    let schedule = build_schedule(&requests);

    let days: Vec<DayView> = (1..=MONTH_DAYS)
        .map(|day| {
            let occurrences = schedule
                .occurrences_on(day)
                .iter()
                .map(|occ| OccurrenceView {
                    day,
                    time_slot: occ.time_slot.display_name().to_string(),
                    start_offset: occ.start_offset,
                    time_label: format_start_time(occ.start_offset),
                    text: occ.display_text(),
                    color: occ.meeting_type.color().to_string(),
                    text_color: occ.meeting_type.text_color().to_string(),
                    bar_top: occ.start_offset as f32 / WORKDAY_MINUTES as f32,
                    bar_height: BAR_MINUTES as f32 / WORKDAY_MINUTES as f32,
                })
                .collect();
            DayView {
                day,
                weekday: weekday_name(day).to_string(),
                week: week_of(day),
                is_weekday: is_weekday(day),
                occurrences,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ScheduleResponse { days }))
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn calendar_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/calendar.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    // Sessions do not survive a restart; a fresh key invalidates old cookies.
    let secret_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/calendar", web::get().to(calendar_page))
            .route("/api/meetings", web::post().to(add_meeting))
            .route("/api/meetings", web::get().to(list_meetings))
            .route("/api/meeting-types", web::get().to(list_meeting_types))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/clear", web::post().to(clear_meetings))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
