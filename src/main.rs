mod display;
mod form;
mod parser;
mod schedule;
mod web;

use std::path::Path;

use display::{print_month_schedule, write_schedule_to_file};
use form::export::export_schedule_to_csv;
use parser::load_requests;
use schedule::build_schedule;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // Web mode
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the planner at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CSV batch mode
    let csv_path = match args.get(1) {
        Some(path) => path.as_str(),
        None => {
            eprintln!("Usage: month-planner <requests.csv>");
            eprintln!("       month-planner web [port]");
            std::process::exit(2);
        }
    };

    println!("Loading meeting requests from {}...", csv_path);
    let requests = load_requests(csv_path)?;
    println!("Loaded {} meeting requests", requests.len());
    for request in &requests {
        let preference = match request.preferred_weekday {
            Some(day) => format!(", prefers {}", day.display_name()),
            None => String::new(),
        };
        println!(
            "  #{} {} ({}, {}{})",
            request.submission_order,
            request.meeting_type.display_name(),
            request.time_slot.display_name(),
            request.recurrence.display_name(),
            preference
        );
    }

    let schedule = build_schedule(&requests);
    print_month_schedule(&schedule);

    println!("\n=== Writing Schedule to Files ===");
    write_schedule_to_file(&schedule, "schedule_month.txt")?;
    export_schedule_to_csv(&schedule, Path::new("schedule_month.csv"))?;
    println!("Schedule saved to:");
    println!("  - schedule_month.txt");
    println!("  - schedule_month.csv");

    Ok(())
}
