use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use serde_json::json;

use pennywise::{initialize_db, submit_budget, submit_transaction};

/// A utility for creating a test database for the budget tracking server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating budgets...");
    for (category, limit) in [("Food", 300.0), ("Entertainment", 100.0), ("Transport", 150.0)] {
        submit_budget(
            &json!({ "category": category, "budget_limit": limit }),
            &conn,
        )?;
    }

    println!("Creating transactions...");
    let transactions = [
        (82.45, "Food", "2024-12-01", Some("Groceries")),
        (14.0, "Food", "2024-12-03", Some("Lunch")),
        (120.0, "Entertainment", "2024-12-06", Some("Concert tickets")),
        (45.5, "Transport", "2024-12-09", None),
        (1200.0, "Rent", "2024-12-10", Some("December rent")),
    ];
    for (amount, category, date, description) in transactions {
        submit_transaction(
            &json!({
                "amount": amount,
                "category": category,
                "date": date,
                "description": description
            }),
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
