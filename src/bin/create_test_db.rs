use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use spendtrack::{
    NewSpender, Transaction, initialize_db,
    stores::{
        SpenderStore, TransactionStore,
        sqlite::{SQLiteSpenderStore, SQLiteTransactionStore},
    },
};

/// A utility for creating a test database for the REST API server of spendtrack.
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
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    initialize_db(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    println!("Creating test spender...");
    let spender = SQLiteSpenderStore::new(conn.clone()).create(NewSpender {
        name: "HongJot".to_owned(),
        email: "hong@jot.ok".to_owned(),
    })?;

    println!("Creating test transactions...");
    let mut transaction_store = SQLiteTransactionStore::new(conn);
    let today = OffsetDateTime::now_utc();

    for day in 0..30 {
        let date = today - Duration::days(day);

        transaction_store.create(
            Transaction::build(12.5 + day as f64, date, "expense", spender.id)
                .category("Food")
                .note("Lunch"),
        )?;

        if day % 7 == 0 {
            transaction_store.create(
                Transaction::build(500.0, date, "income", spender.id)
                    .category("Salary")
                    .note("Weekly pay"),
            )?;
        }
    }

    println!("Success!");

    Ok(())
}
