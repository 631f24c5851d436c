//! End-to-end tour of the report surface over an in-memory snapshot.
//!
//! Run with: cargo run --example report_suite

use anyhow::Result;
use demostats::report;
use demostats::source::{MemorySource, RecordSource};
use demostats::{Error, Person};
use tracing_subscriber::EnvFilter;

fn seed() -> Result<MemorySource> {
    let mut source = MemorySource::new();
    let rows = [
        ("john", "smith", "john.smith@acme.io", "male", "10.1.2.3", "us"),
        ("jane", "doe", "jdoe@acme.io", "female", "11.0.0.4", "us"),
        ("alice", "brown", "alice.brown@acme.io", "female", "130.5.5.5", "us"),
        ("bob", "stone", "bstone@globex.net", "male", "131.9.0.1", "us"),
        ("carla", "rossi", "carla.rossi@globex.net", "female", "200.1.1.1", "it"),
        ("dario", "bianchi", "dbianchi@globex.net", "male", "201.4.4.4", "it"),
        ("elena", "verdi", "elena.verdi@acme.io", "female", "10.9.9.9", "it"),
        ("franz", "weber", "franz.weber@initech.org", "male", "150.2.2.2", "de"),
        ("greta", "klein", "gklein@initech.org", "female", "220.0.0.1", "de"),
        ("hans", "vogel", "hans.vogel@initech.org", "male", "240.1.1.1", "de"),
    ];
    for (first, last, email, gender, ip, country) in rows {
        source.insert(Person::new(first, last, email, gender, ip, country))?;
    }
    Ok(source)
}

fn print_correlation(name: &str, result: demostats::Result<f64>) {
    match result {
        Ok(v) => println!("{name}: {v:.3}"),
        Err(Error::InsufficientData(_) | Error::DegenerateTable(_)) => {
            println!("{name}: no result");
        }
        Err(e) => println!("{name}: error: {e}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = seed()?;
    let people = source.fetch_all()?;

    println!("=== Gender distribution ===");
    println!("{}", serde_json::to_string_pretty(&report::gender_distribution(&people)?)?);

    println!("\n=== IP class distribution ===");
    println!("{}", serde_json::to_string_pretty(&report::ip_class_distribution(&people)?)?);

    println!("\n=== People per country ===");
    println!("{}", serde_json::to_string_pretty(&report::country_counts(&people)?)?);

    println!("\n=== Most common domains ===");
    println!("{}", serde_json::to_string_pretty(&report::most_common_domains(&people)?)?);

    println!("\n=== Most common email patterns ===");
    println!("{}", serde_json::to_string_pretty(&report::common_email_patterns(&people)?)?);

    println!("\n=== Gender distribution by country ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&report::gender_distribution_by_country(&people)?)?
    );

    println!("\n=== Associations (bias-corrected Cramer's V) ===");
    print_correlation("country x domain", report::country_domain_correlation(&people));
    print_correlation("gender x domain", report::gender_domain_correlation(&people));
    print_correlation("gender x country", report::gender_country_correlation(&people));

    Ok(())
}
