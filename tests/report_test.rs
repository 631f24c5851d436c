//! Integration tests for the report surface
//!
//! Exercises the full pipeline over a small fixed snapshot: tabulation,
//! distribution ordering, association measures, and pattern mining.

use demostats::report;
use demostats::{Error, Person};

fn person(first: &str, last: &str, email: &str, gender: &str, ip: &str, country: &str) -> Person {
    Person::new(first, last, email, gender, ip, country)
}

/// Ten-person snapshot with known distributions.
fn snapshot() -> Vec<Person> {
    vec![
        person("John", "Smith", "john.smith@acme.io", "Male", "10.1.2.3", "US"),
        person("Jane", "Doe", "jdoe@acme.io", "Female", "11.0.0.4", "US"),
        person("Alice", "Brown", "alice.brown@acme.io", "Female", "130.5.5.5", "US"),
        person("Bob", "Stone", "bstone@globex.net", "Male", "131.9.0.1", "US"),
        person("Carla", "Rossi", "carla.rossi@globex.net", "Female", "200.1.1.1", "IT"),
        person("Dario", "Bianchi", "dbianchi@globex.net", "Male", "201.4.4.4", "IT"),
        person("Elena", "Verdi", "elena.verdi@acme.io", "Female", "10.9.9.9", "IT"),
        person("Franz", "Weber", "franz.weber@initech.org", "Male", "150.2.2.2", "DE"),
        person("Greta", "Klein", "gklein@initech.org", "Female", "220.0.0.1", "DE"),
        person("Hans", "Vogel", "hans.vogel@initech.org", "Male", "240.1.1.1", "DE"),
    ]
}

#[test]
fn test_gender_distribution_sums_to_100_and_orders_ties() {
    let records = snapshot();
    let dist = report::gender_distribution(&records).unwrap();

    let sum: f64 = dist.iter().map(|e| e.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);

    // 5 Female, 5 Male: tie broken by label ascending
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0].category, "Female");
    assert_eq!(dist[1].category, "Male");
    assert!((dist[0].percentage - 50.0).abs() < 1e-9);
}

#[test]
fn test_ip_class_distribution_reports_all_five_buckets() {
    let records = snapshot();
    let dist = report::ip_class_distribution(&records).unwrap();

    assert_eq!(dist.len(), 5);
    let count_of = |label: &str| {
        dist.iter()
            .find(|e| e.category == label)
            .map(|e| e.count)
            .unwrap()
    };
    assert_eq!(count_of("A"), 3); // 10.x twice, 11.x once
    assert_eq!(count_of("B"), 3); // 130, 131, 150
    assert_eq!(count_of("C"), 3); // 200, 201, 220
    assert_eq!(count_of("D"), 0);
    assert_eq!(count_of("E"), 1); // 240

    let sum: f64 = dist.iter().map(|e| e.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_ip_class_distribution_three_singleton_classes() {
    let records = vec![
        person("A", "One", "a.one@x.io", "Male", "10.0.0.1", "US"),
        person("B", "Two", "b.two@x.io", "Male", "200.1.1.1", "US"),
        person("C", "Three", "c.three@x.io", "Male", "130.5.5.5", "US"),
    ];
    let dist = report::ip_class_distribution(&records).unwrap();

    for label in ["A", "B", "C"] {
        let entry = dist.iter().find(|e| e.category == label).unwrap();
        assert_eq!(entry.count, 1);
        assert!((entry.percentage - 100.0 / 3.0).abs() < 1e-9);
    }
    for label in ["D", "E"] {
        let entry = dist.iter().find(|e| e.category == label).unwrap();
        assert_eq!(entry.count, 0);
    }
}

#[test]
fn test_country_counts_descending_with_label_tiebreak() {
    let records = snapshot();
    let counts = report::country_counts(&records).unwrap();

    let as_pairs: Vec<(&str, u64)> = counts
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    // US has 4; DE and IT tie at 3 and fall back to label order
    assert_eq!(as_pairs, vec![("US", 4), ("DE", 3), ("IT", 3)]);
}

#[test]
fn test_people_from_country_is_case_insensitive() {
    let records = snapshot();
    let matches = report::people_from_country(&records, "it").unwrap();
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|p| p.country() == "IT"));

    assert!(matches!(
        report::people_from_country(&records, "FR"),
        Err(Error::InsufficientData(_))
    ));
}

#[test]
fn test_most_common_domains_reports_ties_sorted() {
    let records = snapshot();
    let domains = report::most_common_domains(&records).unwrap();

    // acme.io 4, globex.net 3, initech.org 3
    assert_eq!(domains.domains, vec!["acme.io"]);
    assert_eq!(domains.count, 4);

    // Drop one acme.io record: three-way tie at 3
    let trimmed: Vec<Person> = records
        .iter()
        .filter(|p| p.email() != "jdoe@acme.io")
        .cloned()
        .collect();
    let tied = report::most_common_domains(&trimmed).unwrap();
    assert_eq!(tied.domains, vec!["acme.io", "globex.net", "initech.org"]);
    assert_eq!(tied.count, 3);
}

#[test]
fn test_perfectly_correlated_attributes_approach_one() {
    // Domain determines country exactly
    let mut records = Vec::new();
    for i in 0..10 {
        records.push(person(
            "A",
            "One",
            &format!("a{i}@us-mail.com"),
            "Male",
            "10.0.0.1",
            "US",
        ));
        records.push(person(
            "B",
            "Two",
            &format!("b{i}@it-mail.com"),
            "Female",
            "10.0.0.2",
            "IT",
        ));
    }
    let v = report::country_domain_correlation(&records).unwrap();
    assert!((v - 1.0).abs() < 1e-9, "expected ~1.0, got {v}");
}

#[test]
fn test_independent_attributes_approach_zero() {
    // Gender and country jointly uniform: no association
    let mut records = Vec::new();
    for gender in ["Male", "Female"] {
        for country in ["US", "IT"] {
            for i in 0..5 {
                records.push(person(
                    "A",
                    "One",
                    &format!("a{i}@x.io"),
                    gender,
                    "10.0.0.1",
                    country,
                ));
            }
        }
    }
    let v = report::gender_country_correlation(&records).unwrap();
    assert!(v.abs() < 1e-9, "expected ~0.0, got {v}");
}

#[test]
fn test_single_domain_snapshot_is_degenerate() {
    let records = vec![
        person("John", "Smith", "a@only.io", "Male", "10.1.2.3", "US"),
        person("Jane", "Doe", "b@only.io", "Female", "10.1.2.4", "IT"),
    ];
    assert!(matches!(
        report::country_domain_correlation(&records),
        Err(Error::DegenerateTable(_))
    ));
}

#[test]
fn test_gender_domain_correlation_in_range() {
    let records = snapshot();
    let v = report::gender_domain_correlation(&records).unwrap();
    assert!((0.0..=1.0 + 1e-9).contains(&v), "out of range: {v}");
}

#[test]
fn test_common_email_patterns_mixed_snapshot() {
    let records = snapshot();
    // 6 first.last, 4 flast
    let patterns = report::common_email_patterns(&records).unwrap();
    assert_eq!(patterns, vec!["first.last@domain"]);
}

#[test]
fn test_common_email_patterns_reports_ties() {
    let records = vec![
        person("John", "Smith", "john.smith@acme.io", "Male", "10.1.2.3", "US"),
        person("Jane", "Doe", "jdoe@acme.io", "Female", "10.1.2.4", "US"),
    ];
    let patterns = report::common_email_patterns(&records).unwrap();
    assert_eq!(patterns, vec!["first.last@domain", "flast@domain"]);
}

#[test]
fn test_gender_distribution_by_country_uses_country_subtotals() {
    let records = snapshot();
    let rows = report::gender_distribution_by_country(&records).unwrap();

    // Ordered by country asc, gender asc
    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.group.as_str(), r.category.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("DE", "Female"),
            ("DE", "Male"),
            ("IT", "Female"),
            ("IT", "Male"),
            ("US", "Female"),
            ("US", "Male"),
        ]
    );

    // DE: 1 Female of 3, 2 Male of 3
    assert!((rows[0].percentage - 100.0 / 3.0).abs() < 1e-9);
    assert!((rows[1].percentage - 200.0 / 3.0).abs() < 1e-9);

    // Each country's shares sum to 100
    for country in ["DE", "IT", "US"] {
        let sum: f64 = rows
            .iter()
            .filter(|r| r.group == country)
            .map(|r| r.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9, "{country} sums to {sum}");
    }
}
