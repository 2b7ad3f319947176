// Integration tests for contact-dedupe

use std::io::Write;

use contact_dedupe::core::{count_accuracy_levels, Matcher};
use contact_dedupe::models::{Accuracy, AccuracySummary, Contact, ContactMatch, MatchReport};
use contact_dedupe::services::{load_contacts, write_report};

fn contact(
    id: i64,
    first: Option<&str>,
    last: Option<&str>,
    email: Option<&str>,
    zip: Option<&str>,
    address: Option<&str>,
) -> Contact {
    Contact {
        id,
        first_name: first.map(String::from),
        last_name: last.map(String::from),
        email_address: email.map(String::from),
        zip_code: zip.map(String::from),
        address: address.map(String::from),
    }
}

fn reference_contacts() -> Vec<Contact> {
    vec![
        contact(
            1001,
            Some("C"),
            Some("F"),
            Some("mollis.lectus.pede@outlook.net"),
            None,
            Some("449-6990 Tellus. Rd."),
        ),
        contact(
            1002,
            Some("C"),
            Some("French"),
            Some("mollis.lectus.pede@outlook.net"),
            Some("39746"),
            Some("449-6990 Tellus. Rd."),
        ),
        contact(
            1003,
            Some("Ciara"),
            Some("F"),
            Some("non.lacinia.at@zoho.ca"),
            Some("39746"),
            None,
        ),
    ]
}

/// Deterministic synthetic contact list with injected duplicates.
fn generate_contacts(count: usize) -> Vec<Contact> {
    const FIRST_NAMES: &[&str] = &["Ciara", "Daniel", "Maria", "Liam", "Sofia", "Noah", "Emma"];
    const LAST_NAMES: &[&str] = &["French", "Nacher", "Perez", "Smith", "Kim", "Olsen"];
    const STREETS: &[&str] = &[
        "449-6990 Tellus. Rd.",
        "Ap #867-859 Sit Rd.",
        "18 de Julio 1234",
        "Calle Mayor 1",
        "P.O. Box 531, 4589 In St.",
    ];

    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[i % LAST_NAMES.len()];
            // every fifth record reuses an earlier mailbox, making duplicates
            let email = format!("user{}@example.com", if i % 5 == 0 { i / 5 } else { i });
            let zip = format!("{:05}", 10000 + i % 9);
            let street = STREETS[i % STREETS.len()];

            contact(
                i as i64,
                Some(first),
                Some(last),
                Some(&email),
                Some(&zip),
                if i % 4 == 0 { None } else { Some(street) },
            )
        })
        .collect()
}

#[test]
fn test_reference_scenario() {
    let matcher = Matcher::with_default_weights();
    let matches = matcher.find_possible_matches(&reference_contacts());

    assert_eq!(matches.len(), 2);
    assert_eq!(
        matches[0],
        ContactMatch {
            source_id: 1001,
            match_id: 1002,
            accuracy: Accuracy::High,
        }
    );
    assert_eq!(
        matches[1],
        ContactMatch {
            source_id: 1001,
            match_id: 1003,
            accuracy: Accuracy::Low,
        }
    );

    let counts = count_accuracy_levels(&matches);
    assert_eq!(counts[&Accuracy::High], 1);
    assert_eq!(counts[&Accuracy::Medium], 0);
    assert_eq!(counts[&Accuracy::Low], 1);
}

#[test]
fn test_pair_coverage_is_complete() {
    let matcher = Matcher::with_default_weights();

    // identical records: every one of the n*(n-1)/2 pairs must be reported
    let contacts: Vec<Contact> = (0..8)
        .map(|i| {
            contact(
                i,
                Some("Daniel"),
                Some("Nacher"),
                Some("daniel@example.com"),
                Some("11300"),
                Some("18 de Julio 1234"),
            )
        })
        .collect();

    let matches = matcher.find_possible_matches(&contacts);
    assert_eq!(matches.len(), 8 * 7 / 2);

    // no self-pairs, no reversed duplicates
    for m in &matches {
        assert!(m.source_id < m.match_id);
    }
}

#[test]
fn test_empty_and_singleton_inputs_yield_no_matches() {
    let matcher = Matcher::with_default_weights();

    assert!(matcher.find_possible_matches(&[]).is_empty());

    let single = vec![contact(1, Some("Ana"), None, None, None, None)];
    assert!(matcher.find_possible_matches(&single).is_empty());
}

#[test]
fn test_contacts_with_no_common_evidence_never_match() {
    let matcher = Matcher::with_default_weights();

    let contacts = vec![
        contact(1, Some("Ana"), Some("Kim"), Some("ana@a.com"), Some("1"), None),
        contact(2, Some("Eva"), Some("Olsen"), Some("eva@b.com"), Some("2"), None),
        contact(3, None, None, None, None, None),
    ];

    assert!(matcher.find_possible_matches(&contacts).is_empty());
}

#[test]
fn test_count_consistency_on_generated_data() {
    let matcher = Matcher::with_default_weights();
    let contacts = generate_contacts(120);

    let matches = matcher.find_possible_matches(&contacts);
    let counts = count_accuracy_levels(&matches);

    assert_eq!(counts.values().sum::<usize>(), matches.len());
    assert_eq!(counts.len(), 3);
}

#[test]
fn test_parallel_path_reproduces_sequential_output() {
    let matcher = Matcher::with_default_weights();
    let contacts = generate_contacts(150);

    let sequential = matcher.find_possible_matches(&contacts);
    let parallel = matcher.find_possible_matches_parallel(&contacts);

    // not just the same set: the same sequence
    assert_eq!(sequential, parallel);
    assert!(!sequential.is_empty());
}

#[test]
fn test_end_to_end_load_match_report() {
    let dir = tempfile::tempdir().expect("temp dir");

    let input_path = dir.path().join("contacts.json");
    let mut input = std::fs::File::create(&input_path).expect("create input");
    input
        .write_all(
            br#"[
                {"id": 1001, "firstName": "C", "lastName": "F",
                 "emailAddress": "mollis.lectus.pede@outlook.net",
                 "address": "449-6990 Tellus. Rd."},
                {"id": 1002, "firstName": "C", "lastName": "French",
                 "emailAddress": "mollis.lectus.pede@outlook.net",
                 "zipCode": "39746", "address": "449-6990 Tellus. Rd."},
                {"id": 1003, "firstName": "Ciara", "lastName": "F",
                 "emailAddress": "non.lacinia.at@zoho.ca", "zipCode": "39746"}
            ]"#,
        )
        .expect("write input");

    let contacts = load_contacts(&input_path).expect("load");
    assert_eq!(contacts.len(), 3);

    let matcher = Matcher::with_default_weights();
    let matches = matcher.find_possible_matches(&contacts);
    let summary = AccuracySummary::from(&count_accuracy_levels(&matches));
    let report = MatchReport::new(contacts.len(), matches, summary);

    let report_path = dir.path().join("report.json");
    write_report(&report, &report_path, true).expect("write report");

    let raw = std::fs::read_to_string(&report_path).expect("read report");
    let parsed: MatchReport = serde_json::from_str(&raw).expect("parse report");

    assert_eq!(parsed.total_contacts, 3);
    assert_eq!(parsed.pairs_compared, 3);
    assert_eq!(parsed.matches.len(), 2);
    assert_eq!(parsed.summary.high, 1);
    assert_eq!(parsed.summary.medium, 0);
    assert_eq!(parsed.summary.low, 1);
}
