//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use roster_tui::{Address, Company, RetryPolicy, User};
use std::net::TcpListener;

/// Find a port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Retry policy with short real-time delays for HTTP tests.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        initial_delay_ms: 10,
        ..RetryPolicy::default()
    }
}

pub fn user(n: usize) -> User {
    User {
        name: format!("User {}", n),
        username: format!("user{}", n),
        email: format!("user{}@example.com", n),
        phone: format!("555-01{:02}", n),
        website: format!("user{}.example.com", n),
        address: Address {
            street: format!("{} Elm Street", n),
            city: String::from("Gotham"),
        },
        company: Company {
            name: format!("Company {}", n),
            catch_phrase: String::from("Proactive didactic contingency"),
            bs: String::from("synergize scalable supply-chains"),
        },
    }
}

pub fn users(n: usize) -> Vec<User> {
    (1..=n).map(user).collect()
}

/// JSON body as served by the real endpoint, extra fields included.
pub fn users_json(users: &[User]) -> String {
    let values: Vec<serde_json::Value> = users
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let mut v = serde_json::to_value(u).unwrap();
            v["id"] = serde_json::json!(i + 1);
            v["address"]["zipcode"] = serde_json::json!("92998-3874");
            v
        })
        .collect();
    serde_json::to_string(&values).unwrap()
}
