//! User Update
//!
//! This example demonstrates validating an update request before touching storage.
//!
//! Key concepts:
//! - Lazy rules built from request fields
//! - Find-first evaluation so the uniqueness lookup only runs for well-formed input
//! - Propagating the stop condition with `?`
//! - Reporting violations back to the caller
//!
//! Run with: cargo run --example user_update

use verdict::core::Violation;
use verdict::engine::{validate_all, validate_find_first_and_stop_if_violation, ValidationError};
use verdict::rules::{collection, lazy};

#[derive(Debug, Clone)]
struct User {
    id: u64,
    name: String,
    roles: Vec<String>,
}

struct UpdateUserInput<'a> {
    id: Option<u64>,
    name: Option<&'a str>,
    roles: Vec<&'a str>,
}

// In-memory repository
struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    fn name_taken_by_other(&self, id: Option<u64>, name: Option<&str>) -> bool {
        println!("  (checking name uniqueness)");
        self.users
            .iter()
            .any(|user| Some(user.name.as_str()) == name && Some(user.id) != id)
    }

    fn update(&mut self, input: &UpdateUserInput) -> Result<User, ValidationError> {
        validate_find_first_and_stop_if_violation(vec![
            lazy::not_null("input.id", input.id),
            lazy::not_blank("input.name", input.name),
            lazy::length_between("input.name", input.name, 1, 20),
            lazy::is_false(
                || self.name_taken_by_other(input.id, input.name),
                Violation::of(
                    "general",
                    "user.duplicate.name",
                    "The provided name is already used by another user.",
                ),
            ),
        ])?;

        let user = User {
            id: input.id.unwrap_or_default(),
            name: input.name.unwrap_or_default().to_string(),
            roles: input.roles.iter().map(|r| r.to_string()).collect(),
        };
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => self.users.push(user.clone()),
        }
        Ok(user)
    }
}

fn report(label: &str, result: Result<User, ValidationError>) {
    println!("{}", label);
    match result {
        Ok(user) => println!("  ✓ Updated user {}: {} {:?}", user.id, user.name, user.roles),
        Err(error) => {
            for violation in error.violations() {
                println!(
                    "  ✗ {} [{}]: {}",
                    violation.field_path(),
                    violation.message(),
                    violation.details()
                );
            }
        }
    }
    println!();
}

fn main() {
    println!("=== User Update Validation ===\n");

    let mut repository = UserRepository {
        users: vec![
            User {
                id: 1,
                name: "ada".to_string(),
                roles: vec!["admin".to_string()],
            },
            User {
                id: 2,
                name: "grace".to_string(),
                roles: vec![],
            },
        ],
    };

    let result = repository.update(&UpdateUserInput {
        id: Some(1),
        name: Some("countess"),
        roles: vec!["admin", "author"],
    });
    report("Valid update:", result);

    let result = repository.update(&UpdateUserInput {
        id: None,
        name: Some("   "),
        roles: vec![],
    });
    report("Missing id (stops before the lookup):", result);

    let result = repository.update(&UpdateUserInput {
        id: Some(1),
        name: Some("grace"),
        roles: vec![],
    });
    report("Duplicate name:", result);

    println!("Collect-all over a list of roles:");
    let roles = vec!["admin", "", "a-role-name-that-is-far-too-long"];
    let violations = validate_all(collection::from(roles.iter().copied(), |i, role| {
        lazy::length_between(format!("input.roles[{}]", i), Some(role), 1, 16)
    }));
    for violation in &violations {
        println!("  ✗ {}: {}", violation.field_path(), violation);
    }

    println!("\n=== Example Complete ===");
}
