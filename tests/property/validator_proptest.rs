//! Property-based tests for request validation
//!
//! Breaking one field adds exactly that field's problem and leaves the
//! others' results unchanged.

use auctionhouse::backend::auth::handlers::SignupRequest;
use auctionhouse::backend::validation::{ValidationContext, Validator};
use proptest::prelude::*;

const FIELDS: [&str; 4] = ["username", "email", "password", "bio"];

fn valid() -> SignupRequest {
    SignupRequest {
        username: "alice".into(),
        email: "a@x.com".into(),
        password: "longpassword1".into(),
        bio: "a bio of 10+ chars".into(),
    }
}

fn break_field(req: &mut SignupRequest, field: &str) {
    match field {
        "username" => req.username = "al".into(),
        "email" => req.email = "no-at-sign".into(),
        "password" => req.password = "short".into(),
        _ => req.bio = "tiny".into(),
    }
}

proptest! {
    #[test]
    fn test_each_broken_field_reports_only_itself(mask in 0u8..16) {
        let mut req = valid();
        let broken: Vec<&str> = FIELDS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, f)| *f)
            .collect();
        for field in &broken {
            break_field(&mut req, field);
        }

        let problems = req.validate(&ValidationContext::now()).into_problems();
        let mut reported: Vec<&str> = problems.keys().map(String::as_str).collect();
        let mut expected = broken.clone();
        reported.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn test_long_enough_usernames_pass(name in "[a-z]{3,30}") {
        let req = SignupRequest { username: name, ..valid() };
        prop_assert!(req.validate(&ValidationContext::now()).is_valid());
    }
}
