//! Property-based tests for session tokens

use std::sync::Arc;

use auctionhouse::backend::auth::{ManualClock, TokenService, TOKEN_TTL_SECS};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use crate::common::{TEST_ISSUER, TEST_SECRET};

fn subject() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

fn service_at(start_secs: i64) -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.timestamp_opt(start_secs, 0).unwrap()));
    let tokens = TokenService::new(TEST_SECRET.as_bytes(), TEST_ISSUER).with_clock(clock.clone());
    (tokens, clock)
}

proptest! {
    #[test]
    fn test_issue_then_verify_yields_subject(id in subject(), start in 1_000_000_000i64..2_000_000_000) {
        let (tokens, _) = service_at(start);
        let token = tokens.issue(id).unwrap();
        let claims = tokens.verify(&token).unwrap();

        prop_assert_eq!(claims.sub, id.to_string());
        prop_assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_after_window(id in subject(), overshoot in 1i64..1_000_000) {
        let (tokens, clock) = service_at(1_700_000_000);
        let token = tokens.issue(id).unwrap();

        clock.advance(Duration::seconds(TOKEN_TTL_SECS + overshoot));
        prop_assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_any_tampered_byte_is_rejected(id in subject(), pos in any::<prop::sample::Index>()) {
        let (tokens, _) = service_at(1_700_000_000);
        let token = tokens.issue(id).unwrap();

        let mut bytes = token.into_bytes();
        let i = pos.index(bytes.len());
        bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(tokens.verify(&tampered).is_err());
    }
}
