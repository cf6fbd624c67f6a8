//! Property-based tests for password hashing
//!
//! bcrypt is slow even at the lowest cost, so these run few cases.

use auctionhouse::backend::auth::CredentialService;
use proptest::prelude::*;

use crate::common::TEST_HASH_COST;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// bcrypt only looks at the first 72 bytes; stay under that.
fn password() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 !@#%&*]{1,48}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_then_verify_accepts(p in password()) {
        let rt = runtime();
        let credentials = CredentialService::with_cost(TEST_HASH_COST);

        let matched = rt.block_on(async {
            let hash = credentials.hash(&p).await.unwrap();
            credentials.verify(&hash, &p).await
        });
        prop_assert!(matched);
    }

    #[test]
    fn test_verify_rejects_other_password(p1 in password(), p2 in password()) {
        prop_assume!(p1 != p2);
        let rt = runtime();
        let credentials = CredentialService::with_cost(TEST_HASH_COST);

        let matched = rt.block_on(async {
            let hash = credentials.hash(&p1).await.unwrap();
            credentials.verify(&hash, &p2).await
        });
        prop_assert!(!matched);
    }
}
