//! Before `init`, matrix lookups fail instead of panicking.

use mage_rs::*;

#[test]
fn compatibility_before_init_fails() {
    assert!(!is_initialized());
    assert_eq!(
        compatibility(ZodiacSign::Leo, ZodiacSign::Leo),
        Err(AstromageError::NotInitialized)
    );
}
