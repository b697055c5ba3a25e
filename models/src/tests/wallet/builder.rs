use crate::{ModelError, WalletBuilder};

/// **VALUE**: Verifies that a valid builder produces a wallet carrying name and addresses in order.
///
/// **WHY THIS MATTERS**: The built wallet is serialized as the body of `POST /wallets`.
///
/// **BUG THIS CATCHES**: Would catch if address order is lost or the name is dropped.
#[test]
fn given_valid_name_and_addresses_when_building_then_returns_wallet() {
    // GIVEN: Builder with name and two addresses
    let builder = WalletBuilder::default()
        .with_name("alice")
        .with_address("1JcX75oraJEmzXXHpDjRctw3BX6qDmFM8e")
        .with_addresses(["1DEP8i3QJCsomS4BSMY2RpU1upv62aGvhD"]);

    // WHEN: Building
    let wallet = builder.build().expect("valid wallet should build");

    // THEN: Fields are carried over
    assert_eq!(wallet.name.as_deref(), Some("alice"));
    assert_eq!(
        wallet.addresses(),
        [
            "1JcX75oraJEmzXXHpDjRctw3BX6qDmFM8e".to_string(),
            "1DEP8i3QJCsomS4BSMY2RpU1upv62aGvhD".to_string()
        ]
    );
    assert!(wallet.token.is_none());
}

/// **VALUE**: Verifies that a wallet without addresses leaves the list unset.
///
/// **WHY THIS MATTERS**: An unset list is omitted from the request body; an empty one is sent as `[]`.
#[test]
fn given_no_addresses_when_building_then_address_list_is_unset() {
    let wallet = WalletBuilder::default()
        .with_name("bob")
        .build()
        .expect("valid wallet should build");

    assert!(wallet.addresses.is_none());
}

/// **VALUE**: Verifies that builder validation rejects a missing name.
///
/// **WHY THIS MATTERS**: The API addresses wallets by name; without one the request is meaningless.
///
/// **BUG THIS CATCHES**: Would catch if the required-field check is removed.
#[test]
fn given_missing_name_when_building_then_returns_validation_error() {
    // GIVEN: Builder without name
    let builder = WalletBuilder::default().with_address("1abc");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Wallet name is required");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that whitespace-only names are rejected.
///
/// **BUG THIS CATCHES**: Would catch if the emptiness check stops trimming.
#[test]
fn given_blank_name_when_building_then_returns_validation_error() {
    let result = WalletBuilder::default().with_name("   ").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Wallet name cannot be empty");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the 25 character limit.
///
/// **WHY THIS MATTERS**: The server rejects longer names; failing locally saves a round trip.
///
/// **BUG THIS CATCHES**: Off-by-one in the length check.
#[test]
fn given_name_longer_than_limit_when_building_then_returns_validation_error() {
    // GIVEN: Exactly 25 and 26 character names
    let at_limit = "a".repeat(25);
    let over_limit = "a".repeat(26);

    // WHEN/THEN: 25 builds, 26 fails
    assert!(WalletBuilder::default().with_name(at_limit).build().is_ok());
    match WalletBuilder::default().with_name(over_limit).build() {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.starts_with("Wallet name cannot exceed 25 characters"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_non_alphanumeric_name_when_building_then_returns_validation_error() {
    let result = WalletBuilder::default().with_name("my wallet!").build();

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

#[test]
fn given_empty_address_when_building_then_returns_validation_error() {
    let result = WalletBuilder::default()
        .with_name("alice")
        .with_address("")
        .build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Wallet addresses cannot be empty");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}
