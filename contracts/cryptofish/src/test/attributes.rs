use soroban_sdk::{Env, String};
use test_case::test_case;

use crate::error::ContractError;
use crate::utils::{calculate_score, generate_unique_attribute, hex_digit_char, hex_digit_value};

use super::setup::{DEPLOY_ATTRIBUTE, DEPLOY_SCORE, DEPLOY_TX_HASH};

#[test_case(b'0', 0; "digit zero")]
#[test_case(b'9', 9; "digit nine")]
#[test_case(b'a', 10; "lowercase a")]
#[test_case(b'f', 15; "lowercase f")]
#[test_case(b'A', 10; "uppercase a")]
#[test_case(b'F', 15; "uppercase f")]
fn hex_digit_value_accepts_both_cases(digit: u8, expected: u32) {
    assert_eq!(hex_digit_value(digit), Ok(expected));
}

#[test]
fn hex_digits_round_trip_to_canonical_lowercase() {
    for value in 0..16u32 {
        let digit = hex_digit_char(value).unwrap();
        assert_eq!(hex_digit_value(digit), Ok(value));
    }

    assert_eq!(hex_digit_char(hex_digit_value(b'A').unwrap()), Ok(b'a'));
    assert_eq!(hex_digit_char(hex_digit_value(b'F').unwrap()), Ok(b'f'));
}

#[test_case(b'g'; "letter g")]
#[test_case(b'z'; "letter z")]
#[test_case(b' '; "space")]
#[test_case(b'-'; "dash")]
fn hex_digit_value_rejects_non_hex(digit: u8) {
    assert_eq!(hex_digit_value(digit), Err(ContractError::InvalidHexDigit));
}

#[test]
fn hex_digit_char_rejects_out_of_range() {
    assert_eq!(hex_digit_char(16), Err(ContractError::InvalidHexDigit));
    assert_eq!(hex_digit_char(u32::MAX), Err(ContractError::InvalidHexDigit));
}

#[test_case(b"000000", 0; "all zero")]
#[test_case(b"ffffff", 16200; "all max")]
#[test_case(b"420117", DEPLOY_SCORE; "deploy attribute")]
#[test_case(b"111111", 1080; "all one")]
fn score_is_the_weighted_digit_sum(attribute: &[u8; 6], expected: u32) {
    assert_eq!(calculate_score(attribute), Ok(expected));
}

#[test]
fn generation_uses_the_first_available_window() {
    let env = Env::default();
    let hash = String::from_str(&env, DEPLOY_TX_HASH);

    let attribute = generate_unique_attribute(&env, &hash, |_| false).unwrap();

    assert_eq!(&attribute, DEPLOY_ATTRIBUTE.as_bytes());
}

#[test]
fn generation_skips_issued_windows_up_to_the_final_offset() {
    let env = Env::default();
    // Offsets 0 and 1; the candidate at offset 0 is already taken.
    let hash = String::from_str(&env, "aaaaaab");

    let attribute = generate_unique_attribute(&env, &hash, |c| c == b"0aa000").unwrap();

    assert_eq!(&attribute, b"0aa001");
}

#[test]
fn generation_fails_when_every_window_is_issued() {
    let env = Env::default();
    let hash = String::from_str(&env, "bbbbbb");

    assert_eq!(
        generate_unique_attribute(&env, &hash, |_| true),
        Err(ContractError::AttributeExhausted)
    );
}

#[test]
fn generation_fails_on_a_hash_shorter_than_one_window() {
    let env = Env::default();
    let hash = String::from_str(&env, "abc");

    assert_eq!(
        generate_unique_attribute(&env, &hash, |_| false),
        Err(ContractError::AttributeExhausted)
    );
}

#[test]
fn generation_rejects_non_hex_hashes() {
    let env = Env::default();
    let hash = String::from_str(&env, "zzzzzz");

    assert_eq!(
        generate_unique_attribute(&env, &hash, |_| false),
        Err(ContractError::InvalidHexDigit)
    );
}

#[test]
fn generation_rejects_an_overlong_hash() {
    let env = Env::default();
    let hash = String::from_bytes(&env, &[b'a'; 129]);

    assert_eq!(
        generate_unique_attribute(&env, &hash, |_| false),
        Err(ContractError::TxHashTooLong)
    );
}
