use soroban_sdk::{log, Env, String};

use crate::error::ContractError;

pub const ATTRIBUTE_LEN: usize = 6;

// Tx hashes are hex strings; 128 characters covers every host hash format in use.
pub const MAX_TX_HASH_LEN: usize = 128;

pub struct TraitSpec {
    #[allow(dead_code)]
    pub name: &'static str,
    pub cardinality: u32,
    pub weight: u32,
}

// One entry per attribute position, in encoding order. `skin`, `background`
// and `frame` weigh more than the rest when calculating the score.
pub const TRAITS: [TraitSpec; ATTRIBUTE_LEN] = [
    TraitSpec {
        name: "skin",
        cardinality: 10,
        weight: 330,
    },
    TraitSpec {
        name: "background",
        cardinality: 12,
        weight: 220,
    },
    TraitSpec {
        name: "frame",
        cardinality: 12,
        weight: 220,
    },
    TraitSpec {
        name: "fin",
        cardinality: 10,
        weight: 110,
    },
    TraitSpec {
        name: "eye",
        cardinality: 10,
        weight: 100,
    },
    TraitSpec {
        name: "tail",
        cardinality: 10,
        weight: 100,
    },
];

pub fn hex_digit_value(digit: u8) -> Result<u32, ContractError> {
    match digit {
        b'0'..=b'9' => Ok((digit - b'0') as u32),
        b'a'..=b'f' => Ok((digit - b'a') as u32 + 10),
        b'A'..=b'F' => Ok((digit - b'A') as u32 + 10),
        _ => Err(ContractError::InvalidHexDigit),
    }
}

// Inverse of `hex_digit_value`; emits the canonical lowercase form.
pub fn hex_digit_char(value: u32) -> Result<u8, ContractError> {
    match value {
        0..=9 => Ok(b'0' + value as u8),
        10..=15 => Ok(b'a' + (value - 10) as u8),
        _ => Err(ContractError::InvalidHexDigit),
    }
}

/// Derives the first not-yet-issued attribute from `tx_hash` by sliding a
/// window of `ATTRIBUTE_LEN` characters over it, one character at a time.
/// Each window character is reduced modulo the matching trait's cardinality
/// and re-encoded, so every candidate is a valid attribute by construction.
/// Runs out of windows at the end of the hash; that is a hard failure.
pub fn generate_unique_attribute(
    env: &Env,
    tx_hash: &String,
    is_issued: impl Fn(&[u8; ATTRIBUTE_LEN]) -> bool,
) -> Result<[u8; ATTRIBUTE_LEN], ContractError> {
    let len = tx_hash.len() as usize;
    if len > MAX_TX_HASH_LEN {
        log!(
            env,
            "CryptoFish: Generate attribute: tx hash too long: ",
            len as u32
        );
        return Err(ContractError::TxHashTooLong);
    }
    if len < ATTRIBUTE_LEN {
        log!(
            env,
            "CryptoFish: Generate attribute: tx hash shorter than one window: ",
            len as u32
        );
        return Err(ContractError::AttributeExhausted);
    }

    let mut hash_buf = [0u8; MAX_TX_HASH_LEN];
    tx_hash.copy_into_slice(&mut hash_buf[..len]);

    for offset in 0..=(len - ATTRIBUTE_LEN) {
        let window = &hash_buf[offset..offset + ATTRIBUTE_LEN];
        let mut candidate = [0u8; ATTRIBUTE_LEN];
        for (position, spec) in TRAITS.iter().enumerate() {
            let value = hex_digit_value(window[position])? % spec.cardinality;
            candidate[position] = hex_digit_char(value)?;
        }
        if !is_issued(&candidate) {
            return Ok(candidate);
        }
    }

    log!(env, "CryptoFish: Generate attribute: all windows issued");
    Err(ContractError::AttributeExhausted)
}

/// Weighted sum over the attribute's digit values. Must agree with whatever
/// is persisted in a `Collection`; scores are never mutated independently.
pub fn calculate_score(attribute: &[u8; ATTRIBUTE_LEN]) -> Result<u32, ContractError> {
    let mut score: u32 = 0;
    for (position, spec) in TRAITS.iter().enumerate() {
        score += hex_digit_value(attribute[position])? * spec.weight;
    }

    Ok(score)
}
