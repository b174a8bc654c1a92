use soroban_sdk::{contracttype, Address, String};

/// A minted collectible. `index` is its position in the ledger, `attribute`
/// is the 6 character hex string encoding its visual traits and `score` is
/// the weighted sum over the attribute's digits.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Collection {
    pub index: u32,
    pub creator: Address,
    pub attribute: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ContractMetadata {
    pub standard: String,
    pub rule_hash: String,
}

// Enum to represent the durable storage slots of the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    CanMint,
    Owner,
    Collections,
    IssuedAttributes,
}

pub mod utils {

    use soroban_sdk::{vec, Address, Env, Map, String, Vec};

    use crate::error::ContractError;
    use crate::ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD};

    use super::{Collection, DataKey};

    pub fn save_owner(env: &Env, owner: &Address) {
        env.storage().persistent().set(&DataKey::Owner, owner);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Owner, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
        let owner = env
            .storage()
            .persistent()
            .get(&DataKey::Owner)
            .ok_or(ContractError::OwnerNotSet)?;

        Ok(owner)
    }

    pub fn has_owner(env: &Env) -> bool {
        env.storage().persistent().has(&DataKey::Owner)
    }

    pub fn save_can_mint(env: &Env, can_mint: bool) {
        env.storage().persistent().set(&DataKey::CanMint, &can_mint);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::CanMint, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_can_mint(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::CanMint)
            .unwrap_or(false)
    }

    pub fn get_collections(env: &Env) -> Vec<Collection> {
        env.storage()
            .persistent()
            .get(&DataKey::Collections)
            .unwrap_or(vec![env])
    }

    pub fn save_collections(env: &Env, collections: &Vec<Collection>) {
        env.storage()
            .persistent()
            .set(&DataKey::Collections, collections);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Collections, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_issued_attributes(env: &Env) -> Map<String, bool> {
        env.storage()
            .persistent()
            .get(&DataKey::IssuedAttributes)
            .unwrap_or(Map::new(env))
    }

    pub fn save_issued_attributes(env: &Env, issued: &Map<String, bool>) {
        env.storage()
            .persistent()
            .set(&DataKey::IssuedAttributes, issued);
        env.storage().persistent().extend_ttl(
            &DataKey::IssuedAttributes,
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }
}
