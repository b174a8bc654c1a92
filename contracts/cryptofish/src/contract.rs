use soroban_sdk::{contract, contractimpl, log, vec, Address, Env, String, Vec};

use crate::{
    error::ContractError,
    storage::{
        utils::{
            get_can_mint, get_collections, get_issued_attributes, get_owner, has_owner,
            save_can_mint, save_collections, save_issued_attributes, save_owner,
        },
        Collection, ContractMetadata,
    },
    utils::{calculate_score, generate_unique_attribute},
};

// Collection count limit per creator. Lowered under cfg(test) so the limit
// path is reachable in unit tests.
pub const MINT_LIMIT: u32 = if cfg!(test) { 5 } else { 99_999 };

// md5 of the rule image file containing all the fish's attributes
const RULE_HASH: &str = "ada24c6d6d4d403374c81995cceb7262";
const STANDARD: &str = "CryptoFish";

#[contract]
pub struct CryptoFish;

#[contractimpl]
impl CryptoFish {
    // Deploy hook: binds the deployer as owner, enables minting and grants
    // the deployer the first (index 0) collection.
    #[allow(dead_code)]
    pub fn initialize(env: Env, sender: Address, tx_hash: String) -> Result<(), ContractError> {
        sender.require_auth();

        if has_owner(&env) {
            log!(&env, "CryptoFish: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_owner(&env, &sender);
        save_can_mint(&env, true);

        env.events()
            .publish(("initialize", "owner: "), sender.clone());

        Self::mint_for(&env, &sender, &tx_hash)?;

        Ok(())
    }

    // Mints a collection for `sender`, its attribute derived from `tx_hash`.
    // Returns `None` without touching the ledger when the creator is at the
    // collection limit or minting is disabled; the owner gets no exemption
    // from either check.
    #[allow(dead_code)]
    pub fn mint(
        env: Env,
        sender: Address,
        tx_hash: String,
    ) -> Result<Option<Collection>, ContractError> {
        sender.require_auth();

        Self::mint_for(&env, &sender, &tx_hash)
    }

    // Toggles mint availability. Silently ignored for anyone but the owner.
    #[allow(dead_code)]
    pub fn set_can_mint(env: Env, sender: Address, can_mint: bool) -> Result<(), ContractError> {
        sender.require_auth();

        if !Self::is_owner(&env, &sender) {
            log!(
                &env,
                "CryptoFish: Set can mint: ignoring call from non owner: ",
                sender
            );
            return Ok(());
        }

        save_can_mint(&env, can_mint);

        env.events().publish(("set can mint", "sender: "), sender);
        env.events()
            .publish(("set can mint", "can mint: "), can_mint);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn get_collection_by_index(env: Env, index: u32) -> Option<Collection> {
        let collection = get_collections(&env).get(index);
        if collection.is_none() {
            log!(
                &env,
                "CryptoFish: Get collection by index: no collection at index: ",
                index
            );
        }

        collection
    }

    // Linear scan; attributes are unique so at most one match exists.
    #[allow(dead_code)]
    pub fn get_collection_by_attribute(env: Env, attribute: String) -> Option<Collection> {
        let collection = get_collections(&env)
            .iter()
            .find(|collection| collection.attribute == attribute);
        if collection.is_none() {
            log!(
                &env,
                "CryptoFish: Get collection by attribute: no collection with attribute: ",
                attribute
            );
        }

        collection
    }

    // Collections minted by the calling address, in mint order. The auth
    // requirement is what keeps one address from listing another's holdings.
    #[allow(dead_code)]
    pub fn get_owned_collections(env: Env, sender: Address) -> Vec<Collection> {
        sender.require_auth();

        let owned = Self::owned_collections(&env, &sender);
        log!(
            &env,
            "CryptoFish: Get owned collections: count: ",
            owned.len()
        );

        owned
    }

    #[allow(dead_code)]
    pub fn get_collection_count(env: Env) -> u32 {
        get_collections(&env).len()
    }

    // A page `[skip, skip + limit)` of the ledger, clipped to its bounds.
    // Out of range `skip` yields an empty page, never an error.
    #[allow(dead_code)]
    pub fn get_collections(env: Env, limit: u32, skip: u32) -> Vec<Collection> {
        let collections = get_collections(&env);
        let total = collections.len();

        let start = skip.min(total);
        let end = skip.saturating_add(limit).min(total);

        collections.slice(start..end)
    }

    #[allow(dead_code)]
    pub fn show_owner(env: Env) -> Result<Address, ContractError> {
        let owner = get_owner(&env)?;

        Ok(owner)
    }

    #[allow(dead_code)]
    pub fn is_mint_enabled(env: Env) -> bool {
        get_can_mint(&env)
    }

    #[allow(dead_code)]
    pub fn metadata(env: Env) -> ContractMetadata {
        ContractMetadata {
            standard: String::from_str(&env, STANDARD),
            rule_hash: String::from_str(&env, RULE_HASH),
        }
    }

    fn mint_for(
        env: &Env,
        creator: &Address,
        tx_hash: &String,
    ) -> Result<Option<Collection>, ContractError> {
        let owned_count = Self::owned_collections(env, creator).len();
        if owned_count >= MINT_LIMIT {
            log!(
                env,
                "CryptoFish: Mint: creator reached the collection limit: ",
                creator
            );
            return Ok(None);
        }

        if !get_can_mint(env) {
            log!(env, "CryptoFish: Mint: minting is not available");
            return Ok(None);
        }

        let issued = get_issued_attributes(env);
        let attribute_digits = generate_unique_attribute(env, tx_hash, |candidate| {
            issued.contains_key(String::from_bytes(env, candidate))
        })?;

        let score = calculate_score(&attribute_digits)?;
        let attribute = String::from_bytes(env, &attribute_digits);

        let mut collections = get_collections(env);
        let index = collections.len();
        let collection = Collection {
            index,
            creator: creator.clone(),
            attribute: attribute.clone(),
            score,
        };

        collections.push_back(collection.clone());
        save_collections(env, &collections);

        let mut issued = issued;
        issued.set(attribute.clone(), true);
        save_issued_attributes(env, &issued);

        log!(
            env,
            "CryptoFish: Mint: minted collection: index: ",
            index,
            " attribute: ",
            attribute,
            " score: ",
            score
        );

        env.events().publish(("mint", "creator: "), creator.clone());
        env.events().publish(("mint", "index: "), index);
        env.events().publish(("mint", "attribute: "), attribute);

        Ok(Some(collection))
    }

    fn owned_collections(env: &Env, address: &Address) -> Vec<Collection> {
        let mut owned = vec![env];
        for collection in get_collections(env).iter() {
            if collection.creator == *address {
                owned.push_back(collection);
            }
        }

        owned
    }

    fn is_owner(env: &Env, address: &Address) -> bool {
        match get_owner(env) {
            Ok(owner) => owner == *address,
            Err(_) => false,
        }
    }
}
