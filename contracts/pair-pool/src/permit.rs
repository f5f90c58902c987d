use crate::errors::PoolError;
use crate::shares;
use crate::storage::{get_domain_separator, get_nonce, get_signature_recovery, set_nonce};
use pair_types::SignatureRecoveryClient;
use soroban_sdk::{log, xdr::ToXdr, Address, Bytes, BytesN, Env};

// ============================================================================
// SIGNED ALLOWANCES
// ============================================================================
// digest = keccak256(0x19 0x01 ‖ domain_separator ‖ struct_hash)
// struct_hash = keccak256(PERMIT_TYPEHASH ‖ xdr(owner) ‖ xdr(spender)
//                         ‖ value_be16 ‖ nonce_be8 ‖ deadline_be8)
// domain_separator = keccak256(DOMAIN_TYPEHASH ‖ keccak256(name)
//                              ‖ keccak256(version) ‖ network_id ‖ xdr(pool))
// ============================================================================

pub const SHARE_NAME: &str = "Pair Pool Shares";
pub const SHARE_SYMBOL: &str = "PPS";
pub const SHARE_DECIMALS: u32 = 7;
pub const DOMAIN_VERSION: &str = "1";

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,bytes32 networkId,address verifyingContract)";
const PERMIT_TYPE: &[u8] =
    b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

fn keccak(env: &Env, data: &[u8]) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, data))
        .to_bytes()
}

/// Separator binding signatures to this network and this pool
pub fn compute_domain_separator(env: &Env) -> BytesN<32> {
    let mut data = Bytes::new(env);
    data.append(&keccak(env, DOMAIN_TYPE).into());
    data.append(&keccak(env, SHARE_NAME.as_bytes()).into());
    data.append(&keccak(env, DOMAIN_VERSION.as_bytes()).into());
    data.append(&env.ledger().network_id().into());
    data.append(&env.current_contract_address().to_xdr(env));
    env.crypto().keccak256(&data).to_bytes()
}

/// Digest `owner` signs to grant `spender` an allowance of `value`
pub fn permit_digest(
    env: &Env,
    owner: &Address,
    spender: &Address,
    value: u128,
    nonce: u64,
    deadline: u64,
) -> Result<BytesN<32>, PoolError> {
    let mut fields = Bytes::new(env);
    fields.append(&keccak(env, PERMIT_TYPE).into());
    fields.append(&owner.clone().to_xdr(env));
    fields.append(&spender.clone().to_xdr(env));
    fields.extend_from_array(&value.to_be_bytes());
    fields.extend_from_array(&nonce.to_be_bytes());
    fields.extend_from_array(&deadline.to_be_bytes());
    let struct_hash = env.crypto().keccak256(&fields);

    let mut data = Bytes::from_array(env, &[0x19, 0x01]);
    data.append(&get_domain_separator(env)?.into());
    data.append(&struct_hash.into());
    Ok(env.crypto().keccak256(&data).to_bytes())
}

/// Return the owner's current nonce and advance it
fn take_nonce(env: &Env, owner: &Address) -> Result<u64, PoolError> {
    let nonce = get_nonce(env, owner);
    let next = nonce.checked_add(1).ok_or(PoolError::ArithmeticOverflow)?;
    set_nonce(env, owner, next);
    Ok(nonce)
}

/// Grant an allowance from an off-line signature.
///
/// A failed permit rolls back with the invocation, so the nonce only
/// advances when the allowance is written.
pub fn permit(
    env: &Env,
    owner: &Address,
    spender: &Address,
    value: u128,
    deadline: u64,
    signature: Bytes,
) -> Result<(), PoolError> {
    if env.ledger().timestamp() > deadline {
        return Err(PoolError::SignatureExpired);
    }

    let nonce = take_nonce(env, owner)?;
    let digest = permit_digest(env, owner, spender, value, nonce, deadline)?;

    let recovery = get_signature_recovery(env)?;
    let signer = SignatureRecoveryClient::new(env, &recovery).recover(&digest, &signature);
    if signer != *owner {
        return Err(PoolError::InvalidSigner);
    }

    shares::approve(env, owner, spender, value);
    log!(env, "permit", owner, spender, value, nonce);
    Ok(())
}
