//! Base58 address prefixes
//!
//! Address format: Base58(prefix + payload + checksum[0:4]) where the
//! checksum is the double SHA-256 of prefix and payload.

use crate::crypto::hash_bytes;
use serde::Serialize;
use thiserror::Error;

/// Kinds of Base58-encoded data, each with its own version prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

/// Address decoding errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid base58 encoding: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("encoded data too short ({0} bytes)")]
    TooShort(usize),
    #[error("invalid checksum")]
    InvalidChecksum,
    #[error("unexpected prefix {found}, expected {expected}")]
    WrongPrefix { expected: String, found: String },
}

/// Version bytes for every [`Base58Type`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    #[serde(serialize_with = "hex_prefix")]
    pub pubkey_address: &'static [u8],
    #[serde(serialize_with = "hex_prefix")]
    pub script_address: &'static [u8],
    #[serde(serialize_with = "hex_prefix")]
    pub secret_key: &'static [u8],
    #[serde(serialize_with = "hex_prefix")]
    pub ext_public_key: &'static [u8],
    #[serde(serialize_with = "hex_prefix")]
    pub ext_secret_key: &'static [u8],
    #[serde(serialize_with = "hex_prefix")]
    pub ext_coin_type: &'static [u8],
}

fn hex_prefix<S: serde::Serializer>(bytes: &&'static [u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
            Base58Type::ExtCoinType => self.ext_coin_type,
        }
    }

    /// Encode `payload` under the prefix for `kind`
    pub fn encode(&self, kind: Base58Type, payload: &[u8]) -> String {
        encode_check(self.get(kind), payload)
    }

    /// Decode `encoded`, require the prefix for `kind`, return the payload
    pub fn decode(&self, kind: Base58Type, encoded: &str) -> Result<Vec<u8>, AddressError> {
        let prefix = self.get(kind);
        let data = decode_check(encoded)?;
        if !data.starts_with(prefix) {
            let found_len = prefix.len().min(data.len());
            return Err(AddressError::WrongPrefix {
                expected: hex::encode(prefix),
                found: hex::encode(&data[..found_len]),
            });
        }
        Ok(data[prefix.len()..].to_vec())
    }
}

/// Base58Check encode `prefix + payload`
pub fn encode_check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + 4);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);

    let checksum = hash_bytes(&data);
    data.extend_from_slice(&checksum.0[0..4]);

    bs58::encode(data).into_string()
}

/// Base58Check decode, returning prefix and payload without the checksum
pub fn decode_check(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let mut data = bs58::decode(encoded).into_vec()?;
    if data.len() < 4 {
        return Err(AddressError::TooShort(data.len()));
    }

    let split = data.len() - 4;
    let checksum = hash_bytes(&data[..split]);
    if data[split..] != checksum.0[0..4] {
        return Err(AddressError::InvalidChecksum);
    }

    data.truncate(split);
    Ok(data)
}
