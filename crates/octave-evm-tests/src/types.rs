//! ethereum/tests VMTest JSON format

use octave_evm::Word;
use octave_primitives::{Address, H256};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

fn hex_str<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.strip_prefix("0x").unwrap_or(&s).to_string())
}

/// Hex-encoded bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = hex_str(deserializer)?;
        hex::decode(s).map(HexBytes).map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded 256-bit word, leading zeros optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexWord(pub Word);

impl<'de> Deserialize<'de> for HexWord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = hex_str(deserializer)?;
        if s.is_empty() {
            return Ok(HexWord(Word::zero()));
        }
        Word::from_str_radix(&s, 16)
            .map(HexWord)
            .map_err(|e| serde::de::Error::custom(format!("invalid word {}: {:?}", s, e)))
    }
}

/// Hex-encoded u64
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexU64(pub u64);

impl<'de> Deserialize<'de> for HexU64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = hex_str(deserializer)?;
        if s.is_empty() {
            return Ok(HexU64(0));
        }
        u64::from_str_radix(&s, 16)
            .map(HexU64)
            .map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded address (20 bytes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexAddress(pub Address);

impl<'de> Deserialize<'de> for HexAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Address::from_hex(&s)
            .map(HexAddress)
            .map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded 32-byte hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexH256(pub H256);

impl<'de> Deserialize<'de> for HexH256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        H256::from_hex(&s)
            .map(HexH256)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// VM Test Types
// =============================================================================

/// VM test file structure (map of test name -> test case)
pub type VmTestFile = HashMap<String, VmTestCase>;

/// Single VM test case
#[derive(Debug, Deserialize)]
pub struct VmTestCase {
    /// Block environment
    pub env: VmEnv,
    /// Execution parameters
    pub exec: VmExec,
    /// Expected gas remaining; absent when execution must fail
    pub gas: Option<HexU64>,
    /// Expected logs hash
    pub logs: Option<HexH256>,
    /// Expected output
    pub out: Option<HexBytes>,
    /// Pre-execution state
    pub pre: HashMap<HexAddress, AccountState>,
    /// Post-execution state; absent when execution must fail
    pub post: Option<HashMap<HexAddress, AccountState>>,
}

impl VmTestCase {
    /// Whether the fixture expects a normal halt
    pub fn expects_success(&self) -> bool {
        self.gas.is_some() && self.post.is_some()
    }
}

/// Block environment. None of the supported opcodes read it, it is parsed so
/// that fixtures validate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmEnv {
    /// Current coinbase
    pub current_coinbase: HexAddress,
    /// Current difficulty
    pub current_difficulty: Option<HexWord>,
    /// Current gas limit
    pub current_gas_limit: HexU64,
    /// Current block number
    pub current_number: HexU64,
    /// Current timestamp
    pub current_timestamp: HexU64,
}

/// VM test execution parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmExec {
    /// Address of the executing account
    pub address: HexAddress,
    /// Caller address
    pub caller: HexAddress,
    /// Code to execute
    pub code: HexBytes,
    /// Input data
    pub data: HexBytes,
    /// Gas provided
    pub gas: HexU64,
    /// Gas price
    pub gas_price: HexWord,
    /// Origin address
    pub origin: HexAddress,
    /// Value transferred
    pub value: HexWord,
}

/// Account state
#[derive(Debug, Deserialize)]
pub struct AccountState {
    /// Balance
    pub balance: HexWord,
    /// Code
    pub code: HexBytes,
    /// Nonce
    pub nonce: HexU64,
    /// Storage
    pub storage: HashMap<HexWord, HexWord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_bytes_deserialize() {
        let bytes: HexBytes = serde_json::from_str(r#""0x1234""#).unwrap();
        assert_eq!(bytes.0, vec![0x12, 0x34]);
    }

    #[test]
    fn test_empty_hex_bytes() {
        let bytes: HexBytes = serde_json::from_str(r#""0x""#).unwrap();
        assert!(bytes.0.is_empty());
    }

    #[test]
    fn test_hex_word_odd_length() {
        let value: HexWord = serde_json::from_str(r#""0x1""#).unwrap();
        assert_eq!(value.0, Word::one());
        let value: HexWord = serde_json::from_str(r#""0x100""#).unwrap();
        assert_eq!(value.0, Word::from(256));
    }

    #[test]
    fn test_hex_word_rejects_garbage() {
        assert!(serde_json::from_str::<HexWord>(r#""0xzz""#).is_err());
    }

    #[test]
    fn test_hex_address_deserialize() {
        let addr: HexAddress =
            serde_json::from_str(r#""0x1234567890123456789012345678901234567890""#).unwrap();
        assert_eq!(addr.0.to_hex(), "0x1234567890123456789012345678901234567890");
    }

    #[test]
    fn test_hex_u64_deserialize() {
        let value: HexU64 = serde_json::from_str(r#""0x0100""#).unwrap();
        assert_eq!(value.0, 256);
    }

    #[test]
    fn test_storage_map_keys() {
        let json = r#"{
            "balance": "0x0de0b6b3a7640000",
            "code": "0x600160005500",
            "nonce": "0x00",
            "storage": { "0x00": "0x01", "0x0a": "0xff" }
        }"#;
        let account: AccountState = serde_json::from_str(json).unwrap();
        assert_eq!(account.code.0, vec![0x60, 0x01, 0x60, 0x00, 0x55, 0x00]);
        assert_eq!(account.storage[&HexWord(Word::zero())].0, Word::one());
        assert_eq!(account.storage[&HexWord(Word::from(10))].0, Word::from(0xff));
    }
}
