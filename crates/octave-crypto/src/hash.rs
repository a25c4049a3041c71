//! Keccak-256 hashing

use octave_primitives::H256;
use sha3::{Digest, Keccak256};

/// Hash of empty input, which is also the code hash of accounts without code
pub const KECCAK_EMPTY: H256 = H256::from_bytes([
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03,
    0xc0, 0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85,
    0xa4, 0x70,
]);

/// Compute the Keccak-256 hash of `data`
pub fn keccak256(data: &[u8]) -> H256 {
    let digest = Keccak256::digest(data);
    H256::from_bytes(digest.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(keccak256(&[]), KECCAK_EMPTY);
        assert_eq!(
            KECCAK_EMPTY.to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_hello() {
        assert_eq!(
            keccak256(b"hello").to_hex(),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_zero_word() {
        // storage slot 0 mapping base
        assert_eq!(
            keccak256(&[0u8; 32]).to_hex(),
            "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
        );
    }

    #[test]
    fn test_keccak256_rlp_empty_list() {
        assert_eq!(
            keccak256(&[0xc0]).to_hex(),
            "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"
        );
    }

    #[test]
    fn test_keccak256_selector() {
        let hash = keccak256(b"transfer(address,uint256)");
        assert_eq!(&hash.as_bytes()[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_keccak256_hex_input() {
        let data = hex::decode("deadbeef").unwrap();
        assert_eq!(
            keccak256(&data).to_hex(),
            "0xd4fd4e189132273036449fc9e11198c739161b4c0116a9a2dccdfa1c492006f1"
        );
    }

    #[test]
    fn test_keccak256_block_boundary() {
        // rate is 136 bytes
        let a = keccak256(&[0xab; 136]);
        let b = keccak256(&[0xab; 137]);
        assert_ne!(a, b);
        assert_eq!(a, keccak256(&[0xab; 136]));
    }
}
