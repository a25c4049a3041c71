//! Protocol revisions (hard forks)

use crate::error::EvmError;
use std::fmt;
use std::str::FromStr;

/// Protocol revision, ordered by activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Revision {
    /// Genesis rules
    Frontier = 0,
    /// EIP-2, EIP-7
    Homestead,
    /// EIP-150 gas repricing
    TangerineWhistle,
    /// EIP-158/160/161/170
    SpuriousDragon,
    /// REVERT, RETURNDATA, STATICCALL
    Byzantium,
    /// Bitwise shifts, EIP-1283 net metering
    Constantinople,
    /// Constantinople without EIP-1283
    Petersburg,
    /// EIP-1884, EIP-2200
    Istanbul,
    /// EIP-2929 access lists
    Berlin,
    /// EIP-1559, EIP-3529 refund reduction
    London,
    /// The merge
    Paris,
    /// PUSH0
    Shanghai,
}

impl Revision {
    /// Number of revisions
    pub const COUNT: usize = 12;

    /// Most recent supported revision
    pub const LATEST: Revision = Revision::Shanghai;

    /// All revisions in activation order
    pub const ALL: [Revision; Self::COUNT] = [
        Revision::Frontier,
        Revision::Homestead,
        Revision::TangerineWhistle,
        Revision::SpuriousDragon,
        Revision::Byzantium,
        Revision::Constantinople,
        Revision::Petersburg,
        Revision::Istanbul,
        Revision::Berlin,
        Revision::London,
        Revision::Paris,
        Revision::Shanghai,
    ];

    /// Whether `self` is at or after `other`; usable in const context
    pub const fn is_at_least(self, other: Revision) -> bool {
        self as u8 >= other as u8
    }

    /// Canonical fork name
    pub const fn name(self) -> &'static str {
        match self {
            Revision::Frontier => "Frontier",
            Revision::Homestead => "Homestead",
            Revision::TangerineWhistle => "TangerineWhistle",
            Revision::SpuriousDragon => "SpuriousDragon",
            Revision::Byzantium => "Byzantium",
            Revision::Constantinople => "Constantinople",
            Revision::Petersburg => "Petersburg",
            Revision::Istanbul => "Istanbul",
            Revision::Berlin => "Berlin",
            Revision::London => "London",
            Revision::Paris => "Paris",
            Revision::Shanghai => "Shanghai",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Revision {
    type Err = EvmError;

    /// Accepts canonical names plus the aliases used by ethereum/tests fixtures
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let revision = match s {
            "Frontier" => Revision::Frontier,
            "Homestead" => Revision::Homestead,
            "TangerineWhistle" | "EIP150" => Revision::TangerineWhistle,
            "SpuriousDragon" | "EIP158" => Revision::SpuriousDragon,
            "Byzantium" => Revision::Byzantium,
            "Constantinople" => Revision::Constantinople,
            "Petersburg" | "ConstantinopleFix" => Revision::Petersburg,
            "Istanbul" => Revision::Istanbul,
            "Berlin" => Revision::Berlin,
            "London" => Revision::London,
            "Paris" | "Merge" => Revision::Paris,
            "Shanghai" => Revision::Shanghai,
            other => return Err(EvmError::UnknownRevision(other.to_string())),
        };
        Ok(revision)
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::LATEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_ordering() {
        assert!(Revision::Frontier < Revision::Homestead);
        assert!(Revision::Petersburg < Revision::Istanbul);
        assert!(Revision::Shanghai > Revision::Paris);
        for pair in Revision::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_is_at_least() {
        assert!(Revision::Berlin.is_at_least(Revision::Berlin));
        assert!(Revision::London.is_at_least(Revision::Istanbul));
        assert!(!Revision::Byzantium.is_at_least(Revision::Constantinople));
    }

    #[test]
    fn test_all_indices_match_discriminants() {
        for (i, rev) in Revision::ALL.iter().enumerate() {
            assert_eq!(*rev as usize, i);
        }
        assert_eq!(Revision::ALL.len(), Revision::COUNT);
    }

    #[test]
    fn test_name_round_trip() {
        for rev in Revision::ALL {
            assert_eq!(rev.to_string().parse::<Revision>().unwrap(), rev);
        }
    }

    #[test]
    fn test_fixture_aliases() {
        assert_eq!("EIP150".parse::<Revision>().unwrap(), Revision::TangerineWhistle);
        assert_eq!("EIP158".parse::<Revision>().unwrap(), Revision::SpuriousDragon);
        assert_eq!("ConstantinopleFix".parse::<Revision>().unwrap(), Revision::Petersburg);
        assert_eq!("Merge".parse::<Revision>().unwrap(), Revision::Paris);
    }

    #[test]
    fn test_unknown_revision() {
        let err = "Cancun".parse::<Revision>().unwrap_err();
        assert_eq!(err, EvmError::UnknownRevision("Cancun".to_string()));
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(Revision::default(), Revision::Shanghai);
    }
}
