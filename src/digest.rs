//! Fixed-size SHA3-256 output.

use core::{fmt, str::FromStr};

use crate::{DIGEST_BYTES, Error};

/// A 32-byte SHA3-256 digest. Displays as lower-case hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub(crate) [u8; DIGEST_BYTES]);

impl Digest {
    #[inline]
    pub const fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_BYTES]> for Digest {
    #[inline]
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    #[inline]
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532";

    #[test]
    fn display_is_lower_hex() {
        let d = crate::sha3_256(b"abc");
        assert_eq!(d.to_string(), ABC);
        assert_eq!(format!("{d:x}"), ABC);
        assert_eq!(d.to_hex(), ABC);
        assert_eq!(format!("{d:?}"), format!("Digest({ABC})"));
    }

    #[test]
    fn parse_accepts_hex() {
        let d: Digest = ABC.parse().unwrap();
        assert_eq!(d, crate::sha3_256(b"abc"));
        let upper: Digest = ABC.to_uppercase().parse().unwrap();
        assert_eq!(upper, d);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            ABC[..62].parse::<Digest>(),
            Err(Error::InvalidDigest(hex::FromHexError::InvalidStringLength))
        );
        assert!(matches!(
            "zz".repeat(32).parse::<Digest>(),
            Err(Error::InvalidDigest(hex::FromHexError::InvalidHexCharacter { .. }))
        ));
    }

    #[test]
    fn byte_conversions() {
        let raw: [u8; DIGEST_BYTES] = core::array::from_fn(|i| i as u8);
        let d = Digest::from(raw);
        assert_eq!(d.as_bytes(), &raw);
        assert_eq!(d.as_ref(), raw.as_slice());
        assert_eq!(<[u8; DIGEST_BYTES]>::from(d), raw);
        assert_eq!(Digest::from_bytes(raw), d);
    }
}
