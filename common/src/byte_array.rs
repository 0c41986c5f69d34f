use serde_with::{hex::Hex, serde_as};
use std::{fmt, ops::Deref};

macro_rules! declare_byte_array_type {
    ($name:ident, $size:expr) => {
        /// $name
        #[serde_as]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(#[serde_as(as = "Hex")] pub [u8; $size]);

        impl $name {
            pub const LEN: usize = $size;
        }

        impl Default for $name {
            fn default() -> Self {
                Self([0u8; $size])
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<Vec<u8>> for $name {
            type Error = Vec<u8>;
            fn try_from(vec: Vec<u8>) -> Result<Self, Self::Error> {
                Ok($name(vec.try_into()?))
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = std::array::TryFromSliceError;
            fn try_from(arr: &[u8]) -> Result<Self, Self::Error> {
                Ok($name(arr.try_into()?))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = [u8; $size];
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }
    };
}

/// Length of a transaction, asset, chain or subnet ID
pub const ID_LEN: usize = 32;

/// Length of an address
pub const SHORT_ID_LEN: usize = 20;

pub const NODE_ID_LEN: usize = 20;

pub const BLS_PUBLIC_KEY_LEN: usize = 48;
pub const BLS_SIGNATURE_LEN: usize = 96;

/// Recoverable secp256k1 signature: r || s || v
pub const SECP256K1_SIGNATURE_LEN: usize = 65;

declare_byte_array_type!(Id, ID_LEN);

declare_byte_array_type!(ShortId, SHORT_ID_LEN);

declare_byte_array_type!(NodeId, NODE_ID_LEN);

declare_byte_array_type!(BlsPublicKey, BLS_PUBLIC_KEY_LEN);

declare_byte_array_type!(BlsSignature, BLS_SIGNATURE_LEN);

declare_byte_array_type!(Secp256k1Signature, SECP256K1_SIGNATURE_LEN);
