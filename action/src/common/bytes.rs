//! Fixed-size byte array types.

/// Define a fixed-size byte array type with hex formatting and a CBOR byte
/// string encoding.
///
/// # Examples
///
/// ```rust,ignore
/// impl_bytes!(PublicKey, 32, "An Ed25519 public key.");
/// ```
#[macro_export]
macro_rules! impl_bytes {
    ($name:ident, $size:expr, $doc:expr) => {
        #[doc=$doc]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; $size]);

        impl $name {
            /// Size of this object in bytes.
            pub const fn len() -> usize {
                $size
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name([0; $size])
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(b: $name) -> Self {
                b.0
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(b: [u8; $size]) -> $name {
                $name(b)
            }
        }

        impl ::std::convert::TryFrom<&[u8]> for $name {
            type Error = ::std::array::TryFromSliceError;

            fn try_from(b: &[u8]) -> Result<$name, Self::Error> {
                Ok($name(b.try_into()?))
            }
        }

        impl From<&'static str> for $name {
            fn from(s: &'static str) -> $name {
                s.strip_prefix("0x").unwrap_or(s).parse().unwrap()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::rustc_hex::FromHexError;

            fn from_str(s: &str) -> Result<$name, ::rustc_hex::FromHexError> {
                use ::rustc_hex::FromHex;

                let a: Vec<u8> = s.from_hex()?;
                if a.len() != $size {
                    return Err(::rustc_hex::FromHexError::InvalidHexLength);
                }

                let mut ret = [0; $size];
                ret.copy_from_slice(&a);
                Ok($name(ret))
            }
        }

        impl ::core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                for i in &self.0[..] {
                    write!(f, "{:02x}", i)?;
                }
                Ok(())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                ::core::fmt::LowerHex::fmt(self, f)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                ::core::fmt::LowerHex::fmt(self, f)
            }
        }

        impl $crate::cbor::Encode for $name {
            fn into_cbor_value(self) -> $crate::cbor::Value {
                $crate::cbor::Value::ByteString(self.0.into())
            }
        }

        impl $crate::cbor::Decode for $name {
            fn try_default() -> Result<Self, $crate::cbor::DecodeError> {
                Ok(Default::default())
            }

            fn try_from_cbor_value(
                value: $crate::cbor::Value,
            ) -> Result<Self, $crate::cbor::DecodeError> {
                match value {
                    $crate::cbor::Value::ByteString(data) => Ok(Self(
                        data.try_into()
                            .map_err(|_| $crate::cbor::DecodeError::UnexpectedType)?,
                    )),
                    _ => Err($crate::cbor::DecodeError::UnexpectedType),
                }
            }
        }
    };
}
