//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing identifiers from different entity types. Both raw
//! ids and player ids are opaque strings assigned by external systems, so
//! the wrappers are string-backed and never validated here.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use coderaw_core::define_id;
/// define_id!(RawId);
/// define_id!(PlayerId);
///
/// let raw_id = RawId::new("-OcfVWoCNOj7-B-kxUO8");
/// let player_id = PlayerId::new("123456");
///
/// // These are different types, so this won't compile:
/// // let _: RawId = player_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper, returning the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(RawId);
define_id!(PlayerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_id_roundtrip() {
        let id = RawId::new("-OcfVWoCNOj7-B-kxUO8");
        assert_eq!(id.as_str(), "-OcfVWoCNOj7-B-kxUO8");
        assert_eq!(id.to_string(), "-OcfVWoCNOj7-B-kxUO8");
        assert_eq!(String::from(id), "-OcfVWoCNOj7-B-kxUO8");
    }

    #[test]
    fn test_player_id_equality() {
        assert_eq!(PlayerId::new("123456"), PlayerId::from("123456"));
        assert_ne!(PlayerId::new("123456"), PlayerId::new("654321"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = PlayerId::new("42");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"42\"");

        let back: PlayerId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
