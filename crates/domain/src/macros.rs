//! Macro for implementing Display and FromStr for fieldless domain enums
//!
//! Roles, notification kinds and provider kinds all travel as stable string
//! identifiers (settings files, environment variables, logs). This macro keeps
//! the mapping in one place per enum.
//!
//! # Example
//!
//! ```rust
//! use leavebridge_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Early,
//!     Late,
//! }
//!
//! impl_domain_enum_conversions!(Shift {
//!     Early => "EARLY",
//!     Late => "LATE",
//! });
//!
//! assert_eq!(Shift::Late.to_string(), "LATE");
//! assert_eq!("early".parse::<Shift>(), Ok(Shift::Early));
//! ```

/// Implements Display and FromStr traits for fieldless enums
///
/// - Display writes the mapped string verbatim
/// - FromStr matches ASCII case-insensitively and trims surrounding whitespace
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable string identifier of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
