//! Macro for implementing Display and FromStr for path-segment enums
//!
//! Several endpoints take a fixed vocabulary as a path segment (report
//! granularity, zone kind). The macro maps each variant to its wire string
//! and parses it back case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use maxcdn_domain::impl_path_segment_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ZoneKind {
//!     Pull,
//!     Push,
//! }
//!
//! impl_path_segment_conversions!(ZoneKind {
//!     Pull => "pull",
//!     Push => "push",
//! });
//!
//! assert_eq!(ZoneKind::Pull.to_string(), "pull");
//! assert_eq!("PUSH".parse::<ZoneKind>(), Ok(ZoneKind::Push));
//! ```

/// Implements Display and FromStr for enums used as URL path segments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase wire
///   strings
#[macro_export]
macro_rules! impl_path_segment_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
