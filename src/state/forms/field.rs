//! Registration field names and their presentation metadata

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a field is edited on the entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Free text input rendered masked unless revealed
    Secret,
    /// Choice from a dropdown list
    Select,
    /// Filled in by the form itself, never typed
    Derived,
}

/// Raised when a wire name does not match any registration field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

/// The eleven attributes of a registration.
///
/// Declaration order is the canonical order: it drives iteration in
/// [`FieldName::ALL`], the ordering of error maps and the on-screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    CountryCode,
    PhoneNumber,
    Country,
    City,
    PanNumber,
    AadharNumber,
}

impl FieldName {
    /// Every field, in canonical order
    pub const ALL: [FieldName; 11] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::CountryCode,
        FieldName::PhoneNumber,
        FieldName::Country,
        FieldName::City,
        FieldName::PanNumber,
        FieldName::AadharNumber,
    ];

    /// Wire name, as used in the stored record
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::CountryCode => "countryCode",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::PanNumber => "panNumber",
            Self::AadharNumber => "aadharNumber",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::CountryCode => "Code",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::PanNumber => "PAN Number",
            Self::AadharNumber => "Aadhar Number",
        }
    }

    /// Hint rendered while the input is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Username => "Choose a username",
            Self::Email => "Enter your email address",
            Self::Password => "Enter your password",
            Self::CountryCode => "+91",
            Self::PhoneNumber => "Enter your phone number",
            Self::Country => "Select a country",
            Self::City => "Select a city",
            Self::PanNumber => "ABCDE1234F",
            Self::AadharNumber => "123456789012",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            Self::CountryCode => FieldKind::Derived,
            _ => FieldKind::Text,
        }
    }

    /// Maximum number of characters the input accepts, if capped
    pub fn max_length(self) -> Option<usize> {
        match self {
            Self::PanNumber => Some(10),
            Self::AadharNumber => Some(12),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
