//! Semantic type tags for sensitive columns.
//!
//! Each tag is bound to exactly one value generator. The canonical string
//! form is the tag used in configuration files and on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of sensitive value held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SemanticType {
    /// Full person name.
    #[serde(rename = "name")]
    Name,
    /// Postal address on a single line.
    #[serde(rename = "address")]
    Address,
    /// Payment card number.
    #[serde(rename = "creditcard")]
    CreditCard,
    /// Telephone number.
    #[serde(rename = "phone_number")]
    PhoneNumber,
    /// Timestamp.
    #[serde(rename = "date_time")]
    DateTime,
    /// E-mail address.
    #[serde(rename = "e-mail_address")]
    Email,
    /// IPv4 address.
    #[serde(rename = "ipv4_address")]
    IPv4,
    /// MAC address.
    #[serde(rename = "mac_address")]
    MacAddress,
    /// Web URL.
    #[serde(rename = "url")]
    Url,
    /// Account user name.
    #[serde(rename = "username")]
    Username,
    /// International bank account number.
    #[serde(rename = "IBAN")]
    Iban,
}

impl SemanticType {
    /// Every semantic type in classifier keyword order.
    pub const ALL: [SemanticType; 11] = [
        SemanticType::Name,
        SemanticType::Address,
        SemanticType::CreditCard,
        SemanticType::PhoneNumber,
        SemanticType::DateTime,
        SemanticType::Email,
        SemanticType::IPv4,
        SemanticType::MacAddress,
        SemanticType::Url,
        SemanticType::Username,
        SemanticType::Iban,
    ];

    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Name => "name",
            SemanticType::Address => "address",
            SemanticType::CreditCard => "creditcard",
            SemanticType::PhoneNumber => "phone_number",
            SemanticType::DateTime => "date_time",
            SemanticType::Email => "e-mail_address",
            SemanticType::IPv4 => "ipv4_address",
            SemanticType::MacAddress => "mac_address",
            SemanticType::Url => "url",
            SemanticType::Username => "username",
            SemanticType::Iban => "IBAN",
        }
    }

    /// Lower-case substring that marks a column name as holding this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            SemanticType::Name => "name",
            SemanticType::Address => "address",
            SemanticType::CreditCard => "credit",
            SemanticType::PhoneNumber => "phone",
            SemanticType::DateTime => "date",
            SemanticType::Email => "mail",
            SemanticType::IPv4 => "ip",
            SemanticType::MacAddress => "mac",
            SemanticType::Url => "url",
            SemanticType::Username => "user",
            SemanticType::Iban => "iban",
        }
    }

    /// Short human description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            SemanticType::Name => "Person name",
            SemanticType::Address => "Postal address",
            SemanticType::CreditCard => "Credit card number",
            SemanticType::PhoneNumber => "Phone number",
            SemanticType::DateTime => "Date and time",
            SemanticType::Email => "Free e-mail address",
            SemanticType::IPv4 => "IPv4 address",
            SemanticType::MacAddress => "MAC address",
            SemanticType::Url => "URL",
            SemanticType::Username => "User name",
            SemanticType::Iban => "IBAN",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    /// Parse a tag case-insensitively. Accepts canonical tags and the
    /// common spellings of each variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "name" => Ok(SemanticType::Name),
            "address" => Ok(SemanticType::Address),
            "creditcard" | "credit_card" => Ok(SemanticType::CreditCard),
            "phone_number" | "phone" | "phonenumber" => Ok(SemanticType::PhoneNumber),
            "date_time" | "datetime" | "date" => Ok(SemanticType::DateTime),
            "e_mail_address" | "email" | "e_mail" | "mail" => Ok(SemanticType::Email),
            "ipv4_address" | "ipv4" | "ip" => Ok(SemanticType::IPv4),
            "mac_address" | "mac" | "macaddress" => Ok(SemanticType::MacAddress),
            "url" => Ok(SemanticType::Url),
            "username" | "user_name" | "user" => Ok(SemanticType::Username),
            "iban" => Ok(SemanticType::Iban),
            _ => Err(ModelError::UnknownSemanticType(s.to_string())),
        }
    }
}
