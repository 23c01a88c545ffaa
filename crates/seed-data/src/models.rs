//! Record types for the seeded tables.

use serde::Serialize;

use crate::db::{SeedError, SeedRecord, SqlValue};

/// A bank account that receives contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub account_name: String,
    pub bank_name: String,
    pub account_number: String,
    /// Only domestic US accounts carry a routing number.
    pub routing_number: Option<String>,
    pub swift_code: String,
    pub iban: String,
    pub country: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub is_active: bool,
}

impl SeedRecord for BankAccount {
    const TABLE: &'static str = "bankAccounts";
    const COLUMNS: &'static [&'static str] = &[
        "accountName",
        "bankName",
        "accountNumber",
        "routingNumber",
        "swiftCode",
        "iban",
        "country",
        "currency",
        "isActive",
    ];

    fn values(&self) -> Result<Vec<SqlValue>, SeedError> {
        Ok(vec![
            SqlValue::Text(self.account_name.clone()),
            SqlValue::Text(self.bank_name.clone()),
            SqlValue::Text(self.account_number.clone()),
            SqlValue::NullableText(self.routing_number.clone()),
            SqlValue::Text(self.swift_code.clone()),
            SqlValue::Text(self.iban.clone()),
            SqlValue::Text(self.country.clone()),
            SqlValue::Text(self.currency.clone()),
            // Stored as a 0/1 integer flag
            SqlValue::Int(i32::from(self.is_active)),
        ])
    }
}

/// Funding status of a project, matching the database strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    ComingSoon,
}

impl ProjectStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "live",
            ProjectStatus::ComingSoon => "coming_soon",
        }
    }
}

/// An EVM contract address: `0x` followed by 40 hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn parse(address: &str) -> Result<Self, SeedError> {
        let digits = address
            .strip_prefix("0x")
            .ok_or_else(|| SeedError::InvalidRecord(format!("token address {address} lacks 0x")))?;

        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SeedError::InvalidRecord(format!(
                "token address {address} must have 40 hex digits"
            )));
        }

        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text project summary, stored as a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub impact_target: String,
    pub financial_projection: String,
    pub non_profit_mandate: String,
}

/// A crowdfunding project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Funding goal in whole currency units.
    pub target_amount: i64,
    /// Amount raised so far, same unit as `target_amount`.
    pub raised_amount: i64,
    pub contribution_token_address: TokenAddress,
    pub impact_token_address: TokenAddress,
    pub project_details: ProjectDetails,
    pub image_url: String,
}

impl SeedRecord for Project {
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "status",
        "targetAmount",
        "raisedAmount",
        "contributionTokenAddress",
        "impactTokenAddress",
        "projectDetails",
        "imageUrl",
    ];

    fn values(&self) -> Result<Vec<SqlValue>, SeedError> {
        Ok(vec![
            SqlValue::Text(self.name.clone()),
            SqlValue::Text(self.description.clone()),
            SqlValue::Text(self.status.as_str().to_string()),
            SqlValue::BigInt(self.target_amount),
            SqlValue::BigInt(self.raised_amount),
            SqlValue::Text(self.contribution_token_address.as_str().to_string()),
            SqlValue::Text(self.impact_token_address.as_str().to_string()),
            SqlValue::Text(serde_json::to_string(&self.project_details)?),
            SqlValue::Text(self.image_url.clone()),
        ])
    }
}
