//! Bank account seeding.

use tracing::info;

use crate::db::{SeedError, SeedOutcome, Seeder};
use crate::models::BankAccount;

/// Returns the sample bank accounts, in insertion order.
pub fn sample_accounts() -> Vec<BankAccount> {
    vec![
        BankAccount {
            account_name: "Libertas Alpha Technologies".to_string(),
            bank_name: "Global Impact Bank".to_string(),
            account_number: "1234567890".to_string(),
            routing_number: Some("021000021".to_string()),
            swift_code: "GIBAUS33".to_string(),
            iban: "US12GIBA0001234567890".to_string(),
            country: "United States".to_string(),
            currency: "USD".to_string(),
            is_active: true,
        },
        BankAccount {
            account_name: "Libertas Alpha Europe".to_string(),
            bank_name: "European Impact Finance".to_string(),
            account_number: "DE89370400440532013000".to_string(),
            routing_number: None,
            swift_code: "EIFADE33".to_string(),
            iban: "DE89370400440532013000".to_string(),
            country: "Germany".to_string(),
            currency: "EUR".to_string(),
            is_active: true,
        },
    ]
}

/// Seeds the sample accounts unless the table already has rows.
pub async fn seed(seeder: &Seeder) -> Result<SeedOutcome, SeedError> {
    let outcome = seeder.seed_if_empty(&sample_accounts()).await?;

    match outcome {
        SeedOutcome::Skipped { .. } => info!("Bank accounts already exist, skipping seed"),
        SeedOutcome::Inserted { .. } => info!("Bank accounts seeded successfully!"),
    }

    Ok(outcome)
}
