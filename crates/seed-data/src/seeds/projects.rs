//! Crowdfunding project seeding.

use tracing::info;

use crate::db::{SeedError, Seeder};
use crate::models::{Project, ProjectDetails, ProjectStatus, TokenAddress};

/// Contribution token shared by every sample project (DAI).
pub const CONTRIBUTION_TOKEN_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

struct SampleProject<'a> {
    name: &'a str,
    description: &'a str,
    status: ProjectStatus,
    target_amount: i64,
    raised_amount: i64,
    impact_token_address: &'a str,
    impact_target: &'a str,
    financial_projection: &'a str,
    non_profit_mandate: &'a str,
    image_url: &'a str,
}

impl SampleProject<'_> {
    fn build(self) -> Result<Project, SeedError> {
        Ok(Project {
            name: self.name.to_string(),
            description: self.description.to_string(),
            status: self.status,
            target_amount: self.target_amount,
            raised_amount: self.raised_amount,
            contribution_token_address: TokenAddress::parse(CONTRIBUTION_TOKEN_ADDRESS)?,
            impact_token_address: TokenAddress::parse(self.impact_token_address)?,
            project_details: ProjectDetails {
                impact_target: self.impact_target.to_string(),
                financial_projection: self.financial_projection.to_string(),
                non_profit_mandate: self.non_profit_mandate.to_string(),
            },
            image_url: self.image_url.to_string(),
        })
    }
}

/// Returns the sample projects, in insertion order.
pub fn sample_projects() -> Result<Vec<Project>, SeedError> {
    [
        SampleProject {
            name: "Libertas Alpha Water Project (LAWP)",
            description: "Foundational pilot MVI for a decentralized, non-profit water consumption culture, replacing single-use plastic sachets with a durable dispenser can.",
            status: ProjectStatus::Live,
            target_amount: 50_000_000,
            raised_amount: 37_500_000,
            impact_token_address: "0x1234567890123456789012345678901234567890",
            impact_target: "Prevent 1,000,000 pieces of plastic waste and enable clean water access",
            financial_projection: "208.1% accumulated ROI in 36 months via Impact Operational Grants",
            non_profit_mandate: "LTD/GTE compliant with Multi-Signature Community Treasury Smart Contract",
            image_url: "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=500&h=300&fit=crop",
        },
        SampleProject {
            name: "Community Solar Initiative",
            description: "Decentralized renewable energy project bringing solar power to underserved communities across Africa.",
            status: ProjectStatus::Live,
            target_amount: 75_000_000,
            raised_amount: 45_000_000,
            impact_token_address: "0x2345678901234567890123456789012345678901",
            impact_target: "Provide clean energy to 50,000 households",
            financial_projection: "150% ROI in 24 months",
            non_profit_mandate: "Community-owned cooperative structure",
            image_url: "https://images.unsplash.com/photo-1509391366360-2e938aa1ef14?w=500&h=300&fit=crop",
        },
        SampleProject {
            name: "Education for All",
            description: "Global initiative to provide quality education and digital literacy training to underprivileged youth.",
            status: ProjectStatus::ComingSoon,
            target_amount: 100_000_000,
            raised_amount: 0,
            impact_token_address: "0x3456789012345678901234567890123456789012",
            impact_target: "Educate 100,000 students globally",
            financial_projection: "Sustainable impact model with 5-year ROI",
            non_profit_mandate: "NGO partnership framework",
            image_url: "https://images.unsplash.com/photo-1427504494785-cdae8dfb7d5b?w=500&h=300&fit=crop",
        },
        SampleProject {
            name: "Ocean Cleanup Network",
            description: "Decentralized network for cleaning and preserving ocean ecosystems through community participation.",
            status: ProjectStatus::Live,
            target_amount: 60_000_000,
            raised_amount: 30_000_000,
            impact_token_address: "0x4567890123456789012345678901234567890123",
            impact_target: "Remove 500 tons of plastic from oceans",
            financial_projection: "175% ROI in 30 months",
            non_profit_mandate: "Marine conservation cooperative",
            image_url: "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=500&h=300&fit=crop",
        },
    ]
    .into_iter()
    .map(SampleProject::build)
    .collect()
}

/// Appends the sample projects. Not idempotent: every run adds another copy.
pub async fn seed(seeder: &Seeder) -> Result<usize, SeedError> {
    let projects = sample_projects()?;
    let inserted = seeder.seed_all(&projects).await?;

    info!("Database seeded successfully!");
    Ok(inserted)
}
