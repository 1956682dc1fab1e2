//! Example records for a fresh install.

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{FoodType, NewDonation, NewNgoRequest};

/// Insert example donations and NGO requests into whichever tables are empty.
///
/// Existing data is never touched. Returns the number of records inserted.
pub async fn seed_if_empty(repo: &Repository) -> Result<usize, AppError> {
    let mut inserted = 0;

    if repo.list_donations().await?.is_empty() {
        for donation in example_donations() {
            repo.create_donation(&donation).await?;
            inserted += 1;
        }
    }

    if repo.list_ngo_requests().await?.is_empty() {
        for request in example_ngo_requests() {
            repo.create_ngo_request(&request).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}

fn example_donations() -> Vec<NewDonation> {
    vec![
        NewDonation {
            donor_name: "Anjali's Kitchen".to_string(),
            contact_number: "9876543210".to_string(),
            food_type: FoodType::Cooked,
            quantity: "For 50 people".to_string(),
            city: "Mumbai".to_string(),
            area: "Andheri West".to_string(),
            is_fresh: true,
            safe_until: None,
        },
        NewDonation {
            donor_name: "City Hostel Mess".to_string(),
            contact_number: "9988776655".to_string(),
            food_type: FoodType::Packed,
            quantity: "100 packets of biscuits".to_string(),
            city: "Delhi".to_string(),
            area: "Laxmi Nagar".to_string(),
            is_fresh: true,
            safe_until: None,
        },
    ]
}

fn example_ngo_requests() -> Vec<NewNgoRequest> {
    vec![NewNgoRequest {
        ngo_name: "Helping Hands Foundation".to_string(),
        contact_number: "9123456789".to_string(),
        requirements: "Rice and Dal for 100 children".to_string(),
        city: "Mumbai".to_string(),
    }]
}
