//! Donation model matching the frontend Donation interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of food being offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodType {
    Cooked,
    Packed,
    Raw,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Cooked, FoodType::Packed, FoodType::Raw];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Cooked => "Cooked",
            FoodType::Packed => "Packed",
            FoodType::Raw => "Raw",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Cooked" => Some(FoodType::Cooked),
            "Packed" => Some(FoodType::Packed),
            "Raw" => Some(FoodType::Raw),
            _ => None,
        }
    }
}

/// Lifecycle status of a donation. Transitions are owned by external collaborators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DonationStatus {
    #[default]
    Pending,
    Accepted,
    Delivered,
    Expired,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::Accepted => "Accepted",
            DonationStatus::Delivered => "Delivered",
            DonationStatus::Expired => "Expired",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(DonationStatus::Pending),
            "Accepted" => Some(DonationStatus::Accepted),
            "Delivered" => Some(DonationStatus::Delivered),
            "Expired" => Some(DonationStatus::Expired),
            _ => None,
        }
    }

    /// Whether the donation has left the pool of food that can still be handed out.
    pub fn is_closed(&self) -> bool {
        matches!(self, DonationStatus::Delivered | DonationStatus::Expired)
    }
}

/// A donor's offer of food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_name: String,
    pub contact_number: String,
    pub food_type: FoodType,
    pub quantity: String,
    pub city: String,
    pub area: String,
    pub is_fresh: bool,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
    pub safe_until: Option<DateTime<Utc>>,
}

impl Donation {
    /// Inventory predicate: fresh, not past `safe_until`, and neither delivered nor expired.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.is_fresh
            && self.safe_until.map_or(true, |until| until > now)
            && !self.status.is_closed()
    }
}

/// Validated fields for creating a donation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub donor_name: String,
    pub contact_number: String,
    pub food_type: FoodType,
    pub quantity: String,
    pub city: String,
    pub area: String,
    pub is_fresh: bool,
    pub safe_until: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn donation(is_fresh: bool, status: DonationStatus, safe_until: Option<DateTime<Utc>>) -> Donation {
        Donation {
            id: "d-1".to_string(),
            donor_name: "Anjali's Kitchen".to_string(),
            contact_number: "9876543210".to_string(),
            food_type: FoodType::Cooked,
            quantity: "For 50 people".to_string(),
            city: "Mumbai".to_string(),
            area: "Andheri West".to_string(),
            is_fresh,
            status,
            created_at: Utc::now(),
            safe_until,
        }
    }

    #[test]
    fn test_fresh_pending_without_deadline_is_available() {
        let d = donation(true, DonationStatus::Pending, None);
        assert!(d.is_available(Utc::now()));
    }

    #[test]
    fn test_not_fresh_is_unavailable() {
        let d = donation(false, DonationStatus::Pending, None);
        assert!(!d.is_available(Utc::now()));
    }

    #[test]
    fn test_safe_until_boundary() {
        let now = Utc::now();
        assert!(donation(true, DonationStatus::Accepted, Some(now + Duration::hours(2))).is_available(now));
        assert!(!donation(true, DonationStatus::Pending, Some(now)).is_available(now));
        assert!(!donation(true, DonationStatus::Pending, Some(now - Duration::minutes(1))).is_available(now));
    }

    #[test]
    fn test_closed_statuses_are_unavailable() {
        let now = Utc::now();
        assert!(!donation(true, DonationStatus::Delivered, None).is_available(now));
        assert!(!donation(true, DonationStatus::Expired, None).is_available(now));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(donation(true, DonationStatus::Pending, None)).unwrap();
        assert_eq!(json["donorName"], "Anjali's Kitchen");
        assert_eq!(json["foodType"], "Cooked");
        assert_eq!(json["isFresh"], true);
        assert_eq!(json["status"], "Pending");
        assert!(json["safeUntil"].is_null());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            DonationStatus::Pending,
            DonationStatus::Accepted,
            DonationStatus::Delivered,
            DonationStatus::Expired,
        ] {
            assert_eq!(DonationStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(DonationStatus::from_str("Lost"), None);
    }
}
