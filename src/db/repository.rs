//! Database repository for donations and NGO requests.
//!
//! Records are append-only: created once, listed in insertion order, never updated.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Donation, DonationStatus, FoodType, NewDonation, NewNgoRequest, NgoRequest, RequestStatus,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== DONATION OPERATIONS ====================

    /// List all donations in insertion order.
    pub async fn list_donations(&self) -> Result<Vec<Donation>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, donor_name, contact_number, food_type, quantity, city, area,
                      is_fresh, status, created_at, safe_until
               FROM donations ORDER BY rowid"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(donation_from_row).collect()
    }

    /// Create a new donation with a fresh ID and creation time.
    pub async fn create_donation(&self, new: &NewDonation) -> Result<Donation, AppError> {
        let donation = Donation {
            id: uuid::Uuid::new_v4().to_string(),
            donor_name: new.donor_name.clone(),
            contact_number: new.contact_number.clone(),
            food_type: new.food_type,
            quantity: new.quantity.clone(),
            city: new.city.clone(),
            area: new.area.clone(),
            is_fresh: new.is_fresh,
            status: DonationStatus::default(),
            created_at: now(),
            safe_until: new.safe_until,
        };

        sqlx::query(
            r#"INSERT INTO donations (
                id, donor_name, contact_number, food_type, quantity, city, area,
                is_fresh, status, created_at, safe_until
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&donation.id)
        .bind(&donation.donor_name)
        .bind(&donation.contact_number)
        .bind(donation.food_type.as_str())
        .bind(&donation.quantity)
        .bind(&donation.city)
        .bind(&donation.area)
        .bind(donation.is_fresh as i32)
        .bind(donation.status.as_str())
        .bind(format_timestamp(&donation.created_at))
        .bind(donation.safe_until.as_ref().map(format_timestamp))
        .execute(&self.pool)
        .await?;

        tracing::debug!("Created donation {}", donation.id);
        Ok(donation)
    }

    /// Donations currently available for pickup, recomputed on every call.
    pub async fn list_inventory(&self) -> Result<Vec<Donation>, AppError> {
        let now = Utc::now();
        let donations = self.list_donations().await?;
        Ok(donations
            .into_iter()
            .filter(|d| d.is_available(now))
            .collect())
    }

    // ==================== NGO REQUEST OPERATIONS ====================

    /// List all NGO requests in insertion order.
    pub async fn list_ngo_requests(&self) -> Result<Vec<NgoRequest>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, ngo_name, contact_number, requirements, city, status, created_at
               FROM ngo_requests ORDER BY rowid"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(ngo_request_from_row).collect()
    }

    /// Create a new NGO request.
    pub async fn create_ngo_request(&self, new: &NewNgoRequest) -> Result<NgoRequest, AppError> {
        let request = NgoRequest {
            id: uuid::Uuid::new_v4().to_string(),
            ngo_name: new.ngo_name.clone(),
            contact_number: new.contact_number.clone(),
            requirements: new.requirements.clone(),
            city: new.city.clone(),
            status: RequestStatus::default(),
            created_at: now(),
        };

        sqlx::query(
            "INSERT INTO ngo_requests (id, ngo_name, contact_number, requirements, city, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&request.id)
        .bind(&request.ngo_name)
        .bind(&request.contact_number)
        .bind(&request.requirements)
        .bind(&request.city)
        .bind(request.status.as_str())
        .bind(format_timestamp(&request.created_at))
        .execute(&self.pool)
        .await?;

        tracing::debug!("Created NGO request {}", request.id);
        Ok(request)
    }
}

// Server-assigned times are cut to milliseconds. Client-supplied ones are
// stored at full precision; AutoSi keeps every nonzero subsecond digit.

fn now() -> DateTime<Utc> {
    use chrono::SubsecRound;
    Utc::now().trunc_subsecs(3)
}

fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Internal(format!("Invalid timestamp in {}: {}", column, e)))
}

// Helper functions for row conversion

fn donation_from_row(row: &SqliteRow) -> Result<Donation, AppError> {
    let food_type: String = row.try_get("food_type")?;
    let status: String = row.try_get("status")?;
    let is_fresh: i32 = row.try_get("is_fresh")?;
    let created_at: String = row.try_get("created_at")?;
    let safe_until: Option<String> = row.try_get("safe_until")?;

    Ok(Donation {
        id: row.try_get("id")?,
        donor_name: row.try_get("donor_name")?,
        contact_number: row.try_get("contact_number")?,
        food_type: FoodType::from_str(&food_type)
            .ok_or_else(|| AppError::Internal(format!("Unknown food type {}", food_type)))?,
        quantity: row.try_get("quantity")?,
        city: row.try_get("city")?,
        area: row.try_get("area")?,
        is_fresh: is_fresh != 0,
        status: DonationStatus::from_str(&status)
            .ok_or_else(|| AppError::Internal(format!("Unknown donation status {}", status)))?,
        created_at: parse_timestamp("created_at", &created_at)?,
        safe_until: safe_until
            .map(|s| parse_timestamp("safe_until", &s))
            .transpose()?,
    })
}

fn ngo_request_from_row(row: &SqliteRow) -> Result<NgoRequest, AppError> {
    let status: String = row.try_get("status")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(NgoRequest {
        id: row.try_get("id")?,
        ngo_name: row.try_get("ngo_name")?,
        contact_number: row.try_get("contact_number")?,
        requirements: row.try_get("requirements")?,
        city: row.try_get("city")?,
        status: RequestStatus::from_str(&status)
            .ok_or_else(|| AppError::Internal(format!("Unknown request status {}", status)))?,
        created_at: parse_timestamp("created_at", &created_at)?,
    })
}
