use serde_json::Value;

use super::{
    as_object, contact_number, optional_bool, optional_timestamp, required_text, ValidationError,
};
use crate::models::{FoodType, NewDonation};

/// Validate a donation creation body.
///
/// `id`, `createdAt` and `status` are server-owned and ignored if present.
pub fn validate_donation_input(raw: &Value) -> Result<NewDonation, ValidationError> {
    let obj = as_object(raw)?;

    let donor_name = required_text(obj, "donorName", "Donor name")?;
    let contact_number = contact_number(obj, "contactNumber")?;
    let food_type = {
        let value = required_text(obj, "foodType", "Food type")?;
        FoodType::from_str(&value).ok_or_else(|| {
            let allowed: Vec<&str> = FoodType::ALL.iter().map(|t| t.as_str()).collect();
            ValidationError::new(
                "foodType",
                format!("Food type must be one of {}", allowed.join(", ")),
            )
        })?
    };
    let quantity = required_text(obj, "quantity", "Quantity")?;
    let city = required_text(obj, "city", "City")?;
    let area = required_text(obj, "area", "Area")?;
    let is_fresh = optional_bool(obj, "isFresh", true)?;
    let safe_until = optional_timestamp(obj, "safeUntil")?;

    Ok(NewDonation {
        donor_name,
        contact_number,
        food_type,
        quantity,
        city,
        area,
        is_fresh,
        safe_until,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "donorName": "A",
            "contactNumber": "123",
            "foodType": "Cooked",
            "quantity": "10",
            "city": "X",
            "area": "Y",
            "isFresh": true
        })
    }

    fn failing_field(body: Value) -> Option<String> {
        validate_donation_input(&body).unwrap_err().field
    }

    #[test]
    fn test_valid_input() {
        let d = validate_donation_input(&valid()).unwrap();
        assert_eq!(d.donor_name, "A");
        assert_eq!(d.contact_number, "123");
        assert_eq!(d.food_type, FoodType::Cooked);
        assert_eq!(d.quantity, "10");
        assert_eq!(d.city, "X");
        assert_eq!(d.area, "Y");
        assert!(d.is_fresh);
        assert!(d.safe_until.is_none());
    }

    #[test]
    fn test_missing_donor_name() {
        assert_eq!(
            failing_field(json!({ "contactNumber": "123" })).as_deref(),
            Some("donorName")
        );

        let mut body = valid();
        body.as_object_mut().unwrap().remove("donorName");
        assert_eq!(failing_field(body).as_deref(), Some("donorName"));
    }

    #[test]
    fn test_first_failure_wins() {
        // Both contactNumber and city are bad; contactNumber is declared first.
        let mut body = valid();
        body["contactNumber"] = json!("call me");
        body["city"] = json!(42);
        assert_eq!(failing_field(body).as_deref(), Some("contactNumber"));
    }

    #[test]
    fn test_each_field_reported() {
        let cases = [
            ("contactNumber", json!(9876543210u64)),
            ("foodType", json!("Frozen")),
            ("quantity", json!("")),
            ("city", json!(null)),
            ("area", json!(["Y"])),
            ("isFresh", json!("yes")),
            ("safeUntil", json!("tomorrow")),
        ];
        for (field, value) in cases {
            let mut body = valid();
            body[field] = value;
            assert_eq!(failing_field(body).as_deref(), Some(field), "field {}", field);
        }
    }

    #[test]
    fn test_is_fresh_defaults_to_true() {
        let mut body = valid();
        body.as_object_mut().unwrap().remove("isFresh");
        assert!(validate_donation_input(&body).unwrap().is_fresh);
    }

    #[test]
    fn test_safe_until_parsed_to_utc() {
        let mut body = valid();
        body["safeUntil"] = json!("2026-10-15T20:00:00+05:30");
        let d = validate_donation_input(&body).unwrap();
        assert_eq!(
            d.safe_until,
            Some(Utc.with_ymd_and_hms(2026, 10, 15, 14, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_server_owned_fields_ignored() {
        let mut body = valid();
        body["id"] = json!("client-chosen");
        body["status"] = json!("Delivered");
        assert!(validate_donation_input(&body).is_ok());
    }

    #[test]
    fn test_non_object_body() {
        let err = validate_donation_input(&json!("donation")).unwrap_err();
        assert!(err.field.is_none());
    }
}
