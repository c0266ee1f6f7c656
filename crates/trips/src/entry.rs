use serde::{Deserialize, Serialize};

use portal_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoCoords {
    pub lat: String,
    pub lng: String,
}

/// One trip with a company car, as submitted by the trip form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripEntry {
    pub name: String,
    pub vehicle: String,
    pub destination: String,
    pub date_start: String,
    pub time_start: String,
    pub date_end: String,
    pub time_end: String,
    pub purpose: String,
    pub km_start: i64,
    pub km_end: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoCoords>,
}

impl TripEntry {
    pub fn validate(&self) -> DomainResult<()> {
        let required = [&self.name, &self.destination, &self.date_start, &self.date_end, &self.purpose];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(DomainError::validation("Missing required fields"));
        }

        if self.km_start < 0 || self.km_end < 0 {
            return Err(DomainError::validation("Kilometers must not be negative"));
        }

        if self.km_end < self.km_start {
            return Err(DomainError::validation(
                "End kilometers must be greater than or equal to start kilometers",
            ));
        }

        Ok(())
    }

    pub fn distance_km(&self) -> i64 {
        self.km_end.saturating_sub(self.km_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TripEntry {
        TripEntry {
            name: "Jan Novák".to_string(),
            vehicle: "Octavia 1AB 2345".to_string(),
            destination: "Brno".to_string(),
            date_start: "2025-03-05".to_string(),
            time_start: "07:30".to_string(),
            date_end: "2025-03-05".to_string(),
            time_end: "16:45".to_string(),
            purpose: "Jednání se zákazníkem".to_string(),
            km_start: 12_000,
            km_end: 12_240,
            coordinates: None,
        }
    }

    #[test]
    fn complete_entry_is_valid() {
        assert!(entry().validate().is_ok());
        assert_eq!(entry().distance_km(), 240);
    }

    #[test]
    fn vehicle_and_times_are_optional() {
        let mut e = entry();
        e.vehicle.clear();
        e.time_start.clear();
        assert!(e.validate().is_ok());
    }

    #[test]
    fn missing_purpose_is_rejected() {
        let mut e = entry();
        e.purpose = " ".to_string();
        assert_eq!(e.validate().unwrap_err().to_string(), "Missing required fields");
    }

    #[test]
    fn odometer_cannot_go_backwards() {
        let mut e = entry();
        e.km_end = e.km_start - 1;
        assert!(e.validate().is_err());
        e.km_end = e.km_start;
        assert!(e.validate().is_ok());
    }

    #[test]
    fn negative_odometer_is_rejected() {
        let e: TripEntry = serde_json::from_str(
            r#"{"name":"Eva","destination":"Praha","date_start":"2025-03-05","date_end":"2025-03-05",
                "purpose":"Školení","km_start":-9000000000000000000,"km_end":9000000000000000000}"#,
        )
        .unwrap();
        assert_eq!(e.validate().unwrap_err().to_string(), "Kilometers must not be negative");
        assert_eq!(e.distance_km(), i64::MAX);
    }

    #[test]
    fn decodes_form_payload() {
        let e: TripEntry = serde_json::from_str(
            r#"{"name":"Eva","destination":"Praha","date_start":"2025-03-05","date_end":"2025-03-06",
                "purpose":"Školení","km_start":100,"km_end":410,"coordinates":{"lat":"49.05","lng":"17.47"}}"#,
        )
        .unwrap();
        assert_eq!(e.distance_km(), 310);
        assert_eq!(e.coordinates.unwrap().lng, "17.47");
    }
}
