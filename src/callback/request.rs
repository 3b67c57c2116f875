use serde::{Deserialize, Serialize};

use super::error::ValidationError;

pub const MOBILE_DIGITS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "8AM-12PM")]
    Morning,
    #[serde(rename = "12PM-4PM")]
    Midday,
    #[serde(rename = "4PM-8PM")]
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Midday, TimeSlot::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "8AM-12PM",
            TimeSlot::Midday => "12PM-4PM",
            TimeSlot::Evening => "4PM-8PM",
        }
    }

    /// Parses the `<select>` value; the empty placeholder yields `None`.
    pub fn from_value(value: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.into_iter().find(|slot| slot.as_str() == value)
    }
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == MOBILE_DIGITS && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// Form fields as the user is typing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackRequest {
    pub name: String,
    pub mobile: String,
    pub time_slot: Option<TimeSlot>,
}

impl CallbackRequest {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<LeadPayload, ValidationError> {
        if !is_valid_mobile(&self.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let time_slot = self.time_slot.ok_or(ValidationError::MissingTimeSlot)?;
        Ok(LeadPayload {
            name: name.to_string(),
            mobile: self.mobile.clone(),
            time_slot,
        })
    }
}

/// A validated request, exactly as it goes on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub mobile: String,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlot,
}

impl LeadPayload {
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("mobile", self.mobile.as_str()),
            ("timeSlot", self.time_slot.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CallbackRequest {
        CallbackRequest {
            name: "Asha Rao".to_string(),
            mobile: "9876543210".to_string(),
            time_slot: Some(TimeSlot::Midday),
        }
    }

    #[test]
    fn mobile_accepts_exactly_ten_ascii_digits() {
        assert!(is_valid_mobile("0123456789"));
        assert!(is_valid_mobile("9999999999"));
    }

    #[test]
    fn mobile_rejects_everything_else() {
        for bad in [
            "",
            "abcdefghij",
            "987654321",
            "98765432101",
            "98765-43210",
            "+919876543",
            "98765 4321",
            "987654321a",
            "٩٨٧٦٥٤٣٢١٠",
        ] {
            assert!(!is_valid_mobile(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn validation_checks_mobile_before_anything_else() {
        let request = CallbackRequest {
            mobile: "12345".to_string(),
            ..CallbackRequest::default()
        };
        assert_eq!(request.validate(), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn validation_requires_name_and_slot() {
        let mut request = filled();
        request.name = "   ".to_string();
        assert_eq!(request.validate(), Err(ValidationError::EmptyName));

        let mut request = filled();
        request.time_slot = None;
        assert_eq!(request.validate(), Err(ValidationError::MissingTimeSlot));
    }

    #[test]
    fn payload_trims_name_and_keeps_wire_names() {
        let mut request = filled();
        request.name = "  Asha Rao ".to_string();
        let payload = request.validate().unwrap();
        assert_eq!(payload.name, "Asha Rao");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Asha Rao",
                "mobile": "9876543210",
                "timeSlot": "12PM-4PM",
            })
        );
        assert_eq!(
            payload.form_fields(),
            [("name", "Asha Rao"), ("mobile", "9876543210"), ("timeSlot", "12PM-4PM")]
        );
    }

    #[test]
    fn time_slot_parses_select_values() {
        assert_eq!(TimeSlot::from_value("8AM-12PM"), Some(TimeSlot::Morning));
        assert_eq!(TimeSlot::from_value("4PM-8PM"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::from_value(""), None);
        assert_eq!(TimeSlot::from_value("midnight"), None);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut request = filled();
        request.clear();
        assert_eq!(request, CallbackRequest::default());
    }
}
