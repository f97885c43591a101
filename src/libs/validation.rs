//! Pure validation rules evaluated before any mutating repository call.
//!
//! Every rule is a side-effect-free function over raw input. The command
//! layer runs each applicable rule before touching a repository; the first
//! failing rule aborts the operation, so a multi-field update is never
//! partially applied. Uniqueness and referential-existence checks need the
//! store and therefore live on the repositories, not here.

use crate::libs::error::{GymError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Minimum age a member must have at creation or update.
pub const MIN_MEMBER_AGE: i64 = 15;

/// Parses a required integer field, rejecting empty and non-numeric input.
pub fn parse_integer(raw: &str, field: &'static str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GymError::EmptyField { field });
    }
    trimmed.parse::<i64>().map_err(|_| GymError::InvalidFormat {
        field,
        expected: "integer numbers",
    })
}

/// Parses a required decimal field, rejecting empty and non-numeric input.
pub fn parse_decimal(raw: &str, field: &'static str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GymError::EmptyField { field });
    }
    trimmed.parse::<f64>().map_err(|_| GymError::InvalidFormat {
        field,
        expected: "decimal numbers",
    })
}

/// Parses a required text field, rejecting empty input.
pub fn parse_text(raw: &str, field: &'static str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GymError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Members must be at least [`MIN_MEMBER_AGE`] years old.
pub fn validate_age(age: i64) -> Result<()> {
    if age < MIN_MEMBER_AGE {
        return Err(GymError::ConstraintViolation(format!("Age must be {} or older", MIN_MEMBER_AGE)));
    }
    Ok(())
}

/// A quantity, duration or capacity must be a positive integer.
pub fn validate_positive(value: i64, field: &'static str) -> Result<()> {
    if value <= 0 {
        return Err(GymError::ConstraintViolation(format!("{} must be a positive integer", field)));
    }
    Ok(())
}

/// Parses a date in strict `YYYY-MM-DD` form.
pub fn parse_date(raw: &str, field: &'static str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GymError::EmptyField { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| GymError::InvalidFormat {
        field,
        expected: "dates in YYYY-MM-DD form",
    })
}

/// A membership must end strictly after it starts. Equal dates are rejected.
pub fn validate_membership_dates(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end <= start {
        return Err(GymError::ConstraintViolation("End date must be later than start date".to_string()));
    }
    Ok(())
}

/// The fixed set of class types offered by the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Yoga,
    Zumba,
    Hiit,
    Weights,
}

impl ClassKind {
    pub const ALL: [ClassKind; 4] = [ClassKind::Yoga, ClassKind::Zumba, ClassKind::Hiit, ClassKind::Weights];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Yoga => "Yoga",
            ClassKind::Zumba => "Zumba",
            ClassKind::Hiit => "HIIT",
            ClassKind::Weights => "Weights",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassKind {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yoga" => Ok(ClassKind::Yoga),
            "zumba" => Ok(ClassKind::Zumba),
            "hiit" => Ok(ClassKind::Hiit),
            "weights" => Ok(ClassKind::Weights),
            _ => Err(GymError::InvalidEnum {
                value: s.trim().to_string(),
                expected: "Yoga, Zumba, HIIT, Weights",
            }),
        }
    }
}

/// The fixed set of equipment types stocked by the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentKind {
    Cardio,
    Strength,
    Flexibility,
    Recovery,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 4] = [
        EquipmentKind::Cardio,
        EquipmentKind::Strength,
        EquipmentKind::Flexibility,
        EquipmentKind::Recovery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentKind::Cardio => "Cardio",
            EquipmentKind::Strength => "Strength",
            EquipmentKind::Flexibility => "Flexibility",
            EquipmentKind::Recovery => "Recovery",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(EquipmentKind::Cardio),
            "strength" => Ok(EquipmentKind::Strength),
            "flexibility" => Ok(EquipmentKind::Flexibility),
            "recovery" => Ok(EquipmentKind::Recovery),
            _ => Err(GymError::InvalidEnum {
                value: s.trim().to_string(),
                expected: "Cardio, Strength, Flexibility, Recovery",
            }),
        }
    }
}
