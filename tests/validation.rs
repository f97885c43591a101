#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use gymdesk::libs::error::GymError;
    use gymdesk::libs::validation::{
        parse_date, parse_decimal, parse_integer, parse_text, validate_age, validate_membership_dates, validate_positive,
        ClassKind, EquipmentKind,
    };

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_integer_parsing() {
        assert_eq!(parse_integer("42", "age").unwrap(), 42);
        assert_eq!(parse_integer("  7 ", "age").unwrap(), 7);

        assert!(matches!(parse_integer("", "age").unwrap_err(), GymError::EmptyField { field: "age" }));
        assert!(matches!(parse_integer("  ", "age").unwrap_err(), GymError::EmptyField { .. }));
        assert!(matches!(parse_integer("abc", "age").unwrap_err(), GymError::InvalidFormat { .. }));
        assert!(matches!(parse_integer("4.2", "age").unwrap_err(), GymError::InvalidFormat { .. }));
    }

    #[test]
    fn test_decimal_parsing() {
        assert!((parse_decimal("39.99", "payment").unwrap() - 39.99).abs() < f64::EPSILON);
        assert!((parse_decimal("40", "payment").unwrap() - 40.0).abs() < f64::EPSILON);

        assert!(matches!(parse_decimal("", "payment").unwrap_err(), GymError::EmptyField { .. }));
        assert!(matches!(parse_decimal("lots", "payment").unwrap_err(), GymError::InvalidFormat { .. }));
    }

    #[test]
    fn test_text_parsing() {
        assert_eq!(parse_text("  Jordan ", "name").unwrap(), "Jordan");
        assert!(matches!(parse_text("   ", "name").unwrap_err(), GymError::EmptyField { .. }));
    }

    #[test]
    fn test_age_constraint() {
        assert!(matches!(validate_age(14).unwrap_err(), GymError::ConstraintViolation(_)));
        assert!(validate_age(15).is_ok());
        assert!(validate_age(80).is_ok());
    }

    #[test]
    fn test_positive_constraint() {
        assert!(validate_positive(1, "duration").is_ok());
        assert!(matches!(validate_positive(0, "duration").unwrap_err(), GymError::ConstraintViolation(_)));
        assert!(matches!(validate_positive(-5, "duration").unwrap_err(), GymError::ConstraintViolation(_)));
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(parse_date("2025-06-01", "start date").unwrap(), date("2025-06-01"));
        assert!(matches!(parse_date("", "start date").unwrap_err(), GymError::EmptyField { .. }));
        assert!(matches!(parse_date("soon", "start date").unwrap_err(), GymError::InvalidFormat { .. }));
        assert!(matches!(parse_date("2025-13-01", "start date").unwrap_err(), GymError::InvalidFormat { .. }));
    }

    #[test]
    fn test_membership_dates_must_be_ordered() {
        assert!(validate_membership_dates(date("2025-06-01"), date("2025-06-02")).is_ok());

        // Equal dates are not strictly ordered.
        assert!(matches!(
            validate_membership_dates(date("2025-06-01"), date("2025-06-01")).unwrap_err(),
            GymError::ConstraintViolation(_)
        ));
        assert!(matches!(
            validate_membership_dates(date("2025-06-02"), date("2025-06-01")).unwrap_err(),
            GymError::ConstraintViolation(_)
        ));
    }

    #[test]
    fn test_class_kind_parsing() {
        assert_eq!("Yoga".parse::<ClassKind>().unwrap(), ClassKind::Yoga);
        assert_eq!("zumba".parse::<ClassKind>().unwrap(), ClassKind::Zumba);
        assert_eq!("HIIT".parse::<ClassKind>().unwrap(), ClassKind::Hiit);
        assert_eq!("weights".parse::<ClassKind>().unwrap(), ClassKind::Weights);
        assert_eq!(ClassKind::Hiit.to_string(), "HIIT");

        assert!(matches!("pilates".parse::<ClassKind>().unwrap_err(), GymError::InvalidEnum { .. }));
    }

    #[test]
    fn test_equipment_kind_parsing() {
        assert_eq!("Cardio".parse::<EquipmentKind>().unwrap(), EquipmentKind::Cardio);
        assert_eq!("strength".parse::<EquipmentKind>().unwrap(), EquipmentKind::Strength);
        assert_eq!("FLEXIBILITY".parse::<EquipmentKind>().unwrap(), EquipmentKind::Flexibility);
        assert_eq!("recovery".parse::<EquipmentKind>().unwrap(), EquipmentKind::Recovery);

        assert!(matches!("massage".parse::<EquipmentKind>().unwrap_err(), GymError::InvalidEnum { .. }));
    }
}
