#[cfg(test)]
mod tests {
    use gymdesk::db::classes::{Classes, NewClass};
    use gymdesk::db::db::Db;
    use gymdesk::db::members::{Members, NewMember};
    use gymdesk::db::payments::{NewPayment, Payments};
    use gymdesk::libs::export::{ExportData, ExportFormat, Exporter};
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StoreTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("GYMDESK_DATA_DIR", temp_dir.path());
            StoreTestContext {
                temp_dir,
                _guard: guard,
            }
        }
    }

    fn seed_store(db: &Db) {
        db.conn
            .execute("INSERT INTO Instructor (instructorID, name, phone) VALUES (1, 'Dana Cole', '5550100')", [])
            .unwrap();
        db.conn
            .execute("INSERT INTO GymFacility (gymID, address, phone) VALUES (1, '12 Main St', '5550101')", [])
            .unwrap();
        db.conn
            .execute("INSERT INTO MembershipPlan (planID, planType, cost) VALUES (1, 'Monthly', 39.99)", [])
            .unwrap();

        let member_id = Members::new(db)
            .create(&NewMember {
                name: "Jordan Reyes".to_string(),
                email: "jordan@example.com".to_string(),
                phone: "5550123".to_string(),
                address: "7 Oak Ave".to_string(),
                age: 28,
                start_date: "2025-01-01".to_string(),
                end_date: "2025-12-31".to_string(),
            })
            .unwrap();
        Payments::new(db)
            .create(&NewPayment {
                member_id,
                plan_id: 1,
                amount: 39.99,
                date: "2025-01-01".to_string(),
            })
            .unwrap();
        Classes::new(db)
            .create(&NewClass {
                name: "Yoga A".to_string(),
                kind: "Yoga".to_string(),
                duration: 60,
                capacity: 20,
                instructor_id: 1,
                gym_id: 1,
            })
            .unwrap();
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_export_members_to_json(ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_store(&db);

        let output = ctx.temp_dir.path().join("members.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output.clone()));
        let written = exporter.export(ExportData::Members, &db).unwrap();
        assert_eq!(written, output);

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("jordan@example.com"));
        assert!(contents.contains("\"plan_id\": 1"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_export_classes_to_csv(ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_store(&db);

        let output = ctx.temp_dir.path().join("classes.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        exporter.export(ExportData::Classes, &db).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("Yoga A"));
        assert!(contents.contains("name"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_export_of_empty_table_fails(ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();

        let output = ctx.temp_dir.path().join("equipment.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        assert!(exporter.export(ExportData::Equipment, &db).is_err());
        assert!(!output.exists());
    }
}
