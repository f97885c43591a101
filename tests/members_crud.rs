#[cfg(test)]
mod tests {
    use gymdesk::db::db::Db;
    use gymdesk::db::members::{Members, NewMember};
    use gymdesk::db::payments::{NewPayment, Payments};
    use gymdesk::libs::error::GymError;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StoreTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("GYMDESK_DATA_DIR", temp_dir.path());
            StoreTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn seed_plan(db: &Db) {
        db.conn
            .execute("INSERT INTO MembershipPlan (planID, planType, cost) VALUES (1, 'Monthly', 39.99)", [])
            .unwrap();
    }

    fn sample_member(email: &str) -> NewMember {
        NewMember {
            name: "Jordan Reyes".to_string(),
            email: email.to_string(),
            phone: "5550123".to_string(),
            address: "7 Oak Ave".to_string(),
            age: 28,
            start_date: "2025-01-01".to_string(),
            end_date: "2025-12-31".to_string(),
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_member_create_then_exists(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        let id = members.create(&sample_member("jordan@example.com")).unwrap();
        assert!(id > 0);
        assert!(members.exists(id).unwrap());
        assert!(members.email_exists("jordan@example.com").unwrap());
        assert!(!members.email_exists("nobody@example.com").unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_duplicate_email_performs_no_insert(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        members.create(&sample_member("jordan@example.com")).unwrap();

        let mut second = sample_member("jordan@example.com");
        second.name = "Casey Flynn".to_string();
        let err = members.create(&second).unwrap_err();
        assert!(matches!(err, GymError::DuplicateKey(email) if email == "jordan@example.com"));

        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM Member", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_member_update_is_full_replace(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        let id = members.create(&sample_member("jordan@example.com")).unwrap();

        let replacement = NewMember {
            name: "Jordan R. Reyes".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            phone: "5550199".to_string(),
            address: "9 Elm St".to_string(),
            age: 29,
            start_date: "2025-02-01".to_string(),
            end_date: "2026-02-01".to_string(),
        };
        assert!(members.update(id, &replacement).unwrap());

        let stored = members.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Jordan R. Reyes");
        assert_eq!(stored.email, "jordan.reyes@example.com");
        assert_eq!(stored.phone, "5550199");
        assert_eq!(stored.address, "9 Elm St");
        assert_eq!(stored.age, 29);
        assert_eq!(stored.start_date, "2025-02-01");
        assert_eq!(stored.end_date, "2026-02-01");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_missing_member_reports_false(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        assert!(!members.update(42, &sample_member("ghost@example.com")).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_member_delete_then_exists_false(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        let id = members.create(&sample_member("jordan@example.com")).unwrap();
        assert!(members.delete(id).unwrap());
        assert!(!members.exists(id).unwrap());

        // A second delete finds nothing to remove.
        assert!(!members.delete(id).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_email_taken_by_other_ignores_self(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        let members = Members::new(&db);

        let first = members.create(&sample_member("jordan@example.com")).unwrap();
        let second = members.create(&sample_member("casey@example.com")).unwrap();

        assert!(!members.email_taken_by_other("jordan@example.com", first).unwrap());
        assert!(members.email_taken_by_other("jordan@example.com", second).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_members_listed_with_their_plan(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_plan(&db);
        let members = Members::new(&db);

        let id = members.create(&sample_member("jordan@example.com")).unwrap();
        Payments::new(&db)
            .create(&NewPayment {
                member_id: id,
                plan_id: 1,
                amount: 39.99,
                date: "2025-01-01".to_string(),
            })
            .unwrap();

        let listed = members.get_all_with_plan().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].member_id, id);
        assert_eq!(listed[0].plan_id, 1);
        assert_eq!(listed[0].email, "jordan@example.com");
    }
}
