#[cfg(test)]
mod tests {
    use gymdesk::db::db::Db;
    use gymdesk::db::members::{Members, NewMember};
    use gymdesk::db::payments::{NewPayment, Payments};
    use gymdesk::db::plans::Plans;
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

    fn seed_plans(db: &Db) {
        db.conn
            .execute("INSERT INTO MembershipPlan (planID, planType, cost) VALUES (1, 'Monthly', 39.99)", [])
            .unwrap();
        db.conn
            .execute("INSERT INTO MembershipPlan (planID, planType, cost) VALUES (2, 'Annual', 399.00)", [])
            .unwrap();
    }

    fn seed_member(db: &Db) -> i64 {
        Members::new(db)
            .create(&NewMember {
                name: "Jordan Reyes".to_string(),
                email: "jordan@example.com".to_string(),
                phone: "5550123".to_string(),
                address: "7 Oak Ave".to_string(),
                age: 28,
                start_date: "2025-01-01".to_string(),
                end_date: "2025-12-31".to_string(),
            })
            .unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_plan_lookups(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_plans(&db);
        let plans = Plans::new(&db);

        assert!(plans.exists(1).unwrap());
        assert!(plans.exists(2).unwrap());
        assert!(!plans.exists(3).unwrap());
        assert_eq!(plans.all_ids().unwrap(), vec![1, 2]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_payment_history_joins_member_and_plan(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_plans(&db);
        let member_id = seed_member(&db);

        let payments = Payments::new(&db);
        let payment_id = payments
            .create(&NewPayment {
                member_id,
                plan_id: 2,
                amount: 399.00,
                date: "2025-01-01".to_string(),
            })
            .unwrap();
        assert!(payment_id > 0);

        let history = payments.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].payment_id, payment_id);
        assert_eq!(history[0].member_id, member_id);
        assert_eq!(history[0].member_name, "Jordan Reyes");
        assert_eq!(history[0].plan_id, 2);
        assert!((history[0].amount - 399.00).abs() < f64::EPSILON);
        assert_eq!(history[0].date, "2025-01-01");
    }
}
