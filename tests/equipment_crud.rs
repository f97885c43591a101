#[cfg(test)]
mod tests {
    use gymdesk::db::db::Db;
    use gymdesk::db::equipment::{EquipmentStore, NewEquipment};
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

    fn seed_gym(db: &Db) {
        db.conn
            .execute("INSERT INTO GymFacility (gymID, address, phone) VALUES (1, '12 Main St', '5550101')", [])
            .unwrap();
    }

    fn treadmill() -> NewEquipment {
        NewEquipment {
            name: "Treadmill".to_string(),
            kind: "Cardio".to_string(),
            quantity: 6,
            gym_id: 1,
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_equipment_crud(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_gym(&db);
        let store = EquipmentStore::new(&db);

        // Create
        let id = store.create(&treadmill()).unwrap();
        assert!(store.exists(id).unwrap());

        // Read
        let stored = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Treadmill");
        assert_eq!(stored.kind, "Cardio");
        assert_eq!(stored.quantity, 6);

        // Update (full replace)
        let replacement = NewEquipment {
            name: "Foam Roller".to_string(),
            kind: "Recovery".to_string(),
            quantity: 12,
            gym_id: 1,
        };
        assert!(store.update(id, &replacement).unwrap());
        let stored = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Foam Roller");
        assert_eq!(stored.kind, "Recovery");
        assert_eq!(stored.quantity, 12);

        // Delete
        assert!(store.delete(id).unwrap());
        assert!(!store.exists(id).unwrap());
        assert!(store.get_by_id(id).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_equipment_filter_by_type_ignores_case(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_gym(&db);
        let store = EquipmentStore::new(&db);

        store.create(&treadmill()).unwrap();
        store
            .create(&NewEquipment {
                name: "Rowing Machine".to_string(),
                kind: "Cardio".to_string(),
                quantity: 3,
                gym_id: 1,
            })
            .unwrap();
        store
            .create(&NewEquipment {
                name: "Squat Rack".to_string(),
                kind: "Strength".to_string(),
                quantity: 4,
                gym_id: 1,
            })
            .unwrap();

        let cardio = store.get_by_kind("cardio").unwrap();
        assert_eq!(cardio.len(), 2);

        let cardio_upper = store.get_by_kind("CARDIO").unwrap();
        assert_eq!(cardio_upper.len(), 2);

        let strength = store.get_by_kind("Strength").unwrap();
        assert_eq!(strength.len(), 1);
        assert_eq!(strength[0].name, "Squat Rack");

        assert!(store.get_by_kind("Flexibility").unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_missing_equipment_reports_false(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_gym(&db);
        let store = EquipmentStore::new(&db);

        assert!(!store.update(7, &treadmill()).unwrap());
        assert!(!store.delete(7).unwrap());
    }
}
