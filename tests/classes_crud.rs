#[cfg(test)]
mod tests {
    use gymdesk::db::classes::{Classes, NewClass};
    use gymdesk::db::db::Db;
    use gymdesk::db::members::{Members, NewMember};
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

    fn seed_lookups(db: &Db) {
        db.conn
            .execute("INSERT INTO Instructor (instructorID, name, phone) VALUES (1, 'Dana Cole', '5550100')", [])
            .unwrap();
        db.conn
            .execute("INSERT INTO GymFacility (gymID, address, phone) VALUES (1, '12 Main St', '5550101')", [])
            .unwrap();
    }

    fn seed_member(db: &Db, email: &str) -> i64 {
        Members::new(db)
            .create(&NewMember {
                name: "Jordan Reyes".to_string(),
                email: email.to_string(),
                phone: "5550123".to_string(),
                address: "7 Oak Ave".to_string(),
                age: 28,
                start_date: "2025-01-01".to_string(),
                end_date: "2025-12-31".to_string(),
            })
            .unwrap()
    }

    fn seed_attendance(db: &Db, member_id: i64, class_id: i64, date: &str) {
        db.conn
            .execute(
                &format!(
                    "INSERT INTO Attends (memberID, classID, attendanceDate) VALUES ({}, {}, '{}')",
                    member_id, class_id, date
                ),
                [],
            )
            .unwrap();
    }

    fn yoga_class() -> NewClass {
        NewClass {
            name: "Yoga A".to_string(),
            kind: "Yoga".to_string(),
            duration: 60,
            capacity: 20,
            instructor_id: 1,
            gym_id: 1,
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_class_in_seeded_store(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        let classes = Classes::new(&db);

        let id = classes.create(&yoga_class()).unwrap();
        assert!(id > 0);
        assert!(classes.exists(id).unwrap());

        let all = classes.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Yoga A");
        assert_eq!(all[0].kind, "Yoga");
        assert_eq!(all[0].duration, 60);
        assert_eq!(all[0].capacity, 20);
        assert_eq!(all[0].instructor_id, 1);
        assert_eq!(all[0].gym_id, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_class_update_is_full_replace(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        db.conn
            .execute("INSERT INTO Instructor (instructorID, name, phone) VALUES (2, 'Sam Ortiz', '5550102')", [])
            .unwrap();
        let classes = Classes::new(&db);

        let id = classes.create(&yoga_class()).unwrap();
        let replacement = NewClass {
            name: "Evening HIIT".to_string(),
            kind: "HIIT".to_string(),
            duration: 45,
            capacity: 15,
            instructor_id: 2,
            gym_id: 1,
        };
        assert!(classes.update(id, &replacement).unwrap());

        let stored = classes.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Evening HIIT");
        assert_eq!(stored.kind, "HIIT");
        assert_eq!(stored.duration, 45);
        assert_eq!(stored.capacity, 15);
        assert_eq!(stored.instructor_id, 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_class_without_attendees(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        let classes = Classes::new(&db);

        let id = classes.create(&yoga_class()).unwrap();
        assert!(!classes.has_members(id).unwrap());
        assert!(classes.delete(id).unwrap());
        assert!(!classes.exists(id).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_class_after_moving_attendees(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        let classes = Classes::new(&db);

        let old_class = classes.create(&yoga_class()).unwrap();
        let target = classes.create(&NewClass {
            name: "Yoga B".to_string(),
            ..yoga_class()
        });
        let target = target.unwrap();

        let first = seed_member(&db, "jordan@example.com");
        let second = seed_member(&db, "casey@example.com");
        seed_attendance(&db, first, old_class, "2025-06-01");
        seed_attendance(&db, second, old_class, "2025-06-02");

        assert!(classes.has_members(old_class).unwrap());

        // The target class must exist before any move is attempted.
        assert!(!classes.exists(999).unwrap());
        assert!(classes.exists(target).unwrap());

        let moved = classes.move_members(old_class, target).unwrap();
        assert_eq!(moved, 2);
        assert!(!classes.has_members(old_class).unwrap());

        assert!(classes.delete(old_class).unwrap());
        assert!(!classes.exists(old_class).unwrap());

        let migrated = classes.members_in_class(target).unwrap();
        assert_eq!(migrated.len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_move_members_of_empty_class_reports_zero(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        let classes = Classes::new(&db);

        let empty = classes.create(&yoga_class()).unwrap();
        let target = classes.create(&NewClass {
            name: "Yoga B".to_string(),
            ..yoga_class()
        });
        assert_eq!(classes.move_members(empty, target.unwrap()).unwrap(), 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_attendance_counts_include_empty_classes(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        let classes = Classes::new(&db);

        let busy = classes.create(&yoga_class()).unwrap();
        let idle = classes.create(&NewClass {
            name: "Zumba A".to_string(),
            kind: "Zumba".to_string(),
            ..yoga_class()
        });
        let idle = idle.unwrap();

        let first = seed_member(&db, "jordan@example.com");
        let second = seed_member(&db, "casey@example.com");
        seed_attendance(&db, first, busy, "2025-06-01");
        seed_attendance(&db, second, busy, "2025-06-02");

        let attendance = classes.with_attendance().unwrap();
        assert_eq!(attendance.len(), 2);

        let busy_row = attendance.iter().find(|row| row.id == busy).unwrap();
        assert_eq!(busy_row.attendees, 2);

        let idle_row = attendance.iter().find(|row| row.id == idle).unwrap();
        assert_eq!(idle_row.attendees, 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_classes_by_instructor(_ctx: &mut StoreTestContext) {
        let db = Db::create().unwrap();
        seed_lookups(&db);
        db.conn
            .execute("INSERT INTO Instructor (instructorID, name, phone) VALUES (2, 'Sam Ortiz', '5550102')", [])
            .unwrap();
        let classes = Classes::new(&db);

        classes.create(&yoga_class()).unwrap();
        classes
            .create(&NewClass {
                name: "Weights A".to_string(),
                kind: "Weights".to_string(),
                instructor_id: 2,
                ..yoga_class()
            })
            .unwrap();

        let taught = classes.get_by_instructor(1).unwrap();
        assert_eq!(taught.len(), 1);
        assert_eq!(taught[0].name, "Yoga A");
    }
}
