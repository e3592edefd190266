//! Unit tests for mr-world.

#[cfg(test)]
mod bounds {
    use proptest::prelude::*;

    use crate::{MAX_COORDINATE, World, WorldError};

    #[test]
    fn accepts_maximum_bounds() {
        let world = World::new(MAX_COORDINATE, MAX_COORDINATE).unwrap();
        assert_eq!(world.max_x(), 50);
        assert_eq!(world.max_y(), 50);
    }

    #[test]
    fn rejects_oversized_x() {
        assert_eq!(
            World::new(51, 3).unwrap_err(),
            WorldError::BoundExceeded { axis: "max_x", value: 51, max: 50 }
        );
    }

    #[test]
    fn rejects_oversized_y() {
        assert!(matches!(
            World::new(5, 99),
            Err(WorldError::BoundExceeded { axis: "max_y", value: 99, .. })
        ));
    }

    #[test]
    fn negative_bounds_are_accepted_but_empty() {
        let world = World::new(-1, -1).unwrap();
        assert!(!world.is_position_valid(0, 0));
    }

    #[test]
    fn corners_are_inclusive() {
        let world = World::new(5, 3).unwrap();
        assert!(world.is_position_valid(0, 0));
        assert!(world.is_position_valid(5, 3));
        assert!(world.is_position_valid(5, 0));
        assert!(world.is_position_valid(0, 3));
    }

    #[test]
    fn outside_edges_are_invalid() {
        let world = World::new(5, 3).unwrap();
        assert!(!world.is_position_valid(-1, 0));
        assert!(!world.is_position_valid(0, -1));
        assert!(!world.is_position_valid(6, 3));
        assert!(!world.is_position_valid(5, 4));
    }

    proptest! {
        #[test]
        fn validity_matches_inclusive_rectangle(
            max_x in 0i32..=50,
            max_y in 0i32..=50,
            x in -10i32..70,
            y in -10i32..70,
        ) {
            let world = World::new(max_x, max_y).unwrap();
            let inside = x >= 0 && y >= 0 && x <= max_x && y <= max_y;
            prop_assert_eq!(world.is_position_valid(x, y), inside);
        }
    }
}

#[cfg(test)]
mod scent {
    use mr_core::Orientation;
    use proptest::prelude::*;

    use crate::{ScentMarker, World};

    #[test]
    fn starts_empty() {
        let world = World::new(5, 3).unwrap();
        assert_eq!(world.scent_count(), 0);
        assert!(!world.has_scent(5, 1, Orientation::E));
    }

    #[test]
    fn first_record_wins() {
        let world = World::new(5, 3).unwrap();
        assert!(world.try_record_marker(5, 1, Orientation::E));
        assert!(!world.try_record_marker(5, 1, Orientation::E));
        assert!(!world.try_record_marker(5, 1, Orientation::E));
        assert_eq!(world.scent_count(), 1);
        assert!(world.has_scent(5, 1, Orientation::E));
    }

    #[test]
    fn orientation_is_part_of_the_key() {
        let world = World::new(5, 3).unwrap();
        assert!(world.try_record_marker(5, 3, Orientation::N));
        assert!(world.try_record_marker(5, 3, Orientation::E));
        assert!(!world.has_scent(5, 3, Orientation::S));
        assert_eq!(world.scent_count(), 2);
    }

    #[test]
    fn snapshot_is_sorted() {
        let world = World::new(5, 3).unwrap();
        world.try_record_marker(3, 3, Orientation::N);
        world.try_record_marker(0, 0, Orientation::W);
        world.try_record_marker(0, 0, Orientation::S);
        assert_eq!(
            world.scents(),
            vec![
                ScentMarker::new(0, 0, Orientation::S),
                ScentMarker::new(0, 0, Orientation::W),
                ScentMarker::new(3, 3, Orientation::N),
            ]
        );
    }

    #[test]
    fn marker_display() {
        assert_eq!(ScentMarker::new(5, 1, Orientation::E).to_string(), "5 1 E");
    }

    proptest! {
        #[test]
        fn repeated_records_report_true_once(
            x in 0i32..=50,
            y in 0i32..=50,
            repeats in 1usize..20,
        ) {
            let world = World::new(50, 50).unwrap();
            let wins = (0..repeats)
                .filter(|_| world.try_record_marker(x, y, Orientation::W))
                .count();
            prop_assert_eq!(wins, 1);
            prop_assert_eq!(world.scent_count(), 1);
        }
    }
}

#[cfg(test)]
mod concurrency {
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use mr_core::Orientation;

    use crate::World;

    const THREADS: usize = 32;

    #[test]
    fn exactly_one_concurrent_caller_wins() {
        for _round in 0..20 {
            let world = World::new(5, 3).unwrap();
            let barrier = Barrier::new(THREADS);
            let wins = AtomicUsize::new(0);

            thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(|| {
                        barrier.wait();
                        if world.try_record_marker(3, 3, Orientation::N) {
                            wins.fetch_add(1, Ordering::SeqCst);
                        }
                    });
                }
            });

            assert_eq!(wins.load(Ordering::SeqCst), 1);
            assert_eq!(world.scent_count(), 1);
        }
    }

    #[test]
    fn distinct_triples_all_win() {
        let world = World::new(50, 50).unwrap();
        let barrier = Barrier::new(THREADS);
        let wins = AtomicUsize::new(0);

        thread::scope(|s| {
            for i in 0..THREADS {
                let (world, barrier, wins) = (&world, &barrier, &wins);
                s.spawn(move || {
                    barrier.wait();
                    let orientation = Orientation::ALL[i % 4];
                    if world.try_record_marker(i as i32, 0, orientation) {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(wins.load(Ordering::SeqCst), THREADS);
        assert_eq!(world.scent_count(), THREADS);
    }

    #[test]
    fn world_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<World>();
    }
}
