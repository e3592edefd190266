//! Unit tests for mr-core primitives.

#[cfg(test)]
mod ids {
    use crate::RobotId;

    #[test]
    fn index_roundtrip() {
        let id = RobotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RobotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(RobotId(0) < RobotId(1));
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }
}

#[cfg(test)]
mod orientation {
    use proptest::prelude::*;

    use crate::{CoreError, Orientation};

    #[test]
    fn left_cycle() {
        assert_eq!(Orientation::N.turn_left(), Orientation::W);
        assert_eq!(Orientation::W.turn_left(), Orientation::S);
        assert_eq!(Orientation::S.turn_left(), Orientation::E);
        assert_eq!(Orientation::E.turn_left(), Orientation::N);
    }

    #[test]
    fn right_cycle() {
        assert_eq!(Orientation::N.turn_right(), Orientation::E);
        assert_eq!(Orientation::E.turn_right(), Orientation::S);
        assert_eq!(Orientation::S.turn_right(), Orientation::W);
        assert_eq!(Orientation::W.turn_right(), Orientation::N);
    }

    #[test]
    fn reverse_is_opposite_delta() {
        for o in Orientation::ALL {
            let (dx, dy) = o.forward_delta();
            assert_eq!(o.reverse().forward_delta(), (-dx, -dy));
        }
    }

    #[test]
    fn parse_letters() {
        assert_eq!("N".parse::<Orientation>(), Ok(Orientation::N));
        assert_eq!(" W ".parse::<Orientation>(), Ok(Orientation::W));
        assert_eq!(Orientation::try_from('S'), Ok(Orientation::S));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "north".parse::<Orientation>(),
            Err(CoreError::InvalidOrientation("north".into()))
        );
        assert!("n".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Orientation::E.to_string(), "E");
    }

    fn any_orientation() -> impl Strategy<Value = Orientation> {
        prop_oneof![
            Just(Orientation::N),
            Just(Orientation::E),
            Just(Orientation::S),
            Just(Orientation::W),
        ]
    }

    proptest! {
        #[test]
        fn four_turns_are_identity(o in any_orientation()) {
            let left = o.turn_left().turn_left().turn_left().turn_left();
            let right = o.turn_right().turn_right().turn_right().turn_right();
            prop_assert_eq!(left, o);
            prop_assert_eq!(right, o);
        }

        #[test]
        fn left_and_right_are_inverses(o in any_orientation()) {
            prop_assert_eq!(o.turn_left().turn_right(), o);
            prop_assert_eq!(o.turn_right().turn_left(), o);
        }
    }
}

#[cfg(test)]
mod position {
    use crate::{Orientation, Position};

    #[test]
    fn new_is_not_lost() {
        assert!(!Position::new(1, 2, Orientation::N).lost);
    }

    #[test]
    fn equality_includes_lost() {
        let p = Position::new(1, 1, Orientation::E);
        assert_ne!(p, p.marked_lost());
        assert_eq!(p, Position::new(1, 1, Orientation::E));
    }

    #[test]
    fn copy_with_override_leaves_original() {
        let p = Position::new(3, 2, Orientation::N);
        let q = p.with_orientation(Orientation::W);
        assert_eq!(p.orientation, Orientation::N);
        assert_eq!((q.x, q.y, q.orientation), (3, 2, Orientation::W));
    }

    #[test]
    fn forward_candidate_per_heading() {
        let p = Position::new(2, 2, Orientation::N);
        assert_eq!(p.forward_candidate(), Position::new(2, 3, Orientation::N));
        assert_eq!(
            p.with_orientation(Orientation::E).forward_candidate(),
            Position::new(3, 2, Orientation::E)
        );
        assert_eq!(
            p.with_orientation(Orientation::S).forward_candidate(),
            Position::new(2, 1, Orientation::S)
        );
        assert_eq!(
            p.with_orientation(Orientation::W).forward_candidate(),
            Position::new(1, 2, Orientation::W)
        );
    }

    #[test]
    fn forward_candidate_can_leave_grid() {
        let p = Position::new(0, 0, Orientation::S);
        assert_eq!(p.forward_candidate().y, -1);
    }

    #[test]
    fn display() {
        let p = Position::new(3, 3, Orientation::N);
        assert_eq!(p.to_string(), "3 3 N");
        assert_eq!(p.marked_lost().to_string(), "3 3 N LOST");
    }
}
