use std::convert::Infallible;
use std::marker::PhantomData;

use steppath_core::{Direction, Point3};

/// Decides whether a one-step move is legal and where it lands.
///
/// The engine treats the oracle as a pure function: it may be queried any
/// number of times for the same arguments and its answers are not cached
/// beyond the search's own visited set.
pub trait MovementOracle {
    /// Per-mover parameters (walk/swim/fly abilities, climb height, ...).
    type Settings: ?Sized;

    /// Returns the landing coordinate of a step from `from` in `dir`, or
    /// `None` if the move is illegal.
    fn check_movement(&self, from: Point3, settings: &Self::Settings, dir: Direction)
    -> Option<Point3>;
}

/// A movement oracle that can fail.
///
/// Errors are not recovered from: a search or replay stops at the first
/// error and hands it back to the caller unchanged. Every [`MovementOracle`]
/// is a `TryMovementOracle` that never fails.
pub trait TryMovementOracle {
    type Settings: ?Sized;
    type Error;

    fn try_check_movement(
        &self,
        from: Point3,
        settings: &Self::Settings,
        dir: Direction,
    ) -> Result<Option<Point3>, Self::Error>;
}

impl<O: MovementOracle + ?Sized> TryMovementOracle for O {
    type Settings = <O as MovementOracle>::Settings;
    type Error = Infallible;

    #[inline]
    fn try_check_movement(
        &self,
        from: Point3,
        settings: &Self::Settings,
        dir: Direction,
    ) -> Result<Option<Point3>, Infallible> {
        Ok(self.check_movement(from, settings, dir))
    }
}

/// Oracle backed by a closure. Built with [`from_fn`].
pub struct FnOracle<F, S: ?Sized> {
    f: F,
    _settings: PhantomData<fn(&S)>,
}

impl<F, S> MovementOracle for FnOracle<F, S>
where
    S: ?Sized,
    F: Fn(Point3, &S, Direction) -> Option<Point3>,
{
    type Settings = S;

    #[inline]
    fn check_movement(&self, from: Point3, settings: &S, dir: Direction) -> Option<Point3> {
        (self.f)(from, settings, dir)
    }
}

/// Wrap a closure `(from, settings, dir) -> Option<landing>` as an oracle.
pub fn from_fn<S, F>(f: F) -> FnOracle<F, S>
where
    S: ?Sized,
    F: Fn(Point3, &S, Direction) -> Option<Point3>,
{
    FnOracle {
        f,
        _settings: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_oracle_forwards_arguments() {
        let oracle = from_fn(|p: Point3, climb: &i32, d: Direction| {
            (d == Direction::East).then(|| p.step(d).shift(0, 0, *climb))
        });
        assert_eq!(
            oracle.check_movement(Point3::ZERO, &2, Direction::East),
            Some(Point3::new(1, 0, 2))
        );
        assert_eq!(oracle.check_movement(Point3::ZERO, &2, Direction::West), None);
    }

    #[test]
    fn infallible_oracle_is_try_oracle() {
        let oracle = from_fn(|p: Point3, _: &(), d: Direction| Some(p.step(d)));
        let r = oracle.try_check_movement(Point3::ZERO, &(), Direction::South);
        assert!(matches!(r, Ok(Some(p)) if p == Point3::new(0, 1, 0)));
    }
}
