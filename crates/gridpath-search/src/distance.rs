use gridpath_core::State;

/// Chebyshev (L∞) distance between two states: the number of king moves
/// separating them on an 8-connected grid. Saturates at `i32::MAX`.
#[inline]
pub fn chebyshev(a: State, b: State) -> i32 {
    let d = a.x.abs_diff(b.x).max(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_the_longer_axis() {
        assert_eq!(chebyshev(State::new(0, 0), State::new(4, 4)), 4);
        assert_eq!(chebyshev(State::new(0, 0), State::new(4, 1)), 4);
        assert_eq!(chebyshev(State::new(3, -2), State::new(1, 5)), 7);
        assert_eq!(chebyshev(State::new(2, 2), State::new(2, 2)), 0);
    }

    #[test]
    fn chebyshev_is_symmetric() {
        let a = State::new(-3, 8);
        let b = State::new(6, 1);
        assert_eq!(chebyshev(a, b), chebyshev(b, a));
    }

    #[test]
    fn chebyshev_saturates_on_extreme_coordinates() {
        assert_eq!(chebyshev(State::new(i32::MIN, 0), State::new(i32::MAX, 0)), i32::MAX);
        assert_eq!(chebyshev(State::new(i32::MIN, 0), State::new(0, 0)), i32::MAX);
        assert_eq!(chebyshev(State::new(0, i32::MIN), State::new(0, -1)), i32::MAX);
    }
}
