/// Coalescing helper for resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::Coalescer;

    #[test]
    fn decide_resize_last_only_table_tests() {
        assert_eq!(Coalescer::decide_resize(None, &[]), None);
        assert_eq!(Coalescer::decide_resize(None, &[(10, 10)]), Some((10, 10)));
        assert_eq!(
            Coalescer::decide_resize(None, &[(10, 10), (20, 30)]),
            Some((20, 30))
        );
        assert_eq!(
            Coalescer::decide_resize(Some((5, 5)), &[(100, 200)]),
            Some((100, 200))
        );
        assert_eq!(Coalescer::decide_resize(Some((5, 5)), &[]), Some((5, 5)));
    }
}
