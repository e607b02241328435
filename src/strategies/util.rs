/// Counters accumulated during one search call.
#[derive(Copy, Clone, Default)]
pub(super) struct SearchStats {
    /// States visited by the recursion, interior and leaf alike.
    pub(super) nodes_explored: usize,
    /// Times the depth limit stopped the recursion and the evaluator
    /// was consulted. Zero means the explored tree bottomed out in
    /// terminal positions only, so its values hold at any depth.
    pub(super) horizon_hits: usize,
}

impl SearchStats {
    pub(super) fn reset(&mut self) {
        *self = SearchStats::default();
    }
}
