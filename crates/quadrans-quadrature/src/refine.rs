//! Composite panel summation with geometric refinement.
//!
//! All four rules share this control structure: seed with a single panel
//! spanning [a, b], then repeatedly double the panel count and recompute the
//! full composite sum from scratch until two successive estimates agree to
//! the caller's relative tolerance. The seed is produced by the same
//! composite routine at panel count 1, so seed and refinement can never
//! drift apart.

/// Smallest magnitude the relative stopping test divides by. Estimates below
/// this floor are compared absolutely, so a zero-valued integral terminates
/// instead of dividing by zero.
const RELATIVE_FLOOR: f64 = 1e-15;

/// Stand-in for the estimate before the first one; differs from any realistic
/// estimate by far more than any realistic tolerance, forcing at least one
/// doubling.
const NO_PREVIOUS: f64 = -1.0;

/// Raw outcome of the refinement loop, before rule-specific bookkeeping.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Refined {
    pub value: f64,
    pub refinements: usize,
    pub panels: usize,
    pub panels_summed: usize,
    pub converged: bool,
}

/// True when `current` and `previous` agree to within `epsilon`, measured
/// relative to `current` (floored at [`RELATIVE_FLOOR`]).
fn agree(current: f64, previous: f64, epsilon: f64) -> bool {
    (current - previous).abs() <= epsilon * current.abs().max(RELATIVE_FLOOR)
}

/// Sums `panel(left, right, h)` over `panels` equal-width panels of [a, b].
fn composite<P>(panel: &P, a: f64, b: f64, panels: usize) -> f64
where
    P: Fn(f64, f64, f64) -> f64,
{
    let h = (b - a) / panels as f64;
    let mut sum = 0.0;
    for i in 0..panels {
        let left = a + i as f64 * h;
        let right = left + h;
        sum += panel(left, right, h);
    }
    sum
}

/// Runs the doubling refinement until convergence or `max_refinements`
/// doublings, whichever comes first.
pub(crate) fn refine_to_convergence<P>(
    panel: &P,
    a: f64,
    b: f64,
    epsilon: f64,
    max_refinements: usize,
) -> Refined
where
    P: Fn(f64, f64, f64) -> f64,
{
    let mut panels = 1;
    let mut previous = NO_PREVIOUS;
    let mut current = composite(panel, a, b, panels);
    let mut refinements = 0;
    let mut panels_summed = panels;

    while !agree(current, previous, epsilon) && refinements < max_refinements {
        previous = current;
        panels *= 2;
        refinements += 1;
        current = composite(panel, a, b, panels);
        panels_summed += panels;
    }

    Refined {
        value: current,
        refinements,
        panels,
        panels_summed,
        converged: agree(current, previous, epsilon),
    }
}
