//! Function graphs and discretized calculus.
//!
//! A [`Graph`] wraps a caller-supplied `f: ℝ → ℝ` over a domain `[start, end)`
//! and a fixed [`Step`] `h`. Everything numerical samples `f` at
//! `start + k·h` for `k = 0, 1, ...` while the sample stays below the upper
//! bound. Samples are computed from the index rather than by repeatedly
//! adding `h`, so a domain like `[0, 1)` with `h = 0.1` gets exactly ten.
//!
//! Accuracy:
//! - `derivative` is a forward difference, O(h). It is biased toward the
//!   slope just right of `x` (for `x²` at 0.5 with h = 0.1 it gives 1.1).
//! - `integral` and `area` are left Riemann sums, O(h). For an increasing
//!   `f` they underestimate consistently.
//!
//! `f` must be pure: the same input must give the same output, or repeated
//! queries disagree.

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::log::{debug, trace, warn};
use crate::types::{BBox, Point, ScaleContext, Step, fmt_num};

/// Shared handle to the wrapped function
pub type RealFn = Rc<dyn Fn(f64) -> f64>;

/// Half-open interval `[start, end)`; empty unless `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub const fn new(start: f64, end: f64) -> Self {
        Domain { start, end }
    }

    pub fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Partition points of this domain at step `h`
    pub fn samples(&self, step: Step) -> Samples {
        Samples::new(self.start, self.end, step)
    }
}

impl From<(f64, f64)> for Domain {
    fn from((start, end): (f64, f64)) -> Self {
        Domain { start, end }
    }
}

impl From<Range<f64>> for Domain {
    fn from(r: Range<f64>) -> Self {
        Domain {
            start: r.start,
            end: r.end,
        }
    }
}

/// `start + k·step` for `k = 0, 1, ...` while below `end`.
///
/// Finite for any finite bounds; cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Samples {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
}

impl Samples {
    fn new(start: f64, end: f64, step: Step) -> Self {
        Samples {
            start,
            end,
            step: step.raw(),
            index: 0,
        }
    }
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x = self.start + self.index as f64 * self.step;
        if x < self.end {
            self.index += 1;
            Some(x)
        } else {
            None
        }
    }
}

/// Left-Riemann sum of `f` from `start` up to (not including) `end`.
///
/// A NaN or `+Infinity` upper bound has no finite partition and gives NaN.
fn left_sum(f: &dyn Fn(f64) -> f64, start: f64, end: f64, step: Step) -> f64 {
    if unbounded_above(end) {
        return f64::NAN;
    }
    let h = step.raw();
    let mut sum = 0.0;
    for t in Samples::new(start, end, step) {
        sum += f(t) * h;
    }
    sum
}

fn unbounded_above(x: f64) -> bool {
    x.is_nan() || x == f64::INFINITY
}

// ============================================================================
// Graph
// ============================================================================

/// A real function over a bounded domain, with a fixed discretization step.
#[derive(Clone)]
pub struct Graph {
    f: RealFn,
    domain: Domain,
    step: Step,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("domain", &self.domain)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

impl Graph {
    /// Graph of `f` over `domain`, using the default step.
    ///
    /// Fails with `DegenerateInput` when either bound is NaN or infinite,
    /// since such a domain has no finite partition.
    pub fn new(f: impl Fn(f64) -> f64 + 'static, domain: impl Into<Domain>) -> Result<Self> {
        let domain = domain.into();
        if !(domain.start.is_finite() && domain.end.is_finite()) {
            return Err(GeometryError::degenerate(
                "graph",
                format!(
                    "domain bounds must be finite, got [{}, {})",
                    fmt_num(domain.start),
                    fmt_num(domain.end)
                ),
            ));
        }
        Ok(Graph {
            f: Rc::new(f),
            domain,
            step: Step::default(),
        })
    }

    /// Graph of `f` across the viewport's full horizontal extent.
    ///
    /// Fails only if the half extent overflows to infinity.
    pub fn spanning(f: impl Fn(f64) -> f64 + 'static, scale: &ScaleContext) -> Result<Self> {
        let (hw, _) = scale.half_extent();
        Graph::new(f, (-hw, hw))
    }

    pub fn with_step(self, step: Step) -> Self {
        Graph { step, ..self }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// `f(x)`; not restricted to the domain.
    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    pub fn samples(&self) -> Samples {
        self.domain.samples(self.step)
    }

    /// `(x, f(x))` at every sample
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples().map(|x| Point::new(x, self.eval(x)))
    }

    /// Forward difference `(f(x + h) - f(x)) / h`, same domain and step.
    pub fn derivative(&self) -> Graph {
        let f = Rc::clone(&self.f);
        let h = self.step.raw();
        Graph {
            f: Rc::new(move |x: f64| (f(x + h) - f(x)) / h),
            domain: self.domain,
            step: self.step,
        }
    }

    /// Running left-Riemann sum from `domain.start` to `x`, same domain and step.
    ///
    /// Each query resums from the start of the domain; use
    /// [`integral_table`](Self::integral_table) for many queries.
    pub fn integral(&self) -> Graph {
        let f = Rc::clone(&self.f);
        let start = self.domain.start;
        let step = self.step;
        Graph {
            f: Rc::new(move |x: f64| left_sum(&*f, start, x, step)),
            domain: self.domain,
            step: self.step,
        }
    }

    /// Left-Riemann estimate of the signed area under `f` over the domain.
    pub fn area(&self) -> f64 {
        debug!(
            start = self.domain.start,
            end = self.domain.end,
            step = self.step.raw(),
            "graph area"
        );
        left_sum(&*self.f, self.domain.start, self.domain.end, self.step)
    }

    /// `area() · unit²`
    pub fn device_area(&self, scale: &ScaleContext) -> f64 {
        scale.area(self.area())
    }

    /// Lazy strips `{x, width = h, height = f(x)}` across the domain.
    pub fn riemann_partition(&self) -> RiemannPartition {
        if self.domain.is_empty() {
            warn!(domain = ?self.domain, "riemann partition of an empty domain");
        } else {
            debug!(domain = ?self.domain, step = self.step.raw(), "riemann partition");
        }
        RiemannPartition {
            f: Rc::clone(&self.f),
            samples: self.samples(),
            width: self.step.raw(),
        }
    }

    /// Precomputed running sums so integral queries don't resum.
    pub fn integral_table(&self) -> CumulativeIntegral {
        CumulativeIntegral::new(self)
    }

    /// One fill-only rectangle per strip, from the x axis up (or down) to `f(x)`.
    pub fn riemann_rectangles(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        self.riemann_partition()
            .map(|strip| {
                let mut path = PathBuilder::new(scale);
                path.polygon(strip.corners());
                path.build(Paint::FILL)
            })
            .collect()
    }
}

impl Drawable for Graph {
    /// Polyline through the samples. Non-finite values lift the pen, so a
    /// pole splits the curve instead of drawing through it.
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut path = PathBuilder::new(scale);
        let mut pen_down = false;
        for p in self.points() {
            if !p.y.is_finite() {
                trace!(x = p.x, "skipping non-finite sample");
                pen_down = false;
                continue;
            }
            if pen_down {
                path.line_to(p);
            } else {
                path.move_to(p);
                pen_down = true;
            }
        }
        vec![path.build(Paint::STROKE)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points(self.points())
    }
}

// ============================================================================
// Riemann partition
// ============================================================================

/// One left-Riemann strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Strip {
    /// Signed area `width · height`
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners from `(x, 0)` counterclockwise (for positive height)
    pub fn corners(&self) -> [Point; 4] {
        let right = self.x + self.width;
        [
            Point::new(self.x, 0.0),
            Point::new(right, 0.0),
            Point::new(right, self.height),
            Point::new(self.x, self.height),
        ]
    }
}

/// Iterator over the strips of a graph; evaluates `f` lazily.
#[derive(Clone)]
pub struct RiemannPartition {
    f: RealFn,
    samples: Samples,
    width: f64,
}

impl fmt::Debug for RiemannPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiemannPartition")
            .field("samples", &self.samples)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl Iterator for RiemannPartition {
    type Item = Strip;

    fn next(&mut self) -> Option<Strip> {
        let x = self.samples.next()?;
        Some(Strip {
            x,
            width: self.width,
            height: (self.f)(x),
        })
    }
}

// ============================================================================
// Cumulative integral
// ============================================================================

/// Memoized running left-Riemann sums over a graph's domain.
///
/// `eval(x)` gives the same bits as `graph.integral().eval(x)` but costs a
/// binary search inside the domain. Past the domain end it keeps summing with
/// the same step, as the direct integral does.
#[derive(Clone)]
pub struct CumulativeIntegral {
    f: RealFn,
    start: f64,
    step: Step,
    samples: Vec<f64>,
    /// `prefix[k]` is the sum over the first `k` samples
    prefix: Vec<f64>,
}

impl fmt::Debug for CumulativeIntegral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CumulativeIntegral")
            .field("start", &self.start)
            .field("step", &self.step)
            .field("len", &self.samples.len())
            .finish_non_exhaustive()
    }
}

impl CumulativeIntegral {
    fn new(graph: &Graph) -> Self {
        let h = graph.step.raw();
        let samples: Vec<f64> = graph.samples().collect();
        let mut prefix = Vec::with_capacity(samples.len() + 1);
        let mut sum = 0.0;
        prefix.push(sum);
        for &t in &samples {
            sum += graph.eval(t) * h;
            prefix.push(sum);
        }
        debug!(samples = samples.len(), step = h, "built integral table");
        CumulativeIntegral {
            f: Rc::clone(&graph.f),
            start: graph.domain.start,
            step: graph.step,
            samples,
            prefix,
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Running sum from the domain start up to (not including) `x`
    pub fn eval(&self, x: f64) -> f64 {
        if unbounded_above(x) {
            return f64::NAN;
        }
        let k = self.samples.partition_point(|&t| t < x);
        let mut sum = self.prefix[k];
        if k == self.samples.len() {
            let h = self.step.raw();
            let tail = Samples {
                start: self.start,
                end: x,
                step: h,
                index: k,
            };
            for t in tail {
                sum += (self.f)(t) * h;
            }
        }
        sum
    }
}
