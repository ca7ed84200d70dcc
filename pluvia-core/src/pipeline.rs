use rayon::prelude::*;

use crate::{
    composite::{Composite, composite},
    foundation::core::Frame,
    foundation::error::{PluviaError, PluviaResult},
    geo::{BoundingBox, Route, project},
    sample::sample_line,
    verdict::{RouteVerdict, evaluate},
};

/// Threading controls for multi-route evaluation.
///
/// Route evaluations read one immutable composite and share no mutable
/// state, so parallelism is an optimization, never a correctness knob:
/// parallel and sequential runs produce identical outcomes.
#[derive(Clone, Debug, Default)]
pub struct EvalThreading {
    /// Evaluate routes on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// One route paired with its verdict.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RouteOutcome {
    /// The evaluated route.
    pub route: Route,
    /// Its aggregated verdict.
    pub verdict: RouteVerdict,
}

/// Everything one observation-window run produces.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WindowReport {
    /// Shared composite, exposed for rendering collaborators.
    pub composite: Composite,
    /// Per-route outcomes, in input order.
    pub outcomes: Vec<RouteOutcome>,
}

/// Evaluate one route against an already-built composite.
///
/// Projects both endpoints into pixel space, samples the composite along the
/// segment between them, and aggregates the samples into a verdict.
#[tracing::instrument(skip(comp))]
pub fn evaluate_route(
    comp: &Composite,
    route: &Route,
    bounds: BoundingBox,
) -> PluviaResult<RouteVerdict> {
    bounds.validate()?;

    let raster = comp.raster();
    let (x0, y0) = project(route.from, bounds, raster.width(), raster.height());
    let (x1, y1) = project(route.to, bounds, raster.width(), raster.height());
    let samples = sample_line(raster, x0, y0, x1, y1);
    Ok(evaluate(&samples, comp.window_start(), comp.window_end()))
}

/// Composite a frame window and evaluate every route against it.
///
/// This is the primary "one-shot" API: frames + routes in, composite +
/// per-route verdicts out. Returns `Ok(None)` when `frames` is empty (no
/// observation window, not an error). Structural problems such as a
/// malformed bounding box or mismatched frame dimensions fail the call.
#[tracing::instrument(
    skip(frames, routes, threading),
    fields(frames = frames.len(), routes = routes.len())
)]
pub fn check_routes(
    frames: &[Frame],
    routes: &[Route],
    bounds: BoundingBox,
    threading: &EvalThreading,
) -> PluviaResult<Option<WindowReport>> {
    bounds.validate()?;

    let Some(comp) = composite(frames)? else {
        return Ok(None);
    };

    let outcomes = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            routes
                .par_iter()
                .map(|route| -> PluviaResult<RouteOutcome> {
                    Ok(RouteOutcome {
                        route: route.clone(),
                        verdict: evaluate_route(&comp, route, bounds)?,
                    })
                })
                .collect::<PluviaResult<Vec<_>>>()
        })?
    } else {
        let mut out = Vec::with_capacity(routes.len());
        for route in routes {
            out.push(RouteOutcome {
                route: route.clone(),
                verdict: evaluate_route(&comp, route, bounds)?,
            });
        }
        out
    };

    Ok(Some(WindowReport {
        composite: comp,
        outcomes,
    }))
}

fn build_thread_pool(threads: Option<usize>) -> PluviaResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PluviaError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PluviaError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
