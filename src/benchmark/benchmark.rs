use std::time::Instant;
use crate::simulation::lagrange::{AxisInterpolator, ControlPoint};
use crate::simulation::derivative::DerivativeEstimator;
use crate::error::TraceResult;

/// Helper to build an interpolator with `n` unevenly spaced control points
fn make_axis(n: usize) -> TraceResult<AxisInterpolator> {
    // deterministic jitter, no rand needed
    let points = (0..n).map(|i| {
        let i_f = i as f64;
        let t = i_f * 0.01 + (i_f * 0.37).sin().abs() * 0.004;
        ControlPoint::new(t, (t * 3.0).sin() * 5.0)
    });

    AxisInterpolator::from_points(points)
}

/// Query times spread over the sampled span of `axis`
fn query_times(axis: &AxisInterpolator, count: usize) -> Vec<f64> {
    let t_last = axis.points().last().map_or(0.0, |p| p.t);
    (0..count).map(|k| t_last * k as f64 / count as f64).collect()
}

/// Time `evaluate` for a range of n
/// Paste output directly into excel to graph
pub fn bench_lagrange_curve() -> TraceResult<()> {
    println!("N,evaluate_us");

    for n in (50..=2000).step_by(50) {
        // Small n: average over many queries to smooth noise
        let queries = if n <= 500 { 200 } else { 20 };

        let axis = make_axis(n)?;
        let ts = query_times(&axis, queries);

        let mut sink = 0.0;
        let t0 = Instant::now();
        for &t in &ts {
            sink += axis.evaluate(t)?;
        }
        let us = t0.elapsed().as_secs_f64() * 1e6 / queries as f64;

        // keep the optimizer from dropping the loop
        std::hint::black_box(sink);

        println!("{},{:.3}", n, us);
    }
    Ok(())
}

/// Time one velocity and one acceleration estimate for a range of n
pub fn bench_derivative_curve() -> TraceResult<()> {
    println!("N,velocity_us,acceleration_us");

    let estimator = DerivativeEstimator::default();

    for n in (50..=2000).step_by(50) {
        let queries = if n <= 500 { 50 } else { 5 };

        let axis = make_axis(n)?;
        let ts = query_times(&axis, queries);

        let mut sink = 0.0;

        let t0 = Instant::now();
        for &t in &ts {
            sink += estimator.first_derivative(&axis, t)?;
        }
        let us_v = t0.elapsed().as_secs_f64() * 1e6 / queries as f64;

        let t1 = Instant::now();
        for &t in &ts {
            sink += estimator.second_derivative(&axis, t)?;
        }
        let us_a = t1.elapsed().as_secs_f64() * 1e6 / queries as f64;

        std::hint::black_box(sink);

        println!("{},{:.3},{:.3}", n, us_v, us_a);
    }
    Ok(())
}
