use super::*;

fn sorted(roots: Vec<f32>) -> Vec<f32> {
    let mut roots = roots;
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    roots
}

fn roots_near(roots: Vec<f32>, expected: &[f32]) -> bool {
    let roots = sorted(roots);

    roots.len() == expected.len() && roots.iter().zip(expected.iter()).all(|(a, b)| (a-b).abs() < 0.01)
}

#[test]
fn solve_linear_equation() {
    assert!(roots_near(bezier::solve_linear(2.0, -1.0), &[0.5]));
    assert!(bezier::solve_linear(0.0, 1.0).is_empty());
}

#[test]
fn solve_quadratic_equation() {
    assert!(roots_near(bezier::solve_quadratic(1.0, -3.0, 2.0), &[1.0, 2.0]));
}

#[test]
fn quadratic_with_no_real_roots() {
    assert!(bezier::solve_quadratic(1.0, 0.0, 1.0).is_empty());
}

#[test]
fn degenerate_quadratic_is_linear() {
    assert!(roots_near(bezier::solve_quadratic(0.0, 2.0, -1.0), &[0.5]));
}

#[test]
fn solve_cubic_equation() {
    assert!(roots_near(bezier::solve_cubic(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]));
}

#[test]
fn degenerate_cubic_is_quadratic() {
    assert!(roots_near(bezier::solve_cubic(0.0, 1.0, -3.0, 2.0), &[1.0, 2.0]));
}

#[test]
fn solve_quartic_equation() {
    assert!(roots_near(bezier::solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0), &[1.0, 2.0, 3.0, 4.0]));
}

#[test]
fn clip_roots() {
    let clipped = sorted(bezier::clip_roots_to_curve(vec![-0.0005, 0.5, 1.0005, 1.5, -0.5]));

    assert!(clipped == vec![0.0, 0.5, 1.0]);
}

#[test]
fn solve_basis_for_midpoint() {
    // x component of the arch is 3t^2 - 2t^3, which only reaches 0.5 at t=0.5 within the curve
    let roots = bezier::solve_basis_for_t(0.0, 0.0, 1.0, 1.0, 0.5);

    assert!(roots_near(roots, &[0.5]));
}

#[test]
fn solve_curve_for_t_finds_points_along_the_curve() {
    let curve = arch();

    for x in 1..10 {
        let t       = (x as f32)/10.0;
        let point   = curve.point_at_pos(t);
        let found   = bezier::solve_curve_for_t(&curve, &point);

        assert!(found.is_some());
        assert!(curve.point_at_pos(found.unwrap()).distance_to(&point) < 0.01);
    }
}
