//! Randomized cross-module properties.
//!
//! Each test draws its inputs from a seeded [`fastrand::Rng`], so failures
//! reproduce deterministically.

use lucent_linalg::*;

fn random_vec3(rng: &mut fastrand::Rng, scale: f32) -> Vec3f {
    Vector::from_fn(|_| (rng.f32() - 0.5) * scale)
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quatf {
    use std::f32::consts::TAU;
    Quat::from_euler(
        (rng.f32() - 0.5) * TAU,
        (rng.f32() - 0.5) * TAU,
        (rng.f32() - 0.5) * TAU,
    )
}

/// Scales are kept away from zero so matrices stay comfortably invertible.
fn random_transform(rng: &mut fastrand::Rng) -> Transformf {
    Transform::new(
        Vector::from_fn(|_| 0.5 + rng.f32() * 2.0),
        random_rotation(rng),
        random_vec3(rng, 10.0),
    )
}

fn assert_same_rotation(a: Quatf, b: Quatf) {
    // q and -q encode the same rotation.
    assert_approx_eq!(a.dot(b).abs(), 1.0, "{a:?} vs {b:?}").abs(1e-4);
}

#[test]
fn matrix_inverse_round_trip() {
    let mut rng = fastrand::Rng::with_seed(1);
    for _ in 0..100 {
        let m = random_transform(&mut rng).matrix();
        assert_approx_eq!(m * m.invert(), Mat4f::IDENTITY).abs(1e-4);
        assert_approx_eq!(m.invert() * m, Mat4f::IDENTITY).abs(1e-4);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn cross_product_laws() {
    let mut rng = fastrand::Rng::with_seed(2);
    for _ in 0..100 {
        let a = random_vec3(&mut rng, 4.0);
        let b = random_vec3(&mut rng, 4.0);
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0).abs(1e-4);
        assert_approx_eq!(c.dot(b), 0.0).abs(1e-4);
        assert_approx_eq!(c, -(b.cross(a)));
    }
}

#[test]
fn axis_selection_matches_linear_scan() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..500 {
        // A small value set produces plenty of ties.
        let v: Vec3<i32> = Vector::from_fn(|_| rng.i32(-2..3));

        let mut expect_max = 0;
        let mut expect_min = 0;
        for i in 1..3 {
            if v[i] > v[expect_max] {
                expect_max = i;
            }
            if v[i] < v[expect_min] {
                expect_min = i;
            }
        }
        assert_eq!(v.max_axis(), expect_max, "{v:?}");
        assert_eq!(v.min_axis(), expect_min, "{v:?}");
    }
}

#[test]
fn quat_matrix_round_trip() {
    let mut rng = fastrand::Rng::with_seed(4);
    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        assert_same_rotation(Quat::from_matrix3(q.to_matrix3()), q);
        assert_same_rotation(Quat::from_matrix4(q.to_matrix4()), q);

        // Rotating via the double-cross form matches the matrix product.
        let v = random_vec3(&mut rng, 5.0);
        assert_approx_eq!(q.rotate(v), v * q.to_matrix3()).abs(1e-4);
    }
}

#[test]
fn slerp_properties() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..100 {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        let t = rng.f32();

        assert_approx_eq!(a.slerp(b, 0.0).to_vec(), a.to_vec()).abs(1e-5);
        assert_same_rotation(a.slerp(b, 1.0), b);
        assert_approx_eq!(a.slerp(a, t).to_vec(), a.to_vec()).abs(1e-5);

        // The interpolate stays on the unit sphere and is indifferent to
        // which hemisphere `b` was given on.
        let direct = a.slerp(b, t);
        assert_approx_eq!(direct.length(), 1.0).abs(1e-4);
        assert_same_rotation(direct, a.slerp(-b, t));
    }
}

#[test]
fn transform_round_trips() {
    let mut rng = fastrand::Rng::with_seed(6);
    for _ in 0..100 {
        let t = random_transform(&mut rng);
        let p = random_vec3(&mut rng, 8.0);

        let inv = t.inverse();
        assert_approx_eq!(t.transform_point(inv.transform_point(p)), p).abs(1e-3);
        assert_approx_eq!(inv.transform_point(t.transform_point(p)), p).abs(1e-3);

        let double = inv.inverse();
        assert_approx_eq!(double.scale(), t.scale()).abs(1e-4);
        assert_approx_eq!(double.position(), t.position()).abs(1e-3);
        assert_same_rotation(double.rotation(), t.rotation());
    }
}

#[test]
fn transform_composition() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let p = random_vec3(&mut rng, 8.0);

        let expected = b.transform_point(a.transform_point(p));
        let composed = a * b;
        assert_approx_eq!(composed.transform_point(p), expected).abs(1e-3);
        assert_approx_eq!(
            composed.inverse_matrix() * composed.matrix(),
            Mat4f::IDENTITY,
        )
        .abs(1e-3);
    }
}

#[test]
fn decompose_rebuilds_matrix() {
    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..100 {
        let m = random_transform(&mut rng).matrix();
        let (scale, rotation, translation) = m.decompose_affine();
        let rebuilt = Transform::new(scale, rotation, translation).matrix();
        assert_approx_eq!(rebuilt, m).abs(1e-4);
    }
}

#[test]
fn transformed_bounds_contain_transformed_corners() {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..100 {
        let t = random_transform(&mut rng);
        let a = random_vec3(&mut rng, 6.0);
        let b = random_vec3(&mut rng, 6.0);
        let bounds = Bounds::new(a.min(b), a.max(b));

        let out = t.transform_bounds(bounds);
        for corner in bounds.corners() {
            // Expanded by a hair to absorb the union's float rounding.
            assert!(out.expand(1e-3).contains(t.transform_point(corner)));
        }
    }
}

#[test]
fn bounds_laws() {
    let mut rng = fastrand::Rng::with_seed(10);
    for _ in 0..200 {
        let a = random_vec3(&mut rng, 6.0);
        let b = random_vec3(&mut rng, 6.0);
        let c = random_vec3(&mut rng, 6.0);
        let x = Bounds::new(a.min(b), a.max(b));
        let y = Bounds::new(b.min(c), b.max(c));
        let z = Bounds::from_point(c);

        assert_eq!(Bounds3f::EMPTY.union(x), x);
        assert_eq!(x.union(x), x);
        assert_eq!(x.union(y), y.union(x));
        assert_eq!(x.union(y).union(z), x.union(y.union(z)));

        assert!(x.overlaps(&x));
        assert!(x.contains(x.center()));
        assert_eq!(x.distance2(x.center()), 0.0);
        assert_eq!(x.overlaps(&y), y.overlaps(&x));
        if x.overlaps(&y) {
            let i = x.intersection(y);
            assert!(!i.is_empty());
            assert!(x.union(y).contains(i.center()));
        } else {
            assert!(x.intersection(y).is_empty());
        }
    }
}

#[test]
fn interval_follows_the_same_laws() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..200 {
        let (a, b) = (rng.f32() * 10.0, rng.f32() * 10.0);
        let (c, d) = (rng.f32() * 10.0, rng.f32() * 10.0);
        let x = Intervalf::from_endpoints(a.min(b), a.max(b));
        let y = Intervalf::from_endpoints(c.min(d), c.max(d));

        assert_eq!(Interval::EMPTY.union(x), x);
        assert_eq!(x.union(y), y.union(x));
        assert!(x.contains(x.center()));
        assert_eq!(x.overlaps(&y), y.overlaps(&x));
        assert_eq!(
            x.overlaps(&y),
            x.lower().x <= y.upper().x && y.lower().x <= x.upper().x,
        );
    }
}
