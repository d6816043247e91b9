use super::{AU_KM, ElementsError, Matrix3, OrbitPath, OrbitalElements, RequiredElement, Vec3D};
use crate::http_handler::http_response::sbdb::SbdbResponse;
use rand::Rng;
use serde_json::json;
use std::f64::consts::{PI, TAU};

const REL_TOL: f64 = 1e-9;

fn rand_angles() -> (f64, f64, f64) {
    let mut rng = rand::rng();
    (rng.random_range(0.0..PI), rng.random_range(0.0..TAU), rng.random_range(0.0..TAU))
}

fn sbdb_with(elements: &serde_json::Value) -> SbdbResponse {
    serde_json::from_value(json!({
        "object": { "fullname": "433 Eros (A898 PA)" },
        "orbit": { "elements": elements },
    }))
    .unwrap()
}

fn eros_elements() -> serde_json::Value {
    json!([
        { "name": "e", "value": "0.2228", "sigma": "1.2e-9" },
        { "name": "a", "value": "1.458" },
        { "name": "q", "value": "1.133" },
        { "name": "i", "value": "10.83" },
        { "name": "om", "value": "304.3" },
        { "name": "w", "value": "178.9" },
        { "name": "ma", "value": "310.5" },
    ])
}

#[test]
fn test_circular_orbit_constant_radius() {
    for _ in 0..20 {
        let (inc, raan, argp) = rand_angles();
        let elements = OrbitalElements::new(AU_KM, 0.0, inc, raan, argp, 0.0);
        let path = OrbitPath::sample(&elements);
        for point in path.points() {
            assert!((point.abs() - AU_KM).abs() <= AU_KM * REL_TOL, "{point} off circle");
        }
    }
}

#[test]
fn test_zero_inclination_stays_in_plane() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let (_, raan, argp) = rand_angles();
        let ecc = rng.random_range(0.0..0.95);
        let elements = OrbitalElements::new(2.0 * AU_KM, ecc, 0.0, raan, argp, 0.0);
        let path = OrbitPath::sample(&elements);
        for point in path.points() {
            assert!(point.z().abs() <= path.max_radius() * REL_TOL, "{point} leaves the plane");
        }
    }
}

#[test]
fn test_sample_count_and_closing_point() {
    let (inc, raan, argp) = rand_angles();
    let elements = OrbitalElements::new(1.3 * AU_KM, 0.4, inc, raan, argp, 1.0);
    let path = OrbitPath::sample(&elements);
    assert_eq!(path.len(), OrbitPath::NUM_POINTS);
    assert_eq!(path.len(), 200);
    let first = path.points()[0];
    let last = path.points()[199];
    assert!(first.euclid_distance(&last) <= path.max_radius() * REL_TOL);
}

#[test]
fn test_true_anomalies_span_full_revolution() {
    let anomalies: Vec<f64> = OrbitPath::true_anomalies().collect();
    assert_eq!(anomalies.len(), 200);
    assert!(anomalies[0].abs() < f64::EPSILON);
    assert!((anomalies[199] - TAU).abs() < f64::EPSILON);
    assert!(anomalies.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_planar_circle() {
    let elements = OrbitalElements::new(AU_KM, 0.0, 0.0, 0.0, 0.0, 0.0);
    let path = OrbitPath::sample(&elements);
    for (point, ta) in path.points().iter().zip(OrbitPath::true_anomalies()) {
        let expected = Vec3D::new(AU_KM * ta.cos(), AU_KM * ta.sin(), 0.0);
        assert!(point.euclid_distance(&expected) <= AU_KM * REL_TOL, "{point} != {expected}");
    }
}

#[test]
fn test_matches_explicit_rotation_terms() {
    let (inc, raan, argp) = rand_angles();
    let (a, e) = (1.7 * AU_KM, 0.31);
    let path = OrbitPath::sample(&OrbitalElements::new(a, e, inc, raan, argp, 0.0));
    let (cos_o, sin_o) = (raan.cos(), raan.sin());
    let (cos_w, sin_w) = (argp.cos(), argp.sin());
    let (cos_i, sin_i) = (inc.cos(), inc.sin());
    for (point, ta) in path.points().iter().zip(OrbitPath::true_anomalies()) {
        let r = a * (1.0 - e * e) / (1.0 + e * ta.cos());
        let (x_p, y_p) = (r * ta.cos(), r * ta.sin());
        let x = (cos_o * cos_w - sin_o * sin_w * cos_i) * x_p
            + (-cos_o * sin_w - sin_o * cos_w * cos_i) * y_p;
        let y = (sin_o * cos_w + cos_o * sin_w * cos_i) * x_p
            + (-sin_o * sin_w + cos_o * cos_w * cos_i) * y_p;
        let z = (sin_w * sin_i) * x_p + (cos_w * sin_i) * y_p;
        let expected = Vec3D::new(x, y, z);
        assert!(point.euclid_distance(&expected) <= a * REL_TOL);
    }
}

#[test]
fn test_rotation_is_orthonormal() {
    let (inc, raan, argp) = rand_angles();
    let rot = Matrix3::perifocal_to_inertial(raan, argp, inc);
    let prod = rot * rot.transpose();
    let id = Matrix3::identity();
    for row in 0..3 {
        for col in 0..3 {
            assert!((prod.get(row, col) - id.get(row, col)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_eccentric_orbit_extremes() {
    let elements = OrbitalElements::new(AU_KM, 0.5, 0.0, 0.0, 0.0, 0.0);
    let path = OrbitPath::sample(&elements);
    // θ = 0 is periapsis
    assert!((path.points()[0].abs() - elements.periapsis()).abs() <= AU_KM * REL_TOL);
    assert!(path.max_radius() <= elements.apoapsis() * (1.0 + REL_TOL));
    assert!(path.max_radius() > 0.99 * elements.apoapsis());
}

#[test]
fn test_elements_from_sbdb() {
    let elements = OrbitalElements::from_sbdb(&sbdb_with(&eros_elements())).unwrap();
    assert!((elements.semi_major_axis() - 1.458 * AU_KM).abs() < 1e-3);
    assert!((elements.eccentricity() - 0.2228).abs() < f64::EPSILON);
    assert!((elements.inclination() - 10.83_f64.to_radians()).abs() < 1e-12);
    assert!((elements.raan() - 304.3_f64.to_radians()).abs() < 1e-12);
    assert!((elements.arg_periapsis() - 178.9_f64.to_radians()).abs() < 1e-12);
    assert!((elements.mean_anomaly() - 310.5_f64.to_radians()).abs() < 1e-12);
    println!("Eros: {elements}");
}

#[test]
fn test_elements_accept_numeric_values() {
    let sbdb = sbdb_with(&json!([
        { "name": "a", "value": 2.5 },
        { "name": "e", "value": 0.1 },
        { "name": "i", "value": 3 },
        { "name": "om", "value": "80" },
        { "name": "w", "value": "73.5" },
        { "name": "ma", "value": "0" },
    ]));
    let elements = OrbitalElements::from_sbdb(&sbdb).unwrap();
    assert!((elements.semi_major_axis() - 2.5 * AU_KM).abs() < 1e-3);
}

#[test]
fn test_elements_missing_eccentricity() {
    let mut list = eros_elements();
    list.as_array_mut().unwrap().retain(|el| el["name"] != "e");
    let err = OrbitalElements::from_sbdb(&sbdb_with(&list)).unwrap_err();
    assert_eq!(err, ElementsError::Incomplete(vec![RequiredElement::E]));
    assert_eq!(err.to_string(), "missing orbital elements: e");
}

#[test]
fn test_elements_blank_values_count_as_missing() {
    let sbdb = sbdb_with(&json!([
        { "name": "a", "value": "1.458" },
        { "name": "e", "value": "" },
        { "name": "i", "value": "null" },
        { "name": "om", "value": null },
        { "name": "w", "value": "178.9" },
        { "value": "310.5" },
    ]));
    let err = OrbitalElements::from_sbdb(&sbdb).unwrap_err();
    assert_eq!(
        err,
        ElementsError::Incomplete(vec![
            RequiredElement::E,
            RequiredElement::I,
            RequiredElement::Om,
            RequiredElement::Ma
        ])
    );
}

#[test]
fn test_elements_without_orbit() {
    let sbdb: SbdbResponse =
        serde_json::from_value(json!({ "message": "specified object was not found" })).unwrap();
    assert_eq!(sbdb.message(), Some("specified object was not found"));
    let err = OrbitalElements::from_sbdb(&sbdb).unwrap_err();
    assert!(matches!(err, ElementsError::Incomplete(ref missing) if missing.len() == 6));
}

#[test]
fn test_elements_non_numeric_value() {
    let mut list = eros_elements();
    list[0]["value"] = json!("0.22x");
    let err = OrbitalElements::from_sbdb(&sbdb_with(&list)).unwrap_err();
    match err {
        ElementsError::Conversion(conv) => {
            assert_eq!(conv.field, "e");
            assert_eq!(conv.value, "\"0.22x\"");
        }
        ElementsError::Incomplete(_) => panic!("expected conversion error"),
    }
}

#[test]
fn test_required_element_keys() {
    let keys: Vec<&str> = [
        RequiredElement::A,
        RequiredElement::E,
        RequiredElement::I,
        RequiredElement::Om,
        RequiredElement::W,
        RequiredElement::Ma,
    ]
    .into_iter()
    .map(RequiredElement::key)
    .collect();
    assert_eq!(keys, ["a", "e", "i", "om", "w", "ma"]);
}

#[test]
fn test_path_serializes_as_triples() {
    let path = OrbitPath::sample(&OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    let value = serde_json::to_value(&path).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 200);
    assert_eq!(arr[0], json!([1.0, 0.0, 0.0]));
    let back: OrbitPath = serde_json::from_value(value).unwrap();
    assert_eq!(back, path);
}
