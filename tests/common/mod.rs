use approx::assert_relative_eq;
use rvbasis::params::ParamRecord;

pub fn record(pairs: &[(&str, f64)]) -> ParamRecord {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

/// Two-planet record in the `per tc secosw sesinw logk` basis.
pub fn two_planet_logk_record() -> ParamRecord {
    record(&[
        ("per1", 20.885258),
        ("tc1", 2456327.6),
        ("secosw1", 0.1),
        ("sesinw1", -0.25),
        ("logk1", 2.3),
        ("per2", 42.363011),
        ("tc2", 2456328.2),
        ("secosw2", -0.4),
        ("sesinw2", 0.05),
        ("logk2", 1.1),
    ])
}

pub fn assert_cps_close(actual: &ParamRecord, expected: &ParamRecord, planet: usize, epsilon: f64) {
    for key in ["per", "tp", "e", "w", "k"] {
        let key = format!("{key}{planet}");
        assert_relative_eq!(
            actual.get(&key).unwrap(),
            expected.get(&key).unwrap(),
            epsilon = epsilon,
            max_relative = epsilon
        );
    }
}
