use crate::bank::Bank;

/// Sample banks a fresh development store starts with.
#[allow(clippy::approx_constant)]
pub fn sample_banks() -> Vec<Bank> {
    vec![
        Bank::new("1234", 3.14, 17),
        Bank::new("1010", 17.0, 0),
        Bank::new("5678", 0.0, 100),
    ]
}
