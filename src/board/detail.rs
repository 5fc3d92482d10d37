// ABOUTME: Reference identifiers for the job detail modal
// ABOUTME: A fresh random id is drawn every time the modal opens

use rand::Rng;

pub const REFERENCE_PREFIX: &str = "NJP-";

/// `NJP-` followed by a random number in 1000..=9999.
pub fn generate_reference() -> String {
    let mut rng = rand::thread_rng();
    let suffix: u16 = rng.gen_range(1000..=9999);
    format!("{}{}", REFERENCE_PREFIX, suffix)
}
