use sha2::{Digest, Sha256};

use crate::model::Catalog;

/// SHA-256 of the canonical JSON form. Changes whenever any authored
/// field changes, including order.
pub fn fingerprint(catalog: &Catalog) -> String {
    let mut hasher = Sha256::new();

    for category in catalog.categories() {
        // Serializing plain derived structs cannot fail.
        if let Ok(bytes) = serde_json::to_vec(category) {
            hasher.update(&bytes);
        }
        hasher.update(b"\n");
    }

    hex::encode(hasher.finalize())
}
