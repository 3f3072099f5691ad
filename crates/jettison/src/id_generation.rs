//! Identifier allocation for new graph objects.
//!
//! Xcode addresses every object with 24 uppercase hex characters. The
//! collision space is large but not provably safe, so a candidate is always
//! checked against the live store and regenerated on a hit; callers attach
//! each new object before allocating the next one, which keeps allocations
//! earlier in the same run inside the collision universe.

use rand::Rng;

use crate::domain::ObjectId;
use crate::store::ObjectStore;

/// Number of hex characters in a graph object identifier.
pub const ID_LENGTH: usize = 24;

const HEX_UPPER: &[u8] = b"0123456789ABCDEF";

/// Allocate an identifier that is not resident in the store.
pub fn allocate(store: &ObjectStore) -> ObjectId {
    let mut rng = rand::thread_rng();
    loop {
        let candidate = random_id(&mut rng);
        if !store.contains(&candidate) {
            return candidate;
        }
    }
}

fn random_id(rng: &mut impl Rng) -> ObjectId {
    let mut id = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        id.push(HEX_UPPER[rng.gen_range(0..HEX_UPPER.len())] as char);
    }
    ObjectId::new(id)
}
