//! Status transition policy.

use galleria_db::OrderStatus;

/// Whether an order may move from one status to another.
///
/// The back office offers every status on every order, so today every pair
/// is permitted — including moves backwards, such as `delivered` to
/// `pending`. That permissiveness is a deliberate, visible choice; anyone
/// tightening it changes this function, not the call sites.
pub fn status_change_permitted(_from: OrderStatus, _to: OrderStatus) -> bool {
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_pair_is_currently_permitted() {
		// Total over all 16 (from, to) pairs, so any future restriction
		// shows up as a deliberate change to this table.
		for from in OrderStatus::ALL {
			for to in OrderStatus::ALL {
				assert!(
					status_change_permitted(from, to),
					"{from} -> {to} should be permitted"
				);
			}
		}
	}
}
