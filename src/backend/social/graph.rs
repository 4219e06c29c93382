/**
 * Social Graph Engine
 *
 * Friend-request lifecycle on top of the identity store. A pending request
 * from R to T is the membership of R in T's `pending_requests`; accepting it
 * turns it into a mutual friend edge.
 *
 * # Invariants
 *
 * After every operation, for all identities a and b:
 * - `a ∈ friends(b)` exactly when `b ∈ friends(a)`
 * - `a ∉ friends(a)`
 * - `pending_requests(a) ∩ friends(a) = ∅`
 *
 * Each operation runs with exclusive access to the store (the hub lock), so
 * both sides of a friend edge change together.
 *
 * Unknown keys and repeated requests are no-ops reported as `None`; the
 * caller has nothing to push in that case.
 */
use crate::backend::social::identity::IdentityStore;
use crate::shared::social::IdentityKey;

/// State to push after an accepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub accepter_friends: Vec<IdentityKey>,
    pub accepter_pending: Vec<IdentityKey>,
    pub requester_friends: Vec<IdentityKey>,
    /// Requester's new pending set, only when a crossed request was settled
    pub requester_pending: Option<Vec<IdentityKey>>,
}

/// Record a friend request from `requester` to `target`
///
/// Returns the target's new pending set, or `None` when the request is
/// ignored: unknown target or requester, self request, already friends, or
/// already pending.
pub fn propose(store: &mut IdentityStore, requester: &str, target: &str) -> Option<Vec<IdentityKey>> {
    if requester == target || !store.contains(requester) {
        return None;
    }
    let target_identity = store.get_mut(target)?;
    if target_identity.is_friend(requester) || target_identity.has_pending_from(requester) {
        return None;
    }
    target_identity.pending_requests.insert(requester.to_string());
    Some(target_identity.pending_list())
}

/// Accept the pending request `requester` sent to `accepter`
///
/// Returns `None` if no such request is pending.
pub fn accept(store: &mut IdentityStore, accepter: &str, requester: &str) -> Option<Acceptance> {
    if accepter == requester || !store.contains(requester) {
        return None;
    }
    let accepter_identity = store.get_mut(accepter)?;
    if !accepter_identity.pending_requests.remove(requester) {
        return None;
    }
    accepter_identity.friends.insert(requester.to_string());
    let accepter_friends = accepter_identity.friend_list();
    let accepter_pending = accepter_identity.pending_list();

    // `contains` checked above; the store is exclusively borrowed.
    let requester_identity = store.get_mut(requester)?;
    requester_identity.friends.insert(accepter.to_string());
    // A crossed request in the other direction is settled by this acceptance.
    let requester_pending = requester_identity
        .pending_requests
        .remove(accepter)
        .then(|| requester_identity.pending_list());

    Some(Acceptance {
        accepter_friends,
        accepter_pending,
        requester_friends: requester_identity.friend_list(),
        requester_pending,
    })
}

/// Drop the pending request `requester` sent to `decliner`
///
/// Returns the decliner's new pending set, or `None` if nothing was pending.
pub fn decline(store: &mut IdentityStore, decliner: &str, requester: &str) -> Option<Vec<IdentityKey>> {
    let decliner_identity = store.get_mut(decliner)?;
    if !decliner_identity.pending_requests.remove(requester) {
        return None;
    }
    Some(decliner_identity.pending_list())
}
