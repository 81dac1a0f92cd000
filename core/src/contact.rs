use crate::constants::HIT_STRENGTH;
use crate::fighter::Fighter;
use crate::types::{ContactBox, Vec2};

/// Per-axis box test between two fighter positions. Not a radius.
pub fn within_contact_distance(a: Vec2, b: Vec2, contact: &ContactBox) -> bool {
    (a.x - b.x).abs() <= contact.distance_x && (a.y - b.y).abs() <= contact.distance_y
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactHit {
    pub damage: f32,
    pub blocked: bool,
    pub remaining_life: f32,
    pub knockout: bool,
}

/// Land `attacker`'s swing on `defender` if it is active and in range.
///
/// A connecting swing is spent even when the defender is immune, so one
/// punch can never hit twice. Returns `None` when nothing landed.
pub fn resolve_attack(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    contact: &ContactBox,
) -> Option<ContactHit> {
    if !within_contact_distance(attacker.position(), defender.position(), contact) {
        return None;
    }
    if !attacker.is_attack_active() {
        return None;
    }

    let blocked = defender.is_blocking();
    let landed = defender.get_hit(HIT_STRENGTH);
    attacker.make_contact();

    landed.map(|damage| ContactHit {
        damage,
        blocked,
        remaining_life: defender.life(),
        knockout: defender.has_lost(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::fighter::tests::{advance, ready_fighter};
    use crate::types::FighterState;

    fn pair_at(dx: f32, dy: f32) -> (Fighter, Fighter) {
        let mut a = ready_fighter();
        let mut b = ready_fighter();
        a.get_ready(20.0, 10.0);
        b.get_ready(20.0 + dx, 10.0 + dy);
        (a, b)
    }

    #[test]
    fn box_test_is_inclusive_per_axis() {
        let c = ContactBox::default();
        assert!(within_contact_distance(Vec2::new(0.0, 0.0), Vec2::new(7.5, 1.5), &c));
        assert!(!within_contact_distance(Vec2::new(0.0, 0.0), Vec2::new(7.6, 0.0), &c));
        assert!(!within_contact_distance(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.6), &c));
        // Diagonal beyond a 7.5 radius still counts
        assert!(within_contact_distance(Vec2::new(0.0, 0.0), Vec2::new(7.4, 1.4), &c));
    }

    #[test]
    fn inactive_attack_does_nothing() {
        let (mut a, mut b) = pair_at(3.0, 0.0);
        a.punch();
        assert_eq!(resolve_attack(&mut a, &mut b, &ContactBox::default()), None);
        assert_eq!(b.life(), MAX_LIFE);
        assert!(!a.has_made_contact());
    }

    #[test]
    fn active_attack_in_range_lands_once() {
        let (mut a, mut b) = pair_at(3.0, 0.5);
        a.punch();
        advance(&mut a, 0.12);
        let hit = resolve_attack(&mut a, &mut b, &ContactBox::default()).unwrap();
        assert_eq!(hit.damage, HIT_STRENGTH);
        assert!(!hit.blocked);
        assert!(!hit.knockout);
        assert_eq!(b.state(), FighterState::Hurt);
        assert!(a.has_made_contact());

        advance(&mut b, 0.2);
        assert_eq!(resolve_attack(&mut a, &mut b, &ContactBox::default()), None);
        assert_eq!(b.life(), MAX_LIFE - HIT_STRENGTH);
    }

    #[test]
    fn out_of_range_swing_is_not_spent() {
        let (mut a, mut b) = pair_at(10.0, 0.0);
        a.kick();
        advance(&mut a, 0.12);
        assert_eq!(resolve_attack(&mut a, &mut b, &ContactBox::default()), None);
        assert!(a.is_attack_active());
    }

    #[test]
    fn blocked_hit_is_reported() {
        let (mut a, mut b) = pair_at(-3.0, 0.0);
        b.block();
        a.punch();
        advance(&mut a, 0.12);
        let hit = resolve_attack(&mut a, &mut b, &ContactBox::default()).unwrap();
        assert!(hit.blocked);
        assert!((hit.damage - HIT_STRENGTH * BLOCK_DAMAGE_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn immune_defender_still_spends_swing() {
        let (mut a, mut b) = pair_at(3.0, 0.0);
        b.get_hit(1.0);
        assert_eq!(b.state(), FighterState::Hurt);
        a.punch();
        advance(&mut a, 0.12);
        assert_eq!(resolve_attack(&mut a, &mut b, &ContactBox::default()), None);
        assert!(a.has_made_contact());
    }
}
