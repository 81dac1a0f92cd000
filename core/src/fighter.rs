use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::types::*;

/// One fighter's gameplay state machine.
///
/// `state`/`state_time` drive the rules. `render_state`/`render_state_time`
/// trail them by one non-zero tick so a renderer never samples a clip at a
/// state change made during a zero-length frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    name: String,
    color: Color,
    state: FighterState,
    state_time: f32,
    render_state: FighterState,
    render_state_time: f32,
    position: Vec2,
    movement_direction: Vec2,
    life: f32,
    facing: Facing,
    made_contact: bool,
}

impl Fighter {
    pub fn new(profile: &FighterProfile) -> Self {
        Self {
            name: profile.name.clone(),
            color: profile.color,
            state: FighterState::Idle,
            state_time: 0.0,
            render_state: FighterState::Idle,
            render_state_time: 0.0,
            position: Vec2::ZERO,
            movement_direction: Vec2::ZERO,
            life: MAX_LIFE,
            facing: Facing::Right,
            made_contact: false,
        }
    }

    // ── Read model ──────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> FighterState {
        self.state
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn render_state(&self) -> FighterState {
        self.render_state
    }

    pub fn render_state_time(&self) -> f32 {
        self.render_state_time
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn movement_direction(&self) -> Vec2 {
        self.movement_direction
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn has_made_contact(&self) -> bool {
        self.made_contact
    }

    pub fn is_blocking(&self) -> bool {
        self.state == FighterState::Block
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attack()
    }

    pub fn has_lost(&self) -> bool {
        self.state == FighterState::Lose
    }

    /// Frame of the render clip a sprite renderer should draw.
    pub fn key_frame_index(&self) -> usize {
        self.render_state.clip().key_frame_index(self.render_state_time)
    }

    // ── Lifecycle ───────────────────────────────────────────

    /// Reset for a new round at `(x, y)`.
    pub fn get_ready(&mut self, x: f32, y: f32) {
        self.state = FighterState::Idle;
        self.render_state = FighterState::Idle;
        self.state_time = 0.0;
        self.render_state_time = 0.0;
        self.position = Vec2::new(x, y);
        self.movement_direction = Vec2::ZERO;
        self.life = MAX_LIFE;
        self.made_contact = false;
    }

    pub fn update(&mut self, delta_time: f32) {
        self.state_time += delta_time;

        if delta_time > 0.0 {
            self.render_state = self.state;
            self.render_state_time = self.state_time;
        }

        match self.state {
            FighterState::Walk => {
                self.position.x += self.movement_direction.x * MOVEMENT_SPEED * delta_time;
                self.position.y += self.movement_direction.y * MOVEMENT_SPEED * delta_time;
            }
            FighterState::Punch | FighterState::Kick | FighterState::Hurt => {
                if self.state.clip().is_finished(self.state_time) {
                    self.settle();
                }
            }
            _ => {}
        }
    }

    /// Ring bounds are applied by the match; the fighter only stores the result.
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    // ── Movement ────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.set_movement(-1.0, self.movement_direction.y);
    }

    pub fn move_right(&mut self) {
        self.set_movement(1.0, self.movement_direction.y);
    }

    pub fn move_up(&mut self) {
        self.set_movement(self.movement_direction.x, 1.0);
    }

    pub fn move_down(&mut self) {
        self.set_movement(self.movement_direction.x, -1.0);
    }

    // A release only counts if it matches the direction currently held,
    // so releasing A after pressing D keeps walking right.

    pub fn stop_moving_left(&mut self) {
        if self.movement_direction.x == -1.0 {
            self.set_movement(0.0, self.movement_direction.y);
        }
    }

    pub fn stop_moving_right(&mut self) {
        if self.movement_direction.x == 1.0 {
            self.set_movement(0.0, self.movement_direction.y);
        }
    }

    pub fn stop_moving_up(&mut self) {
        if self.movement_direction.y == 1.0 {
            self.set_movement(self.movement_direction.x, 0.0);
        }
    }

    pub fn stop_moving_down(&mut self) {
        if self.movement_direction.y == -1.0 {
            self.set_movement(self.movement_direction.x, 0.0);
        }
    }

    fn set_movement(&mut self, x: f32, y: f32) {
        self.movement_direction = Vec2::new(x, y);
        if self.state == FighterState::Walk && self.movement_direction.is_zero() {
            self.change_state(FighterState::Idle);
        } else if self.state == FighterState::Idle && !self.movement_direction.is_zero() {
            self.change_state(FighterState::Walk);
        }
    }

    // ── Actions ─────────────────────────────────────────────

    pub fn block(&mut self) {
        if self.state.is_neutral() {
            self.change_state(FighterState::Block);
        }
    }

    pub fn stop_blocking(&mut self) {
        if self.state == FighterState::Block {
            self.settle();
        }
    }

    pub fn punch(&mut self) {
        self.attack(FighterState::Punch);
    }

    pub fn kick(&mut self) {
        self.attack(FighterState::Kick);
    }

    fn attack(&mut self, attack: FighterState) {
        if self.state.is_neutral() {
            self.change_state(attack);
            self.made_contact = false;
        }
    }

    /// True while the current swing can still land: strictly inside the
    /// middle third of the attack clip, and only until it has hit once.
    pub fn is_attack_active(&self) -> bool {
        if self.made_contact || !self.state.is_attack() {
            return false;
        }
        let duration = self.state.clip().duration();
        self.state_time > duration * ATTACK_WINDOW_START
            && self.state_time < duration * ATTACK_WINDOW_END
    }

    pub fn make_contact(&mut self) {
        self.made_contact = true;
    }

    /// Apply an incoming hit. Returns the life actually removed, or `None`
    /// when the fighter is immune.
    pub fn get_hit(&mut self, damage: f32) -> Option<f32> {
        if self.state.is_hit_immune() {
            return None;
        }

        let blocking = self.is_blocking();
        let applied = if blocking {
            damage * BLOCK_DAMAGE_FACTOR
        } else {
            damage
        };
        self.life -= applied;

        if self.life <= 0.0 {
            self.lose();
        } else if !blocking {
            self.change_state(FighterState::Hurt);
        }
        Some(applied)
    }

    pub fn win(&mut self) {
        self.change_state(FighterState::Win);
    }

    pub fn lose(&mut self) {
        self.change_state(FighterState::Lose);
        self.life = 0.0;
    }

    pub fn face_left(&mut self) {
        self.facing = Facing::Left;
    }

    pub fn face_right(&mut self) {
        self.facing = Facing::Right;
    }

    // ── Internals ───────────────────────────────────────────

    /// Walk if a direction is still held, otherwise stand.
    fn settle(&mut self) {
        if self.movement_direction.is_zero() {
            self.change_state(FighterState::Idle);
        } else {
            self.change_state(FighterState::Walk);
        }
    }

    fn change_state(&mut self, next: FighterState) {
        debug!(fighter = %self.name, from = ?self.state, to = ?next, "state change");
        self.state = next;
        self.state_time = 0.0;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn ready_fighter() -> Fighter {
        let mut f = Fighter::new(&FighterProfile {
            name: "Test".to_string(),
            color: Color::rgba(1.0, 1.0, 1.0, 1.0),
        });
        f.get_ready(20.0, 10.0);
        f
    }

    /// Advance in small steps so clip boundaries are crossed the way a game loop would.
    pub(crate) fn advance(f: &mut Fighter, seconds: f32) {
        let steps = (seconds / 0.01).round() as usize;
        for _ in 0..steps {
            f.update(0.01);
        }
    }

    #[test]
    fn get_ready_resets_everything() {
        let mut f = ready_fighter();
        f.move_right();
        f.get_hit(30.0);
        f.get_ready(5.0, 6.0);
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.render_state(), FighterState::Idle);
        assert_eq!(f.state_time(), 0.0);
        assert_eq!(f.position(), Vec2::new(5.0, 6.0));
        assert!(f.movement_direction().is_zero());
        assert_eq!(f.life(), MAX_LIFE);
        assert!(!f.has_made_contact());
    }

    #[test]
    fn moving_from_idle_starts_walk_immediately() {
        let mut f = ready_fighter();
        f.move_left();
        assert_eq!(f.state(), FighterState::Walk);
        assert_eq!(f.movement_direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn zeroing_movement_stops_walk_immediately() {
        let mut f = ready_fighter();
        f.move_left();
        f.move_up();
        f.stop_moving_left();
        assert_eq!(f.state(), FighterState::Walk);
        f.stop_moving_up();
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn stop_for_inactive_direction_is_noop() {
        let mut f = ready_fighter();
        f.move_right();
        f.stop_moving_left();
        assert_eq!(f.movement_direction(), Vec2::new(1.0, 0.0));
        assert_eq!(f.state(), FighterState::Walk);

        let mut idle = ready_fighter();
        idle.stop_moving_left();
        assert!(idle.movement_direction().is_zero());
        assert_eq!(idle.state(), FighterState::Idle);
    }

    #[test]
    fn walking_integrates_position() {
        let mut f = ready_fighter();
        f.move_right();
        f.move_down();
        f.update(0.5);
        assert!((f.position().x - 25.0).abs() < 1e-4);
        assert!((f.position().y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn idle_does_not_move() {
        let mut f = ready_fighter();
        f.update(1.0);
        assert_eq!(f.position(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn render_state_skips_zero_delta() {
        let mut f = ready_fighter();
        f.punch();
        f.update(0.0);
        assert_eq!(f.state(), FighterState::Punch);
        assert_eq!(f.render_state(), FighterState::Idle);
        f.update(0.02);
        assert_eq!(f.render_state(), FighterState::Punch);
        assert!((f.render_state_time() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn block_only_from_neutral() {
        let mut f = ready_fighter();
        f.punch();
        f.block();
        assert_eq!(f.state(), FighterState::Punch);

        let mut g = ready_fighter();
        g.move_left();
        g.block();
        assert_eq!(g.state(), FighterState::Block);
        g.stop_blocking();
        assert_eq!(g.state(), FighterState::Walk);

        let mut h = ready_fighter();
        h.block();
        h.stop_blocking();
        assert_eq!(h.state(), FighterState::Idle);
    }

    #[test]
    fn attacks_cannot_cancel_each_other() {
        let mut f = ready_fighter();
        f.punch();
        f.kick();
        assert_eq!(f.state(), FighterState::Punch);
        f.block();
        assert_eq!(f.state(), FighterState::Punch);
    }

    #[test]
    fn attack_window_is_middle_third() {
        let mut f = ready_fighter();
        f.kick();
        advance(&mut f, 0.09);
        assert!(!f.is_attack_active());
        advance(&mut f, 0.03); // 0.12
        assert!(f.is_attack_active());
        advance(&mut f, 0.06); // 0.18
        assert!(f.is_attack_active());
        advance(&mut f, 0.03); // 0.21
        assert!(!f.is_attack_active());
    }

    #[test]
    fn contact_closes_window_until_next_swing() {
        let mut f = ready_fighter();
        f.punch();
        advance(&mut f, 0.12);
        assert!(f.is_attack_active());
        f.make_contact();
        assert!(!f.is_attack_active());
        advance(&mut f, 0.05);
        assert!(!f.is_attack_active());

        advance(&mut f, 0.3);
        assert_eq!(f.state(), FighterState::Idle);
        f.punch();
        assert!(!f.has_made_contact());
        advance(&mut f, 0.12);
        assert!(f.is_attack_active());
    }

    #[test]
    fn finished_attack_returns_to_walk_when_direction_held() {
        let mut f = ready_fighter();
        f.punch();
        f.move_right();
        // Movement is recorded but does not interrupt the punch
        assert_eq!(f.state(), FighterState::Punch);
        advance(&mut f, 0.35);
        assert_eq!(f.state(), FighterState::Walk);
    }

    #[test]
    fn hurt_recovers_to_idle() {
        let mut f = ready_fighter();
        f.get_hit(HIT_STRENGTH);
        assert_eq!(f.state(), FighterState::Hurt);
        advance(&mut f, 0.1);
        assert_eq!(f.state(), FighterState::Hurt);
        advance(&mut f, 0.1);
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn full_hit_hurts() {
        let mut f = ready_fighter();
        assert_eq!(f.get_hit(HIT_STRENGTH), Some(HIT_STRENGTH));
        assert_eq!(f.life(), MAX_LIFE - HIT_STRENGTH);
        assert_eq!(f.state(), FighterState::Hurt);
    }

    #[test]
    fn hurt_fighter_is_immune() {
        let mut f = ready_fighter();
        f.get_hit(HIT_STRENGTH);
        assert_eq!(f.get_hit(HIT_STRENGTH), None);
        assert_eq!(f.life(), MAX_LIFE - HIT_STRENGTH);
    }

    #[test]
    fn blocked_hit_takes_fifth_and_keeps_blocking() {
        let mut f = ready_fighter();
        f.block();
        let applied = f.get_hit(HIT_STRENGTH).unwrap();
        assert!((applied - 1.0).abs() < 1e-6);
        assert!((f.life() - 99.0).abs() < 1e-4);
        assert_eq!(f.state(), FighterState::Block);
    }

    #[test]
    fn lethal_hit_through_block_loses() {
        let mut f = ready_fighter();
        f.block();
        // 100 life at 1 per blocked hit
        for _ in 0..99 {
            f.get_hit(HIT_STRENGTH);
            assert_eq!(f.state(), FighterState::Block);
        }
        f.get_hit(HIT_STRENGTH);
        assert_eq!(f.state(), FighterState::Lose);
        assert_eq!(f.life(), 0.0);
    }

    #[test]
    fn overkill_clamps_life_to_zero() {
        let mut f = ready_fighter();
        f.get_hit(250.0);
        assert_eq!(f.life(), 0.0);
        assert!(f.has_lost());
    }

    #[test]
    fn win_and_lose_are_terminal() {
        let mut f = ready_fighter();
        f.win();
        f.move_left();
        f.punch();
        f.block();
        assert_eq!(f.get_hit(HIT_STRENGTH), None);
        advance(&mut f, 1.0);
        assert_eq!(f.state(), FighterState::Win);

        let mut g = ready_fighter();
        g.lose();
        assert_eq!(g.life(), 0.0);
        advance(&mut g, 1.0);
        assert_eq!(g.state(), FighterState::Lose);
        g.get_ready(0.0, 0.0);
        assert_eq!(g.state(), FighterState::Idle);
    }

    #[test]
    fn facing_does_not_touch_state() {
        let mut f = ready_fighter();
        f.punch();
        f.face_left();
        assert_eq!(f.facing(), Facing::Left);
        assert_eq!(f.state(), FighterState::Punch);
        f.face_right();
        assert_eq!(f.facing().sign(), 1);
    }

    proptest! {
        #[test]
        fn life_stays_in_bounds(
            hits in proptest::collection::vec((0.0f32..60.0, any::<bool>(), 0.0f32..0.3), 0..40)
        ) {
            let mut f = ready_fighter();
            for (damage, block, wait) in hits {
                if block { f.block() } else { f.stop_blocking() }
                f.get_hit(damage);
                f.update(wait);
                prop_assert!(f.life() >= 0.0 && f.life() <= MAX_LIFE);
            }
        }

        #[test]
        fn blocked_damage_is_exactly_a_fifth(damage in 0.0f32..200.0) {
            let mut f = ready_fighter();
            f.block();
            let before = f.life();
            f.get_hit(damage);
            if before - damage * BLOCK_DAMAGE_FACTOR <= 0.0 {
                prop_assert_eq!(f.state(), FighterState::Lose);
                prop_assert_eq!(f.life(), 0.0);
            } else {
                prop_assert_eq!(f.state(), FighterState::Block);
                prop_assert!((f.life() - (before - damage * BLOCK_DAMAGE_FACTOR)).abs() < 1e-3);
            }
        }
    }
}
