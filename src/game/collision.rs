//! Collision checks
//!
//! The pairwise overlap test plus the two group scans the game runs per
//! tick. Scans return marked indices and leave removal to the caller, so
//! no collection is ever mutated while it is being walked.

use macroquad::prelude::*;

use super::attack::Attack;
use super::enemy::Enemy;

/// Axis-aligned overlap test. Touching edges do not count as overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

/// Scan attacks against enemies, both in insertion order. Each attack
/// kills at most one enemy and each enemy dies at most once; the first
/// overlapping enemy wins. Returns the indices to remove from each list
/// (ascending for attacks, unordered for enemies).
pub fn resolve_attack_hits(attacks: &[Attack], enemies: &[Enemy]) -> (Vec<usize>, Vec<usize>) {
    let mut hit_attacks = Vec::new();
    let mut hit_enemies = Vec::new();

    for (ai, attack) in attacks.iter().enumerate() {
        for (ei, enemy) in enemies.iter().enumerate() {
            if hit_enemies.contains(&ei) {
                continue;
            }
            if overlaps(&attack.body.rect, &enemy.body.rect) {
                hit_attacks.push(ai);
                hit_enemies.push(ei);
                break;
            }
        }
    }

    (hit_attacks, hit_enemies)
}

/// Does the player's box touch any enemy? One touch loses the session.
pub fn player_hit(player: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| overlaps(player, &e.body.rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::attack::{Attack, AttackKind};
    use crate::game::body::Body;

    fn attack_at(x: f32, y: f32) -> Attack {
        Attack {
            body: Body::new(x, y, 40.0, 20.0),
            kind: AttackKind::Sword { spawned: 0.0 },
            angle: 0.0,
        }
    }

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(x, y, 100.0)
    }

    #[test]
    fn test_overlap_basics() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(20.0, 0.0, 10.0, 10.0)));
        // touching edges are not an overlap
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlapping_pair_is_marked_once() {
        let attacks = vec![attack_at(0.0, 0.0)];
        let enemies = vec![enemy_at(20.0, 5.0)];
        let (ha, he) = resolve_attack_hits(&attacks, &enemies);
        assert_eq!(ha, vec![0]);
        assert_eq!(he, vec![0]);
    }

    #[test]
    fn test_attack_kills_first_enemy_in_insertion_order() {
        let attacks = vec![attack_at(0.0, 0.0)];
        // both enemies overlap the attack; only the first dies
        let enemies = vec![enemy_at(10.0, 0.0), enemy_at(15.0, 0.0)];
        let (ha, he) = resolve_attack_hits(&attacks, &enemies);
        assert_eq!(ha, vec![0]);
        assert_eq!(he, vec![0]);
    }

    #[test]
    fn test_dead_enemy_is_not_killed_twice() {
        // two attacks stacked on one enemy: the second attack stays live
        let attacks = vec![attack_at(0.0, 0.0), attack_at(5.0, 0.0)];
        let enemies = vec![enemy_at(10.0, 0.0)];
        let (ha, he) = resolve_attack_hits(&attacks, &enemies);
        assert_eq!(ha, vec![0]);
        assert_eq!(he, vec![0]);
    }

    #[test]
    fn test_disjoint_groups_mark_nothing() {
        let attacks = vec![attack_at(0.0, 0.0)];
        let enemies = vec![enemy_at(500.0, 500.0)];
        let (ha, he) = resolve_attack_hits(&attacks, &enemies);
        assert!(ha.is_empty());
        assert!(he.is_empty());
    }

    #[test]
    fn test_player_hit() {
        let player = Rect::new(0.0, 0.0, 30.0, 40.0);
        assert!(player_hit(&player, &[enemy_at(10.0, 10.0)]));
        assert!(!player_hit(&player, &[enemy_at(100.0, 10.0)]));
        assert!(!player_hit(&player, &[]));
    }
}
