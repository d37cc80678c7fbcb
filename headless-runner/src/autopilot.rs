use asteroids_sim::{EntityKind, RenderItem, TickInput};
use asteroids_sim::math_utils::{forward_from_degrees, CrossProduct2};

// roughly 8 degrees either side of the nose
const AIM_TOLERANCE_COS: f32 = 0.99;

/// Turns towards the closest asteroid and fires once it is lined up.
pub fn steer(items: &[RenderItem]) -> TickInput {
    let player = match items.iter().find(|it| it.kind == EntityKind::Player) {
        Some(player) => player,
        None => return TickInput::idle()
    };

    let target = items.iter()
        .filter(|it| matches!(it.kind, EntityKind::Asteroid(_)))
        .min_by(|a, b| {
            let da = a.position.distance_squared(player.position);
            let db = b.position.distance_squared(player.position);
            da.total_cmp(&db)
        });

    let target = match target {
        Some(target) => target,
        None => return TickInput::idle()
    };

    let facing = forward_from_degrees(player.rotation);
    let to_target = (target.position - player.position).normalize_or_zero();
    let aligned = facing.dot(to_target) >= AIM_TOLERANCE_COS;

    // positive cross means the target sits clockwise of the nose
    let side = facing.cross2(to_target);
    TickInput {
        turn_left: !aligned && side < 0.0,
        turn_right: !aligned && side >= 0.0,
        thrust: false,
        fire: aligned,
        quit: false
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use asteroids_sim::game::components::AsteroidSize;
    use super::*;

    fn player_facing(rotation: f32) -> RenderItem {
        RenderItem { kind: EntityKind::Player, position: vec2(100.0, 100.0), rotation, radius: 20.0 }
    }

    fn rock_at(x: f32, y: f32) -> RenderItem {
        RenderItem { kind: EntityKind::Asteroid(AsteroidSize::Large), position: vec2(x, y), rotation: 0.0, radius: 60.0 }
    }

    #[test]
    fn fires_when_lined_up() {
        let input = steer(&[player_facing(0.0), rock_at(100.0, 300.0)]);
        assert!(input.fire);
        assert!(!input.turn_left && !input.turn_right);
    }

    #[test]
    fn turns_towards_target() {
        // nose points down, rock to the right: the nose has to swing counter-clockwise
        let input = steer(&[player_facing(0.0), rock_at(300.0, 100.0)]);
        assert!(!input.fire);
        assert!(input.turn_left);
    }

    #[test]
    fn idles_without_targets() {
        assert_eq!(steer(&[player_facing(0.0)]), TickInput::idle());
        assert_eq!(steer(&[]), TickInput::idle());
    }
}
