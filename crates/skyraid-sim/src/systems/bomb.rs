//! Explosion effects count down and expire.

use hecs::World;

use skyraid_core::components::Bomb;
use skyraid_core::enums::LifeState;

pub fn update(world: &mut World, dt: f32) {
    for (_entity, (bomb, state)) in world.query_mut::<(&mut Bomb, &mut LifeState)>() {
        if *state != LifeState::Active {
            continue;
        }
        bomb.remaining_secs -= dt;
        if bomb.remaining_secs <= 0.0 {
            *state = LifeState::Dead;
        }
    }
}
