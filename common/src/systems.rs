use bevy_ecs::prelude::*;
use bevy_time::Time;

use crate::{camera::ViewportClass, scene::SceneAssembler};

// ============================================================================
// Shared Scene Systems
// ============================================================================

// Advance camera and portal by one tick of the host clock
pub fn advance_scene_system(time: Res<Time>, viewport: Res<ViewportClass>, mut scene: ResMut<SceneAssembler>) {
    scene.advance(time.elapsed_secs(), time.delta_secs(), *viewport);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{camera::LoopMode, corridor::CorridorModel, images::ImagePool, theme::ThemeConfig};

    #[test]
    fn system_feeds_the_clock_into_the_scene() {
        let theme = ThemeConfig::sinister();
        let pool = ImagePool::new(vec![0_u8; 8]).unwrap();
        let corridor = CorridorModel::build(10, 12.0, &theme, &pool).unwrap();

        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(ViewportClass::Wide);
        world.insert_resource(SceneAssembler::new(corridor, &theme, LoopMode::FixedOffset));

        let mut schedule = Schedule::default();
        schedule.add_systems(advance_scene_system);

        world.resource_mut::<Time>().advance_by(Duration::from_secs(1));
        schedule.run(&mut world);

        let scene = world.resource::<SceneAssembler>();
        assert_eq!(scene.ticks(), 1);
        assert!((scene.camera().position.z + 2.5).abs() < 1e-5);
    }
}
