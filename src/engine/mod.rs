// Engine modules: tick loop, input, kinematic physics

pub mod game_loop;
pub mod input;
pub mod physics;
