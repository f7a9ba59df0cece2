use anyhow::Result;
use log::{debug, info, trace};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::GameConfig;
use engine::game_loop::GameLoop;
use engine::input::{InputConfig, InputManager};
use game::{stage, GameEvent, World};

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting 47 Ronin Cats...");

    let config = GameConfig::load_or_default();
    let mut game_loop = GameLoop::new(config.timing.tick_rate_hz);
    let mut input = InputManager::new(InputConfig::new());

    let mut world = World::new(config, stage::stage_one());
    stage::populate_stage_one(&mut world);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("47 Ronin Cats")
        .with_inner_size(winit::dpi::LogicalSize::new(
            stage::SCREEN_WIDTH * 4.0,
            stage::SCREEN_HEIGHT * 4.0,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let escape = event.physical_key == PhysicalKey::Code(KeyCode::Escape);
                if escape && event.state == ElementState::Pressed && !event.repeat {
                    game_loop.toggle_pause();
                } else {
                    input.process_keyboard_event(&event);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset();
            }
            Event::AboutToWait => {
                for _ in 0..game_loop.begin_frame() {
                    let snapshot = input.next_snapshot();
                    let report = world.tick(&snapshot);

                    for event in &report.events {
                        match event {
                            GameEvent::PartyDefeated => info!("Game over at tick {}", report.tick),
                            _ => debug!("{:?}", event),
                        }
                    }
                    for pose in &report.poses {
                        trace!(
                            "actor {} {} {:?}#{} at {:?}",
                            pose.actor,
                            pose.state.name(),
                            pose.clip,
                            pose.frame,
                            pose.anchor
                        );
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
