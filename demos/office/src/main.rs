use std::error::Error;
use std::num::NonZeroU32;
use std::process;
use std::time::Instant;

use glam::{vec3, Vec3};
use glutin::surface::GlSurface;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::ControlFlow;
use winit::keyboard::{KeyCode, PhysicalKey};

use vigil::math::camera::Camera;
use vigil::render::Lighting;
use vigil::script::player::PlayerController;
use vigil_opengl::OpenglRenderer;

use opengl::{launch_opengl_window, App};
use scene::OfficeLevel;

mod opengl;
mod scene;

const PLAYER_MOVE_SPEED: f32 = 3.0;
const PLAYER_TURN_SPEED: f32 = 2.0;

fn main() -> Result<(), Box<dyn Error>> {
	tracing_subscriber::registry()
		.with(fmt::layer())
		.with(LevelFilter::INFO)
		.init();

	info!("Setting up windowing and OpenGL");
	let App {
		gl,
		gl_ctx,
		gl_surface,
		gl_display,
		window,
		events,
	} = launch_opengl_window()?;
	let window_size = window.inner_size();

	// Shader or asset failures have no degraded mode worth rendering;
	// report and bail.
	let mut renderer = match OpenglRenderer::new(gl) {
		Ok(renderer) => renderer,
		Err(e) => {
			error!("ERROR: {e}");
			process::exit(1);
		}
	};
	renderer.resize(window_size.width, window_size.height);

	info!("Building the office level");
	let mut level = match OfficeLevel::build() {
		Ok(level) => level,
		Err(e) => {
			error!("ERROR: {e}");
			process::exit(1);
		}
	};
	if let Err(e) = renderer.upload(&level.assets) {
		error!("ERROR: {e}");
		process::exit(1);
	}

	let mut player_cam = Camera {
		position: vec3(0.0, 0.0, 5.0),
		forward: vec3(0.0, 0.0, -1.0),
		up: Vec3::Y,
	};
	let mut player = PlayerController::new(-std::f32::consts::FRAC_PI_2, PLAYER_MOVE_SPEED, PLAYER_TURN_SPEED);

	let office_lighting = level.scene.lighting;
	// The feed looks out from under the ceiling, so it is lit from below.
	let feed_lighting = Lighting {
		direction: vec3(0.0, 1.0, -1.0),
		directional_color: Vec3::ONE,
		ambient_color: Vec3::ONE,
	};

	let start = Instant::now();
	let mut last = 0.0_f32;

	events.run(move |event, elwt| {
		// They need to be present
		let _gl_display = &gl_display;
		elwt.set_control_flow(ControlFlow::Poll);

		match event {
			Event::WindowEvent {
				event: WindowEvent::RedrawRequested,
				..
			} => {
				let elapsed = start.elapsed().as_secs_f32();
				let dt = elapsed - last;
				last = elapsed;

				// Input has been drained by now: mutate, tick, then draw
				// the feed before anything can sample it.
				player.update(&mut player_cam, dt);
				level.advance(elapsed, dt);

				let feed_cam = level.feeds.camera();
				renderer.render_feed(&level.scene, &feed_cam, &feed_lighting);
				renderer.render_main(&level.scene, &player_cam, &office_lighting);

				gl_surface.swap_buffers(&gl_ctx).unwrap();
			}
			Event::WindowEvent { ref event, .. } => match event {
				WindowEvent::Resized(size) => {
					renderer.resize(size.width, size.height);
					gl_surface.resize(
						&gl_ctx,
						NonZeroU32::new(size.width.max(1)).unwrap(),
						NonZeroU32::new(size.height.max(1)).unwrap(),
					);
					window.request_redraw();
				}
				WindowEvent::CloseRequested => elwt.exit(),
				WindowEvent::KeyboardInput {
					event:
						KeyEvent {
							physical_key: PhysicalKey::Code(code),
							state,
							repeat: false,
							..
						},
					..
				} => {
					handle_key(*code, *state == ElementState::Pressed, &mut level, &mut player, elwt);
				}
				_ => (),
			},
			Event::AboutToWait => {
				window.request_redraw();
			}
			_ => (),
		}
	})?;
	Ok(())
}

fn handle_key(
	code: KeyCode,
	pressed: bool,
	level: &mut OfficeLevel,
	player: &mut PlayerController,
	elwt: &winit::event_loop::EventLoopWindowTarget<()>,
) {
	match code {
		// Held movement keys.
		KeyCode::KeyW => player.forward = pressed,
		KeyCode::KeyS => player.back = pressed,
		KeyCode::KeyA => player.turn_left = pressed,
		KeyCode::KeyD => player.turn_right = pressed,
		KeyCode::Space => player.rise = pressed,
		KeyCode::ControlLeft => player.sink = pressed,

		// Discrete toggles.
		KeyCode::KeyQ if pressed => level.toggle_left_door(),
		KeyCode::KeyE if pressed => level.toggle_right_door(),
		KeyCode::Digit1 if pressed => level.feeds.select(0),
		KeyCode::Digit2 if pressed => level.feeds.select(1),
		KeyCode::Digit3 if pressed => level.feeds.select(2),

		KeyCode::Escape if pressed => elwt.exit(),
		_ => (),
	}
}
