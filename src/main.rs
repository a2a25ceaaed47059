//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use bug_crossing::consts::*;
    use bug_crossing::sim::{CharacterKind, Direction, Frame, GamePhase, GemKind, SpriteKind};
    use bug_crossing::{FrameStatus, Game, Settings};

    /// Browser-side wrapper: game, preferences and drawing surface
    struct WebGame {
        game: Game,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
        /// True while an animation frame is scheduled
        looping: bool,
    }

    impl WebGame {
        fn draw(&self) {
            let frame = self.game.frame();
            draw_board(&self.ctx);
            draw_sprites(&self.ctx, frame);
            match frame.hud.phase {
                GamePhase::NotStarted => self.draw_options(),
                GamePhase::Running => draw_hud(&self.ctx, frame),
                GamePhase::GameOver => {
                    draw_hud(&self.ctx, frame);
                    self.draw_game_over();
                }
            }
        }

        fn draw_options(&self) {
            let ctx = &self.ctx;
            panel(ctx);
            let lines = [
                "Cross the road without".to_string(),
                "getting hit by a bug.".to_string(),
                "Earn 1 point each time".to_string(),
                "you cross successfully.".to_string(),
                format!("You have {} tries total.", HEALTH_START),
                "Collect gems for extra points".to_string(),
                "or hearts to re-up your health.".to_string(),
                String::new(),
                format!("Character: {} (C)", self.settings.character.as_str()),
                format!("Level: {} (L)", self.settings.level.as_str()),
                "Press Enter to start".to_string(),
            ];
            for (i, line) in lines.iter().enumerate() {
                let _ = ctx.fill_text(line, 250.0, 150.0 + i as f64 * 30.0);
            }
        }

        fn draw_game_over(&self) {
            let ctx = &self.ctx;
            panel(ctx);
            ctx.set_font("40px Courier New");
            let _ = ctx.fill_text("GAME OVER", 250.0, 250.0);
            ctx.set_font("20px Courier New");
            if let Some(summary) = self.game.summary() {
                let _ = ctx.fill_text(&summary.message(), 250.0, 300.0);
            }
            let _ = ctx.fill_text("Press Enter to play again", 250.0, 420.0);
            let _ = ctx.fill_text("or Space to change game options", 250.0, 450.0);
        }
    }

    fn panel(ctx: &CanvasRenderingContext2d) {
        ctx.set_fill_style_str("black");
        ctx.fill_rect(50.0, 100.0, 400.0, 400.0);
        ctx.set_font("20px Courier New");
        ctx.set_fill_style_str("white");
        ctx.set_text_align("center");
    }

    fn draw_board(ctx: &CanvasRenderingContext2d) {
        ctx.set_fill_style_str("#6ab04c");
        ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
        for row in 0..BOARD_ROWS {
            let color = match row {
                GOAL_ROW => "#3c8dde",
                1..=3 => "#9e9e9e",
                _ => "#6ab04c",
            };
            ctx.set_fill_style_str(color);
            ctx.fill_rect(
                0.0,
                row as f64 * TILE_HEIGHT as f64 + 50.0,
                CANVAS_WIDTH as f64,
                TILE_HEIGHT as f64,
            );
        }
    }

    fn character_color(kind: CharacterKind) -> &'static str {
        match kind {
            CharacterKind::Boy => "#f0c419",
            CharacterKind::CatGirl => "#e67e22",
            CharacterKind::HornGirl => "#8e44ad",
            CharacterKind::PinkGirl => "#ff79c6",
            CharacterKind::PrincessGirl => "#f8f8f2",
        }
    }

    fn draw_sprites(ctx: &CanvasRenderingContext2d, frame: &Frame) {
        for sprite in frame.visible() {
            let x = sprite.screen_pos.x as f64;
            // Sprite art has 50px of transparent headroom
            let y = sprite.screen_pos.y as f64 + 70.0;
            match sprite.kind {
                SpriteKind::Enemy => {
                    ctx.set_fill_style_str("#c0392b");
                    ctx.fill_rect(x + 5.0, y + 10.0, 91.0, 50.0);
                }
                SpriteKind::Character(kind) => {
                    ctx.set_fill_style_str(character_color(kind));
                    ctx.fill_rect(x + 25.0, y, 51.0, 70.0);
                }
                SpriteKind::Gem(kind) => {
                    let color = match kind {
                        GemKind::Score => "#2980b9",
                        GemKind::Heart => "#e84393",
                    };
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    let _ = ctx.arc(x + 50.5, y + 35.0, 22.0, 0.0, std::f64::consts::TAU);
                    ctx.fill();
                }
            }
        }
    }

    fn draw_hud(ctx: &CanvasRenderingContext2d, frame: &Frame) {
        ctx.set_fill_style_str("black");
        ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, 40.0);
        ctx.set_font("20px Courier New");
        ctx.set_fill_style_str("white");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("Score: {}", frame.hud.score), 10.0, 25.0);
        ctx.set_fill_style_str("#e84393");
        for i in 0..frame.hud.health {
            ctx.fill_rect(300.0 + i as f64 * 25.0, 8.0, 20.0, 24.0);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bug Crossing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let web = Rc::new(RefCell::new(WebGame {
            game: Game::from_settings(seed, &settings),
            settings,
            ctx,
            looping: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        web.borrow().draw();
        setup_input_handlers(web.clone());

        log::info!("Bug Crossing ready");
    }

    fn setup_input_handlers(web: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let handler = web.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let mut w = handler.borrow_mut();
            let mut begin_loop = false;
            match w.game.phase() {
                GamePhase::NotStarted => match key.as_str() {
                    "Enter" => begin_loop = w.game.start(),
                    "c" | "C" => {
                        w.settings.cycle_character();
                        let config = w.settings.game_config();
                        w.game.configure(config);
                        w.settings.save();
                    }
                    "l" | "L" => {
                        w.settings.cycle_level();
                        let config = w.settings.game_config();
                        w.game.configure(config);
                        w.settings.save();
                    }
                    _ => {}
                },
                GamePhase::Running => {
                    let direction = match key.as_str() {
                        "ArrowLeft" => Some(Direction::Left),
                        "ArrowUp" => Some(Direction::Up),
                        "ArrowRight" => Some(Direction::Right),
                        "ArrowDown" => Some(Direction::Down),
                        _ => None,
                    };
                    if let Some(direction) = direction {
                        w.game.push_direction(direction);
                    }
                }
                GamePhase::GameOver => match key.as_str() {
                    "Enter" => begin_loop = w.game.restart(),
                    " " => {
                        w.game.return_to_menu();
                    }
                    _ => {}
                },
            }

            if begin_loop && !w.looping {
                w.looping = true;
                drop(w);
                request_animation_frame(handler.clone());
            } else if w.game.phase() != GamePhase::Running {
                w.draw();
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(web: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(web, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(web: Rc<RefCell<WebGame>>, time: f64) {
        let status = {
            let mut w = web.borrow_mut();
            let status = w.game.frame_at(time);
            w.draw();
            if status == FrameStatus::Halt {
                w.looping = false;
            }
            status
        };

        if status == FrameStatus::Continue {
            request_animation_frame(web);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);
    let level = match args.next() {
        Some(name) => bug_crossing::sim::Level::from_str(&name).unwrap_or_else(|| {
            log::warn!("Unknown level '{}', using default", name);
            Default::default()
        }),
        None => Default::default(),
    };

    let summary = autopilot::run(seed, level);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use bug_crossing::sim::{Direction, GameConfig, GameState, GameSummary, Level};
    use bug_crossing::{FrameStatus, Game};

    /// 60 Hz frame spacing (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    /// Frames between moves, roughly a human key rate
    const MOVE_EVERY: u32 = 12;

    /// Play one session with a cautious bot and return how it went
    pub fn run(seed: u64, level: Level) -> Option<GameSummary> {
        let config = GameConfig {
            level,
            ..Default::default()
        };
        let mut game = Game::new(seed, config);
        game.start();

        for frame in 0..MAX_FRAMES {
            if frame % MOVE_EVERY == 0 {
                if let Some(direction) = choose_move(&game.state) {
                    game.push_direction(direction);
                }
            }
            if game.frame_at(frame as f64 * FRAME_MS) == FrameStatus::Halt {
                break;
            }
            if frame % (60 * 30) == 0 {
                log::info!(
                    "t={}s score={} health={}",
                    frame / 60,
                    game.state.session.score,
                    game.state.session.health
                );
            }
        }

        game.summary()
    }

    /// Step up when the row ahead is clear around the player's column
    fn choose_move(state: &GameState) -> Option<Direction> {
        let cell = state.player.cell;
        let ahead = cell.row.checked_sub(1)?;
        let col = cell.col as f32;
        let danger = state
            .enemies
            .iter()
            .filter(|e| e.row == ahead)
            .any(|e| e.x > col - 2.5 && e.x < col + 0.5);
        (!danger).then_some(Direction::Up)
    }
}
