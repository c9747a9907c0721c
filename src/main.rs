//! Chase Survival entry point
//!
//! Plays one headless match between the pursuer and a scripted runner using
//! the fixed-timestep loop.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process;

    use glam::Vec3;

    use chase_survival::consts::SIM_DT;
    use chase_survival::sim::{
        ChaseSession, FixedStep, FleeingRunner, KinematicActor, MatchController, MatchEvent,
        OpenFloor, PursuitAgent, PursuitRig, tick,
    };
    use chase_survival::{AudioManager, Difficulty, Settings, TextHud, format_clock};

    /// Simulated frame time fed to the accumulator (60 fps)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Half extent of the arena floor
    const ARENA_HALF_EXTENT: f32 = 30.0;

    struct Args {
        seed: u64,
        difficulty: Option<Difficulty>,
        settings: Option<PathBuf>,
    }

    fn usage(program: &str) -> ! {
        eprintln!(
            "Usage: {} [--seed N] [--difficulty easy|normal|hard] [--settings path.json]",
            program
        );
        process::exit(1);
    }

    fn parse_args() -> Args {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "chase-survival".to_string());
        let mut parsed = Args {
            seed: 42,
            difficulty: None,
            settings: None,
        };

        while let Some(flag) = args.next() {
            let Some(value) = args.next() else {
                eprintln!("Missing value for {}", flag);
                usage(&program);
            };
            match flag.as_str() {
                "--seed" => match value.parse() {
                    Ok(seed) => parsed.seed = seed,
                    Err(_) => {
                        eprintln!("Invalid seed '{}'", value);
                        usage(&program);
                    }
                },
                "--difficulty" => match Difficulty::from_str(&value) {
                    Some(difficulty) => parsed.difficulty = Some(difficulty),
                    None => {
                        eprintln!("Unknown difficulty '{}'", value);
                        usage(&program);
                    }
                },
                "--settings" => parsed.settings = Some(PathBuf::from(value)),
                _ => usage(&program),
            }
        }
        parsed
    }

    fn load_settings(args: &Args) -> Settings {
        let mut settings = match &args.settings {
            Some(path) => Settings::load_from(path).unwrap_or_else(|err| {
                log::warn!("Failed to load {}: {}, using defaults", path.display(), err);
                Settings::default()
            }),
            None => Settings::default(),
        };
        if let Some(difficulty) = args.difficulty {
            settings.apply_preset(difficulty);
        }
        match settings.to_json() {
            Ok(json) => log::debug!("Effective settings:\n{}", json),
            Err(err) => log::debug!("Could not serialize settings: {}", err),
        }
        settings
    }

    pub fn run() {
        let args = parse_args();
        let settings = load_settings(&args);
        let tuning = settings.tuning;
        log::info!(
            "Chase Survival (headless) starting: seed {}, {} difficulty",
            args.seed,
            settings.difficulty.as_str()
        );

        let floor = OpenFloor::square(ARENA_HALF_EXTENT);
        let mut runner = FleeingRunner::new(args.seed, Vec3::new(-20.0, 0.0, -20.0), floor);

        let pursuer = PursuitAgent::new(
            &tuning,
            PursuitRig {
                locomotion: Some(KinematicActor::new(Vec3::new(20.0, 0.0, 20.0))),
                planner: Box::new(floor),
                tracker: Box::new(runner.tracker()),
                audio: Some(AudioManager::new(&settings.audio)),
            },
        );
        let controller = MatchController::new(TextHud::new(settings.hud));
        let mut session = ChaseSession::new(&tuning, controller, pursuer);

        // Hard stop in case the match never resolves
        let max_frames = ((tuning.warmup + tuning.match_duration) / FRAME_DT).ceil() as u64 + 60;
        let mut stepper = FixedStep::new();
        let mut frames = 0u64;

        while !session.is_over() && frames < max_frames {
            stepper.advance(FRAME_DT, |dt| {
                if session.is_over() {
                    return;
                }
                runner.advance(dt, session.pursuer.position());
                tick(&mut session, dt);
            });
            frames += 1;

            for event in session.controller.drain_events() {
                match event {
                    MatchEvent::Started { serial, duration } => {
                        println!("Match {} started, survive {}", serial, format_clock(duration));
                    }
                    MatchEvent::Caught { elapsed } => {
                        println!("Caught at {}", format_clock(elapsed));
                    }
                    MatchEvent::Survived { elapsed } => {
                        println!("Survived {}", format_clock(elapsed));
                    }
                }
            }
        }

        println!(
            "Outcome: {:?} at {} of {} after {} ticks ({:.2}s simulated)",
            session.outcome(),
            format_clock(session.controller.elapsed()),
            format_clock(session.controller.duration()),
            session.time_ticks,
            session.time_ticks as f32 * SIM_DT
        );
        println!("{}", session.pursuer.status());
        if let Some(audio) = session.pursuer.audio() {
            println!(
                "Chase cue: started {} time(s), {}, volume {:.2}",
                audio.cues_started(),
                if audio.is_looped() { "looped" } else { "one-shot" },
                audio.effective_volume()
            );
        }
        let hud = session.controller.presentation();
        if let Some(panel) = hud.panel_text() {
            println!("{}", panel.replace("\n\n", " - "));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by the embedding page
}
