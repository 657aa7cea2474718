//! Game loops: a batch runner that steps as fast as possible, and a paced
//! real-time loop on its own thread.
//!
//! The real-time engine is created inside its thread because it's cleaner
//! for ownership. Commands arrive via `mpsc` channel and the latest
//! snapshot is stored in shared state for polling.

use std::io::Write;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::constants::MAX_TIME_SCALE;
use skyraid_core::state::GameStateSnapshot;
use skyraid_core::{Result, SkyraidError};
use skyraid_sim::{SimConfig, SimulationEngine};

use crate::script::InputScript;
use crate::state::{new_shared_snapshot, GameLoopCommand, SharedSnapshot};

/// Step a fresh mission `ticks` times, feeding the script's input.
///
/// With `print_every = Some(n)`, every n-th snapshot is written to `out` as
/// one JSON line. Returns the last snapshot.
pub fn run_batch<W: Write>(
    config: SimConfig,
    script: &InputScript,
    ticks: u64,
    print_every: Option<u64>,
    out: &mut W,
) -> Result<GameStateSnapshot> {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartMission);

    let mut snapshot = GameStateSnapshot::default();
    for tick in 0..ticks {
        engine.queue_commands(script.commands_at(tick).cloned());
        engine.set_input(script.input_at(tick));
        snapshot = engine.tick();

        if let Some(every) = print_every.filter(|&n| n > 0) {
            if (tick + 1) % every == 0 {
                serde_json::to_writer(&mut *out, &snapshot)?;
                writeln!(out)?;
            }
        }
    }

    info!(
        "batch finished after {} ticks: phase {:?}, {} destroyed, {} arrived",
        snapshot.time.tick,
        snapshot.phase,
        snapshot.score.enemies_destroyed,
        snapshot.score.enemies_arrived
    );
    Ok(snapshot)
}

/// Wall-clock duration of one tick at the given time scale.
///
/// A time scale near zero keeps the 1x pace; the paused engine does not
/// advance anyway.
pub fn tick_duration(dt: f32, time_scale: f64) -> Duration {
    let base = Duration::from_secs_f64(f64::from(dt));
    if time_scale > 0.001 {
        base.div_f64(time_scale)
    } else {
        base
    }
}

/// Time scale the engine will hold after `command`.
fn scaled_after(time_scale: f64, command: &PlayerCommand) -> f64 {
    match command {
        PlayerCommand::SetTimeScale { scale } => scale.clamp(0.0, MAX_TIME_SCALE),
        _ => time_scale,
    }
}

/// A running real-time game loop.
pub struct GameLoop {
    commands: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    handle: JoinHandle<()>,
}

impl GameLoop {
    /// Forward a command to the loop. Returns false once the loop has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop, wait for its thread and return the last snapshot.
    pub fn shutdown(self) -> Result<Option<GameStateSnapshot>> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.handle
            .join()
            .map_err(|_| SkyraidError::GameLoop("game loop thread panicked".to_string()))?;
        let last = self.latest_snapshot.lock().ok().and_then(|mut lock| lock.take());
        Ok(last)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> Result<GameLoop> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = new_shared_snapshot();
    let shared = latest_snapshot.clone();

    let handle = std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared);
        })?;

    Ok(GameLoop {
        commands: cmd_tx,
        latest_snapshot,
        handle,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let dt = config.dt;
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = tick_duration(dt, engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset instead of catching up
            debug!("game loop fell behind, resetting tick clock");
            next_tick_time = now;
        }
    }
}

/// Run a mission on the real-time loop for roughly `ticks` ticks of wall
/// clock, streaming the script's input.
///
/// Input is sent on the caller's clock, so it lines up with the loop's ticks
/// only approximately. Scripted `SetTimeScale` commands retune the caller's
/// clock as well as the loop's.
pub fn run_realtime<W: Write>(
    config: SimConfig,
    script: &InputScript,
    ticks: u64,
    print_every: Option<u64>,
    out: &mut W,
) -> Result<Option<GameStateSnapshot>> {
    let dt = config.dt;
    let mut time_scale = config.time_scale;
    let game_loop = spawn_game_loop(config)?;
    game_loop.send(GameLoopCommand::Player(PlayerCommand::StartMission));

    let mut next = Instant::now();
    for tick in 0..ticks {
        for command in script.commands_at(tick) {
            time_scale = scaled_after(time_scale, command);
            game_loop.send(GameLoopCommand::Player(command.clone()));
        }
        if !game_loop.send(GameLoopCommand::Input(script.input_at(tick))) {
            break;
        }

        if let Some(every) = print_every.filter(|&n| n > 0) {
            if (tick + 1) % every == 0 {
                if let Some(snapshot) = game_loop.latest_snapshot() {
                    serde_json::to_writer(&mut *out, &snapshot)?;
                    writeln!(out)?;
                }
            }
        }

        next += tick_duration(dt, time_scale);
        let now = Instant::now();
        if next > now {
            std::thread::sleep(next - now);
        }
    }

    game_loop.shutdown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyraid_core::constants::DT;
    use skyraid_core::enums::GamePhase;
    use skyraid_core::input::{InputState, Key};

    use crate::script::{InputSpan, ScriptedCommand};

    fn fire_script() -> InputScript {
        InputScript {
            spans: vec![InputSpan {
                from_tick: 0,
                to_tick: 5,
                keys: vec![Key::Fire],
            }],
            commands: Vec::new(),
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState::from_keys(&[Key::Fire])))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartMission)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(input) if input.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_batch_runs_requested_ticks() {
        let mut out = Vec::new();
        let snapshot =
            run_batch(SimConfig::default(), &fire_script(), 120, None, &mut out).unwrap();
        assert_eq!(snapshot.time.tick, 120);
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert_eq!(snapshot.score.shots_fired, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_batch_prints_every_nth_snapshot() {
        let mut out = Vec::new();
        run_batch(SimConfig::default(), &InputScript::default(), 30, Some(10), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let last: GameStateSnapshot = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last.time.tick, 30);
    }

    #[test]
    fn test_batch_is_deterministic() {
        let config = SimConfig {
            random_waves: Some(4),
            seed: 99,
            ..Default::default()
        };
        let mut sink = Vec::new();
        let a = run_batch(config.clone(), &fire_script(), 300, None, &mut sink).unwrap();
        let b = run_batch(config, &fire_script(), 300, None, &mut sink).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_batch_applies_scripted_commands() {
        let script = InputScript {
            spans: Vec::new(),
            commands: vec![ScriptedCommand {
                tick: 10,
                command: PlayerCommand::Pause,
            }],
        };
        let mut sink = Vec::new();
        let snapshot = run_batch(SimConfig::default(), &script, 50, None, &mut sink).unwrap();
        assert_eq!(snapshot.phase, GamePhase::Paused);
        assert_eq!(snapshot.time.tick, 10);
    }

    #[test]
    fn test_tick_duration_scales_with_time_scale() {
        let base = tick_duration(DT, 1.0);
        assert_eq!(base, Duration::from_secs_f64(f64::from(DT)));
        assert!(tick_duration(DT, 2.0) < base);
        assert_eq!(tick_duration(DT, 0.0), base);
    }

    #[test]
    fn test_scripted_time_scale_retunes_pacing() {
        let scale = scaled_after(1.0, &PlayerCommand::SetTimeScale { scale: 2.0 });
        assert_eq!(scale, 2.0);
        assert_eq!(
            scaled_after(scale, &PlayerCommand::SetTimeScale { scale: 9.0 }),
            MAX_TIME_SCALE
        );
        assert_eq!(scaled_after(scale, &PlayerCommand::Pause), scale);
        assert!(tick_duration(DT, scale) < tick_duration(DT, 1.0));
    }

    #[test]
    fn test_largest_valid_dt_has_a_duration() {
        let config = SimConfig::from_json_str(r#"{ "dt": 1.0 }"#).unwrap();
        assert_eq!(
            tick_duration(config.dt, MAX_TIME_SCALE),
            Duration::from_secs(1).div_f64(MAX_TIME_SCALE)
        );
    }

    #[test]
    fn test_spawned_loop_ticks_and_shuts_down() {
        let game_loop = spawn_game_loop(SimConfig::default()).unwrap();
        assert!(game_loop.send(GameLoopCommand::Player(PlayerCommand::StartMission)));
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = game_loop
            .shutdown()
            .unwrap()
            .expect("loop should have ticked");
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
    }
}
