//! Simulated scene host.
//!
//! Drives a [`Runtime`] the way the 3D scene would: a character walks a loop
//! through the arena and reports its position, the bowl gets clicked now and
//! then, and the render read model is written out as JSON lines.
use std::io::Write;

use anyhow::{Context, Result};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use pet_core::{Goal, Vec3};
use runtime::{BehaviorEvent, Event, Runtime, Topic};

use crate::config::ClientConfig;

/// Character moving at constant speed along a closed loop of waypoints.
#[derive(Clone, Debug)]
pub struct CharacterWalker {
    waypoints: Vec<Vec3>,
    /// Units per second.
    speed: f32,
    next: usize,
    position: Vec3,
}

impl CharacterWalker {
    pub const DEFAULT_SPEED: f32 = 1.2;

    /// Starts at the first waypoint, heading for the second.
    ///
    /// An empty waypoint list parks the character at the origin.
    pub fn new(waypoints: Vec<Vec3>, speed: f32) -> Self {
        let position = waypoints.first().copied().unwrap_or(Vec3::ZERO);
        let next = usize::from(waypoints.len() > 1);

        Self {
            waypoints,
            speed,
            next,
            position,
        }
    }

    /// A rectangle just inside the arena walls.
    pub fn arena_loop() -> Self {
        Self::new(
            vec![
                Vec3::new(2.0, 0.0, 2.0),
                Vec3::new(8.0, 0.0, 2.0),
                Vec3::new(8.0, 0.0, 8.0),
                Vec3::new(2.0, 0.0, 8.0),
            ],
            Self::DEFAULT_SPEED,
        )
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move along the loop for `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        if self.waypoints.len() < 2 {
            return self.position;
        }

        let mut budget = self.speed * dt;
        while budget > 0.0 {
            let target = self.waypoints[self.next];
            let remaining = self.position.distance(target);

            if remaining > budget {
                self.position += (target - self.position) / remaining * budget;
                break;
            }

            self.position = target;
            budget -= remaining;
            self.next = (self.next + 1) % self.waypoints.len();
        }

        self.position
    }
}

/// Counters reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub views_written: u64,
    pub transitions: u64,
    pub resource_clicks: u64,
    pub final_goal: Goal,
}

/// One run of the simulated scene against a runtime.
pub struct Session {
    config: ClientConfig,
    walker: CharacterWalker,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            walker: CharacterWalker::arena_loop(),
        }
    }

    pub fn with_walker(mut self, walker: CharacterWalker) -> Self {
        self.walker = walker;
        self
    }

    /// Run until the configured duration elapses, then shut the runtime down.
    pub async fn run(mut self, out: &mut impl Write) -> Result<SessionSummary> {
        let runtime = Runtime::builder()
            .config(self.config.runtime.clone())
            .build()
            .await
            .context("failed to start pet runtime")?;
        let handle = runtime.handle();
        let mut behavior_rx = runtime.subscribe(Topic::Behavior);

        let mut summary = SessionSummary::default();
        let deadline = time::sleep(self.config.run_for);
        tokio::pin!(deadline);

        let mut character = time::interval(self.config.character_interval);
        character.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut views = time::interval(self.config.view_interval);
        views.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut clicks = self.config.resource_click_interval.map(|period| {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        let dt = self.config.character_interval.as_secs_f32();
        info!(
            run_for = ?self.config.run_for,
            seed = ?self.config.runtime.seed,
            "scene session started"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut deadline => break,
                Ok(event) = behavior_rx.recv() => {
                    if let Event::Behavior(BehaviorEvent::GoalChanged { transition, frame }) = event {
                        summary.transitions += 1;
                        debug!(frame, %transition.from, %transition.to, "goal changed");
                    }
                }
                _ = character.tick() => {
                    let position = self.walker.advance(dt);
                    handle.update_character_position(position).await?;
                }
                _ = next_click(&mut clicks) => {
                    let transition = handle.resource_clicked().await?;
                    summary.resource_clicks += 1;
                    info!(from = %transition.from, "bowl clicked");
                }
                _ = views.tick() => {
                    let view = handle.describe().await?;
                    serde_json::to_writer(&mut *out, &view)?;
                    writeln!(out)?;
                    summary.views_written += 1;
                }
            }
        }

        summary.final_goal = handle.query_state().await?.goal;
        runtime.shutdown().await?;
        out.flush()?;

        info!(
            views = summary.views_written,
            transitions = summary.transitions,
            final_goal = %summary.final_goal,
            "scene session finished"
        );
        Ok(summary)
    }
}

async fn next_click(clicks: &mut Option<time::Interval>) {
    match clicks {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pet_core::ArenaBounds;
    use runtime::RuntimeConfig;

    use super::*;

    #[test]
    fn walker_follows_waypoints() {
        let mut walker = CharacterWalker::new(
            vec![Vec3::new(1.0, 0.0, 1.0), Vec3::new(3.0, 0.0, 1.0)],
            1.0,
        );

        let position = walker.advance(1.5);
        assert!((position - Vec3::new(2.5, 0.0, 1.0)).length() < 1e-5);

        // Overshoots the second waypoint and turns back toward the first.
        let position = walker.advance(1.0);
        assert!((position - Vec3::new(2.5, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn walker_without_route_stays_put() {
        let mut walker = CharacterWalker::new(vec![Vec3::new(4.0, 0.0, 4.0)], 1.0);
        assert_eq!(walker.advance(10.0), Vec3::new(4.0, 0.0, 4.0));

        let mut empty = CharacterWalker::new(Vec::new(), 1.0);
        assert_eq!(empty.advance(1.0), Vec3::ZERO);
    }

    #[test]
    fn arena_loop_stays_inside_arena() {
        let arena = ArenaBounds::DEFAULT;
        let mut walker = CharacterWalker::arena_loop();

        for _ in 0..1_000 {
            assert!(arena.contains(walker.advance(0.1)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn session_writes_views_and_clicks_bowl() {
        let config = ClientConfig {
            runtime: RuntimeConfig {
                seed: Some(11),
                ..RuntimeConfig::default()
            },
            run_for: Duration::from_secs(3),
            view_interval: Duration::from_millis(500),
            character_interval: Duration::from_millis(100),
            resource_click_interval: Some(Duration::from_secs(1)),
        };

        let mut out = Vec::new();
        let summary = Session::new(config).run(&mut out).await.unwrap();

        assert!(summary.resource_clicks >= 2);
        assert!(summary.views_written >= 6);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len() as u64, summary.views_written);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["rotation_transition_ms"], 300);
        assert_eq!(first["clips"][0]["clip"], "Idle");
    }
}
