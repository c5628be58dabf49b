use super::{Controls, Countdown, Game, Interval, Status, FRAME};
use rand::Rng;
use std::time::Duration;

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 400.0;
pub const PLANE_SIZE: f64 = 40.0;
pub const HEALTH: u32 = 100;
pub const GAME_TIME: Duration = Duration::from_secs(45);

const MOVE_SPEED: f64 = 8.0;
const LASER_SPEED: f64 = 12.0;
const LASER_PERIOD: Duration = Duration::from_millis(30);
const ENEMY_SPEED: f64 = 3.0;
const ENEMY_PERIOD: Duration = Duration::from_millis(50);
const SPAWN_PERIOD: Duration = Duration::from_millis(2000);
const DAMAGE: u32 = 20;
const POINTS: u32 = 50;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    step: Interval,
}

impl Enemy {
    fn new(x: f64, y: f64) -> Enemy {
        Enemy {
            x,
            y,
            step: Interval::new(ENEMY_PERIOD),
        }
    }

    fn rams(&self, (px, py): (f64, f64)) -> bool {
        self.y > py - 30.0 && self.y < py + 40.0 && self.x > px - 30.0 && self.x < px + 40.0
    }
}

/// A shot on its way up the screen.
#[derive(Debug, Clone)]
pub struct Laser {
    pub x: f64,
    pub y: f64,
    step: Interval,
}

impl Laser {
    fn new(x: f64, y: f64) -> Laser {
        Laser {
            x,
            y,
            step: Interval::new(LASER_PERIOD),
        }
    }

    fn hits(&self, enemy: &Enemy) -> bool {
        self.y < enemy.y + 30.0
            && self.y > enemy.y - 10.0
            && self.x > enemy.x - 10.0
            && self.x < enemy.x + 40.0
    }
}

/// ## Sky shooter
///
/// Fly the plane around the field and shoot down the planes coming
/// from the top. Every enemy that rams the plane costs health. Lasers
/// and enemies each move on their own timers.
pub struct Shooter<R: Rng> {
    rng: R,
    controls: Controls,
    plane: (f64, f64),
    lasers: Vec<Laser>,
    enemies: Vec<Enemy>,
    frame: Interval,
    spawner: Interval,
    remaining: Countdown,
    health: u32,
    score: u32,
    status: Status,
}

impl<R: Rng> Shooter<R> {
    pub fn new(rng: R) -> Shooter<R> {
        Shooter {
            rng,
            controls: Controls::default(),
            plane: ((WIDTH - PLANE_SIZE) / 2.0, HEIGHT - 60.0),
            lasers: vec![],
            enemies: vec![],
            frame: Interval::new(FRAME),
            spawner: Interval::new(SPAWN_PERIOD),
            remaining: Countdown::new(GAME_TIME),
            health: HEALTH,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn plane(&self) -> (f64, f64) {
        self.plane
    }

    pub fn lasers(&self) -> &[Laser] {
        &self.lasers
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Shoots a laser from the nose of the plane.
    pub fn fire(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        let (x, y) = self.plane;
        self.lasers.push(Laser::new(x + 15.0, y - 10.0));
        true
    }

    fn fly(&mut self) {
        let (x, y) = &mut self.plane;
        if self.controls.left {
            *x = (*x - MOVE_SPEED).max(0.0);
        }
        if self.controls.right {
            *x = (*x + MOVE_SPEED).min(WIDTH - PLANE_SIZE);
        }
        if self.controls.up {
            *y = (*y - MOVE_SPEED).max(0.0);
        }
        if self.controls.down {
            *y = (*y + MOVE_SPEED).min(HEIGHT - PLANE_SIZE);
        }
    }

    fn move_lasers(&mut self, elapsed: Duration) {
        let enemies = &mut self.enemies;
        let mut points = 0;
        self.lasers.retain_mut(|laser| {
            for _ in 0..laser.step.advance(elapsed) {
                laser.y -= LASER_SPEED;
                if let Some(hit) = enemies.iter().rposition(|enemy| laser.hits(enemy)) {
                    enemies.remove(hit);
                    points += POINTS;
                    return false;
                }
                if laser.y < -20.0 {
                    return false;
                }
            }
            true
        });
        self.score += points;
    }

    fn move_enemies(&mut self, elapsed: Duration) {
        let plane = self.plane;
        let mut rammed = 0;
        self.enemies.retain_mut(|enemy| {
            for _ in 0..enemy.step.advance(elapsed) {
                enemy.y += ENEMY_SPEED;
                if enemy.rams(plane) {
                    rammed += 1;
                    return false;
                }
                if enemy.y > HEIGHT {
                    return false;
                }
            }
            true
        });
        self.health = self.health.saturating_sub(rammed * DAMAGE);
        if self.health == 0 {
            self.status = Status::Lost;
        }
    }

    fn spawn(&mut self) {
        let x = self.rng.gen_range(0.0..WIDTH - PLANE_SIZE);
        self.enemies.push(Enemy::new(x, -PLANE_SIZE));
    }
}

impl<R: Rng> Game for Shooter<R> {
    fn tick(&mut self, elapsed: Duration) {
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.frame.advance(elapsed) {
            self.fly();
        }
        self.move_lasers(elapsed);
        self.move_enemies(elapsed);
        if self.status.is_over() {
            return;
        }
        for _ in 0..self.spawner.advance(elapsed) {
            self.spawn();
        }
        if self.remaining.advance(elapsed) {
            self.status = Status::Finished;
        }
    }

    fn stop(&mut self) {
        if !self.status.is_over() {
            self.status = Status::Stopped;
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> Shooter<StdRng> {
        Shooter::new(StdRng::seed_from_u64(45))
    }

    #[test]
    fn test_plane_moves_in_four_directions() {
        let mut g = game();
        assert_eq!(g.plane(), (180.0, 340.0));
        g.controls_mut().up = true;
        g.controls_mut().left = true;
        g.tick(FRAME);
        assert_eq!(g.plane(), (172.0, 332.0));
        *g.controls_mut() = Controls {
            down: true,
            ..Controls::default()
        };
        for _ in 0..10 {
            g.tick(FRAME);
        }
        assert_eq!(g.plane().1, HEIGHT - PLANE_SIZE);
    }

    #[test]
    fn test_laser_flies_and_leaves() {
        let mut g = game();
        assert!(g.fire());
        assert_eq!((g.lasers()[0].x, g.lasers()[0].y), (195.0, 330.0));
        g.tick(LASER_PERIOD);
        assert_eq!(g.lasers()[0].y, 318.0);
        g.lasers = vec![Laser::new(10.0, -15.0)];
        g.tick(LASER_PERIOD);
        assert!(g.lasers().is_empty());
    }

    #[test]
    fn test_laser_destroys_enemy() {
        let mut g = game();
        g.enemies.push(Enemy::new(190.0, 300.0));
        g.fire();
        g.tick(LASER_PERIOD);
        assert!(g.lasers().is_empty());
        assert!(g.enemies().is_empty());
        assert_eq!(g.score(), 50);
    }

    #[test]
    fn test_ramming_costs_health() {
        let mut g = game();
        g.enemies.push(Enemy::new(180.0, 320.0));
        g.tick(ENEMY_PERIOD);
        assert_eq!(g.health(), 80);
        assert!(g.enemies().is_empty());
        g.health = DAMAGE;
        g.enemies.push(Enemy::new(180.0, 320.0));
        g.tick(ENEMY_PERIOD);
        assert_eq!(g.status(), Status::Lost);
        assert!(!g.fire());
    }

    #[test]
    fn test_enemy_leaves_the_field() {
        let mut g = game();
        g.enemies.push(Enemy::new(0.0, 399.0));
        g.tick(ENEMY_PERIOD);
        assert!(g.enemies().is_empty());
        assert_eq!(g.health(), HEALTH);
    }

    #[test]
    fn test_spawn() {
        let mut g = game();
        g.tick(Duration::from_millis(1999));
        assert!(g.enemies().is_empty());
        g.tick(Duration::from_millis(1));
        assert_eq!(g.enemies().len(), 1);
        assert_eq!(g.enemies()[0].y, -PLANE_SIZE);
    }

    #[test]
    fn test_time_limit() {
        let mut g = game();
        g.remaining = Countdown::new(FRAME);
        g.tick(FRAME);
        assert_eq!(g.status(), Status::Finished);
    }
}
