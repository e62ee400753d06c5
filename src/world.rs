use crate::color::Color;
use crate::coord::{Coord, Direction};
use crate::screen::Screen;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Snake rules on a wrapping pixel board.
///
/// The snake is stored tail-first: the back of the deque is the head.
pub struct World {
    pub screen: Screen,
    direction: Direction,
    snake: VecDeque<Coord>,
    state: GameState,
    start_len: i32,
    food_eaten: u32,
}

impl World {
    /// Callers are expected to have validated the dimensions through
    /// [`GameConfig::validate`](crate::GameConfig::validate).
    pub(crate) fn new(width: u32, height: u32, start_len: u32) -> Self {
        let mut world = Self {
            screen: Screen::new(width, height),
            direction: Direction::Right,
            snake: VecDeque::new(),
            state: GameState::Playing,
            start_len: start_len as i32,
            food_eaten: 0,
        };
        world.reset();
        world
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.food_eaten
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Option<Coord> {
        self.snake.back().copied()
    }

    /// Snake cells from tail to head.
    pub fn snake(&self) -> impl Iterator<Item = &Coord> {
        self.snake.iter()
    }

    pub fn tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(new_head) = self.next_head() else {
            return;
        };

        // Read before painting: the head overwrites whatever was there.
        let Some(target) = self.screen.color_at(&new_head) else {
            return;
        };
        self.extend_head_to(new_head);

        match target {
            Color::Food => {
                self.food_eaten += 1;
                self.spawn_food();
            }
            Color::Snake => self.die(),
            _ => self.shorten_tail(),
        }
    }

    /// Turn toward a point in game space, or restart after the game ended.
    pub fn click(&mut self, x: i32, y: i32) {
        if self.state != GameState::Playing {
            self.reset();
            return;
        }
        let Some(head) = self.head() else {
            return;
        };

        self.direction = if self.direction.is_horizontal() {
            if y < head.y {
                Direction::Up
            } else {
                Direction::Down
            }
        } else if x < head.x {
            Direction::Left
        } else {
            Direction::Right
        };
    }

    /// Keyboard steering: only perpendicular turns are accepted.
    pub fn steer(&mut self, direction: Direction) {
        if self.state != GameState::Playing {
            self.reset();
            return;
        }
        if direction.is_horizontal() != self.direction.is_horizontal() {
            self.direction = direction;
        }
    }

    pub fn reset(&mut self) {
        self.direction = Direction::Right;
        self.snake.clear();
        self.state = GameState::Playing;
        self.food_eaten = 0;
        self.screen.clear();
        self.create_initial_snake();
        self.create_initial_food();
        log::debug!("world reset");
    }

    fn create_initial_snake(&mut self) {
        let y = self.screen.height() as i32 / 2;
        for x in 0..self.start_len {
            let coord = Coord::new(x, y);
            self.screen.set_color_at(&coord, Color::Snake);
            self.snake.push_back(coord);
        }
    }

    fn create_initial_food(&mut self) {
        let y = self.screen.height() as i32 / 2 - 2;
        self.screen
            .set_color_at(&Coord::new(self.start_len, y), Color::Food);
    }

    fn next_head(&self) -> Option<Coord> {
        let moved = self.head()? + self.direction.offset();
        Some(moved.wrapped(self.screen.width(), self.screen.height()))
    }

    fn extend_head_to(&mut self, head: Coord) {
        self.screen.set_color_at(&head, Color::Snake);
        self.snake.push_back(head);
    }

    fn shorten_tail(&mut self) {
        if let Some(tail) = self.snake.pop_front() {
            self.screen.set_color_at(&tail, Color::Background);
        }
    }

    fn spawn_food(&mut self) {
        let free: Vec<Coord> = self
            .screen
            .iter_pixels()
            .filter(|(color, _)| *color == Color::Background)
            .map(|(_, coord)| coord)
            .collect();

        match free.choose(&mut rand::thread_rng()) {
            Some(coord) => {
                self.screen.set_color_at(coord, Color::Food);
            }
            None => {
                log::info!("board full at length {}", self.snake.len());
                self.state = GameState::Won;
            }
        }
    }

    fn die(&mut self) {
        log::debug!("snake died at length {}", self.snake.len());
        self.state = GameState::Lost;
        self.screen.set_color_at_edges(Color::Fail);
    }
}
