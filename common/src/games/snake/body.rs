use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first, with a parallel set for occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(segments: impl IntoIterator<Item = Point>) -> Result<Self, String> {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        for segment in segments {
            if !segment.is_on_board() {
                return Err(format!("Segment ({}, {}) is outside the board", segment.x, segment.y));
            }
            if !body_set.insert(segment) {
                return Err(format!("Segment ({}, {}) appears twice", segment.x, segment.y));
            }
            body.push_back(segment);
        }

        if body.len() < 2 {
            return Err("Snake needs at least 2 segments".to_string());
        }

        Ok(Self { body, body_set })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn grow_to(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn move_to(&mut self, head: Point) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        self.grow_to(head);
    }
}
