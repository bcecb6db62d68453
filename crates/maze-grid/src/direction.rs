use maze_geom::Vec3i;

use crate::angles::normalize_degrees;

/// One of the six axis-aligned directions a cell can connect through.
///
/// The first four are horizontal and ordered clockwise when seen from above,
/// which is what makes `(index + relative) mod 4` a rotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Forward = 0,
    Right = 1,
    Back = 2,
    Left = 3,
    Up = 4,
    Down = 5,
}

/// Signed quarter-turn offset applied to a horizontal [`Direction`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RelativeDirection {
    Forward = 0,
    Right = 1,
    Back = 2,
    Left = -1,
}

/// Raised when an offset vector is not one of the six unit axis offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionError {
    NotUnitOffset(Vec3i),
}

impl std::fmt::Display for DirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionError::NotUnitOffset(v) => {
                write!(f, "offset {} is not a unit axis offset", v)
            }
        }
    }
}

impl std::error::Error for DirectionError {}

impl Direction {
    /// Fixed iteration order used by graph building and mesh emission.
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Right,
        Direction::Back,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub const HORIZONTAL: [Direction; 4] = [
        Direction::Forward,
        Direction::Right,
        Direction::Back,
        Direction::Left,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Direction::ALL.get(i).copied()
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Integer grid step `(dx,dy,dz)` when leaving a cell through this direction.
    #[inline]
    pub fn offset(self) -> Vec3i {
        match self {
            Direction::Forward => Vec3i::FORWARD,
            Direction::Right => Vec3i::RIGHT,
            Direction::Back => Vec3i::BACK,
            Direction::Left => Vec3i::LEFT,
            Direction::Up => Vec3i::UP,
            Direction::Down => Vec3i::DOWN,
        }
    }

    pub fn from_offset(offset: Vec3i) -> Result<Direction, DirectionError> {
        Direction::ALL
            .into_iter()
            .find(|d| d.offset() == offset)
            .ok_or(DirectionError::NotUnitOffset(offset))
    }

    /// Rotates a horizontal direction by a relative quarter-turn.
    ///
    /// # Panics
    /// If `self` is `Up` or `Down`.
    #[inline]
    pub fn add(self, relative: RelativeDirection) -> Direction {
        assert!(
            self.is_horizontal(),
            "cannot rotate vertical direction {:?} by {:?}",
            self,
            relative
        );
        let i = (self.index() as i32 + relative.value() + 4).rem_euclid(4);
        Direction::HORIZONTAL[i as usize]
    }

    /// Relative rotation that turns `self` into `other`.
    ///
    /// # Panics
    /// If either direction is vertical.
    pub fn relative_to(self, other: Direction) -> RelativeDirection {
        assert!(
            self.is_horizontal() && other.is_horizontal(),
            "relative rotation between {:?} and {:?} is undefined",
            self,
            other
        );
        let steps = (other.index() as i32 - self.index() as i32).rem_euclid(4);
        RelativeDirection::from_steps(steps)
    }

    /// Yaw in degrees: Forward 0, Right 90, Back 180, Left -90.
    ///
    /// # Panics
    /// If `self` is `Up` or `Down`.
    #[inline]
    pub fn yaw(self) -> f32 {
        match self {
            Direction::Forward => 0.0,
            Direction::Right => 90.0,
            Direction::Back => 180.0,
            Direction::Left => -90.0,
            Direction::Up | Direction::Down => panic!("{:?} has no yaw", self),
        }
    }

    /// Buckets a yaw angle into a horizontal direction.
    /// `[-45, 45]` is Forward; both 45 degree boundaries belong to Forward.
    pub fn horizontal_from_yaw(yaw: f32) -> Direction {
        let yaw = normalize_degrees(yaw);
        if (-45.0..=45.0).contains(&yaw) {
            Direction::Forward
        } else if yaw < -45.0 && yaw > -135.0 {
            Direction::Left
        } else if yaw > 45.0 && yaw < 135.0 {
            Direction::Right
        } else {
            Direction::Back
        }
    }

    /// Negative pitch looks up, positive looks down; within 45 degrees is level
    /// and reported as `Forward`.
    pub fn vertical_from_pitch(pitch: f32) -> Direction {
        let pitch = normalize_degrees(pitch);
        if pitch < -45.0 {
            Direction::Up
        } else if pitch > 45.0 {
            Direction::Down
        } else {
            Direction::Forward
        }
    }
}

impl RelativeDirection {
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Forward,
        RelativeDirection::Right,
        RelativeDirection::Back,
        RelativeDirection::Left,
    ];

    #[inline]
    pub fn value(self) -> i32 {
        self as i32
    }

    /// The rotation that undoes this one.
    #[inline]
    pub fn inverse(self) -> RelativeDirection {
        match self {
            RelativeDirection::Forward => RelativeDirection::Forward,
            RelativeDirection::Right => RelativeDirection::Left,
            RelativeDirection::Back => RelativeDirection::Back,
            RelativeDirection::Left => RelativeDirection::Right,
        }
    }

    #[inline]
    fn from_steps(steps: i32) -> RelativeDirection {
        match steps.rem_euclid(4) {
            0 => RelativeDirection::Forward,
            1 => RelativeDirection::Right,
            2 => RelativeDirection::Back,
            _ => RelativeDirection::Left,
        }
    }
}

/// Direction an agent facing `(yaw, pitch)` travels for a relative move.
///
/// While looking up or down, Forward and Back follow the vertical axis and
/// sideways moves still strafe along the horizontal facing.
pub fn movement_direction(yaw: f32, pitch: f32, relative: RelativeDirection) -> Direction {
    let vertical = Direction::vertical_from_pitch(pitch);
    if vertical != Direction::Forward {
        match relative {
            RelativeDirection::Forward => return vertical,
            RelativeDirection::Back => return vertical.reverse(),
            _ => {}
        }
    }
    Direction::horizontal_from_yaw(yaw).add(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_pairs() {
        for d in Direction::ALL {
            assert_ne!(d, d.reverse());
            assert_eq!(d, d.reverse().reverse());
            assert_eq!(d.offset(), -d.reverse().offset());
        }
    }

    #[test]
    #[should_panic(expected = "cannot rotate vertical direction")]
    fn add_rejects_vertical() {
        let _ = Direction::Up.add(RelativeDirection::Right);
    }

    #[test]
    #[should_panic(expected = "has no yaw")]
    fn yaw_rejects_vertical() {
        let _ = Direction::Down.yaw();
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(Direction::from_index(6), None);
        assert_eq!(Direction::from_index(4), Some(Direction::Up));
    }
}
