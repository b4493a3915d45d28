use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}


/// 2D Point - Cartesian coordinates measured in miles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(euclidean(1.0f32, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(-2.0, 1.0);
        let b = Point::new(4.0, 9.0);
        assert_eq!(a.distance_to(&b), 10.0);
        assert_eq!(b.distance_to(&a), 10.0);
    }
}
