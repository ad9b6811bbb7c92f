//! Simple polygons stored as an open ring of vertices.

use crate::assert::*;
use crate::core::prelude::*;
use num_traits::{One, Zero};
use std::fmt;

/// An ordered sequence of vertices. The closing edge from the last vertex back to the first is
/// implied, not stored.
///
/// Metrics use the shoelace formula and assume a simple (non-self-intersecting) polygon. The
/// sign of [`signed_area()`](Polygon::signed_area) gives the winding: positive for
/// counter-clockwise in a y-up frame.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let square: Polygon2i = [(0, 0), (4, 0), (4, 4), (0, 4)].into_iter().map(Vec2::from).collect();
/// assert_eq!(square.area(), 16.0);
/// assert_eq!(square.perimeter(), 16.0);
/// assert_eq!(square.centroid(), Vec2::new(2.0, 2.0));
/// assert!(square.contains(Vec2::new(1, 3)));
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Polygon<T> {
    vertices: Vec<Vec2<T>>,
}

pub type Polygon2i = Polygon<i32>;
pub type Polygon2f = Polygon<f32>;
pub type Polygon2d = Polygon<f64>;

impl<T: Scalar> Polygon<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
    #[must_use]
    pub fn from_vertices(vertices: Vec<Vec2<T>>) -> Self {
        Self { vertices }
    }
    /// Reads `x, y` pairs. A trailing unpaired coordinate is ignored.
    #[must_use]
    pub fn from_coords(coords: &[T]) -> Self {
        coords
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0], xy[1]))
            .collect()
    }

    pub fn add(&mut self, vertex: Vec2<T>) {
        self.vertices.push(vertex);
    }
    pub fn add_xy(&mut self, x: T, y: T) {
        self.add(Vec2::new(x, y));
    }
    /// Inserts `vertex` before position `index`, shifting later vertices along.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, vertex: Vec2<T>, index: usize) {
        check_le!(index, self.len());
        self.vertices.insert(index, vertex);
    }
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// # Panics
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn at(&self, index: usize) -> Vec2<T> {
        self[index]
    }
    #[must_use]
    pub fn front(&self) -> Option<Vec2<T>> {
        self.vertices.first().copied()
    }
    #[must_use]
    pub fn back(&self) -> Option<Vec2<T>> {
        self.vertices.last().copied()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Vec2<T>>> {
        self.vertices.iter().copied()
    }
    #[must_use]
    pub fn vertices(&self) -> &[Vec2<T>] {
        &self.vertices
    }

    /// Every edge of the closed ring, including the one from the last vertex to the first.
    fn edges(&self) -> impl Iterator<Item = (Vec2<T>, Vec2<T>)> + '_ {
        self.iter().circular_tuple_windows::<(Vec2<T>, Vec2<T>)>()
    }

    /// The smallest axis-aligned rectangle containing every vertex; a zero rectangle for an
    /// empty polygon.
    #[must_use]
    pub fn bounds(&self) -> Rect<T> {
        let Some(first) = self.front() else {
            return Rect::default();
        };
        let mut rv = Rect::from_origin(first);
        rv.include_all(self.iter());
        rv
    }
}

impl<T: Promote> Polygon<T> {
    #[must_use]
    pub fn signed_area(&self) -> Promoted<T> {
        let one = <Promoted<T> as One>::one();
        self.edges()
            .map(|(a, b)| a.cross(b))
            .fold(<Promoted<T> as Zero>::zero(), |acc, x| acc + x)
            / (one + one)
    }
    #[must_use]
    pub fn area(&self) -> Promoted<T> {
        self.signed_area().abs()
    }
    /// The length of the closed ring.
    #[must_use]
    pub fn perimeter(&self) -> Promoted<T> {
        self.edges()
            .map(|(a, b)| a.distance(b))
            .fold(<Promoted<T> as Zero>::zero(), |acc, x| acc + x)
    }
    /// `2 * area / perimeter`: the inradius of a regular polygon, and the radius of the circle
    /// with the same area-to-perimeter ratio otherwise. Zero when the perimeter is zero.
    #[must_use]
    pub fn apothem(&self) -> Promoted<T> {
        let perimeter = self.perimeter();
        if perimeter.is_zero() {
            return perimeter;
        }
        (self.area() + self.area()) / perimeter
    }

    /// The area-weighted centroid. A polygon with zero area has none, so the average of its
    /// vertices is returned instead.
    #[must_use]
    pub fn centroid(&self) -> Vec2<Promoted<T>> {
        let area = self.signed_area();
        if area.is_zero() {
            if self.len() > 2 {
                warn!("Polygon::centroid(): zero area, using vertex average: {self}");
            }
            let Some(count) = <Promoted<T> as num_traits::NumCast>::from(self.len()) else {
                return Vec2::zero();
            };
            if count.is_zero() {
                return Vec2::zero();
            }
            let mut rv = self.iter().map(Vec2::promote).sum::<Vec2<Promoted<T>>>();
            rv /= count;
            return rv;
        }
        let mut rv = self
            .edges()
            .map(|(a, b)| {
                let mut weighted = a.promote();
                weighted += b.promote();
                weighted *= a.cross(b);
                weighted
            })
            .sum::<Vec2<Promoted<T>>>();
        let one = <Promoted<T> as One>::one();
        rv /= (one + one + one) * (area + area);
        rv
    }

    /// Whether `point` is inside, by the even-odd rule. Points exactly on an edge may be
    /// classified either way.
    #[must_use]
    pub fn contains(&self, point: Vec2<T>) -> bool {
        let p = point.promote();
        self.edges()
            .map(|(a, b)| (a.promote(), b.promote()))
            .filter(|(a, b)| (a.y > p.y) != (b.y > p.y))
            .filter(|(a, b)| p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x)
            .count()
            % 2
            == 1
    }
}

impl<T: Scalar> FromIterator<Vec2<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Vec2<T>>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

impl<T: Scalar> Extend<Vec2<T>> for Polygon<T> {
    fn extend<I: IntoIterator<Item = Vec2<T>>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl<T: Scalar> std::ops::Index<usize> for Polygon<T> {
    type Output = Vec2<T>;

    fn index(&self, index: usize) -> &Vec2<T> {
        check_lt!(index, self.len());
        &self.vertices[index]
    }
}
impl<T: Scalar> std::ops::IndexMut<usize> for Polygon<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vec2<T> {
        check_lt!(index, self.len());
        &mut self.vertices[index]
    }
}

impl<T: Scalar> std::hash::Hash for Polygon<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for v in &self.vertices {
            std::hash::Hash::hash(v, state);
        }
    }
}

impl<T: Scalar> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("( )");
        }
        let items = self.vertices.iter().map(|v| v as &dyn fmt::Display).collect_vec();
        crate::linalg::vector::write_tuple(f, &items)
    }
}
