//! Node outlines and their boundary geometry.
//!
//! Every addressable node in a scene is either a circle (workflow steps and
//! commits) or a rounded rectangle (areas, stages and scenarios). A [`Shape`]
//! knows how to draw itself around a center point and where a line aimed at
//! another point leaves its outline, which is where connective edges start
//! and end.

use svg::node::element as svg_element;

use crate::{
    apply_appearance,
    draw::{Appearance, SvgNode},
    geometry::{Bounds, Point, Size},
};

/// The outline of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    RoundedRect { size: Size, corner_radius: f32 },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    pub fn rounded_rect(size: Size, corner_radius: f32) -> Self {
        Self::RoundedRect {
            size,
            corner_radius,
        }
    }

    /// Returns the axis-aligned bounds of the shape centered at `center`.
    pub fn bounds(&self, center: Point) -> Bounds {
        Bounds::new_from_center(center, self.size())
    }

    /// Returns the width and height the shape occupies.
    pub fn size(&self) -> Size {
        match self {
            Self::Circle { radius } => Size::new(radius * 2.0, radius * 2.0),
            Self::RoundedRect { size, .. } => *size,
        }
    }

    /// Finds where the ray from `center` toward `toward` crosses the outline.
    ///
    /// Circles are offset by their radius along the ray; rectangles use a
    /// ray/edge intersection against their half extents. When the two points
    /// coincide there is no direction, and `toward` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gitlook_core::{draw::Shape, geometry::Point};
    /// let step = Shape::circle(30.0);
    /// let exit = step.boundary_point(Point::new(200.0, 150.0), Point::new(400.0, 150.0));
    /// assert_eq!(exit, Point::new(230.0, 150.0));
    /// ```
    pub fn boundary_point(&self, center: Point, toward: Point) -> Point {
        match self {
            Self::Circle { radius } => match center.direction_to(toward) {
                Some(direction) => center.add_point(direction.scale(*radius)),
                None => toward,
            },
            Self::RoundedRect { size, .. } => find_rectangle_intersection(center, toward, *size),
        }
    }

    /// Renders the outline centered at `center` as an SVG element carrying `id`.
    pub fn render_to_svg(&self, id: &str, center: Point, appearance: &Appearance) -> SvgNode {
        match self {
            Self::Circle { radius } => {
                let circle = svg_element::Circle::new()
                    .set("id", id)
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius);
                Box::new(apply_appearance!(circle, appearance))
            }
            Self::RoundedRect {
                size,
                corner_radius,
            } => {
                let min = self.bounds(center).min_point();
                let rect = svg_element::Rectangle::new()
                    .set("id", id)
                    .set("x", min.x())
                    .set("y", min.y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", *corner_radius);
                Box::new(apply_appearance!(rect, appearance))
            }
        }
    }
}

fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    // Rectangle center is at a
    let rect_center = a;

    let dist = b.sub_point(a);

    // Normalize the direction vector
    let length = dist.hypot();
    if length < 0.001 {
        // Avoid division by zero
        return b;
    }

    let dx_norm = dist.x() / length;
    let dy_norm = dist.y() / length;

    // Find intersection with each edge of the rectangle
    // We're calculating how far we need to go along the ray to hit each edge

    // Distance to horizontal edges (top and bottom)
    let t_top = (rect_center.y() - half_height - a.y()) / dy_norm;
    let t_bottom = (rect_center.y() + half_height - a.y()) / dy_norm;

    // Distance to vertical edges (left and right)
    let t_left = (rect_center.x() - half_width - a.x()) / dx_norm;
    let t_right = (rect_center.x() + half_width - a.x()) / dx_norm;

    // Find the smallest positive t value (first intersection with rectangle)
    let mut t = f32::MAX;

    // Check each edge and find the closest valid intersection
    if t_top.is_finite() && t_top > 0.0 {
        let x = dx_norm.mul_add(t_top, a.x()); // a.x + t_top * dx_norm
        if x >= rect_center.x() - half_width && x <= rect_center.x() + half_width {
            t = t_top;
        }
    }

    if t_bottom.is_finite() && t_bottom > 0.0 && t_bottom < t {
        let x = dx_norm.mul_add(t_bottom, a.x()); // a.x + t_bottom * dx_norm
        if x >= rect_center.x() - half_width && x <= rect_center.x() + half_width {
            t = t_bottom;
        }
    }

    if t_left.is_finite() && t_left > 0.0 && t_left < t {
        let y = dy_norm.mul_add(t_left, a.y()); // a.y + t_left * dy_norm
        if y >= rect_center.y() - half_height && y <= rect_center.y() + half_height {
            t = t_left;
        }
    }

    if t_right.is_finite() && t_right > 0.0 && t_right < t {
        let y = dy_norm.mul_add(t_right, a.y()); // a.y + t_right * dy_norm
        if y >= rect_center.y() - half_height && y <= rect_center.y() + half_height {
            t = t_right;
        }
    }

    if t == f32::MAX || !t.is_finite() {
        return b; // Fallback if no intersection found
    }

    // Calculate the intersection point
    Point::new(
        dx_norm.mul_add(t, a.x()), //a.x + dx_norm * t
        dy_norm.mul_add(t, a.y()), // a.y + dy_norm * t
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{color::Color, draw::StrokeDefinition};

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x());
        assert_approx_eq!(f32, actual.y(), expected.y());
    }

    #[test]
    fn test_circle_boundary_diagonal() {
        let shape = Shape::circle(10.0);
        let result = shape.boundary_point(Point::new(0.0, 0.0), Point::new(30.0, 40.0));

        assert_point_eq(result, Point::new(6.0, 8.0));
    }

    #[test]
    fn test_circle_boundary_same_point() {
        let shape = Shape::circle(30.0);
        let center = Point::new(100.0, 100.0);

        assert_point_eq(shape.boundary_point(center, center), center);
    }

    #[test]
    fn test_rounded_rect_boundary_uses_half_extents() {
        // Area box 160x100 centered at (200, 150), target straight right
        let shape = Shape::rounded_rect(Size::new(160.0, 100.0), 10.0);
        let result = shape.boundary_point(Point::new(200.0, 150.0), Point::new(600.0, 150.0));

        assert_point_eq(result, Point::new(280.0, 150.0));
    }

    #[test]
    fn test_render_rounded_rect_from_center() {
        let shape = Shape::rounded_rect(Size::new(120.0, 80.0), 5.0);
        let appearance = Appearance::filled_stroked(
            Color::new("#f4f4f4").unwrap(),
            StrokeDefinition::new(Color::new("#4078c0").unwrap(), 2.0),
        );

        let markup = shape
            .render_to_svg("stage-s1", Point::new(100.0, 150.0), &appearance)
            .to_string();
        assert!(markup.contains(r#"id="stage-s1""#));
        assert!(markup.contains(r#"x="40""#));
        assert!(markup.contains(r#"y="110""#));
        assert!(markup.contains(r#"rx="5""#));
    }

    #[test]
    fn test_render_circle() {
        let shape = Shape::circle(10.0);
        let appearance = Appearance::filled(Color::new("#4078c0").unwrap());

        let markup = shape
            .render_to_svg("commit-c1", Point::new(50.0, 100.0), &appearance)
            .to_string();
        assert!(markup.starts_with("<circle"));
        assert!(markup.contains(r#"cx="50""#));
        assert!(markup.contains(r#"r="10""#));
    }

    #[test]
    fn test_intersection_from_right() {
        // Ray from center (100,100) going right to (200,100)
        // Should intersect right edge at (120, 100)
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, Point::new(120.0, 100.0));
    }

    #[test]
    fn test_intersection_diagonal() {
        // Ray from center (100,100) going diagonally to (200,200)
        // For a square, 45-degree diagonal hits corner region
        // Should intersect at (120, 120) - the corner of the rectangle
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 200.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, Point::new(120.0, 120.0));
    }

    #[test]
    fn test_intersection_same_point() {
        // Edge case: start and end are the same point
        // Should return b as fallback (avoid division by zero)
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, b);
    }

    #[test]
    fn test_intersection_zero_size() {
        // Edge case: zero-size shape (degenerate rectangle)
        // All edges collapse to center, no valid intersection possible
        // Should return b as fallback
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(0.0, 0.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, b);
    }

    #[test]
    fn test_intersection_very_close_points() {
        // Edge case: points extremely close together (distance < 0.001)
        // Algorithm returns b as fallback to avoid numerical instability
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0005, 100.0005);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        // Distance ~0.000707 < 0.001 threshold, so returns b
        assert_point_eq(result, b);
    }
}
