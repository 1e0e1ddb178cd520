#![cfg(test)]

use super::*;

#[test]
fn test_rectangle_points() {
    let rect = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(
        rect.points(),
        [
            Point::new(1.0, 2.0),
            Point::new(4.0, 2.0),
            Point::new(4.0, 6.0),
            Point::new(1.0, 6.0),
        ],
        "Corners should be ordered around the perimeter."
    );
}

#[test]
fn test_descriptions() {
    let triangle = Triangle::new(0.0, 0.0, 10.0, 0.0, 5.0, 8.0);
    assert_eq!(triangle.points().len(), 3);
    assert_eq!(
        describe_polygon(&triangle),
        "Triangle { points: [(0.00, 0.00), (10.00, 0.00), (5.00, 8.00)] }"
    );

    let shapes: [Box<dyn Polygon>; 2] = [
        Box::new(Rectangle::new(0.0, 0.0, 1.0, 1.0)),
        Box::new(Triangle::new(0.0, 0.0, 1.0, 0.0, 0.5, 1.0)),
    ];
    let described: Vec<String> = shapes.iter().map(|s| describe_polygon(s.as_ref())).collect();
    assert!(described[0].starts_with("Rectangle { points: [(0.00, 0.00),"));
    assert!(described[1].starts_with("Triangle { points: [(0.00, 0.00),"));
}

#[test]
fn test_point_display() {
    assert_eq!(Point::new(-1.004, 2.5).to_string(), "(-1.00, 2.50)");
    assert_eq!(PointList(&[]).to_string(), "[]");
    assert_eq!(
        PointList(&[Point::default(), Point::new(1.0, 1.0)]).to_string(),
        "[(0.00, 0.00), (1.00, 1.00)]"
    );
}
