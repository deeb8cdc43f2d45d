use platformer_game::geometry::{Point, Rect};

#[test]
fn derived_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Point::new(25.0, 40.0));
}

#[test]
fn from_center_places_box_around_point() {
    let r = Rect::from_center(100.0, 50.0, 20.0, 10.0);
    assert_eq!(r, Rect::new(90.0, 45.0, 20.0, 10.0));
}

#[test]
fn edge_setters_move_without_resizing() {
    let mut r = Rect::new(0.0, 0.0, 30.0, 50.0);
    r.set_right(100.0);
    assert_eq!(r.left(), 70.0);
    r.set_bottom(200.0);
    assert_eq!(r.top(), 150.0);
    r.set_left(5.0);
    r.set_top(6.0);
    assert_eq!(r, Rect::new(5.0, 6.0, 30.0, 50.0));
    r.set_center(Point::new(200.0, 300.0));
    assert_eq!(r, Rect::new(185.0, 275.0, 30.0, 50.0));
}

#[test]
fn overlapping_boxes_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn contained_box_intersects() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right_neighbour = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&right_neighbour));
    assert!(!a.intersects(&below));
}

#[test]
fn overlap_on_one_axis_only_is_not_intersection() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 20.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn contains_point_is_half_open() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains_point(Point::new(0.0, 0.0)));
    assert!(r.contains_point(Point::new(9.9, 9.9)));
    assert!(!r.contains_point(Point::new(10.0, 5.0)));
    assert!(!r.contains_point(Point::new(5.0, 10.0)));
    assert!(!r.contains_point(Point::new(-0.1, 5.0)));
}
