pub mod config;
pub mod debug;
pub mod error;
pub mod plot;
pub mod point;
pub mod quadrant;
pub mod rect;
pub mod report;

pub use error::PlotErr;
pub use point::Point;
pub use quadrant::Quadrant;
pub use rect::Rect;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn demo_distances_from_origin() {
        let origin = Point::default();
        let rounded: Vec<f64> = [(2.0, 3.0), (5.0, 5.0), (-3.0, -1.0)]
            .into_iter()
            .map(|p| report::round2(Point::from(p).distance(&origin)))
            .collect();
        assert_eq!(rounded, vec![3.61, 7.07, 3.16]);
    }

    #[test]
    fn values_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Point>();
        assert_send_sync::<Rect>();
        assert_send_sync::<Quadrant>();

        let rect = Rect::new(Point::new(2.0, 3.0), Point::new(5.0, 5.0));
        let areas: Vec<f64> = (0..4)
            .map(|_| std::thread::spawn(move || rect.area()))
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(areas.iter().all(|&a| a == 6.0));
    }
}
