//! Integration tests for the timeline -> ring -> render pipeline.

use akashic_core::{
    render_ring_svg, segment_at_angle, Category, Config, DashboardView, ReferencePeriod,
    SvgOptions, TimeSlice, Timeline,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 13, 8, 0, 0).unwrap()
}

fn day_of_work() -> Timeline {
    let b = base();
    Timeline::from_slices(vec![
        TimeSlice::new(1, b, Some(b + Duration::minutes(50)))
            .unwrap()
            .with_description("refactor parser #work"),
        TimeSlice::new(2, b + Duration::minutes(60), Some(b + Duration::minutes(85)))
            .unwrap()
            .with_description("#study ch. 4"),
        TimeSlice::new(3, b + Duration::minutes(90), Some(b + Duration::minutes(115)))
            .unwrap()
            .with_description("#reading"),
        TimeSlice::new(4, b + Duration::minutes(120), Some(b + Duration::minutes(145)))
            .unwrap()
            .with_description("#exercise"),
    ])
    .unwrap()
}

#[test]
fn test_full_session_ring_workflow() {
    let timeline = day_of_work();
    let now = base() + Duration::minutes(300);
    let period = ReferencePeriod::Session { minutes: 300 };

    let allocation = timeline.allocation(&Category::default_palette(), period, now);
    assert_eq!(allocation.weight_of("work"), Some(50.0));
    assert_eq!(allocation.weight_of("study"), Some(25.0));
    assert_eq!(allocation.capacity(), Some(300.0));

    let config = Config::default();
    let geometry = config.geometry().unwrap();
    let layout = allocation.layout(&geometry).unwrap();

    // 125 of 300 minutes tracked
    let tracked: f64 = layout.segments.iter().map(|s| s.dash_length).sum();
    assert!((tracked / layout.circumference - 125.0 / 300.0).abs() < 1e-9);
    assert!((layout.total_length() - layout.circumference).abs() < 1e-9);

    // 12 o'clock is work; just past half the ring is idle
    assert_eq!(segment_at_angle(&layout, 1.0).unwrap().category.id, "work");
    assert_eq!(segment_at_angle(&layout, 200.0).unwrap().category.id, "idle");

    let svg = render_ring_svg(&layout, &geometry, &SvgOptions::default());
    // music has no time: not drawn
    assert!(!svg.contains("data-category=\"music\""));
    assert_eq!(svg.matches("<circle").count(), 5);
}

#[test]
fn test_dashboard_serializes_for_frontend() {
    let mut config = Config::default();
    config.period = ReferencePeriod::Session { minutes: 300 };
    let now = base() + Duration::minutes(300);

    let view = DashboardView::build(&day_of_work(), &config, now, Some("work")).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["timer_label"], "25:00");
    assert_eq!(json["today_label"], "Today: 2h");
    assert_eq!(json["segments"][0]["id"], "work");
    assert_eq!(json["segments"][0]["time"], "0:50");
    assert_eq!(json["tags"][0]["active"], true);
    assert_eq!(json["tags"][1]["active"], false);
    assert_eq!(json["tags"][0]["icon"], "laptop-code");
}

#[test]
fn test_empty_timeline_renders_empty_ring() {
    let view = DashboardView::build(&Timeline::new(), &Config::default(), base(), None).unwrap();
    assert!(view.layout.is_empty());
    assert_eq!(view.segments.len(), 1);
    assert_eq!(view.segments[0].id, "idle");
    assert_eq!(view.today_label, "Today: 0m");
}
