use super::*;

fn layer_at(transformation: &dyn RootTransformation, progress: f32) -> GraphicsLayer {
    let mut layer = GraphicsLayer::default();
    transformation.transform(progress, &mut layer);
    layer
}

#[test]
fn scale_interpolates_from_identity_to_end() {
    let scale = ScaleTransformation::new(0.65);
    assert_eq!(layer_at(&scale, 0.0).scale, 1.0);
    assert!((layer_at(&scale, 1.0).scale - 0.65).abs() < 1e-6);
    for step in 0..=10 {
        let progress = step as f32 / 10.0;
        let expected = 1.0 - progress * (1.0 - 0.65);
        assert!((layer_at(&scale, progress).scale - expected).abs() < 1e-6);
    }
}

#[test]
fn elevation_and_translation_start_at_zero() {
    let elevation = ElevationTransformation::new(16.0);
    let translation = YTranslationTransformation::new(-40.0);

    assert_eq!(layer_at(&elevation, 0.0).elevation, 0.0);
    assert_eq!(layer_at(&elevation, 0.25).elevation, 4.0);
    assert_eq!(layer_at(&elevation, 1.0).elevation, 16.0);
    assert_eq!(layer_at(&translation, 0.5).translation_y, -20.0);
    assert_eq!(layer_at(&translation, 1.0).translation_y, -40.0);
}

#[test]
fn transformations_only_touch_their_own_property() {
    let layer = layer_at(&ElevationTransformation::new(8.0), 1.0);
    assert_eq!(layer.scale, 1.0);
    assert_eq!(layer.translation_x, 0.0);
    assert_eq!(layer.translation_y, 0.0);
}

#[test]
fn applying_twice_is_idempotent() {
    let scale = ScaleTransformation::new(0.5);
    let mut layer = GraphicsLayer::default();
    scale.transform(0.3, &mut layer);
    let once = layer;
    scale.transform(0.3, &mut layer);
    assert_eq!(layer, once);

    // Going back to a previous progress yields the previous value.
    scale.transform(0.9, &mut layer);
    scale.transform(0.3, &mut layer);
    assert_eq!(layer, once);
}

#[test]
fn out_of_range_settings_are_clamped() {
    assert_eq!(ScaleTransformation::new(0.0).end_scale(), MIN_END_SCALE);
    assert_eq!(ScaleTransformation::new(f32::NAN).end_scale(), MIN_END_SCALE);
    assert_eq!(ElevationTransformation::new(-3.0).end_elevation(), 0.0);
}

#[test]
fn composite_matches_independent_applications() {
    let composite = CompositeTransformation::new()
        .with(ScaleTransformation::new(0.7))
        .with(ElevationTransformation::new(10.0))
        .with(YTranslationTransformation::new(30.0));

    let combined = layer_at(&composite, 0.4);

    assert_eq!(combined.scale, layer_at(&ScaleTransformation::new(0.7), 0.4).scale);
    assert_eq!(
        combined.elevation,
        layer_at(&ElevationTransformation::new(10.0), 0.4).elevation
    );
    assert_eq!(
        combined.translation_y,
        layer_at(&YTranslationTransformation::new(30.0), 0.4).translation_y
    );
    assert_eq!(composite.len(), 3);
}

#[test]
fn composite_overlap_is_last_write_wins() {
    let composite = CompositeTransformation::new()
        .with(ScaleTransformation::new(0.5))
        .with(ScaleTransformation::new(0.9));

    assert!((layer_at(&composite, 1.0).scale - 0.9).abs() < 1e-6);
}

#[test]
fn closures_can_act_as_transformations() {
    let fade_x = |progress: f32, layer: &mut GraphicsLayer| {
        layer.translation_x = evaluate(progress, 0.0, 12.0);
    };
    let composite = CompositeTransformation::new().with(fade_x);

    assert_eq!(layer_at(&composite, 0.5).translation_x, 6.0);
}

#[test]
fn empty_composite_is_identity() {
    let composite = CompositeTransformation::new();
    assert!(composite.is_empty());
    assert!(layer_at(&composite, 0.8).is_identity());
}
