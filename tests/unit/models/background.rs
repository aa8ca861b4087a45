use super::*;

#[test]
fn default_gradient_parses_with_the_external_shape() {
    let spec = GradientSpec::parse(DEFAULT_GRADIENT).unwrap();
    assert_eq!(spec.background_color, "#f3e8ff");
    assert_eq!(spec.stops.len(), 2);
    assert_eq!(spec.stops[0].position.x, 20.0);
    assert_eq!(spec.stops[1].position.y, 80.0);
}

#[test]
fn gradient_codec_keeps_the_exact_key_layout() {
    let spec = GradientSpec {
        background_color: "#101010".into(),
        stops: vec![GradientStop {
            color: "#fafafa".into(),
            position: StopPosition { x: 50.0, y: 25.0 },
        }],
    };

    let encoded = spec.encode().unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

    // Collaborators parse this by shape: backgroundColor + stops[].position.{x,y}.
    assert_eq!(value["backgroundColor"], "#101010");
    assert_eq!(value["stops"][0]["color"], "#fafafa");
    assert_eq!(value["stops"][0]["position"]["x"], 50.0);
    assert_eq!(value["stops"][0]["position"]["y"], 25.0);

    assert_eq!(GradientSpec::parse(&encoded).unwrap(), spec);
}

#[test]
fn setting_an_image_url_upgrades_a_gradient_background() {
    let mut background = Background::default();
    assert!(background.image_url().is_none());

    background.set_image_url("https://cdn.example/photo.jpg".into());

    let Background::Image {
        gradient,
        url,
        opacity,
        position,
        size,
    } = &background
    else {
        panic!("expected image variant");
    };
    assert_eq!(gradient.as_str(), DEFAULT_GRADIENT);
    assert_eq!(url, "https://cdn.example/photo.jpg");
    assert_eq!(*opacity, 1.0);
    assert_eq!(position, "center");
    assert_eq!(size, "cover");
}

#[test]
fn clearing_the_image_keeps_the_gradient() {
    let mut background = Background::default();
    background.set_image_url("https://cdn.example/photo.jpg".into());

    background.clear_image();

    assert!(matches!(background, Background::Gradient { .. }));
    assert_eq!(background.gradient(), DEFAULT_GRADIENT);
}

#[test]
fn patch_merges_into_the_image_variant() {
    let mut background = Background::default();
    background.set_image_url("https://cdn.example/photo.jpg".into());

    BackgroundPatch {
        opacity: Some(0.4),
        size: Some("contain".into()),
        ..BackgroundPatch::default()
    }
    .apply(&mut background);

    let Background::Image { opacity, size, url, .. } = &background else {
        panic!("expected image variant");
    };
    assert_eq!(*opacity, 0.4);
    assert_eq!(size, "contain");
    assert_eq!(url, "https://cdn.example/photo.jpg");
}

#[test]
fn patch_with_url_upgrades_and_patch_gradient_stays_opaque() {
    let mut background = Background::default();

    BackgroundPatch {
        gradient: Some("{\"backgroundColor\":\"#000\",\"stops\":[]}".into()),
        url: Some("https://cdn.example/top.png".into()),
        ..BackgroundPatch::default()
    }
    .apply(&mut background);

    assert_eq!(background.image_url(), Some("https://cdn.example/top.png"));
    assert_eq!(
        background.gradient(),
        "{\"backgroundColor\":\"#000\",\"stops\":[]}"
    );
}

#[test]
fn tagged_serialization_distinguishes_the_variants() {
    let gradient_only = Background::default();
    let value = serde_json::to_value(&gradient_only).unwrap();
    assert_eq!(value["kind"], "gradient");

    let mut with_image = Background::default();
    with_image.set_image_url("https://cdn.example/photo.jpg".into());
    let value = serde_json::to_value(&with_image).unwrap();
    assert_eq!(value["kind"], "image");
    assert_eq!(value["url"], "https://cdn.example/photo.jpg");
}
