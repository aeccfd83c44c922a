use hybridimg::{
    create_hybrid_image, low_pass, Band, BandSpec, FilterOptions, HybridComposer, HybridConfig,
    HybridError, Image,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_image(width: usize, height: usize, channels: usize, seed: u64) -> Image<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    Image::from_fn(width, height, channels, |_, _, _| rng.random_range(0..=255)).unwrap()
}

#[test]
fn identical_low_low_inputs_reproduce_low_pass() {
    let img = make_image(16, 12, 3, 1);
    let out = create_hybrid_image(img.view(), img.view(), 2.0, 7, "low", 2.0, 7, "LOW", 0.5, 1.0)
        .unwrap();
    assert_eq!(out.shape(), img.shape());

    let reference = low_pass(img.view(), 2.0, 7).unwrap();
    for (got, want) in out.data().iter().zip(reference.data()) {
        let want = want.clamp(0.0, 255.0);
        assert!(
            (f32::from(*got) - want).abs() <= 1.0,
            "{got} vs {want}"
        );
    }
}

#[test]
fn float_and_u8_inputs_agree() {
    let a = make_image(10, 10, 1, 2);
    let b = make_image(10, 10, 1, 3);
    let a_unit = a.map(|v| f32::from(v) / 255.0);
    let b_unit = b.map(|v| f32::from(v) / 255.0);

    let from_u8 =
        create_hybrid_image(a.view(), b.view(), 3.0, 9, "low", 1.0, 5, "high", 0.4, 1.5).unwrap();
    let from_f32 = create_hybrid_image(
        a_unit.view(),
        b_unit.view(),
        3.0,
        9,
        "low",
        1.0,
        5,
        "high",
        0.4,
        1.5,
    )
    .unwrap();
    assert_eq!(from_u8, from_f32);
}

#[test]
fn output_is_clipped_to_eight_bits() {
    let bright = Image::new(vec![250u8; 36], 6, 6, 1).unwrap();
    let composer = HybridComposer::new(HybridConfig {
        first: BandSpec::new(1.0, 1, Band::Low),
        second: BandSpec::new(1.0, 1, Band::Low),
        mixin_ratio: 0.5,
        scale_factor: 4.0,
    })
    .unwrap();
    let out = composer.compose(bright.view(), bright.view()).unwrap();
    assert!(out.data().iter().all(|&v| v == 255));

    // The high band of a flat image vanishes inside and is positive along
    // the zero-padded border, where the blur is attenuated.
    let composer = HybridComposer::new(HybridConfig {
        first: BandSpec::new(1.0, 3, Band::High),
        second: BandSpec::new(1.0, 3, Band::High),
        mixin_ratio: 0.5,
        scale_factor: 1.0,
    })
    .unwrap();
    let out = composer.compose(bright.view(), bright.view()).unwrap();
    for y in 0..6 {
        for x in 0..6 {
            let v = *out.get(x, y, 0).unwrap();
            if (1..5).contains(&x) && (1..5).contains(&y) {
                assert_eq!(v, 0, "interior ({x}, {y})");
            } else {
                assert!(v > 0, "border ({x}, {y})");
            }
        }
    }
}

#[test]
fn inputs_are_not_modified() {
    let a = make_image(8, 8, 3, 4);
    let b = make_image(8, 8, 3, 5);
    let a_before = a.clone();
    let b_before = b.clone();
    create_hybrid_image(a.view(), b.view(), 1.0, 5, "high", 2.0, 5, "low", 0.7, 2.0).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn unknown_band_keyword_is_invalid_parameter() {
    let img = make_image(4, 4, 1, 6);
    let err = create_hybrid_image(img.view(), img.view(), 1.0, 3, "medium", 1.0, 3, "low", 0.5, 1.0)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        HybridError::InvalidParameter { name: "band", .. }
    ));
}

#[test]
fn separable_and_dense_pipelines_agree_within_one_level() {
    let a = make_image(20, 15, 3, 7);
    let b = make_image(20, 15, 3, 8);
    let config = HybridConfig {
        first: BandSpec::new(4.0, 13, Band::Low),
        second: BandSpec::new(2.0, 9, Band::High),
        mixin_ratio: 0.6,
        scale_factor: 1.2,
    };
    let dense = HybridComposer::new(config)
        .unwrap()
        .compose(a.view(), b.view())
        .unwrap();
    let separable = HybridComposer::new(config)
        .unwrap()
        .with_options(FilterOptions {
            separable: true,
            ..FilterOptions::default()
        })
        .compose(a.view(), b.view())
        .unwrap();
    for (x, y) in dense.data().iter().zip(separable.data()) {
        assert!(x.abs_diff(*y) <= 1, "{x} vs {y}");
    }
}
