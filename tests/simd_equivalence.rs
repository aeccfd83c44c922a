#![cfg(feature = "simd")]

use hybridimg::{
    correlate_with, cross_correlation, gaussian_kernel, FilterOptions, Image, Kernel,
};

fn make_image(width: usize, height: usize, channels: usize) -> Image<f32> {
    Image::from_fn(width, height, channels, |x, y, c| {
        ((x * 13 + y * 7 + c * 5) % 31) as f32 / 31.0
    })
    .unwrap()
}

fn simd() -> FilterOptions {
    FilterOptions {
        simd: true,
        ..FilterOptions::default()
    }
}

#[test]
fn simd_matches_scalar_for_all_tail_widths() {
    let img = make_image(23, 17, 3);
    for width in [1, 3, 5, 7, 9, 11] {
        let kernel = Kernel::from_fn(width, 3, |r, c| 1.0 / (1.0 + r as f64 + c as f64)).unwrap();
        let scalar = cross_correlation(img.view(), &kernel).unwrap();
        let vector = correlate_with(img.view(), &kernel, simd()).unwrap();
        for (a, b) in scalar.data().iter().zip(vector.data()) {
            assert!((a - b).abs() < 1e-5, "width {width}: {a} vs {b}");
        }
    }
}

#[test]
fn simd_gaussian_blur_matches_scalar() {
    let img = make_image(40, 30, 1);
    let kernel = gaussian_kernel(2.5, 11, 11).unwrap();
    let scalar = cross_correlation(img.view(), &kernel).unwrap();
    let vector = correlate_with(img.view(), &kernel, simd()).unwrap();
    for (a, b) in scalar.data().iter().zip(vector.data()) {
        assert!((a - b).abs() < 1e-6);
    }
}
