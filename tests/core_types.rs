use hybridimg::{HybridError, Image, ImageView, Kernel};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1, 1).err().unwrap();
    assert_eq!(
        err,
        HybridError::InvalidDimensions {
            width: 0,
            height: 1,
            channels: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 1, 0).err().unwrap();
    assert_eq!(
        err,
        HybridError::InvalidDimensions {
            width: 1,
            height: 1,
            channels: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u8; 12];

    let err = ImageView::new(&data, 2, 1, 3, 5).err().unwrap();
    assert_eq!(
        err,
        HybridError::InvalidStride {
            row_len: 6,
            stride: 5,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 11];

    let err = ImageView::from_slice(&data, 2, 2, 3).err().unwrap();
    assert_eq!(err, HybridError::BufferTooSmall { needed: 12, got: 11 });
}

#[test]
fn owned_image_round_trips_through_view() {
    let data: Vec<f32> = (0..12).map(|v| v as f32 / 12.0).collect();
    let img = Image::new(data.clone(), 2, 2, 3).unwrap();
    let view = img.view();
    assert_eq!(view.shape(), (2, 2, 3));
    assert_eq!(view.stride(), 6);
    assert_eq!(view.row(1).unwrap(), &data[6..12]);
    assert_eq!(view.to_image(), img);
    assert_eq!(img.into_vec(), data);
}

#[test]
fn kernel_identity_is_a_unit_delta() {
    let k = Kernel::identity();
    assert_eq!((k.width(), k.height()), (1, 1));
    assert_eq!(k.center(), (0, 0));
    assert_eq!(k.data(), &[1.0]);
    assert_eq!(k.flipped(), k);
}

#[test]
fn kernel_rejects_empty_extent() {
    let err = Kernel::new(Vec::new(), 0, 3).err().unwrap();
    assert!(matches!(
        err,
        HybridError::InvalidParameter {
            name: "kernel width",
            ..
        }
    ));
}
