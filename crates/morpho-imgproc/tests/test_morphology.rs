use morpho_image::{Image, ImageSize, Region};
use morpho_imgproc::morphology::{
    compute_border, grow_reference, grow_with_strategy, shrink, shrink_reference,
    shrink_region, shrink_with_strategy, MorphParams, MorphologyError,
};
use morpho_imgproc::parallel::{ExecutionStrategy, AUTO_PARALLEL_THRESHOLD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut StdRng, size: ImageSize) -> Image<f32, 1> {
    let data = (0..size.area())
        .map(|_| {
            if rng.random_bool(0.2) {
                0.0
            } else {
                rng.random::<f32>()
            }
        })
        .collect();
    Image::new(size, data).unwrap()
}

fn blank(size: ImageSize) -> Image<f32, 1> {
    Image::from_size_val(size, f32::NAN).unwrap()
}

#[test]
fn test_all_ones_stay_ones_with_edge_lock() -> Result<(), MorphologyError> {
    let size = ImageSize {
        width: 13,
        height: 9,
    };
    let src = Image::from_size_val(size, 1.0)?;

    for (rx, ry) in [(1, 1), (2, 5), (6, 1), (20, 20)] {
        let mut dst = blank(size);
        shrink(&src, &mut dst, &MorphParams::new(rx, ry, true)?)?;
        assert!(dst.as_slice().iter().all(|&v| v == 1.0), "rx={rx} ry={ry}");
    }
    Ok(())
}

#[test]
fn test_all_zero_stays_zero() -> Result<(), MorphologyError> {
    let size = ImageSize {
        width: 8,
        height: 6,
    };
    let src = Image::from_size_val(size, 0.0)?;

    for edge_lock in [true, false] {
        let mut dst = blank(size);
        shrink(&src, &mut dst, &MorphParams::new(3, 2, edge_lock)?)?;
        assert!(dst.as_slice().iter().all(|&v| v == 0.0));
    }
    Ok(())
}

#[test]
fn test_shrink_never_increases() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(1);
    let size = ImageSize {
        width: 31,
        height: 17,
    };

    for _ in 0..10 {
        let src = random_image(&mut rng, size);
        let params = MorphParams::new(rng.random_range(1..6), rng.random_range(1..6), false)?;
        let mut dst = blank(size);
        shrink(&src, &mut dst, &params)?;

        for (out, inp) in dst.as_slice().iter().zip(src.as_slice()) {
            assert!(out <= inp);
        }
    }
    Ok(())
}

#[test]
fn test_horizontal_symmetry() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(2);
    let size = ImageSize {
        width: 12,
        height: 10,
    };

    // mirror the left half onto the right half
    let mut src = random_image(&mut rng, size);
    for row in src.as_slice_mut().chunks_exact_mut(size.width) {
        for x in 0..size.width / 2 {
            row[size.width - 1 - x] = row[x];
        }
    }

    for edge_lock in [true, false] {
        let mut dst = blank(size);
        shrink(&src, &mut dst, &MorphParams::new(3, 2, edge_lock)?)?;
        for row in dst.as_slice().chunks_exact(size.width) {
            let mirrored = row.iter().rev().copied().collect::<Vec<_>>();
            assert_eq!(row, mirrored.as_slice());
        }
    }
    Ok(())
}

#[test]
fn test_border_profile_symmetry() {
    let profile = compute_border(2, 2);
    assert_eq!(profile.len(), 5);
    assert_eq!(profile[0], profile[4]);
    assert_eq!(profile[1], profile[3]);
}

#[test]
fn test_scan_line() -> Result<(), MorphologyError> {
    let size = ImageSize {
        width: 5,
        height: 1,
    };
    let src = Image::new(size, vec![1.0, 1.0, 0.0, 1.0, 1.0])?;
    let mut dst = blank(size);

    shrink(&src, &mut dst, &MorphParams::new(1, 1, true)?)?;
    assert_eq!(dst.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0]);

    shrink(&src, &mut dst, &MorphParams::new(1, 1, false)?)?;
    assert_eq!(dst.as_slice(), &[0.0; 5]);
    Ok(())
}

#[test]
fn test_streaming_matches_reference() -> Result<(), MorphologyError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..40 {
        let size = ImageSize {
            width: rng.random_range(1..40),
            height: rng.random_range(1..30),
        };
        let src = random_image(&mut rng, size);
        let params = MorphParams::new(
            rng.random_range(1..12),
            rng.random_range(1..12),
            rng.random_bool(0.5),
        )?;

        let mut expected = blank(size);
        let mut serial = blank(size);
        let mut banded = blank(size);

        shrink_reference(&src, &mut expected, &params)?;
        shrink_with_strategy(&src, &mut serial, &params, ExecutionStrategy::Serial)?;
        shrink_with_strategy(&src, &mut banded, &params, ExecutionStrategy::Fixed(3))?;
        assert_eq!(serial, expected, "shrink {size} {params:?}");
        assert_eq!(banded, expected, "shrink bands {size} {params:?}");

        grow_reference(&src, &mut expected, &params)?;
        grow_with_strategy(&src, &mut serial, &params, ExecutionStrategy::Serial)?;
        grow_with_strategy(&src, &mut banded, &params, ExecutionStrategy::Parallel)?;
        assert_eq!(serial, expected, "grow {size} {params:?}");
        assert_eq!(banded, expected, "grow bands {size} {params:?}");
    }
    Ok(())
}

#[test]
fn test_region_matches_cropped_image() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(4);
    let size = ImageSize {
        width: 20,
        height: 16,
    };
    let src = random_image(&mut rng, size);
    let region = Region::new(3, 5, 11, 7);

    let cropped_data = src
        .as_slice()
        .chunks_exact(size.width)
        .skip(region.y)
        .take(region.height)
        .flat_map(|row| row[region.x..region.x + region.width].iter().copied())
        .collect();
    let cropped = Image::new(region.size(), cropped_data)?;

    for edge_lock in [true, false] {
        let params = MorphParams::new(2, 3, edge_lock)?;
        let mut from_region = blank(region.size());
        let mut from_crop = blank(region.size());
        shrink_region(&src, region, &mut from_region, &params)?;
        shrink(&cropped, &mut from_crop, &params)?;
        assert_eq!(from_region, from_crop);
    }
    Ok(())
}

#[test]
fn test_large_radius_on_small_image() -> Result<(), MorphologyError> {
    let size = ImageSize {
        width: 3,
        height: 2,
    };
    let src = Image::new(size, vec![0.9, 0.5, 0.7, 0.8, 0.6, 0.4])?;
    let mut dst = blank(size);

    shrink(&src, &mut dst, &MorphParams::new(40, 40, true)?)?;
    assert!(dst.as_slice().iter().all(|&v| v == 0.4));

    shrink(&src, &mut dst, &MorphParams::new(40, 40, false)?)?;
    assert!(dst.as_slice().iter().all(|&v| v == 0.0));
    Ok(())
}

#[test]
fn test_auto_strategy_above_threshold() -> Result<(), MorphologyError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(5);
    let size = ImageSize {
        width: 400,
        height: 300,
    };
    assert!(ExecutionStrategy::Auto.is_parallel(size.area()));
    assert!(size.area() >= AUTO_PARALLEL_THRESHOLD);

    let src = random_image(&mut rng, size);
    for edge_lock in [true, false] {
        let params = MorphParams::new(3, 2, edge_lock)?;
        let mut expected = blank(size);
        let mut auto = blank(size);
        shrink_reference(&src, &mut expected, &params)?;
        shrink(&src, &mut auto, &params)?;
        assert_eq!(auto, expected, "edge_lock={edge_lock}");
    }
    Ok(())
}
