//! Integration tests for the tint crates.
//!
//! These tests exercise `tint-core` and `tint-ops` together through their
//! public APIs: effective color resolution, the region filter, tiling,
//! cancellation and JSON configuration.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tint_core::{Hsv, PixelBuffer, Rect, Rgb8, Rgba8};
    use tint_ops::{
        apply_tint, apply_tint_in_place, apply_tint_regions, apply_tint_tiled, render_tiled,
        resolve_effective_color, tile_rows, tint, tint_pixel, BlendRounding, CancelFlag,
        ColorSource, RenderOutcome, Stop, StopReason, TintParams, Unstoppable,
    };

    /// Stop token that allows `limit` checks, then reports cancellation.
    struct StopAfter {
        checks: AtomicUsize,
        limit: usize,
    }

    impl StopAfter {
        fn new(limit: usize) -> Self {
            Self {
                checks: AtomicUsize::new(0),
                limit,
            }
        }
    }

    impl Stop for StopAfter {
        fn check(&self) -> Result<(), StopReason> {
            if self.checks.fetch_add(1, Ordering::SeqCst) < self.limit {
                Ok(())
            } else {
                Err(StopReason::Cancelled)
            }
        }
    }

    fn test_image(w: u32, h: u32) -> PixelBuffer {
        let mut img = PixelBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(
                    x,
                    y,
                    Rgba8::new(
                        (x * 255 / w.max(1)) as u8,
                        (y * 255 / h.max(1)) as u8,
                        ((x ^ y) * 13 % 256) as u8,
                        ((x + y) * 29 % 256) as u8,
                    ),
                );
            }
        }
        img
    }

    fn row_is_tinted(dst: &PixelBuffer, src: &PixelBuffer, y: u32, color: Rgb8) -> bool {
        dst.row(y)
            .iter()
            .zip(src.row(y))
            .all(|(d, s)| *d == tint_pixel(*s, color))
    }

    #[test]
    fn test_zero_strength_is_identity() {
        let src = test_image(40, 30);
        let params = TintParams::new(ColorSource::Rgb(Rgb8::new(3, 200, 91)), 0.0);

        let once = tint(&src, &params, src.bounds(), &Unstoppable).unwrap();
        assert_eq!(once.color, Rgb8::WHITE);
        assert_eq!(once.image, src);

        let twice = tint(&once.image, &params, src.bounds(), &Unstoppable).unwrap();
        assert_eq!(twice.image, src);
    }

    #[test]
    fn test_alpha_preserved() {
        let src = test_image(33, 17);
        for strength in [0.0, 0.25, 0.5, 1.0] {
            for source in [
                ColorSource::Rgb(Rgb8::BLACK),
                ColorSource::Rgb(Rgb8::new(250, 5, 128)),
                ColorSource::Hsv(Hsv::new(275, 60, 40).unwrap()),
            ] {
                let out = tint(&src, &TintParams::new(source, strength), src.bounds(), &Unstoppable)
                    .unwrap();
                for (x, y, px) in out.image.pixels() {
                    assert_eq!(px.a, src.pixel(x, y).a);
                }
            }
        }
    }

    #[test]
    fn test_hsv_checkpoints() {
        let cases = [
            ((0, 100, 100), Rgb8::new(255, 0, 0)),
            ((120, 100, 100), Rgb8::new(0, 255, 0)),
            ((240, 100, 100), Rgb8::new(0, 0, 255)),
            ((360, 100, 100), Rgb8::new(255, 0, 0)),
            ((0, 0, 100), Rgb8::WHITE),
            ((77, 55, 0), Rgb8::BLACK),
        ];
        for ((h, s, v), expected) in cases {
            let params = TintParams::new(ColorSource::Hsv(Hsv::new(h, s, v).unwrap()), 1.0);
            assert_eq!(
                resolve_effective_color(&params).unwrap(),
                expected,
                "hsv({h}, {s}, {v})"
            );
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let src = PixelBuffer::filled(5, 3, Rgba8::new(100, 100, 100, 255));
        let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);

        let out = tint(&src, &params, src.bounds(), &Unstoppable).unwrap();
        assert_eq!(out.color, Rgb8::new(227, 177, 152));
        assert_eq!(out.outcome, RenderOutcome::Completed);
        assert!(out.image.data().iter().all(|&p| p == Rgba8::new(89, 69, 59, 255)));
    }

    #[test]
    fn test_rounding_changes_effective_color_only() {
        let src = PixelBuffer::filled(2, 2, Rgba8::new(100, 100, 100, 255));
        let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5)
            .with_rounding(BlendRounding::HalfUp);

        let out = tint(&src, &params, src.bounds(), &Unstoppable).unwrap();
        assert_eq!(out.color, Rgb8::new(228, 178, 153));
        assert_eq!(out.image.pixel(1, 1), Rgba8::new(89, 69, 60, 255));
    }

    #[test]
    fn test_split_regions_equal_whole() {
        let src = test_image(50, 37);
        let color = resolve_effective_color(&TintParams::new(
            ColorSource::Hsv(Hsv::new(200, 70, 90).unwrap()),
            0.8,
        ))
        .unwrap();

        let mut whole = PixelBuffer::new(50, 37);
        apply_tint(&src, &mut whole, src.bounds(), color, &Unstoppable).unwrap();

        // Horizontal bands.
        let mut banded = PixelBuffer::new(50, 37);
        let bands = tile_rows(src.bounds(), 6).unwrap();
        apply_tint_regions(&src, &mut banded, &bands, color, &Unstoppable).unwrap();

        // Four quadrants, processed out of order.
        let mut quads = PixelBuffer::new(50, 37);
        let parts = [
            Rect::from_ltrb(25, 20, 50, 37).unwrap(),
            Rect::from_ltrb(0, 0, 25, 20).unwrap(),
            Rect::from_ltrb(25, 0, 50, 20).unwrap(),
            Rect::from_ltrb(0, 20, 25, 37).unwrap(),
        ];
        for part in parts {
            apply_tint(&src, &mut quads, part, color, &Unstoppable).unwrap();
        }

        let mut tiled = PixelBuffer::new(50, 37);
        apply_tint_tiled(&src, &mut tiled, src.bounds(), color, 5, &Unstoppable).unwrap();

        assert_eq!(banded, whole);
        assert_eq!(quads, whole);
        assert_eq!(tiled, whole);
    }

    #[test]
    fn test_in_place_over_tiles() {
        let src = test_image(24, 24);
        let color = Rgb8::new(130, 250, 10);

        let mut expected = src.clone();
        apply_tint(&src, &mut expected, src.bounds(), color, &Unstoppable).unwrap();

        let mut buf = src.clone();
        for band in tile_rows(buf.bounds(), 7).unwrap() {
            apply_tint_in_place(&mut buf, band, color, &Unstoppable).unwrap();
        }
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_cancel_mid_scan() {
        let src = test_image(16, 10);
        let sentinel = Rgba8::new(9, 9, 9, 9);
        let mut dst = PixelBuffer::filled(16, 10, sentinel);
        let color = Rgb8::new(100, 150, 200);

        let stop = StopAfter::new(4);
        let outcome = apply_tint(&src, &mut dst, src.bounds(), color, &stop).unwrap();
        assert_eq!(outcome, RenderOutcome::Cancelled { rows_done: 4 });

        for y in 0..4 {
            assert!(row_is_tinted(&dst, &src, y, color), "row {y} should be written");
        }
        for y in 4..10 {
            assert!(dst.row(y).iter().all(|&p| p == sentinel), "row {y} should be untouched");
        }
    }

    #[test]
    fn test_cancel_mid_scan_in_place() {
        let src = test_image(12, 9);
        let color = Rgb8::new(40, 220, 90);
        let region = Rect::new(2, 1, 8, 7);

        let mut buf = src.clone();
        let stop = StopAfter::new(3);
        let outcome = apply_tint_in_place(&mut buf, region, color, &stop).unwrap();
        assert_eq!(outcome, RenderOutcome::Cancelled { rows_done: 3 });

        for (x, y, px) in buf.pixels() {
            let s = src.pixel(x, y);
            if region.contains(x, y) && y < region.y + 3 {
                assert_eq!(px, tint_pixel(s, color), "({x}, {y}) should be written");
            } else {
                assert_eq!(px, s, "({x}, {y}) should be untouched");
            }
        }
    }

    #[test]
    fn test_cancel_across_regions() {
        let src = test_image(8, 12);
        let mut dst = PixelBuffer::new(8, 12);
        let regions = tile_rows(src.bounds(), 5).unwrap();

        let stop = StopAfter::new(7);
        let outcome =
            apply_tint_regions(&src, &mut dst, &regions, Rgb8::new(1, 2, 3), &stop).unwrap();
        assert_eq!(outcome, RenderOutcome::Cancelled { rows_done: 7 });
    }

    #[test]
    fn test_parallel_cancel_writes_whole_rows() {
        let src = test_image(31, 64);
        let empty = Rgba8::new(0, 0, 0, 0);
        let mut dst = PixelBuffer::filled(31, 64, empty);
        let color = Rgb8::new(255, 0, 255);

        let stop = StopAfter::new(20);
        let outcome = apply_tint_tiled(&src, &mut dst, src.bounds(), color, 8, &stop).unwrap();
        assert_eq!(outcome, RenderOutcome::Cancelled { rows_done: 20 });

        let mut written = 0;
        for y in 0..64 {
            if row_is_tinted(&dst, &src, y, color) {
                written += 1;
            } else {
                assert!(dst.row(y).iter().all(|&p| p == empty), "row {y} partially written");
            }
        }
        assert_eq!(written, 20);
    }

    #[test]
    fn test_cancel_flag_reset_allows_rerun() {
        let src = test_image(12, 12);
        let params = TintParams::new(ColorSource::Rgb(Rgb8::new(10, 200, 30)), 0.7);
        let flag = CancelFlag::new();

        flag.cancel();
        let mut dst = src.clone();
        let first = render_tiled(&src, &mut dst, &params, src.bounds(), 4, &flag).unwrap();
        assert!(first.is_cancelled());
        assert_eq!(dst, src);

        flag.reset();
        let second = render_tiled(&src, &mut dst, &params, src.bounds(), 4, &flag).unwrap();
        assert!(second.is_completed());
        assert_eq!(
            dst,
            tint(&src, &params, src.bounds(), &Unstoppable).unwrap().image
        );
    }

    #[test]
    fn test_invalid_input_leaves_destination() {
        let src = test_image(10, 10);
        let mut dst = PixelBuffer::filled(10, 10, Rgba8::new(5, 5, 5, 5));
        let before = dst.clone();

        let bad_strength = TintParams::new(ColorSource::Rgb(Rgb8::BLACK), 1.2);
        assert!(render_tiled(&src, &mut dst, &bad_strength, src.bounds(), 4, &Unstoppable).is_err());

        let ok = TintParams::default();
        assert!(render_tiled(&src, &mut dst, &ok, Rect::new(5, 5, 6, 1), 4, &Unstoppable).is_err());
        assert!(
            apply_tint_regions(
                &src,
                &mut dst,
                &[Rect::new(0, 0, 10, 5), Rect::new(0, 9, 10, 2)],
                Rgb8::BLACK,
                &Unstoppable,
            )
            .is_err()
        );
        assert_eq!(dst, before);
    }

    #[test]
    fn test_params_from_json() {
        let json = r#"{
            "strength": 0.5,
            "source": { "rgb": { "r": 200, "g": 100, "b": 50 } }
        }"#;
        let params: TintParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.rounding, BlendRounding::Truncate);
        assert_eq!(resolve_effective_color(&params).unwrap(), Rgb8::new(227, 177, 152));

        let hsv: TintParams = serde_json::from_str(
            r#"{ "source": { "hsv": { "hue": 240, "saturation": 100, "value": 100 } },
                 "rounding": "half-even" }"#,
        )
        .unwrap();
        assert_eq!(hsv.strength, 1.0);
        assert_eq!(hsv.rounding, BlendRounding::HalfEven);
        assert_eq!(resolve_effective_color(&hsv).unwrap(), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_json_defaults_and_validation() {
        let defaults: TintParams = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, TintParams::default());

        // Deserialization does not range-check; resolution does.
        let bad: TintParams = serde_json::from_str(
            r#"{ "source": { "hsv": { "hue": 500, "saturation": 0, "value": 0 } } }"#,
        )
        .unwrap();
        assert!(resolve_effective_color(&bad).is_err());

        let text = serde_json::to_string(&TintParams::default()).unwrap();
        let back: TintParams = serde_json::from_str(&text).unwrap();
        assert_eq!(back, TintParams::default());
    }
}
