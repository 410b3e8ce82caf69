use etc2::*;

mod util;

#[test]
fn individual_end_to_end() {
    let block = util::individual_block([15; 3], [0; 3], [0, 0], false);
    assert_eq!(block, [0xF0, 0xF0, 0xF0, 0x00, 0, 0, 0, 0]);
    assert_eq!(color_block_mode(&block), ColorMode::Individual);

    let pixels = decode_color_block(&block);
    for y in 0..4 {
        for x in 0..4 {
            let expected = if x < 2 { [255, 255, 255, 255] } else { [2, 2, 2, 255] };
            assert_eq!(pixels.get(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn individual_flipped() {
    let block = util::individual_block([15; 3], [0; 3], [0, 0], true);
    let pixels = decode_color_block(&block);
    for y in 0..4 {
        for x in 0..4 {
            let expected = if y < 2 { [255, 255, 255, 255] } else { [2, 2, 2, 255] };
            assert_eq!(pixels.get(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn pixel_indexes_select_modifiers() {
    // gray 0x88 with table 1: +5, +17, -5, -17
    let indexes = [0, 1, 2, 3, 3, 2, 1, 0, 0, 0, 0, 0, 3, 3, 3, 3];
    let block = util::individual_block([8; 3], [8; 3], [1, 1], false);
    let block = util::with_indexes(block, indexes);

    let pixels = decode_color_block(&block);
    let values = [0x88 + 5, 0x88 + 17, 0x88 - 5, 0x88 - 17];
    for (pixel, index) in pixels.pixels().iter().zip(indexes) {
        let v = values[index as usize];
        assert_eq!(*pixel, [v, v, v, 255]);
    }
}

#[test]
fn planar_gradient_is_monotonic() {
    let block = util::PLANAR_RED_GREEN;
    assert_eq!(color_block_mode(&block), ColorMode::Planar);

    let pixels = decode_color_block(&block);
    for y in 0..4 {
        for x in 1..4 {
            assert!(pixels.get(x, y)[0] >= pixels.get(x - 1, y)[0]);
        }
    }
    for x in 0..4 {
        for y in 1..4 {
            assert!(pixels.get(x, y)[1] >= pixels.get(x, y - 1)[1]);
        }
    }

    let ramp = [0, 64, 128, 191];
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(pixels.get(x, y), [ramp[x], ramp[y], 0, 255]);
        }
    }
}

#[test]
fn decoding_is_pure() {
    let mut rng = util::create_rng();
    for _ in 0..1000 {
        let block = util::random_block(&mut rng);

        assert_eq!(decode_color_block(&block), decode_color_block(&block));
        assert_eq!(
            decode_punchthrough_block(&block),
            decode_punchthrough_block(&block)
        );
    }
}

#[test]
fn random_blocks_use_every_mode() {
    let mut rng = util::create_rng();
    let mut seen = Vec::new();
    for _ in 0..1000 {
        let mode = color_block_mode(&util::random_block(&mut rng));
        if !seen.contains(&mode) {
            seen.push(mode);
        }
    }
    assert_eq!(seen.len(), 5, "{seen:?}");
}

#[test]
fn color_blocks_are_opaque() {
    let mut rng = util::create_rng();
    for _ in 0..1000 {
        let pixels = decode_color_block(&util::random_block(&mut rng));
        assert_eq!(pixels.alpha(), [255; 16]);
    }
}

#[test]
fn punchthrough_opaque_bit() {
    // differential mode, base (16, 16, 16) => 132, no delta
    let transparent = [0x80, 0x80, 0x80, 0x00, 0, 0, 0, 0];
    let opaque = [0x80, 0x80, 0x80, 0x02, 0, 0, 0, 0];
    let indexes = [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3];

    let pixels = decode_punchthrough_block(&util::with_indexes(transparent, indexes));
    for (pixel, index) in pixels.pixels().iter().zip(indexes) {
        let expected = match index {
            0 => [132, 132, 132, 255],
            1 => [140, 140, 140, 255],
            2 => [0, 0, 0, 0],
            _ => [124, 124, 124, 255],
        };
        assert_eq!(*pixel, expected);
    }

    let pixels = decode_punchthrough_block(&util::with_indexes(opaque, indexes));
    assert_eq!(pixels, decode_color_block(&util::with_indexes(opaque, indexes)));
    assert_eq!(pixels.alpha(), [255; 16]);
}

#[test]
fn punchthrough_has_no_individual_mode() {
    // with the diff bit unset, ETC2 decodes this as individual mode
    let block = [0x80, 0x80, 0x80, 0x00, 0, 0, 0, 0];
    assert_eq!(color_block_mode(&block), ColorMode::Individual);
    assert_eq!(decode_color_block(&block).get(0, 0), [0x8A, 0x8A, 0x8A, 255]);
    assert_eq!(decode_punchthrough_block(&block).get(0, 0), [132, 132, 132, 255]);
}

#[test]
fn punchthrough_planar_ignores_opaque_bit() {
    let mut block = util::PLANAR_RED_GREEN;
    let opaque = decode_punchthrough_block(&block);
    assert_eq!(opaque, decode_color_block(&block));

    // the diff bit is the opaque bit, so clear it and select planar mode anyway
    block[3] &= !0b10;
    let pixels = decode_punchthrough_block(&block);
    assert_eq!(pixels.alpha(), [255; 16]);
}

#[test]
fn punchthrough_alpha_is_binary() {
    let mut rng = util::create_rng();
    for _ in 0..1000 {
        let pixels = decode_punchthrough_block(&util::random_block(&mut rng));
        for pixel in pixels.pixels() {
            match pixel[3] {
                0 => assert_eq!(*pixel, [0, 0, 0, 0]),
                255 => {}
                a => panic!("unexpected alpha {a}"),
            }
        }
    }
}

#[test]
fn alpha_block_keeps_colors() {
    let color = util::individual_block([15; 3], [0; 3], [0, 0], false);
    let mut pixels = decode_color_block(&color);

    // base 100, multiplier 2, table 13, all indexes 7 => 100 + 2 * 9
    let alpha = [100, 0x2D, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    decode_alpha_block(&alpha, &mut pixels);

    assert_eq!(pixels.alpha(), [118; 16]);
    assert_eq!(pixels.to_rgb(), decode_color_block(&color).to_rgb());
}
