#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Just no panic
    if data.len() < 3 {
        return;
    }
    let (header, blocks) = data.split_at(3);
    let width = u32::from(header[0]);
    let height = u32::from(header[1]);
    let format = match header[2] % 4 {
        0 => etc2::Format::ETC1_RGB8,
        1 => etc2::Format::ETC2_RGB8,
        2 => etc2::Format::ETC2_RGB8_PUNCHTHROUGH_ALPHA1,
        _ => etc2::Format::ETC2_RGBA8_EAC,
    };
    let channels = if header[2] & 4 == 0 {
        etc2::Channels::Rgba
    } else {
        etc2::Channels::Rgb
    };

    let size = etc2::Size::new(width, height);
    let layout = etc2::RasterLayout::new(size, format, channels).expect("Invalid layout");
    let mut buf = vec![0u8; layout.dest_len()];
    _ = etc2::transcode(
        blocks,
        &mut buf,
        size,
        format,
        channels,
        &etc2::Options::default(),
    );
});
