/// Copies packed RGB pixels into an RGBA frame with opaque alpha.
///
/// Stops at whichever buffer runs out first and returns the number of
/// pixels written.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> usize {
    let mut copied = 0;

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
        copied += 1;
    }

    copied
}

/// Fills an RGBA frame with opaque black.
pub fn clear_rgba(dst: &mut [u8]) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}
