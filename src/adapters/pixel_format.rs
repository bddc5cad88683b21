//! Pixel format conversion helpers for presentation adapters.

/// Drops the alpha channel from packed RGBA data. A trailing partial pixel is ignored.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() / 4 * 3);

    for pixel in src.chunks_exact(4) {
        dst.extend_from_slice(&pixel[..3]);
    }

    dst
}

/// Copies RGBA data into a frame of the same size, forcing full opacity.
///
/// Returns `false` without touching `dst` when the lengths differ.
pub fn copy_rgba_opaque(src: &[u8], dst: &mut [u8]) -> bool {
    if src.len() != dst.len() {
        return false;
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(&src_pixel[..3]);
        dst_pixel[3] = 255;
    }

    true
}
