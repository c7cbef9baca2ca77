//! Pixel-wise signed-extreme combination of spectrum planes.

/// Fold `src` into `dst`, keeping per pixel the largest positive and the most
/// negative value across the two planes:
///
/// `dst[i] = max(dst[i]+, src[i]+) + min(dst[i]-, src[i]-)`
///
/// where `v+ = max(v, 0)` and `v- = min(v, 0)`. Used to merge several planes
/// into one before contouring, so positive and negative peaks both survive.
///
/// A length mismatch is a silent no-op: auxiliary planes of the wrong shape
/// are tolerated rather than rejected.
pub fn flatten(dst: &mut [f32], src: &[f32]) {
    if dst.len() != src.len() {
        tracing::debug!(
            dst_len = dst.len(),
            src_len = src.len(),
            "flatten skipped: plane shapes differ"
        );
        return;
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        let pos = d.max(0.0).max(s.max(0.0));
        let neg = d.min(0.0).min(s.min(0.0));
        *d = pos + neg;
    }
}
