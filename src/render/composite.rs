use crate::foundation::core::{Point, Rgba8Premul};
use crate::foundation::error::{SwitchlightError, SwitchlightResult};
use crate::foundation::math::mul_div255_u8;
use crate::scene::spotlight::OverlayBackground;

/// One premultiplied RGBA8 pixel, `[r, g, b, a]`.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8 with an extra opacity multiplier.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Composite `src` over `dst`; both are tightly packed premultiplied RGBA8.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> SwitchlightResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SwitchlightError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Set every pixel's alpha to 255. Premultiplied channels stay within the new alpha.
pub fn force_opaque(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        px[3] = 255;
    }
}

/// Paint the overlay over every pixel, sampling at pixel centers.
pub fn overlay_in_place(
    dst: &mut [u8],
    width: u32,
    height: u32,
    overlay: &OverlayBackground,
) -> SwitchlightResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if dst.len() != expected {
        return Err(SwitchlightError::render(format!(
            "overlay target holds {} bytes, expected {expected}",
            dst.len()
        )));
    }
    if let OverlayBackground::Solid(c) = overlay {
        let p = Rgba8Premul::from_premul_f32(c.to_premul_f32());
        let src = [p.r, p.g, p.b, p.a];
        for d in dst.chunks_exact_mut(4) {
            let out = over([d[0], d[1], d[2], d[3]], src, 1.0);
            d.copy_from_slice(&out);
        }
        return Ok(());
    }

    let row_len = width as usize * 4;
    for (y, row) in dst.chunks_exact_mut(row_len).enumerate() {
        let py = y as f64 + 0.5;
        for (x, d) in row.chunks_exact_mut(4).enumerate() {
            let p = Rgba8Premul::from_premul_f32(overlay.sample(Point::new(x as f64 + 0.5, py)));
            if p.a == 0 {
                continue;
            }
            let out = over([d[0], d[1], d[2], d[3]], [p.r, p.g, p.b, p.a], 1.0);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
