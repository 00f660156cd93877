// Gamma-correct "paint over" for translucent shapes (backdrop dim, confetti, close button).
// Table lookups replace powf so blending a whole 400x800 backdrop stays cheap.

pub struct GammaLut {
    // sRGB byte -> linear light in 0..1
    to_linear: [f32; 256],
    // linear light quantized to 4096 steps -> sRGB byte
    to_srgb: [u8; 4096],
}

impl GammaLut {
    /// Build both tables once; the app keeps a single instance.
    pub fn new() -> Self {
        let mut to_linear = [0.0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut to_srgb = [0u8; 4096];
        for (i, slot) in to_srgb.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { to_linear, to_srgb }
    }

    #[inline]
    fn channel(&self, dst: u32, src: u32, shift: u32, alpha: f32) -> u32 {
        let d = self.to_linear[((dst >> shift) & 0xFF) as usize];
        let s = self.to_linear[((src >> shift) & 0xFF) as usize];
        let l = d + (s - d) * alpha;
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        (self.to_srgb[idx] as u32) << shift
    }

    /// Paint `src` over `dst` with coverage `alpha` (0 = keep dst, 1 = src).
    /// Both colors are 0x00RRGGBB.
    pub fn mix(&self, dst: u32, src: u32, alpha: f32) -> u32 {
        if alpha <= 0.0 {
            return dst;
        }
        if alpha >= 1.0 {
            return src & 0x00FF_FFFF;
        }
        self.channel(dst, src, 16, alpha) | self.channel(dst, src, 8, alpha) | self.channel(dst, src, 0, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_are_exact() {
        let lut = GammaLut::new();
        assert_eq!(lut.mix(0x123456, 0xABCDEF, 0.0), 0x123456);
        assert_eq!(lut.mix(0x123456, 0xABCDEF, 1.0), 0xABCDEF);
    }

    #[test]
    fn dimming_white_with_black_darkens_every_channel() {
        let lut = GammaLut::new();
        let out = lut.mix(0xFFFFFF, 0x000000, 0.6);
        for shift in [16, 8, 0] {
            let c = (out >> shift) & 0xFF;
            assert!(c > 0 && c < 0xFF, "channel {shift} = {c}");
        }
        // 40% linear light left over is well above 40% in sRGB
        assert!(((out >> 16) & 0xFF) > 102);
    }

    #[test]
    fn mixing_a_color_with_itself_is_stable() {
        let lut = GammaLut::new();
        assert_eq!(lut.mix(0x4285F4, 0x4285F4, 0.37), 0x4285F4);
    }
}
