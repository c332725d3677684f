use crate::enums::palette::*;

pub type Rgb = (u8, u8, u8);

#[doc = "Linear interpolation across evenly spaced colour stops, `t` clamped to [0, 1]"]
pub fn interpolate(stops: &[Rgb], t: f64) -> Rgb {
    match stops.len() {
        0 => (0, 0, 0),
        1 => stops[0],
        len => {
            let t: f64 = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
            let scaled: f64 = t * (len - 1) as f64;
            let lower: usize = (scaled.floor() as usize).min(len - 2);
            let frac: f64 = scaled - lower as f64;

            let (r0, g0, b0) = stops[lower];
            let (r1, g1, b1) = stops[lower + 1];

            let mix = |a: u8, b: u8| -> u8 {
                (a as f64 + (b as f64 - a as f64) * frac).round() as u8
            };

            (mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
    }
}

#[doc = "Colour of `palette` at position `t` in [0, 1]"]
pub fn colormap(palette: Palette, t: f64) -> Rgb {
    interpolate(palette.stops(), t)
}

#[doc = r#"
    `n` discrete colours from a continuous palette.

    Samples the interior points of an even grid (`(i + 1) / (n + 1)`),
    so the palette's extreme ends are never used.
"#]
pub fn sample_palette(palette: Palette, n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| colormap(palette, (i + 1) as f64 / (n + 1) as f64))
        .collect()
}
