/// Axis with fixed limits, tick generation, and data→pixel mapping.
///
/// Limits are taken as given (the stacked plot pins the x-range to the bin
/// edges); ticks are generated inside them at "nice" positions.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub log: bool,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Linear axis over `[min, max]` with nice-step ticks inside the range.
    pub fn linear(min: f64, max: f64, target_ticks: usize) -> Self {
        let range = max - min;
        if !(range > 0.0 && range.is_finite()) {
            return Self::bare(min, max, false);
        }
        let step = nice_step(range / (target_ticks.max(2) - 1) as f64);
        let eps = step * 1e-9;

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let mut v = (min / step).ceil() * step;
        while v <= max + eps {
            ticks.push(v);
            labels.push(format_tick(v, step));
            v += step;
        }

        // Minor ticks: 5 subdivisions per major.
        let minor_step = step / 5.0;
        let mut minor = Vec::new();
        let mut mv = (min / minor_step).ceil() * minor_step;
        while mv <= max + eps {
            if !ticks.iter().any(|t| (t - mv).abs() < minor_step * 0.01) {
                minor.push(mv);
            }
            mv += minor_step;
        }

        Self {
            min,
            max,
            log: false,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
            minor_ticks: minor,
        }
    }

    /// Logarithmic axis over `[min, max]` with decade ticks.
    ///
    /// A non-positive lower limit is clamped to four decades below the upper.
    pub fn log(min: f64, max: f64) -> Self {
        let hi = if max > 0.0 { max } else { 1.0 };
        let lo = if min > 0.0 { min } else { hi * 1e-4 };

        let exp_lo = (lo.log10() - 1e-9).ceil() as i32;
        let exp_hi = (hi.log10() + 1e-9).floor() as i32;

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        for exp in exp_lo..=exp_hi {
            let v = 10.0_f64.powi(exp);
            ticks.push(v);
            labels.push(format!("10{}", superscript(exp)));
        }

        // Minor ticks at mantissas 2..9 of each covered decade.
        let mut minor = Vec::new();
        for exp in (exp_lo - 1)..=exp_hi {
            for m in 2..=9 {
                let mv = m as f64 * 10.0_f64.powi(exp);
                if mv >= lo && mv <= hi {
                    minor.push(mv);
                }
            }
        }

        Self {
            min: lo,
            max: hi,
            log: true,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
            minor_ticks: minor,
        }
    }

    fn bare(min: f64, max: f64, log: bool) -> Self {
        Self {
            min,
            max,
            log,
            label: String::new(),
            tick_positions: Vec::new(),
            tick_labels: Vec::new(),
            minor_ticks: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        if self.log {
            let log_val = value.max(1e-300).ln();
            let log_min = self.min.max(1e-300).ln();
            let log_max = self.max.max(1e-300).ln();
            let frac = (log_val - log_min) / (log_max - log_min);
            px_min + frac * (px_max - px_min)
        } else {
            let frac = (value - self.min) / (self.max - self.min);
            px_min + frac * (px_max - px_min)
        }
    }
}

/// Round a rough step to 1/2/5 times a power of ten.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        // Avoid "-0"
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207B}',
            '0' => '\u{2070}',
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            '9' => '\u{2079}',
            _ => c,
        })
        .collect()
}
