//! Hand-composed pictures
//!
//! These are tuned by eye for the showcase sizes (5, and 10 for the heart).
//! Other sizes keep the same structure but are not guaranteed to look good.

use super::{cells, spaces, stars, Pattern};
use crate::canvas::join_lines;
use crate::errors::{diameter, ensure_fits, ensure_positive, Result};

/// Ganesh: head, ears, trunk, belly and legs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ganesh {
    size: usize,
}

impl Ganesh {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2).saturating_add(20),
                14,
            )?,
        })
    }
}

impl Pattern for Ganesh {
    fn name(&self) -> &'static str {
        "ganesh"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let pad = |extra: usize| spaces(n + extra);
        let leg = format!("*{}*       *{}*", spaces(n - 1), spaces(n - 1));

        join_lines([
            // head
            format!("{}****", pad(3)),
            format!("{}******", pad(2)),
            format!("{}*    *", pad(2)),
            // ears
            format!("**{}*    *{}**", pad(1), pad(1)),
            format!("*{}*{}*", pad(3), pad(3)),
            // trunk
            format!("{}****", pad(3)),
            format!("{}*  *", pad(3)),
            format!("{}* *", pad(3)),
            format!("{}**", pad(3)),
            // belly
            format!("{}*******", pad(1)),
            format!("{}*       *", pad(0)),
            format!("{}*********", pad(0)),
            // legs
            leg.clone(),
            leg,
        ])
    }
}

/// Diamond outline body with a fanned tail hanging below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fish {
    size: usize,
}

impl Fish {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                diameter(size),
                size.saturating_mul(3).saturating_add(1),
            )?,
        })
    }
}

impl Pattern for Fish {
    fn name(&self) -> &'static str {
        "fish"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let tip = format!("{}*", spaces(n));
        let flank = |i: usize| format!("{}*{}*", spaces(n - i), spaces(2 * i - 1));

        let mut rows = Vec::with_capacity(3 * n + 1);
        rows.push(tip.clone());
        rows.extend((1..n).map(flank));
        rows.push(format!("*{}*", spaces(2 * n - 1)));
        rows.extend((1..n).rev().map(flank));
        rows.push(tip);
        rows.extend((0..n).map(|i| format!("{}*{}*", spaces(n - 1), spaces(i))));
        join_lines(rows)
    }
}

/// Two rounded lobes over a wedge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heart {
    size: usize,
}

impl Heart {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2),
                size.saturating_mul(2),
            )?,
        })
    }

    /// Lobe rows for `i = n/2, n/2 + 2, ..` up to `n`
    ///
    /// For odd `n` the run `i` is fractional and every repeat count is
    /// truncated, so the loop walks `2i` in steps of 4 to stay exact.
    fn lobes(&self) -> Vec<String> {
        let n = self.size;
        (n..=2 * n)
            .step_by(4)
            .map(|twice_i| {
                let gap = spaces((2 * n - twice_i) / 2);
                let lobe = stars(twice_i / 2);
                format!("{gap}{lobe}{gap}{lobe}")
            })
            .collect()
    }
}

impl Pattern for Heart {
    fn name(&self) -> &'static str {
        "heart"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let wedge = (1..=n).rev().map(|i| spaces(n - i) + &stars(2 * i));
        join_lines(self.lobes().into_iter().chain(wedge))
    }
}

/// Rhombus sail trailing a `*o-` tail three times its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kite {
    size: usize,
}

/// Characters the tail cycles through
const KITE_TAIL: [char; 3] = ['*', 'o', '-'];

impl Kite {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2),
                size.saturating_mul(5),
            )?,
        })
    }
}

impl Pattern for Kite {
    fn name(&self) -> &'static str {
        "kite"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let sail = (1..=n)
            .chain((1..n).rev())
            .map(|i| spaces(n - i) + &cells(i));
        let tail = (0..3 * n).map(|i| {
            let mut row = spaces(n - 1);
            row.push(KITE_TAIL[i % KITE_TAIL.len()]);
            row
        });
        join_lines(sail.chain(tail))
    }
}

/// Boxed network device: status LEDs and one port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterBox {
    size: usize,
}

impl RouterBox {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2).saturating_add(2),
                size.saturating_add(2),
            )?,
        })
    }
}

impl Pattern for RouterBox {
    fn name(&self) -> &'static str {
        "router box"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let inner = 2 * n;
        let border = format!("+{}+", "-".repeat(inner));

        let mut rows = Vec::with_capacity(n + 2);
        rows.push(border.clone());
        for i in 1..=n {
            let body = match i {
                1 => "o".repeat(n) + &spaces(n),
                2 => {
                    let port = format!("{}[=]", spaces(n / 2));
                    let rest = inner.saturating_sub(port.len());
                    port + &spaces(rest)
                }
                _ => spaces(inner),
            };
            rows.push(format!("|{body}|"));
        }
        rows.push(border);
        join_lines(rows)
    }
}
