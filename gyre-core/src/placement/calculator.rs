//! Closed-form card placement.
//!
//! `card_transform` is a total function: any real scroll offset (negative,
//! fractional, astronomically large) and any card index produce a finite
//! transform. Divisions guard their denominators and every external float
//! passes through `safe_f32` first.

use gyre_config::constants::placement::{MIN_DENOM, PARALLAX_FACTOR};
use gyre_model::{CardTransform, GridParams, PlacementMode};

use crate::math::safe_f32;

/// Compute the 3D transform and opacity for one card.
///
/// `scroll_offset` is in turns: 1.0 winds the rotational modes through
/// one full revolution (scaled by the mode's `turns` and `angle_factor`).
pub fn card_transform(
    index: usize,
    total: usize,
    scroll_offset: f32,
    mode: &PlacementMode,
) -> CardTransform {
    let scroll = safe_f32(scroll_offset);
    match mode {
        PlacementMode::Helix(p) => rotational(
            index,
            total,
            scroll,
            RotationalParams {
                radius: p.radius,
                vertical_span: p.vertical_span,
                turns: p.turns,
                spacing: p.spacing,
                angle_factor: p.angle_factor,
            },
        ),
        PlacementMode::Cylinder(p) => rotational(
            index,
            total,
            scroll,
            RotationalParams {
                radius: p.radius,
                // Pure rotation: a helix with no vertical movement.
                vertical_span: 0.0,
                turns: p.turns,
                spacing: 1.0,
                angle_factor: p.angle_factor,
            },
        ),
        PlacementMode::Spiral(p) => rotational(
            index,
            total,
            scroll,
            RotationalParams {
                radius: safe_f32(p.base_radius)
                    + index as f32 * safe_f32(p.radius_growth),
                vertical_span: p.vertical_span,
                turns: p.turns,
                spacing: p.spacing,
                angle_factor: p.angle_factor,
            },
        ),
        PlacementMode::Wave(p) => rotational(
            index,
            total,
            scroll,
            RotationalParams {
                radius: safe_f32(p.base_radius)
                    + (index as f32 * safe_f32(p.wave_frequency)).sin()
                        * safe_f32(p.wave_amplitude),
                vertical_span: p.vertical_span,
                turns: p.turns,
                spacing: p.spacing,
                angle_factor: p.angle_factor,
            },
        ),
        PlacementMode::Grid(p) => grid(index, scroll, p),
    }
}

/// Opacity for a rotational card by its normalized Y rotation.
///
/// A fixed three-tier step function: front arc fully opaque, back arc
/// heavily faded, side arcs in between. The discontinuity at the arc
/// boundaries is intentional; do not replace with a continuous falloff.
pub fn arc_opacity(rotate_y_deg: f32) -> f32 {
    let a = safe_f32(rotate_y_deg).rem_euclid(360.0);
    if a < 45.0 || a > 315.0 {
        1.0
    } else if (135.0..=225.0).contains(&a) {
        0.3
    } else {
        0.7
    }
}

struct RotationalParams {
    /// Per-index radius already resolved to a number.
    radius: f32,
    vertical_span: f32,
    turns: f32,
    spacing: f32,
    angle_factor: f32,
}

fn rotational(
    index: usize,
    total: usize,
    scroll: f32,
    p: RotationalParams,
) -> CardTransform {
    let radius = safe_f32(p.radius);
    let vertical_span = safe_f32(p.vertical_span);
    let turns = safe_f32(p.turns);
    let spacing = safe_f32(p.spacing);
    let angle_factor = safe_f32(p.angle_factor);

    let total_f = total.max(1) as f32;

    // Angular position: `index / (total / turns) * 360 * angle_factor`,
    // minus the scene rotation driven by the scroll offset. One turn of
    // scroll (offset 1.0) rotates the scene by a full revolution scaled
    // by the same factors, so the layout is periodic in the offset.
    let per_card =
        (index as f32 / (total_f / turns.max(1e-6))) * 360.0 * angle_factor;
    let rotation = scroll * 360.0 * angle_factor * turns;
    let theta = safe_f32(per_card - rotation);

    let rad = theta.to_radians();
    let translate_x = safe_f32(rad.sin() * radius);
    let translate_z = safe_f32(rad.cos() * radius);

    // Vertical: linear spread across the sequence, centered, with a small
    // scroll-proportional parallax term.
    let span_total = vertical_span * turns * spacing;
    let t = index as f32 / (total_f - 1.0).max(MIN_DENOM);
    let y = safe_f32(
        t * span_total - span_total * 0.5
            + scroll * vertical_span * PARALLAX_FACTOR,
    );

    let rotate_y = theta.rem_euclid(360.0);
    CardTransform {
        translate_x,
        translate_y: y,
        translate_z,
        rotate_y,
        y,
        opacity: arc_opacity(rotate_y),
    }
}

fn grid(index: usize, scroll: f32, p: &GridParams) -> CardTransform {
    let columns = p.columns.max(1);
    let row = (index / columns) as f32;
    let col = (index % columns) as f32;
    let center = (columns - 1) as f32 / 2.0;
    let dx = col - center;

    let translate_x = safe_f32(dx * safe_f32(p.column_spacing));
    // One turn of scroll slides the grid by one row.
    let y = safe_f32(row * safe_f32(p.row_spacing) - scroll * safe_f32(p.row_spacing));
    let translate_z = safe_f32(-dx.abs() * safe_f32(p.depth));

    CardTransform {
        translate_x,
        translate_y: y,
        translate_z,
        rotate_y: 0.0,
        y,
        opacity: 1.0,
    }
}
