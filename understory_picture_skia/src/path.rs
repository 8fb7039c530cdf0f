// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path command lists to Skia paths.

use alloc::vec::Vec;

use skia_safe as sk;
use understory_picture::{Path, PathCommand};

use crate::mapping;

/// Build a Skia path by applying every command in order.
///
/// The fill type is set before any geometry is added. An empty command list
/// yields an empty path.
pub fn to_sk_path(path: &Path) -> sk::Path {
    let mut sk_path = sk::Path::new();
    sk_path.set_fill_type(mapping::fill_type(path.fill_rule));
    for command in &path.commands {
        apply_command(&mut sk_path, command);
    }
    sk_path
}

fn apply_command(path: &mut sk::Path, command: &PathCommand) {
    match *command {
        PathCommand::MoveTo { x, y } => {
            path.move_to((x, y));
        }
        PathCommand::LineTo { x, y } => {
            path.line_to((x, y));
        }
        PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            size,
            sweep,
            x,
            y,
        } => {
            path.arc_to_rotated(
                (rx, ry),
                x_axis_rotation,
                mapping::arc_size(size),
                mapping::path_direction(sweep),
                (x, y),
            );
        }
        PathCommand::QuadTo { x0, y0, x1, y1 } => {
            path.quad_to((x0, y0), (x1, y1));
        }
        PathCommand::CubicTo {
            x0,
            y0,
            x1,
            y1,
            x2,
            y2,
        } => {
            path.cubic_to((x0, y0), (x1, y1), (x2, y2));
        }
        PathCommand::Close => {
            path.close();
        }
        PathCommand::AddRect(rect) => {
            path.add_rect(mapping::rect(rect), None);
        }
        PathCommand::AddRoundRect { rect, rx, ry } => {
            path.add_round_rect(mapping::rect(rect), (rx, ry), None);
        }
        PathCommand::AddOval(rect) => {
            path.add_oval(mapping::rect(rect), None);
        }
        PathCommand::AddCircle { x, y, radius } => {
            path.add_circle((x, y), radius, None);
        }
        PathCommand::AddPoly { ref points, close } => {
            let points: Vec<sk::Point> = points.iter().map(|p| mapping::point(*p)).collect();
            path.add_poly(&points, close);
        }
    }
}
