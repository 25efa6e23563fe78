//! # Primitive Shape Generation
//!
//! All shapes are centered on the origin with outward normals and
//! counter-clockwise winding.

use cgmath::{InnerSpace, Matrix3, Rad, Vector3};
use std::f32::consts::PI;

use super::{Curve, GeometryData};

/// Generate a box with `width_segments`×`height_segments`×`depth_segments` subdivisions
///
/// Each face is its own vertex grid so face normals stay sharp.
pub fn generate_box(
    width: f32,
    height: f32,
    depth: f32,
    width_segments: u32,
    height_segments: u32,
    depth_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let ws = width_segments.max(1);
    let hs = height_segments.max(1);
    let ds = depth_segments.max(1);

    let x = Vector3::unit_x();
    let y = Vector3::unit_y();
    let z = Vector3::unit_z();

    // (normal, u, v, extent along normal, u size, v size, u segments, v segments); u × v = normal
    let faces = [
        (x, -z, y, width, depth, height, ds, hs),
        (-x, z, y, width, depth, height, ds, hs),
        (y, x, -z, height, width, depth, ws, ds),
        (-y, x, z, height, width, depth, ws, ds),
        (z, x, y, depth, width, height, ws, hs),
        (-z, -x, y, depth, width, height, ws, hs),
    ];

    for (normal, u, v, extent, u_size, v_size, u_segs, v_segs) in faces {
        build_face(&mut data, normal, u, v, extent, u_size, v_size, u_segs, v_segs);
    }

    data
}

#[allow(clippy::too_many_arguments)]
fn build_face(
    data: &mut GeometryData,
    normal: Vector3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
    extent: f32,
    u_size: f32,
    v_size: f32,
    u_segs: u32,
    v_segs: u32,
) {
    let first = data.vertex_count() as u32;
    let center = normal * (extent * 0.5);

    for iv in 0..=v_segs {
        let fv = iv as f32 / v_segs as f32 - 0.5;
        for iu in 0..=u_segs {
            let fu = iu as f32 / u_segs as f32 - 0.5;
            let position = center + u * (fu * u_size) + v * (fv * v_size);
            data.push_vertex(position.into(), normal.into());
        }
    }

    let row = u_segs + 1;
    for iv in 0..v_segs {
        for iu in 0..u_segs {
            let a = first + iv * row + iu;
            let b = a + 1;
            let c = b + row;
            let d = a + row;
            data.push_triangle(a, b, c);
            data.push_triangle(a, c, d);
        }
    }
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Number of vertical segments (longitude lines)
/// * `height_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let ws = width_segments.max(3);
    let hs = height_segments.max(2);

    for iy in 0..=hs {
        let theta = iy as f32 / hs as f32 * PI;
        for ix in 0..=ws {
            let phi = ix as f32 / ws as f32 * 2.0 * PI;
            let normal = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            data.push_vertex(normal.map(|c| c * radius), normal);
        }
    }

    // The pole rows collapse to a point, so only one triangle per quad is kept there
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                data.push_triangle(a, b, d);
            }
            if iy != hs - 1 {
                data.push_triangle(b, c, d);
            }
        }
    }

    data
}

/// Generate a capped cylinder along the Y axis
///
/// A zero radius at either end collapses it to a point with no cap, so the
/// same function builds cones and prisms (3 radial segments).
pub fn generate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = radial_segments.max(3);
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    let angle = |i: u32| i as f32 / segs as f32 * 2.0 * PI;

    // Side: a top ring followed by a bottom ring
    for (radius, y) in [(radius_top, half_height), (radius_bottom, -half_height)] {
        for i in 0..=segs {
            let (sin, cos) = angle(i).sin_cos();
            let normal = Vector3::new(sin, slope, cos).normalize();
            data.push_vertex([radius * sin, y, radius * cos], normal.into());
        }
    }

    let row = segs + 1;
    for i in 0..segs {
        let a = i;
        let b = i + row;
        let c = b + 1;
        let d = a + 1;
        if radius_top > 0.0 {
            data.push_triangle(a, b, d);
        }
        if radius_bottom > 0.0 {
            data.push_triangle(b, c, d);
        }
    }

    if radius_top > 0.0 {
        build_cap(&mut data, radius_top, half_height, segs, true);
    }
    if radius_bottom > 0.0 {
        build_cap(&mut data, radius_bottom, -half_height, segs, false);
    }

    data
}

fn build_cap(data: &mut GeometryData, radius: f32, y: f32, segs: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = [0.0, sign, 0.0];

    let center = data.push_vertex([0.0, y, 0.0], normal);
    for i in 0..=segs {
        let (sin, cos) = (i as f32 / segs as f32 * 2.0 * PI).sin_cos();
        data.push_vertex([radius * sin, y, radius * cos], normal);
    }

    for i in 0..segs {
        let current = center + 1 + i;
        let next = current + 1;
        if top {
            data.push_triangle(center, current, next);
        } else {
            data.push_triangle(center, next, current);
        }
    }
}

/// Generate a cone along the Y axis, apex up
pub fn generate_cone(radius: f32, height: f32, radial_segments: u32) -> GeometryData {
    generate_cylinder(0.0, radius, height, radial_segments)
}

/// Generate a torus lying in the XY plane
///
/// # Arguments
/// * `radius` - Distance from the torus center to the tube center
/// * `tube` - Tube radius
/// * `radial_segments` - Segments around the tube cross-section
/// * `tubular_segments` - Segments around the ring
pub fn generate_torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);

    for j in 0..=rs {
        let v = j as f32 / rs as f32 * 2.0 * PI;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * 2.0 * PI;
            let ring = radius + tube * v.cos();
            let position = Vector3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vector3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize();
            data.push_vertex(position.into(), normal.into());
        }
    }

    let row = ts + 1;
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            data.push_triangle(a, b, d);
            data.push_triangle(b, c, d);
        }
    }

    data
}

/// Generate an open tube of constant `radius` swept along `curve`
///
/// Cross-sections are oriented with parallel-transported frames, so the tube
/// does not twist where the curve's curvature changes sign.
pub fn generate_tube(
    curve: &impl Curve,
    tubular_segments: u32,
    radius: f32,
    radial_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let ts = tubular_segments.max(1);
    let rs = radial_segments.max(3);

    let frames = transport_frames(curve, ts);

    for (i, (normal, binormal)) in frames.iter().enumerate() {
        let center = curve.point(i as f32 / ts as f32);
        for j in 0..=rs {
            let (sin, cos) = (j as f32 / rs as f32 * 2.0 * PI).sin_cos();
            let offset = (*normal * -cos + *binormal * sin).normalize();
            data.push_vertex((center + offset * radius).into(), offset.into());
        }
    }

    let row = rs + 1;
    for j in 1..=ts {
        for i in 1..=rs {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            data.push_triangle(a, b, d);
            data.push_triangle(b, c, d);
        }
    }

    data
}

/// Normal and binormal at each of the `segments + 1` samples of `curve`
fn transport_frames(curve: &impl Curve, segments: u32) -> Vec<(Vector3<f32>, Vector3<f32>)> {
    let tangents: Vec<Vector3<f32>> = (0..=segments)
        .map(|i| curve.tangent(i as f32 / segments as f32))
        .collect();

    // Seed the first normal from the axis least aligned with the tangent
    let first = tangents[0];
    let (ax, ay, az) = (first.x.abs(), first.y.abs(), first.z.abs());
    let axis = if ax <= ay && ax <= az {
        Vector3::unit_x()
    } else if ay <= az {
        Vector3::unit_y()
    } else {
        Vector3::unit_z()
    };
    let side = first.cross(axis).normalize();
    let mut normal = first.cross(side);

    let mut frames = Vec::with_capacity(tangents.len());
    frames.push((normal, first.cross(normal)));

    for pair in tangents.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let bend = previous.cross(current);
        if bend.magnitude() > f32::EPSILON {
            let theta = previous.dot(current).clamp(-1.0, 1.0).acos();
            normal = Matrix3::from_axis_angle(bend.normalize(), Rad(theta)) * normal;
        }
        frames.push((normal, current.cross(normal)));
    }

    frames
}

/// Generate a regular octahedron with vertices on the axes
pub fn generate_octahedron(radius: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let corners: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    for corner in corners {
        data.push_vertex(corner.map(|c| c * radius), corner);
    }

    data.indices = vec![
        0, 2, 4, 0, 4, 3, 0, 3, 5, 0, 5, 2, //
        1, 2, 5, 1, 5, 3, 1, 3, 4, 1, 4, 2,
    ];

    data
}
