//! Primitive mesh generators
//!
//! Pure functions from shape parameters to [`Mesh`] buffers. Identical
//! parameters always produce bit-identical buffers. Parameters that cannot
//! form a closed, non-degenerate solid are rejected up front with a
//! [`GeometryError`]; nothing is built before validation passes.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::GeometryError;
use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// Shape parameters for one catalog solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Flat rectangle in the XZ plane, facing +Y
    Plane { width: f32, depth: f32 },
    /// Axis-aligned box centered at the origin
    Cube { width: f32, height: f32, depth: f32 },
    /// N-gon column, base at y = 0, flat-shaded sides
    Prism { sides: u32, radius: f32, height: f32 },
    /// N-gon base at y = 0 with an apex, flat-shaded sides
    Pyramid { sides: u32, radius: f32, height: f32 },
    /// Circular column, base at y = 0
    Cylinder { segments: u32, radius: f32, height: f32 },
    /// Circular column with distinct top and bottom radii
    TaperedCylinder {
        segments: u32,
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
    },
    /// Latitude/longitude sphere centered at the origin
    Sphere { segments: u32, rings: u32, radius: f32 },
    /// Ring around the Y axis with a circular tube cross-section
    Torus {
        major_segments: u32,
        minor_segments: u32,
        major_radius: f32,
        minor_radius: f32,
    },
}

/// Generate the mesh for a primitive.
///
/// Called once per primitive at startup; the returned buffers go straight
/// to the renderer for device upload.
pub fn generate_mesh(primitive: &Primitive) -> Result<Mesh, GeometryError> {
    match *primitive {
        Primitive::Plane { width, depth } => Mesh::plane(width, depth),
        Primitive::Cube {
            width,
            height,
            depth,
        } => Mesh::cube(width, height, depth),
        Primitive::Prism {
            sides,
            radius,
            height,
        } => Mesh::prism(sides, radius, height),
        Primitive::Pyramid {
            sides,
            radius,
            height,
        } => Mesh::pyramid(sides, radius, height),
        Primitive::Cylinder {
            segments,
            radius,
            height,
        } => Mesh::cylinder(segments, radius, height),
        Primitive::TaperedCylinder {
            segments,
            bottom_radius,
            top_radius,
            height,
        } => Mesh::tapered_cylinder(segments, bottom_radius, top_radius, height),
        Primitive::Sphere {
            segments,
            rings,
            radius,
        } => Mesh::sphere(segments, rings, radius),
        Primitive::Torus {
            major_segments,
            minor_segments,
            major_radius,
            minor_radius,
        } => Mesh::torus(major_segments, minor_segments, major_radius, minor_radius),
    }
}

impl Mesh {
    /// Generate a flat rectangle in the XZ plane facing +Y.
    ///
    /// 4 corner vertices and 6 indices; UVs span the unit square.
    pub fn plane(width: f32, depth: f32) -> Result<Mesh, GeometryError> {
        require_positive("plane", "width", width)?;
        require_positive("plane", "depth", depth)?;

        let hx = width / 2.0;
        let hz = depth / 2.0;
        let up = [0.0, 1.0, 0.0];

        let vertices = vec![
            Vertex::new([-hx, 0.0, -hz], up, [0.0, 0.0]),
            Vertex::new([-hx, 0.0, hz], up, [0.0, 1.0]),
            Vertex::new([hx, 0.0, hz], up, [1.0, 1.0]),
            Vertex::new([hx, 0.0, -hz], up, [1.0, 0.0]),
        ];
        Ok(Mesh::indexed(vertices, vec![0, 1, 2, 0, 2, 3]))
    }

    /// Generate an axis-aligned box centered at the origin.
    ///
    /// Every face carries its own 4 vertices so it can hold a flat face
    /// normal; shared corners cannot represent that, so the mesh is a
    /// 36-vertex non-indexed list.
    pub fn cube(width: f32, height: f32, depth: f32) -> Result<Mesh, GeometryError> {
        require_positive("cube", "width", width)?;
        require_positive("cube", "height", height)?;
        require_positive("cube", "depth", depth)?;

        // (normal, tangent, bitangent) per face, chosen so that
        // tangent x bitangent = normal, which makes the corner walk below
        // counter-clockwise from outside.
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let half = Vec3::new(width, height, depth) / 2.0;
        let mut vertices = Vec::with_capacity(36);

        for (normal, tangent, bitangent) in FACES {
            let corner = |su: f32, sv: f32| {
                let dir = normal + tangent * su + bitangent * sv;
                Vertex::new(
                    (dir * half).to_array(),
                    normal.to_array(),
                    [su * 0.5 + 0.5, sv * 0.5 + 0.5],
                )
            };
            let quad = [
                corner(-1.0, -1.0),
                corner(1.0, -1.0),
                corner(1.0, 1.0),
                corner(-1.0, 1.0),
            ];
            for i in [0, 1, 2, 0, 2, 3] {
                vertices.push(quad[i]);
            }
        }
        Ok(Mesh::list(vertices))
    }

    /// Generate an N-gon prism with its base at y = 0.
    ///
    /// Caps are fans around a center vertex; each side quad carries its own
    /// flat normal, so the mesh is a non-indexed list.
    pub fn prism(sides: u32, radius: f32, height: f32) -> Result<Mesh, GeometryError> {
        require_subdivisions("prism", "sides", 3, sides)?;
        require_positive("prism", "radius", radius)?;
        require_positive("prism", "height", height)?;

        let step = TAU / sides as f32;
        let n = sides as usize;
        let mut vertices = Vec::with_capacity(n * 12);

        let bottom_center = Vertex::new([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]);
        for j in 0..n {
            vertices.push(bottom_center);
            vertices.push(cap_vertex(ring_dir(step, j), radius, 0.0, -1.0));
            vertices.push(cap_vertex(ring_dir(step, j + 1), radius, 0.0, -1.0));
        }

        let top_center = Vertex::new([0.0, height, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5]);
        for j in 0..n {
            vertices.push(top_center);
            vertices.push(cap_vertex(ring_dir(step, j + 1), radius, height, 1.0));
            vertices.push(cap_vertex(ring_dir(step, j), radius, height, 1.0));
        }

        for j in 0..n {
            let d0 = ring_dir(step, j);
            let d1 = ring_dir(step, j + 1);
            let normal = (d0 + d1).normalize().to_array();
            let u0 = j as f32 / sides as f32;
            let u1 = (j + 1) as f32 / sides as f32;

            let b0 = Vertex::new((d0 * radius).to_array(), normal, [u0, 0.0]);
            let b1 = Vertex::new((d1 * radius).to_array(), normal, [u1, 0.0]);
            let t0 = Vertex::new((d0 * radius + Vec3::Y * height).to_array(), normal, [u0, 1.0]);
            let t1 = Vertex::new((d1 * radius + Vec3::Y * height).to_array(), normal, [u1, 1.0]);
            vertices.extend([b0, t0, t1, b0, t1, b1]);
        }
        Ok(Mesh::list(vertices))
    }

    /// Generate an N-gon pyramid with its base at y = 0 and apex at
    /// y = height.
    pub fn pyramid(sides: u32, radius: f32, height: f32) -> Result<Mesh, GeometryError> {
        require_subdivisions("pyramid", "sides", 3, sides)?;
        require_positive("pyramid", "radius", radius)?;
        require_positive("pyramid", "height", height)?;

        let step = TAU / sides as f32;
        let n = sides as usize;
        let mut vertices = Vec::with_capacity(n * 6);

        let base_center = Vertex::new([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]);
        for j in 0..n {
            vertices.push(base_center);
            vertices.push(cap_vertex(ring_dir(step, j), radius, 0.0, -1.0));
            vertices.push(cap_vertex(ring_dir(step, j + 1), radius, 0.0, -1.0));
        }

        let apex = Vec3::Y * height;
        for j in 0..n {
            let p0 = ring_dir(step, j) * radius;
            let p1 = ring_dir(step, j + 1) * radius;
            let normal = (apex - p0).cross(p1 - p0).normalize().to_array();
            let u0 = j as f32 / sides as f32;
            let u1 = (j + 1) as f32 / sides as f32;

            vertices.push(Vertex::new(p0.to_array(), normal, [u0, 0.0]));
            vertices.push(Vertex::new(apex.to_array(), normal, [(u0 + u1) / 2.0, 1.0]));
            vertices.push(Vertex::new(p1.to_array(), normal, [u1, 0.0]));
        }
        Ok(Mesh::list(vertices))
    }

    /// Generate a cylinder with its base at y = 0.
    pub fn cylinder(segments: u32, radius: f32, height: f32) -> Result<Mesh, GeometryError> {
        require_positive("cylinder", "radius", radius)?;
        revolved("cylinder", segments, radius, radius, height)
    }

    /// Generate a cylinder whose top radius differs from its bottom radius.
    ///
    /// Side normals are tilted by the taper slope so the cone-like surface
    /// shades correctly.
    pub fn tapered_cylinder(
        segments: u32,
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
    ) -> Result<Mesh, GeometryError> {
        require_positive("tapered cylinder", "bottom radius", bottom_radius)?;
        require_positive("tapered cylinder", "top radius", top_radius)?;
        revolved("tapered cylinder", segments, bottom_radius, top_radius, height)
    }

    /// Generate a latitude/longitude sphere centered at the origin.
    ///
    /// Indexed: interior rings duplicate the seam vertex so U wraps from
    /// 1.0 back to 0.0; each pole is a single shared vertex.
    pub fn sphere(segments: u32, rings: u32, radius: f32) -> Result<Mesh, GeometryError> {
        require_subdivisions("sphere", "segments", 3, segments)?;
        require_subdivisions("sphere", "rings", 2, rings)?;
        require_positive("sphere", "radius", radius)?;

        let ring_stride = segments + 1;
        let mut vertices = Vec::with_capacity((1 + (rings - 1) * ring_stride + 1) as usize);

        vertices.push(Vertex::new([0.0, radius, 0.0], [0.0, 1.0, 0.0], [0.5, 0.0]));
        for i in 1..rings {
            let lat = std::f32::consts::PI * i as f32 / rings as f32;
            let y = lat.cos();
            let ring_radius = lat.sin();
            for j in 0..=segments {
                let lon = TAU * j as f32 / segments as f32;
                let dir = Vec3::new(ring_radius * lon.cos(), y, ring_radius * lon.sin());
                vertices.push(Vertex::new(
                    (dir * radius).to_array(),
                    dir.to_array(),
                    [j as f32 / segments as f32, i as f32 / rings as f32],
                ));
            }
        }
        vertices.push(Vertex::new(
            [0.0, -radius, 0.0],
            [0.0, -1.0, 0.0],
            [0.5, 1.0],
        ));
        let south = vertices.len() as u32 - 1;

        let ring_base = |i: u32| 1 + (i - 1) * ring_stride;
        let mut indices = Vec::new();

        for j in 0..segments {
            indices.extend([0, ring_base(1) + j + 1, ring_base(1) + j]);
        }
        for i in 1..rings - 1 {
            for j in 0..segments {
                let cur = ring_base(i) + j;
                let next = ring_base(i + 1) + j;
                indices.extend([cur, cur + 1, next]);
                indices.extend([cur + 1, next + 1, next]);
            }
        }
        let last = ring_base(rings - 1);
        for j in 0..segments {
            indices.extend([south, last + j, last + j + 1]);
        }
        Ok(Mesh::indexed(vertices, indices))
    }

    /// Generate a torus around the Y axis, centered at the origin.
    ///
    /// Indexed grid over the major (around the ring) and minor (around the
    /// tube) angles; both seams are duplicated for UV wraparound.
    pub fn torus(
        major_segments: u32,
        minor_segments: u32,
        major_radius: f32,
        minor_radius: f32,
    ) -> Result<Mesh, GeometryError> {
        require_subdivisions("torus", "major segments", 3, major_segments)?;
        require_subdivisions("torus", "minor segments", 3, minor_segments)?;
        require_positive("torus", "major radius", major_radius)?;
        require_positive("torus", "minor radius", minor_radius)?;

        let minor_stride = minor_segments + 1;
        let mut vertices =
            Vec::with_capacity(((major_segments + 1) * minor_stride) as usize);

        for i in 0..=major_segments {
            let theta = TAU * i as f32 / major_segments as f32;
            let (ring_x, ring_z) = (theta.cos(), theta.sin());
            for j in 0..=minor_segments {
                let phi = TAU * j as f32 / minor_segments as f32;
                let (tube_r, tube_y) = (phi.cos(), phi.sin());
                let position = Vec3::new(
                    (major_radius + minor_radius * tube_r) * ring_x,
                    minor_radius * tube_y,
                    (major_radius + minor_radius * tube_r) * ring_z,
                );
                let normal = Vec3::new(tube_r * ring_x, tube_y, tube_r * ring_z);
                vertices.push(Vertex::new(
                    position.to_array(),
                    normal.to_array(),
                    [
                        i as f32 / major_segments as f32,
                        j as f32 / minor_segments as f32,
                    ],
                ));
            }
        }

        let mut indices = Vec::new();
        for i in 0..major_segments {
            for j in 0..minor_segments {
                let cur = i * minor_stride + j;
                let next = cur + minor_stride;
                indices.extend([cur, cur + 1, next]);
                indices.extend([cur + 1, next + 1, next]);
            }
        }
        Ok(Mesh::indexed(vertices, indices))
    }
}

/// Shared body for cylinder and tapered cylinder.
///
/// Emits a single triangle strip: bottom cap as a zig-zag disk strip, the
/// side wall as an alternating bottom/top ring strip with the seam vertex
/// duplicated at 2π, then the top cap. Sections are bridged with repeated
/// vertices that form degenerate triangles, with a parity fix-up so winding
/// stays counter-clockwise from outside across the whole strip.
fn revolved(
    shape: &'static str,
    segments: u32,
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
) -> Result<Mesh, GeometryError> {
    require_subdivisions(shape, "segments", 3, segments)?;
    require_positive(shape, "height", height)?;

    let step = TAU / segments as f32;
    let n = segments as usize;
    let mut vertices = Vec::with_capacity(n * 4 + 8);

    // Bottom cap. The -Y face is seen from below, where increasing angle
    // runs counter-clockwise.
    let bottom_ring: Vec<Vertex> = (0..n)
        .map(|j| cap_vertex(ring_dir(step, j), bottom_radius, 0.0, -1.0))
        .collect();
    push_disk_strip(&mut vertices, &bottom_ring);

    // Side wall, bottom/top pairs. The taper slope tilts the normal off
    // the radial direction.
    let slope = (bottom_radius - top_radius) / height;
    let side_first = {
        let d = ring_dir(step, 0);
        Vertex::new(
            (d * bottom_radius).to_array(),
            (d + Vec3::Y * slope).normalize().to_array(),
            [0.0, 0.0],
        )
    };
    bridge(&mut vertices, side_first);
    for j in 0..=n {
        let d = ring_dir(step, j);
        let normal = (d + Vec3::Y * slope).normalize().to_array();
        let u = j as f32 / segments as f32;
        vertices.push(Vertex::new((d * bottom_radius).to_array(), normal, [u, 0.0]));
        vertices.push(Vertex::new(
            (d * top_radius + Vec3::Y * height).to_array(),
            normal,
            [u, 1.0],
        ));
    }

    // Top cap, ring reversed so it is counter-clockwise seen from above.
    let mut top_ring: Vec<Vertex> = (0..n)
        .map(|j| cap_vertex(ring_dir(step, j), top_radius, height, 1.0))
        .collect();
    top_ring.reverse();
    bridge(&mut vertices, top_ring[0]);
    push_disk_strip(&mut vertices, &top_ring);

    Ok(Mesh::strip(vertices))
}

/// Unit radial direction for angular step `j`.
fn ring_dir(step: f32, j: usize) -> Vec3 {
    let angle = step * j as f32;
    Vec3::new(angle.cos(), 0.0, angle.sin())
}

/// Cap vertex at a ring position with an axial normal and radial UVs.
fn cap_vertex(dir: Vec3, radius: f32, y: f32, normal_y: f32) -> Vertex {
    Vertex::new(
        [dir.x * radius, y, dir.z * radius],
        [0.0, normal_y, 0.0],
        [dir.x * 0.5 + 0.5, dir.z * 0.5 + 0.5],
    )
}

/// Emit a convex polygon as a zig-zag triangle strip.
///
/// `ring` must be in counter-clockwise order seen from the polygon's
/// outward-facing side, and the strip section must start on even triangle
/// parity (which [`bridge`] guarantees).
fn push_disk_strip(out: &mut Vec<Vertex>, ring: &[Vertex]) {
    let m = ring.len();
    out.push(ring[0]);
    let (mut lo, mut hi) = (1, m - 1);
    let mut take_lo = true;
    while lo <= hi {
        if take_lo {
            out.push(ring[lo]);
            lo += 1;
        } else {
            out.push(ring[hi]);
            hi -= 1;
        }
        take_lo = !take_lo;
    }
}

/// Stitch two strip sections together with degenerate triangles.
///
/// Repeats the previous section's last vertex and the next section's first
/// vertex; an extra repeat keeps the next section on even triangle parity.
/// The caller pushes `first` again as part of the next section.
fn bridge(out: &mut Vec<Vertex>, first: Vertex) {
    let Some(&last) = out.last() else {
        return;
    };
    out.push(last);
    if out.len() % 2 == 0 {
        out.push(last);
    }
    out.push(first);
}

fn require_subdivisions(
    shape: &'static str,
    what: &'static str,
    min: u32,
    got: u32,
) -> Result<(), GeometryError> {
    if got < min {
        return Err(GeometryError::TooFewSubdivisions {
            shape,
            what,
            min,
            got,
        });
    }
    Ok(())
}

fn require_positive(
    shape: &'static str,
    what: &'static str,
    value: f32,
) -> Result<(), GeometryError> {
    if value <= 0.0 || value.is_nan() {
        return Err(GeometryError::NonPositiveDimension {
            shape,
            what,
            got: value,
        });
    }
    Ok(())
}
