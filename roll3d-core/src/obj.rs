/// Wavefront OBJ loader producing face outlines
use log::info;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{char, i64 as index, space0, space1},
    combinator::{opt, verify},
    multi::many1,
    number::complete::double,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::ObjError;
use crate::geometry::{Mesh, Polyline};
use crate::matrix::HomogeneousPoint;

/// Parse OBJ text into a mesh with one closed polyline per face.
///
/// Only `v` and `f` statements are read; normals, texture coordinates,
/// groups and materials are ignored.
pub fn parse_obj(input: &str) -> Result<Mesh, ObjError> {
    let mut vertices: Vec<HomogeneousPoint> = Vec::new();
    let mut mesh = Mesh::new();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let content = raw.split('#').next().unwrap_or("").trim();

        match content.split_whitespace().next() {
            Some("v") => {
                let (x, y, z) = finish(line, parse_vertex(content))?;
                vertices.push(HomogeneousPoint::from_euclidean(x, y, z));
            }
            Some("f") => {
                let indices = finish(line, parse_face(content))?;
                let points = indices
                    .into_iter()
                    .map(|i| resolve(line, i, &vertices))
                    .collect::<Result<Vec<_>, _>>()?;
                mesh.add_polyline(Polyline::closed(points));
            }
            _ => {}
        }
    }

    if mesh.polylines.is_empty() {
        return Err(ObjError::Empty);
    }
    info!(
        "loaded OBJ: {} vertices, {} faces",
        vertices.len(),
        mesh.polylines.len()
    );
    Ok(mesh)
}

fn finish<T>(line: usize, result: IResult<&str, T>) -> Result<T, ObjError> {
    match result {
        Ok((rest, value)) if rest.trim().is_empty() => Ok(value),
        Ok((rest, _)) => Err(ObjError::Parse {
            line,
            message: format!("unexpected trailing input {:?}", rest.trim()),
        }),
        Err(e) => Err(ObjError::Parse {
            line,
            message: format!("{:?}", e),
        }),
    }
}

fn resolve(
    line: usize,
    i: i64,
    vertices: &[HomogeneousPoint],
) -> Result<HomogeneousPoint, ObjError> {
    let count = vertices.len() as i64;
    let position = match i {
        i if i > 0 => i - 1,
        i if i < 0 => count + i,
        _ => -1,
    };
    if (0..count).contains(&position) {
        Ok(vertices[position as usize])
    } else {
        Err(ObjError::FaceIndexOutOfRange {
            line,
            index: i,
            vertex_count: vertices.len(),
        })
    }
}

fn parse_vertex(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, coordinate)(input)?;
    let (input, y) = preceded(space1, coordinate)(input)?;
    let (input, z) = preceded(space1, coordinate)(input)?;
    // optional weight, not used for wireframes
    let (input, _) = opt(preceded(space1, double))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (x, y, z)))
}

/// A finite number; `nan` and `inf` are rejected
pub(crate) fn coordinate(input: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(input)
}

fn parse_face(input: &str) -> IResult<&str, Vec<i64>> {
    let (input, _) = tag("f")(input)?;
    let (input, indices) = many1(preceded(space1, face_vertex))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, indices))
}

/// `a`, `a/b`, `a//c` or `a/b/c`; only the position index is kept
fn face_vertex(input: &str) -> IResult<&str, i64> {
    terminated(
        index,
        opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "\
# unit square
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0 1.0
vn 0 0 1
f 1 2 3 4
";

    #[test]
    fn test_parse_square() {
        let mesh = parse_obj(SQUARE).unwrap();
        assert_eq!(mesh.polylines.len(), 1);
        let outline = &mesh.polylines[0].points;
        assert_eq!(outline.len(), 5);
        assert_eq!(outline[0], outline[4]);
        assert_eq!(outline[2], HomogeneousPoint::from_euclidean(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_slash_and_negative_indices() {
        let text = "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1/1/1 2//2 -1/3\n";
        let mesh = parse_obj(text).unwrap();
        let outline = &mesh.polylines[0].points;
        assert_eq!(outline[1], HomogeneousPoint::from_euclidean(2.0, 0.0, 0.0));
        assert_eq!(outline[2], HomogeneousPoint::from_euclidean(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_index_out_of_range() {
        let text = "v 0 0 0\nv 1 0 0\nf 1 2 3\n";
        assert_eq!(
            parse_obj(text),
            Err(ObjError::FaceIndexOutOfRange {
                line: 3,
                index: 3,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_zero_index_rejected() {
        let text = "v 0 0 0\nf 0 1 1\n";
        assert!(matches!(
            parse_obj(text),
            Err(ObjError::FaceIndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_vertex() {
        let text = "v 0 zero 0\nf 1 1 1\n";
        assert!(matches!(parse_obj(text), Err(ObjError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let text = "v 1 0 0\nv nan 0 0\nv 0 inf 0\nf 1 2 3\n";
        assert!(matches!(parse_obj(text), Err(ObjError::Parse { line: 2, .. })));
        assert!(matches!(
            parse_obj("v 0 -inf 0\nf 1 1 1\n"),
            Err(ObjError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_no_faces() {
        assert_eq!(parse_obj("v 1 2 3\n"), Err(ObjError::Empty));
    }
}
