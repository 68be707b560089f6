/// VRML 2.0 loader reading IndexedFaceSet coordinates into face outlines
use log::info;
use nom::{
    bytes::complete::take_while,
    character::complete::{char, i64 as index, multispace0},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::WrlError;
use crate::geometry::{Mesh, Polyline};
use crate::matrix::HomogeneousPoint;
use crate::obj::coordinate;

/// Parse VRML text into a mesh with one closed polyline per face.
///
/// Only `point [...]` and `coordIndex [...]` fields are read. Each
/// `coordIndex` refers to the most recent `point` list; `-1` ends a face.
pub fn parse_wrl(input: &str) -> Result<Mesh, WrlError> {
    let text = strip_comments(input);
    let mut vertices: Vec<HomogeneousPoint> = Vec::new();
    let mut total = 0;
    let mut mesh = Mesh::new();
    let mut cursor = 0;

    while let Some((start, field)) = next_field(&text[cursor..]) {
        let at = cursor + start;
        let line = line_of(&text, at);
        let body = &text[at + field.len()..];

        let rest = match field {
            "point" => {
                let (rest, values) = finish(line, point_list(body))?;
                if values.len() % 3 != 0 {
                    return Err(WrlError::Parse {
                        line,
                        message: format!("{} coordinates do not form whole points", values.len()),
                    });
                }
                vertices = values
                    .chunks(3)
                    .map(|c| HomogeneousPoint::from_euclidean(c[0], c[1], c[2]))
                    .collect();
                total += vertices.len();
                rest
            }
            _ => {
                let (rest, indices) = finish(line, index_list(body))?;
                for face in indices.split(|&i| i == -1).filter(|f| !f.is_empty()) {
                    let points = face
                        .iter()
                        .map(|&i| resolve(line, i, &vertices))
                        .collect::<Result<Vec<_>, _>>()?;
                    mesh.add_polyline(Polyline::closed(points));
                }
                rest
            }
        };
        cursor = text.len() - rest.len();
    }

    if mesh.polylines.is_empty() {
        return Err(WrlError::Empty);
    }
    info!(
        "loaded VRML: {} points, {} faces",
        total,
        mesh.polylines.len()
    );
    Ok(mesh)
}

fn strip_comments(input: &str) -> String {
    input
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_of(text: &str, at: usize) -> usize {
    text[..at].matches('\n').count() + 1
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Earliest `point` or `coordIndex` field name standing as a whole word
fn next_field(s: &str) -> Option<(usize, &'static str)> {
    ["point", "coordIndex"]
        .into_iter()
        .filter_map(|field| find_word(s, field).map(|at| (at, field)))
        .min_by_key(|&(at, _)| at)
}

fn find_word(s: &str, word: &str) -> Option<usize> {
    s.match_indices(word).map(|(at, _)| at).find(|&at| {
        let before = s[..at].chars().next_back();
        let after = s[at + word.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

fn finish<'a, T>(line: usize, result: IResult<&'a str, T>) -> Result<(&'a str, T), WrlError> {
    result.map_err(|e| WrlError::Parse {
        line,
        message: format!("{:?}", e),
    })
}

fn resolve(
    line: usize,
    i: i64,
    vertices: &[HomogeneousPoint],
) -> Result<HomogeneousPoint, WrlError> {
    usize::try_from(i)
        .ok()
        .and_then(|position| vertices.get(position).copied())
        .ok_or(WrlError::IndexOutOfRange {
            line,
            index: i,
            vertex_count: vertices.len(),
        })
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ',')(input)
}

fn point_list(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        preceded(multispace0, char('[')),
        many0(preceded(separator, coordinate)),
        preceded(separator, char(']')),
    )(input)
}

fn index_list(input: &str) -> IResult<&str, Vec<i64>> {
    delimited(
        preceded(multispace0, char('[')),
        many0(preceded(separator, index)),
        preceded(separator, char(']')),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRA: &str = "\
#VRML V2.0 utf8
Viewpoint { position 0 0 10 }
Shape {
  geometry IndexedFaceSet {
    coord Coordinate {
      point [ 0 0 0, 1 0 0,
              0 1 0, 0 0 1 ]
    }
    coordIndex [ 0, 1, 2, -1, 0, 2, 3, -1 ]
  }
}
";

    #[test]
    fn test_parse_faces() {
        let mesh = parse_wrl(TETRA).unwrap();
        assert_eq!(mesh.polylines.len(), 2);
        let second = &mesh.polylines[1].points;
        assert_eq!(second.len(), 4);
        assert_eq!(second[0], second[3]);
        assert_eq!(second[2], HomogeneousPoint::from_euclidean(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_last_face_without_terminator() {
        let text = "point [ 0 0 0 1 0 0 0 1 0 ] coordIndex [ 2 1 0 ]";
        let mesh = parse_wrl(text).unwrap();
        assert_eq!(mesh.polylines.len(), 1);
        assert_eq!(
            mesh.polylines[0].points[0],
            HomogeneousPoint::from_euclidean(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_each_shape_uses_its_own_points() {
        let text = "\
point [ 0 0 0, 1 0 0, 0 1 0 ] coordIndex [ 0 1 2 -1 ]
point [ 5 5 5, 6 5 5, 5 6 5 ] coordIndex [ 0 1 2 -1 ]
";
        let mesh = parse_wrl(text).unwrap();
        assert_eq!(mesh.polylines.len(), 2);
        assert_eq!(
            mesh.polylines[1].points[0],
            HomogeneousPoint::from_euclidean(5.0, 5.0, 5.0)
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let text = "point [ 0 0 0, 1 0 0 ]\ncoordIndex [ 0, 1, 2, -1 ]";
        assert_eq!(
            parse_wrl(text),
            Err(WrlError::IndexOutOfRange {
                line: 2,
                index: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let text = "point [ 0 0 0, nan 1 0, 0 1 0 ]\ncoordIndex [ 0 1 2 ]";
        assert!(matches!(parse_wrl(text), Err(WrlError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_partial_point_rejected() {
        let text = "point [ 0 0 0, 1 0 ] coordIndex [ 0 ]";
        assert!(matches!(parse_wrl(text), Err(WrlError::Parse { .. })));
    }

    #[test]
    fn test_no_faces() {
        assert_eq!(parse_wrl("#VRML V2.0 utf8\npoint [ 1 2 3 ]\n"), Err(WrlError::Empty));
    }
}
