/// Mesh file format selection by extension
use std::path::Path;

use crate::error::LoadError;
use crate::geometry::Mesh;
use crate::{obj, wrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
    Wrl,
}

impl MeshFormat {
    /// `.wrl` selects VRML; anything else is read as OBJ
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("wrl") => MeshFormat::Wrl,
            _ => MeshFormat::Obj,
        }
    }

    pub fn parse(self, text: &str) -> Result<Mesh, LoadError> {
        match self {
            MeshFormat::Obj => Ok(obj::parse_obj(text)?),
            MeshFormat::Wrl => Ok(wrl::parse_wrl(text)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ObjError, WrlError};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(MeshFormat::from_path(Path::new("ball.WRL")), MeshFormat::Wrl);
        assert_eq!(MeshFormat::from_path(Path::new("house.obj")), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_path(Path::new("house")), MeshFormat::Obj);
    }

    #[test]
    fn test_parse_dispatches() {
        let vrml = "point [ 0 0 0, 1 0 0, 0 1 0 ] coordIndex [ 0 1 2 -1 ]";
        assert_eq!(MeshFormat::Wrl.parse(vrml).unwrap().polylines.len(), 1);
        assert_eq!(
            MeshFormat::Obj.parse(vrml),
            Err(LoadError::Obj(ObjError::Empty))
        );
        assert_eq!(
            MeshFormat::Wrl.parse("v 0 0 0\nf 1 1 1\n"),
            Err(LoadError::Wrl(WrlError::Empty))
        );
    }
}
