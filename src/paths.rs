use std::path::{Path, PathBuf};

/// Marker inserted before the size suffix of orange variants
pub const ORANGE_MARKER: &str = "-orange";

/// Derive the PNG path for a source SVG.
///
/// `icons/home.svg` + `"@2x"` -> `icons/home@2x.png`, and with `orange` set
/// -> `icons/home-orange@2x.png`. The directory part is kept as is.
pub fn output_path(relative_svg: &Path, suffix: &str, orange: bool) -> PathBuf {
    let stem = relative_svg
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let marker = if orange { ORANGE_MARKER } else { "" };

    relative_svg.with_file_name(format!("{stem}{marker}{suffix}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_inserted_before_extension() {
        let svg = Path::new("icons/home.svg");
        assert_eq!(output_path(svg, "", false), PathBuf::from("icons/home.png"));
        assert_eq!(output_path(svg, "@2x", false), PathBuf::from("icons/home@2x.png"));
        assert_eq!(
            output_path(svg, "@2x", true),
            PathBuf::from("icons/home-orange@2x.png")
        );
        assert_eq!(output_path(svg, "", true), PathBuf::from("icons/home-orange.png"));
    }

    #[test]
    fn test_nested_directories_mirrored() {
        let svg = Path::new("tab/deep/map-pin.svg");
        assert_eq!(
            output_path(svg, "@3x", false),
            PathBuf::from("tab/deep/map-pin@3x.png")
        );
    }

    #[test]
    fn test_root_level_and_dotted_names() {
        assert_eq!(
            output_path(Path::new("truck.svg"), "@2x", true),
            PathBuf::from("truck-orange@2x.png")
        );
        assert_eq!(
            output_path(Path::new("icon.v2.svg"), "", false),
            PathBuf::from("icon.v2.png")
        );
    }

    #[test]
    fn test_deterministic() {
        let svg = Path::new("icons/feedback.svg");
        assert_eq!(output_path(svg, "@2x", true), output_path(svg, "@2x", true));
    }
}
